use prompt_playground::api::{
    ChatBackend, InferenceError, InferenceRequest, Playground, RunOutcome, RunState,
    ValidationError,
};
use prompt_playground::core::model::Model;
use prompt_playground::core::session::SessionState;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records every request and answers with a canned reply, or fails when the
/// input is "fail".
#[derive(Clone, Default)]
struct FakeBackend {
    seen: Arc<Mutex<Vec<InferenceRequest>>>,
}

#[async_trait::async_trait]
impl ChatBackend for FakeBackend {
    async fn chat(&self, request: &InferenceRequest) -> Result<String, InferenceError> {
        self.seen.lock().unwrap().push(request.clone());
        if request.user_input == "fail" {
            return Err(InferenceError::Backend("connection refused".into()));
        }
        Ok("Arr! Why did the pirate go to school? To work on the arrrticulation.".into())
    }
}

/// Never answers within a test's patience.
struct StalledBackend;

#[async_trait::async_trait]
impl ChatBackend for StalledBackend {
    async fn chat(&self, _request: &InferenceRequest) -> Result<String, InferenceError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok("too late".into())
    }
}

fn playground() -> (Playground<FakeBackend>, FakeBackend) {
    let backend = FakeBackend::default();
    (Playground::new(SessionState::new(), backend.clone()), backend)
}

#[tokio::test]
async fn pirate_end_to_end() {
    let (mut pg, backend) = playground();
    assert!(pg.session().library.is_empty());

    pg.save("Pirate", "Talk like a pirate.").unwrap();
    pg.select("Pirate").unwrap();
    let outcome = pg.run("Tell me a joke").await.unwrap();

    assert!(outcome.is_success());
    assert!(!outcome.text().is_empty());
    assert_eq!(pg.run_state(), &RunState::Done(outcome.clone()));

    let seen = backend.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].system_prompt, "Talk like a pirate.");
    assert_eq!(seen[0].user_input, "Tell me a joke");
    assert_eq!(seen[0].model, Model::Llama3);
    assert_eq!(seen[0].temperature.value(), 1.0);

    pg.acknowledge();
    assert_eq!(pg.run_state(), &RunState::Idle);
    assert!(pg.run("Another one").await.is_ok());
}

#[tokio::test]
async fn run_without_selection_never_reaches_backend() {
    let (mut pg, backend) = playground();
    pg.save("Pirate", "Talk like a pirate.").unwrap();

    assert_eq!(pg.run("hi").await, Err(ValidationError::NoPromptSelected));
    assert_eq!(pg.run_state(), &RunState::Idle);
    assert!(backend.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn blank_input_is_rejected() {
    let (mut pg, backend) = playground();
    pg.save("p", "be brief").unwrap();
    pg.select("p").unwrap();

    assert_eq!(pg.run("   \n\t").await, Err(ValidationError::EmptyInput));
    assert_eq!(pg.check(""), Err(ValidationError::EmptyInput));
    assert!(backend.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn deleting_selected_prompt_blocks_next_run() {
    let (mut pg, backend) = playground();
    pg.save("a", "A").unwrap();
    pg.save("b", "B").unwrap();
    pg.select("a").unwrap();
    pg.delete("a").unwrap();

    assert_eq!(pg.run("hello").await, Err(ValidationError::NoPromptSelected));
    assert!(backend.seen.lock().unwrap().is_empty());

    pg.select("b").unwrap();
    pg.run("hello").await.unwrap();
    assert_eq!(backend.seen.lock().unwrap()[0].system_prompt, "B");
}

#[tokio::test]
async fn overwritten_prompt_is_used_on_next_run() {
    let (mut pg, backend) = playground();
    pg.save("p", "first").unwrap();
    pg.select("p").unwrap();
    pg.save("p", "second").unwrap();

    pg.run("go").await.unwrap();
    assert_eq!(backend.seen.lock().unwrap()[0].system_prompt, "second");
}

#[tokio::test]
async fn backend_failure_is_a_displayable_outcome() {
    let (mut pg, _backend) = playground();
    pg.save("p", "x").unwrap();
    pg.select("p").unwrap();
    pg.set_model(Model::Mistral);

    let outcome = pg.run("fail").await.unwrap();
    match &outcome {
        RunOutcome::Failed(text) => {
            assert!(text.contains("connection refused"));
            assert!(text.contains("ollama run mistral"));
            assert!(text.contains("disable GPU"));
            assert!(text.contains("smaller model"));
        }
        RunOutcome::Completed(_) => panic!("expected failure"),
    }

    // The session is still usable.
    assert!(pg.run("again").await.unwrap().is_success());
}

#[tokio::test]
async fn settings_flow_into_request() {
    let (mut pg, backend) = playground();
    pg.save("p", "x").unwrap();
    pg.select("p").unwrap();
    pg.set_model(Model::Phi3);
    pg.set_temperature(0.25).unwrap();
    assert!(pg.set_temperature(7.0).is_err());

    pg.run("go").await.unwrap();
    let req = backend.seen.lock().unwrap()[0].clone();
    assert_eq!(req.model, Model::Phi3);
    assert_eq!(req.temperature.value(), 0.25);
}

#[tokio::test]
async fn empty_library_operations_are_informational() {
    let (mut pg, _backend) = playground();
    let err = pg.select("x").unwrap_err();
    assert_eq!(err, ValidationError::EmptyLibrary);
    assert!(err.is_informational());
    assert!(pg.delete("x").unwrap_err().is_informational());
}

#[tokio::test]
async fn abandoned_run_returns_to_idle() {
    let mut pg = Playground::new(SessionState::new(), StalledBackend);
    pg.save("p", "x").unwrap();
    pg.select("p").unwrap();

    let timed_out = tokio::time::timeout(Duration::from_millis(50), pg.run("hi")).await;
    assert!(timed_out.is_err());

    assert_eq!(pg.run_state(), &RunState::Idle);
    assert_eq!(pg.check("hi"), Ok(()));
}
