//! The in-memory prompt library.

/// A named system prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptEntry {
    pub name: String,
    pub content: String,
}

/// Named system prompts, kept in the order they were first saved.
///
/// A name appears at most once. Inserting an existing name replaces its
/// content in place.
#[derive(Debug, Clone, Default)]
pub struct PromptLibrary {
    entries: Vec<PromptEntry>,
}

impl PromptLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `name`. Returns the previous content, if any.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) -> Option<String> {
        let name = name.into();
        let content = content.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => Some(std::mem::replace(&mut entry.content, content)),
            None => {
                self.entries.push(PromptEntry { name, content });
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.content.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes `name` and returns its content.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(pos).content)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PromptEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
