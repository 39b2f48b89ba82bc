pub mod config;
pub mod library;
pub mod model;
pub mod session;
