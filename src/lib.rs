// Library exports for the mag-narrative CLI

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod validate;

// Re-export commonly used types
pub use api::ApiClient;
pub use app::Outcome;
pub use catalog::{PromptSpec, RequestType};
pub use config::{AiConfig, Config};
pub use error::NarrativeError;
pub use output::OutputHandler;
