pub mod error;
pub mod model;
pub mod service;

pub use error::PipelineError;
pub use model::{LanguageResult, PipelineRun};
pub use service::{PipelineApi, PipelineService};
