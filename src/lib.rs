pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::costs::{CostAnalyzer, CostProjection, ProviderId, WorkloadConfig};
pub use domain::pipeline::{LanguageResult, PipelineApi, PipelineRun, PipelineService};
pub use error::{AppError, AppResult};
pub use infrastructure::config::Config;
pub use infrastructure::logging::init_logging;
