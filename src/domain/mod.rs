pub mod costs;
pub mod pipeline;
pub mod synthesis;
pub mod translation;
