pub mod model;

pub use model::TranslationOutcome;
