pub mod model;
pub mod voice;

pub use model::SynthesisOutcome;
pub use voice::{locale_for_language, voice_for_locale};
