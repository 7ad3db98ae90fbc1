//! Speech synthesis: the [`SpeechSynthesizer`] facade and the engine it forwards to.

mod engine;
mod event;
mod synthesizer;
mod types;
mod voice;

pub use engine::SynthesisEngine;
pub use event::{SynthesizerEvent, SynthesizerEventArgs};
pub use synthesizer::{SpeechSynthesizer, SynthesizerMethod, SynthesizerProperty};
pub use types::{Rate, Volume};
pub use voice::{InstalledVoice, SynthesizerState, VoiceAge, VoiceFilter, VoiceGender, VoiceInfo};
