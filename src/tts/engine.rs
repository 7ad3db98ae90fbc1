use crate::event::EventSource;
use crate::Result;

use super::{InstalledVoice, Rate, SynthesizerEventArgs, SynthesizerState, VoiceFilter, VoiceInfo, Volume};

/// A native speech synthesis engine.
///
/// The engine raises the events described by [`SynthesizerEventArgs`] and must accept handlers
/// being attached and detached from any thread, including from within a handler.
pub trait SynthesisEngine: EventSource<SynthesizerEventArgs> + Send + Sync + 'static {
    /// Creates an engine that outputs to the default audio device.
    fn new() -> Result<Self>
    where
        Self: Sized;

    /// The speaking rate.
    fn rate(&self) -> Result<Rate>;

    /// Changes the speaking rate.
    fn set_rate(&self, rate: Rate) -> Result<()>;

    /// The output volume.
    fn volume(&self) -> Result<Volume>;

    /// Changes the output volume.
    fn set_volume(&self, volume: Volume) -> Result<()>;

    /// What the engine is currently doing.
    fn state(&self) -> Result<SynthesizerState>;

    /// The voice currently speaking, if one is selected.
    fn voice(&self) -> Result<Option<VoiceInfo>>;

    /// Selects the installed voice with the given name.
    fn select_voice(&self, name: &str) -> Result<()>;

    /// Lists the installed voices that pass the filter, enabled or not.
    fn installed_voices(&self, filter: &VoiceFilter) -> Result<Vec<InstalledVoice>>;

    /// Adds a pronunciation lexicon.
    fn add_lexicon(&self, uri: &str, media_type: &str) -> Result<()>;

    /// Removes a previously added lexicon.
    fn remove_lexicon(&self, uri: &str) -> Result<()>;

    /// Speaks the text, blocking until done.
    fn speak(&self, text: &str) -> Result<()>;

    /// Starts speaking the text and raises `SpeakCompleted` when done.
    fn speak_async(&self, text: &str) -> Result<()>;

    /// Pauses speech.
    fn pause(&self) -> Result<()>;

    /// Resumes paused speech.
    fn resume(&self) -> Result<()>;

    /// Cancels every queued and ongoing speak operation.
    fn cancel_all(&self) -> Result<()>;

    /// Releases the engine's native resources.
    fn dispose(&self) -> Result<()>;
}
