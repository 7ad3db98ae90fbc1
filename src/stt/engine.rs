use std::time::Duration;

use strum_macros::EnumIter;

use crate::event::EventSource;
use crate::value::Value;
use crate::Result;

use super::{
    AudioState, Grammar, RecognitionResult, RecognizerEventArgs, RecognizerInfo,
};

/// A native speech recognition engine.
///
/// The engine raises the events described by [`RecognizerEventArgs`] and must accept handlers
/// being attached and detached from any thread, including from within a handler. Every method
/// takes `&self`; the engine is expected to synchronize internally.
pub trait RecognitionEngine: EventSource<RecognizerEventArgs> + Send + Sync + 'static {
    /// Creates an engine for the given culture, or the system default engine.
    fn new(culture: Option<&str>) -> Result<Self>
    where
        Self: Sized;

    /// Lists the recognition engines installed on the system.
    fn installed_recognizers() -> Result<Vec<RecognizerInfo>>
    where
        Self: Sized;

    /// Configures the engine to listen to the default recording device.
    fn set_input_to_default_audio_device(&self) -> Result<()>;

    /// Describes this engine.
    fn recognizer_info(&self) -> Result<RecognizerInfo>;

    /// The current level of the audio input, in the interval [0, 100].
    fn audio_level(&self) -> Result<i32>;

    /// The current state of the audio input.
    fn audio_state(&self) -> Result<AudioState>;

    /// Reads one of the engine's timeouts.
    fn timeout(&self, which: RecognizerTimeout) -> Result<Duration>;

    /// Changes one of the engine's timeouts.
    fn set_timeout(&self, which: RecognizerTimeout, value: Duration) -> Result<()>;

    /// The maximum number of alternates reported per recognition.
    fn max_alternates(&self) -> Result<i32>;

    /// Changes the maximum number of alternates reported per recognition.
    fn set_max_alternates(&self, value: i32) -> Result<()>;

    /// The names of the currently loaded grammars.
    fn grammar_names(&self) -> Result<Vec<String>>;

    /// Loads a grammar, blocking until it is ready.
    fn load_grammar(&self, grammar: &Grammar) -> Result<()>;

    /// Starts loading a grammar and raises `LoadGrammarCompleted` when done.
    fn load_grammar_async(&self, grammar: &Grammar) -> Result<()>;

    /// Unloads a previously loaded grammar.
    fn unload_grammar(&self, grammar: &Grammar) -> Result<()>;

    /// Unloads every grammar.
    fn unload_all_grammars(&self) -> Result<()>;

    /// Recognizes the given text as if it had been spoken.
    fn emulate_recognize(
        &self,
        text: &str,
        options: CompareOptions,
    ) -> Result<Option<RecognitionResult>>;

    /// Starts an emulated recognition and raises `EmulateRecognizeCompleted` when done.
    fn emulate_recognize_async(&self, text: &str, options: CompareOptions) -> Result<()>;

    /// Blocks until a phrase is recognized, the input ends, or the timeout expires.
    fn recognize(&self, timeout: Option<Duration>) -> Result<Option<RecognitionResult>>;

    /// Starts recognizing in the background.
    fn recognize_async(&self, mode: RecognizeMode) -> Result<()>;

    /// Stops background recognition immediately, discarding partial input.
    fn recognize_async_cancel(&self) -> Result<()>;

    /// Stops background recognition after the current phrase.
    fn recognize_async_stop(&self) -> Result<()>;

    /// Asks the engine to pause so it can be reconfigured, raising `RecognizerUpdateReached`.
    fn request_recognizer_update(&self) -> Result<()>;

    /// Reads an engine-specific setting.
    fn query_setting(&self, name: &str) -> Result<Option<SettingValue>>;

    /// Changes an engine-specific setting.
    fn update_setting(&self, name: &str, value: SettingValue) -> Result<()>;

    /// Releases the engine's native resources.
    fn dispose(&self) -> Result<()>;
}

/// Selects one of the timeouts of a recognition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognizerTimeout {
    /// How long non-speech input may last before recognition finishes
    Babble,
    /// Silence after an unambiguous phrase before it is finalized
    EndSilence,
    /// Silence after an ambiguous phrase before it is finalized
    EndSilenceAmbiguous,
    /// How long only silence may be heard before recognition finishes
    InitialSilence,
}

/// Whether background recognition stops after the first phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[allow(missing_docs)]
pub enum RecognizeMode {
    Single,
    Multiple,
}

/// Flags controlling how emulated input is compared against grammar phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompareOptions(pub u32);

#[allow(missing_docs)]
impl CompareOptions {
    pub const NONE: Self = Self(0);
    pub const IGNORE_CASE: Self = Self(0x1);
    pub const IGNORE_NON_SPACE: Self = Self(0x2);
    pub const IGNORE_SYMBOLS: Self = Self(0x4);
    pub const IGNORE_KANA_TYPE: Self = Self(0x8);
    pub const IGNORE_WIDTH: Self = Self(0x10);
    pub const ORDINAL_IGNORE_CASE: Self = Self(0x1000_0000);
    pub const STRING_SORT: Self = Self(0x2000_0000);
    pub const ORDINAL: Self = Self(0x4000_0000);

    /// Returns `true` if every flag in `other` is also set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// The value of an engine-specific setting.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SettingValue {
    Int(i32),
    Text(String),
}

impl From<SettingValue> for Value {
    fn from(source: SettingValue) -> Self {
        match source {
            SettingValue::Int(i) => i.into(),
            SettingValue::Text(s) => s.into(),
        }
    }
}
