//! Speech recognition: the [`SpeechRecognizer`] facade and the grammars it recognizes.

mod engine;
mod event;
mod grammar;
mod phrase;
mod recognizer;

pub use engine::{CompareOptions, RecognitionEngine, RecognizeMode, RecognizerTimeout, SettingValue};
pub use event::{AudioSignalProblem, AudioState, Completion, RecognizerEvent, RecognizerEventArgs};
pub use grammar::{
    Grammar, GrammarBuilder, GrammarBuilderMethod, GrammarElement, GrammarProperty, RepeatRange,
    SubsetMatchingMode,
};
pub use phrase::{RecognitionResult, RecognizedPhrase, RecognizerInfo};
pub use recognizer::{installed_recognizers, RecognizerMethod, RecognizerProperty, SpeechRecognizer};
