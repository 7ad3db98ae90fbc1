use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::event::{EventArgs, EventKind};
use crate::value::{to_ordinal, Record, Value};

use super::phrase::result_value;
use super::RecognitionResult;

/// The events a recognition engine raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum RecognizerEvent {
    AudioLevelUpdated,
    AudioSignalProblemOccurred,
    AudioStateChanged,
    EmulateRecognizeCompleted,
    LoadGrammarCompleted,
    RecognizeCompleted,
    RecognizerUpdateReached,
    SpeechDetected,
    SpeechHypothesized,
    SpeechRecognitionRejected,
    SpeechRecognized,
}

impl EventKind for RecognizerEvent {}

/// The state of the audio input of a recognition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[allow(missing_docs)]
pub enum AudioState {
    Stopped,
    Silence,
    Speech,
}

impl From<AudioState> for Value {
    fn from(source: AudioState) -> Self {
        to_ordinal(&source).into()
    }
}

/// A problem the engine detected with its audio input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[allow(missing_docs)]
pub enum AudioSignalProblem {
    None,
    TooNoisy,
    NoSignal,
    TooLoud,
    TooSoft,
    TooFast,
    TooSlow,
}

impl From<AudioSignalProblem> for Value {
    fn from(source: AudioSignalProblem) -> Self {
        to_ordinal(&source).into()
    }
}

/// The outcome shared by the events that report completion of an asynchronous operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Completion {
    /// The error message, if the operation failed
    pub error: Option<String>,
    /// Whether the operation was cancelled
    pub cancelled: bool,
}

impl Completion {
    fn record(&self, type_name: &str) -> Record {
        Record::new(type_name)
            .with("error", self.error.as_deref().unwrap_or_default())
            .with("cancelled", self.cancelled)
    }
}

/// The arguments of the events a recognition engine raises.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum RecognizerEventArgs {
    AudioLevelUpdated {
        audio_level: i32,
    },
    AudioSignalProblemOccurred {
        problem: AudioSignalProblem,
    },
    AudioStateChanged {
        audio_state: AudioState,
    },
    EmulateRecognizeCompleted {
        completion: Completion,
        result: Option<RecognitionResult>,
    },
    LoadGrammarCompleted {
        completion: Completion,
        grammar: String,
    },
    RecognizeCompleted {
        completion: Completion,
        babble_timeout: bool,
        initial_silence_timeout: bool,
        input_stream_ended: bool,
        result: Option<RecognitionResult>,
    },
    RecognizerUpdateReached,
    SpeechDetected,
    SpeechHypothesized(RecognitionResult),
    SpeechRecognitionRejected(RecognitionResult),
    SpeechRecognized(RecognitionResult),
}

impl EventArgs for RecognizerEventArgs {
    type Kind = RecognizerEvent;

    fn kind(&self) -> RecognizerEvent {
        match self {
            Self::AudioLevelUpdated { .. } => RecognizerEvent::AudioLevelUpdated,
            Self::AudioSignalProblemOccurred { .. } => RecognizerEvent::AudioSignalProblemOccurred,
            Self::AudioStateChanged { .. } => RecognizerEvent::AudioStateChanged,
            Self::EmulateRecognizeCompleted { .. } => RecognizerEvent::EmulateRecognizeCompleted,
            Self::LoadGrammarCompleted { .. } => RecognizerEvent::LoadGrammarCompleted,
            Self::RecognizeCompleted { .. } => RecognizerEvent::RecognizeCompleted,
            Self::RecognizerUpdateReached => RecognizerEvent::RecognizerUpdateReached,
            Self::SpeechDetected => RecognizerEvent::SpeechDetected,
            Self::SpeechHypothesized(_) => RecognizerEvent::SpeechHypothesized,
            Self::SpeechRecognitionRejected(_) => RecognizerEvent::SpeechRecognitionRejected,
            Self::SpeechRecognized(_) => RecognizerEvent::SpeechRecognized,
        }
    }

    fn payload(&self) -> Vec<Value> {
        let type_name: &'static str = self.kind().into();
        let record = match self {
            Self::AudioLevelUpdated { audio_level } => {
                Record::new(type_name).with("audio_level", *audio_level)
            }
            Self::AudioSignalProblemOccurred { problem } => {
                Record::new(type_name).with("audio_signal_problem", *problem)
            }
            Self::AudioStateChanged { audio_state } => {
                Record::new(type_name).with("audio_state", *audio_state)
            }
            Self::EmulateRecognizeCompleted { completion, result } => completion
                .record(type_name)
                .with("result", result_value(result.as_ref())),
            Self::LoadGrammarCompleted { completion, grammar } => {
                completion.record(type_name).with("grammar", grammar.as_str())
            }
            Self::RecognizeCompleted {
                completion,
                babble_timeout,
                initial_silence_timeout,
                input_stream_ended,
                result,
            } => completion
                .record(type_name)
                .with("babble_timeout", *babble_timeout)
                .with("initial_silence_timeout", *initial_silence_timeout)
                .with("input_stream_ended", *input_stream_ended)
                .with("result", result_value(result.as_ref())),
            Self::RecognizerUpdateReached | Self::SpeechDetected => return vec![],
            Self::SpeechHypothesized(result)
            | Self::SpeechRecognitionRejected(result)
            | Self::SpeechRecognized(result) => {
                Record::new(type_name).with("result", result_value(Some(result)))
            }
        };
        vec![record.into()]
    }
}
