use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::event::{EventArgs, EventKind};
use crate::value::{Record, Value};

use super::{SynthesizerState, VoiceInfo};

/// The events a synthesis engine raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum SynthesizerEvent {
    VisemeReached,
    PhonemeReached,
    SpeakCompleted,
    SpeakProgress,
    SpeakStarted,
    StateChanged,
    VoiceChanged,
}

impl EventKind for SynthesizerEvent {}

/// The arguments of the events a synthesis engine raises.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SynthesizerEventArgs {
    VisemeReached {
        viseme: i32,
    },
    PhonemeReached {
        phoneme: String,
    },
    SpeakCompleted {
        error: Option<String>,
        cancelled: bool,
    },
    SpeakProgress {
        text: String,
    },
    SpeakStarted,
    StateChanged {
        previous_state: SynthesizerState,
        state: SynthesizerState,
    },
    VoiceChanged {
        voice: Option<VoiceInfo>,
    },
}

impl EventArgs for SynthesizerEventArgs {
    type Kind = SynthesizerEvent;

    fn kind(&self) -> SynthesizerEvent {
        match self {
            Self::VisemeReached { .. } => SynthesizerEvent::VisemeReached,
            Self::PhonemeReached { .. } => SynthesizerEvent::PhonemeReached,
            Self::SpeakCompleted { .. } => SynthesizerEvent::SpeakCompleted,
            Self::SpeakProgress { .. } => SynthesizerEvent::SpeakProgress,
            Self::SpeakStarted => SynthesizerEvent::SpeakStarted,
            Self::StateChanged { .. } => SynthesizerEvent::StateChanged,
            Self::VoiceChanged { .. } => SynthesizerEvent::VoiceChanged,
        }
    }

    fn payload(&self) -> Vec<Value> {
        let type_name: &'static str = self.kind().into();
        let record = match self {
            Self::VisemeReached { viseme } => Record::new(type_name).with("viseme", *viseme),
            Self::PhonemeReached { phoneme } => {
                Record::new(type_name).with("phoneme", phoneme.as_str())
            }
            Self::SpeakCompleted { error, cancelled } => Record::new(type_name)
                .with("error", error.as_deref().unwrap_or_default())
                .with("cancelled", *cancelled),
            Self::SpeakProgress { text } => Record::new(type_name).with("text", text.as_str()),
            Self::SpeakStarted => return vec![],
            Self::StateChanged { previous_state, state } => Record::new(type_name)
                .with("previous_state", *previous_state)
                .with("state", *state),
            // The voice itself is the payload
            Self::VoiceChanged { voice } => return vec![voice.as_ref().map(Record::from).into()],
        };
        vec![record.into()]
    }
}
