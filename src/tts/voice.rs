use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::value::{to_ordinal, Record, Value};

/// The age group of a voice. Crosses into scripts as its numeric value, in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum VoiceAge {
    #[default]
    NotSet = 0,
    Child = 10,
    Teen = 15,
    Adult = 30,
    Senior = 65,
}

impl From<VoiceAge> for Value {
    fn from(source: VoiceAge) -> Self {
        (source as i32).into()
    }
}

/// The gender of a voice. Crosses into scripts as its ordinal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum VoiceGender {
    #[default]
    NotSet,
    Male,
    Female,
    Neutral,
}

impl From<VoiceGender> for Value {
    fn from(source: VoiceGender) -> Self {
        to_ordinal(&source).into()
    }
}

/// Describes a voice a synthesis engine can speak with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoiceInfo {
    /// The name used to select the voice
    pub name: String,
    /// The engine-specific identifier of the voice
    pub id: String,
    #[allow(missing_docs)]
    pub gender: VoiceGender,
    #[allow(missing_docs)]
    pub age: VoiceAge,
    /// The culture the voice speaks, e.g. `en-US`
    pub culture: String,
    #[allow(missing_docs)]
    pub description: String,
}

impl VoiceInfo {
    /// Creates a description with the given name and no other attributes.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl From<&VoiceInfo> for Record {
    fn from(source: &VoiceInfo) -> Self {
        Record::new("VoiceInfo")
            .with("name", source.name.as_str())
            .with("gender", source.gender)
            .with("age", source.age)
            .with("culture", source.culture.as_str())
            .with("description", source.description.as_str())
            .with("id", source.id.as_str())
    }
}

/// A voice installed on the system.
#[derive(Debug, Clone, PartialEq)]
pub struct InstalledVoice {
    #[allow(missing_docs)]
    pub info: VoiceInfo,
    /// Disabled voices cannot be selected and are hidden from scripts
    pub enabled: bool,
}

/// Restricts which installed voices are listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceFilter {
    /// Every installed voice
    All,
    /// Voices speaking the culture of the current thread
    CurrentCulture,
    /// Voices speaking the given culture
    Culture(String),
}

/// What a synthesis engine is currently doing. Crosses into scripts as its ordinal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[allow(missing_docs)]
pub enum SynthesizerState {
    Ready,
    Speaking,
    Paused,
}

impl From<SynthesizerState> for Value {
    fn from(source: SynthesizerState) -> Self {
        to_ordinal(&source).into()
    }
}
