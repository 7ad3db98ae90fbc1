use crate::value::{Record, Value};

/// One candidate transcription of recognized speech.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedPhrase {
    /// The recognized text
    pub text: String,
    /// The name of the grammar the phrase was matched against, if known
    pub grammar: Option<String>,
    /// The engine's confidence in the phrase, usually in the interval [0, 1]
    pub confidence: f32,
}

impl RecognizedPhrase {
    /// Creates a phrase with no grammar and full confidence.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            grammar: None,
            confidence: 1.0,
        }
    }
}

impl From<&RecognizedPhrase> for Record {
    fn from(source: &RecognizedPhrase) -> Self {
        Record::new("RecognizedPhrase")
            .with("text", source.text.as_str())
            .with("grammar", source.grammar.as_deref().unwrap_or_default())
            .with("confidence", source.confidence)
    }
}

/// The outcome of a recognition: the best phrase and its alternates.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    /// The best candidate
    pub phrase: RecognizedPhrase,
    /// All candidates the engine considered, best first
    pub alternates: Vec<RecognizedPhrase>,
}

impl From<RecognizedPhrase> for RecognitionResult {
    fn from(phrase: RecognizedPhrase) -> Self {
        Self {
            alternates: vec![phrase.clone()],
            phrase,
        }
    }
}

impl From<&RecognitionResult> for Record {
    fn from(source: &RecognitionResult) -> Self {
        let alternates: Value =
            source.alternates.iter().map(|alt| Value::Record(alt.into())).collect();
        Record::new("RecognitionResult")
            .with("text", source.phrase.text.as_str())
            .with("grammar", source.phrase.grammar.as_deref().unwrap_or_default())
            .with("confidence", source.phrase.confidence)
            .with("alternates", alternates)
    }
}

pub(crate) fn result_value(result: Option<&RecognitionResult>) -> Value {
    result.map(Record::from).into()
}

/// Describes an installed recognition engine.
#[derive(Debug, Clone, PartialEq, Default)]
#[allow(missing_docs)]
pub struct RecognizerInfo {
    pub name: String,
    pub id: String,
    pub culture: String,
    pub description: String,
}

impl From<&RecognizerInfo> for Record {
    fn from(source: &RecognizerInfo) -> Self {
        Record::new("RecognizerInfo")
            .with("name", source.name.as_str())
            .with("id", source.id.as_str())
            .with("culture", source.culture.as_str())
            .with("description", source.description.as_str())
    }
}
