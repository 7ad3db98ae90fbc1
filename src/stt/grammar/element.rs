use std::ops::{RangeInclusive, RangeToInclusive};

use strum_macros::{EnumIter, IntoStaticStr};

/// One piece of the phrase a grammar accepts. A grammar accepts the sequence of its elements.
#[derive(Debug, Clone, PartialEq)]
pub enum GrammarElement {
    /// A sequence of words
    Phrase(String),
    /// A sequence of words, any matching subset of which is accepted
    Subset(String, SubsetMatchingMode),
    /// A set of alternative phrases to choose from
    Choices(Vec<String>),
    /// A sequence of elements that must be recognized in order
    Group(Vec<GrammarElement>),
    /// An element repeated a certain number of times
    Repeat(RepeatRange, Box<GrammarElement>),
    /// Free-form dictation, optionally restricted to a topic category
    Dictation(Option<String>),
    /// A rule defined by another grammar
    RuleReference {
        /// Location of the referenced grammar
        uri: String,
        /// Name of the rule within that grammar, or its root rule if omitted
        rule: Option<String>,
    },
    /// Any speech, which is not transcribed
    Wildcard,
}

impl GrammarElement {
    /// Creates an element for a sequence of words.
    pub fn phrase<S: Into<String>>(text: S) -> Self {
        Self::Phrase(text.into())
    }

    /// Creates an element that repeats `target` a certain number of times.
    pub fn repeat<R: Into<RepeatRange>>(times: R, target: GrammarElement) -> Self {
        Self::Repeat(times.into(), Box::new(target))
    }
}

/// How a [`GrammarElement::Subset`] matches spoken words against its phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum SubsetMatchingMode {
    /// Any contiguous run of the phrase's words
    #[strum(serialize = "subsequence")]
    Subsequence,
    /// Any of the phrase's words, in their original order
    #[strum(serialize = "ordered-subset")]
    OrderedSubset,
    /// Like [`Subsequence`](Self::Subsequence), but at least one content word must be spoken
    #[strum(serialize = "subsequence-content-required")]
    SubsequenceContentRequired,
    /// Like [`OrderedSubset`](Self::OrderedSubset), but at least one content word must be spoken
    #[strum(serialize = "ordered-subset-content-required")]
    OrderedSubsetContentRequired,
}

/// Specifies the bounds for how many times the target of a [`GrammarElement::Repeat`] can be
/// repeated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepeatRange {
    /// The target must be repeated at least this many times.
    pub min: usize,
    /// The target can be repeated at most this many times.
    pub max: usize,
}

impl From<usize> for RepeatRange {
    fn from(source: usize) -> Self {
        Self {
            min: source,
            max: source,
        }
    }
}

impl From<RangeInclusive<usize>> for RepeatRange {
    fn from(source: RangeInclusive<usize>) -> Self {
        Self {
            min: *source.start(),
            max: *source.end(),
        }
    }
}

impl From<RangeToInclusive<usize>> for RepeatRange {
    fn from(source: RangeToInclusive<usize>) -> Self {
        Self {
            min: 0,
            max: source.end,
        }
    }
}
