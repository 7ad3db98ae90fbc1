use std::sync::{Mutex, MutexGuard, PoisonError};

use strum_macros::{EnumString, IntoStaticStr};

use crate::dispatch::{Args, Facade, NoMembers};
use crate::value::{Object, Value};
use crate::{Error, Result};

use super::{GrammarElement, RepeatRange, SubsetMatchingMode};

/// Helper type that accumulates the elements of a grammar, in the order they must be spoken.
///
/// For example, appending the phrase "good" and then the choices "morning" and "evening" describes
/// a grammar that accepts "good morning" and "good evening", but not "good", "morning", or
/// "evening" alone.
///
/// As a facade, every `append_*` operation returns the builder itself, so that calls can be
/// chained.
pub struct GrammarBuilder {
    culture: Option<String>,
    elements: Mutex<Vec<GrammarElement>>,
}

/// The operations of [`GrammarBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum GrammarBuilderMethod {
    AppendChoices,
    AppendDictation,
    AppendDictationCategory,
    AppendGrammar,
    AppendGrammarRepeat,
    AppendPhrase,
    AppendPhraseRepeat,
    AppendRuleReference,
    AppendRuleReferenceRule,
    AppendSubsetMatchingMode,
    AppendWildcard,
}

impl GrammarBuilder {
    /// Constructs an empty builder for the given culture, or for the culture of the engine the
    /// grammar will be loaded into.
    pub fn new(culture: Option<&str>) -> Self {
        Self {
            culture: culture.map(str::to_string),
            elements: Mutex::new(Vec::new()),
        }
    }

    /// Creates the facade from script constructor arguments: an optional culture name.
    pub fn create(args: &[Value]) -> Result<Self> {
        let args = Args::new("GrammarBuilder", args);
        Ok(Self::new(args.opt_string(0)?))
    }

    /// The culture the grammar is written in, if one was given.
    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }

    /// Appends an element to the end of the grammar.
    pub fn append(&self, element: GrammarElement) -> &Self {
        self.lock().push(element);
        self
    }

    /// Returns a copy of the elements appended so far.
    pub fn elements(&self) -> Vec<GrammarElement> {
        self.lock().clone()
    }

    fn append_choices(&self, args: Args) -> Result<()> {
        if args.is_empty() {
            return Err(Error::InvalidOperation(
                "append_choices requires at least one choice".into(),
            ));
        }
        let choices = (0..args.len())
            .map(|i| args.string(i).map(str::to_string))
            .collect::<Result<Vec<_>>>()?;
        self.append(GrammarElement::Choices(choices));
        Ok(())
    }

    fn append_grammar(&self, args: Args, repeat: bool) -> Result<()> {
        // Snapshot first: the other builder may be this one
        let group = GrammarElement::Group(args.object::<GrammarBuilder>(0)?.elements());
        let element = if repeat {
            GrammarElement::Repeat(repeat_range(&args)?, Box::new(group))
        } else {
            group
        };
        self.append(element);
        Ok(())
    }

    fn append_phrase(&self, args: Args, repeat: bool) -> Result<()> {
        let phrase = GrammarElement::phrase(args.string(0)?);
        let element = if repeat {
            GrammarElement::Repeat(repeat_range(&args)?, Box::new(phrase))
        } else {
            phrase
        };
        self.append(element);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<GrammarElement>> {
        self.elements.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn repeat_range(args: &Args) -> Result<RepeatRange> {
    let min = args.count(1)?;
    let max = args.count(2)?;
    if min > max {
        return Err(args.invalid(2, "a maximum no less than the minimum"));
    }
    Ok((min..=max).into())
}

impl Facade for GrammarBuilder {
    const OBJECT_TYPE: &'static str = "GrammarBuilder";
    type Method = GrammarBuilderMethod;
    type Property = NoMembers;

    fn invoke(&self, this: &Object, method: GrammarBuilderMethod, args: Args<'_>) -> Result<Value> {
        use GrammarBuilderMethod::*;
        match method {
            AppendChoices => self.append_choices(args)?,
            AppendDictation => {
                self.append(GrammarElement::Dictation(None));
            }
            AppendDictationCategory => {
                self.append(GrammarElement::Dictation(Some(args.string(0)?.to_string())));
            }
            AppendGrammar => self.append_grammar(args, false)?,
            AppendGrammarRepeat => self.append_grammar(args, true)?,
            AppendPhrase => self.append_phrase(args, false)?,
            AppendPhraseRepeat => self.append_phrase(args, true)?,
            AppendRuleReference => {
                self.append(GrammarElement::RuleReference {
                    uri: args.string(0)?.to_string(),
                    rule: None,
                });
            }
            AppendRuleReferenceRule => {
                self.append(GrammarElement::RuleReference {
                    uri: args.string(0)?.to_string(),
                    rule: Some(args.string(1)?.to_string()),
                });
            }
            AppendSubsetMatchingMode => {
                let mode = args.ordinal::<SubsetMatchingMode>(1)?;
                self.append(GrammarElement::Subset(args.string(0)?.to_string(), mode));
            }
            AppendWildcard => {
                self.append(GrammarElement::Wildcard);
            }
        }
        Ok(this.clone().into())
    }

    fn property(&self, property: NoMembers) -> Result<Value> {
        match property {}
    }

    fn set_property(&self, property: NoMembers, _: Value) -> Result<()> {
        match property {}
    }
}
