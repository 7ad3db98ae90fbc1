use std::sync::{Mutex, MutexGuard, PoisonError};

use strum_macros::{EnumString, IntoStaticStr};

use crate::dispatch::{Args, Facade, NoMembers};
use crate::value::{Object, Value};
use crate::{Error, Result};

mod builder;
mod element;
mod srgs;

pub use builder::{GrammarBuilder, GrammarBuilderMethod};
pub use element::{GrammarElement, RepeatRange, SubsetMatchingMode};

/// A set of phrases that can be recognized, ready to be loaded into a recognition engine.
///
/// The phrases are fixed when the grammar is created from a [`GrammarBuilder`]; later appends to
/// the builder do not affect the grammar. The remaining settings can be changed at any time, and
/// the engine reads them when the grammar is loaded.
pub struct Grammar {
    culture: Option<String>,
    elements: Vec<GrammarElement>,
    state: Mutex<GrammarState>,
}

struct GrammarState {
    enabled: bool,
    loaded: bool,
    name: String,
    priority: i32,
    weight: f32,
}

/// The properties of [`Grammar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum GrammarProperty {
    Enabled,
    Loaded,
    Name,
    Priority,
    RuleName,
    Weight,
}

impl Grammar {
    /// Creates a grammar from the elements the builder holds right now.
    pub fn new<S: Into<String>>(builder: &GrammarBuilder, name: S) -> Self {
        Self {
            culture: builder.culture().map(str::to_string),
            elements: builder.elements(),
            state: Mutex::new(GrammarState {
                enabled: true,
                loaded: false,
                name: name.into(),
                priority: 0,
                weight: 1.0,
            }),
        }
    }

    /// Creates the facade from script constructor arguments: a `GrammarBuilder` and an optional
    /// name.
    pub fn create(args: &[Value]) -> Result<Self> {
        let args = Args::new("Grammar", args);
        let builder = args.object::<GrammarBuilder>(0)?;
        Ok(Self::new(builder, args.opt_string(1)?.unwrap_or_default()))
    }

    /// The culture the grammar is written in, if one was given.
    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }

    /// The elements whose sequence the grammar accepts.
    pub fn elements(&self) -> &[GrammarElement] {
        &self.elements
    }

    /// Whether the engine should recognize phrases from this grammar.
    pub fn enabled(&self) -> bool {
        self.lock().enabled
    }

    /// Enables or disables recognition of phrases from this grammar.
    pub fn set_enabled(&self, enabled: bool) {
        self.lock().enabled = enabled;
    }

    /// Whether the grammar is loaded into a recognizer.
    pub fn loaded(&self) -> bool {
        self.lock().loaded
    }

    pub(crate) fn set_loaded(&self, loaded: bool) {
        self.lock().loaded = loaded;
    }

    /// The name of the grammar.
    pub fn name(&self) -> String {
        self.lock().name.clone()
    }

    /// Renames the grammar.
    pub fn set_name<S: Into<String>>(&self, name: S) {
        self.lock().name = name.into();
    }

    /// The priority used to resolve phrases accepted by more than one grammar.
    pub fn priority(&self) -> i32 {
        self.lock().priority
    }

    /// Changes the priority of the grammar.
    pub fn set_priority(&self, priority: i32) {
        self.lock().priority = priority;
    }

    /// The relative weight of the grammar.
    pub fn weight(&self) -> f32 {
        self.lock().weight
    }

    /// Changes the relative weight of the grammar.
    pub fn set_weight(&self, weight: f32) {
        self.lock().weight = weight;
    }

    /// The id of the rule recognition starts from.
    pub fn rule_name(&self) -> &'static str {
        srgs::ROOT_RULE
    }

    /// Renders the grammar as an SRGS 1.0 XML document.
    pub fn srgs(&self) -> Result<String> {
        srgs::render(self.culture(), &self.elements)
    }

    fn lock(&self) -> MutexGuard<'_, GrammarState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Facade for Grammar {
    const OBJECT_TYPE: &'static str = "Grammar";
    type Method = NoMembers;
    type Property = GrammarProperty;

    fn invoke(&self, _this: &Object, method: NoMembers, _: Args<'_>) -> Result<Value> {
        match method {}
    }

    fn property(&self, property: GrammarProperty) -> Result<Value> {
        Ok(match property {
            GrammarProperty::Enabled => self.enabled().into(),
            GrammarProperty::Loaded => self.loaded().into(),
            GrammarProperty::Name => self.name().into(),
            GrammarProperty::Priority => self.priority().into(),
            GrammarProperty::RuleName => self.rule_name().into(),
            GrammarProperty::Weight => self.weight().into(),
        })
    }

    fn set_property(&self, property: GrammarProperty, value: Value) -> Result<()> {
        let name: &'static str = property.into();
        let values = [value];
        let args = Args::new(name, &values);
        match property {
            GrammarProperty::Enabled => self.set_enabled(args.bool(0)?),
            GrammarProperty::Name => self.set_name(args.string(0)?),
            GrammarProperty::Priority => self.set_priority(args.int(0)?),
            GrammarProperty::Weight => self.set_weight(args.number(0)? as f32),
            GrammarProperty::Loaded | GrammarProperty::RuleName => {
                return Err(Error::missing_member(Self::OBJECT_TYPE, name))
            }
        }
        Ok(())
    }
}
