//! Name-based member dispatch for facades.
//!
//! Each facade declares its operations and properties as closed enumerations. A script names a
//! member with a string, which is resolved into the enumeration exactly once, here. Everything past
//! this boundary works with the typed member identifiers.

use std::any::Any;
use std::fmt::Debug;
use std::str::FromStr;
use std::time::Duration;

use strum::IntoEnumIterator;

use crate::value::{from_ordinal, Callback, Object, Value};
use crate::{Error, Result};

/// A wrapper object that exposes named operations and properties to scripts.
pub trait Facade: Send + Sync + 'static {
    /// The type name reported in errors.
    const OBJECT_TYPE: &'static str;

    /// The closed set of operations.
    type Method: FromStr + Into<&'static str> + Copy + Debug;

    /// The closed set of properties.
    type Property: FromStr + Into<&'static str> + Copy + Debug;

    /// Performs an operation. `this` is the shared object wrapping `self`.
    fn invoke(&self, this: &Object, method: Self::Method, args: Args<'_>) -> Result<Value>;

    /// Reads a property.
    fn property(&self, property: Self::Property) -> Result<Value>;

    /// Writes a property. Read-only properties fail with [`Error::MissingMember`].
    fn set_property(&self, property: Self::Property, value: Value) -> Result<()>;
}

/// The type-erased, string-keyed view of a [`Facade`], as used by [`Object`].
pub trait Instance: Send + Sync {
    /// The type name reported in errors.
    fn object_type(&self) -> &'static str;

    /// Calls the named operation.
    fn call(&self, this: &Object, name: &str, args: &[Value]) -> Result<Value>;

    /// Reads the named property, or binds the named operation to `this`.
    fn get(&self, this: &Object, name: &str) -> Result<Value>;

    /// Writes the named property.
    fn set(&self, name: &str, value: Value) -> Result<()>;

    /// Allows downcasting to the concrete facade.
    fn as_any(&self) -> &dyn Any;
}

impl<F: Facade> Instance for F {
    fn object_type(&self) -> &'static str {
        F::OBJECT_TYPE
    }

    fn call(&self, this: &Object, name: &str, args: &[Value]) -> Result<Value> {
        let method = resolve::<F::Method>(F::OBJECT_TYPE, name)?;
        tracing::trace!(object_type = F::OBJECT_TYPE, ?method, argc = args.len(), "call");
        self.invoke(this, method, Args::new(method.into(), args))
    }

    fn get(&self, this: &Object, name: &str) -> Result<Value> {
        if let Ok(property) = name.parse::<F::Property>() {
            return self.property(property);
        }
        let method: &'static str = resolve::<F::Method>(F::OBJECT_TYPE, name)?.into();
        let object_type = F::OBJECT_TYPE;
        let target = this.downgrade();
        Ok(Callback::named(method, move |args| match target.upgrade() {
            Some(target) => target.call(method, args),
            None => Err(Error::InvalidOperation(format!(
                "{object_type}.{method} called after the object was dropped"
            ))),
        })
        .into())
    }

    fn set(&self, name: &str, value: Value) -> Result<()> {
        let property = resolve::<F::Property>(F::OBJECT_TYPE, name)?;
        self.set_property(property, value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Parses a member name into its typed identifier.
pub fn resolve<T: FromStr>(object_type: &'static str, name: &str) -> Result<T> {
    name.parse().map_err(|_| Error::missing_member(object_type, name))
}

/// Member set for facades that define no operations or no properties.
#[derive(Debug, Clone, Copy)]
pub enum NoMembers {}

impl FromStr for NoMembers {
    type Err = strum::ParseError;

    fn from_str(_: &str) -> std::result::Result<Self, Self::Err> {
        Err(strum::ParseError::VariantNotFound)
    }
}

impl From<NoMembers> for &'static str {
    fn from(source: NoMembers) -> Self {
        match source {}
    }
}

/// The arguments of an operation call, with coercions into native types.
///
/// Every coercion fails with [`Error::MissingArgument`] if the argument is absent, and with
/// [`Error::InvalidArgument`] if it has the wrong type.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    member: &'static str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    /// Wraps the arguments passed to the given member.
    pub fn new(member: &'static str, values: &'a [Value]) -> Self {
        Self {
            member,
            values,
        }
    }

    /// The name of the member being called.
    pub fn member(&self) -> &'static str {
        self.member
    }

    /// The number of arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All the arguments.
    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    /// Borrows an argument, treating `Value::Null` as absent.
    pub fn get(&self, index: usize) -> Option<&'a Value> {
        self.values.get(index).filter(|v| !v.is_null())
    }

    /// Borrows a required argument.
    pub fn required(&self, index: usize) -> Result<&'a Value> {
        self.get(index).ok_or(Error::MissingArgument {
            member: self.member,
            index,
        })
    }

    /// Builds the error for an argument of the wrong type.
    pub fn invalid(&self, index: usize, expected: &'static str) -> Error {
        Error::InvalidArgument {
            member: self.member,
            index,
            expected,
            found: self.values.get(index).map_or("nothing", Value::type_name),
        }
    }

    /// Coerces an argument into a string.
    pub fn string(&self, index: usize) -> Result<&'a str> {
        self.required(index)?.as_str().ok_or_else(|| self.invalid(index, "a string"))
    }

    /// Coerces an optional argument into a string.
    pub fn opt_string(&self, index: usize) -> Result<Option<&'a str>> {
        self.optional(index, Self::string)
    }

    /// Coerces an argument into a number.
    pub fn number(&self, index: usize) -> Result<f64> {
        self.required(index)?.as_number().ok_or_else(|| self.invalid(index, "a number"))
    }

    /// Coerces an argument into an integer, truncating towards zero.
    pub fn int(&self, index: usize) -> Result<i32> {
        Ok(self.number(index)? as i32)
    }

    /// Coerces an argument into a non-negative count.
    pub fn count(&self, index: usize) -> Result<usize> {
        let number = self.number(index)?;
        if number.is_finite() && number >= 0.0 {
            Ok(number as usize)
        } else {
            Err(self.invalid(index, "a non-negative number"))
        }
    }

    /// Coerces an argument into a boolean.
    pub fn bool(&self, index: usize) -> Result<bool> {
        self.required(index)?.as_bool().ok_or_else(|| self.invalid(index, "a bool"))
    }

    /// Coerces an argument, given in milliseconds, into a duration.
    pub fn millis(&self, index: usize) -> Result<Duration> {
        Duration::try_from_secs_f64(self.number(index)? / 1000.0)
            .map_err(|_| self.invalid(index, "a non-negative number of milliseconds"))
    }

    /// Coerces an optional argument, given in milliseconds, into a duration.
    pub fn opt_millis(&self, index: usize) -> Result<Option<Duration>> {
        self.optional(index, Self::millis)
    }

    /// Coerces an argument, given as the ordinal number of a variant, into an enumeration.
    pub fn ordinal<E: IntoEnumIterator>(&self, index: usize) -> Result<E> {
        from_ordinal(self.number(index)?).ok_or_else(|| self.invalid(index, "a valid enum value"))
    }

    /// Coerces an argument into a callback.
    pub fn callback(&self, index: usize) -> Result<&'a Callback> {
        self.required(index)?.as_callback().ok_or_else(|| self.invalid(index, "a callback"))
    }

    /// Coerces an argument into a facade of a specific type.
    pub fn object<F: Facade>(&self, index: usize) -> Result<&'a F> {
        self.required(index)?
            .as_object()
            .and_then(Object::downcast_ref::<F>)
            .ok_or_else(|| self.invalid(index, F::OBJECT_TYPE))
    }

    fn optional<T>(
        &self,
        index: usize,
        coerce: impl FnOnce(&Self, usize) -> Result<T>,
    ) -> Result<Option<T>> {
        match self.get(index) {
            Some(_) => coerce(self, index).map(Some),
            None => Ok(None),
        }
    }
}
