use std::fmt;
use std::sync::{Arc, Weak};

use crate::dispatch::{Facade, Instance};
use crate::Result;

use super::Value;

/// A shared reference to a facade, as held by a script.
///
/// All member access goes through [`call`](Object::call), [`get`](Object::get), and
/// [`set`](Object::set), which resolve the member name once and fail with
/// [`Error::MissingMember`](crate::Error::MissingMember) if the facade does not define it.
#[derive(Clone)]
pub struct Object(Arc<dyn Instance>);

impl Object {
    /// Moves the facade into a new shared object.
    pub fn new<F: Facade>(facade: F) -> Self {
        Self(Arc::new(facade))
    }

    /// The type name of the wrapped facade.
    pub fn object_type(&self) -> &'static str {
        self.0.object_type()
    }

    /// Calls the named operation.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        self.0.call(self, name, args)
    }

    /// Reads the named property. Reading the name of an operation returns a callback bound to this
    /// object. The callback does not keep the object alive; once the object is dropped, invoking it
    /// fails with [`Error::InvalidOperation`](crate::Error::InvalidOperation).
    pub fn get(&self, name: &str) -> Result<Value> {
        self.0.get(self, name)
    }

    /// Writes the named property.
    pub fn set<V: Into<Value>>(&self, name: &str, value: V) -> Result<()> {
        self.0.set(name, value.into())
    }

    /// Borrows the wrapped facade, if it is of type `F`.
    pub fn downcast_ref<F: Facade>(&self) -> Option<&F> {
        self.0.as_any().downcast_ref()
    }

    pub(crate) fn downgrade(&self) -> WeakObject {
        WeakObject(Arc::downgrade(&self.0))
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

/// A non-owning reference to an [`Object`], held by callbacks bound to one of its operations.
pub(crate) struct WeakObject(Weak<dyn Instance>);

impl WeakObject {
    pub fn upgrade(&self) -> Option<Object> {
        self.0.upgrade().map(Object)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({} @ {:p})", self.object_type(), self.addr())
    }
}
