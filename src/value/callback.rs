use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::Result;

use super::Value;

type CallbackFn = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

/// A reference to a script-level callback.
///
/// Callbacks compare by identity: two clones of the same callback are equal, but two callbacks
/// created separately are not, even if they were created from identical closures.
#[derive(Clone)]
pub struct Callback {
    name: Arc<str>,
    func: Arc<CallbackFn>,
}

impl Callback {
    /// Wraps a closure as an anonymous callback.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self::named("anonymous", func)
    }

    /// Wraps a closure as a callback with the given name. The name is used for diagnostics only.
    pub fn named<S, F>(name: S, func: F) -> Self
    where
        S: Into<Arc<str>>,
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// The diagnostic name of the callback.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the callback with the given arguments.
    pub fn invoke(&self, args: &[Value]) -> Result<Value> {
        (self.func)(args)
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.func) as *const ()
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Callback {}

impl Hash for Callback {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({} @ {:p})", self.name, self.addr())
    }
}
