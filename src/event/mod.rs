//! Bridging between native multicast events and script callbacks.

use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::Arc;

use strum::IntoEnumIterator;

use crate::dispatch::Args;
use crate::value::{from_ordinal, Callback, Value};
use crate::{Error, Result};

mod multicast;
mod registry;

pub use multicast::Multicast;
pub use registry::EventRegistry;

/// A native event handler, as attached to an engine.
pub type Handler<A> = Arc<dyn Fn(&A) + Send + Sync>;

/// A closed set of event categories raised by one kind of engine.
///
/// Scripts name an event kind either by its position in the declaration order, or by its name,
/// ignoring case.
pub trait EventKind:
    Copy + Eq + Hash + Debug + FromStr + IntoEnumIterator + Send + Sync + 'static
{
    /// Reads an event kind from an operation argument.
    fn from_arg(object_type: &'static str, args: &Args<'_>, index: usize) -> Result<Self> {
        let undefined = |event: String| Error::UndefinedEvent {
            object_type,
            event,
        };
        match args.required(index)? {
            Value::Number(n) => from_ordinal(*n).ok_or_else(|| undefined(n.to_string())),
            Value::String(s) => s.parse().map_err(|_| undefined(s.clone())),
            _ => Err(args.invalid(index, "an event kind")),
        }
    }
}

/// The arguments of a native event.
pub trait EventArgs: Send + Sync + 'static {
    /// The kind of event these arguments belong to.
    type Kind: EventKind;

    /// Returns the kind of event these arguments belong to.
    fn kind(&self) -> Self::Kind;

    /// Translates the arguments into the values a script callback is invoked with.
    fn payload(&self) -> Vec<Value>;
}

/// A native object that raises multicast events.
pub trait EventSource<A: EventArgs> {
    /// Attaches a handler to the given event.
    fn attach(&self, kind: A::Kind, handler: Handler<A>) -> Result<()>;

    /// Detaches one instance of the handler from the given event. Returns `false` if the handler
    /// was not attached.
    fn detach(&self, kind: A::Kind, handler: &Handler<A>) -> Result<bool>;
}

/// The script-facing subscriptions of one facade.
pub(crate) struct Subscriptions<A: EventArgs> {
    object_type: &'static str,
    registry: EventRegistry<A::Kind, Callback, Handler<A>>,
}

impl<A: EventArgs> Subscriptions<A> {
    pub fn new(object_type: &'static str) -> Self {
        Self {
            object_type,
            registry: EventRegistry::new(),
        }
    }

    /// Attaches a new native handler that forwards to `callback`, and registers it.
    pub fn subscribe<S>(&self, source: &S, kind: A::Kind, callback: Callback) -> Result<()>
    where
        S: EventSource<A> + ?Sized,
    {
        let handler = self.forwarder(callback.clone());
        source.attach(kind, handler.clone())?;
        tracing::debug!(object_type = self.object_type, ?kind, callback = callback.name(), "subscribed");
        self.registry.register(kind, callback, handler);
        Ok(())
    }

    /// Detaches the handler registered for `callback`. Returns `false` if there is none.
    pub fn unsubscribe<S>(&self, source: &S, kind: A::Kind, callback: &Callback) -> Result<bool>
    where
        S: EventSource<A> + ?Sized,
    {
        let handler = match self.registry.try_remove(kind, callback) {
            Some(handler) => handler,
            None => {
                tracing::debug!(object_type = self.object_type, ?kind, "callback not subscribed");
                return Ok(false);
            }
        };
        match source.detach(kind, &handler) {
            Ok(detached) => {
                tracing::debug!(object_type = self.object_type, ?kind, detached, "unsubscribed");
                Ok(detached)
            }
            Err(err) => {
                // Still attached, so keep track of it
                self.registry.restore(kind, callback.clone(), handler);
                Err(err)
            }
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    fn forwarder(&self, callback: Callback) -> Handler<A> {
        let object_type = self.object_type;
        Arc::new(move |args: &A| {
            if let Err(err) = callback.invoke(&args.payload()) {
                tracing::warn!(
                    object_type,
                    kind = ?args.kind(),
                    callback = callback.name(),
                    error = %err,
                    "event callback failed"
                );
            }
        })
    }
}
