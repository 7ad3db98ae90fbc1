use ::tokio::sync::mpsc::{channel, Receiver};

use crate::value::{Callback, Object, Value};
use crate::{Error, Result};

#[cfg_attr(docsrs, doc(cfg(feature = "tokio-events")))]
/// A subscription to one event of a facade, whose payloads can be awaited.
///
/// The subscription goes through the facade's `subscribe_event` and `unsubscribe_event`
/// operations, so it works with any facade that raises events. It is unsubscribed when dropped.
pub struct EventSubscription {
    object: Object,
    kind: Value,
    callback: Callback,
    rx: Receiver<Vec<Value>>,
    active: bool,
}

impl EventSubscription {
    /// Subscribes to the given event kind, buffering up to `buffer` payloads. If the event is
    /// raised while the buffer is full, its payload is silently dropped. A zero `buffer` fails with
    /// [`Error::InvalidOperation`].
    pub fn new<K: Into<Value>>(object: &Object, kind: K, buffer: usize) -> Result<Self> {
        if buffer == 0 {
            return Err(Error::InvalidOperation(
                "event subscription buffer must hold at least one payload".into(),
            ));
        }
        let (tx, rx) = channel::<Vec<Value>>(buffer);
        let callback = Callback::named("event_subscription", move |args| {
            let _ = tx.try_send(args.to_vec());
            Ok(Value::Null)
        });
        let kind = kind.into();
        object.call("subscribe_event", &[kind.clone(), callback.clone().into()])?;
        Ok(Self {
            object: object.clone(),
            kind,
            callback,
            rx,
            active: true,
        })
    }

    /// Completes with the payload of the next event.
    pub async fn recv(&mut self) -> Option<Vec<Value>> {
        self.rx.recv().await
    }

    /// Unsubscribes explicitly, reporting whether the facade still had the subscription.
    pub fn unsubscribe(mut self) -> Result<bool> {
        self.active = false;
        self.detach()
    }

    fn detach(&self) -> Result<bool> {
        let detached = self
            .object
            .call("unsubscribe_event", &[self.kind.clone(), self.callback.clone().into()])?;
        Ok(detached.as_bool().unwrap_or(false))
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if self.active {
            // Failure shouldn't cause panic
            let _ = self.detach();
        }
    }
}
