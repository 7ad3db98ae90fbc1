use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::Result;

use super::{EventArgs, EventSource, Handler};

/// A set of multicast events, one per event kind.
///
/// This is the building block for engine implementations: attach and detach handlers per kind,
/// and [`emit`](Multicast::emit) event arguments to every handler attached to the matching kind.
/// Handlers are invoked outside the internal lock, so they are free to attach or detach handlers
/// themselves.
pub struct Multicast<A: EventArgs> {
    handlers: Mutex<HashMap<A::Kind, Vec<Handler<A>>>>,
}

impl<A: EventArgs> Multicast<A> {
    /// Constructs a multicast with no attached handlers.
    pub fn new() -> Self {
        Self {
            handlers: Mutex::new(HashMap::new()),
        }
    }

    /// Attaches a handler. Attaching the same handler twice means it will be called twice.
    pub fn attach(&self, kind: A::Kind, handler: Handler<A>) {
        self.lock().entry(kind).or_default().push(handler);
    }

    /// Detaches one instance of the given handler. Returns `false` if it was not attached.
    pub fn detach(&self, kind: A::Kind, handler: &Handler<A>) -> bool {
        let mut handlers = self.lock();
        let list = match handlers.get_mut(&kind) {
            Some(list) => list,
            None => return false,
        };
        match list.iter().position(|h| same_handler(h, handler)) {
            Some(pos) => {
                list.remove(pos);
                if list.is_empty() {
                    handlers.remove(&kind);
                }
                true
            }
            None => false,
        }
    }

    /// The number of handlers attached to the given kind.
    pub fn handler_count(&self, kind: A::Kind) -> usize {
        self.lock().get(&kind).map_or(0, Vec::len)
    }

    /// Calls every handler attached to the kind of `args`, in the order they were attached.
    /// Returns the number of handlers called.
    pub fn emit(&self, args: &A) -> usize {
        let snapshot = match self.lock().get(&args.kind()) {
            Some(list) => list.clone(),
            None => return 0,
        };
        for handler in snapshot.iter() {
            handler(args);
        }
        snapshot.len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<A::Kind, Vec<Handler<A>>>> {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A: EventArgs> Default for Multicast<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: EventArgs> EventSource<A> for Multicast<A> {
    fn attach(&self, kind: A::Kind, handler: Handler<A>) -> Result<()> {
        Multicast::attach(self, kind, handler);
        Ok(())
    }

    fn detach(&self, kind: A::Kind, handler: &Handler<A>) -> Result<bool> {
        Ok(Multicast::detach(self, kind, handler))
    }
}

fn same_handler<A>(left: &Handler<A>, right: &Handler<A>) -> bool {
    Arc::as_ptr(left) as *const () == Arc::as_ptr(right) as *const ()
}
