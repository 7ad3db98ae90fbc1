use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Remembers which native handler was attached on behalf of which callback.
///
/// The registry is keyed by event kind and callback, and stores the native handler verbatim. The
/// same callback may be registered for the same kind any number of times; each registration is
/// kept separately, in the order it was made.
///
/// [`try_remove`](EventRegistry::try_remove) removes the earliest registration still present for
/// the given kind and callback. Callbacks are compared with `PartialEq`, which for
/// [`Callback`](crate::value::Callback) means by identity.
pub struct EventRegistry<K, C, H> {
    entries: Mutex<HashMap<K, Vec<(C, H)>>>,
}

impl<K: Eq + Hash, C: PartialEq, H> EventRegistry<K, C, H> {
    /// Constructs an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Records that `handler` was attached to `kind` on behalf of `callback`.
    pub fn register(&self, kind: K, callback: C, handler: H) {
        self.lock().entry(kind).or_default().push((callback, handler));
    }

    /// Removes the earliest registration of `callback` for `kind` and returns its handler. Returns
    /// `None`, leaving the registry untouched, if there is no such registration.
    pub fn try_remove(&self, kind: K, callback: &C) -> Option<H> {
        let mut entries = self.lock();
        let list = entries.get_mut(&kind)?;
        let pos = list.iter().position(|(c, _)| c == callback)?;
        let (_, handler) = list.remove(pos);
        if list.is_empty() {
            entries.remove(&kind);
        }
        Some(handler)
    }

    /// Puts back a registration taken out by [`try_remove`](EventRegistry::try_remove), ahead of
    /// any later registrations of the same callback for `kind`.
    pub fn restore(&self, kind: K, callback: C, handler: H) {
        let mut entries = self.lock();
        let list = entries.entry(kind).or_default();
        let pos = list.iter().position(|(c, _)| *c == callback).unwrap_or(list.len());
        list.insert(pos, (callback, handler));
    }

    /// The total number of registrations, across all kinds.
    pub fn len(&self) -> usize {
        self.lock().values().map(Vec::len).sum()
    }

    /// Returns `true` if there are no registrations.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, Vec<(C, H)>>> {
        // No user code runs under this lock, so a poisoned state is still consistent
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K: Eq + Hash, C: PartialEq, H> Default for EventRegistry<K, C, H> {
    fn default() -> Self {
        Self::new()
    }
}
