//! # Watchable values
//!
//! [`Watchable<T>`] wraps a shared value and hands out poll-based
//! [`Watcher`]s. Stores publish by mutating the value (which bumps a
//! version counter); any number of simultaneously-mounted surfaces watch
//! the same store and re-pull derived state when the version moves.
//!
//! This is the explicit stand-in for a UI framework's implicit
//! reactivity: publish on mutation, subscribers re-pull. Watchers are
//! poll-based rather than push-based, so the type stays free of any async
//! runtime and works equally from sync code.

// Lock poisoning only happens if a writer panicked mid-mutation, which is
// unrecoverable here; expect() is the accepted handling for it.
#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

struct Inner<T> {
    value: RwLock<T>,
    version: AtomicU64,
}

/// A shared value that surfaces can watch for changes.
///
/// Cloning a `Watchable` clones the handle, not the value: all clones see
/// and mutate the same state. Mutation happens in-place under the write
/// lock via [`Watchable::update`], so a read can never observe a
/// half-applied change.
pub struct Watchable<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Watchable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Watchable<T> {
    /// Wrap an initial value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(value),
                version: AtomicU64::new(0),
            }),
        }
    }

    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.inner
            .value
            .read()
            .expect("watchable lock poisoned")
            .clone()
    }

    /// Read through the current value without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.value.read().expect("watchable lock poisoned");
        f(&guard)
    }

    /// Replace the value and publish a new version.
    pub fn set(&self, value: T) {
        {
            let mut guard = self.inner.value.write().expect("watchable lock poisoned");
            *guard = value;
        }
        self.inner.version.fetch_add(1, Ordering::Release);
    }

    /// Mutate the value in place and publish a new version.
    ///
    /// The closure runs under the write lock, so the mutation is atomic
    /// with respect to every reader and watcher.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut guard = self.inner.value.write().expect("watchable lock poisoned");
            f(&mut guard)
        };
        self.inner.version.fetch_add(1, Ordering::Release);
        result
    }

    /// Version counter, incremented on every `set`/`update`.
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Acquire)
    }

    /// Start watching from the current version.
    ///
    /// The watcher reports only changes published after this call.
    pub fn watch(&self) -> Watcher<T> {
        Watcher {
            inner: Arc::clone(&self.inner),
            seen: self.inner.version.load(Ordering::Acquire),
        }
    }
}

impl<T: Clone + Send + Sync + Default + 'static> Default for Watchable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + Sync + std::fmt::Debug + 'static> std::fmt::Debug for Watchable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watchable")
            .field("value", &self.get())
            .field("version", &self.version())
            .finish()
    }
}

/// A poll-based subscription to a [`Watchable`].
///
/// Rapid successive updates coalesce: `poll` returns the latest value
/// once, not one value per intermediate update.
pub struct Watcher<T> {
    inner: Arc<Inner<T>>,
    seen: u64,
}

impl<T: Clone + Send + Sync + 'static> Watcher<T> {
    /// Whether the source has changed since the last `poll`.
    pub fn changed(&self) -> bool {
        self.inner.version.load(Ordering::Acquire) > self.seen
    }

    /// Pull the new value if the source changed, advancing the cursor.
    pub fn poll(&mut self) -> Option<T> {
        let current = self.inner.version.load(Ordering::Acquire);
        if current > self.seen {
            self.seen = current;
            Some(
                self.inner
                    .value
                    .read()
                    .expect("watchable lock poisoned")
                    .clone(),
            )
        } else {
            None
        }
    }

    /// Current value regardless of whether it changed.
    pub fn get(&self) -> T {
        self.inner
            .value
            .read()
            .expect("watchable lock poisoned")
            .clone()
    }
}
