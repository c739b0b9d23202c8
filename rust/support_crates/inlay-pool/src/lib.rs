//! A minimal reusable-object pool.
//!
//! [`Pool<T>`] keeps a collection of idle objects so that short-lived borrowers
//! can avoid allocating a fresh object per use. Checkout and return are explicit
//! (`take`/`put`): the pool does not track outstanding objects, it only stores
//! idle ones. Callers are responsible for pairing each `take` with a `put` once
//! the object is no longer in use.
//!
//! # Thread Safety
//!
//! The pool is thread-safe and can be shared across threads. It is intended for
//! strictly sequential borrow/return cycles per object: one object must not be
//! used from two threads at once unless the object itself allows it.

use std::sync::Mutex;

/// A thread-safe store of idle, reusable objects.
pub struct Pool<T> {
    /// Idle objects available for checkout.
    items: Mutex<Vec<T>>,
}

impl<T> Pool<T> {
    /// Creates a new empty pool.
    pub fn new() -> Pool<T> {
        Pool {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Removes and returns an idle object, or `None` if the pool is empty.
    ///
    /// Callers that need an object unconditionally should fall back to
    /// constructing a fresh one when this returns `None`.
    pub fn take(&self) -> Option<T> {
        self.items.lock().unwrap().pop()
    }

    /// Returns an object to the pool for reuse.
    ///
    /// The object is stored as-is; any per-use state must be reset either
    /// before `put` or after the next `take`.
    pub fn put(&self, item: T) {
        self.items.lock().unwrap().push(item);
    }

    /// Returns the number of idle objects currently in the pool.
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    /// Returns `true` if the pool holds no idle objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}
