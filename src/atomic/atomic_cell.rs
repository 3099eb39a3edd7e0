/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Counter Cell
//!
//! Provides the [`AtomicCell`] counter primitive: a 64-bit signed integer
//! read, modified, and written as one indivisible hardware operation.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::{
    AtomicI64,
    Ordering,
};

/// Atomic 64-bit signed counter cell.
///
/// A fixed-size integer cell guaranteed to be read, modified, and written as
/// a single indivisible hardware operation under concurrent access from any
/// number of threads. No observer ever sees a partially-updated value, and
/// every compound operation (mutation plus returned value or derived test)
/// is atomic as a unit.
///
/// The cell's storage is owned by whichever scope allocates it; threads share
/// it through `&AtomicCell` or an `Arc<AtomicCell>` handle. The cell itself
/// is the sole synchronization mechanism — no external locking is needed or
/// useful around its operations.
///
/// # Memory Ordering Strategy
///
/// This type uses carefully chosen default memory orderings:
///
/// - **Read operations** (`get`): Use `Acquire` ordering to ensure
///   visibility of writes from other threads.
/// - **Write operations** (`set`): Use `Release` ordering to ensure writes
///   are visible to other threads.
/// - **Counting operations** (`add`, `increment`, the returning and testing
///   variants): Use `Relaxed` ordering. A pure counter synchronizes nothing
///   but its own value; concurrent operations are still serialized into some
///   total order at the hardware level, which is the entire contract. Callers
///   that need the counter to publish *other* memory must use
///   `get()`/`set()` or go through `inner()`.
///
/// Overflow and underflow wrap per two's-complement semantics; they are
/// defined behavior for this type, not errors.
///
/// # Example
///
/// ```rust
/// use prism3_counter::AtomicCell;
/// use std::sync::Arc;
/// use std::thread;
///
/// let cell = Arc::new(AtomicCell::new(0));
/// let mut handles = vec![];
///
/// for _ in 0..10 {
///     let cell = cell.clone();
///     let handle = thread::spawn(move || {
///         for _ in 0..100 {
///             cell.increment();
///         }
///     });
///     handles.push(handle);
/// }
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(cell.get(), 1000);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicCell {
    inner: AtomicI64,
}

impl AtomicCell {
    /// Creates a new counter cell.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_counter::AtomicCell;
    ///
    /// let cell = AtomicCell::new(42);
    /// assert_eq!(cell.get(), 42);
    /// ```
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self {
            inner: AtomicI64::new(value),
        }
    }

    /// Gets the current value.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Acquire` ordering: if another thread performed a `Release`
    /// store, all writes before that store are visible after this load.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn get(&self) -> i64 {
        self.inner.load(Ordering::Acquire)
    }

    /// Sets a new value.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Release` ordering: all writes before this store in the current
    /// thread become visible to any thread that `Acquire`-loads the new
    /// value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    #[inline]
    pub fn set(&self, value: i64) {
        self.inner.store(value, Ordering::Release);
    }

    /// Atomically adds a delta to the cell.
    ///
    /// The read, the addition, and the write execute as one indivisible
    /// hardware transaction; concurrent `add` calls never lose updates.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Relaxed` ordering. See the type-level documentation for the
    /// counting-operation rationale.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_counter::AtomicCell;
    ///
    /// let cell = AtomicCell::new(10);
    /// cell.add(5);
    /// assert_eq!(cell.get(), 15);
    /// ```
    #[inline]
    pub fn add(&self, delta: i64) {
        self.inner.fetch_add(delta, Ordering::Relaxed);
    }

    /// Atomically subtracts a delta from the cell.
    ///
    /// Forwards to `add` with the negated delta. Negation wraps, so
    /// subtracting `i64::MIN` adds `i64::MIN` per two's-complement rules.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to subtract.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_counter::AtomicCell;
    ///
    /// let cell = AtomicCell::new(10);
    /// cell.sub(3);
    /// assert_eq!(cell.get(), 7);
    /// ```
    #[inline]
    pub fn sub(&self, delta: i64) {
        self.add(delta.wrapping_neg());
    }

    /// Atomically adds a delta, returning the value *after* the addition.
    ///
    /// The returned value is computed from the old value the hardware
    /// exchange produced, so it reflects exactly this operation's
    /// post-state — never a stale or interleaved observation.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The new value after adding.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_counter::AtomicCell;
    ///
    /// let cell = AtomicCell::new(10);
    /// assert_eq!(cell.add_and_get(5), 15);
    /// assert_eq!(cell.get(), 15);
    /// ```
    #[inline]
    pub fn add_and_get(&self, delta: i64) -> i64 {
        self.inner.fetch_add(delta, Ordering::Relaxed).wrapping_add(delta)
    }

    /// Atomically adds a delta, returning the value *before* the addition.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The old value before adding.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_counter::AtomicCell;
    ///
    /// let cell = AtomicCell::new(10);
    /// assert_eq!(cell.get_and_add(5), 10);
    /// assert_eq!(cell.get(), 15);
    /// ```
    #[inline]
    pub fn get_and_add(&self, delta: i64) -> i64 {
        self.inner.fetch_add(delta, Ordering::Relaxed)
    }

    /// Atomically subtracts a delta, returning the value after the
    /// subtraction.
    ///
    /// Forwards to `add_and_get` with the negated delta.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to subtract.
    ///
    /// # Returns
    ///
    /// The new value after subtracting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_counter::AtomicCell;
    ///
    /// let cell = AtomicCell::new(10);
    /// assert_eq!(cell.sub_and_get(3), 7);
    /// ```
    #[inline]
    pub fn sub_and_get(&self, delta: i64) -> i64 {
        self.add_and_get(delta.wrapping_neg())
    }

    /// Atomically subtracts a delta and tests whether the result is zero.
    ///
    /// The boolean is derived from the value produced by the subtraction's
    /// own hardware transaction, not from a second load of the cell, so it
    /// cannot race with a concurrent mutation: it is true iff *this*
    /// subtraction brought the cell to exactly zero.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to subtract.
    ///
    /// # Returns
    ///
    /// `true` iff the new value is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_counter::AtomicCell;
    ///
    /// let cell = AtomicCell::new(5);
    /// assert!(!cell.sub_and_test(3));
    /// assert!(cell.sub_and_test(2));
    /// assert_eq!(cell.get(), 0);
    /// ```
    #[inline]
    pub fn sub_and_test(&self, delta: i64) -> bool {
        self.inner.fetch_sub(delta, Ordering::Relaxed).wrapping_sub(delta) == 0
    }

    /// Atomically increments the cell by 1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_counter::AtomicCell;
    ///
    /// let cell = AtomicCell::new(0);
    /// cell.increment();
    /// assert_eq!(cell.get(), 1);
    /// ```
    #[inline]
    pub fn increment(&self) {
        self.add(1);
    }

    /// Atomically decrements the cell by 1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_counter::AtomicCell;
    ///
    /// let cell = AtomicCell::new(1);
    /// cell.decrement();
    /// assert_eq!(cell.get(), 0);
    /// ```
    #[inline]
    pub fn decrement(&self) {
        self.sub(1);
    }

    /// Atomically decrements the cell by 1 and tests whether the result is
    /// zero.
    ///
    /// Like `sub_and_test`, the boolean reflects the post-state of this
    /// operation's own transaction.
    ///
    /// # Returns
    ///
    /// `true` iff the new value is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_counter::AtomicCell;
    ///
    /// let cell = AtomicCell::new(2);
    /// assert!(!cell.decrement_and_test());
    /// assert!(cell.decrement_and_test());
    /// ```
    #[inline]
    pub fn decrement_and_test(&self) -> bool {
        self.inner.fetch_sub(1, Ordering::Relaxed).wrapping_sub(1) == 0
    }

    /// Atomically increments the cell by 1 and tests whether the result is
    /// zero.
    ///
    /// For an increment the result can only be zero when the old value was
    /// -1 (or after wraparound from `i64::MAX` through the negative range),
    /// so this is primarily useful for counters that count up from a
    /// negative starting point.
    ///
    /// # Returns
    ///
    /// `true` iff the new value is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_counter::AtomicCell;
    ///
    /// let cell = AtomicCell::new(-1);
    /// assert!(cell.increment_and_test());
    /// assert!(!cell.increment_and_test());
    /// ```
    #[inline]
    pub fn increment_and_test(&self) -> bool {
        self.inner.fetch_add(1, Ordering::Relaxed).wrapping_add(1) == 0
    }

    /// Atomically adds a delta and tests whether the result is negative.
    ///
    /// The boolean is derived from the addition's own transaction; it is
    /// true iff the value *this* addition produced is less than zero.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// `true` iff the new value is negative.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_counter::AtomicCell;
    ///
    /// let cell = AtomicCell::new(0);
    /// assert!(cell.add_and_test_negative(-1));
    /// assert!(!cell.add_and_test_negative(1));
    /// ```
    #[inline]
    pub fn add_and_test_negative(&self, delta: i64) -> bool {
        self.inner.fetch_add(delta, Ordering::Relaxed).wrapping_add(delta) < 0
    }

    /// Consumes the cell and returns the contained value.
    ///
    /// # Returns
    ///
    /// The final value.
    #[inline]
    pub fn into_inner(self) -> i64 {
        self.inner.into_inner()
    }

    /// Gets a reference to the underlying standard library atomic type.
    ///
    /// This allows direct access to the standard library's atomic operations
    /// for advanced use cases that require fine-grained control over memory
    /// ordering.
    ///
    /// # Returns
    ///
    /// A reference to the underlying `std::sync::atomic::AtomicI64`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_counter::AtomicCell;
    /// use std::sync::atomic::Ordering;
    ///
    /// let cell = AtomicCell::new(0);
    /// cell.inner().store(42, Ordering::Relaxed);
    /// assert_eq!(cell.inner().load(Ordering::Relaxed), 42);
    /// ```
    #[inline]
    pub fn inner(&self) -> &AtomicI64 {
        &self.inner
    }
}

impl Default for AtomicCell {
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<i64> for AtomicCell {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicCell")
            .field("value", &self.get())
            .finish()
    }
}

impl fmt::Display for AtomicCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
