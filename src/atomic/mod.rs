/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Counter Cell
//!
//! Provides an easy-to-use atomic 64-bit counter with sensible default memory
//! orderings. The type wraps `std::sync::atomic::AtomicI64` and exposes the
//! classical resource-counting operation set: plain add/subtract, the
//! returning variants, and the test variants whose boolean is derived from
//! the same indivisible transaction as the mutation.
//!
//! # Features
//!
//! - Automatic memory ordering selection for counting use cases
//! - Compound operations (add-and-return, decrement-and-test, etc.)
//! - Zero-cost abstraction with inline methods
//! - Access to the underlying type via `inner()` for advanced use cases
//!
//! # Author
//!
//! Haixing Hu

mod atomic_cell;

pub use atomic_cell::AtomicCell;
