/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-counter
//!
//! Atomic 64-bit counter primitive with compound test operations and a
//! concurrent stress harness.
//!
//! This crate provides a single fixed-width atomic counter cell,
//! [`AtomicCell`], whose every operation executes as one indivisible hardware
//! transaction, plus the compound primitives classically built on that
//! guarantee (add-and-return, decrement-and-test-zero, add-and-test-negative,
//! etc.), and a [`StressHarness`] that exercises one shared cell from many OS
//! threads.
//!
//! ## Design Goals
//!
//! - **Ease of Use**: Hides memory ordering complexity with reasonable defaults
//! - **Completeness**: Provides the full set of compound counter primitives,
//!   including the test variants whose boolean derives from the same
//!   transaction as the mutation
//! - **Safety**: Guarantees memory safety and thread safety
//! - **Performance**: Zero-cost abstraction with no additional overhead
//! - **Flexibility**: Exposes the underlying type via `inner()` for advanced
//!   users
//!
//! ## Features
//!
//! - 64-bit signed atomic counter type: `AtomicCell`
//! - Compound operations: `add_and_get`, `sub_and_test`, `decrement_and_test`,
//!   `increment_and_test`, `add_and_test_negative`
//! - Stress harness spawning N workers against one shared cell:
//!   `StressHarness`
//!
//! ## Example
//!
//! ```rust
//! use prism3_counter::AtomicCell;
//! use std::sync::Arc;
//! use std::thread;
//!
//! // Basic usage
//! let counter = AtomicCell::new(0);
//! counter.increment();
//! assert_eq!(counter.get(), 1);
//!
//! // Concurrent usage
//! let counter = Arc::new(AtomicCell::new(0));
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let counter = counter.clone();
//!     let handle = thread::spawn(move || {
//!         for _ in 0..100 {
//!             counter.increment();
//!         }
//!     });
//!     handles.push(handle);
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(counter.get(), 1000);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;
pub mod stress;

// Re-export the counter type and the harness surface
pub use atomic::AtomicCell;
pub use stress::{
    StressError,
    StressHarness,
    StressReport,
};
