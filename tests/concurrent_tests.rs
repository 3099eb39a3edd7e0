/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_counter::AtomicCell;
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_THREADS: usize = 10;
const ITERATIONS_PER_THREAD: usize = 1000;

// Test concurrent increments: no lost updates under contention
#[test]
fn test_concurrent_increment() {
    let cell = Arc::new(AtomicCell::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let cell = cell.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                cell.increment();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cell.get(), (NUM_THREADS * ITERATIONS_PER_THREAD) as i64);
}

// Test that balanced adds and subtracts return the cell to its start value
#[test]
fn test_concurrent_add_sub_balanced() {
    let cell = Arc::new(AtomicCell::new(500));
    let mut handles = vec![];

    for i in 0..NUM_THREADS {
        let cell = cell.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                if i % 2 == 0 {
                    cell.add(3);
                } else {
                    cell.sub(3);
                }
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cell.get(), 500);
}

// Test that add_and_get hands every thread a distinct post-value: the
// hardware serializes the additions into some total order, so the returned
// values must be exactly 1..=NUM_THREADS with no duplicates
#[test]
fn test_concurrent_add_and_get_distinct() {
    let cell = Arc::new(AtomicCell::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let cell = cell.clone();
        let handle = thread::spawn(move || cell.add_and_get(1));
        handles.push(handle);
    }

    let mut observed: Vec<i64> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    observed.sort_unstable();

    let expected: Vec<i64> = (1..=NUM_THREADS as i64).collect();
    assert_eq!(observed, expected);
}

// Test that exactly one thread observes the zero crossing: the flag derives
// from each subtraction's own transaction, never from a separate read
#[test]
fn test_sub_and_test_single_winner() {
    let cell = Arc::new(AtomicCell::new(NUM_THREADS as i64));
    let winners = Arc::new(AtomicUsize::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let cell = cell.clone();
        let winners = winners.clone();
        let handle = thread::spawn(move || {
            if cell.sub_and_test(1) {
                winners.fetch_add(1, Ordering::Relaxed);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cell.get(), 0);
    assert_eq!(winners.load(Ordering::Relaxed), 1);
}

// Same single-winner property for decrement_and_test
#[test]
fn test_decrement_and_test_single_winner() {
    let cell = Arc::new(AtomicCell::new(NUM_THREADS as i64));
    let winners = Arc::new(AtomicUsize::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let cell = cell.clone();
        let winners = winners.clone();
        let handle = thread::spawn(move || {
            if cell.decrement_and_test() {
                winners.fetch_add(1, Ordering::Relaxed);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cell.get(), 0);
    assert_eq!(winners.load(Ordering::Relaxed), 1);
}

// Test barrier synchronization with simultaneous increments
#[test]
fn test_barrier_sync() {
    let cell = Arc::new(AtomicCell::new(0));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let cell = cell.clone();
        let barrier = barrier.clone();
        let handle = thread::spawn(move || {
            // All threads wait at the barrier
            barrier.wait();
            // Then all increment simultaneously
            cell.increment();
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cell.get(), NUM_THREADS as i64);
}

// Smoke scenario: 15 workers, one increment each, final value 15
#[test]
fn test_fifteen_workers_one_increment_each() {
    let cell = Arc::new(AtomicCell::new(0));
    let mut handles = vec![];

    for _ in 0..15 {
        let cell = cell.clone();
        let handle = thread::spawn(move || {
            cell.increment();
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cell.get(), 15);
}
