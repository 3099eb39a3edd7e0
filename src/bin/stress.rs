/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Stress Demo
//!
//! Runs the stock stress workload: 15 workers each observing one shared
//! counter cell once. Prints the cell's size and its value before and after
//! the run. Harness failures are logged rather than escalated to the exit
//! status, so the process always exits 0.

use std::mem;
use std::sync::Arc;

use prism3_counter::{
    AtomicCell,
    StressHarness,
};
use tracing::error;

const NUM_WORKERS: usize = 15;

fn main() {
    tracing_subscriber::fmt().init();

    let cell = Arc::new(AtomicCell::new(0));
    println!(
        "cell value: {} (size: {} bytes)",
        cell.get(),
        mem::size_of::<AtomicCell>()
    );

    let harness = match StressHarness::new(NUM_WORKERS) {
        Ok(harness) => harness,
        Err(err) => {
            error!("failed to configure stress harness: {err}");
            return;
        }
    };

    match harness.run(Arc::clone(&cell)) {
        Ok(report) => {
            if report.failed_joins > 0 {
                error!(failed_joins = report.failed_joins, "some workers failed to join");
            }
            println!("final cell value: {}", report.final_value);
        }
        Err(err) => {
            error!("stress run failed: {err}");
        }
    }
}
