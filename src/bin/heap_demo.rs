//! Binary min-heap demonstration
//!
//! Builds a heap from a list of integers, prints it, removes the minimum and
//! prints it again.
//!
//! # Usage
//!
//! ```bash
//! # Use the built-in list
//! heap-demo
//!
//! # Supply values and drain the heap in sorted order
//! heap-demo --values 10,-3,7,7,0 --drain
//!
//! # Show bulk-build logging
//! RUST_LOG=debug heap-demo
//! ```

use anyhow::Context;
use binary_min_heap::{BinaryMinHeap, HeapConfig, MinHeap};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_VALUES: [i64; 12] = [2, 3, 9, 4, 1, 8, 7, 15, 20, 41, 32, 5];

/// Demonstrate a binary min-heap built from a list of integers
#[derive(Parser)]
#[command(name = "heap-demo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Comma-separated values to build the heap from
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Vec<i64>,

    /// Remove every remaining element and print them in order
    #[arg(short, long)]
    drain: bool,

    /// Number of elements to reserve storage for
    #[arg(short, long, default_value_t = 0)]
    capacity: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let values = if cli.values.is_empty() {
        DEFAULT_VALUES.to_vec()
    } else {
        cli.values
    };

    println!("Demonstrating min-heap binary tree");

    let config = HeapConfig::default().with_initial_capacity(cli.capacity);
    let mut heap = BinaryMinHeap::with_config(&config);
    heap.build_heap(values);
    info!(len = heap.len(), "heap loaded");
    println!("{}", heap);

    let min = heap
        .delete_min()
        .context("cannot remove the minimum of the demo heap")?;
    println!("removed minimum: {}", min);
    println!("{}", heap);

    if cli.drain {
        let sorted = heap.into_sorted_vec();
        println!("drained: {:?}", sorted);
    }

    Ok(())
}
