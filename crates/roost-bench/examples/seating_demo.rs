//! End-to-end seating run example.
//!
//! Demonstrates: generate a synthetic layout → stabilize under both
//! strategies → report counts and timings.

use roost_bench::reference_layout;
use roost_engine::EngineConfig;
use roost_seating::{occupied_seats, stabilize, Strategy};

fn main() {
    println!("=== Roost Seating Example ===\n");

    let layout = reference_layout(42);

    for strategy in [Strategy::Adjacent, Strategy::Visible] {
        let out = stabilize(&layout, strategy, EngineConfig::default())
            .expect("synthetic layout stabilizes");
        println!(
            "{:>8} strategy: {:>5} occupied seats after {:>3} generations ({:>8} us)",
            strategy.to_string(),
            occupied_seats(&out.grid),
            out.generations,
            out.metrics.total_us,
        );
    }

    println!("\nDone.");
}
