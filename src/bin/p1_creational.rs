// Pattern 1: Creational Patterns
// Runs every creational demo in document order.
//
// Run with: cargo run --bin p1_creational

use design_patterns::{creational, Runner};

fn main() {
    let patterns: Vec<_> = creational::PATTERNS.iter().collect();
    let color = std::env::var_os("NO_COLOR").is_none();
    Runner::default().color(color).run_all(&patterns);
}
