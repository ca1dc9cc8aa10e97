// Pattern 2: Structural Patterns
// Runs every structural demo in document order.
//
// Run with: cargo run --bin p2_structural

use design_patterns::{structural, Runner};

fn main() {
    let patterns: Vec<_> = structural::PATTERNS.iter().collect();
    let color = std::env::var_os("NO_COLOR").is_none();
    Runner::default().color(color).run_all(&patterns);
}
