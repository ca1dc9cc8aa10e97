// Pattern 3: Behavioral Patterns
// Runs every behavioral demo in document order.
//
// Run with: cargo run --bin p3_behavioral

use design_patterns::{behavioral, Runner};

fn main() {
    let patterns: Vec<_> = behavioral::PATTERNS.iter().collect();
    let color = std::env::var_os("NO_COLOR").is_none();
    Runner::default().color(color).run_all(&patterns);
}
