//! Presentation wrappers over sweep results.
//!
//! Everything here is a thin consumer of [`SweepResult`](crate::SweepResult):
//! a colored terminal table, a LaTeX table, a pgfplots chart, and JSON
//! serialization. No statistics happen in this module.

pub mod chart;
pub mod json;
pub mod latex;
pub mod terminal;

pub use chart::to_pgfplots;
pub use json::{to_json, to_json_pretty};
pub use latex::to_latex_table;
pub use terminal::format_table;

/// The emphasized divisors are the classic choices n−1, n, and n+1.
pub(crate) fn is_reference_divisor(divisor: f64, observations: usize) -> bool {
    let n = observations as f64;
    [n - 1.0, n, n + 1.0]
        .iter()
        .any(|k| (divisor - k).abs() < 1e-9)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_divisors_for_n5() {
        assert!(is_reference_divisor(4.0, 5));
        assert!(is_reference_divisor(5.0, 5));
        assert!(is_reference_divisor(6.0, 5));
        assert!(!is_reference_divisor(4.5, 5));
        assert!(!is_reference_divisor(7.0, 5));
    }
}
