//! Terminal output formatting with colors.

use colored::Colorize;

use crate::result::SweepResult;

use super::is_reference_divisor;

/// Format a sweep as a human-readable table.
///
/// Rows where the divisor equals n−1, n, or n+1 are emphasized; a summary
/// line names the divisor with the smallest MSE.
pub fn format_table(sweep: &SweepResult) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(86);
    let meta = &sweep.metadata;

    output.push_str("varsweep\n");
    output.push_str(&sep);
    output.push('\n');
    output.push_str(&format!(
        "  {} samples x {} observations, true variance {}, {} resamples, seed {}\n",
        meta.simulations,
        meta.observations,
        meta.true_variance,
        meta.bootstrap_iterations,
        meta.seed
    ));
    output.push_str(&sep);
    output.push('\n');

    output.push_str(&format!(
        "  {:>5}  {:>24}  {:>24}  {:>24}\n",
        "a",
        format!("Bias^2 [{:.0}% CI]", meta.confidence * 100.0),
        format!("Variance [{:.0}% CI]", meta.confidence * 100.0),
        format!("MSE [{:.0}% CI]", meta.confidence * 100.0),
    ));

    for row in &sweep.results {
        let line = format!(
            "  {:>5.1}  {:>24}  {:>24}  {:>24}",
            row.divisor,
            format!("{:.2} {}", row.bias_sq, row.bias_sq_ci),
            format!("{:.2} {}", row.variance, row.variance_ci),
            format!("{:.2} {}", row.mse, row.mse_ci),
        );
        if is_reference_divisor(row.divisor, meta.observations) {
            output.push_str(&line.bold().to_string());
        } else {
            output.push_str(&line);
        }
        output.push('\n');
    }

    output.push_str(&sep);
    output.push('\n');
    if let Some(best) = sweep.min_mse() {
        output.push_str(&format!(
            "  {} a = {:.1} (MSE {:.2})\n",
            "Minimum MSE at".green(),
            best.divisor,
            best.mse
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{Ci, DivisorResult, Metadata};

    fn make_sweep() -> SweepResult {
        let row = |divisor: f64, mse: f64| DivisorResult {
            divisor,
            bias_sq: 1.0,
            bias_sq_ci: Ci::new(0.9, 1.1),
            variance: mse - 1.0,
            variance_ci: Ci::new(mse - 1.2, mse - 0.8),
            mse,
            mse_ci: Ci::new(mse - 0.2, mse + 0.2),
        };
        SweepResult {
            results: vec![row(4.0, 47.46), row(4.5, 38.77), row(6.0, 32.29)],
            metadata: Metadata {
                simulations: 10_000,
                observations: 5,
                true_variance: 10.0,
                bootstrap_iterations: 200,
                seed: 42,
                confidence: 0.95,
                runtime_secs: 1.0,
            },
        }
    }

    #[test]
    fn table_lists_every_divisor() {
        colored::control::set_override(false);
        let table = format_table(&make_sweep());
        assert!(table.contains("4.0"));
        assert!(table.contains("4.5"));
        assert!(table.contains("6.0"));
        assert!(table.contains("47.46"));
    }

    #[test]
    fn table_names_minimum_mse() {
        colored::control::set_override(false);
        let table = format_table(&make_sweep());
        assert!(table.contains("Minimum MSE at"));
        assert!(table.contains("a = 6.0"));
    }
}
