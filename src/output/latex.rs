//! LaTeX report table generation.

use crate::result::SweepResult;

use super::is_reference_divisor;

/// Render a sweep as a booktabs LaTeX table.
///
/// Each metric is formatted as `value [lo, hi]` to two decimal places; rows
/// whose divisor equals n−1, n, or n+1 are wrapped in `\textbf`.
pub fn to_latex_table(sweep: &SweepResult) -> String {
    let meta = &sweep.metadata;
    let mut rows = Vec::with_capacity(sweep.results.len());

    for row in &sweep.results {
        let bold = if is_reference_divisor(row.divisor, meta.observations) {
            "\\textbf"
        } else {
            ""
        };
        rows.push(format!(
            "{bold}{{{:.1}}} & {bold}{{{:.2} [{:.2}, {:.2}]}} & {bold}{{{:.2} [{:.2}, {:.2}]}} & {bold}{{{:.2} [{:.2}, {:.2}]}} \\\\",
            row.divisor,
            row.bias_sq,
            row.bias_sq_ci.lower,
            row.bias_sq_ci.upper,
            row.variance,
            row.variance_ci.lower,
            row.variance_ci.upper,
            row.mse,
            row.mse_ci.lower,
            row.mse_ci.upper,
            bold = bold,
        ));
    }

    format!(
        r"\begin{{table}}[h]
\centering
\caption{{Empirical Bias$^2$, Variance, and MSE with {conf:.0}\% bootstrapped confidence intervals ({b} resamples, seed={seed}). Bold rows indicate $a = n-1$, $n$, and $n+1$.}}
\label{{tab:empirical-mse-ci-bootstrap}}
\begin{{tabular}}{{rccc}}
\toprule
$a$ & Bias$^2$ [CI] & Variance [CI] & MSE [CI] \\
\midrule
{rows}
\bottomrule
\end{{tabular}}
\end{{table}}
",
        conf = meta.confidence * 100.0,
        b = meta.bootstrap_iterations,
        seed = meta.seed,
        rows = rows.join("\n"),
    )
}
