//! pgfplots chart generation.

use crate::result::{Ci, DivisorResult, SweepResult};

/// Render a sweep as a pgfplots picture.
///
/// One error-bar series per metric (MSE, bias², variance) with asymmetric
/// bars derived from the interval bounds, plus dotted vertical markers at
/// the reference divisors n−1, n, and n+1.
pub fn to_pgfplots(sweep: &SweepResult) -> String {
    let meta = &sweep.metadata;
    let n = meta.observations as f64;

    // Headroom above the largest upper bound so marker lines span the plot.
    let ymax = sweep
        .results
        .iter()
        .flat_map(|r| [r.bias_sq_ci.upper, r.variance_ci.upper, r.mse_ci.upper])
        .fold(0.0_f64, f64::max)
        .ceil()
        + 5.0;

    let mse = error_bar_series(&sweep.results, |r| (r.mse, r.mse_ci));
    let bias_sq = error_bar_series(&sweep.results, |r| (r.bias_sq, r.bias_sq_ci));
    let variance = error_bar_series(&sweep.results, |r| (r.variance, r.variance_ci));

    format!(
        r"\begin{{figure}}[h]
\centering
\begin{{tikzpicture}}
\begin{{axis}}[
    width=14cm,
    height=12cm,
    xlabel={{Denominator $a$}},
    ylabel={{Value}},
    title={{Bias$^2$, Variance, and MSE with {conf:.0}\% CI ({s} simulations, {b} bootstraps)}},
    legend style={{at={{(0.01,0.98)}}, anchor=north west}},
    grid=major,
    ymin=0, ymax={ymax:.0}
]

\addplot+[mark=*, thick, blue, error bars/.cd, y dir=both, y explicit] coordinates {{
{mse}
}};
\addlegendentry{{MSE}}

\addplot+[mark=triangle*, thick, red, dashed, error bars/.cd, y dir=both, y explicit] coordinates {{
{bias_sq}
}};
\addlegendentry{{Bias$^2$}}

\addplot+[mark=square*, thick, green!60!black, dashed, error bars/.cd, y dir=both, y explicit] coordinates {{
{variance}
}};
\addlegendentry{{Variance}}

\addplot[dotted, thick, black] coordinates {{({nm1}, 0) ({nm1}, {ymax:.0})}};
\addlegendentry{{Divide by $n{{-}}1$}}

\addplot[dotted, thick, gray] coordinates {{({n}, 0) ({n}, {ymax:.0})}};
\addlegendentry{{Divide by $n$}}

\addplot[dotted, thick, gray!50!white] coordinates {{({np1}, 0) ({np1}, {ymax:.0})}};
\addlegendentry{{Divide by $n{{+}}1$}}

\end{{axis}}
\end{{tikzpicture}}
\caption{{Empirical MSE, Bias$^2$, and Variance of the variance estimator for $n={obs}$ using {s} simulations and {b} bootstraps.}}
\end{{figure}}
",
        conf = meta.confidence * 100.0,
        s = meta.simulations,
        b = meta.bootstrap_iterations,
        obs = meta.observations,
        nm1 = n - 1.0,
        n = n,
        np1 = n + 1.0,
        ymax = ymax,
        mse = mse,
        bias_sq = bias_sq,
        variance = variance,
    )
}

/// Coordinates with asymmetric error bars: `(a, value) += (0, hi − value)
/// −= (0, value − lo)`.
fn error_bar_series<F>(results: &[DivisorResult], metric: F) -> String
where
    F: Fn(&DivisorResult) -> (f64, Ci),
{
    results
        .iter()
        .map(|r| {
            let (value, ci) = metric(r);
            format!(
                "({:.1}, {:.2}) += (0, {:.2}) -= (0, {:.2})",
                r.divisor,
                value,
                (ci.upper - value).abs(),
                (value - ci.lower).abs(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{DivisorResult, Metadata};

    fn make_sweep() -> SweepResult {
        let row = |divisor: f64, mse: f64| DivisorResult {
            divisor,
            bias_sq: 1.98,
            bias_sq_ci: Ci::new(1.97, 2.03),
            variance: mse - 1.98,
            variance_ci: Ci::new(mse - 2.1, mse - 1.8),
            mse,
            mse_ci: Ci::new(mse - 0.14, mse + 0.25),
        };
        SweepResult {
            results: vec![row(3.5, 63.96), row(4.0, 47.46)],
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
    fn chart_has_three_series_and_markers() {
        let chart = to_pgfplots(&make_sweep());
        assert_eq!(chart.matches("error bars/.cd").count(), 3);
        assert!(chart.contains("\\addlegendentry{MSE}"));
        assert!(chart.contains("\\addlegendentry{Bias$^2$}"));
        assert!(chart.contains("\\addlegendentry{Variance}"));
        // Vertical markers at n-1, n, n+1 for n = 5
        assert!(chart.contains("(4, 0)"));
        assert!(chart.contains("(5, 0)"));
        assert!(chart.contains("(6, 0)"));
    }

    #[test]
    fn error_bars_are_asymmetric_offsets() {
        let chart = to_pgfplots(&make_sweep());
        // MSE at 3.5: +0.25 above, 0.14 below
        assert!(chart.contains("(3.5, 63.96) += (0, 0.25) -= (0, 0.14)"));
    }
}
