/// Computes `Σ(value × weight) / Σ weight` over `(value, weight)` pairs.
///
/// Returns the total weight alongside the mean. The mean is 0.0 when the
/// total weight is zero, including for empty input.
pub fn weighted_mean(pairs: &[(f64, f64)]) -> (f64, f64) {
    let (total_weight, weighted_sum) = pairs
        .iter()
        .fold((0.0, 0.0), |(w, s), &(value, weight)| {
            (w + weight, s + value * weight)
        });

    let mean = if total_weight == 0.0 {
        0.0
    } else {
        weighted_sum / total_weight
    };
    (total_weight, mean)
}
