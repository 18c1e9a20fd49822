//! HMM decoding algorithms: Viterbi and the forward pass
//!
//! Both run in log space so long return histories do not underflow.

use ndarray::{Array1, Array2};

/// Numerically stable log(sum(exp(values)))
fn log_sum_exp(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    max + values.iter().map(|v| (v - max).exp()).sum::<f64>().ln()
}

/// Viterbi algorithm - finds most likely state sequence
///
/// # Arguments
/// * `observations` - Observation sequence (T)
/// * `start_prob` - Initial state probabilities (N)
/// * `trans_mat` - State transition probabilities (N x N)
/// * `log_emission` - Log density of an observation under a state
///
/// # Returns
/// Most likely state sequence and its log probability. Ties resolve to the
/// lowest state index.
pub fn viterbi<F>(
    observations: &[f64],
    start_prob: &Array1<f64>,
    trans_mat: &Array2<f64>,
    log_emission: F,
) -> (Vec<usize>, f64)
where
    F: Fn(usize, f64) -> f64,
{
    let t = observations.len();
    let n = start_prob.len();

    if t == 0 || n == 0 {
        return (vec![], 0.0);
    }

    let log_start = start_prob.mapv(f64::ln);
    let log_trans = trans_mat.mapv(f64::ln);

    // Delta: best path log probability ending in state j at time t
    let mut delta = Array2::<f64>::from_elem((t, n), f64::NEG_INFINITY);
    // Psi: backpointers for path reconstruction
    let mut psi = Array2::<usize>::zeros((t, n));

    for j in 0..n {
        delta[[0, j]] = log_start[j] + log_emission(j, observations[0]);
    }

    for t_idx in 1..t {
        let obs = observations[t_idx];

        for j in 0..n {
            let mut best_val = f64::NEG_INFINITY;
            let mut best_state = 0;

            for i in 0..n {
                let val = delta[[t_idx - 1, i]] + log_trans[[i, j]];
                if val > best_val {
                    best_val = val;
                    best_state = i;
                }
            }

            delta[[t_idx, j]] = best_val + log_emission(j, obs);
            psi[[t_idx, j]] = best_state;
        }
    }

    let mut best_final_state = 0;
    let mut best_final_prob = f64::NEG_INFINITY;
    for j in 0..n {
        if delta[[t - 1, j]] > best_final_prob {
            best_final_prob = delta[[t - 1, j]];
            best_final_state = j;
        }
    }

    // Backtracking
    let mut path = vec![0; t];
    path[t - 1] = best_final_state;
    for t_idx in (0..t - 1).rev() {
        path[t_idx] = psi[[t_idx + 1, path[t_idx + 1]]];
    }

    (path, best_final_prob)
}

/// Forward algorithm - log P(observations | model)
pub fn forward_log_likelihood<F>(
    observations: &[f64],
    start_prob: &Array1<f64>,
    trans_mat: &Array2<f64>,
    log_emission: F,
) -> f64
where
    F: Fn(usize, f64) -> f64,
{
    let n = start_prob.len();
    let Some((&first, rest)) = observations.split_first() else {
        return 0.0;
    };

    let log_trans = trans_mat.mapv(f64::ln);
    let mut alpha: Vec<f64> = (0..n)
        .map(|j| start_prob[j].ln() + log_emission(j, first))
        .collect();

    let mut terms = vec![0.0; n];
    for &obs in rest {
        let next: Vec<f64> = (0..n)
            .map(|j| {
                for i in 0..n {
                    terms[i] = alpha[i] + log_trans[[i, j]];
                }
                log_sum_exp(&terms) + log_emission(j, obs)
            })
            .collect();
        alpha = next;
    }

    log_sum_exp(&alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    /// Emissions that make state 0 certain for negative values, 1 otherwise
    fn sign_emission(state: usize, x: f64) -> f64 {
        let likely = (x < 0.0) == (state == 0);
        if likely { 0.9f64.ln() } else { 0.1f64.ln() }
    }

    #[test]
    fn test_viterbi_empty() {
        let (path, _) = viterbi(&[], &array![0.5, 0.5], &Array2::eye(2), sign_emission);
        assert!(path.is_empty());
    }

    #[test]
    fn test_viterbi_follows_emissions_with_free_switching() {
        let trans = array![[0.5, 0.5], [0.5, 0.5]];
        let (path, _) = viterbi(
            &[-1.0, 1.0, 1.0, -1.0],
            &array![0.5, 0.5],
            &trans,
            sign_emission,
        );
        assert_eq!(path, vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_viterbi_sticky_transitions_smooth_outliers() {
        // Switching is so unlikely that a single outlier is absorbed
        let trans = array![[0.999, 0.001], [0.001, 0.999]];
        let (path, _) = viterbi(
            &[-1.0, -1.0, 1.0, -1.0, -1.0],
            &array![0.5, 0.5],
            &trans,
            sign_emission,
        );
        assert_eq!(path, vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_forward_single_observation() {
        let ll = forward_log_likelihood(
            &[-1.0],
            &array![0.5, 0.5],
            &array![[0.5, 0.5], [0.5, 0.5]],
            sign_emission,
        );
        // 0.5 * 0.9 + 0.5 * 0.1
        assert_relative_eq!(ll, 0.5f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_forward_independent_states() {
        // Uniform transitions make observations independent: each contributes ln(0.5)
        let ll = forward_log_likelihood(
            &[-1.0, 1.0, -1.0],
            &array![0.5, 0.5],
            &array![[0.5, 0.5], [0.5, 0.5]],
            sign_emission,
        );
        assert_relative_eq!(ll, 3.0 * 0.5f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_log_sum_exp() {
        assert_relative_eq!(log_sum_exp(&[0.0, 0.0]), 2.0f64.ln(), epsilon = 1e-12);
        assert_eq!(log_sum_exp(&[f64::NEG_INFINITY]), f64::NEG_INFINITY);
    }
}
