use crate::domain::model::{PosteriorReport, Priors};
use crate::utils::error::{BayesError, Result};

impl PosteriorReport {
    /// Bayes' theorem with the complements derived from the inputs.
    ///
    /// The complements are taken as `|1 - x|`, so inputs above 1 are folded
    /// back instead of rejected. A zero normalizer is an error rather than
    /// an infinite or NaN posterior.
    pub fn compute(priors: &Priors) -> Result<Self> {
        let Priors {
            p_a,
            p_b_given_a,
            p_not_b_given_not_a,
        } = *priors;

        let p_not_a = (1.0 - p_a).abs();
        let p_b_given_not_a = (1.0 - p_not_b_given_not_a).abs();

        // 聯合機率 P(A, B) 與 P(notA, B)
        let p_a_and_b = p_a * p_b_given_a;
        let p_not_a_and_b = p_not_a * p_b_given_not_a;

        let p_b = p_a_and_b + p_not_a_and_b;
        if p_b == 0.0 {
            return Err(BayesError::DivisionByZero { priors: *priors });
        }

        let posterior = (p_a * p_b_given_a) / p_b;

        Ok(Self {
            priors: *priors,
            p_not_a,
            p_b_given_not_a,
            p_a_and_b,
            p_not_a_and_b,
            p_b,
            posterior,
        })
    }
}

/// P(A | B) from P(A), P(B | A) and P(notB | notA).
pub fn posterior(p_a: f64, p_b_given_a: f64, p_not_b_given_not_a: f64) -> Result<f64> {
    PosteriorReport::compute(&Priors::new(p_a, p_b_given_a, p_not_b_given_not_a))
        .map(|report| report.posterior)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_default_priors_give_three_quarters() {
        let value = posterior(0.3, 0.7, 0.9).unwrap();
        assert!((value - 0.75).abs() < EPS, "got {}", value);
    }

    #[test]
    fn test_intermediate_values() {
        let report = PosteriorReport::compute(&Priors::default()).unwrap();
        assert!((report.p_not_a - 0.7).abs() < EPS);
        assert!((report.p_b_given_not_a - 0.1).abs() < EPS);
        assert!((report.p_a_and_b - 0.21).abs() < EPS);
        assert!((report.p_not_a_and_b - 0.07).abs() < EPS);
        assert!((report.p_b - 0.28).abs() < EPS);
    }

    #[test]
    fn test_zero_prior_gives_zero_posterior() {
        assert_eq!(posterior(0.0, 0.4, 0.9).unwrap(), 0.0);
        assert_eq!(posterior(0.0, 1.0, 0.2).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_normalizer_is_division_by_zero() {
        match posterior(0.0, 0.5, 1.0) {
            Err(BayesError::DivisionByZero { priors }) => {
                assert_eq!(priors, Priors::new(0.0, 0.5, 1.0));
            }
            other => panic!("expected DivisionByZero, got {:?}", other),
        }

        // P(B|A) = 0 and P(notB|notA) = 1 leaves no way to observe B
        assert!(matches!(
            posterior(0.6, 0.0, 1.0),
            Err(BayesError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_certain_prior() {
        assert_eq!(posterior(1.0, 0.5, 0.5).unwrap(), 1.0);
    }

    #[test]
    fn test_out_of_range_inputs_are_folded() {
        // |1 - 1.5| = 0.5, so P(A)=1.5 behaves like a 0.5 complement
        let value = posterior(1.5, 0.5, 0.5).unwrap();
        assert!((value - 0.75).abs() < EPS, "got {}", value);

        let report = PosteriorReport::compute(&Priors::new(0.5, 0.5, 1.2)).unwrap();
        assert!((report.p_b_given_not_a - 0.2).abs() < EPS);
    }

    #[test]
    fn test_nan_input_propagates() {
        assert!(posterior(f64::NAN, 0.5, 0.5).unwrap().is_nan());
    }
}
