use crate::domain::model::PosteriorReport;
use crate::domain::ports::PriorProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct PosteriorEngine<P: PriorProvider> {
    provider: P,
    strict: bool,
}

impl<P: PriorProvider> PosteriorEngine<P> {
    pub fn new(provider: P) -> Self {
        let strict = provider.strict();
        Self { provider, strict }
    }

    pub fn force_strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn run(&self) -> Result<PosteriorReport> {
        let priors = self.provider.priors();
        tracing::info!(
            "Computing posterior for P(A)={}, P(B|A)={}, P(notB|notA)={}",
            priors.p_a,
            priors.p_b_given_a,
            priors.p_not_b_given_not_a
        );

        if self.strict {
            priors.validate()?;
            tracing::debug!("Strict validation passed");
        }

        let report = PosteriorReport::compute(&priors)?;
        tracing::debug!(
            "P(notA)={}, P(B|notA)={}, P(A,B)={}, P(notA,B)={}, P(B)={}",
            report.p_not_a,
            report.p_b_given_not_a,
            report.p_a_and_b,
            report.p_not_a_and_b,
            report.p_b
        );
        tracing::info!("✅ Posterior P(A|B) = {}", report.posterior);

        Ok(report)
    }
}
