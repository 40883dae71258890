use crate::core::engine::PosteriorEngine;
use crate::domain::model::Priors;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

/// Input row. Empty cells fall back to the runner's base priors.
#[derive(Debug, Deserialize)]
struct BatchInputRow {
    #[serde(rename = "pA")]
    p_a: Option<f64>,
    #[serde(rename = "pBgivenA")]
    p_b_given_a: Option<f64>,
    #[serde(rename = "pnotBgivennotA")]
    p_not_b_given_not_a: Option<f64>,
}

impl BatchInputRow {
    fn priors_over(&self, base: Priors) -> Priors {
        Priors::new(
            self.p_a.unwrap_or(base.p_a),
            self.p_b_given_a.unwrap_or(base.p_b_given_a),
            self.p_not_b_given_not_a
                .unwrap_or(base.p_not_b_given_not_a),
        )
    }
}

#[derive(Debug, Serialize)]
struct BatchOutputRow {
    #[serde(rename = "pA")]
    p_a: f64,
    #[serde(rename = "pBgivenA")]
    p_b_given_a: f64,
    #[serde(rename = "pnotBgivennotA")]
    p_not_b_given_not_a: f64,
    posterior: Option<f64>,
    error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub failed: usize,
}

/// Computes one posterior per CSV row. A failing row is reported in its
/// `error` column and does not stop the batch.
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    strict: bool,
    base: Priors,
}

impl BatchRunner {
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            base: Priors::default(),
        }
    }

    /// Priors used for empty cells, typically the flags and TOML values.
    pub fn with_base_priors(mut self, base: Priors) -> Self {
        self.base = base;
        self
    }

    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> Result<BatchSummary> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
        let mut writer = csv::Writer::from_writer(output);
        let mut summary = BatchSummary::default();

        for (index, row) in reader.deserialize::<BatchInputRow>().enumerate() {
            let priors = row?.priors_over(self.base);
            let mut engine = PosteriorEngine::new(priors);
            if self.strict {
                engine = engine.force_strict();
            }
            let outcome = engine.run();

            summary.rows += 1;
            let (posterior, error) = match outcome {
                Ok(report) => (Some(report.posterior), None),
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!("⚠️ Row {} failed: {}", index + 1, e);
                    (None, Some(e.to_string()))
                }
            };

            writer.serialize(BatchOutputRow {
                p_a: priors.p_a,
                p_b_given_a: priors.p_b_given_a,
                p_not_b_given_not_a: priors.p_not_b_given_not_a,
                posterior,
                error,
            })?;
        }

        writer.flush()?;
        tracing::info!(
            "📊 Batch complete: {} rows, {} failed",
            summary.rows,
            summary.failed
        );
        Ok(summary)
    }

    pub fn run_file<P: AsRef<Path>, W: Write>(&self, path: P, output: W) -> Result<BatchSummary> {
        let file = std::fs::File::open(path)?;
        self.run(file, output)
    }
}
