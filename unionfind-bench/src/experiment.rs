/// Trial execution: build a structure, replay a workload, record cost.
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use unionfind::{DisjointSets, StructureKind, UnionFindError};

use crate::workload::{self, Workload};

/// Cost of one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    pub runtime: Duration,
    /// Pointer writes made by the workload, excluding construction.
    pub pointer_updates: u64,
}

/// One measured trial, as persisted in the results CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub kind: StructureKind,
    pub n: usize,
    pub m: usize,
    pub workload: Workload,
    /// 1-based trial index within its configuration.
    pub trial: u32,
    /// Wall-clock seconds spent replaying the workload.
    pub runtime: f64,
    pub pointer_updates: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    #[error("operation count overflows: n = {n} times multiplier {multiplier}")]
    OperationCountOverflow { n: usize, multiplier: usize },

    #[error("trial count overflows")]
    TrialCountOverflow,

    #[error(transparent)]
    Structure(#[from] UnionFindError),
}

/// Grid of configurations to measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub ns: Vec<usize>,
    /// Operation counts, as multiples of `n`.
    pub multipliers: Vec<usize>,
    pub workloads: Vec<Workload>,
    pub kinds: Vec<StructureKind>,
    pub trials: u32,
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            ns: vec![10_000, 50_000, 100_000],
            multipliers: vec![1, 5, 10],
            workloads: Workload::defaults(),
            kinds: StructureKind::all().to_vec(),
            trials: 3,
            seed: 0,
        }
    }
}

impl ExperimentConfig {
    /// Number of trials `run_all` will perform, or `None` if it does not fit
    /// in a `usize`.
    pub fn trial_count(&self) -> Option<usize> {
        self.ns
            .len()
            .checked_mul(self.multipliers.len())?
            .checked_mul(self.workloads.len())?
            .checked_mul(self.kinds.len())?
            .checked_mul(self.trials as usize)
    }

    /// Reject grids whose trial or operation counts overflow.
    pub fn validate(&self) -> Result<(), ExperimentError> {
        self.trial_count()
            .ok_or(ExperimentError::TrialCountOverflow)?;
        for &n in &self.ns {
            for &multiplier in &self.multipliers {
                operation_count(n, multiplier)?;
            }
        }
        Ok(())
    }
}

fn operation_count(n: usize, multiplier: usize) -> Result<usize, ExperimentError> {
    n.checked_mul(multiplier)
        .ok_or(ExperimentError::OperationCountOverflow { n, multiplier })
}

/// Run one trial of `workload` against a fresh structure of `kind`.
///
/// The operation stream is generated before the clock starts and the counter
/// is cleared after construction, so both metrics cover the workload alone.
pub fn run_trial<R: Rng>(
    kind: StructureKind,
    n: usize,
    m: usize,
    workload: Workload,
    rng: &mut R,
) -> unionfind::Result<TrialOutcome> {
    let ops = workload.generate(n, m, rng);
    let mut structure = kind.build(n);
    structure.reset_pointer_updates();
    let runtime = workload::replay(&mut structure, &ops)?;
    Ok(TrialOutcome {
        runtime,
        pointer_updates: structure.pointer_updates(),
    })
}

/// Run every configuration in `config`, in a fixed order, from a single
/// seeded generator.
pub fn run_all(config: &ExperimentConfig) -> Result<Vec<ResultRow>, ExperimentError> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let start = Instant::now();
    let mut rows = Vec::new();

    for &n in &config.ns {
        for &mul in &config.multipliers {
            let m = operation_count(n, mul)?;
            for &workload in &config.workloads {
                for &kind in &config.kinds {
                    for trial in 1..=config.trials {
                        let outcome = run_trial(kind, n, m, workload, &mut rng)?;
                        tracing::info!(
                            structure = kind.name(),
                            n,
                            m,
                            workload = workload.name(),
                            trial,
                            runtime_s = outcome.runtime.as_secs_f64(),
                            ptrs = outcome.pointer_updates,
                            "trial finished"
                        );
                        rows.push(ResultRow {
                            kind,
                            n,
                            m,
                            workload,
                            trial,
                            runtime: outcome.runtime.as_secs_f64(),
                            pointer_updates: outcome.pointer_updates,
                        });
                    }
                }
            }
        }
    }

    tracing::info!(
        experiments = rows.len(),
        total_s = start.elapsed().as_secs_f64(),
        "all trials finished"
    );
    Ok(rows)
}
