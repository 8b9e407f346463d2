use rayon::prelude::*;

use crate::error::{Result, SimulationError};
use crate::game::{ReleasePolicy, Simulation};
use crate::report::Report;

/// Turn counts reported at unless told otherwise.
pub const DEFAULT_CHECKPOINTS: [u64; 4] = [1_000, 10_000, 100_000, 1_000_000];

#[derive(Clone, Debug, PartialEq, Eq)]
/// A batch of independent simulations.
///
/// Every run plays each policy in a simulation of its own, checkpointing
/// at each of `checkpoints`.
pub struct Plan {
    /// The release policies to simulate, in the order they're reported.
    pub policies: Vec<ReleasePolicy>,
    /// The number of times each policy is simulated.
    pub runs: usize,
    /// Strictly increasing turn counts to report at.
    pub checkpoints: Vec<u64>,
    /// Seeds the `i`th simulation with `seed + i` if present. Otherwise
    /// simulations are seeded from the OS.
    pub seed: Option<u64>,
}

impl Plan {
    /// Reject plans that wouldn't produce any reports.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| -> Result<()> {
            Err(SimulationError::InvalidPlan {
                reason: reason.to_owned(),
            })
        };

        if self.policies.is_empty() {
            return invalid("no release policies given");
        }
        if self.runs == 0 {
            return invalid("at least one run is required");
        }
        if self.checkpoints.is_empty() {
            return invalid("at least one checkpoint is required");
        }
        if self.checkpoints[0] == 0 {
            return invalid("checkpoints must be positive");
        }
        if self.checkpoints.windows(2).any(|w| w[0] >= w[1]) {
            return invalid("checkpoints must be strictly increasing");
        }

        Ok(())
    }

    /// Run every simulation in parallel. Return their reports, ordered by
    /// run, then policy, then checkpoint.
    pub fn execute(&self) -> Result<Vec<Report>> {
        self.validate()?;

        let jobs: Vec<(usize, ReleasePolicy)> = (0..self.runs)
            .flat_map(|run| self.policies.iter().map(move |&policy| (run, policy)))
            .collect();

        log::info!("{:<32}{:<32}", "simulating jobs", jobs.len());

        let reports = jobs
            .into_par_iter()
            .enumerate()
            .map(|(i, (run, policy))| {
                let seed = self.seed.map(|s| s.wrapping_add(i as u64));
                self.simulate(run, policy, seed)
            })
            .collect::<Result<Vec<Vec<Report>>>>()?;

        Ok(reports.into_iter().flatten().collect())
    }

    /// Play a single simulation through every checkpoint.
    fn simulate(
        &self,
        run: usize,
        policy: ReleasePolicy,
        seed: Option<u64>,
    ) -> Result<Vec<Report>> {
        let mut sim = match seed {
            Some(seed) => Simulation::seeded(policy, seed),
            None => Simulation::new(policy),
        };
        let mut reports = Vec::with_capacity(self.checkpoints.len());

        for &checkpoint in &self.checkpoints {
            sim.run(checkpoint - sim.turns())?;

            log::info!("{:<32}{:<16}{}", format!("run {} checkpoint", run + 1), policy, checkpoint);

            reports.push(Report {
                run,
                policy: sim.policy(),
                turns: sim.turns(),
                histogram: sim.histogram().clone(),
            });
        }

        Ok(reports)
    }
}

impl Default for Plan {
    fn default() -> Self {
        Plan {
            policies: vec![ReleasePolicy::ImmediatePay, ReleasePolicy::WaitForDoubles],
            runs: 2,
            checkpoints: DEFAULT_CHECKPOINTS.to_vec(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Plan {
        Plan {
            runs: 3,
            checkpoints: vec![10, 100, 1_000],
            seed: Some(17),
            ..Plan::default()
        }
    }

    #[test]
    fn default_plan_is_valid() {
        Plan::default().validate().unwrap();
    }

    #[test]
    fn rejects_bad_plans() {
        let bad = [
            Plan { runs: 0, ..small() },
            Plan { policies: vec![], ..small() },
            Plan { checkpoints: vec![], ..small() },
            Plan { checkpoints: vec![0, 10], ..small() },
            Plan { checkpoints: vec![10, 10], ..small() },
            Plan { checkpoints: vec![100, 10], ..small() },
        ];

        for plan in bad.iter() {
            match plan.validate() {
                Err(SimulationError::InvalidPlan { .. }) => (),
                other => panic!("{:?} accepted: {:?}", plan, other),
            }
        }
    }

    #[test]
    fn reports_are_ordered() {
        let reports = small().execute().unwrap();

        assert_eq!(reports.len(), 3 * 2 * 3);
        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.run, i / 6);
            assert_eq!(report.policy, small().policies[(i / 3) % 2]);
            assert_eq!(report.turns, small().checkpoints[i % 3]);
            assert_eq!(report.histogram.total(), report.turns);
        }
    }

    #[test]
    fn seeded_plans_are_reproducible() {
        assert_eq!(small().execute().unwrap(), small().execute().unwrap());
    }
}
