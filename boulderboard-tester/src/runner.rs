use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::fixtures::seeded_service;
use crate::live::LiveScoreService;
use crate::scenario::{Scenario, ScenarioCtx};
use crate::util::run_tag;
use boulderboard_core::ScoreService;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

/// Where scenario contexts get their service from.
pub enum Backend {
    /// Fresh seeded in-memory service per iteration.
    Logic,
    Live(Rc<LiveScoreService>),
}

impl Backend {
    fn context(&self, iteration: usize, verbose: bool) -> ScenarioCtx {
        let run_tag = format!("{}-{iteration}", run_tag("qa"));
        match self {
            Self::Logic => {
                let memory = Rc::new(seeded_service());
                let service: Rc<dyn ScoreService> = memory.clone();
                ScenarioCtx {
                    service,
                    memory: Some(memory),
                    run_tag,
                    verbose,
                }
            }
            Self::Live(live) => {
                let service: Rc<dyn ScoreService> = live.clone();
                ScenarioCtx {
                    service,
                    memory: None,
                    run_tag,
                    verbose,
                }
            }
        }
    }

    const fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }
}

pub struct ScenarioRunner {
    backend: Backend,
    verbose: bool,
}

impl ScenarioRunner {
    pub const fn new(backend: Backend, verbose: bool) -> Self {
        Self { backend, verbose }
    }

    /// `None` when the scenario cannot run against this backend.
    pub async fn run_scenario(
        &self,
        scenario: &dyn Scenario,
        iterations: usize,
    ) -> Option<ScenarioResult> {
        if self.backend.is_live() && scenario.logic_only() {
            eprintln!(
                "⚠️  Scenario {} needs the in-memory service; skipped in live mode",
                scenario.name().yellow()
            );
            return None;
        }
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.name().bright_white());
        }

        let iterations = iterations.max(1);
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let ctx = self.backend.context(i, self.verbose);
            let start_time = Instant::now();
            let outcome = scenario.run(&ctx).await;
            let duration = start_time.elapsed();
            performance_data.push(duration);

            match outcome {
                Ok(()) => {
                    successes += 1;
                    if self.verbose {
                        println!("  ✅ Iteration {} passed ({duration:?})", i + 1);
                    }
                }
                Err(err) => {
                    log::debug!("{} iteration {} failed: {err:#}", scenario.name(), i + 1);
                    failures.push(format!("Iteration {}: {err:#}", i + 1));
                    if self.verbose {
                        println!("  ❌ Iteration {} failed: {err:#}", i + 1);
                    }
                }
            }
        }

        let average_duration = performance_data.iter().sum::<Duration>()
            / u32::try_from(performance_data.len()).unwrap_or(1);

        Some(ScenarioResult {
            scenario_name: scenario.name().to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        })
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = Vec::<u128>::deserialize(deserializer)?;
        Ok(millis
            .into_iter()
            .map(|ms| Duration::from_millis(u64::try_from(ms).unwrap_or(0)))
            .collect())
    }
}
