use anyhow::{Result, bail};
use async_trait::async_trait;
use boulderboard_core::{MemoryScoreService, ScoreService};
use std::rc::Rc;

pub mod leaderboard;
pub mod submission;

pub struct ScenarioCtx {
    pub service: Rc<dyn ScoreService>,
    /// Present in logic mode; gives access to call logs and failure injection.
    pub memory: Option<Rc<MemoryScoreService>>,
    /// Unique player name for records this run creates.
    pub run_tag: String,
    pub verbose: bool,
}

impl ScenarioCtx {
    pub fn memory(&self) -> Result<&MemoryScoreService> {
        match self.memory.as_deref() {
            Some(memory) => Ok(memory),
            None => bail!("scenario needs the in-memory service"),
        }
    }
}

#[async_trait(?Send)]
pub trait Scenario {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Scenarios that inject failures, count calls or wipe data only run in
    /// logic mode.
    fn logic_only(&self) -> bool {
        false
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()>;
}

pub fn catalog() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(leaderboard::Smoke),
        Box::new(leaderboard::CategoryFilterView),
        Box::new(leaderboard::TimeframeReload),
        Box::new(leaderboard::LoadRetry),
        Box::new(leaderboard::StaleLoad),
        Box::new(leaderboard::DeleteResync),
        Box::new(leaderboard::ClearConfirm),
        Box::new(leaderboard::ExportCsv),
        Box::new(leaderboard::ChartAverage),
        Box::new(submission::SubmitReset),
        Box::new(submission::RejectedSubmit),
        Box::new(submission::PlayerHistory),
    ]
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog()
        .iter()
        .map(|scenario| (scenario.name(), scenario.description()))
        .collect()
}

pub fn get_scenario(name: &str) -> Option<Box<dyn Scenario>> {
    catalog().into_iter().find(|scenario| scenario.name() == name)
}

/// Expand `all` into every catalog entry, keeping explicit names in order.
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut names: Vec<String> = requested
        .iter()
        .filter(|name| name.as_str() != "all")
        .cloned()
        .collect();
    if requested.iter().any(|name| name == "all") {
        for (name, _) in list_scenarios() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// `Ok(())` when `cond` holds, otherwise a failure carrying `message`.
pub fn ensure(cond: bool, message: impl Into<String>) -> Result<()> {
    if cond {
        return Ok(());
    }
    let message: String = message.into();
    bail!(message)
}
