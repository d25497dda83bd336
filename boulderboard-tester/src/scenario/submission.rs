use super::{Scenario, ScenarioCtx, ensure};
use anyhow::{Context, Result};
use async_trait::async_trait;
use boulderboard_core::{
    BoulderScore, Category, LeaderboardController, NewScore, Operation, ServiceError,
    SubmissionController, SubmissionForm, SubmissionState, ValidationError,
};
use std::rc::Rc;

const SCORECARD: [u32; 10] = [5, 10, 15, 20, 0, 0, 0, 0, 0, 0];

fn fill_form(form: &mut SubmissionForm, name: &str, category: Category, points: &[u32]) -> Result<()> {
    form.player_name = name.to_string();
    form.category = category;
    for (index, value) in points.iter().enumerate() {
        let score = BoulderScore::new(*value).with_context(|| format!("boulder {index}"))?;
        form.set_score(index, score);
    }
    Ok(())
}

pub struct SubmitReset;

#[async_trait(?Send)]
impl Scenario for SubmitReset {
    fn name(&self) -> &'static str {
        "submit-reset"
    }

    fn description(&self) -> &'static str {
        "Submitting a scorecard confirms it, resets the form and lists the score"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let mut submit = SubmissionController::new(Rc::clone(&ctx.service));

        ensure(!submit.submit().await, "blank name was submitted")?;
        ensure(
            submit.state().error() == Some(ValidationError::EmptyPlayerName.to_string().as_str()),
            "blank name error missing",
        )?;

        fill_form(&mut submit.state_mut().form, &ctx.run_tag, Category::B, &SCORECARD)?;
        ensure(submit.state().form.total() == 50, "running total is not 50")?;

        if !submit.submit().await {
            anyhow::bail!(
                "submission rejected: {}",
                submit.state().error().unwrap_or("no message")
            );
        }
        ensure(
            submit.state().confirmation() == Some(SubmissionState::CONFIRMATION),
            "confirmation missing",
        )?;
        ensure(submit.state().form == SubmissionForm::default(), "form not reset")?;
        ensure(!submit.state().is_submitting(), "still submitting")?;

        let mut board = LeaderboardController::new(Rc::clone(&ctx.service));
        board.load().await;
        let stored = board
            .state()
            .snapshot()
            .iter()
            .find(|record| record.player_name == ctx.run_tag)
            .context("submitted score not on the leaderboard")?;
        ensure(stored.total_score == 50, format!("stored total {}", stored.total_score))?;
        ensure(stored.category == Category::B, "stored category differs")?;
        ensure(
            stored.boulder_scores == SCORECARD.to_vec(),
            "stored boulder scores differ",
        )?;

        fill_form(&mut submit.state_mut().form, "someone", Category::A, &[25; 10])?;
        submit.reset();
        ensure(
            submit.state().form == SubmissionForm::default()
                && submit.state().confirmation().is_none(),
            "reset left data behind",
        )
    }
}

pub struct RejectedSubmit;

#[async_trait(?Send)]
impl Scenario for RejectedSubmit {
    fn name(&self) -> &'static str {
        "rejected-submit"
    }

    fn description(&self) -> &'static str {
        "A rejected submission shows the service message and keeps the form"
    }

    fn logic_only(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let memory = ctx.memory()?;
        let mut submit = SubmissionController::new(Rc::clone(&ctx.service));
        fill_form(&mut submit.state_mut().form, &ctx.run_tag, Category::C, &SCORECARD)?;
        let before = submit.state().form.clone();

        memory.fail_next(
            Operation::Submit,
            ServiceError::from_status(400, r#"{"message":"Competition closed"}"#),
        );
        ensure(!submit.submit().await, "failure not reported")?;
        ensure(
            submit.state().error() == Some("Competition closed"),
            format!("error shown: {:?}", submit.state().error()),
        )?;
        ensure(submit.state().form == before, "form lost after rejection")?;
        ensure(submit.state().confirmation().is_none(), "confirmation shown")?;

        ensure(submit.submit().await, "resubmission failed")?;
        ensure(memory.call_count(Operation::Submit) == 2, "unexpected submit count")
    }
}

pub struct PlayerHistory;

#[async_trait(?Send)]
impl Scenario for PlayerHistory {
    fn name(&self) -> &'static str {
        "player-history"
    }

    fn description(&self) -> &'static str {
        "Player history lists every attempt with best and average totals"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        for points in [[25; 10], [10; 10]] {
            let score = NewScore::from_points(&ctx.run_tag, Category::Open, &points)?;
            ctx.service
                .submit_score(&score)
                .await
                .context("seeding history")?;
        }

        let mut board = LeaderboardController::new(Rc::clone(&ctx.service));
        ensure(board.open_player_history(&ctx.run_tag).await, "history response dropped")?;
        let history = board.history();
        if let Some(err) = history.error() {
            anyhow::bail!("history failed: {err}");
        }
        let summary = history.summary().context("history is empty")?;
        ensure(summary.attempts == 2, format!("{} attempts", summary.attempts))?;
        ensure(summary.best == 250, format!("best {}", summary.best))?;
        ensure(
            (summary.average - 175.0).abs() < f64::EPSILON,
            format!("average {}", summary.average),
        )?;

        board.close_history();
        ensure(!board.history().is_open(), "modal still open")?;

        if let Some(memory) = ctx.memory.as_deref() {
            memory.fail_next(Operation::History, ServiceError::Transport("offline".into()));
            board.open_player_history("Ana").await;
            ensure(board.history().error().is_some(), "history failure not recorded")?;
            ensure(board.state().error().is_none(), "history failure leaked to the board")?;
            board.close_history();

            board.open_player_history("Ana").await;
            let ana = board.history().summary().context("Ana has no history")?;
            ensure(ana.attempts == 2 && ana.best == 180, "Ana summary differs")?;
        }
        Ok(())
    }
}
