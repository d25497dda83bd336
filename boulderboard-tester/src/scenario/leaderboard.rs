use super::{Scenario, ScenarioCtx, ensure};
use anyhow::{Context, Result};
use async_trait::async_trait;
use boulderboard_core::{
    ActionOutcome, CSV_HEADER, Category, CategoryFilter, ConfirmRequest, LeaderboardController,
    LeaderboardState, LoadOutcome, Medal, NewScore, Operation, ScoreService, ServiceError,
    Timeframe, daily_averages,
};
use chrono::Utc;
use std::cell::Cell;
use std::rc::Rc;

fn accept(_: &ConfirmRequest) -> bool {
    true
}

fn decline(_: &ConfirmRequest) -> bool {
    false
}

async fn loaded(ctx: &ScenarioCtx) -> Result<LeaderboardController<Rc<dyn ScoreService>>> {
    let mut board = LeaderboardController::new(Rc::clone(&ctx.service));
    let outcome = board.load().await;
    if let Some(err) = board.state().error() {
        anyhow::bail!("initial load failed: {err}");
    }
    ensure(outcome == LoadOutcome::Applied, format!("initial load {outcome:?}"))?;
    Ok(board)
}

pub struct Smoke;

#[async_trait(?Send)]
impl Scenario for Smoke {
    fn name(&self) -> &'static str {
        "smoke"
    }

    fn description(&self) -> &'static str {
        "Load the leaderboard, rank rows in service order, medal the podium"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let board = loaded(ctx).await?;
        let state = board.state();
        let rows = state.ranked_rows();
        ensure(rows.len() == state.snapshot().len(), "ranked rows differ from snapshot")?;
        for (idx, row) in rows.iter().enumerate() {
            ensure(row.rank == idx + 1, format!("row {idx} has rank {}", row.rank))?;
            ensure(
                std::ptr::eq(row.record, &state.snapshot()[idx]),
                "ranking reordered the snapshot",
            )?;
            ensure(
                row.medal == Medal::for_rank(idx + 1),
                format!("rank {} medal {:?}", row.rank, row.medal),
            )?;
        }
        if ctx.verbose {
            println!("   loaded {} rows", rows.len());
        }
        Ok(())
    }
}

pub struct CategoryFilterView;

#[async_trait(?Send)]
impl Scenario for CategoryFilterView {
    fn name(&self) -> &'static str {
        "category-filter"
    }

    fn description(&self) -> &'static str {
        "Every category filter is an order-preserving subset; no extra requests"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let mut board = loaded(ctx).await?;
        let before = ctx.memory.as_ref().map(|m| m.call_count(Operation::List));

        for filter in CategoryFilter::options() {
            board.set_category_filter(filter);
            let view: Vec<_> = board.state().filtered_view().into_iter().cloned().collect();
            let expected: Vec<_> = board
                .state()
                .snapshot()
                .iter()
                .filter(|record| filter.matches(record.category))
                .cloned()
                .collect();
            ensure(view == expected, format!("filter {filter} broke order or membership"))?;
        }
        board.set_category_filter(CategoryFilter::All);
        ensure(
            board.state().filtered_view().len() == board.state().snapshot().len(),
            "All filter dropped rows",
        )?;

        if let Some(memory) = ctx.memory.as_deref() {
            ensure(
                Some(memory.call_count(Operation::List)) == before,
                "category change issued a request",
            )?;
        }
        Ok(())
    }
}

pub struct TimeframeReload;

#[async_trait(?Send)]
impl Scenario for TimeframeReload {
    fn name(&self) -> &'static str {
        "timeframe-reload"
    }

    fn description(&self) -> &'static str {
        "A timeframe change always reloads; reselecting the same one does not"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let mut board = loaded(ctx).await?;
        let outcome = board.set_timeframe(Timeframe::Week).await;
        ensure(outcome == Some(LoadOutcome::Applied), format!("week load {outcome:?}"))?;
        ensure(
            board.set_timeframe(Timeframe::Week).await.is_none(),
            "same timeframe reloaded",
        )?;
        let outcome = board.set_timeframe(Timeframe::Month).await;
        ensure(outcome == Some(LoadOutcome::Applied), format!("month load {outcome:?}"))?;
        ensure(board.state().timeframe() == Timeframe::Month, "timeframe not kept")?;

        if let Some(memory) = ctx.memory.as_deref() {
            ensure(memory.call_count(Operation::List) == 3, "unexpected list count")?;
            let now = memory.now();
            ensure(
                board
                    .state()
                    .snapshot()
                    .iter()
                    .all(|r| r.timestamp >= now - chrono::Duration::days(30)),
                "month view holds older records",
            )?;
        }
        Ok(())
    }
}

pub struct LoadRetry;

#[async_trait(?Send)]
impl Scenario for LoadRetry {
    fn name(&self) -> &'static str {
        "load-retry"
    }

    fn description(&self) -> &'static str {
        "A failed load keeps the stale snapshot and Retry repeats the same request"
    }

    fn logic_only(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let memory = ctx.memory()?;
        let mut board = loaded(ctx).await?;
        board.set_timeframe(Timeframe::Month).await;
        let before = board.state().snapshot().to_vec();

        memory.fail_next(Operation::List, ServiceError::Transport("connection reset".into()));
        ensure(board.load().await == LoadOutcome::Failed, "injected failure not seen")?;
        ensure(board.state().snapshot() == before.as_slice(), "snapshot changed on failure")?;
        let offers_retry = board.state().error().is_some_and(|e| e.offers_retry());
        ensure(offers_retry, "load error does not offer retry")?;

        ensure(board.retry().await == LoadOutcome::Applied, "retry failed")?;
        ensure(board.state().timeframe() == Timeframe::Month, "retry changed timeframe")?;
        ensure(board.state().error().is_none(), "error survived retry")
    }
}

pub struct StaleLoad;

#[async_trait(?Send)]
impl Scenario for StaleLoad {
    fn name(&self) -> &'static str {
        "stale-load"
    }

    fn description(&self) -> &'static str {
        "A response for a superseded timeframe is dropped"
    }

    fn logic_only(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let memory = ctx.memory()?;
        let mut state = LeaderboardState::new();
        let week = state.set_timeframe(Timeframe::Week).context("week ticket")?;
        let month = state.set_timeframe(Timeframe::Month).context("month ticket")?;

        let month_rows = memory.list_scores(month.timeframe).await;
        let week_rows = memory.list_scores(week.timeframe).await;
        let month_len = month_rows.as_ref().map(Vec::len).unwrap_or_default();

        ensure(
            state.finish_load(month, month_rows) == LoadOutcome::Applied,
            "latest response rejected",
        )?;
        ensure(
            state.finish_load(week, week_rows) == LoadOutcome::Stale,
            "superseded response applied",
        )?;
        ensure(state.snapshot().len() == month_len, "snapshot overwritten")?;
        ensure(!state.is_loading(), "still loading")
    }
}

pub struct DeleteResync;

#[async_trait(?Send)]
impl Scenario for DeleteResync {
    fn name(&self) -> &'static str {
        "delete-resync"
    }

    fn description(&self) -> &'static str {
        "Deleting a record reloads the board and the record is gone; declining sends nothing"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let score = NewScore::from_points(&ctx.run_tag, Category::D, &[5; 10])?;
        ctx.service
            .submit_score(&score)
            .await
            .context("seeding a record to delete")?;

        let mut board = loaded(ctx).await?;
        let id = board
            .state()
            .snapshot()
            .iter()
            .find(|record| record.player_name == ctx.run_tag)
            .map(|record| record.id.clone())
            .context("seeded record missing from leaderboard")?;

        let asked = Cell::new(false);
        let cancel = |req: &ConfirmRequest| {
            asked.set(matches!(req, ConfirmRequest::Delete { player_name } if *player_name == ctx.run_tag));
            false
        };
        ensure(
            board.delete(&id, &cancel).await == ActionOutcome::Cancelled,
            "declined delete went ahead",
        )?;
        ensure(asked.get(), "delete prompt did not name the player")?;
        ensure(board.state().find(&id).is_some(), "declined delete removed the row")?;

        ensure(board.delete(&id, &accept).await == ActionOutcome::Done, "delete failed")?;
        ensure(board.state().find(&id).is_none(), "deleted record still listed")?;

        if let Some(memory) = ctx.memory.as_deref() {
            ensure(memory.call_count(Operation::Delete) == 1, "unexpected delete count")?;
            ensure(memory.call_count(Operation::List) == 2, "delete did not resync")?;
        }
        Ok(())
    }
}

pub struct ClearConfirm;

#[async_trait(?Send)]
impl Scenario for ClearConfirm {
    fn name(&self) -> &'static str {
        "clear-confirm"
    }

    fn description(&self) -> &'static str {
        "Clear All needs confirmation and empties the board without a reload"
    }

    fn logic_only(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let memory = ctx.memory()?;
        let mut board = loaded(ctx).await?;
        let rows = board.state().snapshot().len();

        ensure(
            board.clear_all(&decline).await == ActionOutcome::Cancelled,
            "declined clear went ahead",
        )?;
        ensure(memory.call_count(Operation::Clear) == 0, "declined clear sent a request")?;
        ensure(board.state().snapshot().len() == rows, "declined clear emptied the board")?;

        ensure(board.clear_all(&accept).await == ActionOutcome::Done, "clear failed")?;
        ensure(board.state().snapshot().is_empty(), "board not emptied")?;
        ensure(memory.call_count(Operation::List) == 1, "clear triggered a reload")?;
        ensure(memory.stored().is_empty(), "service still holds records")
    }
}

pub struct ExportCsv;

#[async_trait(?Send)]
impl Scenario for ExportCsv {
    fn name(&self) -> &'static str {
        "export-csv"
    }

    fn description(&self) -> &'static str {
        "Export builds a dated CSV with the expected header and one line per record"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let mut board = LeaderboardController::new(Rc::clone(&ctx.service));
        let today = Utc::now().date_naive();
        let export = board.export_csv(today).await;
        if let Some(err) = board.state().error() {
            anyhow::bail!("{err}");
        }
        let export = export.context("export produced no file")?;

        let expected_name = format!("leaderboard-{}.csv", today.format("%Y-%m-%d"));
        ensure(export.file_name == expected_name, format!("file name {}", export.file_name))?;
        let mut lines = export.contents.lines();
        let header = CSV_HEADER.join(",");
        ensure(lines.next() == Some(header.as_str()), "header row mismatch")?;

        if let Some(memory) = ctx.memory.as_deref() {
            ensure(
                lines.count() == memory.stored().len(),
                "row count differs from stored records",
            )?;
        }
        Ok(())
    }
}

pub struct ChartAverage;

#[async_trait(?Send)]
impl Scenario for ChartAverage {
    fn name(&self) -> &'static str {
        "chart-average"
    }

    fn description(&self) -> &'static str {
        "Per-day averages of the loaded snapshot, one point per date"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let board = loaded(ctx).await?;
        let snapshot = board.state().snapshot();
        let points = daily_averages(snapshot, &Utc);

        let mut dates: Vec<_> = snapshot.iter().map(|r| r.timestamp.date_naive()).collect();
        dates.sort_unstable();
        dates.dedup();
        ensure(points.len() == dates.len(), "one point per distinct date expected")?;

        for point in &points {
            let day: Vec<_> = snapshot
                .iter()
                .filter(|r| r.timestamp.date_naive() == point.date)
                .map(|r| f64::from(r.total_score))
                .collect();
            #[allow(clippy::cast_precision_loss)]
            let mean = day.iter().sum::<f64>() / day.len() as f64;
            ensure(
                (mean - point.average).abs() < 1e-9 && point.samples == day.len(),
                format!("{} averaged {} not {mean}", point.label, point.average),
            )?;
        }
        Ok(())
    }
}
