//! Then steps for cumulative flow BDD scenarios.

use super::world::{FlowWorld, day};
use rstest_bdd_macros::then;
use taskflow::task::domain::{DailyFlowBucket, FlowError};

#[then("the report covers {days:usize} days starting on day {first:u32}")]
fn report_covers(world: &FlowWorld, days: usize, first: u32) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.window_days() != days {
        return Err(eyre::eyre!(
            "expected {days} days, found {}",
            report.window_days()
        ));
    }
    if report.first_day() != Some(day(first)?) {
        return Err(eyre::eyre!(
            "expected first day {first}, found {:?}",
            report.first_day()
        ));
    }
    Ok(())
}

#[then(
    "day {n:u32} has {incomplete:usize} incomplete and {complete:usize} complete tasks"
)]
fn day_has_counts(
    world: &FlowWorld,
    n: u32,
    incomplete: usize,
    complete: usize,
) -> Result<(), eyre::Report> {
    let expected = DailyFlowBucket {
        cumulative_incomplete: incomplete,
        cumulative_complete: complete,
    };
    let found = world.report()?.bucket(day(n)?).copied();
    if found != Some(expected) {
        return Err(eyre::eyre!("day {n}: expected {expected:?}, found {found:?}"));
    }
    Ok(())
}

#[then("the average daily throughput is {rate:f64}")]
fn throughput_is(world: &FlowWorld, rate: f64) -> Result<(), eyre::Report> {
    let found = world.report()?.avg_daily_throughput();
    if (found - rate).abs() >= f64::EPSILON {
        return Err(eyre::eyre!("expected throughput {rate}, found {found}"));
    }
    Ok(())
}

#[then("the average daily backlog is {rate:f64}")]
fn backlog_is(world: &FlowWorld, rate: f64) -> Result<(), eyre::Report> {
    let found = world.report()?.avg_daily_backlog();
    if (found - rate).abs() >= f64::EPSILON {
        return Err(eyre::eyre!("expected backlog {rate}, found {found}"));
    }
    Ok(())
}

#[then("the computation fails because there are no tasks")]
fn fails_with_empty_input(world: &FlowWorld) -> Result<(), eyre::Report> {
    match world.last_result {
        Some(Err(FlowError::EmptyInput)) => Ok(()),
        ref other => Err(eyre::eyre!("expected EmptyInput, got {other:?}")),
    }
}

#[then("the computation fails with a window of {days:i64} days")]
fn fails_with_degenerate_window(world: &FlowWorld, days: i64) -> Result<(), eyre::Report> {
    match world.last_result {
        Some(Err(FlowError::DegenerateWindow { window_days })) if window_days == days => Ok(()),
        ref other => Err(eyre::eyre!("expected a {days}-day window, got {other:?}")),
    }
}
