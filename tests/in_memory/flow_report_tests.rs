//! In-memory integration tests for cumulative flow reporting.

use super::helpers::{TestService, completed, days_ago, open, repo, service_at, service_over};
use chrono::TimeDelta;
use rstest::rstest;
use taskflow::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{DailyFlowBucket, FlowError},
    services::TaskStatsError,
};

fn seeded(repo: &InMemoryTaskRepository) -> Result<TestService, eyre::Report> {
    repo.insert(completed("plan", 6, 4)?)?;
    repo.insert(completed("build", 5, 2)?)?;
    repo.insert(open("ship", 3))?;
    repo.insert(open("celebrate", 2).marked_done_without_timestamp())?;
    Ok(service_over(repo))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn report_tracks_tasks_through_completion(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let service = seeded(&repo)?;

    let report = service.flow_report(None).await?;

    eyre::ensure!(report.window_days() == 6, "expected six days, got {}", report.window_days());
    let expectations = [
        (6, 1, 0),
        (5, 2, 0),
        (4, 1, 1),
        (3, 2, 1),
        (2, 2, 2),
        (1, 2, 2),
    ];
    for (ago, incomplete, complete) in expectations {
        let bucket = report
            .bucket(days_ago(ago))
            .ok_or_else(|| eyre::eyre!("missing bucket {ago} days ago"))?;
        eyre::ensure!(
            *bucket
                == DailyFlowBucket {
                    cumulative_incomplete: incomplete,
                    cumulative_complete: complete,
                },
            "unexpected bucket {ago} days ago: {bucket:?}"
        );
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rates_count_done_flag_over_window(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let service = seeded(&repo)?;

    let report = service.flow_report(None).await?;

    eyre::ensure!((report.avg_daily_throughput() - 0.5).abs() < f64::EPSILON);
    eyre::ensure!((report.avg_daily_backlog() - 1.0 / 6.0).abs() < f64::EPSILON);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn snapshot_changes_are_visible_on_next_call(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let service = seeded(&repo)?;
    let before = service.flow_report(None).await?;

    repo.insert(open("ancient", 9))?;
    let after = service.flow_report(None).await?;

    eyre::ensure!(before.window_days() == 6);
    eyre::ensure!(after.window_days() == 9);
    eyre::ensure!(after.first_day() == Some(days_ago(9)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn window_end_moves_only_with_the_service_clock(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    seeded(&repo)?;
    let after_midnight = days_ago(-1) + TimeDelta::milliseconds(1);

    let report = service_at(&repo, after_midnight).flow_report(None).await?;

    eyre::ensure!(report.window_days() == 7, "got {}", report.window_days());
    eyre::ensure!(report.first_day() == Some(days_ago(6)));
    eyre::ensure!(report.last_day() == Some(days_ago(0)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_store_surfaces_nothing_to_report(repo: InMemoryTaskRepository) {
    let result = service_over(&repo).flow_report(None).await;

    assert!(matches!(
        result,
        Err(TaskStatsError::Flow(FlowError::EmptyInput))
    ));
}
