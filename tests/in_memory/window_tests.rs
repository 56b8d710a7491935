//! In-memory integration tests for created-versus-completed windows.

use super::helpers::{completed, days_ago, open, repo, service_over};
use rstest::rstest;
use taskflow::task::adapters::memory::InMemoryTaskRepository;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn window_compares_creation_and_completion(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    repo.insert(completed("plan", 6, 4)?)?;
    repo.insert(completed("build", 5, 2)?)?;
    repo.insert(open("ship", 3))?;
    let service = service_over(&repo);

    let selection = service
        .tasks_between(Some(days_ago(7)), Some(days_ago(3)))
        .await?;

    let created: Vec<&str> = selection
        .created_in_window
        .iter()
        .map(|task| task.title())
        .collect();
    eyre::ensure!(created == vec!["plan", "build"], "created: {created:?}");
    eyre::ensure!(selection.completed_count() == 1);
    eyre::ensure!(selection.is_backlog_growing());
    Ok(())
}
