//! In-memory integration tests for contributor registration.

use super::helpers::{ElectionHarness, TestResult, harness};
use elector::contributor::{
    domain::{Amount, ContractRole},
    services::DirectoryError,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_contributor_is_found_by_identity(harness: ElectionHarness) -> TestResult {
    let directory = harness.election.directory();
    let registered = directory.register("amihaiemil", "github").await?;

    let found = directory.get_by_id("amihaiemil", "github").await?;

    eyre::ensure!(found.as_ref() == Some(&registered), "lookup mismatch: {found:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_registration_adds_a_single_default_contract(
    harness: ElectionHarness,
) -> TestResult {
    let directory = harness.election.directory();
    directory.register("amihaiemil", "github").await?;
    directory.register("amihaiemil", "github").await?;
    let contributor = directory.register("amihaiemil", "github").await?;

    eyre::ensure!(
        harness.store.contract_count()? == 1,
        "expected one stored contract"
    );
    let contract = contributor
        .contract_for(&harness.scope, ContractRole::Dev)
        .ok_or_else(|| eyre::eyre!("missing default contract"))?;
    eyre::ensure!(contract.hourly_rate() == Amount::ZERO, "default rate must be zero");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_registrations_of_the_same_identity_settle_on_one_contract(
    harness: ElectionHarness,
) -> TestResult {
    let directory = harness.yielding_directory();

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..8 {
        let view = directory.clone();
        tasks.spawn(async move { view.register("mihai", "github").await });
    }

    let mut registered = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        registered.push(joined??);
    }
    let expected = directory
        .get_by_id("mihai", "github")
        .await?
        .ok_or_else(|| eyre::eyre!("contributor missing after registration"))?;
    eyre::ensure!(registered.len() == 8, "every registration should finish");
    eyre::ensure!(
        registered.iter().all(|contributor| *contributor == expected),
        "registrations returned different contributors: {registered:?}"
    );
    eyre::ensure!(harness.store.contract_count()? == 1, "duplicate contract stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registration_rejects_provider_names_in_another_case(
    harness: ElectionHarness,
) -> TestResult {
    let result = harness
        .election
        .directory()
        .register("amihaiemil", "GitHub")
        .await;

    eyre::ensure!(
        matches!(result, Err(DirectoryError::InvalidProvider { .. })),
        "expected invalid provider, got {result:?}"
    );
    eyre::ensure!(harness.store.contract_count()? == 0, "no contract expected");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn gitlab_project_rejects_github_contributors() -> TestResult {
    let harness = ElectionHarness::new("group/project", "gitlab", 1)?;

    let result = harness
        .election
        .directory()
        .register("amihaiemil", "github")
        .await;

    eyre::ensure!(
        matches!(result, Err(DirectoryError::InvalidProvider { .. })),
        "expected invalid provider, got {result:?}"
    );
    eyre::ensure!(harness.store.contract_count()? == 0, "no contract expected");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn directory_guards_against_other_projects(harness: ElectionHarness) -> TestResult {
    let directory = harness.election.directory();
    directory.register("amihaiemil", "github").await?;

    let own = directory.of_project("self-xdsd/self-web", "github")?;
    eyre::ensure!(own.contributors().await?.len() == 1, "own view should list contributor");

    let result = directory.of_project("self-xdsd/self-core", "github");
    eyre::ensure!(
        matches!(result, Err(DirectoryError::ScopeMismatch { .. })),
        "expected scope mismatch"
    );
    eyre::ensure!(
        directory.contributors().await?.len() == 1,
        "scope check must not mutate the directory"
    );
    Ok(())
}
