//! Core lead-flow scenarios
//!
//! Each scenario drives the real controller against the real endpoint and
//! reports what failed instead of panicking.

use std::time::Duration;

use controller::{
    FieldName, FormController, RealSubmissionEndpoint, ResubmitPolicy, SitePresentation,
    SubmissionStatus,
};

use crate::runtime::EndpointHarness;
use crate::testing::assertions::Checks;
use crate::testing::ScenarioResult;

fn classic_controller(
    leads_url: &str,
    policy: ResubmitPolicy,
) -> anyhow::Result<FormController<RealSubmissionEndpoint>> {
    let endpoint = RealSubmissionEndpoint::with_timeout(leads_url, Duration::from_secs(5))?;
    Ok(FormController::with_policy(
        SitePresentation::classic().site,
        endpoint,
        policy,
    ))
}

async fn fill_valid(form: &FormController<RealSubmissionEndpoint>) {
    form.update_field(FieldName::Name, "Jane").await;
    form.update_field(FieldName::Email, "jane@x.com").await;
    form.update_field(FieldName::Message, "Help").await;
}

/// Happy path: accepted lead clears the draft and lands in the store
pub async fn accepted_lead_round_trip() -> anyhow::Result<ScenarioResult> {
    tracing::info!("🧪 Accepted lead round trip");
    let mut checks = Checks::new();

    let harness = EndpointHarness::start().await?;
    let form = classic_controller(&harness.leads_url(), ResubmitPolicy::default())?;

    fill_valid(&form).await;
    let status = form.submit().await;

    checks.ensure(
        status == SubmissionStatus::Success,
        format!("expected Success, got {status:?}"),
    );
    checks.ensure(
        form.draft().await.name.is_empty(),
        "draft should be cleared after acceptance",
    );
    checks.ensure(
        harness.leads_received().await? == 1,
        "endpoint should have stored exactly one lead",
    );

    Ok(checks.finish("accepted_lead_round_trip"))
}

/// Rejection keeps the draft so the user does not retype
pub async fn rejected_lead_keeps_draft() -> anyhow::Result<ScenarioResult> {
    tracing::info!("🧪 Rejected lead keeps draft");
    let mut checks = Checks::new();

    let harness = EndpointHarness::start().await?;
    let form = classic_controller(&harness.leads_url(), ResubmitPolicy::default())?;

    form.update_field(FieldName::Name, "Jane").await;
    form.update_field(FieldName::Email, "not-an-email").await;
    form.update_field(FieldName::Message, "Help").await;

    let status = form.submit().await;

    checks.ensure(
        status == SubmissionStatus::Error,
        format!("expected Error, got {status:?}"),
    );
    let draft = form.draft().await;
    checks.ensure(
        draft.name == "Jane" && draft.email == "not-an-email" && draft.message == "Help",
        "draft should be unchanged after a rejection",
    );
    checks.ensure(
        harness.leads_received().await? == 0,
        "rejected lead must not be stored",
    );

    Ok(checks.finish("rejected_lead_keeps_draft"))
}

/// A dead endpoint collapses into the same Error status
pub async fn endpoint_down_reports_error() -> anyhow::Result<ScenarioResult> {
    tracing::info!("🧪 Endpoint down reports error");
    let mut checks = Checks::new();

    let harness = EndpointHarness::start().await?;
    let leads_url = harness.leads_url();
    harness.shutdown();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let form = classic_controller(&leads_url, ResubmitPolicy::default())?;
    fill_valid(&form).await;

    let status = form.submit().await;

    checks.ensure(
        status == SubmissionStatus::Error,
        format!("expected Error against a dead endpoint, got {status:?}"),
    );
    checks.ensure(
        !form.draft().await.name.is_empty(),
        "draft should survive a transport failure",
    );

    Ok(checks.finish("endpoint_down_reports_error"))
}

/// A failed attempt does not stick; the next submit can succeed
pub async fn status_not_sticky_after_failure() -> anyhow::Result<ScenarioResult> {
    tracing::info!("🧪 Status not sticky after failure");
    let mut checks = Checks::new();

    let harness = EndpointHarness::start().await?;
    let form = classic_controller(&harness.leads_url(), ResubmitPolicy::default())?;

    form.update_field(FieldName::Name, "Jane").await;
    form.update_field(FieldName::Email, "not-an-email").await;
    form.update_field(FieldName::Message, "Help").await;

    checks.ensure(
        form.submit().await == SubmissionStatus::Error,
        "first attempt should be rejected",
    );

    // The user corrects the one bad field and tries again
    form.update_field(FieldName::Email, "jane@x.com").await;
    checks.ensure(
        form.submit().await == SubmissionStatus::Success,
        "second attempt should succeed",
    );
    checks.ensure(
        form.draft().await.email.is_empty(),
        "draft should be cleared after the successful retry",
    );
    checks.ensure(
        harness.leads_received().await? == 1,
        "exactly one lead should be stored",
    );

    Ok(checks.finish("status_not_sticky_after_failure"))
}

/// Both resubmit policies, observed at the endpoint
pub async fn resubmit_policies() -> anyhow::Result<ScenarioResult> {
    tracing::info!("🧪 Resubmit policies under a double submit");
    let mut checks = Checks::new();

    // Default policy: the double-click is dropped
    let harness = EndpointHarness::start().await?;
    let form = classic_controller(&harness.leads_url(), ResubmitPolicy::BlockWhilePending)?;
    fill_valid(&form).await;

    let (first, second) = tokio::join!(form.submit(), form.submit());
    let outcomes = [first, second];
    checks.ensure(
        outcomes.contains(&SubmissionStatus::Pending),
        "one of the two submits should be dropped while pending",
    );
    checks.ensure(
        harness.leads_received().await? == 1,
        "blocking policy should produce exactly one stored lead",
    );

    // Legacy policy: every call goes out
    let harness = EndpointHarness::start().await?;
    let form = classic_controller(&harness.leads_url(), ResubmitPolicy::AllowConcurrent)?;
    fill_valid(&form).await;

    let (first, second) = tokio::join!(form.submit(), form.submit());
    checks.ensure(
        first == SubmissionStatus::Success && second == SubmissionStatus::Success,
        "both concurrent submits should succeed",
    );
    checks.ensure(
        harness.leads_received().await? == 2,
        "concurrent policy should produce two stored leads",
    );

    Ok(checks.finish("resubmit_policies"))
}

/// Every presentation variant submits through the same contract
pub async fn every_variant_shares_the_contract() -> anyhow::Result<ScenarioResult> {
    tracing::info!("🧪 Every presentation variant shares the contract");
    let mut checks = Checks::new();

    let harness = EndpointHarness::start().await?;

    for presentation in SitePresentation::all() {
        let endpoint =
            RealSubmissionEndpoint::with_timeout(harness.leads_url(), Duration::from_secs(5))?;
        let form = FormController::new(presentation.site.clone(), endpoint);
        fill_valid(&form).await;

        let status = form.submit().await;
        checks.ensure(
            status == SubmissionStatus::Success,
            format!("variant {} should submit successfully", presentation.site),
        );
    }

    checks.ensure(
        harness.leads_received().await? == 4,
        "one stored lead per variant",
    );

    Ok(checks.finish("every_variant_shares_the_contract"))
}

/// Run one named scenario
pub async fn run_scenario(name: &str) -> anyhow::Result<Vec<ScenarioResult>> {
    let result = match name {
        "accepted" => accepted_lead_round_trip().await?,
        "rejected" => rejected_lead_keeps_draft().await?,
        "endpoint-down" => endpoint_down_reports_error().await?,
        "retry" => status_not_sticky_after_failure().await?,
        "resubmit" => resubmit_policies().await?,
        "variants" => every_variant_shares_the_contract().await?,
        "all" => return run_all().await,
        _ => anyhow::bail!("unknown scenario: {name}"),
    };
    Ok(vec![result])
}

/// Run the full scenario matrix
pub async fn run_all() -> anyhow::Result<Vec<ScenarioResult>> {
    Ok(vec![
        accepted_lead_round_trip().await?,
        rejected_lead_keeps_draft().await?,
        endpoint_down_reports_error().await?,
        status_not_sticky_after_failure().await?,
        resubmit_policies().await?,
        every_variant_shares_the_contract().await?,
    ])
}
