use portal_core::model::{RoleId, UnitId};

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_roles() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Administrator"), "missing role in {html}");
    assert!(html.contains("Developer Interview Prep"), "missing role in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_module_progress() {
    let mut harness = setup_view_harness(ViewKind::Dashboard("developer".into()));
    harness
        .services
        .progress()
        .mark_complete(&RoleId::new("developer"), &UnitId::new("dev-int-1"))
        .await
        .expect("mark");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("LWC Interview Questions"), "missing module in {html}");
    assert!(html.contains("50%"), "missing percentage in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_unknown_role() {
    let mut harness = setup_view_harness(ViewKind::Dashboard("nonexistent".into()));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Role Not Found"), "missing not-found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_smoke_opens_first_unit() {
    let mut harness = setup_view_harness(ViewKind::Module(
        "developer".into(),
        "dev-interview-1".into(),
    ));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Unit 1 / 2"), "missing counter in {html}");
    assert!(html.contains("Salesforce Order of Execution"), "missing content in {html}");
    assert!(html.contains("Governor Limits"), "missing sidebar entry in {html}");
    assert!(html.contains("Next"), "missing advance button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_smoke_unknown_module_writes_nothing() {
    let mut harness = setup_view_harness(ViewKind::Module("developer".into(), "missing".into()));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Module Not Found"), "missing not-found in {html}");
    assert_eq!(
        harness.storage.kv.get("progress:developer").await.unwrap(),
        None
    );
}
