use jotform::consts::*;
use jotform::*;
use time::macros::date;
use wso_core::{MeetingRecord, SubmissionKind, SubmitterData, Vocabulary};

fn plan(submit: bool) -> FormPlan {
    let record = MeetingRecord {
        wso_id: Some(645),
        day_of_week: 2,
        start_hour: 20,
        physical_location: Some("Albany Community Center".to_string()),
        ..MeetingRecord::new("Albany-Berkeley Tuesday Night AFG")
    };
    let submitter = SubmitterData {
        name: "Web Admin".to_string(),
        phone: "510-926-0499".to_string(),
        email: "webadmin@alanonbythebay.org".to_string(),
    };
    let vocabulary = Vocabulary::default();
    let settings = FormSettings {
        records_endpoint: Some("https://records.example.org".to_string()),
        ..FormSettings::default()
    };
    let request = PlanRequest {
        record: &record,
        vocabulary: &vocabulary,
        submitter: Some(&submitter),
        kind: SubmissionKind::Physical,
        effective_date: date!(2026 - 10 - 16),
        submit,
    };
    FormPlan::build(&request, &settings).unwrap()
}

#[tokio::test]
async fn dry_run_visits_every_page_in_order() {
    let plan = plan(false);
    let mut driver = RecordingDriver::new();
    let report = run_plan(&mut driver, &plan).await.unwrap();

    assert_eq!(report.pages.len(), plan.pages.len());
    assert!(!report.submitted);
    assert_eq!(driver.events[0], DriverEvent::Open(plan.start_url.clone()));
    assert_eq!(driver.events[1], DriverEvent::EnterFrame(plan.frame.clone()));
    assert_eq!(driver.events[2], DriverEvent::WaitFor(Locator::id(NEXT_HEADER)));
    assert_eq!(
        driver.typed(&Locator::id(HEADER_GROUP_NAME)),
        Some("Albany-Berkeley Tuesday Night AFG")
    );

    let next_clicks: Vec<&Locator> = driver
        .clicks()
        .filter(|locator| {
            matches!(locator, Locator::Id(id) if id.starts_with("form-pagebreak-next"))
        })
        .collect();
    assert_eq!(next_clicks.len(), plan.pages.len() - 1);
    assert!(!driver.clicks().any(|locator| *locator == Locator::id(SUBMIT_BUTTON)));
}

#[tokio::test]
async fn submit_clicks_the_submit_button_last() {
    let plan = plan(true);
    let mut driver = RecordingDriver::new();
    let report = run_plan(&mut driver, &plan).await.unwrap();

    assert!(report.submitted);
    assert_eq!(
        driver.events.last(),
        Some(&DriverEvent::Click(Locator::id(SUBMIT_BUTTON)))
    );
}

#[tokio::test]
async fn missing_frame_times_out_before_any_input() {
    let plan = plan(false);
    let mut driver = RecordingDriver::new().without(plan.frame.clone());
    let err = run_plan(&mut driver, &plan).await.unwrap_err();

    assert!(matches!(err, FormError::Timeout { .. }));
    assert_eq!(driver.events.len(), 1);
}

#[tokio::test]
async fn missing_field_aborts_the_run() {
    let plan = plan(true);
    let mut driver = RecordingDriver::new().without(Locator::id(NAME_CITY));
    let err = run_plan(&mut driver, &plan).await.unwrap_err();

    match err {
        FormError::ElementNotFound(locator) => assert_eq!(locator, Locator::id(NAME_CITY)),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!driver.clicks().any(|locator| *locator == Locator::id(NEXT_NAME_ADDRESS)));
    assert!(!driver.clicks().any(|locator| *locator == Locator::id(SUBMIT_BUTTON)));
}

#[tokio::test]
async fn page_that_never_renders_times_out() {
    let plan = plan(false);
    let mut driver = RecordingDriver::new().without(Locator::id(NEXT_DETAILS));
    let err = run_plan(&mut driver, &plan).await.unwrap_err();

    match err {
        FormError::Timeout { locator, timeout } => {
            assert_eq!(locator, Locator::id(NEXT_DETAILS));
            assert_eq!(timeout, plan.page_timeout());
        }
        other => panic!("unexpected error: {other}"),
    }
}
