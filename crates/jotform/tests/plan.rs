use jotform::consts::*;
use jotform::*;
use std::collections::BTreeSet;
use time::macros::date;
use wso_core::{
    DelegateContact, MeetingRecord, RecordError, SubmissionKind, SubmitterData, Vocabulary,
};

fn settings() -> FormSettings {
    FormSettings {
        records_endpoint: Some("https://records.example.org".to_string()),
        online_change_path: Some("/changes-online-group/".to_string()),
        ..FormSettings::default()
    }
}

fn tuesday_night() -> MeetingRecord {
    MeetingRecord {
        wso_id: Some(645),
        day_of_week: 2,
        start_hour: 20,
        start_minute: 10,
        duration: 90,
        physical_location: Some("Albany Community Center".to_string()),
        address_street_1: "1249 Marin Ave".to_string(),
        public_email: "al.anon.group.645@gmail.com".to_string(),
        options: ["beginner", "ADA", "bogus"].iter().map(|s| s.to_string()).collect(),
        participant_types: BTreeSet::from(["women".to_string()]),
        ..MeetingRecord::new("Albany-Berkeley Tuesday Night AFG")
    }
}

fn submitter() -> SubmitterData {
    SubmitterData {
        name: "Web Admin".to_string(),
        phone: "(510) 926-0499".to_string(),
        email: "webadmin@alanonbythebay.org".to_string(),
    }
}

fn gr() -> DelegateContact {
    DelegateContact {
        first_name: "Sam".to_string(),
        last_name: "Roe".to_string(),
        street_address_1: "2 Oak St".to_string(),
        city: "Albany".to_string(),
        state: "California".to_string(),
        zip: "94706".to_string(),
        comment: Some("Rotates in January".to_string()),
        ..DelegateContact::default()
    }
}

fn build(
    record: &MeetingRecord,
    submitter: Option<&SubmitterData>,
    submit: bool,
) -> Result<FormPlan, FormError> {
    let vocabulary = Vocabulary::default();
    let request = PlanRequest {
        record,
        vocabulary: &vocabulary,
        submitter,
        kind: SubmissionKind::Physical,
        effective_date: date!(2026 - 10 - 16),
        submit,
    };
    FormPlan::build(&request, &settings())
}

fn typed<'a>(page: &'a FormPage, role: &str) -> Option<&'a str> {
    page.actions.iter().find_map(|action| match &action.fill {
        Fill::Type(text) if action.role == role => Some(text.as_str()),
        _ => None,
    })
}

fn clicked(page: &FormPage) -> Vec<&Locator> {
    page.actions
        .iter()
        .filter(|action| action.fill == Fill::Click)
        .map(|action| &action.locator)
        .collect()
}

#[test]
fn pages_follow_form_order_without_delegates() {
    let record = tuesday_night();
    let plan = build(&record, Some(&submitter()), false).unwrap();
    let order: Vec<PageName> = plan.pages.iter().map(|page| page.page).collect();
    assert_eq!(
        order,
        vec![
            PageName::Header,
            PageName::Status,
            PageName::ChangeSummary,
            PageName::NameAddress,
            PageName::ParticipantType,
            PageName::Contact,
            PageName::Details,
            PageName::Submitter,
        ]
    );
    assert_eq!(
        plan.start_url,
        "https://records.example.org/changes-existing-al-anon-group/group-records-change-form/"
    );
    assert_eq!(plan.frame, Locator::XPath("//*[@title='Group Records Change']".to_string()));
}

#[test]
fn header_and_status_values() {
    let record = tuesday_night();
    let plan = build(&record, None, false).unwrap();

    let header = plan.page(PageName::Header).unwrap();
    assert_eq!(typed(header, "wso_id"), Some("645"));
    assert_eq!(typed(header, "district"), Some("26"));
    assert_eq!(typed(header, "area"), Some("California North"));
    assert_eq!(header.advance, Some(Locator::id(NEXT_HEADER)));

    let status = plan.page(PageName::Status).unwrap();
    assert_eq!(typed(status, "effective_date"), Some("10-16-2026"));
    assert_eq!(clicked(status), vec![&Locator::radio("Change")]);
}

#[test]
fn details_page_carries_normalized_schedule() {
    let record = tuesday_night();
    let plan = build(&record, None, false).unwrap();
    let details = plan.page(PageName::Details).unwrap();

    assert_eq!(typed(details, "day"), Some("Tuesday"));
    assert_eq!(typed(details, "hour"), Some("8"));
    assert_eq!(typed(details, "minute"), Some("0"));
    assert_eq!(typed(details, "am_pm"), Some("PM"));
    assert_eq!(typed(details, "language"), Some("English"));
    assert_eq!(
        clicked(details),
        vec![
            &Locator::radio("Families, Friends, and Observers welcome"),
            &Locator::checkbox("Handicap Access"),
            &Locator::checkbox("Beginners"),
        ]
    );
}

#[test]
fn name_address_page_uses_fallbacks() {
    let record = tuesday_night();
    let plan = build(&record, None, false).unwrap();
    let page = plan.page(PageName::NameAddress).unwrap();
    assert_eq!(typed(page, "meeting_place"), Some("Albany Community Center"));
    assert_eq!(typed(page, "city"), Some("Berkeley"));
    assert_eq!(typed(page, "zip"), Some("94707"));
    assert_eq!(typed(page, "country"), Some("United States"));
    assert_eq!(clicked(page), vec![&Locator::radio("English")]);

    let participants = plan.page(PageName::ParticipantType).unwrap();
    assert_eq!(clicked(participants), vec![&Locator::checkbox("Women")]);
}

#[test]
fn gr_page_appears_only_when_complete() {
    let record = MeetingRecord {
        gr: Some(gr()),
        cma: Some(DelegateContact {
            email: String::new(),
            ..gr()
        }),
        ..tuesday_night()
    };
    let plan = build(&record, None, false).unwrap();
    assert!(plan.page(PageName::Cma).is_none());

    let gr_page = plan.page(PageName::Gr).unwrap();
    assert_eq!(typed(gr_page, "city"), Some("Albany"));
    assert_eq!(typed(gr_page, "country"), Some("United States"));
    assert_eq!(typed(gr_page, "comment"), Some("Rotates in January"));
    assert_eq!(typed(gr_page, "phone_area"), None);

    let summary = plan.page(PageName::ChangeSummary).unwrap();
    let ticks = clicked(summary);
    assert!(ticks.contains(&&Locator::id(SUMMARY_GR)));
    assert!(!ticks.contains(&&Locator::id(SUMMARY_CMA)));
}

#[test]
fn cma_page_splits_phone() {
    let record = MeetingRecord {
        cma: Some(DelegateContact {
            phone: "510.555.1212".to_string(),
            email: "cma@example.org".to_string(),
            ..gr()
        }),
        ..tuesday_night()
    };
    let plan = build(&record, None, false).unwrap();
    let cma = plan.page(PageName::Cma).unwrap();
    assert_eq!(typed(cma, "phone_area"), Some("510"));
    assert_eq!(typed(cma, "phone_number"), Some("5551212"));
    assert_eq!(typed(cma, "email"), Some("cma@example.org"));
    assert_eq!(typed(cma, "comment"), None);
}

#[test]
fn contact_page_for_online_only() {
    let record = MeetingRecord {
        physical_location: None,
        online_platform: Some("Zoom".to_string()),
        online_url: Some("https://zoom.us/j/123".to_string()),
        online_meeting_id: Some("123".to_string()),
        listing_page: Some("https://alanonbythebay.org/m/645".to_string()),
        location_instructions: "Side door".to_string(),
        ..tuesday_night()
    };
    let plan = build(&record, None, false).unwrap();
    let contact = plan.page(PageName::Contact).unwrap();
    assert_eq!(clicked(contact), vec![&Locator::radio("Online only")]);
    assert_eq!(typed(contact, "online_url"), Some("https://zoom.us/j/123"));
    assert_eq!(typed(contact, "online_password"), None);
    assert_eq!(
        typed(contact, "location_instructions"),
        Some("See https://alanonbythebay.org/m/645 for complete information.")
    );

    let name = plan.page(PageName::NameAddress).unwrap();
    assert_eq!(
        typed(name, "meeting_place"),
        Some("Currently meeting online only, see link for details")
    );
}

#[test]
fn submit_button_only_when_asked() {
    let record = tuesday_night();
    let plan = build(&record, Some(&submitter()), false).unwrap();
    let last = plan.pages.last().unwrap();
    assert_eq!(last.page, PageName::Submitter);
    assert_eq!(last.advance, None);
    assert_eq!(typed(last, "submitter_phone_area"), Some("510"));

    let plan = build(&record, Some(&submitter()), true).unwrap();
    assert_eq!(plan.pages.last().unwrap().advance, Some(Locator::id(SUBMIT_BUTTON)));
}

#[test]
fn preconditions_fail_before_planning() {
    let record = MeetingRecord {
        wso_id: None,
        ..tuesday_night()
    };
    assert!(matches!(
        build(&record, None, false),
        Err(FormError::Precondition(RecordError::MissingRegistryId))
    ));

    assert!(matches!(
        build(&tuesday_night(), None, true),
        Err(FormError::MissingSubmitter)
    ));

    let vocabulary = Vocabulary::default();
    let record = tuesday_night();
    let request = PlanRequest {
        record: &record,
        vocabulary: &vocabulary,
        submitter: None,
        kind: SubmissionKind::Online,
        effective_date: date!(2026 - 10 - 16),
        submit: false,
    };
    assert!(matches!(
        FormPlan::build(&request, &settings()),
        Err(FormError::Precondition(RecordError::MissingOnlinePlatform))
    ));
}

#[test]
fn invalid_record_is_rejected_before_planning() {
    let record = MeetingRecord {
        day_of_week: 7,
        ..tuesday_night()
    };
    assert!(matches!(
        build(&record, None, false),
        Err(FormError::Precondition(RecordError::Invalid { field: "day_of_week", .. }))
    ));

    let record = MeetingRecord {
        physical_location: None,
        ..tuesday_night()
    };
    assert!(matches!(
        build(&record, None, false),
        Err(FormError::Precondition(RecordError::NoLocation))
    ));

    let record = MeetingRecord {
        name: "  ".to_string(),
        ..tuesday_night()
    };
    assert!(matches!(
        build(&record, None, false),
        Err(FormError::Precondition(RecordError::Invalid { field: "name", .. }))
    ));
}

#[test]
fn plan_serializes_for_review() {
    let record = tuesday_night();
    let plan = build(&record, None, false).unwrap();
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["kind"], "physical");
    assert_eq!(json["pages"][0]["page"], "header");
    assert_eq!(json["pages"][0]["ready"]["by"], "id");
    assert_eq!(json["pages"][0]["actions"][0]["fill"]["action"], "type");
}
