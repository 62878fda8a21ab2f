use crate::consts::*;
use crate::error::FormError;
use crate::settings::FormSettings;
use serde::Serialize;
use std::time::Duration;
use time::Date;
use time::macros::format_description;
use wso_core::{
    DelegateContact, DelegateKind, MeetingRecord, Normalizer, SubmissionKind, SubmitterData,
    Vocabulary, check_preconditions, validate,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "by", content = "value", rename_all = "lowercase")]
pub enum Locator {
    Id(String),
    XPath(String),
}

impl Locator {
    pub fn id(id: impl Into<String>) -> Self {
        Locator::Id(id.into())
    }

    pub fn radio(value: &str) -> Self {
        Locator::XPath(format!("//input[@type='radio' and @value='{value}']"))
    }

    pub fn checkbox(value: &str) -> Self {
        Locator::XPath(format!("//input[@type='checkbox' and @value='{value}']"))
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "#{id}"),
            Locator::XPath(xpath) => write!(f, "{xpath}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "text", rename_all = "lowercase")]
pub enum Fill {
    Type(String),
    Click,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldAction {
    pub role: &'static str,
    pub locator: Locator,
    pub fill: Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageName {
    Header,
    Status,
    ChangeSummary,
    NameAddress,
    ParticipantType,
    Contact,
    Details,
    Cma,
    Gr,
    Submitter,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormPage {
    pub page: PageName,
    /// Element whose presence means the page has rendered.
    pub ready: Locator,
    pub actions: Vec<FieldAction>,
    /// Clicked once the actions are done; `None` leaves the page as filled.
    pub advance: Option<Locator>,
}

impl FormPage {
    fn new(page: PageName, next_button: &str) -> Self {
        Self {
            page,
            ready: Locator::id(next_button),
            actions: Vec::new(),
            advance: Some(Locator::id(next_button)),
        }
    }

    fn type_text(&mut self, role: &'static str, locator: Locator, text: impl Into<String>) {
        self.actions.push(FieldAction {
            role,
            locator,
            fill: Fill::Type(text.into()),
        });
    }

    fn type_optional(&mut self, role: &'static str, locator: Locator, text: Option<&str>) {
        if let Some(text) = text.filter(|text| !text.trim().is_empty()) {
            self.type_text(role, locator, text);
        }
    }

    fn click(&mut self, role: &'static str, locator: Locator) {
        self.actions.push(FieldAction {
            role,
            locator,
            fill: Fill::Click,
        });
    }
}

/// Everything needed to turn one record into form input.
pub struct PlanRequest<'a> {
    pub record: &'a MeetingRecord,
    pub vocabulary: &'a Vocabulary,
    pub submitter: Option<&'a SubmitterData>,
    pub kind: SubmissionKind,
    pub effective_date: Date,
    pub submit: bool,
}

/// Ordered page-by-page input for one change submission.
#[derive(Debug, Clone, Serialize)]
pub struct FormPlan {
    pub kind: SubmissionKind,
    pub start_url: String,
    pub frame: Locator,
    pub frame_timeout_secs: u64,
    pub page_timeout_secs: u64,
    pub submit: bool,
    pub pages: Vec<FormPage>,
}

impl FormPlan {
    /// Fails on an invalid record or unmet preconditions before producing anything.
    pub fn build(request: &PlanRequest<'_>, settings: &FormSettings) -> Result<Self, FormError> {
        validate(request.record)?;
        check_preconditions(request.record, request.kind)?;
        if request.submit && request.submitter.is_none() {
            return Err(FormError::MissingSubmitter);
        }
        let start_url = settings.start_url(request.kind)?;

        let normalizer = Normalizer::new(request.record, request.vocabulary);
        let has_cma = normalizer.has_delegate(DelegateKind::Cma);
        let has_gr = normalizer.has_delegate(DelegateKind::Gr);

        let mut pages = vec![
            header_page(request.record),
            status_page(request.effective_date)?,
            summary_page(has_cma, has_gr),
            name_address_page(&normalizer),
            participant_page(&normalizer),
            contact_page(&normalizer),
            details_page(&normalizer),
        ];
        for (kind, present) in [(DelegateKind::Cma, has_cma), (DelegateKind::Gr, has_gr)] {
            match normalizer.delegate(kind) {
                Some(contact) if present => pages.push(delegate_page(&normalizer, kind, contact)),
                Some(_) => tracing::warn!(delegate = %kind, "delegate incomplete, skipping page"),
                None => {}
            }
        }
        pages.push(submitter_page(request.submitter, request.submit));

        tracing::debug!(
            meeting = %request.record.name,
            kind = %request.kind,
            pages = pages.len(),
            "built form plan"
        );

        Ok(Self {
            kind: request.kind,
            start_url,
            frame: Locator::XPath(settings.frame_xpath()),
            frame_timeout_secs: settings.frame_timeout_secs,
            page_timeout_secs: settings.page_timeout_secs,
            submit: request.submit,
            pages,
        })
    }

    pub fn frame_timeout(&self) -> Duration {
        Duration::from_secs(self.frame_timeout_secs)
    }

    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    pub fn page(&self, name: PageName) -> Option<&FormPage> {
        self.pages.iter().find(|page| page.page == name)
    }
}

fn header_page(record: &MeetingRecord) -> FormPage {
    let mut page = FormPage::new(PageName::Header, NEXT_HEADER);
    let wso_id = record.wso_id.map(|id| id.to_string()).unwrap_or_default();
    page.type_text("group_name", Locator::id(HEADER_GROUP_NAME), &record.name);
    page.type_text("wso_id", Locator::id(HEADER_WSO_ID), wso_id);
    page.type_text("district", Locator::id(HEADER_DISTRICT), record.district.to_string());
    page.type_text("area", Locator::id(HEADER_AREA), &record.area);
    page
}

fn status_page(effective_date: Date) -> Result<FormPage, FormError> {
    let mut page = FormPage::new(PageName::Status, NEXT_STATUS);
    let date = effective_date.format(format_description!("[month]-[day]-[year]"))?;
    page.click("status", Locator::radio(STATUS_CHANGE_VALUE));
    page.type_text("effective_date", Locator::id(STATUS_EFFECTIVE_DATE), date);
    Ok(page)
}

fn summary_page(has_cma: bool, has_gr: bool) -> FormPage {
    let mut page = FormPage::new(PageName::ChangeSummary, NEXT_SUMMARY);
    page.click("change_name_address", Locator::id(SUMMARY_NAME_ADDRESS));
    page.click("change_participants", Locator::id(SUMMARY_PARTICIPANTS));
    page.click("change_contact", Locator::id(SUMMARY_CONTACT));
    page.click("change_details", Locator::id(SUMMARY_DETAILS));
    if has_cma {
        page.click("change_cma", Locator::id(SUMMARY_CMA));
    }
    if has_gr {
        page.click("change_gr", Locator::id(SUMMARY_GR));
    }
    page
}

fn name_address_page(normalizer: &Normalizer<'_>) -> FormPage {
    let record = normalizer.record();
    let mut page = FormPage::new(PageName::NameAddress, NEXT_NAME_ADDRESS);
    page.type_text("group_name", Locator::id(NAME_GROUP_NAME), &record.name);
    page.click("language", Locator::radio(&normalizer.normalized_language(true)));
    page.type_text(
        "meeting_place",
        Locator::id(NAME_MEETING_PLACE),
        normalizer.meeting_place_label(),
    );
    page.type_text(
        "address_line_1",
        Locator::id(NAME_ADDRESS_LINE_1),
        &record.address_street_1,
    );
    page.type_text(
        "address_line_2",
        Locator::id(NAME_ADDRESS_LINE_2),
        &record.address_street_2,
    );
    page.type_text("city", Locator::id(NAME_CITY), normalizer.city_label());
    page.type_text("state", Locator::id(NAME_STATE), normalizer.state_label());
    page.type_text("zip", Locator::id(NAME_ZIP), normalizer.zip_label());
    page.type_text("country", Locator::id(NAME_COUNTRY), normalizer.country_label());
    page.type_text("public_email", Locator::id(NAME_EMAIL), &record.public_email);
    page
}

fn participant_page(normalizer: &Normalizer<'_>) -> FormPage {
    let mut page = FormPage::new(PageName::ParticipantType, NEXT_PARTICIPANTS);
    if let Some(label) = normalizer.participant_type_label() {
        page.click("participant_type", Locator::checkbox(&label));
    }
    page
}

fn contact_page(normalizer: &Normalizer<'_>) -> FormPage {
    let record = normalizer.record();
    let mut page = FormPage::new(PageName::Contact, NEXT_CONTACT);
    page.click("meeting_type", Locator::radio(normalizer.meeting_type().label()));
    if record.has_online_platform() {
        page.type_optional(
            "online_url",
            Locator::id(CONTACT_ONLINE_URL),
            record.online_url.as_deref(),
        );
        page.type_optional(
            "online_meeting_id",
            Locator::id(CONTACT_MEETING_ID),
            record.online_meeting_id.as_deref(),
        );
        page.type_optional(
            "online_password",
            Locator::id(CONTACT_PASSWORD),
            record.online_meeting_password.as_deref(),
        );
    }
    let instructions = normalizer.location_instructions();
    page.type_optional(
        "location_instructions",
        Locator::id(CONTACT_INSTRUCTIONS),
        Some(instructions.as_str()),
    );
    page
}

fn details_page(normalizer: &Normalizer<'_>) -> FormPage {
    let mut page = FormPage::new(PageName::Details, NEXT_DETAILS);
    let schedule = normalizer.schedule();
    page.type_text("day", Locator::id(DETAILS_DAY), schedule.day);
    page.type_text("hour", Locator::id(DETAILS_HOUR), schedule.hour);
    page.type_text("minute", Locator::id(DETAILS_MINUTE), schedule.minute);
    page.type_text("am_pm", Locator::id(DETAILS_AM_PM), schedule.am_pm);
    page.click("attendees", Locator::radio(&normalizer.attendees_label()));
    page.type_text(
        "language",
        Locator::id(DETAILS_LANGUAGE),
        normalizer.normalized_language(false),
    );
    for label in normalizer.ordered_option_labels() {
        page.click("option", Locator::checkbox(&label));
    }
    page
}

fn delegate_page(
    normalizer: &Normalizer<'_>,
    kind: DelegateKind,
    contact: &DelegateContact,
) -> FormPage {
    let (page_name, next, name_field, address, phone_field, email) = match kind {
        DelegateKind::Cma => (
            PageName::Cma,
            NEXT_CMA,
            CMA_FIELD,
            CMA_ADDRESS_FIELD,
            CMA_PHONE_FIELD,
            CMA_EMAIL,
        ),
        DelegateKind::Gr => (
            PageName::Gr,
            NEXT_GR,
            GR_FIELD,
            GR_ADDRESS_FIELD,
            GR_PHONE_FIELD,
            GR_EMAIL,
        ),
    };
    let mut page = FormPage::new(page_name, next);
    let (area, number) = contact.phone_parts();
    let country = normalizer.delegate_country_label(kind);

    page.type_text(
        "first_name",
        Locator::id(format!("first_{name_field}")),
        &contact.first_name,
    );
    page.type_text(
        "last_name",
        Locator::id(format!("last_{name_field}")),
        &contact.last_name,
    );
    page.type_text(
        "address_line_1",
        sub_field(address, "addr_line1"),
        &contact.street_address_1,
    );
    page.type_text(
        "address_line_2",
        sub_field(address, "addr_line2"),
        &contact.street_address_2,
    );
    page.type_text("city", sub_field(address, "city"), &contact.city);
    page.type_text("state", sub_field(address, "state"), &contact.state);
    page.type_text("zip", sub_field(address, "postal"), &contact.zip);
    page.type_text("country", sub_field(address, "country"), country);
    page.type_optional("phone_area", sub_field(phone_field, "area"), Some(area.as_str()));
    page.type_optional("phone_number", sub_field(phone_field, "phone"), Some(number.as_str()));
    page.type_optional("email", Locator::id(email), Some(contact.email.as_str()));
    if kind == DelegateKind::Gr {
        page.type_optional("comment", Locator::id(GR_COMMENT), contact.comment.as_deref());
    }
    page
}

fn submitter_page(submitter: Option<&SubmitterData>, submit: bool) -> FormPage {
    let mut page = FormPage {
        page: PageName::Submitter,
        ready: Locator::id(SUBMIT_BUTTON),
        actions: Vec::new(),
        advance: None,
    };
    if let Some(submitter) = submitter {
        let (area, number) = submitter.phone_parts();
        page.type_text("submitter_name", Locator::id(SUBMITTER_NAME), &submitter.name);
        page.type_optional(
            "submitter_phone_area",
            sub_field(SUBMITTER_PHONE_FIELD, "area"),
            Some(area.as_str()),
        );
        page.type_optional(
            "submitter_phone_number",
            sub_field(SUBMITTER_PHONE_FIELD, "phone"),
            Some(number.as_str()),
        );
        page.type_text("submitter_email", Locator::id(SUBMITTER_EMAIL), &submitter.email);
        if submit {
            page.advance = Some(Locator::id(SUBMIT_BUTTON));
        }
    }
    page
}

/// Sub-field of a composite JotForm widget, e.g. `input_142_city`.
fn sub_field(field: u32, part: &str) -> Locator {
    Locator::Id(format!("input_{field}_{part}"))
}
