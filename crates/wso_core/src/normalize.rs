use crate::schema::{DelegateContact, DelegateKind, MeetingRecord, SubmitterData, non_blank};
use crate::vocabulary::Vocabulary;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MeetingType {
    OnlineOnly,
    PhysicalOnly,
    Hybrid,
}

impl MeetingType {
    /// Radio label on the form.
    pub fn label(self) -> &'static str {
        match self {
            MeetingType::OnlineOnly => "Online only",
            MeetingType::PhysicalOnly => "In-person only",
            MeetingType::Hybrid => "both In-person and Online",
        }
    }
}

/// Day, hour, minute and AM/PM exactly as the form's select menus spell them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub am_pm: &'static str,
}

/// Read-only view translating a record into the form's vocabulary.
///
/// Never fails: missing or unrecognized optional fields degrade to the
/// vocabulary's fallbacks.
pub struct Normalizer<'a> {
    record: &'a MeetingRecord,
    vocabulary: &'a Vocabulary,
}

impl<'a> Normalizer<'a> {
    pub fn new(record: &'a MeetingRecord, vocabulary: &'a Vocabulary) -> Self {
        Self { record, vocabulary }
    }

    pub fn record(&self) -> &'a MeetingRecord {
        self.record
    }

    pub fn meeting_type(&self) -> MeetingType {
        if !self.record.has_physical_location() {
            MeetingType::OnlineOnly
        } else if !self.record.has_online_platform() {
            MeetingType::PhysicalOnly
        } else {
            MeetingType::Hybrid
        }
    }

    /// Restricted mode picks one of the form's radio values; unrestricted
    /// mode feeds a free-text field and keeps unknown languages verbatim.
    pub fn normalized_language(&self, restricted: bool) -> String {
        let vocabulary = self.vocabulary;
        let Some(language) = self.record.language.as_deref().filter(|l| !l.trim().is_empty())
        else {
            return vocabulary.default_language.clone();
        };
        if language.eq_ignore_ascii_case(&vocabulary.default_language) {
            return vocabulary.default_language.clone();
        }
        if let Some(accepted) = vocabulary
            .accepted_languages
            .iter()
            .find(|accepted| accepted.eq_ignore_ascii_case(language))
        {
            return accepted.clone();
        }
        if restricted {
            vocabulary.default_language.clone()
        } else {
            language.to_string()
        }
    }

    pub fn meeting_place_label(&self) -> String {
        or_fallback(
            self.record.physical_location.as_deref(),
            &self.vocabulary.online_only_place,
        )
    }

    pub fn city_label(&self) -> String {
        or_fallback(self.record.address_city.as_deref(), &self.vocabulary.fallback_city)
    }

    pub fn state_label(&self) -> String {
        or_fallback(self.record.address_state.as_deref(), &self.vocabulary.fallback_state)
    }

    pub fn zip_label(&self) -> String {
        or_fallback(self.record.address_zip.as_deref(), &self.vocabulary.fallback_zip)
    }

    pub fn country_label(&self) -> String {
        country_label_in(self.vocabulary, self.record.address_country.as_deref())
    }

    /// First vocabulary entry whose tag the record carries.
    pub fn participant_type_label(&self) -> Option<String> {
        self.vocabulary
            .participant_label(&self.record.participant_types)
            .map(str::to_string)
    }

    pub fn attendees_label(&self) -> String {
        if self.record.members_only {
            self.vocabulary.members_only_attendees.clone()
        } else {
            self.vocabulary.open_attendees.clone()
        }
    }

    pub fn schedule(&self) -> Schedule {
        let hour = self.record.start_hour % 24;
        let hour_12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        Schedule {
            day: self.vocabulary.day_name(self.record.day_of_week).to_string(),
            hour: hour_12.to_string(),
            minute: quarter_hour(self.record.start_minute).to_string(),
            am_pm: if hour < 12 { "AM" } else { "PM" },
        }
    }

    pub fn option_labels(&self) -> BTreeSet<String> {
        self.record
            .options
            .iter()
            .filter_map(|tag| self.vocabulary.option_label(tag))
            .map(str::to_string)
            .collect()
    }

    /// Options in vocabulary order, for clicking checkboxes deterministically.
    pub fn ordered_option_labels(&self) -> Vec<String> {
        let tags = lowered(&self.record.options);
        self.vocabulary
            .options
            .iter()
            .filter(|entry| tags.contains(&entry.tag.to_ascii_lowercase()))
            .map(|entry| entry.label.clone())
            .collect()
    }

    pub fn location_instructions(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        if self.record.has_physical_location()
            && !self.record.location_instructions.trim().is_empty()
        {
            lines.push(self.record.location_instructions.clone());
        }
        if let Some(page) = self.record.listing_page.as_deref().filter(|p| !p.trim().is_empty()) {
            lines.push(format!("See {page} for complete information."));
        }
        lines.join("\n")
    }

    pub fn delegate(&self, kind: DelegateKind) -> Option<&'a DelegateContact> {
        match kind {
            DelegateKind::Cma => self.record.cma.as_ref(),
            DelegateKind::Gr => self.record.gr.as_ref(),
        }
    }

    pub fn has_delegate(&self, kind: DelegateKind) -> bool {
        self.delegate(kind)
            .is_some_and(|contact| contact.is_complete(kind))
    }

    pub fn delegate_country_label(&self, kind: DelegateKind) -> String {
        let raw = self.delegate(kind).map(|contact| contact.country.as_str());
        country_label_in(self.vocabulary, raw)
    }
}

impl DelegateContact {
    /// All fields the form requires for this delegate role are filled in.
    pub fn is_complete(&self, kind: DelegateKind) -> bool {
        let common = [
            &self.first_name,
            &self.last_name,
            &self.street_address_1,
            &self.city,
            &self.state,
            &self.zip,
        ]
        .iter()
        .all(|field| !field.trim().is_empty());
        match kind {
            DelegateKind::Cma => {
                common && !self.phone_parts().1.is_empty() && !self.email.trim().is_empty()
            }
            DelegateKind::Gr => common,
        }
    }

    pub fn phone_parts(&self) -> (String, String) {
        phone_parts(&self.phone)
    }
}

impl SubmitterData {
    pub fn phone_parts(&self) -> (String, String) {
        phone_parts(&self.phone)
    }
}

/// Splits a phone number into area code and the remaining digits.
pub fn phone_parts(raw: &str) -> (String, String) {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let split = digits.len().min(3);
    (digits[..split].to_string(), digits[split..].to_string())
}

/// The form only knows three countries; everything else files as US.
pub fn country_label(raw: Option<&str>) -> String {
    country_label_in(&Vocabulary::default(), raw)
}

fn country_label_in(vocabulary: &Vocabulary, raw: Option<&str>) -> String {
    match raw {
        Some(country) if vocabulary.accepted_countries.iter().any(|c| c == country) => {
            country.to_string()
        }
        _ => vocabulary.default_country.clone(),
    }
}

pub fn quarter_hour(minute: u8) -> u8 {
    let minute = minute % 60;
    minute - minute % 15
}

fn or_fallback(raw: Option<&str>, fallback: &str) -> String {
    if non_blank(raw) {
        raw.unwrap_or_default().to_string()
    } else {
        fallback.to_string()
    }
}

fn lowered(tags: &BTreeSet<String>) -> BTreeSet<String> {
    tags.iter().map(|tag| tag.to_ascii_lowercase()).collect()
}
