use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    Weekly,
    Monthly,
}

/// One group's meeting, as registered with WSO.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MeetingRecord {
    pub name: String,
    pub listing_page: Option<String>,

    // schedule
    pub day_of_week: u8,    // Sunday = 0
    pub start_hour: u8,     // 24-hour clock
    pub start_minute: u8,   // rounded down to the quarter hour on the form
    pub duration: u32,      // minutes
    pub repeat_type: RepeatType,
    pub repeat_index: u32,  // weekly spacing, or which week of the month

    // registration
    pub wso_id: Option<u32>,
    pub district: u32,
    pub area: String,
    pub active: bool,

    // physical meetings
    pub physical_location: Option<String>,
    pub address_street_1: String,
    pub address_street_2: String,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
    pub address_country: Option<String>,
    pub location_instructions: String,

    // online meetings
    pub online_platform: Option<String>,
    pub online_url: Option<String>,
    pub online_meeting_id: Option<String>,
    pub online_meeting_password: Option<String>,

    // public information
    pub language: Option<String>,
    pub public_email: String,
    pub participant_types: BTreeSet<String>,
    pub members_only: bool,
    pub options: BTreeSet<String>,

    pub cma: Option<DelegateContact>,
    pub gr: Option<DelegateContact>,
}

impl Default for MeetingRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            listing_page: None,
            day_of_week: 0,
            start_hour: 0,
            start_minute: 0,
            duration: 60,
            repeat_type: RepeatType::Weekly,
            repeat_index: 0,
            wso_id: None,
            district: 26,
            area: "California North".to_string(),
            active: true,
            physical_location: None,
            address_street_1: String::new(),
            address_street_2: String::new(),
            address_city: None,
            address_state: None,
            address_zip: None,
            address_country: None,
            location_instructions: String::new(),
            online_platform: None,
            online_url: None,
            online_meeting_id: None,
            online_meeting_password: None,
            language: None,
            public_email: String::new(),
            participant_types: BTreeSet::new(),
            members_only: false,
            options: BTreeSet::new(),
            cma: None,
            gr: None,
        }
    }
}

impl MeetingRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has_physical_location(&self) -> bool {
        non_blank(self.physical_location.as_deref())
    }

    pub fn has_online_platform(&self) -> bool {
        non_blank(self.online_platform.as_deref())
    }
}

/// Contact block for a CMA or GR delegate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DelegateContact {
    pub first_name: String,
    pub last_name: String,
    pub street_address_1: String,
    pub street_address_2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DelegateKind {
    Cma,
    Gr,
}

impl std::fmt::Display for DelegateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            DelegateKind::Cma => "CMA",
            DelegateKind::Gr => "GR",
        };
        write!(f, "{value}")
    }
}

/// Person filing the change with WSO.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SubmitterData {
    pub name: String,
    pub phone: String,
    #[serde(default = "default_submitter_email")]
    pub email: String,
}

fn default_submitter_email() -> String {
    "webadmin@alanonbythebay.org".to_string()
}

/// On-disk shape of a meeting file: one record plus who is submitting it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MeetingFile {
    pub meeting: MeetingRecord,
    pub submitter: Option<SubmitterData>,
}

pub(crate) fn non_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
