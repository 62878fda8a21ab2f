// Element ids on the WSO "Group Records Change" JotForm.

// Page 1: group header
pub const NEXT_HEADER: &str = "form-pagebreak-next_97";
pub const HEADER_GROUP_NAME: &str = "input_156";
pub const HEADER_WSO_ID: &str = "input_13";
pub const HEADER_DISTRICT: &str = "input_16";
pub const HEADER_AREA: &str = "input_17";

// Page 2: status
pub const NEXT_STATUS: &str = "form-pagebreak-next_98";
pub const STATUS_CHANGE_VALUE: &str = "Change";
pub const STATUS_EFFECTIVE_DATE: &str = "lite_mode_96";

// Page 3: what is changing
pub const NEXT_SUMMARY: &str = "form-pagebreak-next_19";
pub const SUMMARY_NAME_ADDRESS: &str = "input_102_0";
pub const SUMMARY_PARTICIPANTS: &str = "input_102_1";
pub const SUMMARY_CONTACT: &str = "input_102_2";
pub const SUMMARY_DETAILS: &str = "input_102_3";
pub const SUMMARY_CMA: &str = "input_102_4";
pub const SUMMARY_GR: &str = "input_102_5";

// Page 4: name and address
pub const NEXT_NAME_ADDRESS: &str = "form-pagebreak-next_116";
pub const NAME_GROUP_NAME: &str = "input_21";
pub const NAME_MEETING_PLACE: &str = "input_23";
pub const NAME_ADDRESS_LINE_1: &str = "input_24_addr_line1";
pub const NAME_ADDRESS_LINE_2: &str = "input_24_addr_line2";
pub const NAME_CITY: &str = "input_80";
pub const NAME_STATE: &str = "input_81";
pub const NAME_ZIP: &str = "input_82";
pub const NAME_COUNTRY: &str = "input_83";
pub const NAME_EMAIL: &str = "input_25";

// Page 5: participant type
pub const NEXT_PARTICIPANTS: &str = "form-pagebreak-next_134";

// Page 6: contact
pub const NEXT_CONTACT: &str = "form-pagebreak-next_135";

// Page 7: schedule and details
pub const NEXT_DETAILS: &str = "form-pagebreak-next_133";
pub const DETAILS_DAY: &str = "input_30";
pub const DETAILS_HOUR: &str = "input_31";
pub const DETAILS_MINUTE: &str = "input_32";
pub const DETAILS_AM_PM: &str = "input_33";
pub const DETAILS_LANGUAGE: &str = "input_78";

// Ids below were taken from the form's field numbering, not a recorded
// session; check them against the live form after any layout change.
pub const CONTACT_ONLINE_URL: &str = "input_136";
pub const CONTACT_MEETING_ID: &str = "input_137";
pub const CONTACT_PASSWORD: &str = "input_138";
pub const CONTACT_INSTRUCTIONS: &str = "input_139";

// Page 8: CMA
pub const NEXT_CMA: &str = "form-pagebreak-next_140";
pub const CMA_FIELD: u32 = 141;
pub const CMA_ADDRESS_FIELD: u32 = 142;
pub const CMA_PHONE_FIELD: u32 = 143;
pub const CMA_EMAIL: &str = "input_144";

// Page 9: GR
pub const NEXT_GR: &str = "form-pagebreak-next_145";
pub const GR_FIELD: u32 = 146;
pub const GR_ADDRESS_FIELD: u32 = 147;
pub const GR_PHONE_FIELD: u32 = 148;
pub const GR_EMAIL: &str = "input_149";
pub const GR_COMMENT: &str = "input_150";

// Page 10: submitter
pub const SUBMIT_BUTTON: &str = "input_2";
pub const SUBMITTER_NAME: &str = "input_151";
pub const SUBMITTER_PHONE_FIELD: u32 = 152;
pub const SUBMITTER_EMAIL: &str = "input_153";

// Timing
pub const FRAME_TIMEOUT_SECS: u64 = 3;
pub const PAGE_TIMEOUT_SECS: u64 = 5;
