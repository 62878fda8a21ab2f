pub mod config;
pub mod error;
pub mod normalize;
pub mod schema;
pub mod vocabulary;

pub use config::{SubmissionKind, check_preconditions, load_meeting_file, validate};
pub use error::RecordError;
pub use normalize::{MeetingType, Normalizer, Schedule, country_label, phone_parts};
pub use schema::{
    DelegateContact, DelegateKind, MeetingFile, MeetingRecord, RepeatType, SubmitterData,
};
pub use vocabulary::{TagLabel, Vocabulary};
