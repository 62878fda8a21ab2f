use crate::error::RecordError;
use crate::schema::{MeetingFile, MeetingRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which WSO change form a submission goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Physical,
    Online,
}

impl std::fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            SubmissionKind::Physical => "physical",
            SubmissionKind::Online => "online",
        };
        write!(f, "{value}")
    }
}

/// Reads and validates a meeting file. Format follows the extension:
/// `.toml`, `.yaml`/`.yml` or `.json`.
pub fn load_meeting_file(path: &Path) -> Result<MeetingFile, RecordError> {
    let raw = fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let file: MeetingFile = match extension.as_deref() {
        Some("toml") => toml::from_str(&raw)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)?,
        Some("json") => serde_json::from_str(&raw)?,
        _ => {
            return Err(RecordError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    validate(&file.meeting)?;
    tracing::info!(
        path = %path.display(),
        meeting = %file.meeting.name,
        wso_id = ?file.meeting.wso_id,
        "loaded meeting"
    );
    Ok(file)
}

/// Rejects records that could never produce a sensible form submission.
pub fn validate(record: &MeetingRecord) -> Result<(), RecordError> {
    if record.name.trim().is_empty() {
        return Err(invalid("name", "must not be empty"));
    }
    if record.day_of_week > 6 {
        return Err(invalid(
            "day_of_week",
            format!("{} is not 0 (Sunday) through 6 (Saturday)", record.day_of_week),
        ));
    }
    if record.start_hour > 23 {
        return Err(invalid(
            "start_hour",
            format!("{} is not 0 through 23", record.start_hour),
        ));
    }
    if record.start_minute > 59 {
        return Err(invalid(
            "start_minute",
            format!("{} is not 0 through 59", record.start_minute),
        ));
    }
    if record.duration == 0 {
        return Err(invalid("duration", "must be at least one minute"));
    }
    if !record.has_physical_location() && !record.has_online_platform() {
        return Err(RecordError::NoLocation);
    }
    if record.start_minute % 15 != 0 {
        tracing::warn!(
            minute = record.start_minute,
            "start minute will be rounded down to the quarter hour"
        );
    }
    Ok(())
}

/// Checks that must pass before a change submission touches the form.
pub fn check_preconditions(
    record: &MeetingRecord,
    kind: SubmissionKind,
) -> Result<(), RecordError> {
    if record.wso_id.is_none() {
        return Err(RecordError::MissingRegistryId);
    }
    if kind == SubmissionKind::Online && !record.has_online_platform() {
        return Err(RecordError::MissingOnlinePlatform);
    }
    Ok(())
}

fn invalid(field: &'static str, reason: impl Into<String>) -> RecordError {
    RecordError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physical() -> MeetingRecord {
        MeetingRecord {
            wso_id: Some(645),
            physical_location: Some("Albany Library".to_string()),
            ..MeetingRecord::new("Albany-Berkeley Tuesday Night AFG")
        }
    }

    #[test]
    fn change_requires_registry_id() {
        let record = MeetingRecord {
            wso_id: None,
            ..physical()
        };
        assert!(matches!(
            check_preconditions(&record, SubmissionKind::Physical),
            Err(RecordError::MissingRegistryId)
        ));
    }

    #[test]
    fn online_change_requires_platform() {
        assert!(matches!(
            check_preconditions(&physical(), SubmissionKind::Online),
            Err(RecordError::MissingOnlinePlatform)
        ));
        assert!(check_preconditions(&physical(), SubmissionKind::Physical).is_ok());
    }

    #[test]
    fn day_seven_is_rejected() {
        let record = MeetingRecord {
            day_of_week: 7,
            ..physical()
        };
        assert!(matches!(
            validate(&record),
            Err(RecordError::Invalid { field: "day_of_week", .. })
        ));
    }
}
