use std::path::PathBuf;

/// Failures raised before any form interaction starts.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("cannot submit a change for a group with no WSO registry id")]
    MissingRegistryId,

    #[error("online change requested but the meeting has no online platform")]
    MissingOnlinePlatform,

    #[error("meeting has neither a physical location nor an online platform")]
    NoLocation,

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("unsupported meeting file format: {path:?}")]
    UnsupportedFormat { path: PathBuf },

    #[error("reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
