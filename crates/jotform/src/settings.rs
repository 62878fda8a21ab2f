use crate::consts::{FRAME_TIMEOUT_SECS, PAGE_TIMEOUT_SECS};
use crate::error::FormError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wso_core::SubmissionKind;

/// Where the change forms live and how long to wait on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    pub records_endpoint: Option<String>,
    pub physical_change_path: String,
    pub online_change_path: Option<String>,
    pub frame_title: String,
    pub frame_timeout_secs: u64,
    pub page_timeout_secs: u64,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            records_endpoint: None,
            physical_change_path: "/changes-existing-al-anon-group/group-records-change-form/"
                .to_string(),
            online_change_path: None,
            frame_title: "Group Records Change".to_string(),
            frame_timeout_secs: FRAME_TIMEOUT_SECS,
            page_timeout_secs: PAGE_TIMEOUT_SECS,
        }
    }
}

impl FormSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        let settings: FormSettings =
            toml::from_str(&raw).with_context(|| format!("parsing settings {}", path.display()))?;
        Ok(settings)
    }

    pub fn start_url(&self, kind: SubmissionKind) -> Result<String, FormError> {
        let endpoint = self
            .records_endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.trim().is_empty())
            .ok_or(FormError::MissingSetting("records_endpoint"))?;
        let path = match kind {
            SubmissionKind::Physical => self.physical_change_path.as_str(),
            SubmissionKind::Online => self
                .online_change_path
                .as_deref()
                .ok_or(FormError::MissingSetting("online_change_path"))?,
        };
        Ok(format!("{}{}", endpoint.trim_end_matches('/'), path))
    }

    pub fn frame_xpath(&self) -> String {
        format!("//*[@title='{}']", self.frame_title)
    }
}
