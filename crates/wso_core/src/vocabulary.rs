use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Maps one record tag (matched case-insensitively) to the form's label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TagLabel {
    pub tag: String,
    pub label: String,
}

impl TagLabel {
    pub fn new(tag: &str, label: &str) -> Self {
        Self {
            tag: tag.to_string(),
            label: label.to_string(),
        }
    }
}

/// Everything the normalizer looks up rather than computes.
///
/// Defaults are the Berkeley/District 26 deployment. A TOML file may override
/// any subset of the fields; tables given in the file replace the default
/// tables wholesale. Table order is match priority.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Vocabulary {
    pub day_names: Vec<String>,
    pub fallback_city: String,
    pub fallback_state: String,
    pub fallback_zip: String,
    pub default_country: String,
    pub accepted_countries: Vec<String>,
    pub default_language: String,
    pub accepted_languages: Vec<String>,
    pub online_only_place: String,
    pub members_only_attendees: String,
    pub open_attendees: String,
    pub participant_types: Vec<TagLabel>,
    pub options: Vec<TagLabel>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            day_names: DAY_NAMES.iter().map(|day| day.to_string()).collect(),
            fallback_city: "Berkeley".to_string(),
            fallback_state: "California".to_string(),
            fallback_zip: "94707".to_string(),
            default_country: "United States".to_string(),
            accepted_countries: vec!["Canada".to_string(), "Bermuda".to_string()],
            default_language: "English".to_string(),
            accepted_languages: vec!["Spanish".to_string(), "French".to_string()],
            online_only_place: "Currently meeting online only, see link for details".to_string(),
            members_only_attendees: "Families and Friends only".to_string(),
            open_attendees: "Families, Friends, and Observers welcome".to_string(),
            participant_types: vec![
                TagLabel::new("parent", "Parents of Alcoholics"),
                TagLabel::new("aca", "Adult Children"),
                TagLabel::new("youth", "Young Adults"),
                TagLabel::new("poc", "People of Color"),
                TagLabel::new("women", "Women"),
                TagLabel::new("men", "Men"),
                TagLabel::new("lgbtqia+", "LGBTQIA+"),
            ],
            options: vec![
                TagLabel::new("intro", "Introductory"),
                TagLabel::new("institution", "Limited Access"),
                TagLabel::new("fragrance-free", "Fragrance Free"),
                TagLabel::new("ada", "Handicap Access"),
                TagLabel::new("child-care", "Child Care"),
                TagLabel::new("asl", "Sign Language"),
                TagLabel::new("smoking", "Smoking Permitted"),
                TagLabel::new("beginner", "Beginners"),
            ],
        }
    }
}

impl Vocabulary {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading vocabulary {}", path.display()))?;
        let vocabulary = Self::from_toml(&raw)
            .with_context(|| format!("parsing vocabulary {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded vocabulary");
        Ok(vocabulary)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let vocabulary: Vocabulary = toml::from_str(raw)?;
        vocabulary.check()?;
        Ok(vocabulary)
    }

    fn check(&self) -> Result<()> {
        if self.day_names.len() != 7 {
            anyhow::bail!(
                "day_names needs exactly 7 entries starting with Sunday, got {}",
                self.day_names.len()
            );
        }
        Ok(())
    }

    /// Indexes modulo 7. A table that skipped `check()` and lacks the entry
    /// falls back to the English name.
    pub fn day_name(&self, day_of_week: u8) -> &str {
        let index = usize::from(day_of_week) % DAY_NAMES.len();
        self.day_names.get(index).map_or(DAY_NAMES[index], String::as_str)
    }

    /// First participant-type entry, in table order, whose tag is in `tags`.
    pub fn participant_label(&self, tags: &BTreeSet<String>) -> Option<&str> {
        self.participant_types
            .iter()
            .find(|entry| tags.iter().any(|tag| entry.tag.eq_ignore_ascii_case(tag)))
            .map(|entry| entry.label.as_str())
    }

    pub fn option_label(&self, tag: &str) -> Option<&str> {
        lookup(&self.options, tag)
    }
}

fn lookup<'a>(table: &'a [TagLabel], tag: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|entry| entry.tag.eq_ignore_ascii_case(tag))
        .map(|entry| entry.label.as_str())
}
