use serde::{Deserialize, Serialize};

use crate::summary::{string_or_number, SummaryRecord};

/// Full record for one title, including synopsis and playable content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    #[serde(flatten)]
    pub summary: SummaryRecord,
    #[serde(default)]
    pub description: String,
    /// Direct playback reference; absent for most series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Vec<Episode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<SummaryRecord>>,
}

pub const NO_SYNOPSIS: &str = "No synopsis available.";

impl DetailRecord {
    /// Direct playback reference, ignoring empty strings
    pub fn direct_playback(&self) -> Option<&str> {
        self.player_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn episodes(&self) -> &[Episode] {
        self.episodes.as_deref().unwrap_or_default()
    }

    pub fn related(&self) -> &[SummaryRecord] {
        self.related.as_deref().unwrap_or_default()
    }

    pub fn find_episode(&self, episode_id: &str) -> Option<&Episode> {
        self.episodes().iter().find(|ep| ep.id == episode_id)
    }

    pub fn synopsis(&self) -> &str {
        if self.description.trim().is_empty() {
            NO_SYNOPSIS
        } else {
            &self.description
        }
    }
}

/// One playable sub-unit of a series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Display ordinal, e.g. "1" or "S1E03"
    #[serde(default, deserialize_with = "string_or_number")]
    pub episode_number: String,
    #[serde(default)]
    pub player_url: String,
}
