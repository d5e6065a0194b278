use catalog_models::{DetailRecord, DetailResult, Episode};
use catalog_sources::ContentGateway;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetailError {
    #[error("no detail record is loaded")]
    NotLoaded,
    #[error("episode '{0}' does not belong to this title")]
    UnknownEpisode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DetailStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Fetch failed or the API had no record for the path
    NotFound,
}

/// What the player surface should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playable<'a> {
    /// The title's own playback reference
    Direct(&'a str),
    Episode(&'a Episode),
    NoStream,
}

impl<'a> Playable<'a> {
    pub fn url(&self) -> Option<&'a str> {
        match *self {
            Playable::Direct(url) => Some(url),
            Playable::Episode(episode) => Some(episode.player_url.as_str()),
            Playable::NoStream => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub generation: u64,
    pub detail_path: String,
}

/// One-shot loader for a title's detail view.
///
/// Every [`DetailLoader::begin`] wipes the previous record and active episode.
#[derive(Debug, Default)]
pub struct DetailLoader {
    detail_path: Option<String>,
    record: Option<DetailRecord>,
    active_episode: Option<String>,
    status: DetailStatus,
    generation: u64,
}

impl DetailLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, detail_path: &str) -> DetailRequest {
        self.generation += 1;
        self.detail_path = Some(detail_path.to_string());
        self.record = None;
        self.active_episode = None;
        self.status = DetailStatus::Loading;

        DetailRequest {
            generation: self.generation,
            detail_path: detail_path.to_string(),
        }
    }

    /// Commit a detail response. Returns false if the response was for an older navigation.
    pub fn apply(&mut self, request: &DetailRequest, result: DetailResult) -> bool {
        if request.generation != self.generation || self.status != DetailStatus::Loading {
            debug!("Discarding stale detail response for {}", request.detail_path);
            return false;
        }

        match result.into_record() {
            Some(record) => {
                // Direct reference wins; otherwise the first episode becomes active
                if record.direct_playback().is_none() {
                    self.active_episode = record.episodes().first().map(|ep| ep.id.clone());
                }
                info!(
                    "Loaded detail for '{}' ({} episodes, {} related)",
                    record.summary.title,
                    record.episodes().len(),
                    record.related().len()
                );
                self.record = Some(record);
                self.status = DetailStatus::Ready;
            }
            None => {
                warn!("Content not found: {}", request.detail_path);
                self.status = DetailStatus::NotFound;
            }
        }
        true
    }

    pub async fn load(&mut self, gateway: &dyn ContentGateway, detail_path: &str) -> DetailStatus {
        let request = self.begin(detail_path);
        let result = gateway.get_detail(&request.detail_path).await;
        self.apply(&request, result);
        self.status
    }

    /// Make `episode_id` the single active episode and the playable target
    pub fn select_episode(&mut self, episode_id: &str) -> Result<&Episode, DetailError> {
        let record = self.record.as_ref().ok_or(DetailError::NotLoaded)?;
        let episode = record
            .find_episode(episode_id)
            .ok_or_else(|| DetailError::UnknownEpisode(episode_id.to_string()))?;
        debug!("Switching to episode {} ({})", episode.episode_number, episode.id);
        self.active_episode = Some(episode.id.clone());
        Ok(episode)
    }

    pub fn playable(&self) -> Playable<'_> {
        let Some(record) = self.record.as_ref() else {
            return Playable::NoStream;
        };
        if let Some(id) = self.active_episode.as_deref() {
            if let Some(episode) = record.find_episode(id) {
                return Playable::Episode(episode);
            }
        }
        match record.direct_playback() {
            Some(url) => Playable::Direct(url),
            None => Playable::NoStream,
        }
    }

    pub fn status(&self) -> DetailStatus {
        self.status
    }

    pub fn record(&self) -> Option<&DetailRecord> {
        self.record.as_ref()
    }

    pub fn detail_path(&self) -> Option<&str> {
        self.detail_path.as_deref()
    }

    pub fn active_episode(&self) -> Option<&str> {
        self.active_episode.as_deref()
    }

    pub fn is_active(&self, episode: &Episode) -> bool {
        self.active_episode.as_deref() == Some(episode.id.as_str())
    }
}
