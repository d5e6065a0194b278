use async_trait::async_trait;
use catalog_models::{Category, DetailRecord, DetailResult, MediaKind, PageResult, Rating, Selector, SummaryRecord};
use catalog_sources::ContentGateway;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory gateway answering from a script and recording every call
#[derive(Default)]
pub struct ScriptedGateway {
    pages: HashMap<(Selector, u32), PageResult>,
    details: HashMap<String, DetailResult>,
    delays: HashMap<Selector, Duration>,
    calls: Mutex<Vec<(Selector, u32)>>,
    detail_calls: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, selector: impl Into<Selector>, page: u32, items: Vec<SummaryRecord>, has_more: bool) -> Self {
        self.pages.insert(
            (selector.into(), page),
            PageResult {
                success: true,
                items,
                page,
                has_more,
            },
        );
        self
    }

    pub fn with_detail(mut self, path: &str, record: DetailRecord) -> Self {
        self.details.insert(path.to_string(), DetailResult::found(record));
        self
    }

    pub fn with_delay(mut self, selector: impl Into<Selector>, delay: Duration) -> Self {
        self.delays.insert(selector.into(), delay);
        self
    }

    pub fn calls(&self) -> Vec<(Selector, u32)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }

    async fn answer(&self, selector: Selector, page: u32) -> PageResult {
        self.calls.lock().unwrap().push((selector.clone(), page));
        if let Some(delay) = self.delays.get(&selector) {
            tokio::time::sleep(*delay).await;
        }
        self.pages
            .get(&(selector, page))
            .cloned()
            .unwrap_or_else(PageResult::failed)
    }
}

#[async_trait]
impl ContentGateway for ScriptedGateway {
    fn gateway_name(&self) -> &str {
        "scripted"
    }

    async fn list(&self, category: Category, page: u32) -> PageResult {
        self.answer(Selector::Category(category), page).await
    }

    async fn search(&self, query: &str) -> PageResult {
        self.answer(Selector::query(query), 1).await
    }

    async fn get_detail(&self, detail_path: &str) -> DetailResult {
        self.detail_calls.lock().unwrap().push(detail_path.to_string());
        self.details
            .get(detail_path)
            .cloned()
            .unwrap_or_else(DetailResult::failed)
    }
}

pub fn record(id: &str) -> SummaryRecord {
    SummaryRecord {
        id: id.to_string(),
        title: format!("Title {}", id),
        poster: format!("https://img.example/{}.jpg", id),
        rating: Rating::Score(7.0),
        year: "2024".to_string(),
        kind: MediaKind::Movie,
        genre: "Drama".to_string(),
        detail_path: format!("detail-{}", id),
    }
}

/// `count` records with ids `{prefix}-0 .. {prefix}-{count-1}`
pub fn records(prefix: &str, count: usize) -> Vec<SummaryRecord> {
    (0..count).map(|i| record(&format!("{}-{}", prefix, i))).collect()
}
