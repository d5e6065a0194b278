use crate::listing::{ApplyOutcome, ListingController};
use catalog_models::{Category, SummaryRecord};
use catalog_sources::ContentGateway;
use tracing::{info, warn};

/// Home view: a trending hero strip above a category listing
#[derive(Debug)]
pub struct HomeFeed {
    hero: Vec<SummaryRecord>,
    hero_size: usize,
    listing: ListingController,
}

impl HomeFeed {
    pub fn new(hero_size: usize) -> Self {
        Self {
            hero: Vec::new(),
            hero_size,
            listing: ListingController::new(),
        }
    }

    /// Load the hero strip, then the first page of `category`
    pub async fn open(&mut self, gateway: &dyn ContentGateway, category: Category) -> ApplyOutcome {
        let trending = gateway.list(Category::Trending, 1).await;
        if trending.success {
            self.hero = trending.items.into_iter().take(self.hero_size).collect();
            info!("Hero strip has {} titles", self.hero.len());
        } else {
            warn!("Trending fetch failed, hero strip left empty");
            self.hero.clear();
        }
        self.listing.refresh(gateway, category).await
    }

    /// Switch the listing to another category; the hero strip stays
    pub async fn select_category(&mut self, gateway: &dyn ContentGateway, category: Category) -> ApplyOutcome {
        self.listing.refresh(gateway, category).await
    }

    pub async fn load_more(&mut self, gateway: &dyn ContentGateway) -> Option<ApplyOutcome> {
        self.listing.load_more(gateway).await
    }

    /// Featured title shown at the top
    pub fn hero(&self) -> Option<&SummaryRecord> {
        self.hero.first()
    }

    pub fn hero_strip(&self) -> &[SummaryRecord] {
        &self.hero
    }

    pub fn category(&self) -> Option<Category> {
        match self.listing.selector() {
            Some(catalog_models::Selector::Category(category)) => Some(*category),
            _ => None,
        }
    }

    pub fn listing(&self) -> &ListingController {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut ListingController {
        &mut self.listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{records, ScriptedGateway};
    use crate::trigger::{LoadTrigger, ViewportSample};
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_open_loads_hero_and_listing() {
        let gateway = ScriptedGateway::new()
            .with_page(Category::Trending, 1, records("t", 9), true)
            .with_page(Category::Anime, 1, records("a", 12), true);
        let mut home = HomeFeed::new(5);

        home.open(&gateway, Category::Anime).await;
        assert_eq!(home.hero_strip().len(), 5);
        assert_eq!(home.hero().unwrap().id, "t-0");
        assert_eq!(home.listing().items().len(), 12);
        assert_eq!(home.category(), Some(Category::Anime));
    }

    #[tokio::test]
    async fn test_category_switch_keeps_hero() {
        let gateway = ScriptedGateway::new()
            .with_page(Category::Trending, 1, records("t", 3), false)
            .with_page(Category::Anime, 1, records("a", 12), true)
            .with_page(Category::ShortTv, 1, records("s", 2), false);
        let mut home = HomeFeed::new(5);

        home.open(&gateway, Category::Anime).await;
        home.select_category(&gateway, Category::ShortTv).await;

        assert_eq!(home.hero_strip().len(), 3);
        assert_eq!(home.listing().items().len(), 2);
        assert!(!home.listing().has_more());
        assert_eq!(home.load_more(&gateway).await, None);
    }

    #[tokio::test]
    async fn test_failed_trending_leaves_listing_working() {
        let gateway = ScriptedGateway::new().with_page(Category::Kdrama, 1, records("k", 4), true);
        let mut home = HomeFeed::new(5);

        home.open(&gateway, Category::Kdrama).await;
        assert!(home.hero().is_none());
        assert_eq!(home.listing().items().len(), 4);
    }

    #[tokio::test]
    async fn test_tall_viewport_keeps_loading_short_pages() {
        let gateway = ScriptedGateway::new()
            .with_page(Category::Anime, 1, records("a1", 6), true)
            .with_page(Category::Anime, 2, records("a2", 6), true)
            .with_page(Category::Anime, 3, records("a3", 6), false);
        let mut home = HomeFeed::new(5);
        let mut trigger = LoadTrigger::new(3, Duration::from_millis(100));
        let mut now = Instant::now();
        home.open(&gateway, Category::Anime).await;

        // re-sample after every append, as the interactive browser does
        loop {
            let listing = home.listing();
            let sample = ViewportSample::new(0, 40, listing.items().len());
            let mut fired = trigger.observe(sample, listing.generation(), now);
            if let (false, Some(deadline)) = (fired, trigger.pending_deadline()) {
                now = deadline;
                fired = trigger.flush(now);
            }
            if !fired || home.load_more(&gateway).await.is_none() {
                break;
            }
            now += Duration::from_millis(10);
        }

        assert_eq!(home.listing().items().len(), 18);
        assert_eq!(home.listing().page(), 3);
        assert!(!home.listing().has_more());
    }
}
