use catalog_models::{PageResult, Selector, SummaryRecord};
use catalog_sources::ContentGateway;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Snapshot of one listing: what drives it and what has been accumulated so far
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ListingState {
    pub selector: Option<Selector>,
    /// Append-only within one selector session. Duplicate ids across pages are kept.
    pub items: Vec<SummaryRecord>,
    pub page: u32,
    pub loading: bool,
    pub loading_more: bool,
    pub has_more: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// First page of a selector session; replaces the list
    Initial,
    /// Follow-up page; appends to the list
    Next,
}

/// Ticket for one in-flight gateway call.
///
/// The generation is captured when the request is issued and compared again
/// when the response is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub selector: Selector,
    pub page: u32,
    pub kind: RequestKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied { added: usize },
    /// The gateway reported failure; pagination stops
    Failed,
    /// The response belongs to a superseded selector session and was dropped
    Stale,
}

/// Fetch / page-cursor / accumulation state machine for a single listing.
///
/// Used the same way for category browsing and search. Calls are split into
/// issuing a [`PageRequest`] and applying its result so that a response that
/// arrives after the selector changed can be recognised and ignored.
#[derive(Debug, Default)]
pub struct ListingController {
    state: ListingState,
    generation: u64,
}

impl ListingController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new selector session and return the page-1 request for it
    pub fn initialize(&mut self, selector: impl Into<Selector>) -> PageRequest {
        let selector = selector.into();
        self.generation += 1;
        self.state = ListingState {
            selector: Some(selector.clone()),
            items: Vec::new(),
            page: 1,
            loading: true,
            loading_more: false,
            has_more: true,
        };
        debug!("Listing initialized: selector={}, generation={}", selector, self.generation);

        PageRequest {
            generation: self.generation,
            selector,
            page: 1,
            kind: RequestKind::Initial,
        }
    }

    /// Request the page after the current one, if pagination may continue
    pub fn load_next(&mut self) -> Option<PageRequest> {
        if !self.state.has_more || self.state.loading || self.state.loading_more {
            return None;
        }
        let selector = self.state.selector.clone()?;
        if !selector.supports_pagination() {
            return None;
        }

        self.state.loading_more = true;
        Some(PageRequest {
            generation: self.generation,
            selector,
            page: self.state.page + 1,
            kind: RequestKind::Next,
        })
    }

    /// Commit a gateway response for `request`
    pub fn apply(&mut self, request: &PageRequest, result: PageResult) -> ApplyOutcome {
        let in_flight = match request.kind {
            RequestKind::Initial => self.state.loading,
            RequestKind::Next => self.state.loading_more,
        };
        if request.generation != self.generation || !in_flight {
            debug!(
                "Discarding stale response: selector={}, page={}, request_generation={}, current_generation={}",
                request.selector, request.page, request.generation, self.generation
            );
            return ApplyOutcome::Stale;
        }

        match request.kind {
            RequestKind::Initial => {
                self.state.loading = false;
                if !result.success {
                    warn!("Initial fetch failed for {}", request.selector);
                    self.state.items.clear();
                    self.state.has_more = false;
                    return ApplyOutcome::Failed;
                }
                let added = result.items.len();
                self.state.items = result.items;
                self.state.page = 1;
                self.state.has_more = result.has_more && request.selector.supports_pagination();
                info!(
                    "Loaded {} items for {} (has_more={})",
                    added, request.selector, self.state.has_more
                );
                ApplyOutcome::Applied { added }
            }
            RequestKind::Next => {
                self.state.loading_more = false;
                if !result.success {
                    warn!(
                        "Fetching page {} failed for {}, stopping pagination",
                        request.page, request.selector
                    );
                    self.state.has_more = false;
                    return ApplyOutcome::Failed;
                }
                let added = result.items.len();
                self.state.items.extend(result.items);
                self.state.page = request.page;
                self.state.has_more = result.has_more;
                debug!(
                    "Appended page {} ({} items, total {}) for {}",
                    request.page,
                    added,
                    self.state.items.len(),
                    request.selector
                );
                ApplyOutcome::Applied { added }
            }
        }
    }

    /// Drop all state, e.g. when the view goes away. In-flight responses become stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = ListingState::default();
    }

    /// Initialize with `selector` and fetch its first page
    pub async fn refresh(&mut self, gateway: &dyn ContentGateway, selector: impl Into<Selector>) -> ApplyOutcome {
        let request = self.initialize(selector);
        let result = gateway.fetch(&request.selector, request.page).await;
        self.apply(&request, result)
    }

    /// Fetch and append the next page. Returns `None` when no fetch was needed.
    pub async fn load_more(&mut self, gateway: &dyn ContentGateway) -> Option<ApplyOutcome> {
        let request = self.load_next()?;
        let result = gateway.fetch(&request.selector, request.page).await;
        Some(self.apply(&request, result))
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn items(&self) -> &[SummaryRecord] {
        &self.state.items
    }

    pub fn selector(&self) -> Option<&Selector> {
        self.state.selector.as_ref()
    }

    pub fn page(&self) -> u32 {
        self.state.page
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.state.loading_more
    }

    pub fn has_more(&self) -> bool {
        self.state.has_more
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{records, ScriptedGateway};
    use catalog_models::Category;

    fn page(items: Vec<SummaryRecord>, has_more: bool) -> PageResult {
        PageResult {
            success: true,
            page: 1,
            items,
            has_more,
        }
    }

    #[tokio::test]
    async fn test_anime_scenario_accumulates_until_exhausted() {
        let gateway = ScriptedGateway::new()
            .with_page(Category::Anime, 1, records("p1", 12), true)
            .with_page(Category::Anime, 2, records("p2", 8), false);
        let mut listing = ListingController::new();

        listing.refresh(&gateway, Category::Anime).await;
        assert_eq!(listing.items().len(), 12);
        assert!(listing.has_more());

        assert_eq!(listing.load_more(&gateway).await, Some(ApplyOutcome::Applied { added: 8 }));
        assert_eq!(listing.items().len(), 20);
        assert!(!listing.has_more());
        assert_eq!(listing.page(), 2);
        assert_eq!(gateway.call_count(), 2);

        assert_eq!(listing.load_more(&gateway).await, None);
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_pages_are_appended_in_order() {
        let gateway = ScriptedGateway::new()
            .with_page(Category::Kdrama, 1, records("a", 3), true)
            .with_page(Category::Kdrama, 2, records("b", 2), true)
            .with_page(Category::Kdrama, 3, records("c", 4), false);
        let mut listing = ListingController::new();

        listing.refresh(&gateway, Category::Kdrama).await;
        while listing.load_more(&gateway).await.is_some() {}

        let ids: Vec<&str> = listing.items().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["a-0", "a-1", "a-2", "b-0", "b-1", "c-0", "c-1", "c-2", "c-3"]
        );
        assert_eq!(
            gateway.calls(),
            vec![
                (Selector::Category(Category::Kdrama), 1),
                (Selector::Category(Category::Kdrama), 2),
                (Selector::Category(Category::Kdrama), 3),
            ]
        );
    }

    #[test]
    fn test_load_next_is_noop_while_in_flight() {
        let mut listing = ListingController::new();
        let initial = listing.initialize(Category::Anime);
        assert_eq!(listing.load_next(), None);

        listing.apply(&initial, page(records("p1", 2), true));
        let next = listing.load_next().unwrap();
        assert_eq!(next.page, 2);
        assert!(listing.is_loading_more());

        let before = listing.state().clone();
        assert_eq!(listing.load_next(), None);
        assert_eq!(listing.state(), &before);
    }

    #[test]
    fn test_load_next_without_selector_is_noop() {
        let mut listing = ListingController::new();
        assert_eq!(listing.load_next(), None);
        assert_eq!(listing.state(), &ListingState::default());
    }

    #[test]
    fn test_initialize_resets_accumulated_state() {
        let mut listing = ListingController::new();
        let first = listing.initialize(Category::Anime);
        listing.apply(&first, page(records("p1", 5), true));
        let next = listing.load_next().unwrap();
        listing.apply(&next, page(records("p2", 5), true));
        assert_eq!(listing.items().len(), 10);
        assert_eq!(listing.page(), 2);

        let request = listing.initialize(Category::ShortTv);
        assert_eq!(request.page, 1);
        assert!(listing.items().is_empty());
        assert_eq!(listing.page(), 1);
        assert!(listing.has_more());
        assert!(listing.is_loading());
    }

    #[test]
    fn test_stale_response_from_previous_selector_is_discarded() {
        let mut listing = ListingController::new();
        let request_a = listing.initialize(Category::Anime);
        let request_b = listing.initialize(Category::Kdrama);

        assert_eq!(
            listing.apply(&request_b, page(records("kdrama", 3), true)),
            ApplyOutcome::Applied { added: 3 }
        );
        assert_eq!(
            listing.apply(&request_a, page(records("anime", 12), true)),
            ApplyOutcome::Stale
        );

        assert_eq!(listing.items().len(), 3);
        assert!(listing.items().iter().all(|r| r.id.starts_with("kdrama")));
        assert_eq!(listing.selector(), Some(&Selector::Category(Category::Kdrama)));
    }

    #[test]
    fn test_stale_next_page_does_not_leak_into_new_session() {
        let mut listing = ListingController::new();
        let first = listing.initialize(Category::Anime);
        listing.apply(&first, page(records("anime", 2), true));
        let next = listing.load_next().unwrap();

        let switched = listing.initialize(Category::Trending);
        listing.apply(&switched, page(records("trend", 4), false));
        assert_eq!(listing.apply(&next, page(records("anime-p2", 6), true)), ApplyOutcome::Stale);

        assert_eq!(listing.items().len(), 4);
        assert!(!listing.has_more());
    }

    #[test]
    fn test_duplicate_apply_is_ignored() {
        let mut listing = ListingController::new();
        let first = listing.initialize(Category::Anime);
        listing.apply(&first, page(records("a", 2), true));
        assert_eq!(listing.apply(&first, page(records("a", 2), true)), ApplyOutcome::Stale);
        assert_eq!(listing.items().len(), 2);
    }

    #[test]
    fn test_duplicate_ids_across_pages_are_kept() {
        let mut listing = ListingController::new();
        let first = listing.initialize(Category::Trending);
        listing.apply(&first, page(records("same", 2), true));
        let next = listing.load_next().unwrap();
        listing.apply(&next, page(records("same", 2), false));
        assert_eq!(listing.items().len(), 4);
    }

    #[tokio::test]
    async fn test_initial_failure_yields_empty_exhausted_list() {
        let gateway = ScriptedGateway::new();
        let mut listing = ListingController::new();

        assert_eq!(listing.refresh(&gateway, Category::Anime).await, ApplyOutcome::Failed);
        assert!(listing.items().is_empty());
        assert!(!listing.has_more());
        assert!(!listing.is_loading());
        assert_eq!(listing.load_more(&gateway).await, None);
    }

    #[tokio::test]
    async fn test_next_page_failure_keeps_items_and_stops() {
        let gateway = ScriptedGateway::new().with_page(Category::Anime, 1, records("p1", 12), true);
        let mut listing = ListingController::new();

        listing.refresh(&gateway, Category::Anime).await;
        assert_eq!(listing.load_more(&gateway).await, Some(ApplyOutcome::Failed));
        assert_eq!(listing.items().len(), 12);
        assert!(!listing.has_more());
        assert!(!listing.is_loading_more());
        assert_eq!(listing.page(), 1);
    }

    #[tokio::test]
    async fn test_failed_search_is_empty_without_error() {
        let gateway = ScriptedGateway::new();
        let mut listing = ListingController::new();

        let outcome = listing.refresh(&gateway, Selector::query("naruto")).await;
        assert_eq!(outcome, ApplyOutcome::Failed);
        assert!(listing.items().is_empty());
        assert_eq!(gateway.calls(), vec![(Selector::query("naruto"), 1)]);
    }

    #[tokio::test]
    async fn test_search_is_single_page() {
        let gateway = ScriptedGateway::new().with_page(Selector::query("naruto"), 1, records("n", 5), true);
        let mut listing = ListingController::new();

        listing.refresh(&gateway, Selector::query("naruto")).await;
        assert_eq!(listing.items().len(), 5);
        assert!(!listing.has_more());
        assert_eq!(listing.load_more(&gateway).await, None);
        assert_eq!(gateway.call_count(), 1);
    }

    #[test]
    fn test_reset_discards_in_flight_request() {
        let mut listing = ListingController::new();
        let request = listing.initialize(Category::Anime);
        listing.reset();

        assert_eq!(listing.apply(&request, page(records("a", 3), true)), ApplyOutcome::Stale);
        assert_eq!(listing.state(), &ListingState::default());
    }
}
