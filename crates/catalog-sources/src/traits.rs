use async_trait::async_trait;
use catalog_models::{Category, DetailResult, PageResult, Selector};

/// Read-only access to the content catalog.
///
/// Implementations must not fail: transport and decode problems come back as
/// [`PageResult::failed`] or [`DetailResult::failed`].
#[async_trait]
pub trait ContentGateway: Send + Sync {
    fn gateway_name(&self) -> &str;

    async fn list(&self, category: Category, page: u32) -> PageResult;

    /// Single page search; the API takes no page parameter here
    async fn search(&self, query: &str) -> PageResult;

    async fn get_detail(&self, detail_path: &str) -> DetailResult;

    /// Fetch `page` of whatever the selector points at.
    /// Queries past page 1 yield an exhausted empty page instead of repeating page 1.
    async fn fetch(&self, selector: &Selector, page: u32) -> PageResult {
        match selector {
            Selector::Category(category) => self.list(*category, page).await,
            Selector::Query(query) if page <= 1 => self.search(query).await,
            Selector::Query(_) => PageResult {
                success: true,
                items: Vec::new(),
                page,
                has_more: false,
            },
        }
    }
}
