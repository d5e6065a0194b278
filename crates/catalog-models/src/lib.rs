pub mod category;
pub mod detail;
pub mod page;
pub mod selector;
pub mod summary;

pub use category::Category;
pub use detail::{DetailRecord, Episode};
pub use page::{DetailResult, PageResult};
pub use selector::Selector;
pub use summary::{MediaKind, Rating, SummaryRecord};
