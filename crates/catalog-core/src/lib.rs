pub mod detail;
pub mod home;
pub mod listing;
pub mod shared;
pub mod trigger;

#[cfg(test)]
mod testing;

pub use detail::{DetailError, DetailLoader, DetailRequest, DetailStatus, Playable};
pub use home::HomeFeed;
pub use listing::{ApplyOutcome, ListingController, ListingState, PageRequest, RequestKind};
pub use shared::SharedListing;
pub use trigger::{sentinel_visible, LoadTrigger, ViewportSample};
