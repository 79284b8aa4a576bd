pub mod criteria;
pub mod feed;
pub mod filter;
pub mod listing;
pub mod normalize;
pub mod projection;

pub use criteria::FilterCriteria;
pub use feed::ListingFeed;
pub use listing::{ListingKind, ListingRecord};
