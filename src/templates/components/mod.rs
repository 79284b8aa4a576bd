pub mod card;
pub mod error;
pub mod fields;
pub mod listing;

pub use card::{card, link_card};
pub use fields::{hidden_fields, notice, Field, NoticeKind};
pub use listing::{filter_form, listing_card};
