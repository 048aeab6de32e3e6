//! Wire types for the Cards API.
//!
//! Field names follow the API's snake_case JSON. Unset fields are omitted
//! when serializing, so a partially filled [`Card`] doubles as a patch
//! document for updates.

mod card;
mod enums;
mod funding;
mod page;
mod params;

pub use card::Card;
pub use enums::{CardState, CardType, SpendLimitDuration};
pub use funding::FundingSource;
pub use page::Page;
pub use params::{CardListParams, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
