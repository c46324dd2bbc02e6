#![no_std]
pub mod admin;
pub mod errors;
pub mod storage_keys;
pub mod types;
pub mod validation;

pub use errors::MarketError;
pub use storage_keys::*;
pub use types::*;

// Input limits
pub const MAX_STRING_LENGTH: u32 = 256;
pub const MAX_DESCRIPTION_LENGTH: u32 = 1024;
pub const MAX_PAGE_SIZE: u32 = 100;

// Ratings are stored in tenths of a star.
pub const MAX_SCORE: u32 = 5;
pub const RATING_SCALE: u64 = 10;

// Storage TTLs, in ledgers (~5 s per ledger).
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_TTL_EXTEND: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_EXTEND - DAY_IN_LEDGERS;
pub const ITEM_TTL_EXTEND: u32 = 60 * DAY_IN_LEDGERS;
pub const ITEM_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
