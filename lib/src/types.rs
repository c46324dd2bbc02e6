use soroban_sdk::{contracttype, Address, String, Vec};

/// Billing cadence an item's rent is quoted in.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum BillingFrequency {
    Day = 0,
    Week = 1,
    Month = 2,
}

/// Availability of an item. Items cycle between the two states until deleted.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum LeaseState {
    Available = 0,
    Leased = 1,
}

/// What `rate_item` does with a score above the 5 star maximum.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u32)]
pub enum RatingPolicy {
    /// Fail the call with `InvalidRating`.
    #[default]
    Reject = 0,
    /// Treat the score as 5.
    Clamp = 1,
}

/// Contract-wide configuration, kept in instance storage.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketConfig {
    pub admin: Address,
    /// Token used for deposits, rent and refunds.
    pub payment_token: Address,
    pub rating_policy: RatingPolicy,
}

/// A listed item and its lease bookkeeping.
///
/// Stored under `DataKey::Item(id)`. Descriptive fields, `rent`, `freq`,
/// `deposit` and `owner` never change after listing.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub desc: String,
    pub img: String,
    /// Price charged per lease.
    pub rent: u128,
    pub freq: BillingFrequency,
    /// Refundable security deposit, held by the contract while leased.
    pub deposit: u128,
    pub owner: Address,
    /// `false` exactly when `current_leaser` is set.
    pub is_available: bool,
    pub current_leaser: Option<Address>,
    /// Caller-supplied start of the active lease; 0 while available.
    pub start_date: u64,
    /// One entry per completed lease, oldest first.
    pub past_leasers: Vec<Address>,
    /// Average score in tenths of a star (43 == 4.3 stars).
    pub rating: u32,
    /// Sum of every accepted score.
    pub rating_total: u64,
    pub num_reviews: u32,
}

impl Item {
    pub fn lease_state(&self) -> LeaseState {
        if self.is_available {
            LeaseState::Available
        } else {
            LeaseState::Leased
        }
    }
}
