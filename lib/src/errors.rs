use soroban_sdk::contracterror;

/// Faults raised by marketplace operations.
///
/// Returning any of these aborts the invocation; the host discards every
/// write the call made before failing.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketError {
    /// Referenced item id does not exist.
    NotFound = 1,
    /// Lease attempted on an item that is already leased.
    AlreadyLeased = 2,
    /// Return attempted on an item that is available.
    NotLeased = 3,
    /// Attached value differs from the item's declared deposit.
    DepositMismatch = 4,
    /// Caller is not allowed to perform the operation.
    Unauthorized = 5,
    /// Score outside 0..=5 under the `Reject` policy.
    InvalidRating = 6,
    /// Insert of an id that is already stored.
    DuplicateItem = 7,
    NotInitialized = 8,
    AlreadyInitialized = 9,
    InvalidInput = 10,
    /// Amount does not fit the token interface.
    AmountOverflow = 11,
}
