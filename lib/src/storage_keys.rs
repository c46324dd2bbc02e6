use soroban_sdk::contracttype;

/// Storage keys for the marketplace.
///
/// | Key | Tier | Value |
/// |---|---|---|
/// | `Config` | Instance | `MarketConfig` |
/// | `NextItemId` | Instance | last issued item id (`u64`) |
/// | `IndexLen` | Instance | number of live items (`u32`) |
/// | `Item(id)` | Persistent | `Item` |
/// | `ItemSlot(id)` | Persistent | position of `id` in the index (`u32`) |
/// | `IndexEntry(slot)` | Persistent | item id stored at `slot` (`u64`) |
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    NextItemId,
    IndexLen,
    Item(u64),
    ItemSlot(u64),
    IndexEntry(u32),
}
