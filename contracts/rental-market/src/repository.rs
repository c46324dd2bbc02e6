use soroban_sdk::{log, Env, Vec};

use rental_lib::{DataKey, Item, MarketError, ITEM_TTL_EXTEND, ITEM_TTL_THRESHOLD};

/// Dual-indexed item storage.
///
/// Records live under `Item(id)`. Enumeration goes through a dense index:
/// `IndexEntry(slot)` holds the id at each slot in `0..IndexLen`, and
/// `ItemSlot(id)` points back at that slot so deletion is O(1).
///
/// Deleting moves the last entry into the freed slot, so index order is not
/// stable across deletions. Callers must not rely on it.
pub struct ItemRepository {
    env: Env,
}

impl ItemRepository {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    // ------------------------------------------------------------------
    // Identifiers
    // ------------------------------------------------------------------

    /// Issues the next item id. Ids start at 1 and are never reused.
    pub fn next_id(&self) -> Result<u64, MarketError> {
        let last: u64 = self
            .env
            .storage()
            .instance()
            .get(&DataKey::NextItemId)
            .unwrap_or(0);
        let next = last.checked_add(1).ok_or(MarketError::InvalidInput)?;
        self.env.storage().instance().set(&DataKey::NextItemId, &next);
        Ok(next)
    }

    // ------------------------------------------------------------------
    // Item CRUD
    // ------------------------------------------------------------------

    pub fn contains(&self, id: u64) -> bool {
        self.env.storage().persistent().has(&DataKey::Item(id))
    }

    pub fn insert(&self, item: &Item) -> Result<(), MarketError> {
        if self.contains(item.id) {
            return Err(MarketError::DuplicateItem);
        }

        let slot = self.len();
        let len = slot.checked_add(1).ok_or(MarketError::InvalidInput)?;

        self.put_item(item);
        self.put_entry(slot, item.id);
        self.put_slot(item.id, slot);
        self.env.storage().instance().set(&DataKey::IndexLen, &len);
        Ok(())
    }

    pub fn get(&self, id: u64) -> Result<Item, MarketError> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Item(id))
            .ok_or(MarketError::NotFound)
    }

    pub fn update(&self, item: &Item) -> Result<(), MarketError> {
        if !self.contains(item.id) {
            return Err(MarketError::NotFound);
        }
        self.put_item(item);
        Ok(())
    }

    /// Removes `id` from the records and from the enumeration index.
    pub fn delete(&self, id: u64) -> Result<(), MarketError> {
        let store = self.env.storage().persistent();

        let slot: u32 = store
            .get(&DataKey::ItemSlot(id))
            .ok_or(MarketError::NotFound)?;
        let last = self.len().checked_sub(1).ok_or(MarketError::NotFound)?;

        if slot != last {
            let moved: u64 = store
                .get(&DataKey::IndexEntry(last))
                .ok_or(MarketError::NotFound)?;
            self.put_entry(slot, moved);
            self.put_slot(moved, slot);
        }

        store.remove(&DataKey::IndexEntry(last));
        store.remove(&DataKey::ItemSlot(id));
        store.remove(&DataKey::Item(id));
        self.env.storage().instance().set(&DataKey::IndexLen, &last);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Enumeration
    // ------------------------------------------------------------------

    pub fn len(&self) -> u32 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::IndexLen)
            .unwrap_or(0)
    }

    pub fn id_at(&self, slot: u32) -> Option<u64> {
        self.env.storage().persistent().get(&DataKey::IndexEntry(slot))
    }

    /// Live ids in current index order.
    pub fn ids(&self) -> Vec<u64> {
        let mut ids = Vec::new(&self.env);
        for slot in 0..self.len() {
            if let Some(id) = self.id_at(slot) {
                ids.push_back(id);
            }
        }
        ids
    }

    /// Items in slots `start..start + limit`, clipped to the index length.
    pub fn page(&self, start: u32, limit: u32) -> Vec<Item> {
        let mut items = Vec::new(&self.env);
        let end = start.saturating_add(limit).min(self.len());

        for slot in start..end {
            let Some(id) = self.id_at(slot) else {
                log!(&self.env, "index slot without entry", slot);
                continue;
            };
            match self.get(id) {
                Ok(item) => items.push_back(item),
                Err(_) => log!(&self.env, "indexed item has no record", id),
            }
        }
        items
    }

    pub fn enumerate(&self) -> Vec<Item> {
        self.page(0, self.len())
    }

    // ------------------------------------------------------------------
    // Raw writes
    // ------------------------------------------------------------------

    fn put_item(&self, item: &Item) {
        let key = DataKey::Item(item.id);
        let store = self.env.storage().persistent();
        store.set(&key, item);
        store.extend_ttl(&key, ITEM_TTL_THRESHOLD, ITEM_TTL_EXTEND);
    }

    fn put_entry(&self, slot: u32, id: u64) {
        let key = DataKey::IndexEntry(slot);
        let store = self.env.storage().persistent();
        store.set(&key, &id);
        store.extend_ttl(&key, ITEM_TTL_THRESHOLD, ITEM_TTL_EXTEND);
    }

    fn put_slot(&self, id: u64, slot: u32) {
        let key = DataKey::ItemSlot(id);
        let store = self.env.storage().persistent();
        store.set(&key, &slot);
        store.extend_ttl(&key, ITEM_TTL_THRESHOLD, ITEM_TTL_EXTEND);
    }
}
