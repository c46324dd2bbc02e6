use soroban_sdk::{Address, Env};

use rental_lib::{Item, MarketError};

use crate::{
    escrow::{to_token_amount, Escrow},
    events,
    repository::ItemRepository,
};

/// Encapsulates the lease / return rules for a single item.
///
/// Each call loads the item, applies the transition in memory, writes the
/// record back and only then moves funds through `Escrow`. Items are
/// independent: nothing here reads or writes another item's record.
pub struct LeaseManager {
    env: Env,
    repo: ItemRepository,
}

impl LeaseManager {
    pub fn new(env: &Env) -> Self {
        Self {
            env: env.clone(),
            repo: ItemRepository::new(env),
        }
    }

    /// Start a lease of `item_id` for `leaser`.
    ///
    /// # Rules
    /// * The item must be available (`AlreadyLeased`).
    /// * `attached` must equal the item's deposit (`DepositMismatch`).
    /// * The deposit is pulled from `leaser` into the contract.
    pub fn lease_item(
        &self,
        item_id: u64,
        leaser: &Address,
        attached: u128,
        start_date: u64,
    ) -> Result<Item, MarketError> {
        let escrow = Escrow::new(&self.env)?;
        let mut item = self.repo.get(item_id)?;

        begin_lease(&mut item, leaser, attached, start_date)?;
        let deposit = to_token_amount(attached)?;

        self.repo.update(&item)?;
        escrow.hold_deposit(leaser, deposit);

        events::leased(&self.env, item_id, leaser, start_date);
        Ok(item)
    }

    /// End the active lease of `item_id`.
    ///
    /// `returner` is not required to be the current leaser. The rent it
    /// attaches is forwarded to the owner as-is and the deposit is refunded
    /// to `returner`.
    pub fn return_item(
        &self,
        item_id: u64,
        returner: &Address,
        attached_rent: u128,
        end_date: u64,
    ) -> Result<Item, MarketError> {
        let escrow = Escrow::new(&self.env)?;
        let mut item = self.repo.get(item_id)?;

        let leaser = end_lease(&mut item)?;
        let rent = to_token_amount(attached_rent)?;
        let deposit = to_token_amount(item.deposit)?;

        self.repo.update(&item)?;
        escrow.settle_return(&item.owner, returner, rent, deposit);

        events::returned(&self.env, item_id, &leaser, returner, end_date);
        Ok(item)
    }
}

/// `Available -> Leased`.
pub(crate) fn begin_lease(
    item: &mut Item,
    leaser: &Address,
    attached: u128,
    start_date: u64,
) -> Result<(), MarketError> {
    if !item.is_available {
        return Err(MarketError::AlreadyLeased);
    }
    if attached != item.deposit {
        return Err(MarketError::DepositMismatch);
    }

    item.is_available = false;
    item.current_leaser = Some(leaser.clone());
    item.start_date = start_date;
    Ok(())
}

/// `Leased -> Available`. Returns the leaser whose lease just ended.
pub(crate) fn end_lease(item: &mut Item) -> Result<Address, MarketError> {
    if item.is_available {
        return Err(MarketError::NotLeased);
    }
    let leaser = item.current_leaser.clone().ok_or(MarketError::NotLeased)?;

    item.past_leasers.push_back(leaser.clone());
    item.is_available = true;
    item.current_leaser = None;
    item.start_date = 0;
    Ok(leaser)
}
