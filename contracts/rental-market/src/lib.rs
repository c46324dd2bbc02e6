/*!
# Rental Market

Peer-to-peer rental marketplace: owners list items, leasers lock the item's
deposit to lease it, the item is returned against rent and the deposit is
refunded, and the current leaser can rate the item.

## Architecture

```
RentalMarket            ← contract surface, auth, events
    ├── LeaseManager        ← Available <-> Leased transitions
    │       └── Escrow          ← deposit / rent / refund transfers
    ├── rating              ← running average of scores
    └── ItemRepository      ← item records + dense enumeration index
```

Each item's state machine is independent of every other item's.
*/
#![no_std]

mod escrow;
mod events;
mod manager;
mod rating;
mod repository;
mod storage;

#[cfg(test)]
extern crate std;
#[cfg(test)]
mod test_lease;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

use rental_lib::{
    admin::{is_initialized, read_config, write_config},
    validation::validate_listing,
    BillingFrequency, Item, LeaseState, MarketConfig, MarketError, RatingPolicy, MAX_PAGE_SIZE,
};

use escrow::to_token_amount;
use manager::LeaseManager;
use repository::ItemRepository;

#[contract]
pub struct RentalMarket;

#[contractimpl]
impl RentalMarket {
    /// Initialize contract with admin and payment token
    pub fn init_contract(env: Env, admin: Address, payment_token: Address) -> Result<(), MarketError> {
        if is_initialized(&env) {
            return Err(MarketError::AlreadyInitialized);
        }
        admin.require_auth();

        let config = MarketConfig {
            admin,
            payment_token,
            rating_policy: RatingPolicy::default(),
        };
        write_config(&env, &config);
        storage::bump_instance(&env);

        events::initialized(&env, &config);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<MarketConfig, MarketError> {
        read_config(&env)
    }

    pub fn set_payment_token(env: Env, admin: Address, token: Address) -> Result<(), MarketError> {
        admin.require_auth();
        let config = storage::set_payment_token(&env, &admin, token)?;
        storage::bump_instance(&env);
        events::config_changed(&env, &config);
        Ok(())
    }

    pub fn set_rating_policy(env: Env, admin: Address, policy: RatingPolicy) -> Result<(), MarketError> {
        admin.require_auth();
        let config = storage::set_rating_policy(&env, &admin, policy)?;
        storage::bump_instance(&env);
        events::config_changed(&env, &config);
        Ok(())
    }

    pub fn transfer_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), MarketError> {
        rental_lib::admin::transfer_admin(&env, &admin, &new_admin)?;
        storage::bump_instance(&env);
        events::config_changed(&env, &read_config(&env)?);
        Ok(())
    }

    /// List a new item owned by `owner`. Returns the new item id.
    pub fn list_item(
        env: Env,
        owner: Address,
        name: String,
        desc: String,
        rent: u128,
        freq: BillingFrequency,
        img: String,
        deposit: u128,
    ) -> Result<u64, MarketError> {
        owner.require_auth();

        validate_listing(&name, &desc, &img)?;
        // both amounts have to move through the token later on
        to_token_amount(rent)?;
        to_token_amount(deposit)?;

        let repo = ItemRepository::new(&env);
        let item = Item {
            id: repo.next_id()?,
            name,
            desc,
            img,
            rent,
            freq,
            deposit,
            owner,
            is_available: true,
            current_leaser: None,
            start_date: 0,
            past_leasers: Vec::new(&env),
            rating: 0,
            rating_total: 0,
            num_reviews: 0,
        };
        repo.insert(&item)?;
        storage::bump_instance(&env);

        log!(&env, "item listed successfully", item.id);
        events::listed(&env, &item);
        Ok(item.id)
    }

    /// Snapshot of every live item. Order changes after deletions.
    pub fn get_all_items(env: Env) -> Vec<Item> {
        ItemRepository::new(&env).enumerate()
    }

    /// Page of the enumeration index, at most `MAX_PAGE_SIZE` items.
    pub fn get_items(env: Env, start: u32, limit: u32) -> Vec<Item> {
        ItemRepository::new(&env).page(start, limit.min(MAX_PAGE_SIZE))
    }

    pub fn get_item(env: Env, item_id: u64) -> Result<Item, MarketError> {
        ItemRepository::new(&env).get(item_id)
    }

    pub fn item_count(env: Env) -> u32 {
        ItemRepository::new(&env).len()
    }

    pub fn lease_state(env: Env, item_id: u64) -> Result<LeaseState, MarketError> {
        Ok(ItemRepository::new(&env).get(item_id)?.lease_state())
    }

    /// Lease `item_id`, locking `attached` (which must equal the deposit).
    pub fn lease_item(
        env: Env,
        item_id: u64,
        leaser: Address,
        attached: u128,
        start_date: u64,
    ) -> Result<(), MarketError> {
        leaser.require_auth();
        LeaseManager::new(&env).lease_item(item_id, &leaser, attached, start_date)?;
        storage::bump_instance(&env);
        Ok(())
    }

    /// Return `item_id`: `attached_rent` goes to the owner and the deposit
    /// back to `returner`.
    pub fn return_item(
        env: Env,
        item_id: u64,
        returner: Address,
        attached_rent: u128,
        end_date: u64,
    ) -> Result<(), MarketError> {
        returner.require_auth();
        LeaseManager::new(&env).return_item(item_id, &returner, attached_rent, end_date)?;
        storage::bump_instance(&env);
        Ok(())
    }

    /// Rate `item_id` with a 0..=5 score. Only the current leaser may rate.
    pub fn rate_item(env: Env, item_id: u64, rater: Address, score: u32) -> Result<(), MarketError> {
        rater.require_auth();

        let repo = ItemRepository::new(&env);
        let mut item = repo.get(item_id)?;
        rating::rate(&mut item, &rater, score, storage::get_rating_policy(&env))?;
        repo.update(&item)?;
        storage::bump_instance(&env);

        events::rated(&env, &item, &rater, score);
        Ok(())
    }

    /// Permanently remove `item_id`, leased or not.
    pub fn delete_item(env: Env, item_id: u64) -> Result<(), MarketError> {
        ItemRepository::new(&env).delete(item_id)?;
        storage::bump_instance(&env);

        events::deleted(&env, item_id);
        Ok(())
    }
}
