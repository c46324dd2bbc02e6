use soroban_sdk::{symbol_short, Address, Env};

use rental_lib::{Item, MarketConfig};

pub fn initialized(env: &Env, config: &MarketConfig) {
    env.events().publish(
        (symbol_short!("init"),),
        (config.admin.clone(), config.payment_token.clone()),
    );
}

pub fn config_changed(env: &Env, config: &MarketConfig) {
    env.events().publish(
        (symbol_short!("config"),),
        (
            config.admin.clone(),
            config.payment_token.clone(),
            config.rating_policy,
        ),
    );
}

pub fn listed(env: &Env, item: &Item) {
    env.events().publish(
        (symbol_short!("listed"), item.id),
        (item.owner.clone(), item.rent, item.deposit),
    );
}

pub fn leased(env: &Env, item_id: u64, leaser: &Address, start_date: u64) {
    env.events().publish(
        (symbol_short!("leased"), item_id),
        (leaser.clone(), start_date),
    );
}

/// `end_date` is only reported here; it is not stored on the item.
pub fn returned(env: &Env, item_id: u64, leaser: &Address, returner: &Address, end_date: u64) {
    env.events().publish(
        (symbol_short!("returned"), item_id),
        (leaser.clone(), returner.clone(), end_date),
    );
}

pub fn rated(env: &Env, item: &Item, rater: &Address, score: u32) {
    env.events().publish(
        (symbol_short!("rated"), item.id),
        (rater.clone(), score, item.rating, item.num_reviews),
    );
}

pub fn deleted(env: &Env, item_id: u64) {
    env.events().publish((symbol_short!("deleted"), item_id), ());
}

pub fn transfer(env: &Env, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("transfer"), to.clone()), amount);
}
