use soroban_sdk::{Address, Env};

use rental_lib::{
    admin::{read_config, verify_admin, write_config},
    MarketConfig, MarketError, RatingPolicy, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD,
};

/* ---------------- INSTANCE TTL ---------------- */

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/* ---------------- PAYMENT TOKEN ---------------- */

pub fn get_payment_token(env: &Env) -> Result<Address, MarketError> {
    Ok(read_config(env)?.payment_token)
}

pub fn set_payment_token(
    env: &Env,
    admin: &Address,
    token: Address,
) -> Result<MarketConfig, MarketError> {
    let mut config = verify_admin(env, admin)?;
    config.payment_token = token;
    write_config(env, &config);
    Ok(config)
}

/* ---------------- RATING POLICY ---------------- */

/// Falls back to the default policy before `init_contract`.
pub fn get_rating_policy(env: &Env) -> RatingPolicy {
    read_config(env)
        .map(|config| config.rating_policy)
        .unwrap_or_default()
}

pub fn set_rating_policy(
    env: &Env,
    admin: &Address,
    policy: RatingPolicy,
) -> Result<MarketConfig, MarketError> {
    let mut config = verify_admin(env, admin)?;
    config.rating_policy = policy;
    write_config(env, &config);
    Ok(config)
}
