use soroban_sdk::{Address, Env};

use crate::{errors::MarketError, storage_keys::DataKey, types::MarketConfig};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn read_config(env: &Env) -> Result<MarketConfig, MarketError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(MarketError::NotInitialized)
}

pub fn write_config(env: &Env, config: &MarketConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// Returns the current config when `caller` is its admin.
pub fn verify_admin(env: &Env, caller: &Address) -> Result<MarketConfig, MarketError> {
    let config = read_config(env)?;
    if &config.admin != caller {
        return Err(MarketError::Unauthorized);
    }
    Ok(config)
}

pub fn transfer_admin(
    env: &Env,
    current_admin: &Address,
    new_admin: &Address,
) -> Result<(), MarketError> {
    current_admin.require_auth();
    let mut config = verify_admin(env, current_admin)?;
    config.admin = new_admin.clone();
    write_config(env, &config);
    Ok(())
}
