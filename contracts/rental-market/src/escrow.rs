use soroban_sdk::{log, token, Address, Env};

use rental_lib::MarketError;

use crate::{events, storage::get_payment_token};

/// Converts a listing amount to the token interface's signed amount.
pub fn to_token_amount(amount: u128) -> Result<i128, MarketError> {
    i128::try_from(amount).map_err(|_| MarketError::AmountOverflow)
}

/// Holds deposits between lease and return and pays them out on return.
///
/// Funds sit in the contract's own balance of the configured payment token.
/// Every transfer here runs inside the calling invocation, so a failed
/// transfer aborts the whole call, including the state it already wrote.
pub struct Escrow {
    env: Env,
    token: Address,
}

impl Escrow {
    pub fn new(env: &Env) -> Result<Self, MarketError> {
        Ok(Self {
            env: env.clone(),
            token: get_payment_token(env)?,
        })
    }

    fn client(&self) -> token::Client<'_> {
        token::Client::new(&self.env, &self.token)
    }

    /// Credits the value `from` attached to the call to the contract.
    pub fn collect(&self, from: &Address, amount: i128) {
        if amount == 0 {
            return;
        }
        self.client()
            .transfer(from, &self.env.current_contract_address(), &amount);
    }

    /// Pays `amount` out of the contract's held balance.
    pub fn pay(&self, to: &Address, amount: i128) {
        if amount == 0 {
            return;
        }
        log!(&self.env, "transferring tokens", amount, to.clone());
        self.client()
            .transfer(&self.env.current_contract_address(), to, &amount);
        events::transfer(&self.env, to, amount);
    }

    /// Locks the leaser's deposit until the item comes back.
    pub fn hold_deposit(&self, leaser: &Address, deposit: i128) {
        self.collect(leaser, deposit);
    }

    /// Rent goes to the owner, the deposit back to whoever returned the item.
    pub fn settle_return(&self, owner: &Address, returner: &Address, rent: i128, deposit: i128) {
        self.collect(returner, rent);

        log!(&self.env, "sending rent to owner account");
        self.pay(owner, rent);

        log!(&self.env, "reverting security deposit payment");
        self.pay(returner, deposit);
    }
}
