use shared::constants::{
    MAX_DEPARTMENT_LEN, MAX_LICENSING_RATE, MAX_PAYMENT, MAX_TITLE_LEN, PERMILLE_DENOMINATOR,
};
use shared::errors::Error;
use shared::types::{Amount, Config, Patent};
use soroban_sdk::{token::TokenClient, Address, Env, String};

use crate::storage::{extend_instance_ttl, get_config, is_paused};

/// Load the configuration of an initialized, unpaused contract.
/// Every state-changing user operation goes through this first.
pub fn require_operational(env: &Env) -> Result<Config, Error> {
    let config = get_config(env)?;
    if is_paused(env) {
        return Err(Error::Paused);
    }
    extend_instance_ttl(env);
    Ok(config)
}

/// Authenticate `admin` against the configured admin
pub fn require_admin(env: &Env, admin: &Address) -> Result<Config, Error> {
    let config = get_config(env)?;
    if config.admin != *admin {
        return Err(Error::AccessForbidden);
    }
    admin.require_auth();
    Ok(config)
}

/// Validate that the caller is the patent's lead researcher
pub fn require_lead(patent: &Patent, caller: &Address) -> Result<(), Error> {
    if patent.lead_researcher == *caller {
        Ok(())
    } else {
        Err(Error::AccessForbidden)
    }
}

pub fn validate_title(title: &String) -> Result<(), Error> {
    if title.len() == 0 || title.len() > MAX_TITLE_LEN {
        return Err(Error::InvalidParameters);
    }
    Ok(())
}

pub fn validate_department(department: &String) -> Result<(), Error> {
    if department.len() == 0 || department.len() > MAX_DEPARTMENT_LEN {
        return Err(Error::InvalidParameters);
    }
    Ok(())
}

pub fn validate_licensing_fee(fee: Amount) -> Result<(), Error> {
    if fee <= 0 {
        return Err(Error::InvalidParameters);
    }
    Ok(())
}

pub fn validate_licensing_rate(rate: u32) -> Result<(), Error> {
    if rate > MAX_LICENSING_RATE {
        return Err(Error::InvalidParameters);
    }
    Ok(())
}

/// A share carved out for a new contributor must lie in (0, 1000]
pub fn validate_share(share_permille: u32) -> Result<(), Error> {
    if share_permille == 0 || share_permille > PERMILLE_DENOMINATOR {
        return Err(Error::InvalidParameters);
    }
    Ok(())
}

/// Payments and allocation totals must lie in (0, MAX_PAYMENT]
pub fn validate_payment(amount: Amount) -> Result<(), Error> {
    if amount <= 0 || amount > MAX_PAYMENT {
        return Err(Error::InvalidParameters);
    }
    Ok(())
}

/// Balance check performed before moving `amount` out of `account`
pub fn require_balance(
    token: &TokenClient,
    account: &Address,
    amount: Amount,
) -> Result<(), Error> {
    if token.balance(account) < amount {
        return Err(Error::FundingInsufficient);
    }
    Ok(())
}
