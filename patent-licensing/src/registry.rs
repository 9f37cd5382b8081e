//! Patent registry: registration, filing and status toggling.

use shared::errors::Error;
use shared::events::{PATENT_FILED, PATENT_REGISTERED, PATENT_TOGGLED};
use shared::types::{Amount, Patent, PatentId};
use soroban_sdk::{log, token::TokenClient, Address, Env, String};

use crate::contribution;
use crate::storage::{get_next_patent_id, get_patent, set_next_patent_id, set_patent};
use crate::validation::{
    require_balance, require_lead, require_operational, validate_licensing_fee,
    validate_licensing_rate, validate_title,
};

/// Register a patent with the caller as lead researcher holding the full 1000 share
pub fn register_patent(
    env: &Env,
    caller: &Address,
    title: String,
    licensing_fee: Amount,
    licensing_rate: u32,
) -> Result<PatentId, Error> {
    caller.require_auth();
    require_operational(env)?;

    validate_title(&title)?;
    validate_licensing_fee(licensing_fee)?;
    validate_licensing_rate(licensing_rate)?;

    let patent_id = get_next_patent_id(env);
    let next_id = patent_id.checked_add(1).ok_or(Error::InvalidParameters)?;

    let patent = Patent {
        id: patent_id,
        title,
        lead_researcher: caller.clone(),
        licensing_fee,
        licensing_rate,
        filed: false,
        active: true,
        registered_at: env.ledger().timestamp(),
        filed_at: 0,
    };

    set_patent(env, &patent);
    contribution::seed_lead(env, patent_id, caller);
    set_next_patent_id(env, next_id);

    log!(env, "patent registered", patent_id, licensing_rate);
    env.events().publish(
        (PATENT_REGISTERED,),
        (patent_id, caller.clone(), licensing_fee, licensing_rate),
    );

    Ok(patent_id)
}

/// File the patent application, paying the licensing fee into the pool.
/// Filing is one-way and locks the contribution table.
pub fn file_application(env: &Env, caller: &Address, patent_id: PatentId) -> Result<(), Error> {
    caller.require_auth();
    let config = require_operational(env)?;

    let mut patent = get_patent(env, patent_id)?;
    require_lead(&patent, caller)?;

    if !patent.active {
        return Err(Error::InvalidParameters);
    }
    if patent.filed {
        return Err(Error::AlreadyFiled);
    }

    let token_client = TokenClient::new(env, &config.token);
    require_balance(&token_client, caller, patent.licensing_fee)?;

    token_client.transfer(caller, &env.current_contract_address(), &patent.licensing_fee);

    patent.filed = true;
    patent.filed_at = env.ledger().timestamp();
    set_patent(env, &patent);

    log!(env, "patent filed", patent_id);
    env.events()
        .publish((PATENT_FILED,), (patent_id, patent.licensing_fee));

    Ok(())
}

/// Flip the patent's active flag, returning the new value
pub fn toggle_status(env: &Env, caller: &Address, patent_id: PatentId) -> Result<bool, Error> {
    caller.require_auth();
    require_operational(env)?;

    let mut patent = get_patent(env, patent_id)?;
    require_lead(&patent, caller)?;

    patent.active = !patent.active;
    set_patent(env, &patent);

    env.events()
        .publish((PATENT_TOGGLED,), (patent_id, patent.active));

    Ok(patent.active)
}
