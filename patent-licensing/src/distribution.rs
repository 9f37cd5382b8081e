//! Fee distribution engine.
//!
//! A licensing payment is split into the institution cut, paid straight to
//! the lead researcher, and the researcher pool, credited to every recorded
//! contributor by share. Credits accumulate per (patent, researcher) and are
//! paid out of the pool by `claim_fees`.

use shared::constants::PERMILLE_DENOMINATOR;
use shared::errors::Error;
use shared::events::{FEES_CLAIMED, FEE_ALLOCATED, FEE_CREDITED, LICENSING_PROCESSED};
use shared::types::{Amount, LicensingSplit, PatentId};
use soroban_sdk::{log, token::TokenClient, Address, Env, Vec};

use crate::storage::{
    get_accumulated_fee, get_contribution, get_contributors, get_held_balance, get_patent,
    get_revenue_summary, set_accumulated_fee, set_held_balance, set_revenue_summary,
};
use crate::validation::{require_balance, require_operational, validate_payment};

/// `floor(amount * share / 1000)`
pub fn share_of(amount: Amount, share_permille: u32) -> Result<Amount, Error> {
    amount
        .checked_mul(share_permille as Amount)
        .map(|scaled| scaled / PERMILLE_DENOMINATOR as Amount)
        .ok_or(Error::InvalidParameters)
}

/// Split a payment into institution cut and researcher pool.
/// The two parts always sum to the payment.
pub fn split_payment(payment: Amount, licensing_rate: u32) -> Result<LicensingSplit, Error> {
    let institution_cut = share_of(payment, licensing_rate)?;
    let researcher_pool = payment
        .checked_sub(institution_cut)
        .ok_or(Error::InvalidParameters)?;

    Ok(LicensingSplit {
        payment,
        institution_cut,
        researcher_pool,
    })
}

/// Per-contributor credits for `pool`. The integer-division remainder goes to
/// `lead`, so the returned amounts sum exactly to `pool`.
pub fn contributor_credits(
    env: &Env,
    patent_id: PatentId,
    lead: &Address,
    pool: Amount,
) -> Result<Vec<(Address, Amount)>, Error> {
    let contributors = get_contributors(env, patent_id);

    let mut credits: Vec<(Address, Amount)> = Vec::new(env);
    let mut credited: Amount = 0;
    let mut lead_index: Option<u32> = None;

    for researcher in contributors.iter() {
        let share = get_contribution(env, patent_id, &researcher)
            .map(|c| c.share_permille)
            .unwrap_or(0);
        let amount = share_of(pool, share)?;
        credited = credited.checked_add(amount).ok_or(Error::InvalidParameters)?;
        if researcher == *lead {
            lead_index = Some(credits.len());
        }
        credits.push_back((researcher, amount));
    }

    let remainder = pool.checked_sub(credited).ok_or(Error::InvalidParameters)?;
    if remainder > 0 {
        let index = lead_index.ok_or(Error::InvalidParameters)?;
        let (researcher, amount) = credits.get(index).ok_or(Error::InvalidParameters)?;
        let amount = amount.checked_add(remainder).ok_or(Error::InvalidParameters)?;
        credits.set(index, (researcher, amount));
    }

    Ok(credits)
}

/// Take a licensing payment from the caller and distribute it
pub fn process_licensing(
    env: &Env,
    caller: &Address,
    patent_id: PatentId,
    licensee: &Address,
    payment: Amount,
) -> Result<LicensingSplit, Error> {
    caller.require_auth();
    let config = require_operational(env)?;

    let patent = get_patent(env, patent_id)?;

    validate_payment(payment)?;
    if !patent.active || !patent.filed {
        return Err(Error::InvalidParameters);
    }

    let split = split_payment(payment, patent.licensing_rate)?;
    let credits = contributor_credits(env, patent_id, &patent.lead_researcher, split.researcher_pool)?;

    // Resolve every new balance before the first write
    let mut balances: Vec<(Address, Amount)> = Vec::new(env);
    for (researcher, amount) in credits.iter() {
        if amount == 0 {
            continue;
        }
        let balance = get_accumulated_fee(env, patent_id, &researcher)
            .checked_add(amount)
            .ok_or(Error::InvalidParameters)?;
        balances.push_back((researcher, balance));
    }

    let mut summary = get_revenue_summary(env, patent_id);
    summary.total_payments = summary
        .total_payments
        .checked_add(payment)
        .ok_or(Error::InvalidParameters)?;
    summary.total_institution_cut = summary
        .total_institution_cut
        .checked_add(split.institution_cut)
        .ok_or(Error::InvalidParameters)?;
    summary.total_distributed = summary
        .total_distributed
        .checked_add(split.researcher_pool)
        .ok_or(Error::InvalidParameters)?;
    summary.license_count = summary
        .license_count
        .checked_add(1)
        .ok_or(Error::InvalidParameters)?;

    let held = get_held_balance(env, patent_id)
        .checked_add(split.researcher_pool)
        .ok_or(Error::InvalidParameters)?;

    let token_client = TokenClient::new(env, &config.token);
    require_balance(&token_client, caller, payment)?;

    let pool = env.current_contract_address();
    token_client.transfer(caller, &pool, &payment);

    if split.institution_cut > 0 {
        token_client.transfer(&pool, &patent.lead_researcher, &split.institution_cut);
    }

    for (researcher, balance) in balances.iter() {
        set_accumulated_fee(env, patent_id, &researcher, balance);
        env.events()
            .publish((FEE_CREDITED,), (patent_id, researcher, balance));
    }
    set_held_balance(env, patent_id, held);
    set_revenue_summary(env, patent_id, &summary);

    log!(env, "licensing processed", patent_id, payment, split.institution_cut);
    env.events().publish(
        (LICENSING_PROCESSED,),
        (
            patent_id,
            licensee.clone(),
            payment,
            split.institution_cut,
            split.researcher_pool,
        ),
    );

    Ok(split)
}

/// Book the caller's share of an externally agreed total. No currency moves,
/// so the credit is only claimable against funds already held for the patent.
pub fn allocate_my_fees(
    env: &Env,
    caller: &Address,
    patent_id: PatentId,
    total_fees: Amount,
) -> Result<Amount, Error> {
    caller.require_auth();
    require_operational(env)?;

    get_patent(env, patent_id)?;
    validate_payment(total_fees)?;

    let contribution =
        get_contribution(env, patent_id, caller).ok_or(Error::AccessForbidden)?;

    let caller_fee = share_of(total_fees, contribution.share_permille)?;
    if caller_fee == 0 {
        return Err(Error::InvalidParameters);
    }

    let balance = get_accumulated_fee(env, patent_id, caller)
        .checked_add(caller_fee)
        .ok_or(Error::InvalidParameters)?;
    set_accumulated_fee(env, patent_id, caller, balance);

    env.events()
        .publish((FEE_ALLOCATED,), (patent_id, caller.clone(), caller_fee));

    Ok(caller_fee)
}

/// Pay the caller's accumulated balance out of the patent's held funds and
/// reset it to zero
pub fn claim_fees(env: &Env, caller: &Address, patent_id: PatentId) -> Result<Amount, Error> {
    caller.require_auth();
    let config = require_operational(env)?;

    let amount = get_accumulated_fee(env, patent_id, caller);
    if amount <= 0 {
        return Err(Error::NoLicenseFees);
    }

    let held = get_held_balance(env, patent_id);
    if held < amount {
        return Err(Error::FundingInsufficient);
    }

    let token_client = TokenClient::new(env, &config.token);
    let pool = env.current_contract_address();
    require_balance(&token_client, &pool, amount)?;

    set_held_balance(env, patent_id, held - amount);
    set_accumulated_fee(env, patent_id, caller, 0);
    token_client.transfer(&pool, caller, &amount);

    log!(env, "fees claimed", patent_id, amount);
    env.events()
        .publish((FEES_CLAIMED,), (patent_id, caller.clone(), amount));

    Ok(amount)
}
