//! Contribution ledger.
//!
//! Shares are permille. The lead researcher is seeded at 1000 and every added
//! researcher is carved out of the lead's residual, so the shares of a patent
//! always sum to exactly 1000.

use shared::constants::{LEAD_DEPARTMENT, MAX_CONTRIBUTORS, PERMILLE_DENOMINATOR};
use shared::errors::Error;
use shared::events::RESEARCHER_ADDED;
use shared::types::{Contribution, PatentId};
use soroban_sdk::{log, Address, Env, String, Vec};

use crate::storage::{get_contribution, get_contributors, get_patent, set_contribution, set_contributors};
use crate::validation::{require_lead, require_operational, validate_department, validate_share};

/// Record the registering account as sole contributor
pub(crate) fn seed_lead(env: &Env, patent_id: PatentId, lead: &Address) {
    let contribution = Contribution {
        researcher: lead.clone(),
        share_permille: PERMILLE_DENOMINATOR,
        department: String::from_str(env, LEAD_DEPARTMENT),
    };
    set_contribution(env, patent_id, &contribution);

    let mut contributors = Vec::new(env);
    contributors.push_back(lead.clone());
    set_contributors(env, patent_id, &contributors);
}

/// Add a researcher to an unfiled patent, moving `share_permille` out of the
/// lead researcher's residual share
pub fn add_researcher(
    env: &Env,
    caller: &Address,
    patent_id: PatentId,
    researcher: &Address,
    share_permille: u32,
    department: String,
) -> Result<(), Error> {
    caller.require_auth();
    require_operational(env)?;

    let patent = get_patent(env, patent_id)?;
    require_lead(&patent, caller)?;

    if patent.filed {
        return Err(Error::AlreadyFiled);
    }

    validate_share(share_permille)?;
    validate_department(&department)?;

    if *researcher == patent.lead_researcher {
        return Err(Error::InvalidParameters);
    }
    if get_contribution(env, patent_id, researcher).is_some() {
        return Err(Error::InvalidParameters);
    }

    let mut lead = get_contribution(env, patent_id, &patent.lead_researcher)
        .ok_or(Error::InvalidParameters)?;
    if share_permille > lead.share_permille {
        return Err(Error::InvalidParameters);
    }

    let mut contributors = get_contributors(env, patent_id);
    if contributors.len() >= MAX_CONTRIBUTORS {
        return Err(Error::InvalidParameters);
    }

    lead.share_permille -= share_permille;
    set_contribution(env, patent_id, &lead);

    let contribution = Contribution {
        researcher: researcher.clone(),
        share_permille,
        department,
    };
    set_contribution(env, patent_id, &contribution);

    contributors.push_back(researcher.clone());
    set_contributors(env, patent_id, &contributors);

    log!(env, "researcher added", patent_id, share_permille, lead.share_permille);
    env.events().publish(
        (RESEARCHER_ADDED,),
        (patent_id, researcher.clone(), share_permille),
    );

    Ok(())
}

/// Sum of every recorded share on the patent
pub fn total_shares(env: &Env, patent_id: PatentId) -> u32 {
    let mut total: u32 = 0;
    for researcher in get_contributors(env, patent_id).iter() {
        if let Some(contribution) = get_contribution(env, patent_id, &researcher) {
            total += contribution.share_permille;
        }
    }
    total
}
