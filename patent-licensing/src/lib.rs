#![no_std]

use shared::{
    constants::RESUME_TIME_DELAY,
    errors::Error,
    events::{CONTRACT_INITIALIZED, CONTRACT_PAUSED, CONTRACT_RESUMED},
    types::{Config, Contribution, LicensingSplit, Patent, PauseState, RevenueSummary},
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, token::TokenClient, Address, Env, String, Vec,
};

mod contribution;
mod distribution;
mod registry;
mod storage;
mod types;
mod validation;


use storage::*;

contractmeta!(
    key = "name",
    val = "Patent Licensing Contract"
);

#[contract]
pub struct PatentLicensingContract;

#[contractimpl]
impl PatentLicensingContract {
    /// Initialize the contract with an admin and the payment token
    ///
    /// # Arguments
    /// * `admin` - Address allowed to pause and resume the contract
    /// * `token` - Token used for filing fees, licensing payments and claims
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        let config = Config {
            admin: admin.clone(),
            token: token.clone(),
        };
        set_config(&env, &config);
        set_next_patent_id(&env, get_next_patent_id(&env));
        extend_instance_ttl(&env);

        env.events()
            .publish((CONTRACT_INITIALIZED,), (admin, token));

        Ok(())
    }

    // ==================== Patent Registry ====================

    /// Register a new patent. The caller becomes its lead researcher.
    ///
    /// # Arguments
    /// * `caller` - Registering account
    /// * `title` - Non-empty patent title
    /// * `licensing_fee` - Filing fee, must be positive
    /// * `licensing_rate` - Institution cut in permille, at most 450
    ///
    /// # Errors
    /// * `InvalidParameters` - Empty title, zero fee or rate above 450
    pub fn register_patent(
        env: Env,
        caller: Address,
        title: String,
        licensing_fee: i128,
        licensing_rate: u32,
    ) -> Result<u64, Error> {
        registry::register_patent(&env, &caller, title, licensing_fee, licensing_rate)
    }

    /// File the patent application, paying the licensing fee into the pool
    ///
    /// # Errors
    /// * `PatentNotFound` - Unknown patent id
    /// * `AccessForbidden` - Caller is not the lead researcher
    /// * `InvalidParameters` - Patent is inactive
    /// * `AlreadyFiled` - Patent was filed before
    /// * `FundingInsufficient` - Caller cannot cover the licensing fee
    pub fn file_application(env: Env, caller: Address, patent_id: u64) -> Result<(), Error> {
        registry::file_application(&env, &caller, patent_id)
    }

    /// Flip the patent's active flag. Lead researcher only.
    pub fn toggle_status(env: Env, caller: Address, patent_id: u64) -> Result<bool, Error> {
        registry::toggle_status(&env, &caller, patent_id)
    }

    // ==================== Contribution Ledger ====================

    /// Add a contributing researcher before filing
    ///
    /// # Arguments
    /// * `caller` - Must be the lead researcher
    /// * `patent_id` - Patent identifier
    /// * `researcher` - Contributor to add
    /// * `share_permille` - Slice taken from the lead researcher's residual
    /// * `department` - Advisory department label
    ///
    /// # Errors
    /// * `AlreadyFiled` - Patent is filed and its shares are locked
    /// * `InvalidParameters` - Share out of range or above the lead's residual,
    ///   empty department, self-addition or duplicate researcher
    pub fn add_researcher(
        env: Env,
        caller: Address,
        patent_id: u64,
        researcher: Address,
        share_permille: u32,
        department: String,
    ) -> Result<(), Error> {
        contribution::add_researcher(
            &env,
            &caller,
            patent_id,
            &researcher,
            share_permille,
            department,
        )
    }

    // ==================== Fee Distribution ====================

    /// Pay a licensing fee for a filed, active patent.
    ///
    /// The institution cut goes to the lead researcher immediately; the rest
    /// is credited to contributors by share and claimable via `claim_fees`.
    ///
    /// # Errors
    /// * `InvalidParameters` - Payment outside (0, 1_000_000_000], patent
    ///   inactive or not filed
    /// * `FundingInsufficient` - Caller cannot cover the payment
    pub fn process_licensing(
        env: Env,
        caller: Address,
        patent_id: u64,
        licensee: Address,
        payment: i128,
    ) -> Result<LicensingSplit, Error> {
        distribution::process_licensing(&env, &caller, patent_id, &licensee, payment)
    }

    /// Credit the caller's share of `total_fees` without moving currency
    ///
    /// # Errors
    /// * `AccessForbidden` - Caller holds no contribution on the patent
    /// * `InvalidParameters` - Total out of range or caller's share rounds to zero
    pub fn allocate_my_fees(
        env: Env,
        caller: Address,
        patent_id: u64,
        total_fees: i128,
    ) -> Result<i128, Error> {
        distribution::allocate_my_fees(&env, &caller, patent_id, total_fees)
    }

    /// Withdraw the caller's accumulated fees from the patent's held funds
    ///
    /// # Errors
    /// * `NoLicenseFees` - Nothing accumulated
    /// * `FundingInsufficient` - The patent holds less than the accumulated balance
    pub fn claim_fees(env: Env, caller: Address, patent_id: u64) -> Result<i128, Error> {
        distribution::claim_fees(&env, &caller, patent_id)
    }

    // ==================== Queries ====================

    pub fn get_patent(env: Env, patent_id: u64) -> Result<Patent, Error> {
        get_patent(&env, patent_id)
    }

    pub fn get_contribution(
        env: Env,
        patent_id: u64,
        researcher: Address,
    ) -> Option<Contribution> {
        get_contribution(&env, patent_id, &researcher)
    }

    /// Every researcher with a contribution, lead researcher first
    pub fn get_contributors(env: Env, patent_id: u64) -> Vec<Address> {
        get_contributors(&env, patent_id)
    }

    /// Sum of all recorded shares; 1000 for every registered patent
    pub fn get_total_shares(env: Env, patent_id: u64) -> u32 {
        contribution::total_shares(&env, patent_id)
    }

    /// Claimable balance, zero when nothing was credited
    pub fn get_accumulated_fees(env: Env, patent_id: u64, researcher: Address) -> i128 {
        get_accumulated_fee(&env, patent_id, &researcher)
    }

    pub fn get_revenue_summary(env: Env, patent_id: u64) -> RevenueSummary {
        get_revenue_summary(&env, patent_id)
    }

    pub fn get_next_patent_id(env: Env) -> u64 {
        get_next_patent_id(&env)
    }

    pub fn patent_exists(env: Env, patent_id: u64) -> bool {
        patent_exists(&env, patent_id)
    }

    pub fn get_total_patents(env: Env) -> u64 {
        get_next_patent_id(&env) - shared::constants::FIRST_PATENT_ID
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        get_config(&env)
    }

    /// Token balance held by the contract for claims
    pub fn get_pool_balance(env: Env) -> Result<i128, Error> {
        let config = get_config(&env)?;
        Ok(TokenClient::new(&env, &config.token).balance(&env.current_contract_address()))
    }

    /// Tokens held for the patent's unclaimed fees
    pub fn get_held_balance(env: Env, patent_id: u64) -> i128 {
        get_held_balance(&env, patent_id)
    }

    // ==================== Pause ====================

    /// Halt every state-changing operation. Queries stay available.
    ///
    /// # Errors
    /// * `AccessForbidden` - `admin` is not the configured admin
    /// * `Paused` - Already paused
    pub fn pause(env: Env, admin: Address) -> Result<(), Error> {
        validation::require_admin(&env, &admin)?;
        if is_paused(&env) {
            return Err(Error::Paused);
        }

        let paused_at = env.ledger().timestamp();
        let resume_not_before = paused_at
            .checked_add(RESUME_TIME_DELAY)
            .ok_or(Error::InvalidParameters)?;
        set_pause_state(
            &env,
            &PauseState {
                paused: true,
                paused_at,
                resume_not_before,
            },
        );

        env.events()
            .publish((CONTRACT_PAUSED,), (admin, paused_at, resume_not_before));
        Ok(())
    }

    /// Lift a pause once `RESUME_TIME_DELAY` has elapsed
    ///
    /// # Errors
    /// * `NotPaused` - Nothing to resume
    /// * `ResumeTooEarly` - Delay has not elapsed yet
    pub fn resume(env: Env, admin: Address) -> Result<(), Error> {
        validation::require_admin(&env, &admin)?;

        let mut state = get_pause_state(&env);
        if !state.paused {
            return Err(Error::NotPaused);
        }
        if env.ledger().timestamp() < state.resume_not_before {
            return Err(Error::ResumeTooEarly);
        }

        state.paused = false;
        set_pause_state(&env, &state);

        env.events()
            .publish((CONTRACT_RESUMED,), (admin, env.ledger().timestamp()));
        Ok(())
    }

    pub fn get_is_paused(env: Env) -> bool {
        is_paused(&env)
    }
}
