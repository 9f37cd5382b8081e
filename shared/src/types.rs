use soroban_sdk::{contracttype, Address, String};

pub type Amount = i128;
pub type PatentId = u64;

/// Contract-wide configuration, set once by `initialize`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Token used for filing fees, licensing payments and claims
    pub token: Address,
}

/// A registered patent. The lead researcher is the registering account.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patent {
    pub id: u64,
    pub title: String,
    pub lead_researcher: Address,
    pub licensing_fee: i128,
    /// Institution cut in permille, at most `MAX_LICENSING_RATE`
    pub licensing_rate: u32,
    pub filed: bool,
    pub active: bool,
    pub registered_at: u64,
    /// Zero until filed
    pub filed_at: u64,
}

/// One researcher's ownership slice of a patent
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    pub researcher: Address,
    pub share_permille: u32,
    pub department: String,
}

/// Running licensing totals for a patent
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RevenueSummary {
    pub total_payments: i128,
    pub total_institution_cut: i128,
    pub total_distributed: i128,
    pub license_count: u32,
}

/// Outcome of a single licensing payment
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LicensingSplit {
    pub payment: i128,
    pub institution_cut: i128,
    pub researcher_pool: i128,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PauseState {
    pub paused: bool,
    pub paused_at: u64,
    pub resume_not_before: u64,
}
