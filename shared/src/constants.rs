/// Shares and rates are expressed out of 1000 (permille)
pub const PERMILLE_DENOMINATOR: u32 = 1000;

/// Institution cut is capped at 45%
pub const MAX_LICENSING_RATE: u32 = 450;

/// Upper bound (inclusive) for a single licensing payment or allocation total
pub const MAX_PAYMENT: i128 = 1_000_000_000;

/// Contributors per patent, lead researcher included.
/// Bounds the fan-out of a single distribution.
pub const MAX_CONTRIBUTORS: u32 = 20;

pub const MAX_TITLE_LEN: u32 = 256;
pub const MAX_DEPARTMENT_LEN: u32 = 64;

/// Department recorded for the lead researcher's seeded contribution
pub const LEAD_DEPARTMENT: &str = "lead";

/// First id handed out by the registry
pub const FIRST_PATENT_ID: u64 = 1;

/// Minimum time between pause and resume (24 hours)
pub const RESUME_TIME_DELAY: u64 = 86_400;

// Storage TTL (in ledgers)
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200;
