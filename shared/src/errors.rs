use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,

    /// Caller identity does not hold the required role
    AccessForbidden = 3,
    /// Domain, range or lifecycle-state violation
    InvalidParameters = 4,
    PatentNotFound = 5,
    /// Re-filing, or a mutation that is only legal before filing
    AlreadyFiled = 6,
    /// Balance check failed before a transfer
    FundingInsufficient = 7,
    NoLicenseFees = 8,

    // Pause errors
    Paused = 9,
    ResumeTooEarly = 10,
    NotPaused = 11,
}
