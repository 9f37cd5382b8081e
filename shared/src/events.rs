use soroban_sdk::{symbol_short, Symbol};

// Configuration events
pub const CONTRACT_INITIALIZED: Symbol = symbol_short!("init");
pub const CONTRACT_PAUSED: Symbol = symbol_short!("paused");
pub const CONTRACT_RESUMED: Symbol = symbol_short!("resumed");

// Registry events
pub const PATENT_REGISTERED: Symbol = symbol_short!("pat_reg");
pub const PATENT_FILED: Symbol = symbol_short!("pat_file");
pub const PATENT_TOGGLED: Symbol = symbol_short!("pat_tgl");

// Contribution events
pub const RESEARCHER_ADDED: Symbol = symbol_short!("res_add");

// Distribution events
pub const LICENSING_PROCESSED: Symbol = symbol_short!("lic_proc");
pub const FEE_CREDITED: Symbol = symbol_short!("fee_cred");
pub const FEE_ALLOCATED: Symbol = symbol_short!("fee_alloc");
pub const FEES_CLAIMED: Symbol = symbol_short!("fee_claim");
