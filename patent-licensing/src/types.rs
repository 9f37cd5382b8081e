use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage
    Config,
    NextPatentId,
    PauseState,

    // Persistent storage
    Patent(u64),                 // patent_id -> Patent
    Contribution(u64, Address),  // patent_id, researcher -> Contribution
    Contributors(u64),           // patent_id -> Vec<Address>, lead first
    AccumulatedFee(u64, Address), // patent_id, researcher -> Amount
    Revenue(u64),                // patent_id -> RevenueSummary
    HeldBalance(u64),            // patent_id -> Amount backing unclaimed fees
}
