use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(u64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Active,
    Paused,
    Ended,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: u64,
    pub owner: Address,
    pub title: String,
    pub target_url: String,
    pub budget: i128,
    pub spent: i128,
    pub status: CampaignStatus,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    NotAdmin = 100,
    NotFound = 101,
    NotActive = 102,
    /// Budget is not positive, or a spend would push `spent` past it.
    InvalidBudget = 103,
    NotOwner = 104,
    AlreadyEnded = 105,
    /// The id counter has no value left to hand out.
    IdOverflow = 106,
}

impl CampaignError {
    pub const BUDGET_EXCEEDED: CampaignError = CampaignError::InvalidBudget;
}

// Constants
pub const FIRST_CAMPAIGN_ID: u64 = 1;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
