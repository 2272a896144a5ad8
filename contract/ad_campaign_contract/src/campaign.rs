use soroban_sdk::{Address, Env};

use crate::storage_types::*;

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn read_admin(env: &Env) -> Address {
    // Written by the constructor, so always present once deployed.
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn read_next_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(FIRST_CAMPAIGN_ID)
}

/// Hands out the current counter value and advances it by one.
pub fn allocate_id(env: &Env) -> Result<u64, CampaignError> {
    let id = read_next_id(env);
    let next = id.checked_add(1).ok_or(CampaignError::IdOverflow)?;
    env.storage()
        .instance()
        .set(&DataKey::NextCampaignId, &next);
    extend_instance(env);
    Ok(id)
}

pub fn load_campaign(env: &Env, campaign_id: u64) -> Result<Campaign, CampaignError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CampaignError::NotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

/// Loads a campaign and checks that `caller` created it.
pub fn load_owned_campaign(
    env: &Env,
    caller: &Address,
    campaign_id: u64,
) -> Result<Campaign, CampaignError> {
    let campaign = load_campaign(env, campaign_id)?;
    if campaign.owner != *caller {
        return Err(CampaignError::NotOwner);
    }
    Ok(campaign)
}

pub fn validate_budget(budget: i128) -> Result<(), CampaignError> {
    if budget <= 0 {
        return Err(CampaignError::InvalidBudget);
    }
    Ok(())
}

/// Total spend after adding `amount`, or an error if it would leave the budget.
pub fn spend_after(campaign: &Campaign, amount: i128) -> Result<i128, CampaignError> {
    if amount < 0 {
        return Err(CampaignError::InvalidBudget);
    }
    match campaign.spent.checked_add(amount) {
        Some(total) if total <= campaign.budget => Ok(total),
        _ => Err(CampaignError::BUDGET_EXCEEDED),
    }
}
