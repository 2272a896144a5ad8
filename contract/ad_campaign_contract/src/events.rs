use soroban_sdk::{contracttype, Address, Symbol};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: u64,
    pub owner: Address,
    pub budget: i128,
}

// The topic names the transition.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignStatusEvent {
    pub campaign_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct SpendRecordedEvent {
    pub campaign_id: u64,
    pub amount: i128,
    pub total_spent: i128,
}

pub fn emit_campaign_created(env: &soroban_sdk::Env, event: CampaignCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_campaign_paused(env: &soroban_sdk::Env, event: CampaignStatusEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_paused"),), event);
}

pub fn emit_campaign_resumed(env: &soroban_sdk::Env, event: CampaignStatusEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_resumed"),), event);
}

pub fn emit_campaign_ended(env: &soroban_sdk::Env, event: CampaignStatusEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_ended"),), event);
}

pub fn emit_spend_recorded(env: &soroban_sdk::Env, event: SpendRecordedEvent) {
    env.events()
        .publish((Symbol::new(env, "spend_recorded"),), event);
}
