#![no_std]

mod campaign;
mod events;
mod storage_types;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use events::*;
pub use storage_types::*;

#[contract]
pub struct AdCampaignContract;

#[contractimpl]
impl AdCampaignContract {
    /// Fix the admin for the lifetime of the contract and start ids at 1.
    pub fn __constructor(env: Env, admin: Address) {
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::NextCampaignId, &FIRST_CAMPAIGN_ID);
        campaign::extend_instance(&env);
    }

    pub fn is_admin(env: Env, caller: Address) -> bool {
        caller == campaign::read_admin(&env)
    }

    pub fn get_admin(env: Env) -> Address {
        campaign::read_admin(&env)
    }

    /// Create a campaign owned by `caller`. Anyone may create one.
    pub fn create_campaign(
        env: Env,
        caller: Address,
        title: String,
        target_url: String,
        budget: i128,
    ) -> Result<u64, CampaignError> {
        caller.require_auth();
        campaign::validate_budget(budget)?;

        let campaign_id = campaign::allocate_id(&env)?;
        let record = Campaign {
            id: campaign_id,
            owner: caller.clone(),
            title,
            target_url,
            budget,
            spent: 0,
            status: CampaignStatus::Active,
        };
        campaign::save_campaign(&env, &record);

        log!(&env, "campaign created", campaign_id, budget);
        events::emit_campaign_created(
            &env,
            CampaignCreatedEvent {
                campaign_id,
                owner: caller,
                budget,
            },
        );

        Ok(campaign_id)
    }

    /// Pause a campaign. Applies to any status, including ended ones.
    pub fn pause_campaign(
        env: Env,
        caller: Address,
        campaign_id: u64,
    ) -> Result<bool, CampaignError> {
        caller.require_auth();
        let mut record = campaign::load_owned_campaign(&env, &caller, campaign_id)?;

        record.status = CampaignStatus::Paused;
        campaign::save_campaign(&env, &record);

        log!(&env, "campaign paused", campaign_id);
        events::emit_campaign_paused(
            &env,
            CampaignStatusEvent {
                campaign_id,
                owner: caller,
            },
        );

        Ok(true)
    }

    pub fn resume_campaign(
        env: Env,
        caller: Address,
        campaign_id: u64,
    ) -> Result<bool, CampaignError> {
        caller.require_auth();
        let mut record = campaign::load_owned_campaign(&env, &caller, campaign_id)?;

        if record.status == CampaignStatus::Ended {
            return Err(CampaignError::AlreadyEnded);
        }

        record.status = CampaignStatus::Active;
        campaign::save_campaign(&env, &record);

        log!(&env, "campaign resumed", campaign_id);
        events::emit_campaign_resumed(
            &env,
            CampaignStatusEvent {
                campaign_id,
                owner: caller,
            },
        );

        Ok(true)
    }

    /// End a campaign. Ending is terminal and idempotent.
    pub fn end_campaign(
        env: Env,
        caller: Address,
        campaign_id: u64,
    ) -> Result<bool, CampaignError> {
        caller.require_auth();
        let mut record = campaign::load_owned_campaign(&env, &caller, campaign_id)?;

        record.status = CampaignStatus::Ended;
        campaign::save_campaign(&env, &record);

        log!(&env, "campaign ended", campaign_id);
        events::emit_campaign_ended(
            &env,
            CampaignStatusEvent {
                campaign_id,
                owner: caller,
            },
        );

        Ok(true)
    }

    /// Record spend against an active campaign. Admin only.
    pub fn record_spend(
        env: Env,
        caller: Address,
        campaign_id: u64,
        amount: i128,
    ) -> Result<bool, CampaignError> {
        caller.require_auth();
        if !Self::is_admin(env.clone(), caller) {
            return Err(CampaignError::NotAdmin);
        }

        let mut record = campaign::load_campaign(&env, campaign_id)?;
        if record.status != CampaignStatus::Active {
            return Err(CampaignError::NotActive);
        }

        record.spent = campaign::spend_after(&record, amount)?;
        campaign::save_campaign(&env, &record);

        log!(&env, "spend recorded", campaign_id, amount, record.spent);
        events::emit_spend_recorded(
            &env,
            SpendRecordedEvent {
                campaign_id,
                amount,
                total_spent: record.spent,
            },
        );

        Ok(true)
    }

    pub fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, CampaignError> {
        campaign::load_campaign(&env, campaign_id)
    }

    pub fn remaining_budget(env: Env, campaign_id: u64) -> Result<i128, CampaignError> {
        let record = campaign::load_campaign(&env, campaign_id)?;
        Ok(record.budget - record.spent)
    }

    pub fn next_campaign_id(env: Env) -> u64 {
        campaign::read_next_id(&env)
    }

    pub fn campaign_count(env: Env) -> u64 {
        campaign::read_next_id(&env) - FIRST_CAMPAIGN_ID
    }
}
