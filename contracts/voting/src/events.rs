//! Contract events published for off-chain clients following the session.

use soroban_sdk::{symbol_short, Address, Env, String};

use crate::types::WorkflowStatus;

pub fn initialized(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("init"),), admin.clone());
}

pub fn status_changed(env: &Env, previous: WorkflowStatus, next: WorkflowStatus) {
    env.events()
        .publish((symbol_short!("status"),), (previous, next));
}

pub fn voter_registered(env: &Env, voter: &Address, age: u32) {
    env.events()
        .publish((symbol_short!("register"), voter.clone()), age);
}

pub fn voter_whitelisted(env: &Env, voter: &Address, admin: &Address) {
    env.events()
        .publish((symbol_short!("whitelist"), voter.clone()), admin.clone());
}

pub fn proposal_added(env: &Env, proposal_id: u32, submitter: &Address, description: &String) {
    env.events().publish(
        (symbol_short!("proposal"), proposal_id),
        (submitter.clone(), description.clone()),
    );
}

pub fn vote_cast(env: &Env, voter: &Address, proposal_id: u32, vote_count: u32) {
    env.events()
        .publish((symbol_short!("voted"), voter.clone()), (proposal_id, vote_count));
}

pub fn vote_withdrawn(env: &Env, voter: &Address, proposal_id: u32, vote_count: u32) {
    env.events().publish(
        (symbol_short!("withdrawn"), voter.clone()),
        (proposal_id, vote_count),
    );
}

pub fn votes_tallied(env: &Env, proposal_count: u32) {
    env.events()
        .publish((symbol_short!("tallied"),), proposal_count);
}
