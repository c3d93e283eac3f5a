#![no_std]
//! # Voting Session Contract
//!
//! An administrator whitelists voters, opens and closes a proposal
//! registration phase, runs a vote and tallies it. Whitelisted voters submit
//! proposals, cast one standing vote each and may withdraw it until the tally.
//!
//! Every phase transition moves exactly one step along [`WorkflowStatus`];
//! each proposal's `vote_count` always equals the number of voters whose
//! standing vote points at it.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod constants;
mod contract;
mod errors;
mod events;
mod storage;
mod tally;
mod types;

use contract::VotingSession;

pub use constants::MAX_DESCRIPTION_LENGTH;
pub use errors::VotingError;
pub use types::{Proposal, Voter, WorkflowStatus};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the session with its administrator.
    /// Can only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        VotingSession::initialize(env, admin)
    }

    // ── Workflow ─────────────────────────────────────────────────────────────

    pub fn start_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        VotingSession::advance(env, caller, WorkflowStatus::RegisteringVoters).map(|_| ())
    }

    pub fn end_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        VotingSession::advance(env, caller, WorkflowStatus::ProposalsRegistrationStarted)
            .map(|_| ())
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        VotingSession::advance(env, caller, WorkflowStatus::ProposalsRegistrationEnded).map(|_| ())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        VotingSession::advance(env, caller, WorkflowStatus::VotingSessionStarted).map(|_| ())
    }

    /// Fix the result of the vote. After this the winner can be queried and
    /// votes can no longer be withdrawn.
    pub fn tally_votes(env: Env, caller: Address) -> Result<(), VotingError> {
        VotingSession::advance(env, caller, WorkflowStatus::VotingSessionEnded).map(|_| ())
    }

    // ── Voter registry ───────────────────────────────────────────────────────

    /// Create the caller's voter record, or update its declared age.
    /// Allowed in every phase; does not grant voting rights.
    pub fn register_self(env: Env, caller: Address, age: u32) -> Result<(), VotingError> {
        VotingSession::register_self(env, caller, age)
    }

    /// Grant `voter` the right to propose and vote. Re-whitelisting is a no-op.
    pub fn whitelist(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        VotingSession::whitelist(env, caller, voter)
    }

    // ── Proposals and votes ──────────────────────────────────────────────────

    /// Register a proposal and return its id.
    ///
    /// # Arguments
    /// * `caller`      – Whitelisted voter submitting the proposal
    /// * `description` – Free-form text, 1 to `MAX_DESCRIPTION_LENGTH` bytes
    pub fn add_proposal(env: Env, caller: Address, description: String) -> Result<u32, VotingError> {
        VotingSession::add_proposal(env, caller, description)
    }

    pub fn vote_proposal(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        VotingSession::vote_proposal(env, caller, proposal_id)
    }

    /// Withdraw the caller's standing vote. Allowed while voting is open and
    /// after it ends, until the votes are tallied.
    pub fn vote_withdraw(env: Env, caller: Address) -> Result<(), VotingError> {
        VotingSession::vote_withdraw(env, caller)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Proposal with the most votes; ties go to the earliest submitted one.
    pub fn get_winner(env: Env) -> Result<Proposal, VotingError> {
        VotingSession::get_winner(env)
    }

    pub fn get_voter(env: Env, voter: Address) -> Result<Voter, VotingError> {
        VotingSession::get_voter(env, voter)
    }

    /// All proposals in id order.
    pub fn get_proposals(env: Env) -> Result<Vec<Proposal>, VotingError> {
        VotingSession::get_proposals(env)
    }

    pub fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, VotingError> {
        VotingSession::get_proposal(env, proposal_id)
    }

    pub fn get_vote_count(env: Env, proposal_id: u32) -> Result<u32, VotingError> {
        VotingSession::get_vote_count(env, proposal_id)
    }

    pub fn get_session_state(env: Env) -> Result<WorkflowStatus, VotingError> {
        VotingSession::get_session_state(env)
    }

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        VotingSession::get_admin(env)
    }

    pub fn proposal_count(env: Env) -> Result<u32, VotingError> {
        VotingSession::proposal_count(env)
    }
}
