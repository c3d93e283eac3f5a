use soroban_sdk::{log, Address, Env, String, Vec};

use crate::constants::MAX_DESCRIPTION_LENGTH;
use crate::errors::VotingError;
use crate::events;
use crate::storage;
use crate::tally;
use crate::types::{Proposal, Voter, WorkflowStatus};

pub struct VotingSession;

impl VotingSession {
    // -------------------------------
    // Initialization
    // -------------------------------
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        if storage::has_admin(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        storage::set_proposal_count(&env, 0);
        storage::extend_instance_ttl(&env);

        events::initialized(&env, &admin);
        Ok(())
    }

    // -------------------------------
    // Phase transitions
    // -------------------------------

    /// Moves the session one phase forward, from `expected` to its successor.
    pub fn advance(
        env: Env,
        caller: Address,
        expected: WorkflowStatus,
    ) -> Result<WorkflowStatus, VotingError> {
        let current = current_status(&env)?;
        require_admin(&env, &caller)?;
        require_status(&env, current, expected)?;

        let next = current.next().ok_or(VotingError::PhaseError)?;
        storage::set_status(&env, next);
        storage::extend_instance_ttl(&env);

        events::status_changed(&env, current, next);
        if next == WorkflowStatus::VotesTallied {
            events::votes_tallied(&env, storage::get_proposal_count(&env));
        }
        Ok(next)
    }

    // -------------------------------
    // Voter registry
    // -------------------------------
    pub fn register_self(env: Env, caller: Address, age: u32) -> Result<(), VotingError> {
        current_status(&env)?;
        caller.require_auth();

        let mut voter = storage::get_voter(&env, &caller).unwrap_or_default();
        voter.age = age;
        storage::save_voter(&env, &caller, &voter);

        events::voter_registered(&env, &caller, age);
        Ok(())
    }

    pub fn whitelist(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        current_status(&env)?;
        let admin = require_admin(&env, &caller)?;

        let mut record = storage::get_voter(&env, &voter).unwrap_or_default();
        if record.is_whitelisted {
            return Ok(());
        }
        record.is_whitelisted = true;
        storage::save_voter(&env, &voter, &record);

        events::voter_whitelisted(&env, &voter, &admin);
        Ok(())
    }

    // -------------------------------
    // Proposals
    // -------------------------------
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        let status = current_status(&env)?;
        caller.require_auth();
        require_status(&env, status, WorkflowStatus::ProposalsRegistrationStarted)?;
        require_whitelisted(&env, &caller)?;

        if description.len() == 0 || description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(VotingError::InvalidDescription);
        }

        let id = storage::get_proposal_count(&env);
        let proposal = Proposal {
            id,
            description,
            submitter: caller,
            vote_count: 0,
        };

        storage::save_proposal(&env, &proposal);
        storage::set_proposal_count(&env, id + 1);
        storage::extend_instance_ttl(&env);

        events::proposal_added(&env, id, &proposal.submitter, &proposal.description);
        Ok(id)
    }

    // -------------------------------
    // Voting
    // -------------------------------
    pub fn vote_proposal(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        let status = current_status(&env)?;
        caller.require_auth();
        require_status(&env, status, WorkflowStatus::VotingSessionStarted)?;
        let mut voter = require_whitelisted(&env, &caller)?;

        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::UnknownProposal)?;
        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        proposal.vote_count += 1;
        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;

        storage::save_proposal(&env, &proposal);
        storage::save_voter(&env, &caller, &voter);

        events::vote_cast(&env, &caller, proposal_id, proposal.vote_count);
        Ok(())
    }

    pub fn vote_withdraw(env: Env, caller: Address) -> Result<(), VotingError> {
        let status = current_status(&env)?;
        caller.require_auth();
        if !status.allows_withdrawal() {
            log!(&env, "withdrawal rejected in phase", status as u32);
            return Err(VotingError::PhaseError);
        }
        let mut voter = require_whitelisted(&env, &caller)?;

        if !voter.has_voted {
            return Err(VotingError::NoStandingVote);
        }
        let proposal_id = voter.voted_proposal_id;
        // A standing vote always references a stored proposal.
        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::UnknownProposal)?;

        proposal.vote_count -= 1;
        voter.has_voted = false;
        voter.voted_proposal_id = 0;

        storage::save_proposal(&env, &proposal);
        storage::save_voter(&env, &caller, &voter);

        events::vote_withdrawn(&env, &caller, proposal_id, proposal.vote_count);
        Ok(())
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------
    pub fn get_winner(env: Env) -> Result<Proposal, VotingError> {
        let status = current_status(&env)?;
        require_status(&env, status, WorkflowStatus::VotesTallied)?;

        tally::select_winner(&Self::get_proposals(env)?).ok_or(VotingError::NoProposals)
    }

    pub fn get_voter(env: Env, voter: Address) -> Result<Voter, VotingError> {
        current_status(&env)?;
        storage::get_voter(&env, &voter).ok_or(VotingError::UnknownVoter)
    }

    pub fn get_proposals(env: Env) -> Result<Vec<Proposal>, VotingError> {
        current_status(&env)?;
        let mut proposals = Vec::new(&env);
        for id in 0..storage::get_proposal_count(&env) {
            let proposal = storage::get_proposal(&env, id).ok_or(VotingError::UnknownProposal)?;
            proposals.push_back(proposal);
        }
        Ok(proposals)
    }

    pub fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, VotingError> {
        current_status(&env)?;
        storage::get_proposal(&env, proposal_id).ok_or(VotingError::UnknownProposal)
    }

    pub fn get_vote_count(env: Env, proposal_id: u32) -> Result<u32, VotingError> {
        Ok(Self::get_proposal(env, proposal_id)?.vote_count)
    }

    pub fn get_session_state(env: Env) -> Result<WorkflowStatus, VotingError> {
        current_status(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        storage::get_admin(&env).ok_or(VotingError::NotInitialized)
    }

    pub fn proposal_count(env: Env) -> Result<u32, VotingError> {
        current_status(&env)?;
        Ok(storage::get_proposal_count(&env))
    }
}

fn current_status(env: &Env) -> Result<WorkflowStatus, VotingError> {
    storage::get_status(env).ok_or(VotingError::NotInitialized)
}

/// Authenticates `caller` and checks it is the stored administrator.
fn require_admin(env: &Env, caller: &Address) -> Result<Address, VotingError> {
    caller.require_auth();
    let admin = storage::get_admin(env).ok_or(VotingError::NotInitialized)?;
    if *caller != admin {
        log!(env, "caller is not the administrator", caller.clone());
        return Err(VotingError::NotAdministrator);
    }
    Ok(admin)
}

fn require_status(
    env: &Env,
    current: WorkflowStatus,
    expected: WorkflowStatus,
) -> Result<(), VotingError> {
    if current != expected {
        log!(env, "phase mismatch", current as u32, expected as u32);
        return Err(VotingError::PhaseError);
    }
    Ok(())
}

/// Returns the caller's record if it is on the whitelist.
fn require_whitelisted(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    match storage::get_voter(env, caller) {
        Some(voter) if voter.is_whitelisted => Ok(voter),
        _ => {
            log!(env, "caller is not whitelisted", caller.clone());
            Err(VotingError::NotWhitelisted)
        }
    }
}
