use soroban_sdk::{contracttype, Address, String};

/// Workflow phases of a voting session, in the only order they may occur.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// The phase that directly follows this one, `None` once votes are tallied.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }

    /// Standing votes may still be withdrawn until the result is fixed by the tally.
    pub fn allows_withdrawal(self) -> bool {
        matches!(
            self,
            WorkflowStatus::VotingSessionStarted | WorkflowStatus::VotingSessionEnded
        )
    }
}

/// Participant record, keyed by address
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    /// Age declared at self-registration
    pub age: u32,
    pub is_whitelisted: bool,
    pub has_voted: bool,
    /// Only meaningful while `has_voted` is set
    pub voted_proposal_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Sequential id, 0-based, in submission order
    pub id: u32,
    pub description: String,
    pub submitter: Address,
    /// Number of standing votes credited to this proposal
    pub vote_count: u32,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Status,
    ProposalCount,
    Proposal(u32),
    Voter(Address),
}
