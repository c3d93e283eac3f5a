//! Error codes returned by the voting contract
//!
//! Codes are part of the contract interface: clients match on the `u32`
//! value, so existing variants must keep their numbers.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    // ===== Lifecycle (1-2) =====
    /// Contract used before `initialize`
    NotInitialized = 1,

    /// `initialize` called on an already initialized contract
    AlreadyInitialized = 2,

    // ===== Access control (3-4) =====
    /// Caller is not the session administrator
    NotAdministrator = 3,

    /// Caller is not on the voter whitelist
    NotWhitelisted = 4,

    // ===== Workflow (5-7) =====
    /// Operation is not allowed in the current workflow phase
    PhaseError = 5,

    /// Caller already holds a standing vote
    AlreadyVoted = 6,

    /// Caller has no standing vote to withdraw
    NoStandingVote = 7,

    // ===== Lookups (8-11) =====
    /// Proposal id is out of range
    UnknownProposal = 8,

    /// No voter record exists for the address
    UnknownVoter = 9,

    /// Winner requested while no proposal was ever registered
    NoProposals = 10,

    /// Proposal description is empty or too long
    InvalidDescription = 11,
}

impl VotingError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &str {
        match self {
            VotingError::NotInitialized => "Contract not initialized",
            VotingError::AlreadyInitialized => "Contract already initialized",
            VotingError::NotAdministrator => "Caller is not the administrator",
            VotingError::NotWhitelisted => "Caller is not whitelisted",
            VotingError::PhaseError => "Operation not allowed in current phase",
            VotingError::AlreadyVoted => "Caller already voted",
            VotingError::NoStandingVote => "Caller has no vote to withdraw",
            VotingError::UnknownProposal => "Proposal not found",
            VotingError::UnknownVoter => "Voter not found",
            VotingError::NoProposals => "No proposals registered",
            VotingError::InvalidDescription => "Invalid proposal description",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VotingError;

    #[test]
    fn test_every_error_has_a_message() {
        let cases = [
            (VotingError::NotInitialized, "Contract not initialized"),
            (VotingError::AlreadyInitialized, "Contract already initialized"),
            (VotingError::NotAdministrator, "Caller is not the administrator"),
            (VotingError::NotWhitelisted, "Caller is not whitelisted"),
            (VotingError::PhaseError, "Operation not allowed in current phase"),
            (VotingError::AlreadyVoted, "Caller already voted"),
            (VotingError::NoStandingVote, "Caller has no vote to withdraw"),
            (VotingError::UnknownProposal, "Proposal not found"),
            (VotingError::UnknownVoter, "Voter not found"),
            (VotingError::NoProposals, "No proposals registered"),
            (VotingError::InvalidDescription, "Invalid proposal description"),
        ];

        for (error, message) in cases {
            assert_eq!(error.message(), message);
        }
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(VotingError::NotInitialized as u32, 1);
        assert_eq!(VotingError::PhaseError as u32, 5);
        assert_eq!(VotingError::InvalidDescription as u32, 11);
    }
}
