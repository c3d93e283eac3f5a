use soroban_sdk::Vec;

use crate::types::Proposal;

/// Pick the proposal with the most votes.
///
/// Proposals are expected in id order. A later proposal only replaces the
/// current leader with a strictly greater count, so among tied proposals the
/// lowest id wins. Returns `None` for an empty list.
pub fn select_winner(proposals: &Vec<Proposal>) -> Option<Proposal> {
    let mut winner: Option<Proposal> = None;
    for proposal in proposals.iter() {
        let leads = match &winner {
            Some(current) => proposal.vote_count > current.vote_count,
            None => true,
        };
        if leads {
            winner = Some(proposal);
        }
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, vec, Address, Env, String};

    fn proposal(env: &Env, id: u32, vote_count: u32) -> Proposal {
        Proposal {
            id,
            description: String::from_str(env, "proposal"),
            submitter: Address::generate(env),
            vote_count,
        }
    }

    #[test]
    fn test_empty_list_has_no_winner() {
        let env = Env::default();
        let proposals: Vec<Proposal> = Vec::new(&env);
        assert_eq!(select_winner(&proposals), None);
    }

    #[test]
    fn test_highest_count_wins() {
        let env = Env::default();
        let proposals = vec![
            &env,
            proposal(&env, 0, 1),
            proposal(&env, 1, 4),
            proposal(&env, 2, 3),
        ];
        assert_eq!(select_winner(&proposals).map(|p| p.id), Some(1));
    }

    #[test]
    fn test_tie_goes_to_lowest_id() {
        let env = Env::default();
        let proposals = vec![
            &env,
            proposal(&env, 0, 2),
            proposal(&env, 1, 2),
            proposal(&env, 2, 1),
        ];
        assert_eq!(select_winner(&proposals).map(|p| p.id), Some(0));
    }

    #[test]
    fn test_all_zero_votes_picks_first_proposal() {
        let env = Env::default();
        let proposals = vec![&env, proposal(&env, 0, 0), proposal(&env, 1, 0)];
        assert_eq!(select_winner(&proposals).map(|p| p.id), Some(0));
    }

    #[test]
    fn test_later_tie_does_not_displace_leader() {
        let env = Env::default();
        let proposals = vec![
            &env,
            proposal(&env, 0, 1),
            proposal(&env, 1, 5),
            proposal(&env, 2, 5),
        ];
        assert_eq!(select_winner(&proposals).map(|p| p.id), Some(1));
    }
}
