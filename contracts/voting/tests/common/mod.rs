#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use voting_contract::{VotingContract, VotingContractClient};

pub struct TestEnvironment {
    pub env: Env,
    pub admin: Address,
    pub contract_id: Address,
    pub client: VotingContractClient<'static>,
    pub voters: std::vec::Vec<Address>,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        let admin = Address::generate(&env);

        let contract_id = env.register(VotingContract, ());
        let client = VotingContractClient::new(&env, &contract_id);
        client.initialize(&admin);

        Self {
            env,
            admin,
            contract_id,
            client,
            voters: std::vec::Vec::new(),
        }
    }

    /// Registers and whitelists `count` new voters.
    pub fn with_voters(&mut self, count: usize) -> &mut Self {
        for i in 0..count {
            let voter = Address::generate(&self.env);
            self.client.register_self(&voter, &(18 + i as u32));
            self.client.whitelist(&self.admin, &voter);
            self.voters.push(voter);
        }
        self
    }

    /// Opens proposal registration and submits one proposal per description,
    /// round-robin over the whitelisted voters.
    pub fn with_proposals(&mut self, descriptions: &[&str]) -> &mut Self {
        self.client.start_proposals_registration(&self.admin);
        for (i, description) in descriptions.iter().enumerate() {
            let submitter = &self.voters[i % self.voters.len()];
            self.client
                .add_proposal(submitter, &String::from_str(&self.env, description));
        }
        self.client.end_proposals_registration(&self.admin);
        self
    }

    pub fn open_voting(&mut self) -> &mut Self {
        self.client.start_voting_session(&self.admin);
        self
    }

    pub fn close_and_tally(&mut self) -> &mut Self {
        self.client.end_voting_session(&self.admin);
        self.client.tally_votes(&self.admin);
        self
    }

    pub fn voter(&self, index: usize) -> &Address {
        &self.voters[index]
    }

    pub fn create_user(&self) -> Address {
        Address::generate(&self.env)
    }

    /// Recomputes every proposal's count from the voter records.
    pub fn assert_counts_consistent(&self) {
        for proposal in self.client.get_proposals().iter() {
            let standing = self
                .voters
                .iter()
                .map(|address| self.client.get_voter(address))
                .filter(|voter| voter.has_voted && voter.voted_proposal_id == proposal.id)
                .count() as u32;
            assert_eq!(proposal.vote_count, standing, "proposal {}", proposal.id);
        }
    }
}
