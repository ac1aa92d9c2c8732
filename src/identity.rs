multiversx_sc::imports!();

use crate::errors::ERR_ALREADY_REGISTERED;
use crate::types::{Voter, VoterStatus, WorkflowStatus};

#[multiversx_sc::module]
pub trait IdentityModule: crate::guards::GuardsModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: registerVoter
    // Administrator enrolls voters while registration is open.
    // ========================================================

    #[endpoint(registerVoter)]
    fn register_voter(&self, voter: ManagedAddress) {
        self.require_administrator();
        self.require_status(WorkflowStatus::Registration);
        require!(self.voters(&voter).is_empty(), ERR_ALREADY_REGISTERED);

        self.voters(&voter).set(Voter::registered());
        self.registered_voters().insert(voter.clone());

        self.voter_registered_event(&voter);
    }

    fn is_registered_voter(&self, address: &ManagedAddress) -> bool {
        !self.voters(address).is_empty()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getAdministrator)]
    fn get_administrator(&self) -> ManagedAddress {
        self.administrator().get()
    }

    #[view(getVoterStatus)]
    fn get_voter_status(&self, address: ManagedAddress) -> VoterStatus {
        let voter_mapper = self.voters(&address);
        let has_voted = !voter_mapper.is_empty() && voter_mapper.get().has_voted;
        VoterStatus {
            is_administrator: self.is_administrator(&address),
            is_registered: !voter_mapper.is_empty(),
            has_voted,
        }
    }

    /// Full voter record; empty for addresses that were never registered.
    #[view(getVoter)]
    fn get_voter(&self, address: ManagedAddress) -> OptionalValue<Voter> {
        let voter_mapper = self.voters(&address);
        if voter_mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(voter_mapper.get())
    }

    #[view(getVoterCount)]
    fn get_voter_count(&self) -> u64 {
        self.registered_voters().len() as u64
    }

    #[view(getVoters)]
    fn get_voters(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.registered_voters().len() as u64;
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for (idx, voter) in self.registered_voters().iter().enumerate() {
            let idx = idx as u64;
            if idx >= end {
                break;
            }
            if idx >= from {
                result.push(voter);
            }
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("voters")]
    fn voters(&self, address: &ManagedAddress) -> SingleValueMapper<Voter>;

    #[storage_mapper("registeredVoters")]
    fn registered_voters(&self) -> UnorderedSetMapper<ManagedAddress>;
}
