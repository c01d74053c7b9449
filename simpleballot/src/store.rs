use crate::*;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Shared election state
///
/// The store is an explicit handle passed into every operation - there is no
/// ambient global. Mutating operations ([`CreateElection::apply`] and
/// [`Vote::apply`]) assume the host runs them one at a time to completion;
/// a host that executes operations concurrently must serialize mutations
/// per election itself. Reads never observe partial writes under that
/// ordering and need no exclusion.
pub trait Store {
    /// Get an election
    fn election(&self, id: ElectionId) -> Option<&Election>;

    /// Get an election for counter updates
    fn election_mut(&mut self, id: ElectionId) -> Option<&mut Election>;

    /// All election ids, in ascending (creation) order
    fn election_ids(&self) -> Vec<ElectionId>;

    /// Consume and return the next id in the monotone sequence
    fn allocate_election_id(&mut self) -> ElectionId;

    /// Add a newly created election
    fn insert_election(&mut self, election: Election);

    /// Get the vote record for a voter in an election, if one exists
    fn vote_record(&self, election: ElectionId, voter: &AccountId) -> Option<&VoteRecord>;

    /// Add a vote record
    fn insert_vote_record(&mut self, record: VoteRecord);

    /// Get an election, failing if it does not exist
    fn get_election(&self, id: ElectionId) -> Result<&Election, ValidationError> {
        self.election(id).ok_or(ValidationError::ElectionNotFound(id))
    }

    /// Get an election for counter updates, failing if it does not exist
    fn get_election_mut(&mut self, id: ElectionId) -> Result<&mut Election, ValidationError> {
        self.election_mut(id)
            .ok_or(ValidationError::ElectionNotFound(id))
    }
}

/// A simple store that keeps everything in memory
///
/// Elections live in an insertion-ordered map, so iteration order is id
/// order. Vote records are keyed by `(election, voter)`, which makes the
/// one-record-per-voter invariant a plain map property.
#[derive(Default, Clone)]
pub struct MemStore {
    elections: IndexMap<ElectionId, Election>,
    votes: BTreeMap<(ElectionId, AccountId), VoteRecord>,
    allocated_ids: u64,
}

impl MemStore {
    /// Audit-trail scan: every vote record for an election, in voter order
    pub fn vote_records(&self, election: ElectionId) -> Vec<&VoteRecord> {
        let start = (election, AccountId::from_array([0x00; 32]));
        let end = (election, AccountId::from_array([0xff; 32]));

        self.votes
            .range(start..=end)
            .map(|(_, record)| record)
            .collect()
    }
}

impl Store for MemStore {
    fn election(&self, id: ElectionId) -> Option<&Election> {
        self.elections.get(&id)
    }

    fn election_mut(&mut self, id: ElectionId) -> Option<&mut Election> {
        self.elections.get_mut(&id)
    }

    fn election_ids(&self) -> Vec<ElectionId> {
        self.elections.keys().copied().collect()
    }

    fn allocate_election_id(&mut self) -> ElectionId {
        self.allocated_ids += 1;
        ElectionId(self.allocated_ids)
    }

    fn insert_election(&mut self, election: Election) {
        self.elections.insert(election.id, election);
    }

    fn vote_record(&self, election: ElectionId, voter: &AccountId) -> Option<&VoteRecord> {
        self.votes.get(&(election, *voter))
    }

    fn insert_vote_record(&mut self, record: VoteRecord) {
        self.votes.insert((record.election, record.voter), record);
    }
}
