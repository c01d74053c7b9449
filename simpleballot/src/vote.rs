use crate::*;

/// Operation: cast a vote
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Vote {
    pub election: ElectionId,

    /// 1-based ballot position of the chosen candidate
    pub candidate: CandidateId,

    /// Weight requested by the caller
    ///
    /// Accepted for wire compatibility with weighted-delegation callers.
    /// Flat-weight elections ignore it: the election's `vote_weight_unit`
    /// is always the weight applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
}

impl Vote {
    /// Create a new Vote operation
    pub fn new(election: ElectionId, candidate: CandidateId) -> Self {
        Vote {
            election,
            candidate,
            weight: None,
        }
    }

    /// Check the vote against current state without mutating anything
    ///
    /// Preconditions run in a fixed order - missing election, closed window,
    /// bad candidate, replay - so a failing call always reports the first
    /// broken one.
    pub fn validate<S: Store>(
        &self,
        store: &S,
        caller: &AccountId,
        now: Timestamp,
    ) -> Result<(), ValidationError> {
        let election = store.get_election(self.election)?;

        let status = election.status_at(now);
        if status != ElectionStatus::Open {
            return Err(ValidationError::ElectionNotOpen(self.election, status));
        }

        if election.candidate(self.candidate).is_none() {
            return Err(ValidationError::InvalidCandidate(
                self.election,
                self.candidate,
            ));
        }

        if store.vote_record(self.election, caller).is_some() {
            return Err(ValidationError::AlreadyVoted(self.election));
        }

        Ok(())
    }

    /// Validate, count, and record the vote
    ///
    /// The counter increment and the vote record land in the same apply
    /// step: once this returns the record exists and the tally includes it,
    /// and a replay of the same caller fails on the record.
    pub fn apply<S: Store>(
        &self,
        store: &mut S,
        caller: AccountId,
        now: Timestamp,
    ) -> Result<VoteReceipt, ValidationError> {
        self.validate(store, &caller, now)?;

        let election = store.get_election_mut(self.election)?;
        let weight = election.vote_weight_unit;
        let candidate = election.candidate_mut(self.candidate).ok_or(
            ValidationError::InvalidCandidate(self.election, self.candidate),
        )?;
        candidate.vote_count += weight;

        store.insert_vote_record(VoteRecord {
            election: self.election,
            voter: caller,
            candidate: self.candidate,
            weight,
        });

        log::debug!(
            "simpleballot: vote for candidate {} in election {}",
            self.candidate,
            self.election
        );
        Ok(VoteReceipt {
            election: self.election,
            candidate: self.candidate,
            weight_applied: weight,
        })
    }
}

/// Durable proof that an identity voted in an election
///
/// At most one record exists per `(election, voter)` pair. Records are never
/// mutated or deleted - they are the audit trail behind the candidate
/// counters.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VoteRecord {
    pub election: ElectionId,

    #[serde(with = "AccountIdHex")]
    pub voter: AccountId,

    pub candidate: CandidateId,
    pub weight: u64,
}

/// Returned to the caller on a successful vote
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VoteReceipt {
    pub election: ElectionId,
    pub candidate: CandidateId,
    pub weight_applied: u64,
}

#[cfg(test)]
mod tests {

    use super::*;

    fn open_election(store: &mut MemStore, owner: AccountId) -> ElectionId {
        let op = CreateElection::new(
            Text32::encode("general").unwrap(),
            vec![
                Text32::encode("a").unwrap(),
                Text32::encode("b").unwrap(),
            ],
            100,
            200,
        );
        op.apply(store, owner).unwrap()
    }

    #[test]
    fn precondition_order() {
        let mut store = MemStore::default();
        let owner = AccountId::random();
        let voter = AccountId::random();
        let id = open_election(&mut store, owner);

        // Missing election outranks everything else
        let vote = Vote::new(ElectionId(9), 99);
        assert_eq!(
            vote.validate(&store, &voter, 150),
            Err(ValidationError::ElectionNotFound(ElectionId(9)))
        );

        // A closed window outranks a bad candidate
        let vote = Vote::new(id, 99);
        assert_eq!(
            vote.validate(&store, &voter, 250),
            Err(ValidationError::ElectionNotOpen(id, ElectionStatus::Closed))
        );

        // A bad candidate outranks a replay
        Vote::new(id, 1).apply(&mut store, voter, 150).unwrap();
        let vote = Vote::new(id, 99);
        assert_eq!(
            vote.validate(&store, &voter, 150),
            Err(ValidationError::InvalidCandidate(id, 99))
        );

        let vote = Vote::new(id, 1);
        assert_eq!(
            vote.validate(&store, &voter, 150),
            Err(ValidationError::AlreadyVoted(id))
        );
    }

    #[test]
    fn window_boundaries() {
        let mut store = MemStore::default();
        let owner = AccountId::random();
        let id = open_election(&mut store, owner);

        let before = Vote::new(id, 1).apply(&mut store, AccountId::random(), 99);
        assert_eq!(
            before,
            Err(ValidationError::ElectionNotOpen(id, ElectionStatus::Pending))
        );

        // The start is in the window, the end is not
        assert!(Vote::new(id, 1)
            .apply(&mut store, AccountId::random(), 100)
            .is_ok());
        assert!(Vote::new(id, 1)
            .apply(&mut store, AccountId::random(), 199)
            .is_ok());

        let at_end = Vote::new(id, 1).apply(&mut store, AccountId::random(), 200);
        assert_eq!(
            at_end,
            Err(ValidationError::ElectionNotOpen(id, ElectionStatus::Closed))
        );
    }

    #[test]
    fn candidate_zero_is_out_of_range() {
        let mut store = MemStore::default();
        let id = open_election(&mut store, AccountId::random());

        let vote = Vote::new(id, 0);
        assert_eq!(
            vote.apply(&mut store, AccountId::random(), 150),
            Err(ValidationError::InvalidCandidate(id, 0))
        );
    }

    #[test]
    fn replay_leaves_the_tally_unchanged() {
        let mut store = MemStore::default();
        let voter = AccountId::random();
        let id = open_election(&mut store, AccountId::random());

        let receipt = Vote::new(id, 1).apply(&mut store, voter, 150).unwrap();
        assert_eq!(
            receipt,
            VoteReceipt {
                election: id,
                candidate: 1,
                weight_applied: 1
            }
        );

        // Same voter, different candidate - still a replay
        let replay = Vote::new(id, 2).apply(&mut store, voter, 150);
        assert_eq!(replay, Err(ValidationError::AlreadyVoted(id)));

        assert_eq!(get_tally(&store, id).unwrap(), vec![(1, 1), (2, 0)]);
    }

    #[test]
    fn caller_weight_is_ignored() {
        let mut store = MemStore::default();
        let owner = AccountId::random();

        let mut op = CreateElection::new(
            Text32::encode("weighted").unwrap(),
            vec![Text32::encode("a").unwrap()],
            100,
            200,
        );
        op.vote_weight_unit = 5;
        let id = op.apply(&mut store, owner).unwrap();

        let mut vote = Vote::new(id, 1);
        vote.weight = Some(1000);
        let receipt = vote.apply(&mut store, AccountId::random(), 150).unwrap();

        assert_eq!(receipt.weight_applied, 5);
        assert_eq!(get_tally(&store, id).unwrap(), vec![(1, 5)]);
    }

    #[test]
    fn counters_match_the_audit_trail() {
        let mut store = MemStore::default();
        let owner = AccountId::random();

        let mut op = CreateElection::new(
            Text32::encode("audited").unwrap(),
            vec![
                Text32::encode("a").unwrap(),
                Text32::encode("b").unwrap(),
            ],
            100,
            200,
        );
        op.vote_weight_unit = 3;
        let id = op.apply(&mut store, owner).unwrap();

        for _ in 0..4 {
            Vote::new(id, 1)
                .apply(&mut store, AccountId::random(), 150)
                .unwrap();
        }
        Vote::new(id, 2)
            .apply(&mut store, AccountId::random(), 150)
            .unwrap();

        let records = store.vote_records(id);
        assert_eq!(records.len(), 5);

        for candidate in &store.get_election(id).unwrap().candidates {
            let recorded: u64 = records
                .iter()
                .filter(|r| r.candidate == candidate.local_id)
                .map(|r| r.weight)
                .sum();
            assert_eq!(candidate.vote_count, recorded);
        }
        assert_eq!(get_tally(&store, id).unwrap(), vec![(1, 12), (2, 3)]);
    }
}
