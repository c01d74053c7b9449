use crate::*;
use std::fmt;

/// Host-supplied time value - unix seconds or block height, the host decides
pub type Timestamp = u64;

/// 1-based position of a candidate within its election's ballot
pub type CandidateId = u32;

/// Election identifier
///
/// Assigned sequentially starting at 1. Ids are never reused, and a failed
/// creation never consumes one.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ElectionId(pub u64);

impl fmt::Display for ElectionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled election
///
/// Created once, never updated or deleted. The candidate list is fixed at
/// creation; only the per-candidate counters move, and only through
/// [`Vote::apply`](crate::Vote::apply).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Election {
    pub id: ElectionId,
    pub name: Text32,
    pub description: String,

    /// Private elections reveal detail to their owner only
    pub is_private: bool,

    /// The creating account
    #[serde(with = "AccountIdHex")]
    pub owner: AccountId,

    /// Candidates in ballot order
    pub candidates: Vec<Candidate>,

    pub start_time: Timestamp,
    pub end_time: Timestamp,

    /// Weight applied to every cast vote
    pub vote_weight_unit: u64,
}

impl Election {
    /// Derive the lifecycle status at the given time
    ///
    /// Status is never stored - it is recomputed on every read so the stored
    /// record cannot drift from the true phase.
    pub fn status_at(&self, now: Timestamp) -> ElectionStatus {
        if now < self.start_time {
            ElectionStatus::Pending
        } else if now < self.end_time {
            ElectionStatus::Open
        } else {
            ElectionStatus::Closed
        }
    }

    pub fn is_open_at(&self, now: Timestamp) -> bool {
        self.status_at(now) == ElectionStatus::Open
    }

    /// Get a candidate by its 1-based ballot position
    pub fn candidate(&self, candidate_id: CandidateId) -> Option<&Candidate> {
        if candidate_id == 0 {
            return None;
        }
        self.candidates.get(candidate_id as usize - 1)
    }

    pub(crate) fn candidate_mut(&mut self, candidate_id: CandidateId) -> Option<&mut Candidate> {
        if candidate_id == 0 {
            return None;
        }
        self.candidates.get_mut(candidate_id as usize - 1)
    }
}

/// One selectable option on a ballot
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Candidate {
    pub local_id: CandidateId,
    pub label: Text32,

    /// Accumulated vote weight, mutated only by a successful vote
    pub vote_count: u64,
}

/// Election lifecycle phase, derived from the time window
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ElectionStatus {
    Pending,
    Open,
    Closed,
}

impl fmt::Display for ElectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ElectionStatus::Pending => "pending",
            ElectionStatus::Open => "open",
            ElectionStatus::Closed => "closed",
        };
        write!(f, "{}", name)
    }
}

/// Operation: create a new election
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateElection {
    pub name: Text32,
    pub description: String,
    pub is_private: bool,

    /// Ballot-ordered candidate labels
    pub candidates: Vec<Text32>,

    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub vote_weight_unit: u64,
}

impl CreateElection {
    /// Create a new CreateElection operation
    ///
    /// Description, privacy, and vote weight default to empty, public, and 1.
    pub fn new(
        name: Text32,
        candidates: Vec<Text32>,
        start_time: Timestamp,
        end_time: Timestamp,
    ) -> Self {
        CreateElection {
            name,
            description: String::new(),
            is_private: false,
            candidates,
            start_time,
            end_time,
            vote_weight_unit: 1,
        }
    }

    /// Validate the creation request
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.candidates.is_empty() {
            return Err(ValidationError::EmptyCandidateList);
        }
        if self.start_time >= self.end_time {
            return Err(ValidationError::InvalidSchedule {
                start: self.start_time,
                end: self.end_time,
            });
        }
        if self.vote_weight_unit == 0 {
            return Err(ValidationError::InvalidVoteWeight);
        }

        Ok(())
    }

    /// Validate the request and append the new election
    ///
    /// All-or-nothing: the id counter advances only after the request has
    /// fully validated, and the election lands in the store complete, with
    /// zeroed counters. The caller becomes the owner.
    pub fn apply<S: Store>(
        &self,
        store: &mut S,
        caller: AccountId,
    ) -> Result<ElectionId, ValidationError> {
        self.validate()?;

        let id = store.allocate_election_id();
        let candidates = self
            .candidates
            .iter()
            .enumerate()
            .map(|(index, label)| Candidate {
                local_id: index as CandidateId + 1,
                label: *label,
                vote_count: 0,
            })
            .collect();

        store.insert_election(Election {
            id,
            name: self.name,
            description: self.description.clone(),
            is_private: self.is_private,
            owner: caller,
            candidates,
            start_time: self.start_time,
            end_time: self.end_time,
            vote_weight_unit: self.vote_weight_unit,
        });

        log::debug!("simpleballot: created election {}", id);
        Ok(id)
    }
}
