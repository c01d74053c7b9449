use crate::*;

// Read-only projections over the registry and ledgers. Nothing here mutates
// the store, and status is derived from `now` on every call.

/// Full election detail
///
/// Private elections are visible to their owner only.
pub fn get_election<'a, S: Store>(
    store: &'a S,
    caller: &AccountId,
    id: ElectionId,
) -> Result<&'a Election, ValidationError> {
    let election = store.get_election(id)?;

    if election.is_private && election.owner != *caller {
        return Err(ValidationError::Unauthorized(id));
    }

    Ok(election)
}

/// Ids of elections open at `now`, in ascending id order
///
/// Private elections are listed only for their owner.
pub fn get_current_elections<S: Store>(
    store: &S,
    caller: &AccountId,
    now: Timestamp,
) -> Vec<ElectionId> {
    let mut current = Vec::new();

    for id in store.election_ids() {
        let election = match store.election(id) {
            Some(election) => election,
            None => continue,
        };
        if !election.is_open_at(now) {
            continue;
        }
        if election.is_private && election.owner != *caller {
            continue;
        }
        current.push(id);
    }

    current
}

/// Candidates in ballot order
pub fn get_candidates_for_election<'a, S: Store>(
    store: &'a S,
    id: ElectionId,
) -> Result<&'a [Candidate], ValidationError> {
    Ok(&store.get_election(id)?.candidates)
}

/// Current counts in ballot order, readable at any status
///
/// Counts come straight off the candidate counters - the vote ledger is the
/// audit trail, not the tally path.
pub fn get_tally<S: Store>(
    store: &S,
    id: ElectionId,
) -> Result<Vec<(CandidateId, u64)>, ValidationError> {
    let election = store.get_election(id)?;

    Ok(election
        .candidates
        .iter()
        .map(|candidate| (candidate.local_id, candidate.vote_count))
        .collect())
}
