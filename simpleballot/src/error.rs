use crate::*;

use thiserror::Error;

/// Error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("simpleballot: text too long: {0} bytes")]
    TextTooLong(usize),

    #[error("simpleballot: text contains a NUL byte")]
    TextInteriorNul,

    #[error("simpleballot: invalid text - not valid utf-8")]
    TextInvalidUtf8,

    #[error("simpleballot: invalid text - invalid hexidecimal")]
    TextBadHex,

    #[error("simpleballot: invalid text - wrong length")]
    TextBadLen,

    #[error("simpleballot: invalid account id - invalid hexidecimal")]
    AccountIdBadHex,

    #[error("simpleballot: invalid account id - wrong length")]
    AccountIdBadLen,

    #[error("simpleballot: CBOR error deserializing operation: {0}")]
    CBORDeserialization(#[from] serde_cbor::Error),

    #[error("simpleballot: JSON error deserializing operation: {0}")]
    JSONDeserialization(#[from] serde_json::Error),

    #[error("simpleballot: error deserializing operation: unknown format")]
    DeserializationUnknownFormat,

    #[error("simpleballot: funding request declined by custodian")]
    FundingDeclined,
}

/// Operation validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("simpleballot validation: election {0} not found")]
    ElectionNotFound(ElectionId),

    #[error("simpleballot validation: election {0} is private")]
    Unauthorized(ElectionId),

    #[error("simpleballot validation: start time {start} is not before end time {end}")]
    InvalidSchedule { start: Timestamp, end: Timestamp },

    #[error("simpleballot validation: election has no candidates")]
    EmptyCandidateList,

    #[error("simpleballot validation: vote weight unit must be greater than zero")]
    InvalidVoteWeight,

    #[error("simpleballot validation: election {0} is {1}, not open")]
    ElectionNotOpen(ElectionId, ElectionStatus),

    #[error("simpleballot validation: candidate {1} does not exist in election {0}")]
    InvalidCandidate(ElectionId, CandidateId),

    #[error("simpleballot validation: already voted in election {0}")]
    AlreadyVoted(ElectionId),
}
