use crate::*;
use content_inspector::ContentType;
use num_enum::TryFromPrimitive;

/// A state-mutating operation
///
/// Operations arrive through the host's transaction layer, which
/// authenticates the caller, stamps the current time, and runs each
/// operation to completion before the next one begins. Either an operation
/// applies in full or it fails and the store is untouched - there is no
/// partial state to roll back.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    CreateElection(CreateElection),
    Vote(Vote),
}

impl Operation {
    /// Get the operation type
    pub fn operation_type(&self) -> OperationType {
        match self {
            Operation::CreateElection(_) => OperationType::CreateElection,
            Operation::Vote(_) => OperationType::Vote,
        }
    }

    /// Unpack from bytes, accepting JSON or CBOR
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match content_inspector::inspect(&bytes) {
            ContentType::UTF_8 => Ok(serde_json::from_slice(&bytes)?),
            ContentType::BINARY => Ok(serde_cbor::from_slice(&bytes)?),
            _ => Err(Error::DeserializationUnknownFormat),
        }
    }

    /// Pack into bytes
    pub fn as_bytes(&self) -> Vec<u8> {
        serde_cbor::to_vec(self).expect("simpleballot: Unexpected error packing operation")
    }

    /// Check the operation against current state without mutating it
    pub fn validate<S: Store>(
        &self,
        store: &S,
        caller: &AccountId,
        now: Timestamp,
    ) -> Result<(), ValidationError> {
        match self {
            Operation::CreateElection(op) => op.validate(),
            Operation::Vote(op) => op.validate(store, caller, now),
        }
    }

    /// Execute the operation against the store
    pub fn apply<S: Store>(
        &self,
        store: &mut S,
        caller: AccountId,
        now: Timestamp,
    ) -> Result<OperationReceipt, ValidationError> {
        let receipt = match self {
            Operation::CreateElection(op) => {
                OperationReceipt::ElectionCreated {
                    election: op.apply(store, caller)?,
                }
            }
            Operation::Vote(op) => OperationReceipt::VoteCast(op.apply(store, caller, now)?),
        };

        log::debug!(
            "simpleballot: applied {} operation from {}",
            self.operation_type(),
            caller
        );
        Ok(receipt)
    }
}

/// An operation type
#[derive(Serialize, Deserialize, TryFromPrimitive, Copy, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum OperationType {
    CreateElection = 1,
    Vote = 2,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            OperationType::CreateElection => "create_election",
            OperationType::Vote => "vote",
        };
        write!(f, "{}", name)
    }
}

/// What an applied operation produced
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum OperationReceipt {
    ElectionCreated { election: ElectionId },
    VoteCast(VoteReceipt),
}
