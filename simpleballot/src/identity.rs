use crate::Error;
use digest::Digest;
use rand::Rng;
use std::convert::TryInto;
use std::fmt;
use std::str::FromStr;

/// Opaque caller identity
///
/// The host environment authenticates callers and hands the core an
/// unforgeable 32-byte token; the core only ever compares tokens. No
/// signature scheme is assumed here.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId([u8; 32]);

impl AccountId {
    pub const LEN: usize = 32;

    pub fn from_array(bytes: [u8; 32]) -> Self {
        AccountId(bytes)
    }

    /// Fold an arbitrary-length host identity into a fixed-width token
    pub fn derive(host_identity: &[u8]) -> Self {
        // This unwrap is OK - the digest is always long enough
        let token: [u8; 32] = sha2::Sha512::digest(host_identity)[0..Self::LEN]
            .try_into()
            .unwrap();
        AccountId(token)
    }

    /// A fresh random identity, for tests and local tooling
    pub fn random() -> Self {
        let mut csprng = rand::rngs::OsRng {};
        let token: [u8; 32] = csprng.gen();
        AccountId(token)
    }

    pub fn to_array(&self) -> [u8; 32] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| Error::AccountIdBadHex)?;

        if bytes.len() != Self::LEN {
            return Err(Error::AccountIdBadLen);
        }

        // This unwrap is OK - we know the length is valid
        let token: [u8; 32] = bytes.as_slice().try_into().unwrap();
        Ok(AccountId(token))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AccountId({})", self)
    }
}
