// We define in our crate:
use crate::AccountId;
use std::borrow::Cow;
use std::convert::TryInto;

pub use hex_buffer_serde::Hex;

// a single-purpose type for use in `#[serde(with)]`
pub enum AccountIdHex {}

impl Hex<AccountId> for AccountIdHex {
    type Error = String;

    fn create_bytes(account: &AccountId) -> Cow<[u8]> {
        account.to_array().to_vec().into()
    }

    fn from_bytes(bytes: &[u8]) -> Result<AccountId, String> {
        let token: [u8; 32] = bytes
            .try_into()
            .map_err(|_| format!("wrong account id length: {}", bytes.len()))?;
        Ok(AccountId::from_array(token))
    }
}
