use crate::Error;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::convert::TryInto;
use std::fmt;
use std::str::FromStr;

/// Fixed-width binary text
///
/// Names and candidate labels travel as a single 32-byte cell: UTF-8 bytes,
/// right-padded with zeroes. Encoding rejects text that would not survive the
/// round-trip - anything over 32 bytes, and anything containing a NUL byte
/// (the padding marker).
///
/// The wire form is the 32 bytes as lowercase hexidecimal.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Text32([u8; 32]);

impl Text32 {
    /// Width of the cell in bytes
    pub const LEN: usize = 32;

    /// Encode text into a cell
    pub fn encode(text: &str) -> Result<Self, Error> {
        let bytes = text.as_bytes();
        if bytes.len() > Self::LEN {
            return Err(Error::TextTooLong(bytes.len()));
        }
        if bytes.contains(&0) {
            return Err(Error::TextInteriorNul);
        }

        let mut cell = [0; 32];
        cell[..bytes.len()].copy_from_slice(bytes);
        Ok(Text32(cell))
    }

    /// Decode back to the original text, stripping the zero padding
    pub fn decode(&self) -> Result<String, Error> {
        let len = self.0.iter().position(|&b| b == 0).unwrap_or(Self::LEN);
        let text = std::str::from_utf8(&self.0[..len]).map_err(|_| Error::TextInvalidUtf8)?;
        Ok(text.to_owned())
    }

    pub fn from_array(bytes: [u8; 32]) -> Self {
        Text32(bytes)
    }

    pub fn to_array(&self) -> [u8; 32] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Text32 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| Error::TextBadHex)?;

        if bytes.len() != Self::LEN {
            return Err(Error::TextBadLen);
        }

        // This unwrap is OK - we know the length is valid
        let cell: [u8; 32] = bytes.as_slice().try_into().unwrap();
        Ok(Text32(cell))
    }
}

impl fmt::Display for Text32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for Text32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Text32({})", self)
    }
}

impl<'de> Deserialize<'de> for Text32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        std::str::FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for Text32 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
