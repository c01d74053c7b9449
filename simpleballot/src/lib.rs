#[macro_use]
extern crate serde;

mod election;
mod encoding;
mod error;
mod funding;
mod identity;
mod operation;
mod query;
mod serde_hex;
mod store;
mod vote;

pub use election::*;
pub use encoding::*;
pub use error::*;
pub use funding::*;
pub use identity::*;
pub use operation::*;
pub use query::*;
pub use serde_hex::*;
pub use store::*;
pub use vote::*;
