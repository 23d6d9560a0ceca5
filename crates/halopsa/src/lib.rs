//! `halopsa` crate — the Halo PSA connector node.
//!
//! Exposes the Halo PSA REST API as resource + operation choices. The
//! [`catalog`] is a static table of endpoints; [`HaloPsaNode`] turns one
//! catalog entry plus per-item parameters into one HTTP call per item.

pub mod catalog;
pub mod credentials;
pub mod params;
pub mod request;
pub mod node;

pub use catalog::{lookup, Entry, Operation, RequestShape, Resource};
pub use credentials::{HaloPsaCredentials, CREDENTIAL_TYPE};
pub use node::{HaloPsaNode, NODE_TYPE};
pub use params::ItemParameters;
