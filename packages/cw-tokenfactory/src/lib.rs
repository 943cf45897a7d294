#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Store operations over factory denoms and their admins
pub mod authority;
/// Collaborator traits for the balance ledger and the metadata store
pub mod bank;
/// Dispatch of execute, query and sudo messages
pub mod contract;
/// Denom grammar and the `FactoryDenom` value type
pub mod denom;
/// Private error module, TokenFactoryError is re-exported in the public interface
mod error;
/// Operations that can be executed and alter state
pub mod execute;
/// Genesis import and export
pub mod genesis;
/// Permission and precondition checks
pub mod helpers;
/// Display metadata validation and construction
pub mod metadata;
/// Registry queries
pub mod queries;
/// The registry state
pub mod state;

pub use crate::bank::{BankKeeper, LedgerError, MetadataKeeper};
pub use crate::denom::FactoryDenom;
pub use crate::error::TokenFactoryError;

// so that consumers don't need a direct dependency on the types package.
pub use cw_tokenfactory_types::{
    msg, DenomAuthorityMetadata, DenomUnit, GenesisDenom, GenesisState, Metadata,
    MetadataRules, Params,
};
