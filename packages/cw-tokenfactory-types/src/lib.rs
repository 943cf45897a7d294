#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Native denom grammar
pub mod denom;
/// Bank denom metadata
pub mod metadata;
/// Command, query and sudo messages with their responses
pub mod msg;
/// Registry configuration
pub mod params;

pub use metadata::{DenomUnit, Metadata};
pub use params::{MetadataRules, Params};

use cosmwasm_schema::cw_serde;

/// Namespace every denom created by the registry lives under.
pub const DENOM_NAMESPACE: &str = "factory";

/// The admin recorded for a factory denom. An empty admin means nobody may
/// mint, burn, force transfer or change the admin again.
#[cw_serde]
pub struct DenomAuthorityMetadata {
    pub admin: String,
}

impl DenomAuthorityMetadata {
    pub fn new(admin: impl Into<String>) -> Self {
        Self {
            admin: admin.into(),
        }
    }

    /// True once the admin has been relinquished.
    pub fn is_relinquished(&self) -> bool {
        self.admin.is_empty()
    }
}

/// A factory denom together with its authority, as exported at genesis.
#[cw_serde]
pub struct GenesisDenom {
    pub denom: String,
    pub authority_metadata: DenomAuthorityMetadata,
}

/// Full registry state.
#[cw_serde]
#[derive(Default)]
pub struct GenesisState {
    pub params: Params,
    pub factory_denoms: Vec<GenesisDenom>,
}
