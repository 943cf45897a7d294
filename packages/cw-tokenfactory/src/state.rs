use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use cw_tokenfactory_types::{DenomAuthorityMetadata, Params};

/// Registry configuration, injected into every operation.
pub const PARAMS: Item<Params> = Item::new("params");

/// Every denom created through the registry, keyed by full denom.
pub const DENOMS: Map<&str, FactoryDenomInfo> = Map::new("denoms");

/// Denoms per creator in creation order: (creator, sequence) -> full denom.
pub const CREATOR_DENOMS: Map<(&Addr, u64), String> = Map::new("creator_denoms");

/// Number of denoms each creator has registered. Also the next sequence.
pub const CREATOR_DENOM_COUNT: Map<&Addr, u64> = Map::new("creator_denom_count");

/// What the registry remembers about a factory denom.
#[cw_serde]
pub struct FactoryDenomInfo {
    pub creator: Addr,
    pub authority_metadata: DenomAuthorityMetadata,
    /// Position of this denom in the creator's namespace.
    pub sequence: u64,
}
