use assert_matches::assert_matches;
use cosmwasm_std::coin;
use cosmwasm_std::testing::mock_dependencies;
use cw_tokenfactory::genesis::{export_genesis, init_genesis};
use cw_tokenfactory::{
    DenomAuthorityMetadata, GenesisDenom, GenesisState, Metadata, Params, TokenFactoryError,
};

use crate::test_env::{MockBank, TestEnv, ALICE, BOB, FEE_DENOM};

#[test]
fn test_genesis_round_trip() {
    let mut env = TestEnv::with_fee(10);
    env.fund(ALICE, coin(100, FEE_DENOM));
    env.fund(BOB, coin(100, FEE_DENOM));
    env.create_denom(ALICE, "zeta").unwrap();
    env.create_denom(ALICE, "alpha").unwrap();
    let bobs = env.create_denom(BOB, "bitcoin").unwrap();
    env.change_admin(BOB, &bobs, ALICE).unwrap();
    env.change_admin(ALICE, "factory/alice/zeta", "").unwrap();

    // Grouped by creator, in creation order within each creator
    let (bank, genesis) = env.snapshot();
    assert_eq!(
        genesis.factory_denoms,
        vec![
            GenesisDenom {
                denom: "factory/bob/bitcoin".to_string(),
                authority_metadata: DenomAuthorityMetadata::new(ALICE),
            },
            GenesisDenom {
                denom: "factory/alice/zeta".to_string(),
                authority_metadata: DenomAuthorityMetadata::new(""),
            },
            GenesisDenom {
                denom: "factory/alice/alpha".to_string(),
                authority_metadata: DenomAuthorityMetadata::new(ALICE),
            },
        ]
    );

    let restored = TestEnv::from_genesis(genesis.clone(), bank.clone());
    assert_eq!(restored.snapshot(), (bank, genesis));
    assert_eq!(
        restored.denoms_from_creator(ALICE, None, None),
        vec!["factory/alice/zeta", "factory/alice/alpha"]
    );
    assert_eq!(restored.admin(&bobs).unwrap(), ALICE);
}

#[test]
fn test_genesis_writes_missing_base_metadata() {
    let env = TestEnv::from_genesis(
        GenesisState {
            params: Params::default(),
            factory_denoms: vec![GenesisDenom {
                denom: "factory/alice/bitcoin".to_string(),
                authority_metadata: DenomAuthorityMetadata::new(ALICE),
            }],
        },
        MockBank::default(),
    );

    assert_eq!(
        env.bank.metadata.get("factory/alice/bitcoin"),
        Some(&Metadata::base_only("factory/alice/bitcoin"))
    );
}

#[test]
fn test_genesis_restored_denoms_keep_working() {
    let mut env = TestEnv::from_genesis(
        GenesisState {
            params: Params::default(),
            factory_denoms: vec![GenesisDenom {
                denom: "factory/alice/bitcoin".to_string(),
                authority_metadata: DenomAuthorityMetadata::new(BOB),
            }],
        },
        MockBank::default(),
    );

    env.mint(BOB, 100, "factory/alice/bitcoin").unwrap();
    assert_eq!(env.balance(BOB, "factory/alice/bitcoin"), 100);

    // The sequence continues after the imported denom
    env.create_denom(ALICE, "litecoin").unwrap();
    assert_eq!(
        env.denoms_from_creator(ALICE, None, None),
        vec!["factory/alice/bitcoin", "factory/alice/litecoin"]
    );
}

#[test]
fn test_genesis_rejects_bad_state() {
    let denom = |denom: &str| GenesisDenom {
        denom: denom.to_string(),
        authority_metadata: DenomAuthorityMetadata::new(ALICE),
    };

    let mut deps = mock_dependencies();
    let err = init_genesis(
        deps.as_mut(),
        &mut MockBank::default(),
        GenesisState {
            params: Params::default(),
            factory_denoms: vec![denom("factory/alice/bitcoin"), denom("factory/alice/bitcoin")],
        },
    )
    .unwrap_err();
    assert_matches!(err, TokenFactoryError::AlreadyExists { .. });

    let mut deps = mock_dependencies();
    let err = init_genesis(
        deps.as_mut(),
        &mut MockBank::default(),
        GenesisState {
            params: Params::default(),
            factory_denoms: vec![denom("ujuno")],
        },
    )
    .unwrap_err();
    assert_matches!(err, TokenFactoryError::InvalidDenom { .. });

    let mut deps = mock_dependencies();
    let err = init_genesis(
        deps.as_mut(),
        &mut MockBank::default(),
        GenesisState {
            params: Params {
                max_subdenom_length: 0,
                ..Default::default()
            },
            factory_denoms: vec![],
        },
    )
    .unwrap_err();
    assert_matches!(err, TokenFactoryError::InvalidParams { .. });
}

#[test]
fn test_empty_genesis_exports_defaults() {
    let mut deps = mock_dependencies();
    init_genesis(deps.as_mut(), &mut MockBank::default(), GenesisState::default()).unwrap();
    assert_eq!(export_genesis(deps.as_ref()).unwrap(), GenesisState::default());
}
