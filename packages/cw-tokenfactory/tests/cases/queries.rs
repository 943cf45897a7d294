use assert_matches::assert_matches;
use cw_tokenfactory::msg::{DenomsFromCreatorResponse, FullDenomResponse, ParamsResponse, QueryMsg};
use cw_tokenfactory::{Params, TokenFactoryError};

use crate::test_env::{TestEnv, ALICE, BOB};

#[test]
fn test_query_params() {
    let env = TestEnv::with_fee(1_000);

    let res: ParamsResponse = env.query(QueryMsg::Params {}).unwrap();
    assert_eq!(res.params.denom_creation_fee.len(), 1);
    assert_eq!(res.params.max_subdenom_length, 44);
}

#[test]
fn test_query_full_denom() {
    let env = TestEnv::default();

    let res: FullDenomResponse = env
        .query(QueryMsg::FullDenom {
            creator: ALICE.to_string(),
            subdenom: "bitcoin".to_string(),
        })
        .unwrap();
    assert_eq!(res.denom, "factory/alice/bitcoin");

    let err = env
        .query::<FullDenomResponse>(QueryMsg::FullDenom {
            creator: ALICE.to_string(),
            subdenom: "bit/coin".to_string(),
        })
        .unwrap_err();
    assert_matches!(err, TokenFactoryError::InvalidSubdenom { .. });

    let err = env
        .query::<FullDenomResponse>(QueryMsg::FullDenom {
            creator: "al!ce".to_string(),
            subdenom: "bitcoin".to_string(),
        })
        .unwrap_err();
    assert_matches!(
        err,
        TokenFactoryError::InvalidCreator { creator, .. } if creator == "al!ce"
    );
}

#[test]
fn test_query_authority_metadata_not_found() {
    let env = TestEnv::default();

    let err = env.admin("factory/alice/bitcoin").unwrap_err();
    assert_eq!(
        err,
        TokenFactoryError::NotFound {
            denom: "factory/alice/bitcoin".to_string()
        }
    );
}

#[test]
fn test_denoms_from_creator_in_creation_order() {
    let mut env = TestEnv::default();
    // Created out of lexicographic order on purpose
    for subdenom in ["zeta", "alpha", "mu", "beta"] {
        env.create_denom(ALICE, subdenom).unwrap();
    }
    env.create_denom(BOB, "alpha").unwrap();

    assert_eq!(
        env.denoms_from_creator(ALICE, None, None),
        vec![
            "factory/alice/zeta",
            "factory/alice/alpha",
            "factory/alice/mu",
            "factory/alice/beta",
        ]
    );
    assert_eq!(
        env.denoms_from_creator(BOB, None, None),
        vec!["factory/bob/alpha"]
    );
}

#[test]
fn test_denoms_from_creator_pagination() {
    let mut env = TestEnv::default();
    for subdenom in ["zeta", "alpha", "mu", "beta"] {
        env.create_denom(ALICE, subdenom).unwrap();
    }

    let first = env.denoms_from_creator(ALICE, None, Some(2));
    assert_eq!(first, vec!["factory/alice/zeta", "factory/alice/alpha"]);

    let second = env.denoms_from_creator(ALICE, Some(&first[1]), Some(2));
    assert_eq!(second, vec!["factory/alice/mu", "factory/alice/beta"]);

    let third = env.denoms_from_creator(ALICE, Some(&second[1]), Some(2));
    assert!(third.is_empty());
}

#[test]
fn test_denoms_from_creator_limits() {
    let mut env = TestEnv::default();
    for i in 0..35 {
        env.create_denom(ALICE, &format!("coin{i}")).unwrap();
    }

    assert_eq!(env.denoms_from_creator(ALICE, None, None).len(), 10);
    assert_eq!(env.denoms_from_creator(ALICE, None, Some(100)).len(), 30);
}

#[test]
fn test_denoms_from_creator_foreign_start_after() {
    let mut env = TestEnv::default();
    env.create_denom(ALICE, "bitcoin").unwrap();
    let bobs = env.create_denom(BOB, "bitcoin").unwrap();

    let err = env
        .query::<DenomsFromCreatorResponse>(QueryMsg::DenomsFromCreator {
            creator: ALICE.to_string(),
            start_after: Some(bobs),
            limit: None,
        })
        .unwrap_err();
    assert_matches!(err, TokenFactoryError::Std(_));
}

#[test]
fn test_denoms_from_unknown_creator() {
    let env = TestEnv::new(Params::default());
    assert!(env.denoms_from_creator(BOB, None, None).is_empty());
}
