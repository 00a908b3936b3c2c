/// Property-based tests for rank, handicap, komi and timestamp rules
use proptest::prelude::*;

use crate::domain::rules::{format_played_at, parse_played_at, Handicap, Komi, Rank};
use crate::domain::test_gens;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A rank is accepted exactly when it is a kyu or dan grade.
    #[test]
    fn prop_rank_rule(r in -100i32..100) {
        let expected = (-30..=-1).contains(&r) || (1..=9).contains(&r);
        prop_assert_eq!(Rank::try_from(r).is_ok(), expected);
    }

    #[test]
    fn prop_valid_rank_round_trips(r in test_gens::valid_rank()) {
        prop_assert_eq!(Rank::try_from(r).map(Rank::get), Ok(r));
    }

    #[test]
    fn prop_handicap_matches_table(h in -20i32..20) {
        prop_assert_eq!(Handicap::try_from(h).is_ok(), Handicap::ALLOWED.contains(&h));
    }

    #[test]
    fn prop_komi_matches_table(k in -20i32..20) {
        prop_assert_eq!(Komi::try_from(k).is_ok(), Komi::ALLOWED.contains(&k));
    }

    /// Formatting then parsing recovers the same instant and offset.
    #[test]
    fn prop_played_at_format_is_invertible(at in test_gens::played_at()) {
        let wire = format_played_at(at).unwrap();
        let back = parse_played_at(&wire).unwrap();
        prop_assert_eq!(back, at);
        prop_assert_eq!(back.offset(), at.offset());
    }
}
