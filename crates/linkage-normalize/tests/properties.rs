//! Property suites for the normalizers.

use linkage_normalize::name::split_tokens;
use linkage_normalize::{AddressNormalizer, DateNormalizer, Normalizer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn address_normalization_is_idempotent(raw in ".{0,80}") {
        let once = AddressNormalizer.normalize(&raw).expect("address is total");
        let twice = AddressNormalizer.normalize(&once).expect("address is total");
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn address_output_has_no_whitespace_runs(raw in ".{0,80}") {
        let out = AddressNormalizer.normalize(&raw).expect("address is total");
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.contains('\n'));
        prop_assert_eq!(out.trim(), &out);
    }

    #[test]
    fn date_normalization_is_idempotent_on_success(
        year in 1922u32..=2021,
        month in 1u32..=12,
        day in 1u32..=31,
    ) {
        let raw = format!("{:02}-{month}-{day}", year % 100);
        let once = DateNormalizer.normalize(&raw).expect("in-range components parse");
        let twice = DateNormalizer.normalize(&once).expect("canonical output parses");
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.len(), 10);
    }

    #[test]
    fn date_never_panics(raw in ".{0,40}") {
        let _ = DateNormalizer.normalize(&raw);
    }

    #[test]
    fn split_token_counts_follow_the_table(tokens in prop::collection::vec("[a-z]{1,8}", 0..6)) {
        let raw = tokens.join("  ");
        let parts = split_tokens(&raw);
        match tokens.len() {
            0 => {
                prop_assert_eq!(parts, linkage_normalize::NameParts::default());
            }
            1 => {
                prop_assert_eq!(parts.first, tokens[0].clone());
                prop_assert_eq!(parts.middle, "");
                prop_assert_eq!(parts.last, "");
            }
            2 => {
                prop_assert_eq!(parts.first, tokens[0].clone());
                prop_assert_eq!(parts.middle, "");
                prop_assert_eq!(parts.last, tokens[1].clone());
            }
            n => {
                prop_assert_eq!(parts.first, tokens[0].clone());
                prop_assert_eq!(parts.middle, tokens[1..n - 1].join(" "));
                prop_assert_eq!(parts.last, tokens[n - 1].clone());
            }
        }
    }
}
