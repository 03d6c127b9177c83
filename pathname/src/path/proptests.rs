//! Property-based tests for the `Pathname` facade.
//!
//! The algebra module carries its own properties over raw strings. This
//! module checks the facade-level laws: round-trips, join override and the
//! lineage iterators.

use super::{algebra, Pathname};
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,12}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(component_strategy(), 0..8),
        "/{0,2}",
    )
        .prop_map(|(absolute, parts, tail)| {
            let body = parts.join("/");
            let lead = if absolute { "/" } else { "" };
            format!("{lead}{body}{tail}")
        })
}

fn relative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-]{1,12}", 1..5).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Construction keeps the text verbatim
    #[test]
    fn pathname_round_trips(text in "[^\\x00]{0,40}") {
        let path = Pathname::new(&text).unwrap();
        prop_assert_eq!(path.as_str(), text.as_str());
    }

    // An absolute segment discards everything to its left
    #[test]
    fn join_absolute_override(base in path_strategy(), abs in relative_strategy()) {
        let abs = format!("/{abs}");
        let base = Pathname::new(&base).unwrap();
        prop_assert_eq!(base.join([abs.as_str()]).unwrap(), Pathname::new(&abs).unwrap());
    }

    // Joining relative segments one at a time or all at once agrees
    #[test]
    fn join_all_matches_nested(
        base in path_strategy(),
        b in relative_strategy(),
        c in relative_strategy(),
    ) {
        let base = Pathname::new(&base).unwrap();
        let all = base.join([b.as_str(), c.as_str()]).unwrap();
        let nested = base.join([b.as_str()]).unwrap().join([c.as_str()]).unwrap();
        prop_assert_eq!(all, nested);
    }

    // Every ascend item is a prefix of the original text
    #[test]
    fn ascend_items_are_prefixes(text in path_strategy()) {
        let path = Pathname::new(&text).unwrap();
        for ancestor in path.ascend() {
            prop_assert!(text.starts_with(ancestor.as_str()));
        }
    }

    // Descend is exactly ascend reversed
    #[test]
    fn descend_reverses_ascend(text in path_strategy()) {
        let path = Pathname::new(&text).unwrap();
        let mut up: Vec<Pathname> = path.ascend().collect();
        up.reverse();
        prop_assert_eq!(path.descend().collect::<Vec<_>>(), up);
    }

    // Mixing absolute and relative paths is rejected
    #[test]
    fn relative_path_from_rejects_mixed(a in relative_strategy(), b in relative_strategy()) {
        let abs = Pathname::new(&format!("/{a}")).unwrap();
        let rel = Pathname::new(&b).unwrap();
        prop_assert!(abs.relative_path_from(&rel).unwrap_err().is_argument());
        prop_assert!(rel.relative_path_from(&abs).unwrap_err().is_argument());
    }

    // relative_path_from followed by join lands back on the target
    #[test]
    fn relative_path_round_trip(target in path_strategy(), base in path_strategy()) {
        let target = Pathname::new(&target).unwrap();
        let base = Pathname::new(&base).unwrap();
        if let Ok(rel) = target.relative_path_from(&base) {
            let back = base.join([&rel]).unwrap();
            prop_assert_eq!(back.cleanpath(), target.cleanpath());
        }
    }

    // Ordering is a total order consistent with equality
    #[test]
    fn ordering_consistent_with_eq(a in path_strategy(), b in path_strategy()) {
        let pa = Pathname::new(&a).unwrap();
        let pb = Pathname::new(&b).unwrap();
        prop_assert_eq!(pa.cmp(&pb).is_eq(), pa == pb);
        prop_assert_eq!(pa.cmp(&pb), algebra::compare(&a, &b));
    }
}
