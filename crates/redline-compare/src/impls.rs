//! [`Structural`] impls for standard leaf and container types.

use std::collections::{BTreeMap, BTreeSet};

use redline_types::{Comparison, LeafValue, Step, Visitor};
use serde::Serialize;

use crate::engine::Structural;

macro_rules! structural_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Structural for $ty {
                fn walk(&self, other: &Self, visitor: &mut dyn Visitor) {
                    visitor.report(Comparison::of(self, other));
                }
            }
        )*
    };
}

structural_leaf!(String, bool, char, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

fn side<T: Serialize>(value: Option<&T>) -> LeafValue {
    value.map_or_else(LeafValue::absent, |v| LeafValue::encode(v))
}

/// Two present payloads are walked under an indirect step tagged with the
/// payload type, so fields below it keep their owner.
impl<T: Structural> Structural for Option<T> {
    fn walk(&self, other: &Self, visitor: &mut dyn Visitor) {
        match (self, other) {
            (Some(from), Some(to)) => {
                visitor.push_step(Step::indirect(T::type_tag()));
                from.walk(to, visitor);
                visitor.pop_step();
            }
            _ => visitor.report(Comparison::of(self, other)),
        }
    }
}

impl<T: Structural> Structural for Vec<T> {
    fn walk(&self, other: &Self, visitor: &mut dyn Visitor) {
        for index in 0..self.len().max(other.len()) {
            visitor.push_step(Step::index(index, T::type_tag()));
            match (self.get(index), other.get(index)) {
                (Some(from), Some(to)) => from.walk(to, visitor),
                (from, to) => visitor.report(Comparison::one_sided(side(from), side(to))),
            }
            visitor.pop_step();
        }
    }
}

impl<T: Structural> Structural for BTreeMap<String, T> {
    fn walk(&self, other: &Self, visitor: &mut dyn Visitor) {
        let keys: BTreeSet<&String> = self.keys().chain(other.keys()).collect();
        for key in keys {
            visitor.push_step(Step::key(key.as_str(), T::type_tag()));
            match (self.get(key), other.get(key)) {
                (Some(from), Some(to)) => from.walk(to, visitor),
                (from, to) => visitor.report(Comparison::one_sided(side(from), side(to))),
            }
            visitor.pop_step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{compare, equal};
    use proptest::prelude::*;
    use redline_diff::DiffReporter;
    use redline_types::Tagged;
    use serde_json::json;

    fn diff<T: Structural>(from: &T, to: &T) -> serde_json::Value {
        let mut reporter = DiffReporter::unredacted();
        compare(from, to, &mut reporter);
        serde_json::from_str(&reporter.serialize()).unwrap()
    }

    #[test]
    fn leaves_compare_by_value() {
        assert!(equal(&true, &true));
        assert!(!equal(&1.5f64, &2.5f64));
        assert!(!equal(&'a', &'b'));
    }

    #[test]
    fn vec_reports_per_index() {
        let from = vec!["a".to_string(), "b".to_string()];
        let to = vec!["a".to_string(), "c".to_string()];
        assert_eq!(diff(&from, &to), json!({"[1]": {"From:": "b", "To:": "c"}}));
    }

    #[test]
    fn vec_extra_elements_against_absent() {
        let from = vec![1u8];
        let to = vec![1u8, 2, 3];
        assert_eq!(
            diff(&from, &to),
            json!({
                "[1]": {"From:": null, "To:": 2},
                "[2]": {"From:": null, "To:": 3}
            })
        );
    }

    #[test]
    fn map_reports_per_key() {
        let from: BTreeMap<String, i32> = [("a".into(), 1), ("b".into(), 2)].into();
        let to: BTreeMap<String, i32> = [("b".into(), 3), ("c".into(), 4)].into();
        assert_eq!(
            diff(&from, &to),
            json!({
                "[a]": {"From:": 1, "To:": null},
                "[b]": {"From:": 2, "To:": 3},
                "[c]": {"From:": null, "To:": 4}
            })
        );
    }

    #[test]
    fn dotted_map_keys_stay_one_segment() {
        let from: BTreeMap<String, i32> = [("a.b".into(), 1), ("a".into(), 1)].into();
        let to: BTreeMap<String, i32> = [("a.b".into(), 2), ("a".into(), 1)].into();
        assert_eq!(
            diff(&from, &to),
            json!({"[a%2Eb]": {"From:": 1, "To:": 2}})
        );
    }

    #[test]
    fn option_descends_when_both_present() {
        assert!(equal(&Some(3u16), &Some(3u16)));
        assert_eq!(
            diff(&Some("x".to_string()), &Some("y".to_string())),
            json!({"": {"From:": "x", "To:": "y"}})
        );
        assert_eq!(
            diff(&Some(1i64), &None),
            json!({"": {"From:": 1, "To:": null}})
        );
    }

    #[test]
    fn nested_containers() {
        let from = vec![vec![1u32, 2], vec![3]];
        let to = vec![vec![1u32, 5], vec![3]];
        assert_eq!(
            diff(&from, &to),
            json!({"[0]": {"[1]": {"From:": 2, "To:": 5}}})
        );
    }

    #[test]
    fn step_tags_follow_element_type() {
        struct Tags(Vec<String>);
        impl Visitor for Tags {
            fn push_step(&mut self, step: Step) {
                self.0.push(step.type_tag().to_string());
            }
            fn report(&mut self, _comparison: Comparison) {}
            fn pop_step(&mut self) {}
        }

        let mut tags = Tags(Vec::new());
        compare(&vec![vec![true]], &vec![vec![false]], &mut tags);
        assert_eq!(tags.0, vec!["[][]bool", "[]bool", "bool"]);
        assert_eq!(<Vec<Vec<bool>> as Tagged>::type_tag().as_str(), "[][]bool");

        let mut tags = Tags(Vec::new());
        compare(&Some(vec![1u8]), &Some(vec![2u8]), &mut tags);
        assert_eq!(tags.0, vec!["*[]u8", "[]u8", "u8"]);
    }

    proptest! {
        #[test]
        fn vec_equality_matches_partial_eq(
            from in proptest::collection::vec(any::<u8>(), 0..8),
            to in proptest::collection::vec(any::<u8>(), 0..8)
        ) {
            prop_assert_eq!(equal(&from, &to), from == to);
        }

        #[test]
        fn map_equality_matches_partial_eq(
            from in proptest::collection::btree_map("[a-c.]{1,3}", any::<i32>(), 0..6),
            to in proptest::collection::btree_map("[a-c.]{1,3}", any::<i32>(), 0..6)
        ) {
            prop_assert_eq!(equal(&from, &to), from == to);
        }

        #[test]
        fn reporter_is_balanced_and_empty_iff_equal(
            from in proptest::collection::vec(proptest::option::of(any::<i16>()), 0..6),
            to in proptest::collection::vec(proptest::option::of(any::<i16>()), 0..6)
        ) {
            let mut reporter = DiffReporter::unredacted();
            let same = compare(&from, &to, &mut reporter);
            prop_assert_eq!(reporter.depth(), 0);
            prop_assert_eq!(same, from == to);
            prop_assert_eq!(reporter.is_empty(), same);
        }
    }
}
