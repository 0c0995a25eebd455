//! The recursive field comparator.

use crate::field::Comparison;
use crate::policy::EmptyPolicy;
use crate::record::Record;
use crate::reflect::instance_of;

/// Compare two records and build the delta.
///
/// Returns the delta together with whether anything changed. A `None` new
/// side is a no-op: it yields a zero-valued delta and `false`, never a
/// "clear everything" delta.
///
/// Per field, in declaration order:
///
/// 1. A null new-side value is skipped.
/// 2. Comparable values (base side present) are compared atomically. The
///    first such field decides the whole record: unequal returns the full
///    new record, equal returns "unchanged" and the remaining fields are
///    never looked at, including differences already found in earlier
///    fields.
/// 3. Nested records recurse with the same policy; a nested delta is
///    written only if it reports a change.
/// 4. Nullable record references: a null base is compared like a leaf, so
///    the whole new record is written. Otherwise an empty new record over a
///    non-empty base is written as-is (an explicit clear), and anything else
///    recurses.
/// 5. Leaves are skipped if both sides are empty under their policy, and
///    otherwise written when they differ.
pub fn compare_records<T: Record>(base: &T, new: Option<&T>, policy: EmptyPolicy) -> (T, bool) {
    let Some(new) = new else {
        return (instance_of(base), false);
    };
    match T::diff_fields(base, new, policy) {
        Comparison::Changed(delta) => (delta, true),
        _ => (instance_of(base), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{Address, Envelope, Person, Profile, Tagged, Tags};

    fn addr(line1: &str) -> Address {
        Address {
            line1: line1.into(),
            ..Default::default()
        }
    }

    #[test]
    fn null_new_side_is_noop() {
        let base = Person {
            name: Some("Ada".into()),
            ..Default::default()
        };
        let (delta, changed) = compare_records(&base, None, EmptyPolicy::LENIENT);
        assert!(!changed);
        assert_eq!(delta, Person::default());
    }

    #[test]
    fn identical_records_unchanged() {
        let person = Person {
            name: Some("Ada".into()),
            age: Some(36),
            addr: Some(addr("A")),
            home: addr("H"),
        };
        let (_, changed) = compare_records(&person, Some(&person), EmptyPolicy::STRICT);
        assert!(!changed);
    }

    #[test]
    fn only_differing_leaf_is_set() {
        let base = Person {
            name: Some("Ada".into()),
            age: Some(36),
            ..Default::default()
        };
        let new = Person {
            name: Some("Ada".into()),
            age: Some(37),
            ..Default::default()
        };
        let (delta, changed) = compare_records(&base, Some(&new), EmptyPolicy::STRICT);
        assert!(changed);
        assert_eq!(
            delta,
            Person {
                age: Some(37),
                ..Default::default()
            }
        );
    }

    #[test]
    fn null_field_on_new_side_never_appears() {
        let base = Person {
            name: Some("Ada".into()),
            age: Some(36),
            ..Default::default()
        };
        let new = Person {
            name: None,
            age: Some(40),
            ..Default::default()
        };
        let (delta, changed) = compare_records(&base, Some(&new), EmptyPolicy::LENIENT);
        assert!(changed);
        assert_eq!(delta.name, None);
        assert_eq!(delta.age, Some(40));
    }

    #[test]
    fn explicit_zero_clears_leaf() {
        let base = Person {
            name: Some("Ada".into()),
            ..Default::default()
        };
        let new = Person {
            name: Some(String::new()),
            ..Default::default()
        };
        let (delta, changed) = compare_records(&base, Some(&new), EmptyPolicy::STRICT);
        assert!(changed);
        assert_eq!(delta.name, Some(String::new()));
    }

    #[test]
    fn nested_record_carries_only_changed_subfield() {
        let base = Person {
            home: Address {
                line1: "1 Main St".into(),
                line2: Some("Apt 1".into()),
                city: Some("Springfield".into()),
            },
            ..Default::default()
        };
        let mut new = base.clone();
        new.home.city = Some("Shelbyville".into());

        let (delta, changed) = compare_records(&base, Some(&new), EmptyPolicy::STRICT);
        assert!(changed);
        assert_eq!(
            delta.home,
            Address {
                city: Some("Shelbyville".into()),
                ..Default::default()
            }
        );
        assert_eq!(delta.addr, None);
    }

    #[test]
    fn nested_reference_carries_only_changed_subfield() {
        let base = Person {
            addr: Some(Address {
                line1: "1 Main St".into(),
                line2: Some("Apt 1".into()),
                city: Some("Springfield".into()),
            }),
            ..Default::default()
        };
        let mut new = base.clone();
        new.addr.as_mut().unwrap().line1 = "2 Main St".into();

        let (delta, changed) = compare_records(&base, Some(&new), EmptyPolicy::STRICT);
        assert!(changed);
        assert_eq!(delta.addr, Some(addr("2 Main St")));
    }

    #[test]
    fn unchanged_nested_reference_is_not_written() {
        let base = Person {
            addr: Some(addr("A")),
            age: Some(1),
            ..Default::default()
        };
        let new = Person {
            addr: Some(addr("A")),
            age: Some(2),
            ..Default::default()
        };
        let (delta, _) = compare_records(&base, Some(&new), EmptyPolicy::STRICT);
        assert_eq!(delta.addr, None);
    }

    #[test]
    fn empty_reference_clears_under_new_policy() {
        let base = Person {
            addr: Some(addr("A")),
            ..Default::default()
        };
        let new = Person {
            addr: Some(Address::default()),
            ..Default::default()
        };
        let (delta, changed) =
            compare_records(&base, Some(&new), EmptyPolicy::new(false, true));
        assert!(changed);
        assert_eq!(delta.addr, Some(Address::default()));
    }

    #[test]
    fn zero_on_both_sides_is_elided() {
        let base = Person {
            name: None,
            ..Default::default()
        };
        let new = Person {
            name: Some(String::new()),
            ..Default::default()
        };
        let (_, changed) = compare_records(&base, Some(&new), EmptyPolicy::new(true, true));
        assert!(!changed);
    }

    #[test]
    fn unequal_comparable_returns_full_new_record() {
        let base = Profile {
            nickname: Some("old".into()),
            tags: Some(Tags(vec!["a".into()])),
            bio: Some("same".into()),
        };
        let new = Profile {
            nickname: Some("new".into()),
            tags: Some(Tags(vec!["b".into()])),
            bio: Some("same".into()),
        };
        let (delta, changed) = compare_records(&base, Some(&new), EmptyPolicy::STRICT);
        assert!(changed);
        assert_eq!(delta, new);
    }

    #[test]
    fn equal_comparable_discards_sibling_differences() {
        let base = Profile {
            nickname: Some("old".into()),
            tags: Some(Tags(vec!["a".into(), "b".into()])),
            bio: Some("old bio".into()),
        };
        let new = Profile {
            nickname: Some("new".into()),
            tags: Some(Tags(vec!["b".into(), "a".into()])),
            bio: Some("new bio".into()),
        };
        let (delta, changed) = compare_records(&base, Some(&new), EmptyPolicy::STRICT);
        assert!(!changed);
        assert_eq!(delta, Profile::default());
    }

    #[test]
    fn comparable_with_null_base_merges_like_a_leaf() {
        let base = Profile {
            nickname: Some("old".into()),
            tags: None,
            bio: None,
        };
        let new = Profile {
            nickname: Some("new".into()),
            tags: Some(Tags(vec!["a".into()])),
            bio: None,
        };
        let (delta, changed) = compare_records(&base, Some(&new), EmptyPolicy::STRICT);
        assert!(changed);
        assert_eq!(
            delta,
            Profile {
                nickname: Some("new".into()),
                tags: Some(Tags(vec!["a".into()])),
                bio: None,
            }
        );
    }

    #[test]
    fn null_base_reference_takes_whole_new_record() {
        let base = Envelope::default();
        let new = Envelope {
            inner: Some(Tagged {
                tags: Tags::default(),
                note: Some("hello".into()),
            }),
            addr: None,
        };
        let (delta, changed) = compare_records(&base, Some(&new), EmptyPolicy::STRICT);
        assert!(changed);
        assert_eq!(delta.inner, new.inner);
    }

    #[test]
    fn null_base_reference_keeps_explicit_empty_subfields() {
        let base = Envelope::default();
        let new = Envelope {
            inner: None,
            addr: Some(Address {
                line1: "A".into(),
                line2: Some(String::new()),
                city: None,
            }),
        };
        let (delta, changed) = compare_records(&base, Some(&new), EmptyPolicy::LENIENT);
        assert!(changed);
        assert_eq!(delta.addr, new.addr);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let base = Person {
            name: Some("Ada".into()),
            ..Default::default()
        };
        let new = Person {
            name: Some("Grace".into()),
            ..Default::default()
        };
        let (base_before, new_before) = (base.clone(), new.clone());
        let _ = compare_records(&base, Some(&new), EmptyPolicy::STRICT);
        assert_eq!(base, base_before);
        assert_eq!(new, new_before);
    }
}
