//! Laws every sequence and view must satisfy, plus the reference scenarios.

use bumpalo::Bump;
use pretty_assertions::assert_eq;
use sequin_core::{Array, Ranged, Rest, Reversed, Sequence, Text};

// =============================================================================
// Helpers
// =============================================================================

fn samples() -> Vec<Array<i64>> {
    vec![
        Array::new(),
        Array::from([1]),
        Array::from([1, 2]),
        Array::from([1, 2, 3, 4, 5]),
        Array::from([3, 3, 3]),
    ]
}

/// Checks the size/defines/get laws for any sequence.
fn assert_well_formed<S: Sequence>(seq: &S) {
    assert_eq!(seq.size(), seq.last_index().map_or(0, |last| last + 1));
    for i in 0..seq.size() {
        assert!(seq.defines(i), "index {i} should be defined");
        assert!(seq.get(i).is_some(), "index {i} should have an element");
    }
    assert!(!seq.defines(seq.size()));
    assert!(seq.get(seq.size()).is_none());
    assert_eq!(seq.iter().count(), seq.size());
}

// =============================================================================
// Laws
// =============================================================================

#[test]
fn size_matches_last_index_for_sequences_and_views() {
    for arr in samples() {
        assert_well_formed(&arr);
        assert_well_formed(&arr.keys());
        assert_well_formed(&arr.rest());
        assert_well_formed(&arr.reversed());
        assert_well_formed(&Rest::new(&arr, 3));
        assert_well_formed(&arr.reversed().rest());
    }
}

#[test]
fn reversing_twice_restores_elements() {
    for arr in samples() {
        let rev = arr.reversed();
        let back = rev.reversed();
        assert_eq!(back.size(), arr.size());
        for i in 0..arr.size() {
            assert_eq!(back.get(i), arr.get(i));
        }
        assert_eq!(back, arr);
    }
}

#[test]
fn rest_drops_exactly_one() {
    for arr in samples() {
        let rest = arr.rest();
        assert_eq!(rest.size(), arr.size().saturating_sub(1));
        for i in 0..rest.size() {
            assert_eq!(rest.get(i), arr.get(i + 1));
        }
    }
}

#[test]
fn equal_sequences_hash_equal() {
    for arr in samples() {
        let copy: Array<i64> = arr.iter().collect();
        assert_eq!(arr, copy);
        assert_eq!(arr.hash_code(), copy.hash_code());

        // A view equal to a concrete sequence hashes like it.
        let reversed_copy: Array<i64> = arr.reversed().iter().collect();
        assert_eq!(arr.reversed(), reversed_copy);
        assert_eq!(arr.reversed().hash_code(), reversed_copy.hash_code());
    }
}

#[test]
fn trim_identity_and_total() {
    for arr in samples() {
        assert_eq!(arr.trim(|_| false), arr);
        assert!(arr.trim(|_| true).as_slice().is_empty());
    }
}

#[test]
fn empty_sub_is_included_at_every_index() {
    let empty = Array::<i64>::new();
    for arr in samples() {
        for i in 0..=arr.size() {
            assert!(arr.includes_at(i, &empty));
        }
    }
}

#[test]
fn text_is_never_equal_to_chars() {
    let text = Text::from("seq");
    let chars: Array<char> = text.iter().collect();
    assert!(text != chars);
    assert!(chars != text);
    assert_eq!(text.reversed().reversed(), chars);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn scenario_views_of_one_to_five() {
    let l = Array::from([1, 2, 3, 4, 5]);
    assert_eq!(l.reversed(), [5, 4, 3, 2, 1]);
    assert_eq!(l.rest(), [2, 3, 4, 5]);
    assert_eq!(l.keys(), [0usize, 1, 2, 3, 4]);
}

#[test]
fn scenario_trim_below_three() {
    let l = Array::from([1, 2, 5, 6, 2]);
    assert_eq!(l.trim(|&x| x < 3), [5, 6]);
}

#[test]
fn scenario_inclusion() {
    let l = Array::from([1, 2, 3, 4, 5]);
    assert!(l.includes_at(1, &[2, 3, 4]));
    assert_eq!(l.first_inclusion(&[9]), None);
}

#[test]
fn scenario_equality_with_nulls() {
    let a = Array::from([Some(1), Some(2), None, Some(4)]);
    let b = Array::from([Some(1), Some(2), None, Some(4)]);
    let c = Array::from([Some(1), Some(2), Some(0), Some(4)]);
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
    assert!(a != c);
}

#[test]
fn scenario_bounded_slices() {
    let l = Array::from([7, 8, 9]);
    assert_eq!(l.initial(10), [7, 8, 9]);
    assert!(l.terminal(0).as_slice().is_empty());
}

// =============================================================================
// Other producers
// =============================================================================

#[test]
fn slices_and_vectors_are_sequences() {
    let v = vec![1, 2, 3];
    let s: &[i32] = &v;
    assert_eq!(Sequence::last(&v), Some(3));
    assert_eq!(Sequence::size(s), 3);
    assert_eq!(Ranged::span(s, 2, 0), [3, 2, 1]);
    assert_eq!(Sequence::reversed(s), [3, 2, 1]);
}

#[test]
fn arena_vectors_are_sequences() {
    let arena = Bump::new();
    let mut v = bumpalo::collections::Vec::new_in(&arena);
    v.extend([4, 5, 6]);
    assert_eq!(Sequence::rest(&v), [5, 6]);
    assert_eq!(Ranged::segment(&v, 1, 1), [5]);
}

#[test]
fn views_compose() {
    let arr = Array::from([1, 2, 3, 4, 5]);
    let rev = arr.reversed();
    let view = Reversed::new(Rest::new(&rev, 1));
    // rev = [5, 4, 3, 2, 1], rest = [4, 3, 2, 1]
    assert_eq!(view, [1, 2, 3, 4]);
    assert_eq!(view.span(0, 1), [1, 2]);
    assert_eq!(view.keys(), [0usize, 1, 2, 3]);
}
