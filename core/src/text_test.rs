//! Tests for `Text`

use pretty_assertions::assert_eq;

use crate::{Array, Ranged, Sequence, Text};

#[test]
fn test_text_is_a_char_sequence() {
    let text = Text::from("héllo");
    assert_eq!(text.size(), 5);
    assert_eq!(text.get(1), Some('é'));
    assert_eq!(text.last(), Some('o'));
    assert!(text.contains(&'l'));
}

#[test]
fn test_text_equals_text() {
    assert_eq!(Text::from("abc"), Text::from(String::from("abc")));
    assert!(Text::from("abc") != Text::from("abd"));
}

#[test]
fn test_text_never_equals_non_text() {
    let text = Text::from("abc");
    let chars = Array::from(['a', 'b', 'c']);

    assert!(!text.equals(&chars));
    assert!(!chars.equals(&text));
    assert!(text != chars);
    assert!(chars != text);
}

#[test]
fn test_views_of_text_are_not_text() {
    let text = Text::from("abc");
    let chars = Array::from(['c', 'b', 'a']);
    assert!(text.reversed().equals(&chars));
    assert!(!text.reversed().equals(&Text::from("cba")));
}

#[test]
fn test_text_ranges_stay_text() {
    let text = Text::from("sequence");
    let span: Text = text.span(0, 2);
    assert_eq!(span, Text::from("seq"));
    assert_eq!(text.span(2, 0), Text::from("qes"));
    assert_eq!(text.segment(3, 3), Text::from("uen"));
    assert_eq!(text.span_from(5), Text::from("nce"));
    assert_eq!(text.span_to(-1), Text::from(""));
}

#[test]
fn test_text_trim() {
    let text = Text::from("  padded ");
    assert_eq!(text.trim(|c| c.is_whitespace()), Text::from("padded"));
}

#[test]
fn test_rest_of_text_ranges_back_to_text() {
    let text = Text::from("xyz");
    let rest = text.rest();
    let tail: Text = rest.span_from(0);
    assert_eq!(tail, Text::from("yz"));
}

#[test]
fn test_text_formatting() {
    let text = Text::from("a\"b");
    assert_eq!(format!("{text}"), "a\"b");
    assert_eq!(format!("{text:?}"), "\"a\\\"b\"");
}

#[test]
fn test_text_hash_matches_equal_text() {
    assert_eq!(Text::from("abc").hash_code(), Text::from("abc").hash_code());
}
