use rstest::rstest;

use crate::{SyntaxError, parse};

#[rstest]
// Structural: arrays
#[case::dangling_array_comma("[1,2,]")]
#[case::leading_array_comma("[,1]")]
#[case::double_array_comma("[1,,2]")]
#[case::missing_array_comma("[1 2]")]
#[case::colon_in_array("[\"a\": 1]")]
#[case::object_close_in_array("[}")]
// Structural: objects
#[case::dangling_object_comma("{\"a\":1,}")]
#[case::dangling_colon("{\"a\":}")]
#[case::dangling_key("{\"a\"}")]
#[case::missing_colon("{\"a\" \"b\"}")]
#[case::missing_object_comma("{\"a\":1 \"b\":2}")]
#[case::numeric_key("{1:2}")]
#[case::array_key("{[]:1}")]
#[case::leading_object_colon("{:1}")]
#[case::array_close_in_object("{]}")]
// Structural: root
#[case::lone_colon(":")]
#[case::lone_comma(",")]
#[case::lone_array_close("]")]
#[case::lone_object_close("}")]
#[case::two_literals("true false")]
#[case::two_numbers("1 2")]
#[case::two_arrays("[] []")]
#[case::content_after_object("{} x")]
#[case::comma_after_root("1,2")]
// Literals
#[case::literal_overrun("truex")]
#[case::literal_truncated("tru")]
#[case::literal_typo("falze")]
#[case::literal_truncated_by_comma("[nul,1]")]
#[case::unknown_word("xyz")]
// Unterminated input
#[case::empty("")]
#[case::whitespace_only("   \n\t")]
#[case::unterminated_string("\"abc")]
#[case::mismatched_quotes("'abc\"")]
#[case::unterminated_array("[1,2")]
#[case::unterminated_object("{\"a\":1")]
#[case::unterminated_object_after_value("{\"a\":\"b\"")]
// Escapes
#[case::bad_unicode_hex("\"\\u12G4\"")]
#[case::surrogate_escape("\"\\uD800\"")]
#[case::bad_two_digit_hex("\"\\x4G\"")]
#[case::unterminated_escape("\"\\")]
fn rejects(#[case] src: &str) {
    assert!(parse(src).is_err(), "accepted {src:?}");
}

#[test]
fn dangling_comma_names_the_close() {
    let err = parse("[1,2,]").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::TrailingComma(']'));
}

#[test]
fn literal_mismatch_reports_candidate_and_offender() {
    let err = parse("truex").unwrap_err();
    assert_eq!(
        err.kind(),
        &SyntaxError::LiteralMismatch {
            expected: "true",
            found: 'x',
        }
    );
}

#[test]
fn truncated_literal_is_incomplete() {
    let err = parse("tru").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::IncompleteLiteral("true"));
}

#[test]
fn trailing_content_is_located() {
    let err = parse("true false").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::TrailingContent);
    assert_eq!((err.line, err.column), (1, 6));
}

#[test]
fn non_string_key_is_rejected() {
    let err = parse("{1:2}").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::NonStringKey);
}

#[test]
fn unterminated_string_is_end_of_input() {
    let err = parse("\"abc").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::UnexpectedEndOfInput);
}

#[test]
fn empty_input_is_end_of_input() {
    let err = parse("").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::UnexpectedEndOfInput);
}

#[test]
fn malformed_hex_is_a_lexical_error() {
    let err = parse("\"\\u12G4\"").unwrap_err();
    assert_eq!(
        err.kind(),
        &SyntaxError::InvalidHexEscape("12G4".into())
    );
}

#[test]
fn surrogate_escape_is_not_a_code_point() {
    let err = parse("\"\\uD800\"").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::InvalidEscapeCodePoint(0xD800));
}

#[test]
fn error_position_tracks_lines() {
    let err = parse("[\n  1,\n  ,\n]").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::UnexpectedCharacter(','));
    assert_eq!((err.line, err.column), (3, 3));
}
