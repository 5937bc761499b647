//! Property tests for the best-effort conversions and the tokenizer.

use oh_common::{SENTINEL_DATE_TIME, Value};
use oh_convert::{
    split_delimited, to_bool, to_date_time_or_sentinel, to_double, to_int, to_list_of_int,
    to_list_of_long, to_long, to_null_safe_string,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn non_numeric_text_yields_default(text in "[a-zA-Z ]{1,16}", default in any::<i32>()) {
        prop_assert_eq!(to_int(text.as_str(), default), default);
        prop_assert_eq!(to_long(text.as_str(), i64::from(default)), i64::from(default));
    }

    #[test]
    fn integers_survive_string_form(number in any::<i64>()) {
        prop_assert_eq!(to_long(number.to_string(), 0), number);
        prop_assert_eq!(to_long(format!("  {number} "), 0), number);
    }

    #[test]
    fn doubles_survive_string_form(number in -1.0e12f64..1.0e12) {
        prop_assert_eq!(to_double(Value::Float(number), 0.0), number);
        prop_assert_eq!(to_double(number.to_string(), 0.0), number);
    }

    #[test]
    fn unknown_words_keep_bool_default(word in "[g-m]{2,8}", default in any::<bool>()) {
        prop_assert_eq!(to_bool(word.as_str(), default), default);
    }

    #[test]
    fn garbage_dates_become_sentinel(text in "[a-z]{1,12}") {
        prop_assert_eq!(to_date_time_or_sentinel(text.as_str()), SENTINEL_DATE_TIME);
    }

    #[test]
    fn null_safe_string_never_panics(text in ".*") {
        prop_assert_eq!(to_null_safe_string(text.as_str()), text);
    }

    #[test]
    fn int_list_matches_input(numbers in prop::collection::vec(any::<i32>(), 0..12)) {
        let csv = numbers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" , ");
        prop_assert_eq!(to_list_of_int(&csv), Some(numbers.clone()));
        let longs: Vec<i64> = numbers.iter().copied().map(i64::from).collect();
        prop_assert_eq!(to_list_of_long(&csv), Some(longs));
    }

    #[test]
    fn one_bad_token_poisons_int_list(
        numbers in prop::collection::vec(any::<i32>(), 0..6),
        bad in "[a-z]{1,4}",
    ) {
        let mut tokens: Vec<String> = numbers.iter().map(ToString::to_string).collect();
        tokens.push(bad);
        prop_assert_eq!(to_list_of_int(&tokens.join(",")), None);
    }

    #[test]
    fn literal_tokens_are_trimmed_and_non_empty(value in "[a-c ,]{0,24}") {
        for token in split_delimited(&value, ",", true) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.trim(), token.as_str());
            prop_assert!(!token.contains(','));
        }
    }

    #[test]
    fn quote_aware_tokens_are_trimmed(value in "[a-c ,|]{0,24}") {
        for token in split_delimited(&value, ",", false) {
            prop_assert_eq!(token.trim(), token.as_str());
            prop_assert!(!token.contains(','));
        }
    }
}

#[test]
fn quoted_phrase_is_one_token() {
    assert_eq!(
        split_delimited(r#"a,"b,c",d"#, ",", false),
        vec!["a".to_string(), "\"b,c\"".to_string(), "d".to_string()]
    );
}

#[test]
fn whitespace_only_segment_is_an_empty_quote_aware_token() {
    assert_eq!(split_delimited("a, ,b", ",", false), ["a", "", "b"]);
    assert_eq!(split_delimited("a, ,b", ",", true), ["a", "b"]);
}

#[test]
fn spaces_around_tokens_are_trimmed() {
    assert_eq!(split_delimited("a, b ,c", ",", true), ["a", "b", "c"]);
    assert!(split_delimited("", ",", false).is_empty());
}
