mod common;

use common::{data_file, Quoted, TestEnv, MULTILINE};
use dragon_env::{from_dotenv_file, from_dotenv_str, Dialect, Duration, Error, Reason};

fn load(text: &str) -> Result<TestEnv, Error> {
    let mut dest = TestEnv::default();
    from_dotenv_str(&mut dest, text, Dialect::Python)?;
    Ok(dest)
}

fn load_file() -> TestEnv {
    let mut dest = TestEnv::default();
    from_dotenv_file(&mut dest, data_file("py.env"), Dialect::Python).unwrap();
    dest
}

#[test]
fn test_file_values() {
    let dest = load_file();

    assert_eq!(dest.number, 123);
    assert_eq!(dest.unquoted_string, "My String");
    assert_eq!(dest.inline_comment, "Are ignored");
    assert_eq!(dest.empty, "");
    assert_eq!(dest.single, "I am quoted!");
    assert_eq!(dest.double, "I am quoted!");
    assert_eq!(dest.multiline_double, MULTILINE);
    assert_eq!(dest.multiline_single, MULTILINE);
    assert!(!dest.boolean);
    assert_eq!(dest.duration, Duration::from_secs(90));
}

#[test]
fn test_naked_variables_are_unset() {
    let dest = load_file();

    assert_eq!(dest.ptr_number_naked, None);
    assert_eq!(dest.ptr_boolean_naked, None);
    assert_eq!(dest.ptr_duration_naked, None);
}

#[test]
fn test_set_but_zero_values() {
    let dest = load_file();

    assert_eq!(dest.ptr_number, Some(0));
    assert_eq!(dest.ptr_boolean, Some(false));
    assert_eq!(dest.ptr_duration, Some(Duration::ZERO));
}

#[test]
fn test_naked_ignores_default() {
    let dest = load("NUMBER\nEMPTY").unwrap();
    assert_eq!(dest.number, 0);
    assert_eq!(dest.empty, "");
}

#[test]
fn test_unsupported_backtick() {
    let err = load("BACKTICK=`backquotes not supported`").unwrap_err();
    assert_eq!(err.to_string(), "line 1: syntax error (unsupported quote)");

    let err = load("STRING=ok\nBACKTICK=x`y").unwrap_err();
    assert_eq!(err.to_string(), "line 2: syntax error (unsupported quote)");
}

#[test]
fn test_double_quote_expands_single_quote_does_not() {
    let dest = load("MULTI_DOUBLE_QUOTED=\"a\\nb\"\nMULTI_SINGLE_QUOTED='a\\nb'").unwrap();
    assert_eq!(dest.multiline_double, "a\nb");
    assert_eq!(dest.multiline_single, "a\\nb");
}

#[test]
fn test_invalid_variable_name() {
    let err = load("NUMBER 123").unwrap_err();
    assert_eq!(err.to_string(), "line 1: syntax error (invalid variable name)");
}

#[test]
fn test_missing_closing_quote() {
    for text in [
        "DOUBLE_QUOTED=\"I should be closed",
        "SINGLE_QUOTED='I should be closed",
    ] {
        let mut dest = Quoted::default();
        let err = from_dotenv_str(&mut dest, text, Dialect::Python).unwrap_err();
        match err {
            Error::Syntax(err) => {
                assert_eq!(err.reason, Reason::MissingClosingQuote);
                assert_eq!(err.line(), Some(1));
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }
}

#[test]
fn test_same_text_differs_between_dialects() {
    let text = "PTR_NUMBER_naked\nNUMBER=1";

    assert!(load(text).is_ok());

    let mut dest = TestEnv::default();
    let err = from_dotenv_str(&mut dest, text, Dialect::NodeJs).unwrap_err();
    assert_eq!(err.to_string(), "line 1: syntax error (naked variable)");
}
