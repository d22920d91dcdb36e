#![allow(dead_code)]

use std::path::PathBuf;

use dragon_env::{bindings, Duration};

#[derive(Debug, Default)]
pub struct TestEnv {
    pub ptr_number: Option<i64>,
    pub number: i32,
    pub ptr_number_naked: Option<i8>,
    pub unquoted_string: String,
    pub enabled: bool,
    pub ptr_string: Option<String>,
    pub single: String,
    pub double: String,
    pub backquoted: String,
    pub empty: String,
    pub duration: Duration,
    pub ptr_duration: Option<Duration>,
    pub ptr_duration_naked: Option<Duration>,
    pub inline_comment: String,
    pub multiline_double: String,
    pub multiline_single: String,
    pub multiline_back: String,
    pub boolean: bool,
    pub ptr_boolean: Option<bool>,
    pub ptr_boolean_naked: Option<bool>,
}

bindings! {
    TestEnv {
        ptr_number => "PTR_NUMBER",
        number => "NUMBER" = "999",
        ptr_number_naked => "PTR_NUMBER_naked",
        unquoted_string => "STRING",
        enabled => "ENABLED",
        ptr_string => "PTR_STRING",
        single => "SINGLE_QUOTED",
        double => "DOUBLE_QUOTED",
        backquoted => "BACKQUOTED",
        empty => "EMPTY" = "not empty",
        duration => "Duration",
        ptr_duration => "PtrDuration",
        ptr_duration_naked => "PtrDuration_naked",
        inline_comment => "INLINE_COMMENT",
        multiline_double => "MULTI_DOUBLE_QUOTED",
        multiline_single => "MULTI_SINGLE_QUOTED",
        multiline_back => "MULTI_BACKTICKED",
        boolean => "BOOLEAN",
        ptr_boolean => "PTR_BOOLEAN",
        ptr_boolean_naked => "PTR_BOOLEAN_naked",
    }
}

#[derive(Debug, Default)]
pub struct Quoted {
    pub double: String,
    pub single: String,
    pub backquoted: String,
}

bindings! {
    Quoted {
        double => "DOUBLE_QUOTED",
        single => "SINGLE_QUOTED",
        backquoted => "BACKQUOTED",
    }
}

pub const MULTILINE: &str = "THIS\nIS\nA\nMULTILINE\nSTRING";

pub fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
