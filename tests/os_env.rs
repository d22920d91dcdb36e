use dragon_env::{bindings, from_os_env, Duration, Error, Location, Reason};

#[derive(Debug, Default)]
struct Named {
    name: String,
}

bindings! { Named { name => "DRAGON_ENV_OS_NAME" = "Alice" } }

#[derive(Debug, Default)]
struct Numbers {
    number: i32,
    number8: i8,
    number16: i16,
    number32: i32,
    number64: i64,
}

bindings! {
    Numbers {
        number => "DRAGON_ENV_OS_NUMBER" = "999",
        number8 => "DRAGON_ENV_OS_NUMBER8",
        number16 => "DRAGON_ENV_OS_NUMBER16",
        number32 => "DRAGON_ENV_OS_NUMBER32",
        number64 => "DRAGON_ENV_OS_NUMBER64" = "999",
    }
}

#[derive(Debug, Default)]
struct Flags {
    boolean: bool,
    ptr_boolean: Option<bool>,
}

bindings! {
    Flags {
        boolean => "DRAGON_ENV_OS_BOOL",
        ptr_boolean => "DRAGON_ENV_OS_PTR_BOOL" = "true",
    }
}

#[test]
fn test_string_default() {
    temp_env::with_var_unset("DRAGON_ENV_OS_NAME", || {
        let mut env = Named::default();
        from_os_env(&mut env).unwrap();
        assert_eq!(env.name, "Alice");
    });
}

#[test]
fn test_string_set_in_environment() {
    temp_env::with_var("DRAGON_ENV_OS_NAME", Some("  Bob "), || {
        let mut env = Named::default();
        from_os_env(&mut env).unwrap();
        assert_eq!(env.name, "Bob");
    });
}

#[test]
fn test_missing_closing_quote_names_variable() {
    for quote in ["'", "\"", "`"] {
        let value = format!("{}missing quote at end", quote);
        temp_env::with_var("DRAGON_ENV_OS_NAME", Some(value.as_str()), || {
            let mut env = Named::default();
            let err = from_os_env(&mut env).unwrap_err();
            assert_eq!(
                err.to_string(),
                "DRAGON_ENV_OS_NAME: syntax error (missing closing quote)"
            );
        });
    }
}

#[test]
fn test_numeric_defaults() {
    temp_env::with_vars_unset(["DRAGON_ENV_OS_NUMBER", "DRAGON_ENV_OS_NUMBER64"], || {
        let mut env = Numbers::default();
        from_os_env(&mut env).unwrap();
        assert_eq!(env.number, 999);
        assert_eq!(env.number64, 999);
        assert_eq!(env.number8, 0);
    });
}

#[test]
fn test_numbers_set_in_environment() {
    temp_env::with_vars(
        [
            ("DRAGON_ENV_OS_NUMBER", Some("546")),
            ("DRAGON_ENV_OS_NUMBER8", Some("0")),
            ("DRAGON_ENV_OS_NUMBER16", Some("1616")),
            ("DRAGON_ENV_OS_NUMBER32", Some("-323232")),
            ("DRAGON_ENV_OS_NUMBER64", Some("5466464646464")),
        ],
        || {
            let mut env = Numbers::default();
            from_os_env(&mut env).unwrap();
            assert_eq!(env.number, 546);
            assert_eq!(env.number8, 0);
            assert_eq!(env.number16, 1616);
            assert_eq!(env.number32, -323232);
            assert_eq!(env.number64, 5_466_464_646_464);
        },
    );
}

#[test]
fn test_number_not_parsable() {
    temp_env::with_var("DRAGON_ENV_OS_NUMBER", Some("Not a number"), || {
        let mut env = Numbers::default();
        let err = from_os_env(&mut env).unwrap_err();
        assert_eq!(
            err.to_string(),
            "DRAGON_ENV_OS_NUMBER: syntax error (number not parsable)"
        );
    });
}

#[test]
fn test_out_of_range_number_wraps() {
    temp_env::with_var("DRAGON_ENV_OS_NUMBER8", Some("257"), || {
        let mut env = Numbers::default();
        from_os_env(&mut env).unwrap();
        assert_eq!(env.number8, 1);
    });
}

#[test]
fn test_booleans() {
    let falses = ["false", "False", "FALSE", "0", "off", "f", "disabled", ""];
    let trues = ["true", "True", "TRUE", "1", "on", "On", "12345", "t", "enabled"];

    for (value, expected) in falses
        .iter()
        .map(|v| (*v, false))
        .chain(trues.iter().map(|v| (*v, true)))
    {
        temp_env::with_vars(
            [
                ("DRAGON_ENV_OS_BOOL", Some(value)),
                ("DRAGON_ENV_OS_PTR_BOOL", Some(value)),
            ],
            || {
                let mut env = Flags {
                    boolean: !expected,
                    ptr_boolean: None,
                };
                from_os_env(&mut env).unwrap();
                assert_eq!(env.boolean, expected, "{value:?}");
                assert_eq!(env.ptr_boolean, Some(expected), "{value:?}");
            },
        );
    }
}

#[test]
fn test_boolean_not_parsable() {
    temp_env::with_var("DRAGON_ENV_OS_BOOL", Some("Neither true or false"), || {
        let mut env = Flags::default();
        match from_os_env(&mut env) {
            Err(Error::Syntax(err)) => {
                assert_eq!(err.reason, Reason::InvalidBoolean);
                assert_eq!(
                    err.location,
                    Location::Variable("DRAGON_ENV_OS_BOOL".to_string())
                );
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    });
}

#[test]
fn test_duration_from_environment() {
    #[derive(Default)]
    struct Timeouts {
        read: Duration,
        write: Option<Duration>,
    }
    bindings! {
        Timeouts {
            read => "DRAGON_ENV_OS_READ_TIMEOUT" = "30s",
            write => "DRAGON_ENV_OS_WRITE_TIMEOUT",
        }
    }

    temp_env::with_vars(
        [
            ("DRAGON_ENV_OS_READ_TIMEOUT", None),
            ("DRAGON_ENV_OS_WRITE_TIMEOUT", Some("1m30s")),
        ],
        || {
            let mut env = Timeouts::default();
            from_os_env(&mut env).unwrap();
            assert_eq!(env.read, Duration::from_secs(30));
            assert_eq!(env.write, Some(Duration::from_secs(90)));
        },
    );
}
