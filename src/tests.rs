use std::path::PathBuf;

use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::{Args, parse_args};

fn parse(raw: &[&str]) -> color_eyre::Result<Args> {
    parse_args(raw.iter().map(|s| s.to_string()))
}

#[test]
fn no_arguments_prints_compact() {
    let args = parse(&[]).unwrap();
    assert_eq!(
        args,
        Args {
            pretty: false,
            out: None
        }
    );
}

#[test]
fn flags_in_any_order() {
    let expected = Args {
        pretty: true,
        out: Some(PathBuf::from("public/site.json")),
    };
    assert_eq!(parse(&["--pretty", "--out", "public/site.json"]).unwrap(), expected);
    assert_eq!(parse(&["--out", "public/site.json", "--pretty"]).unwrap(), expected);
}

#[test]
fn out_without_value_is_rejected() {
    let err = parse(&["--out"]).unwrap_err();
    assert!(err.to_string().contains("--out requires a path"));
}

#[test]
fn out_followed_by_flag_is_rejected() {
    let err = parse(&["--out", "--pretty"]).unwrap_err();
    assert!(err.to_string().contains("--pretty"));
}

#[test]
fn repeated_out_is_rejected() {
    let err = parse(&["--out", "x.json", "--out", "y.json"]).unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn unknown_arguments_are_rejected() {
    let mut runner = TestRunner::new(Config {
        cases: 32,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"-{0,2}[a-z]{1,8}", |arg| {
            prop_assume!(arg != "--pretty" && arg != "--out");
            let err = parse_args(std::iter::once(arg.clone())).unwrap_err();
            prop_assert!(err.to_string().contains(&arg));
            Ok(())
        })
        .unwrap();
}
