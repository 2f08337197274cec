use clap::Parser;
use gen_mq::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("gen-mq")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["--name", "latest_pro"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name, "latest_pro");
    assert_eq!(parsed.pro_type, None);
    assert_eq!(parsed.conf, None);
    assert_eq!(parsed.template_dir, None);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--name",
        "latest_pro",
        "--type",
        "posix",
        "--conf",
        "./custom/project.yaml",
        "--template-dir",
        "./custom/template",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.pro_type.as_deref(), Some("posix"));
    assert_eq!(parsed.conf, Some(PathBuf::from("./custom/project.yaml")));
    assert_eq!(parsed.template_dir, Some(PathBuf::from("./custom/template")));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-n", "latest_pro", "-t", "sysv", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name, "latest_pro");
    assert_eq!(parsed.pro_type.as_deref(), Some("sysv"));
    assert!(parsed.verbose);
}

#[test]
fn test_missing_name() {
    let args = make_args(&["-t", "posix"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_unexpected_positional() {
    let args = make_args(&["-n", "latest_pro", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
