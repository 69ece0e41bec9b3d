//! Tests for the build subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_build_defaults() {
    match parse(&["urlroute", "build", "index.php?option=com_users"]) {
        CliCommand::Build {
            url,
            raw,
            ssl,
            request_uri,
        } => {
            assert_eq!(url, "index.php?option=com_users");
            assert!(!raw);
            assert!(ssl.is_none());
            assert!(request_uri.is_none());
        }
        _ => panic!("expected Build"),
    }
}

#[test]
fn cli_parse_build_all_flags() {
    match parse(&[
        "urlroute",
        "build",
        "&view=users",
        "--raw",
        "--ssl",
        "1",
        "--request-uri",
        "https://www.example.com/",
    ]) {
        CliCommand::Build {
            url,
            raw,
            ssl,
            request_uri,
        } => {
            assert_eq!(url, "&view=users");
            assert!(raw);
            assert_eq!(ssl, Some(1));
            assert_eq!(request_uri.as_deref(), Some("https://www.example.com/"));
        }
        _ => panic!("expected Build with flags"),
    }
}

#[test]
fn cli_parse_build_rejects_non_numeric_ssl() {
    assert!(Cli::try_parse_from(["urlroute", "build", "index.php", "--ssl", "yes"]).is_err());
}
