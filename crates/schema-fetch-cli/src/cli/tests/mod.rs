//! CLI parse tests (multi-file to keep each file short).

use super::Cli;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_normalized(args).unwrap()
}
