//! Accepts the single-dash long flag spelling (`-url x`, `-url=x`) alongside
//! clap's `--url x`.

use std::ffi::OsString;

/// Long flags that take a value.
const VALUE_FLAGS: [&str; 4] = ["provider", "url", "output", "timeout"];
/// Long flags without a value.
const SWITCH_FLAGS: [&str; 2] = ["help", "version"];

/// Rewrites `-name` / `-name=value` to `--name` / `--name=value` for known flags.
/// Arguments in value position are never rewritten.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut expect_value = false;
    for arg in args.into_iter().map(Into::into) {
        if expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        let (dashes, rest) = if let Some(r) = s.strip_prefix("--") {
            ("--", r)
        } else if let Some(r) = s.strip_prefix('-') {
            ("-", r)
        } else {
            out.push(arg);
            continue;
        };
        let (name, inline_value) = match rest.split_once('=') {
            Some((n, _)) => (n, true),
            None => (rest, false),
        };
        if VALUE_FLAGS.contains(&name) {
            expect_value = !inline_value;
        } else if !SWITCH_FLAGS.contains(&name) {
            out.push(arg);
            continue;
        }
        if dashes == "-" {
            out.push(OsString::from(format!("-{}", s)));
        } else {
            out.push(arg);
        }
    }
    out
}
