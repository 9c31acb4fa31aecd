//! Command line compatibility with the Go-style flags of earlier `apk-file` releases.
//!
//! Those releases took long flags with a single dash (`-arch x86`, `-repo=main`,
//! `-debug`). clap only understands those with two dashes, so they are
//! rewritten before parsing.

use std::ffi::OsString;

const LONG_FLAGS: [&str; 5] = ["arch", "repo", "debug", "version", "help"];

/// Rewrite `-name` and `-name=value` to `--name`/`--name=value` for known
/// long flags. Arguments after a `--` terminator are left untouched.
pub fn normalize_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut after_terminator = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    after_terminator = true;
                    arg
                }
                Some(s) if is_single_dash_long(s) => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => {
            let name = rest.split('=').next().unwrap_or(rest);
            LONG_FLAGS.contains(&name)
        }
        _ => false,
    }
}
