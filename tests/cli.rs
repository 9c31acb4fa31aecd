// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn apk_file() -> Command {
    Command::cargo_bin("apk-file").unwrap()
}

#[test]
fn test_help_lists_flags() {
    apk_file()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--arch"))
        .stdout(contains("--repo"))
        .stdout(contains("--debug"))
        .stdout(contains("--version"));
}

#[test]
fn test_version_short_flag() {
    apk_file()
        .arg("-v")
        .assert()
        .success()
        .stdout(contains(format!("apk-file {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_version_single_dash_long_flag() {
    apk_file()
        .arg("-version")
        .assert()
        .success()
        .stdout(contains("apk-file "));
}

#[test]
fn test_invalid_arch_fails_before_request() {
    // A request would fail with exit code 20 and a "requesting" message
    apk_file()
        .args(["-arch=bogus", "bash"])
        .assert()
        .code(2)
        .stderr(contains("Error: bogus is not a valid arch"))
        .stderr(contains("requesting").not());
}

#[test]
fn test_errors_are_plain_when_stderr_is_not_a_terminal() {
    apk_file()
        .args(["-repo", "nonfree", "bash"])
        .assert()
        .code(2)
        .stderr(contains("Suggestions:\n• Valid repositories are:"))
        .stderr(contains("\x1b[").not());
}

#[test]
fn test_invalid_arch_double_dash() {
    apk_file()
        .args(["--arch", "amd64", "bash"])
        .assert()
        .code(2)
        .stderr(contains("amd64 is not a valid arch"));
}

#[test]
fn test_invalid_repo_fails_before_request() {
    apk_file()
        .args(["-repo", "nonfree", "bash"])
        .assert()
        .code(2)
        .stderr(contains("nonfree is not a valid repo"))
        .stderr(contains("main, community, testing"));
}

#[test]
fn test_invalid_arch_reported_even_without_file() {
    apk_file()
        .arg("-arch=bogus")
        .assert()
        .code(2)
        .stderr(contains("bogus is not a valid arch"));
}

#[test]
fn test_missing_file_argument() {
    apk_file()
        .assert()
        .code(2)
        .stderr(contains("must pass a file to search for"));
}

#[test]
fn test_missing_file_with_valid_filters() {
    apk_file()
        .args(["-arch", "x86_64", "-repo", "main", "-d"])
        .assert()
        .code(2)
        .stderr(contains("must pass a file to search for"));
}
