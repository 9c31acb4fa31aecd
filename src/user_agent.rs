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

//! Version and User-Agent strings for identifying apk-file on the wire.

/// The apk-file package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit the binary was built from, when the build provides one
pub const GIT_COMMIT: Option<&str> = option_env!("APK_FILE_GIT_COMMIT");

/// User-Agent for the contents search client
pub fn search_client() -> String {
    format!("apk-file/{VERSION}")
}

/// Version line printed by `-v`
pub fn long_version() -> String {
    match GIT_COMMIT {
        Some(commit) if !commit.is_empty() => format!("{VERSION} (commit {commit})"),
        _ => VERSION.to_string(),
    }
}
