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

use crate::config::SearchConfig;
use crate::models::{Architecture, Repository};

/// Parameters of a single contents search request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentsQuery {
    pub file: String,
    pub path: String,
    pub repo: Option<Repository>,
    pub arch: Option<Architecture>,
}

impl ContentsQuery {
    /// Build the file and directory globs for a user supplied path.
    ///
    /// A bare name matches anywhere (`posix` -> `*posix*`). When a directory
    /// is given it anchors the left side instead (`bin/file` -> `file*` in
    /// `*bin`).
    pub fn from_path(arg: &str) -> Self {
        let (file, path) = file_and_dir_patterns(arg);
        Self {
            file,
            path,
            ..Self::default()
        }
    }

    pub fn for_config(arg: &str, config: &SearchConfig) -> Self {
        let mut query = Self::from_path(arg);
        query.repo = config.repo;
        query.arch = config.arch;
        query
    }

    pub fn repo(mut self, repo: Repository) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn arch(mut self, arch: Architecture) -> Self {
        self.arch = Some(arch);
        self
    }

    /// Query parameters in the order the search form submits them.
    ///
    /// Every parameter is always present; unset filters are sent empty and
    /// `branch` is always empty (search all branches).
    pub fn params(&self) -> [(&'static str, &str); 5] {
        [
            ("file", self.file.as_str()),
            ("path", self.path.as_str()),
            ("branch", ""),
            ("repo", self.repo.map(|r| r.as_str()).unwrap_or_default()),
            ("arch", self.arch.map(|a| a.as_str()).unwrap_or_default()),
        ]
    }
}

pub fn file_and_dir_patterns(arg: &str) -> (String, String) {
    let file = format!("*{}*", base_name(arg));
    let dir = dir_name(arg);

    if dir.is_empty() || dir == "." {
        (file, String::new())
    } else {
        (file[1..].to_string(), format!("*{dir}"))
    }
}

/// Last element of a slash separated path, ignoring trailing slashes.
fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Everything but the last element, lexically cleaned.
fn dir_name(path: &str) -> String {
    let dir = match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => "",
    };
    clean(dir)
}

fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            _ => parts.push(part),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
