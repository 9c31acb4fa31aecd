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

use crate::error::ApkFileError;
use crate::models::platform::Architecture;
use crate::models::repository::Repository;

pub struct ErrorContext<'a> {
    pub error: &'a ApkFileError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a ApkFileError) -> Self {
        let (suggestion, details) = match error {
            ApkFileError::InvalidArch(_) => {
                let suggestion = Some(format!(
                    "Valid architectures are: {}",
                    Architecture::names().join(", ")
                ));
                (suggestion, None)
            }
            ApkFileError::InvalidRepo(_) => {
                let suggestion = Some(format!(
                    "Valid repositories are: {}",
                    Repository::names().join(", ")
                ));
                (suggestion, None)
            }
            ApkFileError::MissingFile => {
                let suggestion = Some(
                    "Pass a file name or path, e.g. 'apk-file posix' or 'apk-file /usr/bin/bash'."
                        .to_string(),
                );
                (suggestion, None)
            }
            ApkFileError::Request { url, .. } => {
                let suggestion =
                    Some("Check your internet connection and try again.".to_string());
                let details = Some(format!("Request URL: {url}"));
                (suggestion, details)
            }
            ApkFileError::HttpStatus { url, status } => {
                let suggestion = match status {
                    500..=599 => Some(
                        "The contents search service is having problems. Please try again later."
                            .to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("Request URL: {url}"));
                (suggestion, details)
            }
            ApkFileError::ResponseBody { url, .. } | ApkFileError::InvalidEncoding { url, .. } => {
                let details = Some(format!("Request URL: {url}"));
                (None, details)
            }
            _ => (None, None),
        };

        Self {
            error,
            suggestion,
            details,
        }
    }
}
