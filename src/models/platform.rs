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

use crate::error::{ApkFileError, Result};
use std::str::FromStr;

/// Architectures the contents search can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Architecture {
    X86,
    X86_64,
    Armhf,
    Armv7,
    Aarch64,
    Ppc64le,
    S390x,
    Mips64,
}

impl Architecture {
    pub const ALL: [Architecture; 8] = [
        Architecture::X86,
        Architecture::X86_64,
        Architecture::Armhf,
        Architecture::Armv7,
        Architecture::Aarch64,
        Architecture::Ppc64le,
        Architecture::S390x,
        Architecture::Mips64,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::X86 => "x86",
            Architecture::X86_64 => "x86_64",
            Architecture::Armhf => "armhf",
            Architecture::Armv7 => "armv7",
            Architecture::Aarch64 => "aarch64",
            Architecture::Ppc64le => "ppc64le",
            Architecture::S390x => "s390x",
            Architecture::Mips64 => "mips64",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Architecture::as_str).collect()
    }
}

impl FromStr for Architecture {
    type Err = ApkFileError;

    // The search endpoint is case sensitive, so no aliases or case folding here.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|arch| arch.as_str() == s)
            .ok_or_else(|| ApkFileError::InvalidArch(s.to_string()))
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
