use crate::error::{ApkFileError, Result};
use std::str::FromStr;

/// Alpine package repositories the contents search can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repository {
    Main,
    Community,
    Testing,
}

impl Repository {
    pub const ALL: [Repository; 3] = [
        Repository::Main,
        Repository::Community,
        Repository::Testing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Repository::Main => "main",
            Repository::Community => "community",
            Repository::Testing => "testing",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Repository::as_str).collect()
    }
}

impl FromStr for Repository {
    type Err = ApkFileError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|repo| repo.as_str() == s)
            .ok_or_else(|| ApkFileError::InvalidRepo(s.to_string()))
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
