// CLASSIFICATION: COMMUNITY
// Filename: abi.rs v0.2
// Author: Lukas Bower
// Date Modified: 2027-02-09

//! Supported-ABI list handling.
//!
//! The operating environment decides which processor ABIs the current
//! process can execute and in which order to prefer them. This module only
//! carries that ordered list; it never reorders, filters by policy, or
//! persists it.

use std::env;

/// Environment variable naming the supported ABIs, colon separated,
/// highest preference first.
pub const ABI_LIST_ENV: &str = "MEDIABOOT_SUPPORTED_ABIS";

/// Ordered list of ABI identifiers the device can execute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportedAbis(Vec<String>);

impl SupportedAbis {
    /// Build a list from explicit identifiers, preserving their order.
    /// Empty identifiers are dropped.
    pub fn new<I, S>(abis: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            abis.into_iter()
                .map(Into::into)
                .filter(|abi| !abi.is_empty())
                .collect(),
        )
    }

    /// Read the list from the environment.
    ///
    /// [`ABI_LIST_ENV`] takes precedence when set. Without it the process
    /// falls back to its own build architecture, the one ABI it is certain
    /// to execute.
    pub fn from_env() -> Self {
        match env::var(ABI_LIST_ENV) {
            Ok(raw) => Self::new(raw.split(':').map(str::trim).map(str::to_owned)),
            Err(_) => Self::new([env::consts::ARCH.to_owned()]),
        }
    }

    /// Identifiers in preference order, front to back.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
