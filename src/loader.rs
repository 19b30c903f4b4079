// CLASSIFICATION: COMMUNITY
// Filename: loader.rs v0.3
// Author: Lukas Bower
// Date Modified: 2027-02-14

//! ABI-probing native library loader.
//!
//! The media runtime ships one native build per processor ABI, named by a
//! fixed prefix plus the ABI identifier. The device's supported-ABI list is
//! ordered by preference, so the first identifier whose library loads is the
//! right one; later identifiers are never attempted. A miss for one
//! identifier is purely informational, and exhausting the whole list is a
//! soft outcome the caller interprets.

use libloading::{library_filename, Library};
use log::{info, warn};

use crate::abi::SupportedAbis;

/// A native library resident in the process, tagged with the ABI that won.
pub struct LoadedLibrary {
    pub abi: String,
    pub library: Library,
}

/// Result of one probe pass over the supported-ABI list.
pub enum LoadOutcome {
    /// The first identifier whose library loaded.
    Loaded(LoadedLibrary),
    /// Every identifier missed, or the list was empty. Not an error here.
    NoneLoaded,
}

impl LoadOutcome {
    /// ABI identifier of the resident library, if any.
    pub fn abi(&self) -> Option<&str> {
        match self {
            LoadOutcome::Loaded(loaded) => Some(&loaded.abi),
            LoadOutcome::NoneLoaded => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

/// Probe the ABI list front to back with `attempt`, stopping at the first
/// success. A per-attempt miss is consumed right here: logged, then the next
/// identifier is tried.
pub fn probe_with<L, F>(abis: &SupportedAbis, prefix: &str, mut attempt: F) -> Option<(String, L)>
where
    F: FnMut(&str) -> Result<L, String>,
{
    for abi in abis.iter() {
        let name = format!("{prefix}{abi}");
        match attempt(&name) {
            Ok(lib) => {
                info!("[loader] {name} resident (abi {abi})");
                return Some((abi.to_owned(), lib));
            }
            Err(err) => {
                warn!("[loader] {name} not present: {err}");
            }
        }
    }
    None
}

/// Load the architecture-matched build of the library family named by
/// `prefix`. First match wins; total exhaustion yields
/// [`LoadOutcome::NoneLoaded`].
pub fn probe_and_load(abis: &SupportedAbis, prefix: &str) -> LoadOutcome {
    let attempt = |name: &str| {
        unsafe { Library::new(library_filename(name)) }.map_err(|e| e.to_string())
    };
    match probe_with(abis, prefix, attempt) {
        Some((abi, library)) => LoadOutcome::Loaded(LoadedLibrary { abi, library }),
        None => LoadOutcome::NoneLoaded,
    }
}
