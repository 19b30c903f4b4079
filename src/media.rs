// CLASSIFICATION: COMMUNITY
// Filename: media.rs v0.3
// Author: Lukas Bower
// Date Modified: 2027-02-14

//! Multimedia subsystem init contract.
//!
//! The subsystem is a black box to the bootstrap: one native init call
//! legitimizes it, everything after that belongs to the application proper.
//! The native entry point expects the architecture-matched library to
//! already be resident in the process, which is why probing runs first.
//! That coupling lives in the platform, not in any signature here.

use std::os::raw::c_void;

use libloading::Symbol;
use log::warn;
use thiserror::Error;

use crate::host::HostContext;
use crate::loader::{LoadOutcome, LoadedLibrary};

/// Library name prefix of the subsystem's per-ABI native builds.
pub const NATIVE_LIB_PREFIX: &str = "media_native_";

/// C entry point exported by each per-ABI build.
const INIT_SYMBOL: &[u8] = b"media_runtime_init\0";

type InitFn = unsafe extern "C" fn(*const c_void) -> i32;

/// Failure of the one-shot subsystem init. Every cause collapses into this
/// single outcome; afterwards the subsystem state is undefined and the only
/// safe recovery is ending the process.
#[derive(Debug, Error)]
#[error("media runtime initialization failed: {0}")]
pub struct MediaInitError(pub String);

/// One-shot initialization contract for the multimedia subsystem.
pub trait MediaRuntime {
    /// Hand over the probe outcome before init. The native runtime keeps
    /// the library resident for the rest of the process; doubles have
    /// nothing to keep.
    fn attach_native(&mut self, _outcome: LoadOutcome) {}

    /// Initialize the subsystem. Invoked at most once per process, from the
    /// bootstrap controller only; `ctx` is borrowed for this call alone.
    fn init(&mut self, ctx: &HostContext) -> Result<(), MediaInitError>;
}

/// Production runtime backed by the probed native library.
pub struct NativeMediaRuntime {
    lib: Option<LoadedLibrary>,
}

impl NativeMediaRuntime {
    pub fn new() -> Self {
        Self { lib: None }
    }

    /// Whether an architecture-matched library is resident.
    pub fn is_present(&self) -> bool {
        self.lib.is_some()
    }

    /// Resolve the init entry point from the resident library.
    fn init_symbol(&self) -> anyhow::Result<Symbol<'_, InitFn>> {
        let loaded = self
            .lib
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("no native media library resident"))?;
        unsafe { loaded.library.get::<InitFn>(INIT_SYMBOL) }
            .map_err(|e| anyhow::anyhow!(e.to_string()))
    }
}

impl Default for NativeMediaRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaRuntime for NativeMediaRuntime {
    fn attach_native(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded(loaded) => {
                self.lib = Some(loaded);
            }
            LoadOutcome::NoneLoaded => {
                warn!("[media] no architecture-matched library resident; init may fail");
            }
        }
    }

    fn init(&mut self, ctx: &HostContext) -> Result<(), MediaInitError> {
        let entry = self
            .init_symbol()
            .map_err(|e| MediaInitError(e.to_string()))?;
        let rc = unsafe { entry(ctx.as_ptr()) };
        if rc == 0 {
            Ok(())
        } else {
            Err(MediaInitError(format!("native init returned {rc}")))
        }
    }
}
