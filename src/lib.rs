// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.3
// Author: Lukas Bower
// Date Modified: 2027-02-09

//! Platform bootstrap sequencer for the media runtime.
//!
//! Before the application proper may start, the process must hold the
//! architecture-matched build of the media runtime's native library, and the
//! runtime must have completed its one-shot native initialization.
//! [`bootstrap::run`] sequences both on the host's startup thread and gates
//! entry to the host framework's normal continuation: probing is best
//! effort, initialization failure aborts the process.

/// Supported-ABI list supplied by the operating environment.
pub mod abi;

/// Bootstrap controller sequencing probe and init.
pub mod bootstrap;

/// Host framework seam: context handle, delegation, termination.
pub mod host;

/// ABI-probing native library loader.
pub mod loader;

/// Multimedia subsystem init contract and the native runtime behind it.
pub mod media;
