// CLASSIFICATION: COMMUNITY
// Filename: host.rs v0.2
// Author: Lukas Bower
// Date Modified: 2027-02-14

//! Host framework seam.
//!
//! The host framework owns the process lifecycle; the bootstrap only gates
//! it. It borrows the host's context object for the single init call and
//! afterwards either resumes the host's normal startup or asks it to end
//! the current execution unit. The exit value on the abort path is host
//! policy, not decided here.

use std::os::raw::c_void;
use std::ptr;

use log::info;

/// Opaque handle to the hosting environment's context object. Borrowed for
/// the duration of the subsystem init call, never stored.
pub struct HostContext {
    raw: *const c_void,
}

impl HostContext {
    /// Wrap a context pointer lent by the host. The pointer must stay valid
    /// for as long as this handle is borrowed by the bootstrap.
    pub fn from_raw(raw: *const c_void) -> Self {
        Self { raw }
    }

    /// For hosts that have no context object to lend.
    pub fn null() -> Self {
        Self { raw: ptr::null() }
    }

    pub fn as_ptr(&self) -> *const c_void {
        self.raw
    }
}

/// The host framework's side of the bootstrap handshake.
pub trait Host {
    /// Continue the host's normal startup path. Called once, only after a
    /// successful subsystem init.
    fn resume_startup(&mut self);

    /// Ask the host to end the current execution unit. Called once, only on
    /// the fatal path.
    fn request_exit(&mut self);
}

/// What the bootstrap asked of the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disposition {
    /// Bootstrap has not concluded.
    #[default]
    Pending,
    /// Startup was resumed; the application owns the process now.
    Resumed,
    /// Termination was requested.
    Exit,
}

/// Plain-process host adapter. The binary owns its own lifecycle, so both
/// handshake calls reduce to a recorded disposition for `main` to act on.
#[derive(Default)]
pub struct ProcessHost {
    disposition: Disposition,
}

impl ProcessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disposition(&self) -> Disposition {
        self.disposition
    }
}

impl Host for ProcessHost {
    fn resume_startup(&mut self) {
        info!("[host] startup resumed");
        self.disposition = Disposition::Resumed;
    }

    fn request_exit(&mut self) {
        info!("[host] exit requested");
        self.disposition = Disposition::Exit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_host_records_resume() {
        let mut host = ProcessHost::new();
        assert_eq!(host.disposition(), Disposition::Pending);
        host.resume_startup();
        assert_eq!(host.disposition(), Disposition::Resumed);
    }

    #[test]
    fn process_host_records_exit() {
        let mut host = ProcessHost::new();
        host.request_exit();
        assert_eq!(host.disposition(), Disposition::Exit);
    }

    #[test]
    fn null_context_is_null() {
        assert!(HostContext::null().as_ptr().is_null());
    }
}
