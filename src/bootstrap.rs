// CLASSIFICATION: COMMUNITY
// Filename: bootstrap.rs v0.3
// Author: Lukas Bower
// Date Modified: 2027-02-14

//! Bootstrap controller.
//!
//! Runs the two startup phases in order on the caller's thread: probe for
//! the architecture-matched native library, then initialize the media
//! subsystem once. Probing is best effort; exhausting the ABI list without
//! a load is recorded and carried forward, because the subsystem may carry
//! a software fallback. Init failure is the one fatal path: the host is
//! asked to end the execution unit and its continuation is never entered.

use log::{error, info};

use crate::abi::SupportedAbis;
use crate::host::{Host, HostContext};
use crate::loader;
use crate::media::{MediaRuntime, NATIVE_LIB_PREFIX};

/// States of one bootstrap run. `Delegated` and `Aborted` are terminal;
/// [`run`] reports which of the two was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapState {
    Start,
    Probing,
    Initializing,
    /// Init succeeded and the host's continuation was entered.
    Delegated,
    /// Init failed; termination was requested, the continuation never ran.
    Aborted,
}

/// Run the bootstrap sequence to completion. One call per process lifetime.
pub fn run(
    abis: &SupportedAbis,
    ctx: &HostContext,
    runtime: &mut dyn MediaRuntime,
    host: &mut dyn Host,
) -> BootstrapState {
    let outcome = loader::probe_and_load(abis, NATIVE_LIB_PREFIX);
    match outcome.abi() {
        Some(abi) => info!("[bootstrap] native library resident for abi {abi}"),
        None => info!(
            "[bootstrap] no native library matched {} abi(s), continuing",
            abis.len()
        ),
    }
    runtime.attach_native(outcome);

    match runtime.init(ctx) {
        Ok(()) => {
            info!("[bootstrap] media subsystem ready, delegating to host");
            host.resume_startup();
            BootstrapState::Delegated
        }
        Err(err) => {
            error!("[bootstrap] {err}");
            error!("[bootstrap] cannot continue, requesting exit");
            host.request_exit();
            BootstrapState::Aborted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadOutcome;
    use crate::media::MediaInitError;

    struct ScriptedRuntime {
        verdict: Option<Result<(), MediaInitError>>,
        init_calls: usize,
        saw_loaded_library: Option<bool>,
    }

    impl ScriptedRuntime {
        fn succeeding() -> Self {
            Self::scripted(Ok(()))
        }

        fn failing() -> Self {
            Self::scripted(Err(MediaInitError("scripted failure".into())))
        }

        fn scripted(verdict: Result<(), MediaInitError>) -> Self {
            Self {
                verdict: Some(verdict),
                init_calls: 0,
                saw_loaded_library: None,
            }
        }
    }

    impl MediaRuntime for ScriptedRuntime {
        fn attach_native(&mut self, outcome: LoadOutcome) {
            self.saw_loaded_library = Some(outcome.is_loaded());
        }

        fn init(&mut self, _ctx: &HostContext) -> Result<(), MediaInitError> {
            self.init_calls += 1;
            self.verdict.take().unwrap()
        }
    }

    #[derive(Default)]
    struct RecordingHost {
        resumes: usize,
        exits: usize,
    }

    impl Host for RecordingHost {
        fn resume_startup(&mut self) {
            self.resumes += 1;
        }

        fn request_exit(&mut self) {
            self.exits += 1;
        }
    }

    #[test]
    fn init_success_reaches_delegated() {
        let abis = SupportedAbis::new(["no-such-abi"]);
        let mut runtime = ScriptedRuntime::succeeding();
        let mut host = RecordingHost::default();
        let state = run(&abis, &HostContext::null(), &mut runtime, &mut host);
        assert_eq!(state, BootstrapState::Delegated);
        assert_eq!(runtime.init_calls, 1);
        assert_eq!(host.resumes, 1);
        assert_eq!(host.exits, 0);
    }

    #[test]
    fn init_failure_reaches_aborted_without_delegation() {
        let abis = SupportedAbis::new(["no-such-abi"]);
        let mut runtime = ScriptedRuntime::failing();
        let mut host = RecordingHost::default();
        let state = run(&abis, &HostContext::null(), &mut runtime, &mut host);
        assert_eq!(state, BootstrapState::Aborted);
        assert_eq!(runtime.init_calls, 1);
        assert_eq!(host.resumes, 0);
        assert_eq!(host.exits, 1);
    }

    #[test]
    fn init_runs_even_when_probe_exhausts() {
        let abis = SupportedAbis::new(["no-such-abi", "also-missing"]);
        let mut runtime = ScriptedRuntime::succeeding();
        let mut host = RecordingHost::default();
        run(&abis, &HostContext::null(), &mut runtime, &mut host);
        assert_eq!(runtime.saw_loaded_library, Some(false));
        assert_eq!(runtime.init_calls, 1);
    }

    #[test]
    fn empty_abi_list_still_delegates_when_init_succeeds() {
        let abis = SupportedAbis::new(Vec::<String>::new());
        let mut runtime = ScriptedRuntime::succeeding();
        let mut host = RecordingHost::default();
        let state = run(&abis, &HostContext::null(), &mut runtime, &mut host);
        assert_eq!(state, BootstrapState::Delegated);
        assert_eq!(runtime.init_calls, 1);
        assert_eq!(host.resumes, 1);
    }
}
