// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.2
// Author: Lukas Bower
// Date Modified: 2027-02-14

//! Entry point for the mediaboot binary.
//!
//! Bootstraps the media runtime for a plain process: supported ABIs come
//! from the environment, the host context is empty, and an aborted
//! bootstrap maps to a non-zero exit.

use mediaboot::abi::SupportedAbis;
use mediaboot::bootstrap::{self, BootstrapState};
use mediaboot::host::{HostContext, ProcessHost};
use mediaboot::media::NativeMediaRuntime;

fn main() {
    env_logger::init();

    let abis = SupportedAbis::from_env();
    let ctx = HostContext::null();
    let mut runtime = NativeMediaRuntime::new();
    let mut host = ProcessHost::new();

    if bootstrap::run(&abis, &ctx, &mut runtime, &mut host) != BootstrapState::Delegated {
        eprintln!("Error: media bootstrap aborted");
        std::process::exit(1);
    }
}
