use crate::{launch::LaunchConfig, runtime::GpuRuntime, SmokeError};
use log::debug;
use std::io::Write;

/// The line the host prints once the kernel has finished.
pub const CONFIRMATION: &str = "Kernel execution finished.";

/// Launches the greeter, waits for the device and prints the confirmation.
///
/// The confirmation is only written after `synchronize` returns, so the
/// device's greeting always precedes it in `out`. Nothing after a failing step
/// is performed.
pub fn run<R, W>(runtime: &R, out: &mut W) -> Result<(), SmokeError>
where
    R: GpuRuntime,
    W: Write,
{
    let config = LaunchConfig::greeter();
    runtime.dispatch(&config)?;
    debug!("dispatched {} thread(s)", config.threads());

    runtime.synchronize()?;

    writeln!(out, "{}", CONFIRMATION)?;
    out.flush()?;
    Ok(())
}
