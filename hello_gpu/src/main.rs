use env_logger::Env;
use hello_gpu::{confirmer, runtime::CudaRuntime};
use log::{info, warn};
use std::{error::Error, io};

pub fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let runtime = CudaRuntime::new()?;
    match runtime.probe() {
        Ok(report) => info!(
            "found {} device(s), using {} ({} MiB)",
            report.device_count,
            report.name,
            report.total_memory / (1024 * 1024)
        ),
        Err(e) => warn!("device probe failed: {}", e),
    }

    confirmer::run(&runtime, &mut io::stdout().lock())?;
    Ok(())
}
