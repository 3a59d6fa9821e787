use crate::{launch::LaunchConfig, SmokeError};
use cust::{
    context::{Context, CurrentContext},
    device::Device,
    prelude::*,
};
use hello_gpu_kernels::KERNEL_NAME;
use log::debug;
use std::ptr;

static PTX: &str = include_str!("../../resources/hello_gpu_kernels.ptx");

/// The two operations the smoke test needs from a GPU runtime.
pub trait GpuRuntime {
    /// Queues the greeter kernel. Returns without waiting for it to run.
    fn dispatch(&self, config: &LaunchConfig) -> Result<(), SmokeError>;

    /// Blocks until all previously dispatched work has completed and its
    /// device-side output has reached the host's stdout.
    fn synchronize(&self) -> Result<(), SmokeError>;
}

/// What the driver reports about the devices on this host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceReport {
    pub device_count: u32,
    pub name: String,
    pub total_memory: usize,
}

pub struct CudaRuntime {
    // Fields drop in declaration order; the context must outlive the module
    // and stream created in it.
    module: Module,
    stream: Stream,
    _ctx: Context,
}

impl CudaRuntime {
    /// Initializes the driver, creates a context on the first device and loads
    /// the greeter PTX into it.
    pub fn new() -> Result<Self, SmokeError> {
        let _ctx = cust::quick_init()?;
        let module = Module::from_ptx(PTX, &[])?;
        let stream = Stream::new(StreamFlags::NON_BLOCKING, None)?;
        Ok(Self {
            module,
            stream,
            _ctx,
        })
    }

    /// Queries the device the context was created on.
    pub fn probe(&self) -> Result<DeviceReport, SmokeError> {
        let device_count = Device::num_devices()?;
        let device = Device::get_device(0)?;
        Ok(DeviceReport {
            device_count,
            name: device.name()?,
            total_memory: device.total_memory()?,
        })
    }
}

impl GpuRuntime for CudaRuntime {
    fn dispatch(&self, config: &LaunchConfig) -> Result<(), SmokeError> {
        let kernel = self.module.get_function(KERNEL_NAME)?;
        let stream = &self.stream;
        debug!(
            "launching {} with grid {} and block {}",
            KERNEL_NAME, config.grid, config.block
        );

        unsafe {
            launch!(
                kernel<<<config.grid, config.block, config.shared_mem_bytes, stream>>>()
            )?;
        }
        Ok(())
    }

    fn synchronize(&self) -> Result<(), SmokeError> {
        CurrentContext::synchronize()?;
        debug!("device synchronized");

        // The driver writes device printf output through C stdio, which is
        // fully buffered when stdout is a pipe. Flush it so that later writes
        // from Rust's stdout can't overtake it.
        // SAFETY: fflush(NULL) flushes every open output stream and is
        // well-defined by the C standard.
        unsafe {
            libc::fflush(ptr::null_mut());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PTX;
    use hello_gpu_kernels::KERNEL_NAME;

    #[test]
    fn ptx_contains_entry_test() {
        let entry = format!(".entry {}", KERNEL_NAME);
        assert!(PTX.contains(&entry));
    }
}
