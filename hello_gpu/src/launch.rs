use hello_gpu_kernels::{BLOCK_SIZE, GRID_SIZE};

/// Grid and block dimensions for a one-dimensional kernel launch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchConfig {
    pub grid: u32,
    pub block: u32,
    pub shared_mem_bytes: u32,
}

impl LaunchConfig {
    /// One block containing one thread.
    pub const fn greeter() -> Self {
        Self {
            grid: GRID_SIZE,
            block: BLOCK_SIZE,
            shared_mem_bytes: 0,
        }
    }

    /// Total number of threads the launch runs.
    pub fn threads(&self) -> u64 {
        u64::from(self.grid) * u64::from(self.block)
    }
}
