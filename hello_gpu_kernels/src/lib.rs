#![cfg_attr(
    target_os = "cuda",
    no_std,
    feature(register_attr),
    register_attr(nvvm_internal)
)]

extern crate alloc;

use cuda_std::kernel;

/// Name of the PTX entry point the host looks up in the compiled module.
pub const KERNEL_NAME: &str = "hello_world_kernel";

/// The line the kernel prints from the device.
pub const GREETING: &str = "Hello, World from GPU!";

/// The kernel launch should use a single block.
pub const GRID_SIZE: u32 = 1;

/// The kernel launch should use a single thread per block, so the greeting is
/// printed exactly once.
pub const BLOCK_SIZE: u32 = 1;

/// Prints [`GREETING`] to the device-side `printf` buffer.
///
/// The driver only copies that buffer to the host's stdout at a
/// synchronization point, so the host must synchronize before the line is
/// guaranteed to be visible.
#[kernel]
#[allow(improper_ctypes_definitions, clippy::missing_safety_doc)]
pub unsafe fn hello_world_kernel() {
    cuda_std::println!("{}", GREETING);
}

#[cfg(test)]
mod tests {
    use super::{BLOCK_SIZE, GREETING, GRID_SIZE, KERNEL_NAME};

    #[test]
    fn greeting_test() {
        assert_eq!(GREETING, "Hello, World from GPU!");
    }

    #[test]
    fn kernel_name_test() {
        assert_eq!(KERNEL_NAME, "hello_world_kernel");
    }

    #[test]
    fn single_thread_launch_test() {
        assert_eq!(GRID_SIZE, 1);
        assert_eq!(BLOCK_SIZE, 1);
    }
}
