pub mod confirmer;
mod error;
pub mod launch;
pub mod runtime;

pub use error::SmokeError;
pub use hello_gpu_kernels::GREETING;
