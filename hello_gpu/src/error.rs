use cust::error::CudaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmokeError {
    #[error("CUDA runtime error: {0}")]
    Cuda(#[from] CudaError),
    #[error("failed to write to stdout: {0}")]
    Io(#[from] std::io::Error),
}
