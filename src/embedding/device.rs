use candle_core::Device;
use tracing::{debug, warn};

use super::error::EmbeddingError;

/// Picks the first usable accelerator the crate was built for, else the CPU.
pub fn select_device() -> Result<Device, EmbeddingError> {
    #[cfg(any(feature = "metal", feature = "cuda"))]
    let mut failures: Vec<String> = Vec::new();

    #[cfg(not(any(feature = "metal", feature = "cuda")))]
    let failures: Vec<String> = Vec::new();

    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            tracing::info!("Encoding on Metal GPU");
            return Ok(device);
        }
        Err(e) => failures.push(format!("metal: {e}")),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            tracing::info!("Encoding on CUDA GPU");
            return Ok(device);
        }
        Err(e) => failures.push(format!("cuda: {e}")),
    }

    if failures.is_empty() {
        debug!("No GPU backend compiled, encoding on CPU");
    } else {
        warn!(reason = %failures.join("; "), "GPU unavailable, falling back to CPU");
    }

    Ok(Device::Cpu)
}
