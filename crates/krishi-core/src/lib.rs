#![forbid(unsafe_code)]

use sha2::{Digest, Sha256};

pub mod clock;
pub mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{EngineError, EngineErrorCode};

pub const CRATE_NAME: &str = "krishi-core";

pub const ENV_KRISHI_LOG_LEVEL: &str = "KRISHI_LOG_LEVEL";
pub const ENV_KRISHI_BIND: &str = "KRISHI_BIND";
pub const ENV_KRISHI_DEFAULT_LOCATION: &str = "KRISHI_DEFAULT_LOCATION";

/// Stable content hash used for synthetic-data seeds and opaque id suffixes.
#[must_use]
pub fn stable_hash_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Raw digest form of [`stable_hash_hex`] for callers that derive values
/// from individual bytes rather than the hex rendering.
#[must_use]
pub fn stable_hash_bytes(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}
