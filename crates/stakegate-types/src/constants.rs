//! System-wide constants for the StakeGate settlement engine.

/// Numerator of the protocol fee rate skimmed from every deposit.
pub const FEE_RATE_NUMERATOR: u64 = 20;

/// Denominator of the protocol fee rate.
pub const FEE_RATE_DENOMINATOR: u64 = 100;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "StakeGate";
