//! Protocol fee arithmetic.
//!
//! Every deposit is split once: a fixed 20/100 cut accrues to the protocol
//! balance and the remainder becomes the builder share pushed onto the
//! lock queue. Division truncates toward zero and the remainder stays on
//! the builder side, so `protocol_cut + net_amount == gross` holds exactly
//! for every input.

use stakegate_types::Value;
use stakegate_types::constants::{FEE_RATE_DENOMINATOR, FEE_RATE_NUMERATOR};

/// The two sides of one deposit split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    /// Protocol share: `floor(gross * 20 / 100)`.
    pub protocol_cut: Value,
    /// Builder share: everything the cut left behind.
    pub net_amount: Value,
}

/// Split a gross deposit amount into protocol cut and builder share.
///
/// Works for the full `Value` range: the cut is computed as
/// `(gross / den) * num + ((gross % den) * num) / den`, which keeps every
/// intermediate below `gross` because `num < den`.
#[must_use]
pub fn split(gross: Value) -> FeeSplit {
    let num = Value::from(FEE_RATE_NUMERATOR);
    let den = Value::from(FEE_RATE_DENOMINATOR);
    let quotient = gross / den;
    let remainder = gross % den;
    let protocol_cut = quotient * num + (remainder * num) / den;
    // protocol_cut <= gross since num < den, the subtraction is exact
    let net_amount = gross - protocol_cut;
    FeeSplit {
        protocol_cut,
        net_amount,
    }
}
