//! mix-core: stable foundation for the mix design workspace.
//!
//! Contains:
//! - units (uom SI types + constructors in engineering units)
//! - numeric (Real + tolerances + range checks + report rounding)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
