//! Wire-level value adapters.

mod boolean;

pub use boolean::{WireBoolean, WireFlavor};
