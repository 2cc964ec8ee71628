//! Route registry and reverse matching.

#[cfg(feature = "routers")]
pub use urlforge_routers::*;
