//! System-wide constants for the Bazaar matchmaking engine.

/// Highest score a quantifier may return.
pub const MAX_QUALITY: u8 = 10;

/// Score reached once supply meets or exceeds the desired quantity.
pub const SATURATED_QUALITY: u8 = 9;

/// Extra point awarded to offers from entities that already exist.
pub const PROVISIONED_BONUS: u8 = 1;

/// Default bound on posts per side in a single round. The solver's table
/// is quadratic in memory and cubic in time in this bound.
pub const MAX_POSTS_PER_ROUND: usize = 256;

/// Default number of rounds a walker needs to reach its destination.
pub const DEFAULT_TRAVEL_TICKS: u32 = 3;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Bazaar";
