//! # bazaar-sim
//!
//! **Reference occupancy simulation driving a Bazaar matchmaker.**
//!
//! Houses request living space, walkers (existing residents looking for a
//! home) and spawners (hypothetical residents) offer it. Each tick every
//! entity posts what it wants, one [`bazaar_broker::Matchmaker`] pairs them,
//! and the confirmations set walkers moving towards their new homes.
//!
//! Navigation is reduced to a fixed travel time: a walker arrives a
//! configured number of ticks after its match.

pub mod config;
pub mod entity;
pub mod world;

pub use config::{HouseConfig, SimulationConfig, SpawnerConfig, WalkerConfig};
pub use entity::{Entity, House, Spawner, Walker, WalkerState};
pub use world::{TickSummary, World};
