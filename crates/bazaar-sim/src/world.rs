//! The world: entity table, one occupancy matchmaker, and the tick loop.
//!
//! ```text
//! tick():
//!   1. every entity posts its offer/request (ascending id order)
//!   2. matchmaker.match_round(entities)
//!   3. spawners turn confirmations into walkers
//!   4. walkers advance; arrivals move into their houses
//! ```
//!
//! Ids are handed out from a counter, so two worlds built from the same
//! config evolve identically.

use std::collections::BTreeMap;

use bazaar_broker::Matchmaker;
use bazaar_types::{
    MatchmakerConfig, ParticipantId, ResourceKind, Result, RoundReport, StandardQuantifier,
};
use serde::Serialize;

use crate::{Entity, House, SimulationConfig, Spawner, Walker};

/// What happened during one tick.
#[derive(Debug, Clone, Serialize)]
pub struct TickSummary {
    pub report: RoundReport,
    /// Walkers created by spawners this tick.
    pub spawned: usize,
    /// Walkers that reached their destination this tick.
    pub arrivals: usize,
    /// Residents that moved in this tick.
    pub housed: u32,
    /// Residents that arrived to find no room left.
    pub turned_away: u32,
}

/// Entities plus the broker they trade through.
pub struct World {
    entities: BTreeMap<ParticipantId, Entity>,
    matchmaker: Matchmaker<StandardQuantifier>,
    next_id: u64,
    travel_ticks: u32,
    min_household: u32,
}

impl World {
    /// An empty world trading occupancy only.
    #[must_use]
    pub fn new(travel_ticks: u32, min_household: u32) -> Self {
        Self::with_matchmaker_config(
            travel_ticks,
            min_household,
            MatchmakerConfig::for_resource(ResourceKind::Occupancy),
        )
    }

    /// An empty world whose matchmaker uses `config`.
    #[must_use]
    pub fn with_matchmaker_config(
        travel_ticks: u32,
        min_household: u32,
        config: MatchmakerConfig,
    ) -> Self {
        Self {
            entities: BTreeMap::new(),
            matchmaker: Matchmaker::with_config(StandardQuantifier, config),
            next_id: 0,
            travel_ticks,
            min_household,
        }
    }

    /// A world populated from `config`: houses first, then walkers, then
    /// spawners.
    #[must_use]
    pub fn from_config(config: &SimulationConfig) -> Self {
        let mut world = Self::new(config.travel_ticks, config.min_household);
        for house in &config.houses {
            world.add_house(house.capacity, house.occupants);
        }
        for walker in &config.walkers {
            world.add_walker(walker.household);
        }
        for spawner in &config.spawners {
            world.add_spawner(spawner.household);
        }
        world
    }

    fn insert(&mut self, entity: Entity) -> ParticipantId {
        self.next_id += 1;
        let id = ParticipantId::sequential(self.next_id);
        self.entities.insert(id, entity);
        id
    }

    pub fn add_house(&mut self, capacity: u32, occupants: u32) -> ParticipantId {
        self.insert(Entity::House(House::new(capacity, occupants)))
    }

    pub fn add_walker(&mut self, household: u32) -> ParticipantId {
        self.insert(Entity::Walker(Walker::homeless(household, self.travel_ticks)))
    }

    pub fn add_spawner(&mut self, household: u32) -> ParticipantId {
        self.insert(Entity::Spawner(Spawner::new(household)))
    }

    /// Remove an entity, e.g. a demolished house. Houses stop waiting for a
    /// removed walker; walkers bound for a removed house are stranded on
    /// arrival.
    pub fn remove(&mut self, id: ParticipantId) -> Option<Entity> {
        let removed = self.entities.remove(&id)?;
        if matches!(removed, Entity::Walker(_)) {
            for entity in self.entities.values_mut() {
                if let Entity::House(house) = entity {
                    house.forget(id);
                }
            }
        }
        Some(removed)
    }

    /// Run one round.
    ///
    /// If any entity fails to post, the partial round is discarded and the
    /// error returned; nothing is matched or moved.
    pub fn tick(&mut self) -> Result<TickSummary> {
        // 1. Post
        if let Err(err) = self.post_all() {
            self.matchmaker.discard_round();
            return Err(err);
        }

        // 2. Match
        let report = self.matchmaker.match_round(&mut self.entities)?;

        // 3. Spawn
        let orders: Vec<(ParticipantId, u32, ParticipantId)> = self
            .entities
            .iter_mut()
            .filter_map(|(&id, entity)| match entity {
                Entity::Spawner(spawner) => Some((id, spawner)),
                _ => None,
            })
            .flat_map(|(spawner_id, spawner)| {
                let household = spawner.household;
                spawner
                    .take_pending()
                    .into_iter()
                    .map(move |destination| (spawner_id, household, destination))
            })
            .collect();
        let spawned = orders.len();
        for (spawner_id, household, destination) in orders {
            let walker = Walker::bound_for(household, destination, self.travel_ticks);
            let id = self.insert(Entity::Walker(walker));
            // The house was confirmed against the spawner, not this walker.
            if let Some(Entity::House(house)) = self.entities.get_mut(&destination) {
                house.retarget(spawner_id, id);
            }
            tracing::debug!(walker = %id, house = %destination, household, "Walker spawned");
        }

        // 4. Move
        let arrived: Vec<(ParticipantId, ParticipantId)> = self
            .entities
            .iter_mut()
            .filter_map(|(&id, entity)| match entity {
                Entity::Walker(walker) => walker.advance().map(|dest| (id, dest)),
                _ => None,
            })
            .collect();

        let mut arrivals = 0;
        let mut housed = 0;
        let mut turned_away = 0;
        for (walker_id, destination) in arrived {
            let household = match self.entities.get(&walker_id) {
                Some(Entity::Walker(walker)) => walker.household,
                _ => continue,
            };
            if let Some(Entity::House(house)) = self.entities.get_mut(&destination) {
                let accepted = house.receive(walker_id, household);
                housed += accepted;
                turned_away += household - accepted;
                arrivals += 1;
                self.entities.remove(&walker_id);
                tracing::debug!(
                    walker = %walker_id,
                    house = %destination,
                    accepted,
                    "Walker moved in"
                );
            } else if let Some(Entity::Walker(walker)) = self.entities.get_mut(&walker_id) {
                walker.strand();
                tracing::warn!(
                    walker = %walker_id,
                    house = %destination,
                    "Destination vanished, walker is homeless again"
                );
            }
        }

        Ok(TickSummary {
            report,
            spawned,
            arrivals,
            housed,
            turned_away,
        })
    }

    fn post_all(&mut self) -> Result<()> {
        for (&id, entity) in &self.entities {
            match entity {
                Entity::House(house) => {
                    if let Some(request) = house.wants(self.min_household) {
                        self.matchmaker.post_request(request, id)?;
                    }
                }
                Entity::Walker(walker) => {
                    if let Some(offer) = walker.wants() {
                        self.matchmaker.post_offer(offer, id)?;
                    }
                }
                Entity::Spawner(spawner) => {
                    self.matchmaker.post_offer(spawner.wants(), id)?;
                }
            }
        }
        Ok(())
    }

    // =================================================================
    // Inspection
    // =================================================================

    #[must_use]
    pub fn entity(&self, id: ParticipantId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn houses(&self) -> impl Iterator<Item = (ParticipantId, &House)> {
        self.entities
            .iter()
            .filter_map(|(&id, e)| e.as_house().map(|h| (id, h)))
    }

    pub fn walkers(&self) -> impl Iterator<Item = (ParticipantId, &Walker)> {
        self.entities
            .iter()
            .filter_map(|(&id, e)| e.as_walker().map(|w| (id, w)))
    }

    /// Residents living in houses.
    #[must_use]
    pub fn population(&self) -> u32 {
        self.houses().map(|(_, h)| h.occupants()).sum()
    }

    /// Total free space across houses.
    #[must_use]
    pub fn vacancies(&self) -> u32 {
        self.houses().map(|(_, h)| h.free()).sum()
    }

    #[must_use]
    pub fn matchmaker(&self) -> &Matchmaker<StandardQuantifier> {
        &self.matchmaker
    }
}
