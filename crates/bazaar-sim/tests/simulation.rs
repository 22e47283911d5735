//! End-to-end simulation tests: posting, matching, spawning and travel over
//! several ticks.

use bazaar_sim::{Entity, SimulationConfig, World, WalkerState};
use bazaar_types::{BazaarError, MatchmakerConfig, ParticipantId, ResourceKind};

fn pid(n: u64) -> ParticipantId {
    ParticipantId::sequential(n)
}

fn run(world: &mut World, ticks: u32) {
    for _ in 0..ticks {
        world.tick().unwrap();
    }
}

#[test]
fn walker_arrives_after_travel_time() {
    let mut world = World::new(3, 1);
    let house = world.add_house(4, 0);
    let walker = world.add_walker(2);

    let first = world.tick().unwrap();
    assert_eq!(first.report.matched(), 1);
    assert_eq!(first.report.counterpart_of_request(house), Some(walker));
    assert_eq!(first.arrivals, 0);

    // Awaiting house and travelling walker both stay quiet.
    let second = world.tick().unwrap();
    assert_eq!(second.report.requests_posted, 0);
    assert_eq!(second.report.offers_posted, 0);
    assert_eq!(second.arrivals, 0);

    let third = world.tick().unwrap();
    assert_eq!(third.arrivals, 1);
    assert_eq!(third.housed, 2);
    assert_eq!(world.population(), 2);
    assert!(world.entity(walker).is_none());
    assert_eq!(world.walkers().count(), 0);
}

#[test]
fn provisioned_walker_beats_spawner() {
    let mut world = World::new(2, 1);
    let house = world.add_house(2, 0);
    let walker = world.add_walker(2);
    world.add_spawner(2);

    let summary = world.tick().unwrap();
    assert_eq!(summary.report.offers_posted, 2);
    assert_eq!(summary.report.counterpart_of_request(house), Some(walker));
    assert_eq!(summary.report.pairings[0].quality.value(), 10);
    assert_eq!(summary.spawned, 0);
}

#[test]
fn spawner_creates_bound_walker() {
    let mut world = World::new(2, 1);
    let house = world.add_house(3, 0);
    let spawner = world.add_spawner(1);

    let summary = world.tick().unwrap();
    assert_eq!(summary.report.counterpart_of_request(house), Some(spawner));
    assert_eq!(summary.spawned, 1);

    // The new walker took the next id and is what the house now awaits.
    let walker = pid(3);
    let Some(Entity::Walker(w)) = world.entity(walker) else {
        panic!("spawned walker missing");
    };
    assert_eq!(
        w.state,
        WalkerState::Travelling {
            destination: house,
            ticks_left: 1
        }
    );
    let Some(Entity::House(h)) = world.entity(house) else {
        panic!("house missing");
    };
    assert_eq!(h.awaiting().copied().collect::<Vec<_>>(), vec![walker]);

    let summary = world.tick().unwrap();
    assert_eq!(summary.arrivals, 1);
    assert_eq!(world.population(), 1);
}

#[test]
fn oversized_household_is_capped() {
    let mut world = World::new(1, 1);
    let house = world.add_house(2, 0);
    world.add_spawner(3);

    let summary = world.tick().unwrap();
    assert_eq!(summary.spawned, 1);
    assert_eq!(summary.arrivals, 1);
    assert_eq!(summary.housed, 2);
    assert_eq!(summary.turned_away, 1);

    let Some(Entity::House(h)) = world.entity(house) else {
        panic!("house missing");
    };
    assert!(h.is_full());
}

#[test]
fn walker_is_stranded_when_house_disappears() {
    let mut world = World::new(2, 1);
    let house = world.add_house(4, 0);
    let walker = world.add_walker(1);

    world.tick().unwrap();
    assert!(world.remove(house).is_some());

    let summary = world.tick().unwrap();
    assert_eq!(summary.arrivals, 0);
    let Some(Entity::Walker(w)) = world.entity(walker) else {
        panic!("walker missing");
    };
    assert_eq!(w.state, WalkerState::Homeless);

    // Back on the market next tick.
    let summary = world.tick().unwrap();
    assert_eq!(summary.report.offers_posted, 1);
    assert_eq!(summary.report.requests_posted, 0);
}

#[test]
fn removed_walker_releases_house() {
    let mut world = World::new(5, 1);
    let house = world.add_house(4, 0);
    let walker = world.add_walker(1);

    world.tick().unwrap();
    world.remove(walker);

    let summary = world.tick().unwrap();
    assert_eq!(summary.report.requests_posted, 1);
    assert_eq!(summary.report.counterpart_of_request(house), None);
}

#[test]
fn default_town_fills_without_overflowing() {
    let config = SimulationConfig::default();
    let mut world = World::from_config(&config);
    let start = world.population();

    for _ in 0..config.rounds {
        let summary = world.tick().unwrap();
        assert!(summary.report.matched() <= summary.report.requests_posted);
        for (_, house) in world.houses() {
            assert!(house.occupants() <= house.capacity());
        }
    }

    assert!(world.population() > start);
    assert_eq!(world.vacancies(), 0);
}

#[test]
fn identical_configs_evolve_identically() {
    let config = SimulationConfig::default();
    let mut a = World::from_config(&config);
    let mut b = World::from_config(&config);

    for _ in 0..config.rounds {
        let left = a.tick().unwrap();
        let right = b.tick().unwrap();
        assert_eq!(left.report.matching_root, right.report.matching_root);
        assert_eq!(left.report.pairings, right.report.pairings);
        assert_eq!(left.housed, right.housed);
    }
    assert_eq!(a.population(), b.population());
}

#[test]
fn world_from_json_config() {
    let config = SimulationConfig::from_json(
        r#"{
            "rounds": 4,
            "travel_ticks": 1,
            "houses": [{ "capacity": 2 }],
            "walkers": [{ "household": 2 }],
            "spawners": []
        }"#,
    )
    .unwrap();
    assert_eq!(config.min_household, 1);

    let mut world = World::from_config(&config);
    run(&mut world, config.rounds);
    assert_eq!(world.population(), 2);
    assert_eq!(world.walkers().count(), 0);
}

#[test]
fn failed_posting_leaves_nothing_for_next_tick() {
    let config = MatchmakerConfig {
        resource: Some(ResourceKind::Occupancy),
        max_posts_per_round: 1,
    };
    let mut world = World::with_matchmaker_config(1, 1, config);
    let first = world.add_house(2, 0);
    let second = world.add_house(2, 0);
    world.add_walker(1);

    // Two requests against a one-post budget.
    let err = world.tick().unwrap_err();
    assert!(matches!(err, BazaarError::RoundFull { .. }));
    assert_eq!(world.matchmaker().pending_requests(), 0);
    assert_eq!(world.matchmaker().pending_offers(), 0);

    // Free a slot: the remaining house posts exactly once.
    world.remove(second);
    let summary = world.tick().unwrap();
    assert_eq!(summary.report.requests_posted, 1);
    assert!(summary.report.counterpart_of_request(first).is_some());
}
