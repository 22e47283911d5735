//! Simulation entities and their side of the matchmaking contract.

use std::collections::BTreeSet;

use bazaar_broker::Participant;
use bazaar_types::{Offer, ParticipantId, Request};

// ---------------------------------------------------------------------------
// House
// ---------------------------------------------------------------------------

/// A dwelling that requests occupancy until it is full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    capacity: u32,
    occupants: u32,
    /// Walkers matched to this house that have not arrived yet.
    awaiting: BTreeSet<ParticipantId>,
}

impl House {
    #[must_use]
    pub fn new(capacity: u32, occupants: u32) -> Self {
        Self {
            capacity,
            occupants: occupants.min(capacity),
            awaiting: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Residents living here, never above capacity.
    #[must_use]
    pub fn occupants(&self) -> u32 {
        self.occupants
    }

    #[must_use]
    pub fn free(&self) -> u32 {
        self.capacity - self.occupants
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.free() == 0
    }

    /// Walkers on their way here.
    pub fn awaiting(&self) -> impl Iterator<Item = &ParticipantId> {
        self.awaiting.iter()
    }

    /// This round's request, if the house has room and nobody is already
    /// on the way.
    #[must_use]
    pub fn wants(&self, min_household: u32) -> Option<Request> {
        if !self.awaiting.is_empty() || self.is_full() {
            return None;
        }
        let free = self.free();
        Request::occupancy(free, min_household.min(free)).ok()
    }

    /// Move an arriving household in. Returns how many found room.
    pub fn receive(&mut self, walker: ParticipantId, household: u32) -> u32 {
        self.awaiting.remove(&walker);
        let accepted = household.min(self.free());
        self.occupants += accepted;
        accepted
    }

    /// Expect `walker` in place of `offerer`.
    pub fn retarget(&mut self, offerer: ParticipantId, walker: ParticipantId) {
        if self.awaiting.remove(&offerer) {
            self.awaiting.insert(walker);
        }
    }

    /// Stop waiting for a walker that will never come.
    pub fn forget(&mut self, walker: ParticipantId) {
        self.awaiting.remove(&walker);
    }
}

impl Participant<Offer, Request> for House {
    // Houses never offer.
    fn confirm_matchmaking_offer(&mut self, _offer: &Offer, _requester: ParticipantId) {}

    fn confirm_matchmaking_request(&mut self, _request: &Request, offerer: ParticipantId) {
        self.awaiting.insert(offerer);
    }
}

// ---------------------------------------------------------------------------
// Walker
// ---------------------------------------------------------------------------

/// Where a walker is in its search for a home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerState {
    Homeless,
    Travelling {
        destination: ParticipantId,
        ticks_left: u32,
    },
}

/// A household that already exists and is looking for a house.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walker {
    pub household: u32,
    pub state: WalkerState,
    travel_ticks: u32,
}

impl Walker {
    #[must_use]
    pub fn homeless(household: u32, travel_ticks: u32) -> Self {
        Self {
            household,
            state: WalkerState::Homeless,
            travel_ticks,
        }
    }

    /// A walker created already bound to `destination`.
    #[must_use]
    pub fn bound_for(household: u32, destination: ParticipantId, travel_ticks: u32) -> Self {
        Self {
            household,
            state: WalkerState::Travelling {
                destination,
                ticks_left: travel_ticks,
            },
            travel_ticks,
        }
    }

    /// Homeless walkers offer their household as existing occupancy.
    #[must_use]
    pub fn wants(&self) -> Option<Offer> {
        match self.state {
            WalkerState::Homeless => Some(Offer::occupancy(self.household)),
            WalkerState::Travelling { .. } => None,
        }
    }

    /// Advance one tick. Returns the destination on arrival.
    pub fn advance(&mut self) -> Option<ParticipantId> {
        let WalkerState::Travelling {
            destination,
            ticks_left,
        } = &mut self.state
        else {
            return None;
        };
        *ticks_left = ticks_left.saturating_sub(1);
        (*ticks_left == 0).then_some(*destination)
    }

    /// Give up on the current destination.
    pub fn strand(&mut self) {
        self.state = WalkerState::Homeless;
    }
}

impl Participant<Offer, Request> for Walker {
    fn confirm_matchmaking_offer(&mut self, _offer: &Offer, requester: ParticipantId) {
        self.state = WalkerState::Travelling {
            destination: requester,
            ticks_left: self.travel_ticks,
        };
    }

    // Walkers never request.
    fn confirm_matchmaking_request(&mut self, _request: &Request, _offerer: ParticipantId) {}
}

// ---------------------------------------------------------------------------
// Spawner
// ---------------------------------------------------------------------------

/// Offers hypothetical households and creates a walker for each match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawner {
    pub household: u32,
    /// Houses that accepted a household this round, in confirmation order.
    pending: Vec<ParticipantId>,
}

impl Spawner {
    #[must_use]
    pub fn new(household: u32) -> Self {
        Self {
            household,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn wants(&self) -> Offer {
        Offer::hypothetical_occupancy(self.household)
    }

    /// Destinations to spawn walkers for.
    pub fn take_pending(&mut self) -> Vec<ParticipantId> {
        std::mem::take(&mut self.pending)
    }
}

impl Participant<Offer, Request> for Spawner {
    fn confirm_matchmaking_offer(&mut self, _offer: &Offer, requester: ParticipantId) {
        self.pending.push(requester);
    }

    fn confirm_matchmaking_request(&mut self, _request: &Request, _offerer: ParticipantId) {}
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Anything living in the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    House(House),
    Walker(Walker),
    Spawner(Spawner),
}

impl Entity {
    #[must_use]
    pub fn as_house(&self) -> Option<&House> {
        match self {
            Self::House(h) => Some(h),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_walker(&self) -> Option<&Walker> {
        match self {
            Self::Walker(w) => Some(w),
            _ => None,
        }
    }
}

impl Participant<Offer, Request> for Entity {
    fn confirm_matchmaking_offer(&mut self, offer: &Offer, requester: ParticipantId) {
        match self {
            Self::House(h) => h.confirm_matchmaking_offer(offer, requester),
            Self::Walker(w) => w.confirm_matchmaking_offer(offer, requester),
            Self::Spawner(s) => s.confirm_matchmaking_offer(offer, requester),
        }
    }

    fn confirm_matchmaking_request(&mut self, request: &Request, offerer: ParticipantId) {
        match self {
            Self::House(h) => h.confirm_matchmaking_request(request, offerer),
            Self::Walker(w) => w.confirm_matchmaking_request(request, offerer),
            Self::Spawner(s) => s.confirm_matchmaking_request(request, offerer),
        }
    }
}
