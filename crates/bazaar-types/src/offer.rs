//! Offers: a posted willingness to supply a quantity of a resource.

use serde::{Deserialize, Serialize};

use crate::{ParticipantId, ResourceKind};

/// An offer of `available` units of `kind`.
///
/// `provisioned` is true when the offering entity already exists in the
/// simulation, false for hypothetical supply such as a spawner that would
/// create the entity on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offer {
    pub kind: ResourceKind,
    pub available: u32,
    pub provisioned: bool,
}

impl Offer {
    #[must_use]
    pub fn new(kind: ResourceKind, available: u32, provisioned: bool) -> Self {
        Self {
            kind,
            available,
            provisioned,
        }
    }

    /// Occupancy supplied by an entity that already exists.
    #[must_use]
    pub fn occupancy(available: u32) -> Self {
        Self::new(ResourceKind::Occupancy, available, true)
    }

    /// Occupancy that would only exist once spawned.
    #[must_use]
    pub fn hypothetical_occupancy(available: u32) -> Self {
        Self::new(ResourceKind::Occupancy, available, false)
    }
}

/// A post held by the broker for the duration of one round: the item plus
/// the participant that confirmations are routed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posted<T> {
    pub item: T,
    pub source: ParticipantId,
}

impl<T> Posted<T> {
    #[must_use]
    pub fn new(item: T, source: ParticipantId) -> Self {
        Self { item, source }
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Offer {
    /// Random occupancy offer with 0..=8 units.
    pub fn random<R: rand::Rng>(rng: &mut R) -> Self {
        Self::new(
            ResourceKind::Occupancy,
            rng.gen_range(0..=8),
            rng.gen_bool(0.5),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_constructors() {
        let existing = Offer::occupancy(2);
        assert!(existing.provisioned);
        assert_eq!(existing.kind, ResourceKind::Occupancy);

        let spawnable = Offer::hypothetical_occupancy(4);
        assert!(!spawnable.provisioned);
        assert_eq!(spawnable.available, 4);
    }

    #[test]
    fn posted_keeps_source() {
        let source = ParticipantId::sequential(3);
        let post = Posted::new(Offer::occupancy(1), source);
        assert_eq!(post.source, source);
        assert_eq!(post.item.available, 1);
    }
}
