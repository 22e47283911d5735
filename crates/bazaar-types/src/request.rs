//! Requests: a posted desire for a quantity of a resource, with a hard floor.

use serde::{Deserialize, Serialize};

use crate::{BazaarError, Offer, ResourceKind, Result, constants};

/// A request for `desired` units of `kind`, accepting no fewer than
/// `minimum`.
///
/// Invariant: `0 < minimum <= desired`, enforced by [`Request::new`] and
/// on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RequestFields")]
pub struct Request {
    kind: ResourceKind,
    desired: u32,
    minimum: u32,
}

/// Wire shape of a [`Request`], validated before it becomes one.
#[derive(Deserialize)]
struct RequestFields {
    kind: ResourceKind,
    desired: u32,
    minimum: u32,
}

impl TryFrom<RequestFields> for Request {
    type Error = BazaarError;

    fn try_from(fields: RequestFields) -> Result<Self> {
        Self::new(fields.kind, fields.desired, fields.minimum)
    }
}

impl Request {
    /// Build a request, rejecting a zero minimum or a minimum above the
    /// desired quantity.
    pub fn new(kind: ResourceKind, desired: u32, minimum: u32) -> Result<Self> {
        if minimum == 0 {
            return Err(BazaarError::InvalidRequest {
                reason: "minimum quantity must be positive".to_string(),
            });
        }
        if minimum > desired {
            return Err(BazaarError::InvalidRequest {
                reason: format!("minimum {minimum} exceeds desired {desired}"),
            });
        }
        Ok(Self {
            kind,
            desired,
            minimum,
        })
    }

    pub fn occupancy(desired: u32, minimum: u32) -> Result<Self> {
        Self::new(ResourceKind::Occupancy, desired, minimum)
    }

    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    #[must_use]
    pub fn desired(&self) -> u32 {
        self.desired
    }

    #[must_use]
    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    /// Score how well `offer` satisfies this request, in `0..=10`.
    ///
    /// - 0 when the kinds differ or the offer cannot meet the minimum;
    /// - otherwise `min(9 * available / desired, 9)` with floor division,
    ///   which may itself be 0 for a tiny offer against a large desire;
    /// - plus one point for provisioned supply, capped at 10.
    #[must_use]
    pub fn quantify(&self, offer: &Offer) -> u8 {
        if offer.kind != self.kind || offer.available < self.minimum {
            return 0;
        }

        let saturated = u64::from(constants::SATURATED_QUALITY);
        let ratio = saturated * u64::from(offer.available) / u64::from(self.desired);
        let base = u8::try_from(ratio.min(saturated)).unwrap_or(constants::SATURATED_QUALITY);

        let bonus = if offer.provisioned {
            constants::PROVISIONED_BONUS
        } else {
            0
        };
        (base + bonus).min(constants::MAX_QUALITY)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Request {
    /// Random occupancy request with desired in 1..=8.
    pub fn random<R: rand::Rng>(rng: &mut R) -> Self {
        let desired = rng.gen_range(1..=8);
        let minimum = rng.gen_range(1..=desired);
        Self {
            kind: ResourceKind::Occupancy,
            desired,
            minimum,
        }
    }
}
