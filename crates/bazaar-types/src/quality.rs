//! The quantification contract between requests and offers.
//!
//! A [`Quantifier`] scores how well one offer satisfies one request on a
//! `0..=10` scale, where 0 means "incompatible, never match". The broker
//! treats it as an opaque pure function injected at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{BazaarError, Offer, Request, ResourceKind, Result, constants};

/// A validated quantification score in `0..=10`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Quality(u8);

impl Quality {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(constants::MAX_QUALITY);

    /// Validate a raw score. Scores above 10 are a bug in the quantifier and
    /// are rejected rather than clamped.
    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX.0 {
            return Err(BazaarError::QualityOutOfRange { value });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether the pair may be matched at all.
    #[must_use]
    pub fn is_compatible(self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<u8> for Quality {
    type Error = BazaarError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, constants::MAX_QUALITY)
    }
}

/// Pairs a request type with an offer type and scores them.
///
/// Implementations must be pure: the same arguments always give the same
/// score, and scoring has no side effects.
pub trait Quantifier {
    type Offer;
    type Request;

    /// Raw score in `0..=10`; the broker rejects anything larger.
    fn quantify(&self, request: &Self::Request, offer: &Self::Offer) -> u8;

    /// Resource kind of an offer, when the offer type carries one. Used by
    /// matchmakers bound to a single resource pool.
    fn offer_kind(&self, _offer: &Self::Offer) -> Option<ResourceKind> {
        None
    }

    /// Resource kind of a request, when the request type carries one.
    fn request_kind(&self, _request: &Self::Request) -> Option<ResourceKind> {
        None
    }
}

/// Scores [`Request`]/[`Offer`] pairs with [`Request::quantify`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardQuantifier;

impl Quantifier for StandardQuantifier {
    type Offer = Offer;
    type Request = Request;

    fn quantify(&self, request: &Request, offer: &Offer) -> u8 {
        request.quantify(offer)
    }

    fn offer_kind(&self, offer: &Offer) -> Option<ResourceKind> {
        Some(offer.kind)
    }

    fn request_kind(&self, request: &Request) -> Option<ResourceKind> {
        Some(request.kind())
    }
}

impl<Q: Quantifier + ?Sized> Quantifier for &Q {
    type Offer = Q::Offer;
    type Request = Q::Request;

    fn quantify(&self, request: &Self::Request, offer: &Self::Offer) -> u8 {
        (**self).quantify(request, offer)
    }

    fn offer_kind(&self, offer: &Self::Offer) -> Option<ResourceKind> {
        (**self).offer_kind(offer)
    }

    fn request_kind(&self, request: &Self::Request) -> Option<ResourceKind> {
        (**self).request_kind(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_rejects_above_max() {
        assert_eq!(Quality::new(10).unwrap(), Quality::MAX);
        let err = Quality::new(11).unwrap_err();
        assert!(matches!(err, BazaarError::QualityOutOfRange { value: 11 }));
    }

    #[test]
    fn zero_is_incompatible() {
        assert!(!Quality::ZERO.is_compatible());
        assert!(Quality::new(1).unwrap().is_compatible());
    }

    #[test]
    fn quality_display() {
        assert_eq!(format!("{}", Quality::new(7).unwrap()), "7/10");
    }

    #[test]
    fn standard_quantifier_delegates_to_request() {
        let request = Request::occupancy(2, 1).unwrap();
        let offer = Offer::occupancy(1);
        assert_eq!(
            StandardQuantifier.quantify(&request, &offer),
            request.quantify(&offer)
        );
    }

    #[test]
    fn standard_quantifier_reports_kinds() {
        let request = Request::new(ResourceKind::Labor, 1, 1).unwrap();
        assert_eq!(
            StandardQuantifier.request_kind(&request),
            Some(ResourceKind::Labor)
        );
        assert_eq!(
            StandardQuantifier.offer_kind(&Offer::occupancy(1)),
            Some(ResourceKind::Occupancy)
        );
    }

    #[test]
    fn quantifier_by_reference() {
        fn score<Q: Quantifier<Offer = Offer, Request = Request>>(q: Q) -> u8 {
            q.quantify(&Request::occupancy(1, 1).unwrap(), &Offer::occupancy(1))
        }
        let q = StandardQuantifier;
        assert_eq!(score(&q), 10);
    }
}
