//! The matchmaker façade: one instance per isolated resource pool.
//!
//! ```text
//! post_offer / post_request (any number) -> match_round(directory) -> RoundReport
//! ```
//!
//! ## Round semantics
//!
//! `match_round` drains both buffers before doing anything else, so the
//! next round starts empty on every path, including errors. Scores are all
//! computed and validated before the first confirmation is delivered: a
//! quantifier bug aborts the round without any participant having been
//! told anything.

use bazaar_solver::{BipartiteGraph, compute_matching_root};
use bazaar_types::{
    BazaarError, MatchmakerConfig, Pairing, ParticipantId, Quality, Quantifier, ResourceKind,
    Result, RoundId, RoundReport, Side,
};
use chrono::Utc;

use crate::{ParticipantDirectory, RoundBuffer};

/// Collects one round of offers and requests and pairs them optimally.
pub struct Matchmaker<Q: Quantifier> {
    quantifier: Q,
    config: MatchmakerConfig,
    /// The round currently collecting posts.
    round: RoundId,
    offers: RoundBuffer<Q::Offer>,
    requests: RoundBuffer<Q::Request>,
}

impl<Q: Quantifier> Matchmaker<Q> {
    /// Create a matchmaker with the default configuration.
    #[must_use]
    pub fn new(quantifier: Q) -> Self {
        Self::with_config(quantifier, MatchmakerConfig::default())
    }

    /// Create a matchmaker with an explicit configuration.
    #[must_use]
    pub fn with_config(quantifier: Q, config: MatchmakerConfig) -> Self {
        Self {
            offers: RoundBuffer::with_capacity(Side::Offer, config.max_posts_per_round),
            requests: RoundBuffer::with_capacity(Side::Request, config.max_posts_per_round),
            quantifier,
            config,
            round: RoundId::default(),
        }
    }

    // =================================================================
    // Posting
    // =================================================================

    /// Post an offer for the current round on behalf of `source`.
    ///
    /// # Errors
    /// - `NilParticipant` if `source` is the nil handle
    /// - `WrongResource` if the pool is bound to another resource kind
    /// - `RoundFull` if the round already holds the maximum number of offers
    pub fn post_offer(&mut self, offer: Q::Offer, source: ParticipantId) -> Result<()> {
        if source.is_nil() {
            return Err(BazaarError::NilParticipant);
        }
        self.check_resource(self.quantifier.offer_kind(&offer))?;
        self.offers.push(offer, source)
    }

    /// Post a request for the current round on behalf of `source`.
    ///
    /// # Errors
    /// Same conditions as [`Matchmaker::post_offer`].
    pub fn post_request(&mut self, request: Q::Request, source: ParticipantId) -> Result<()> {
        if source.is_nil() {
            return Err(BazaarError::NilParticipant);
        }
        self.check_resource(self.quantifier.request_kind(&request))?;
        self.requests.push(request, source)
    }

    fn check_resource(&self, actual: Option<ResourceKind>) -> Result<()> {
        match (self.config.resource, actual) {
            (Some(expected), Some(actual)) if expected != actual => {
                Err(BazaarError::WrongResource { expected, actual })
            }
            _ => Ok(()),
        }
    }

    // =================================================================
    // Matching
    // =================================================================

    /// Match everything posted this round and deliver confirmations.
    ///
    /// ## Steps
    ///
    /// 1. Drain both buffers (they are empty afterwards, whatever happens)
    /// 2. Quantify every request against every offer; positive scores
    ///    become graph edges
    /// 3. Solve for the maximum-weight matching
    /// 4. For each matched pair, confirm the request to its poster naming the
    ///    offer's source, and the offer to its poster naming the request's
    ///    source
    ///
    /// A participant missing from `directory` is skipped and counted in
    /// [`RoundReport::undelivered`]; its counterpart is still confirmed.
    ///
    /// # Errors
    /// Returns `QualityOutOfRange` if the quantifier scores any pair above
    /// 10. No confirmation is delivered in that case.
    pub fn match_round<D>(&mut self, directory: &mut D) -> Result<RoundReport>
    where
        D: ParticipantDirectory<Q::Offer, Q::Request> + ?Sized,
    {
        let round = self.round;
        self.round = round.next();

        let requests = self.requests.drain();
        let offers = self.offers.drain();

        // 1. Build the graph from every scored pair
        let mut graph = BipartiteGraph::new(requests.len(), offers.len());
        for (ri, request) in requests.iter().enumerate() {
            for (oi, offer) in offers.iter().enumerate() {
                let raw = self.quantifier.quantify(&request.item, &offer.item);
                let quality = Quality::new(raw).inspect_err(|_| {
                    tracing::error!(
                        %round,
                        request_source = %request.source,
                        offer_source = %offer.source,
                        score = raw,
                        "Quantifier returned an out-of-range score, round discarded"
                    );
                })?;
                if quality.is_compatible() {
                    graph.add_edge(ri, oi, quality.value())?;
                }
            }
        }

        // 2. Solve
        let matching = graph.find_best_matching();
        let matching_root = compute_matching_root(&matching);

        let pairings = matching
            .iter()
            .map(|edge| {
                Ok(Pairing {
                    request_source: requests[edge.request].source,
                    offer_source: offers[edge.offer].source,
                    quality: Quality::new(edge.weight)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // 3. Deliver confirmations
        let mut undelivered = 0usize;
        for edge in &matching {
            let request = &requests[edge.request];
            let offer = &offers[edge.offer];

            if let Some(participant) = directory.participant_mut(request.source) {
                participant.confirm_matchmaking_request(&request.item, offer.source);
            } else {
                undelivered += 1;
                tracing::warn!(
                    %round,
                    participant = %request.source,
                    "Request confirmation undeliverable: participant gone"
                );
            }

            if let Some(participant) = directory.participant_mut(offer.source) {
                participant.confirm_matchmaking_offer(&offer.item, request.source);
            } else {
                undelivered += 1;
                tracing::warn!(
                    %round,
                    participant = %offer.source,
                    "Offer confirmation undeliverable: participant gone"
                );
            }

            tracing::debug!(
                %round,
                request_source = %request.source,
                offer_source = %offer.source,
                quality = edge.weight,
                "Pair matched"
            );
        }

        let report = RoundReport {
            round,
            total_quality: matching.total_weight(),
            pairings,
            requests_posted: requests.len(),
            offers_posted: offers.len(),
            undelivered,
            matching_root,
            completed_at: Utc::now(),
        };

        tracing::info!(
            %round,
            requests = report.requests_posted,
            offers = report.offers_posted,
            matched = report.matched(),
            total_quality = report.total_quality,
            matching_root = hex::encode(matching_root),
            "Round matched"
        );

        Ok(report)
    }

    /// Drop everything posted this round without matching it. The round id
    /// does not advance.
    pub fn discard_round(&mut self) {
        let requests = self.requests.drain().len();
        let offers = self.offers.drain().len();
        if requests + offers > 0 {
            tracing::warn!(round = %self.round, requests, offers, "Round discarded");
        }
    }

    // =================================================================
    // Accessors
    // =================================================================

    /// The round currently collecting posts.
    #[must_use]
    pub fn round(&self) -> RoundId {
        self.round
    }

    #[must_use]
    pub fn pending_offers(&self) -> usize {
        self.offers.len()
    }

    #[must_use]
    pub fn pending_requests(&self) -> usize {
        self.requests.len()
    }

    #[must_use]
    pub fn config(&self) -> &MatchmakerConfig {
        &self.config
    }

    #[must_use]
    pub fn quantifier(&self) -> &Q {
        &self.quantifier
    }
}

impl<Q: Quantifier + Default> Default for Matchmaker<Q> {
    fn default() -> Self {
        Self::new(Q::default())
    }
}
