//! The participant contract and how confirmations find participants.
//!
//! Posts carry a [`ParticipantId`] handle, never a reference to the entity.
//! At delivery time the matchmaker looks the handle up in a
//! [`ParticipantDirectory`] -- typically the simulation's entity table --
//! and invokes the callbacks on whatever it finds.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use bazaar_types::ParticipantId;

/// Capability every object taking part in matchmaking exposes.
///
/// Each side learns only the identity of its counterpart, never the matched
/// quantity or score.
pub trait Participant<O, R> {
    /// An offer this participant posted was matched to `requester`.
    fn confirm_matchmaking_offer(&mut self, offer: &O, requester: ParticipantId);

    /// A request this participant posted was matched to `offerer`.
    fn confirm_matchmaking_request(&mut self, request: &R, offerer: ParticipantId);
}

impl<O, R, P: Participant<O, R> + ?Sized> Participant<O, R> for Box<P> {
    fn confirm_matchmaking_offer(&mut self, offer: &O, requester: ParticipantId) {
        (**self).confirm_matchmaking_offer(offer, requester);
    }

    fn confirm_matchmaking_request(&mut self, request: &R, offerer: ParticipantId) {
        (**self).confirm_matchmaking_request(request, offerer);
    }
}

/// Resolves participant handles for confirmation delivery.
pub trait ParticipantDirectory<O, R> {
    /// The live participant behind `id`, or `None` if it no longer exists.
    fn participant_mut(&mut self, id: ParticipantId) -> Option<&mut dyn Participant<O, R>>;
}

impl<O, R, P, S> ParticipantDirectory<O, R> for HashMap<ParticipantId, P, S>
where
    P: Participant<O, R>,
    S: BuildHasher,
{
    fn participant_mut(&mut self, id: ParticipantId) -> Option<&mut dyn Participant<O, R>> {
        self.get_mut(&id).map(|p| p as &mut dyn Participant<O, R>)
    }
}

impl<O, R, P> ParticipantDirectory<O, R> for BTreeMap<ParticipantId, P>
where
    P: Participant<O, R>,
{
    fn participant_mut(&mut self, id: ParticipantId) -> Option<&mut dyn Participant<O, R>> {
        self.get_mut(&id).map(|p| p as &mut dyn Participant<O, R>)
    }
}
