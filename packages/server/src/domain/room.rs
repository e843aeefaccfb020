//! Room aggregate: the registry, the playback state and the election of the
//! single watch room, plus the write-permission policy that ties them together.

use super::{
    election::{Election, ElectionStatus, VoteOutcome},
    playback::{PlaybackMutation, PlaybackState},
    registry::{Client, ConnectionRegistry},
    value_object::{ClientId, Nickname, RoomId, Timestamp},
};

/// Priority of a client's writes. Lower wins.
pub type Weight = u64;

/// Weight of an absent (or disconnected) previous writer: anyone may override it.
pub const UNBOUNDED_WEIGHT: Weight = Weight::MAX;

/// Nickname before and after a rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknameChange {
    pub client_id: ClientId,
    pub old: Nickname,
    pub new: Nickname,
}

/// The watch room.
///
/// `last_update_by` and the admin id are stored as plain ids and resolved
/// through the registry when read; an id with no live client counts as absent.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub created_at: Timestamp,
    registry: ConnectionRegistry,
    playback: PlaybackState,
    election: Election,
}

impl Room {
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            created_at,
            registry: ConnectionRegistry::new(),
            playback: PlaybackState::new(created_at),
            election: Election::new(),
        }
    }

    // ========================================
    // Registry
    // ========================================

    pub fn register_client(&mut self, connected_at: Timestamp) -> Client {
        self.registry.register(connected_at)
    }

    pub fn unregister_client(&mut self, client_id: &ClientId) -> Option<Client> {
        self.registry.unregister(client_id)
    }

    pub fn client(&self, client_id: &ClientId) -> Option<&Client> {
        self.registry.lookup(client_id)
    }

    pub fn is_connected(&self, client_id: &ClientId) -> bool {
        self.registry.contains(client_id)
    }

    pub fn clients(&self) -> Vec<Client> {
        self.registry.snapshot()
    }

    pub fn client_count(&self) -> usize {
        self.registry.len()
    }

    pub fn client_ids(&self) -> Vec<ClientId> {
        self.registry.ids()
    }

    pub fn client_ids_except(&self, excluded: &ClientId) -> Vec<ClientId> {
        self.registry
            .ids()
            .into_iter()
            .filter(|id| id != excluded)
            .collect()
    }

    /// Rename a client. `None` resets to the default `User<id>` nickname.
    pub fn rename_client(
        &mut self,
        client_id: &ClientId,
        requested: Option<Nickname>,
    ) -> Option<NicknameChange> {
        let new = requested.unwrap_or_else(|| Nickname::default_for(*client_id));
        let old = self.registry.rename(client_id, new.clone())?;
        Some(NicknameChange {
            client_id: *client_id,
            old,
            new,
        })
    }

    // ========================================
    // Playback
    // ========================================

    pub fn playback(&self) -> PlaybackState {
        self.playback.clone()
    }

    /// Admin id if the admin is still connected.
    pub fn admin_id(&self) -> Option<ClientId> {
        self.election
            .admin_id()
            .filter(|id| self.registry.contains(id))
    }

    /// Admin weighs 0, everybody else weighs their id.
    pub fn weight(&self, client_id: &ClientId) -> Weight {
        if self.admin_id() == Some(*client_id) {
            0
        } else {
            client_id.value()
        }
    }

    /// Weight of the last accepted writer, unbounded if absent.
    fn owner_weight(&self) -> Weight {
        self.playback
            .last_update_by()
            .filter(|id| self.registry.contains(id))
            .map(|id| self.weight(&id))
            .unwrap_or(UNBOUNDED_WEIGHT)
    }

    /// Whether `requester` may change the playback state right now.
    ///
    /// Any request passes while fewer than two clients are connected. Otherwise
    /// the requester must weigh no more than the last accepted writer. A
    /// low-id client can therefore keep higher ids out until an admin is elected.
    pub fn can_update(&self, requester: &ClientId) -> bool {
        if self.registry.len() < 2 {
            return true;
        }
        self.weight(requester) <= self.owner_weight()
    }

    /// Apply `mutation` if permitted. Returns whether it was accepted.
    pub fn try_update(
        &mut self,
        requester: ClientId,
        mutation: PlaybackMutation,
        now: Timestamp,
    ) -> bool {
        if !self.can_update(&requester) {
            return false;
        }
        self.playback.apply(mutation, requester, now);
        true
    }

    /// Background time passage while playing. Bypasses the permission check.
    pub fn advance_playback(&mut self, seconds: f64) -> bool {
        self.playback.advance(seconds)
    }

    // ========================================
    // Election
    // ========================================

    pub fn cast_vote(&mut self, voter: ClientId, candidate: ClientId) -> VoteOutcome {
        let total = self.registry.len();
        self.election.vote(voter, candidate, total)
    }

    pub fn election_status(&self) -> ElectionStatus {
        let mut status = self.election.status(self.registry.len());
        status.admin_id = self.admin_id();
        status
    }
}
