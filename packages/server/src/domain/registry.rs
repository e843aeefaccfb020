//! Connection registry: live clients keyed by their assigned id.

use std::collections::BTreeMap;

use super::value_object::{ClientId, Nickname, Timestamp};

/// A connected client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub nickname: Nickname,
    pub connected_at: Timestamp,
}

/// Owns the client records and id allocation.
///
/// Ids are handed out from 1 upwards and never reused. Because ids are
/// monotonic, iterating the map in key order is also insertion order.
#[derive(Debug, Clone)]
pub struct ConnectionRegistry {
    last_id: u64,
    clients: BTreeMap<ClientId, Client>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            last_id: 0,
            clients: BTreeMap::new(),
        }
    }

    /// Allocate the next id and store a client with the default nickname.
    pub fn register(&mut self, connected_at: Timestamp) -> Client {
        self.last_id += 1;
        let id = ClientId::new(self.last_id);
        let client = Client {
            id,
            nickname: Nickname::default_for(id),
            connected_at,
        };
        self.clients.insert(id, client.clone());
        client
    }

    /// Remove a client. Returns `None` if it was already gone.
    pub fn unregister(&mut self, client_id: &ClientId) -> Option<Client> {
        self.clients.remove(client_id)
    }

    pub fn lookup(&self, client_id: &ClientId) -> Option<&Client> {
        self.clients.get(client_id)
    }

    pub fn contains(&self, client_id: &ClientId) -> bool {
        self.clients.contains_key(client_id)
    }

    /// Replace a client's nickname, returning the previous one.
    pub fn rename(&mut self, client_id: &ClientId, nickname: Nickname) -> Option<Nickname> {
        self.clients
            .get_mut(client_id)
            .map(|client| std::mem::replace(&mut client.nickname, nickname))
    }

    pub fn snapshot(&self) -> Vec<Client> {
        self.clients.values().cloned().collect()
    }

    pub fn ids(&self) -> Vec<ClientId> {
        self.clients.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
