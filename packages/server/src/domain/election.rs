//! Admin election by majority vote.

use std::collections::{BTreeMap, BTreeSet};

use super::value_object::ClientId;

/// Result of casting a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The vote was counted but the candidate has not reached quorum.
    Recorded,
    /// The candidate reached quorum and became admin.
    Elected {
        admin_id: ClientId,
        previous_admin_id: Option<ClientId>,
    },
}

impl VoteOutcome {
    pub fn is_elected(&self) -> bool {
        matches!(self, Self::Elected { .. })
    }
}

/// Snapshot of the election for status reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectionStatus {
    pub vote_counts: BTreeMap<ClientId, usize>,
    pub total_voters: usize,
    pub votes_needed: usize,
    pub admin_id: Option<ClientId>,
}

/// Votes per candidate and the current admin.
///
/// A voter is a member of at most one candidate's voter set.
#[derive(Debug, Clone, Default)]
pub struct Election {
    admin_id: Option<ClientId>,
    votes: BTreeMap<ClientId, BTreeSet<ClientId>>,
}

/// Majority among `total_connected` clients.
pub fn votes_needed(total_connected: usize) -> usize {
    total_connected / 2 + 1
}

impl Election {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admin id as recorded, without checking that the client is still connected.
    pub fn admin_id(&self) -> Option<ClientId> {
        self.admin_id
    }

    /// Move `voter`'s single vote to `candidate` and promote on quorum.
    ///
    /// The candidate is not checked for existence.
    pub fn vote(
        &mut self,
        voter: ClientId,
        candidate: ClientId,
        total_connected: usize,
    ) -> VoteOutcome {
        self.retract(&voter);
        let voters = self.votes.entry(candidate).or_default();
        voters.insert(voter);

        if voters.len() >= votes_needed(total_connected) {
            let previous_admin_id = self.promote(candidate);
            VoteOutcome::Elected {
                admin_id: candidate,
                previous_admin_id,
            }
        } else {
            VoteOutcome::Recorded
        }
    }

    /// Make `candidate` admin and clear every vote. Returns the previous admin.
    pub fn promote(&mut self, candidate: ClientId) -> Option<ClientId> {
        self.votes.clear();
        self.admin_id.replace(candidate)
    }

    /// Voters currently backing `candidate`.
    #[cfg(test)]
    pub fn voters_for(&self, candidate: &ClientId) -> BTreeSet<ClientId> {
        self.votes.get(candidate).cloned().unwrap_or_default()
    }

    pub fn status(&self, total_connected: usize) -> ElectionStatus {
        ElectionStatus {
            vote_counts: self
                .votes
                .iter()
                .map(|(candidate, voters)| (*candidate, voters.len()))
                .collect(),
            total_voters: total_connected,
            votes_needed: votes_needed(total_connected),
            admin_id: self.admin_id,
        }
    }

    fn retract(&mut self, voter: &ClientId) {
        for voters in self.votes.values_mut() {
            voters.remove(voter);
        }
        self.votes.retain(|_, voters| !voters.is_empty());
    }
}
