//! Embedded snapshot types stored in JSON columns.
//!
//! These are the denormalized read caches carried on users and teams. Every list is
//! keyed by id, and the mutation helpers are idempotent: appending an id that is
//! already present or removing one that is absent leaves the list unchanged.

use chrono::{DateTime, Utc};
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partial copy of a team (live or archived) embedded in a user's caches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSnapshot {
    pub id: Uuid,
    pub place: String,
    pub name: String,
    pub teamname: String,
    pub season_start: DateTime<Utc>,
    pub season_end: DateTime<Utc>,
    pub season_number: i32,
    pub verified: bool,
    pub designation: Option<Uuid>,
}

/// Partial copy of a user embedded in a team's `managers` or `players`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub guest: bool,
}

/// Ordered list of team snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TeamSnapshots(pub Vec<TeamSnapshot>);

/// Ordered list of user snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct UserSnapshots(pub Vec<UserSnapshot>);

/// Ordered list of document ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct IdList(pub Vec<Uuid>);

impl TeamSnapshots {
    pub fn contains(&self, id: Uuid) -> bool {
        self.0.iter().any(|t| t.id == id)
    }

    /// Appends the snapshot unless one with the same id is already present.
    ///
    /// Returns `true` when the list changed.
    pub fn push_unique(&mut self, snapshot: TeamSnapshot) -> bool {
        if self.contains(snapshot.id) {
            return false;
        }
        self.0.push(snapshot);
        true
    }

    /// Removes every snapshot with the given id, returning `true` when the list changed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t.id != id);
        before != self.0.len()
    }

    /// Overwrites the snapshot with a matching id, leaving the list untouched otherwise.
    pub fn refresh(&mut self, snapshot: &TeamSnapshot) -> bool {
        match self.0.iter_mut().find(|t| t.id == snapshot.id) {
            Some(existing) if existing != snapshot => {
                *existing = snapshot.clone();
                true
            }
            _ => false,
        }
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.0.iter().map(|t| t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl UserSnapshots {
    pub fn contains(&self, id: Uuid) -> bool {
        self.0.iter().any(|u| u.id == id)
    }

    pub fn push_unique(&mut self, snapshot: UserSnapshot) -> bool {
        if self.contains(snapshot.id) {
            return false;
        }
        self.0.push(snapshot);
        true
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.0.len();
        self.0.retain(|u| u.id != id);
        before != self.0.len()
    }

    pub fn refresh(&mut self, snapshot: &UserSnapshot) -> bool {
        match self.0.iter_mut().find(|u| u.id == snapshot.id) {
            Some(existing) if existing != snapshot => {
                *existing = snapshot.clone();
                true
            }
            _ => false,
        }
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.0.iter().map(|u| u.id).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IdList {
    pub fn contains(&self, id: Uuid) -> bool {
        self.0.contains(&id)
    }

    pub fn push_unique(&mut self, id: Uuid) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| *existing != id);
        before != self.0.len()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
