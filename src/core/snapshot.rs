use super::store::{is_valid_weight, ObjectStore, PlacedObject};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Session snapshot persisted between page loads.
///
/// Serialized as `{"objects":[{"id","position","weight"}],"nextId","nextWeight"}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub objects: Vec<PlacedObject>,
    #[serde(default)]
    pub next_id: u32,
    #[serde(default)]
    pub next_weight: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot has the wrong shape: {0}")]
    Shape(&'static str),
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode stored JSON. Only the documented numeric and array fields are
    /// read; unknown fields are ignored and missing ones default.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(SnapshotError::Shape("top level is not an object"));
        }
        if value.get("objects").is_some_and(|o| !o.is_array()) {
            return Err(SnapshotError::Shape("objects is not an array"));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Drop entries that would break store invariants: non-finite
    /// positions, non-positive weights, repeated ids. `next_id` is raised
    /// past every surviving id.
    pub fn sanitized(mut self) -> Self {
        let mut seen = HashSet::new();
        self.objects
            .retain(|o| o.position.is_finite() && is_valid_weight(o.weight) && seen.insert(o.id));
        let floor = self
            .objects
            .iter()
            .map(|o| o.id.saturating_add(1))
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(floor);
        self
    }
}

impl ObjectStore {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            objects: self.objects().to_vec(),
            next_id: self.next_id(),
            next_weight: Some(self.next_weight()),
        }
    }

    /// Load a snapshot, sanitizing it first. Objects heavier than the
    /// policy allows are dropped, positions are clamped to the current
    /// plank and an out-of-policy next weight is redrawn.
    pub fn restore(&mut self, mut snapshot: Snapshot) {
        let policy = self.policy();
        snapshot.objects.retain(|o| policy.accepts(o.weight));
        let s = snapshot.sanitized();
        log::info!("[store] restored {} objects", s.objects.len());
        self.replace(s.objects, s.next_id, s.next_weight);
    }
}
