//! Change-tracked serialization.
//!
//! `update` marks the shape dirty; the next `cached_snapshot` call bumps the
//! revision and stores a fresh snapshot. Reading without an intervening
//! mutation returns the stored snapshot unchanged.

use serde::{Deserialize, Serialize};
use shapekit_core::{Result, ShapeError};
use std::sync::Arc;
use tracing::{trace, warn};

use crate::kind::ShapeKind;
use crate::props::{PropsPatch, ShapeProps};
use crate::shape::Shape;

/// Plain structural record of a shape: its props plus type tag and revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSnapshot {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub props: ShapeProps,
    #[serde(default)]
    pub revision: u64,
}

impl ShapeSnapshot {
    pub fn id(&self) -> &str {
        &self.props.id
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SnapshotCache {
    pub(crate) revision: u64,
    pub(crate) is_dirty: bool,
    pub(crate) last: Option<Arc<ShapeSnapshot>>,
}

impl SnapshotCache {
    /// A cache already holding `snapshot`, continuing from its revision.
    pub(crate) fn primed(snapshot: ShapeSnapshot) -> Self {
        Self {
            revision: snapshot.revision,
            is_dirty: false,
            last: Some(Arc::new(snapshot)),
        }
    }
}

impl Shape {
    /// Rehydrates a shape from a record, priming the cache with it so that
    /// loading does not bump the revision.
    pub fn from_snapshot(kind: Arc<dyn ShapeKind>, snapshot: ShapeSnapshot) -> Result<Self> {
        if snapshot.kind != kind.type_name() {
            return Err(ShapeError::KindMismatch {
                expected: kind.type_name().to_string(),
                actual: snapshot.kind,
            }
            .into());
        }
        let props = snapshot.props.clone();
        Ok(Self::from_parts(kind, props, SnapshotCache::primed(snapshot)))
    }

    /// Merges `patch` into the props after kind validation.
    ///
    /// Marks the snapshot stale unless `is_deserializing`; loading a record
    /// is not a semantic change. Ids never change.
    pub fn update(&mut self, mut patch: PropsPatch, is_deserializing: bool) -> &mut Self {
        if let Some(id) = patch.id.take() {
            if id != self.props.id {
                warn!(shape = %self.props.id, requested = %id, "ignoring attempt to change shape id");
            }
        }
        self.kind.validate_props(&mut patch);
        if !is_deserializing {
            self.cache.get_mut().is_dirty = true;
        }
        self.props.apply(patch);
        self
    }

    /// Applies a stored record as a deserializing update.
    pub fn load_snapshot(&mut self, snapshot: ShapeSnapshot) -> Result<&mut Self> {
        if snapshot.kind != self.type_name() {
            return Err(ShapeError::KindMismatch {
                expected: self.type_name().to_string(),
                actual: snapshot.kind,
            }
            .into());
        }
        Ok(self.update(PropsPatch::from(snapshot.props), true))
    }

    /// Fresh structural copy of the current state. Does not touch the cache.
    pub fn snapshot(&self) -> ShapeSnapshot {
        self.snapshot_at(self.cache.borrow().revision)
    }

    fn snapshot_at(&self, revision: u64) -> ShapeSnapshot {
        ShapeSnapshot {
            kind: self.type_name().to_string(),
            props: self.props.clone(),
            revision,
        }
    }

    /// Returns the stored snapshot, refreshing it first if stale or absent.
    pub fn cached_snapshot(&self) -> Arc<ShapeSnapshot> {
        let mut cache = self.cache.borrow_mut();
        if !cache.is_dirty {
            if let Some(last) = &cache.last {
                return Arc::clone(last);
            }
        }

        cache.revision += 1;
        cache.is_dirty = false;
        let snapshot = Arc::new(self.snapshot_at(cache.revision));
        cache.last = Some(Arc::clone(&snapshot));
        trace!(shape = %self.props.id, revision = cache.revision, "refreshed snapshot");
        snapshot
    }

    /// The public serialized view; `None` while the shape is a draft.
    pub fn serialized(&self) -> Option<Arc<ShapeSnapshot>> {
        if self.draft {
            return None;
        }
        Some(self.cached_snapshot())
    }

    pub fn revision(&self) -> u64 {
        self.cache.borrow().revision
    }

    pub fn is_dirty(&self) -> bool {
        self.cache.borrow().is_dirty
    }

    pub fn is_draft(&self) -> bool {
        self.draft
    }

    pub fn set_draft(&mut self, draft: bool) {
        self.draft = draft;
    }
}

/// Clones go through the serialized view, so the copy shares no state with
/// the source. Drafts are copied from a fresh snapshot and the copy is never
/// a draft.
impl Clone for Shape {
    fn clone(&self) -> Self {
        let snapshot = match self.serialized() {
            Some(s) => ShapeSnapshot::clone(&s),
            None => self.snapshot(),
        };
        let props = snapshot.props.clone();
        let mut shape =
            Self::from_parts(Arc::clone(&self.kind), props, SnapshotCache::primed(snapshot));
        shape.binding_distance = self.binding_distance;
        shape
    }
}
