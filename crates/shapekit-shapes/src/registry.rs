//! Type tag to kind lookup, used to build shapes and rehydrate records.

use shapekit_core::{Result, ShapeError, BINDING_DISTANCE};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::cache::ShapeSnapshot;
use crate::kind::ShapeKind;
use crate::kinds::builtin_kinds;
use crate::props::PropsPatch;
use crate::shape::Shape;

#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    kinds: HashMap<String, Arc<dyn ShapeKind>>,
    binding_distance: f64,
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::with_builtin_kinds()
    }
}

impl ShapeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            kinds: HashMap::new(),
            binding_distance: BINDING_DISTANCE,
        }
    }

    /// A registry holding `box`, `ellipse`, `dot` and `line`.
    pub fn with_builtin_kinds() -> Self {
        let mut registry = Self::new();
        for kind in builtin_kinds() {
            registry.kinds.insert(kind.type_name().to_string(), kind);
        }
        registry
    }

    /// Binding distance stamped on every shape this registry creates.
    pub fn with_binding_distance(mut self, distance: f64) -> Self {
        self.binding_distance = distance;
        self
    }

    pub fn binding_distance(&self) -> f64 {
        self.binding_distance
    }

    pub fn register(&mut self, kind: Arc<dyn ShapeKind>) -> Result<()> {
        let name = kind.type_name();
        if self.kinds.contains_key(name) {
            return Err(ShapeError::DuplicateKind {
                kind: name.to_string(),
            }
            .into());
        }
        debug!(kind = name, "registered shape kind");
        self.kinds.insert(name.to_string(), kind);
        Ok(())
    }

    pub fn get(&self, type_name: &str) -> Result<Arc<dyn ShapeKind>> {
        self.kinds
            .get(type_name)
            .cloned()
            .ok_or_else(|| {
                ShapeError::UnknownKind {
                    kind: type_name.to_string(),
                }
                .into()
            })
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.kinds.contains_key(type_name)
    }

    /// Registered type tags, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.kinds.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn create(&self, type_name: &str, patch: PropsPatch) -> Result<Shape> {
        let kind = self.get(type_name)?;
        Ok(Shape::new(kind, patch).with_binding_distance(self.binding_distance))
    }

    pub fn from_snapshot(&self, snapshot: ShapeSnapshot) -> Result<Shape> {
        let kind = self.get(&snapshot.kind)?;
        Ok(Shape::from_snapshot(kind, snapshot)?.with_binding_distance(self.binding_distance))
    }

    /// Rehydrates a single JSON record.
    pub fn from_json(&self, json: &str) -> Result<Shape> {
        self.from_snapshot(ShapeSnapshot::from_json(json)?)
    }

    /// Rehydrates a JSON array of records, failing on the first bad one.
    pub fn load_document(&self, json: &str) -> Result<Vec<Shape>> {
        let records: Vec<ShapeSnapshot> = serde_json::from_str(json)?;
        let shapes = records
            .into_iter()
            .map(|record| self.from_snapshot(record))
            .collect::<Result<Vec<_>>>()?;
        debug!(count = shapes.len(), "loaded shape document");
        Ok(shapes)
    }
}
