//! Insert-once cache of record schemas keyed by type identity

use crate::introspect::build_schema;
use crate::model::RecordSchema;
use crate::Result;
use dashmap::DashMap;
use mx_ir::RecordType;
use std::any::TypeId;
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};

static GLOBAL: LazyLock<SchemaRegistry> = LazyLock::new(SchemaRegistry::new);

/// Process-wide registry used by [`crate::get_constraints`]
pub fn global() -> &'static SchemaRegistry {
    &GLOBAL
}

/// Concurrent registry of built record schemas.
///
/// Entries are never replaced once inserted. Two threads building the same
/// schema at once both compute it; the first insert wins and both callers
/// receive that entry.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: DashMap<TypeId, Arc<RecordSchema>>,
}

impl SchemaRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached schema of `record_type`, building it on first use
    ///
    /// # Errors
    ///
    /// Returns the introspection error when the schema cannot be built.
    /// Failures are not cached.
    pub fn get_or_build(&self, record_type: RecordType) -> Result<Arc<RecordSchema>> {
        if let Some(cached) = self.get(record_type) {
            debug!("Cache hit for record schema: {}", record_type);
            return Ok(cached);
        }

        trace!("Cache miss for record schema: {}", record_type);
        let schema = Arc::new(build_schema(record_type)?);
        debug!(
            record_type = record_type.name(),
            fields = schema.len(),
            "Built record schema"
        );

        let entry = self.schemas.entry(record_type.id()).or_insert(schema);
        Ok(Arc::clone(entry.value()))
    }

    /// Cached schema of `record_type`, if already built
    #[must_use]
    pub fn get(&self, record_type: RecordType) -> Option<Arc<RecordSchema>> {
        self.schemas
            .get(&record_type.id())
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Check if a schema has been built for `record_type`
    #[must_use]
    pub fn contains(&self, record_type: RecordType) -> bool {
        self.schemas.contains_key(&record_type.id())
    }

    /// Number of cached schemas
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
