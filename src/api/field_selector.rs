use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tracing::warn;

use crate::api::chart_config::ChartConfig;
use crate::api::config_builder::build_chart_config;
use crate::core::ResourceInfo;
use crate::error::{ChartError, ChartResult};

/// Wiring for per-field "addition" charts driven by a field choice.
///
/// Selecting a field builds an addition-mode configuration for it; selecting
/// the same field again replaces the previous chart. Degenerate fields are
/// reported and skipped without spawning anything.
#[derive(Debug, Clone)]
pub struct FieldSelector {
    resource: ResourceInfo,
    dates: Vec<DateTime<Utc>>,
    spawned: IndexMap<String, ChartConfig>,
}

impl FieldSelector {
    #[must_use]
    pub fn new(resource: ResourceInfo, dates: Vec<DateTime<Utc>>) -> Self {
        Self {
            resource,
            dates,
            spawned: IndexMap::new(),
        }
    }

    /// Whether the selector should be offered at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.resource.fields.is_empty()
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.resource.fields
    }

    /// Builds (or rebuilds) the addition chart for a field.
    pub fn select(&mut self, field: &str) -> ChartResult<&ChartConfig> {
        match build_chart_config(&self.resource, &self.dates, field, true) {
            Ok(config) => {
                self.spawned.insert(field.to_owned(), config);
                Ok(&self.spawned[field])
            }
            Err(err) => {
                if let ChartError::DegenerateFieldRange { field, min, max } = &err {
                    warn!(%field, ?min, ?max, "skipping field with degenerate value range");
                }
                Err(err)
            }
        }
    }

    /// Drops a spawned chart, e.g. when its close control is activated.
    pub fn close(&mut self, field: &str) -> bool {
        self.spawned.shift_remove(field).is_some()
    }

    #[must_use]
    pub fn chart(&self, field: &str) -> Option<&ChartConfig> {
        self.spawned.get(field)
    }

    pub fn spawned_fields(&self) -> impl Iterator<Item = &str> {
        self.spawned.keys().map(String::as_str)
    }
}
