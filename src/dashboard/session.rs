//! Dashboard session: one loaded table, memoized render passes
//!
//! The table is loaded once when the session opens and shared for its whole
//! lifetime. Each render is stored under the selection that produced it and
//! handed out again for equal selections; nothing is ever invalidated.

use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::collections::EncounterTable;
use crate::config::DashboardConfig;
use crate::dashboard::view::{DashboardView, Render, RenderSettings};
use crate::error::Result;
use crate::filter::{FilterSelection, filter_options};
use crate::loader::{DataSource, export_table, load_encounters};
use crate::models::CategoricalColumn;

/// Process-lifetime dashboard state
#[derive(Debug)]
pub struct Session {
    table: Arc<EncounterTable>,
    source: DataSource,
    settings: RenderSettings,
    renders: FxHashMap<FilterSelection, Arc<Render>>,
}

impl Session {
    /// Load the configured table and start an empty render cache
    pub fn open(config: &DashboardConfig) -> Result<Self> {
        let loaded = load_encounters(config)?;
        let mut session = Self::from_table(loaded.table, RenderSettings::from(config));
        session.source = loaded.source;
        Ok(session)
    }

    /// Start a session over an already prepared table
    #[must_use]
    pub fn from_table(table: EncounterTable, settings: RenderSettings) -> Self {
        Self {
            table: Arc::new(table),
            source: DataSource::InMemory,
            settings,
            renders: FxHashMap::default(),
        }
    }

    /// The full prepared table
    #[must_use]
    pub fn table(&self) -> &Arc<EncounterTable> {
        &self.table
    }

    /// Where the table came from
    #[must_use]
    pub const fn source(&self) -> &DataSource {
        &self.source
    }

    /// Number of cached render passes
    #[must_use]
    pub fn cached_renders(&self) -> usize {
        self.renders.len()
    }

    /// Sidebar choices for a column over the full table
    #[must_use]
    pub fn filter_options(&self, column: CategoricalColumn) -> Vec<String> {
        filter_options(&self.table, column)
    }

    /// The table narrowed by `selection`
    ///
    /// Choices are accent-folded first when the table was prepared that way.
    #[must_use]
    pub fn filtered(&self, selection: &FilterSelection) -> EncounterTable {
        if self.settings.strip_accents {
            selection
                .with_folded_accents(&self.settings.placeholder)
                .apply(&self.table)
        } else {
            selection.apply(&self.table)
        }
    }

    /// Render pass for `selection`, computed once per distinct selection
    pub fn render(&mut self, selection: &FilterSelection) -> Arc<Render> {
        if let Some(render) = self.renders.get(selection) {
            debug!("Render cache hit for {selection:?}");
            return Arc::clone(render);
        }

        debug!("Render cache miss for {selection:?}");
        let render = Arc::new(self.compute(selection));
        self.renders.insert(selection.clone(), Arc::clone(&render));
        render
    }

    fn compute(&self, selection: &FilterSelection) -> Render {
        let filtered = self.filtered(selection);
        if filtered.is_empty() {
            warn!("No encounters match the selected filters");
            return Render::NoData;
        }
        Render::View(DashboardView::compute(Arc::new(filtered), &self.settings))
    }

    /// Export the rows behind `selection`, CSV or Parquet by extension
    pub fn export(&mut self, selection: &FilterSelection, path: &Path) -> Result<usize> {
        let render = self.render(selection);
        match render.view() {
            Some(view) => {
                export_table(&view.table, path)?;
                Ok(view.table.len())
            }
            None => {
                export_table(&EncounterTable::new(), path)?;
                Ok(0)
            }
        }
    }
}
