//! Stage backed by a single [`MappingTable`]

use crate::error::Result;
use crate::stage::{CharStream, Stage, Substituted};
use crate::tables::{MappingTable, TableSet};
use std::sync::Arc;

/// Replaces each atom found in its table and passes the rest through
#[derive(Debug, Clone)]
pub struct TableStage {
    name: &'static str,
    table: Arc<MappingTable>,
}

impl TableStage {
    pub fn new(name: &'static str, table: Arc<MappingTable>) -> Self {
        Self { name, table }
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }
}

/// A stage reading the table of its own name from `tables`
fn named(name: &'static str, tables: &TableSet) -> Result<TableStage> {
    Ok(TableStage::new(name, tables.require_mapping(name, name)?))
}

/// Build the `kanji-old-new` stage (舊 → 旧)
pub fn kanji_old_new(tables: &TableSet) -> Result<TableStage> {
    named("kanji-old-new", tables)
}

/// Build the `combined` stage (㍻ → 平成)
pub fn combined(tables: &TableSet) -> Result<TableStage> {
    named("combined", tables)
}

impl Stage for TableStage {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply<'a>(&'a self, input: CharStream<'a>) -> CharStream<'a> {
        Box::new(Substituted::new(input, self.table.as_ref()))
    }
}
