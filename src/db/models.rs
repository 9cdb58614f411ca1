// Data structures for exported schema snapshots

use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TableSchema {
    pub name: String,
    /// Prettified CREATE TABLE statement.
    pub statement: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DatabaseSchema {
    pub name: String,
    /// CREATE DATABASE statement exactly as the server returned it.
    pub statement: String,
    pub tables: Vec<TableSchema>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SchemaSnapshot {
    pub source: String,
    pub exported_at: DateTime<Utc>,
    pub databases: Vec<DatabaseSchema>,
}
