// export/exporter.rs
// Collects CREATE statements from a source and writes the schema snapshot to a file

use crate::db::accessors::StatementSource;
use crate::db::models::{DatabaseSchema, SchemaSnapshot, TableSchema};
use crate::ddl::prettify;
use anyhow::{Result, Context};
use chrono::Utc;
use clap::ValueEnum;
use std::fs::File;
use std::io::Write;
use tracing::{info, debug};

/// Never exported, whatever position the catalog lists it in.
pub const SYSTEM_DATABASE: &str = "system";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain SQL statements separated by blank lines
    #[default]
    Sql,
    Json,
    Yaml,
}

/// Walks databases and tables in catalog order. Table statements are
/// prettified, database statements are kept as returned. The first source
/// error aborts the walk.
pub async fn collect_snapshot<S>(source: &S, database_filter: Option<&str>) -> Result<SchemaSnapshot>
where
    S: StatementSource + Sync + ?Sized,
{
    let databases = match database_filter {
        Some(name) => vec![name.to_string()],
        None => source.list_databases().await?,
    };

    let mut snapshot = SchemaSnapshot {
        source: "clickhouse".to_string(),
        exported_at: Utc::now(),
        databases: Vec::with_capacity(databases.len()),
    };

    for database in databases {
        if database == SYSTEM_DATABASE {
            debug!("skipping system database");
            continue;
        }
        let statement = source.database_statement(&database).await?;
        let table_names = source.list_tables(&database).await?;
        info!(database = %database, tables = table_names.len(), "exporting database");

        let mut tables = Vec::with_capacity(table_names.len());
        for table in table_names {
            let raw = source.table_statement(&database, &table).await?;
            debug!(database = %database, table = %table, "prettifying table statement");
            tables.push(TableSchema {
                statement: prettify(&raw),
                name: table,
            });
        }
        snapshot.databases.push(DatabaseSchema {
            name: database,
            statement,
            tables,
        });
    }
    Ok(snapshot)
}

/// Each statement followed by a blank line; a database comes before its tables.
pub fn render_sql(snapshot: &SchemaSnapshot) -> String {
    let mut out = String::new();
    for database in &snapshot.databases {
        out.push_str(&database.statement);
        out.push_str("\n\n");
        for table in &database.tables {
            out.push_str(&table.statement);
            out.push_str("\n\n");
        }
    }
    out
}

pub struct SchemaExporter;

impl SchemaExporter {
    pub fn render(&self, snapshot: &SchemaSnapshot, format: OutputFormat) -> Result<String> {
        let rendered = match format {
            OutputFormat::Sql => render_sql(snapshot),
            OutputFormat::Json => serde_json::to_string_pretty(snapshot)?,
            OutputFormat::Yaml => serde_yaml::to_string(snapshot)?,
        };
        Ok(rendered)
    }

    /// Truncates or creates `output_file` and writes the rendered snapshot.
    pub fn export_to_file(&self, snapshot: &SchemaSnapshot, output_file: &str, format: OutputFormat) -> Result<()> {
        let rendered = self.render(snapshot, format)?;
        let mut file = File::create(output_file)
            .with_context(|| format!("opening file {}", output_file))?;
        file.write_all(rendered.as_bytes())
            .with_context(|| format!("writing file {}", output_file))?;
        info!(path = output_file, bytes = rendered.len(), "schema written");
        Ok(())
    }
}
