pub mod db;
pub mod ddl;
pub mod export;

pub use export::exporter::{collect_snapshot, OutputFormat, SchemaExporter};
