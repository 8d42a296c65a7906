//! Debug CSV ingester: a testing affordance, not part of the core
//! contract. Gated behind the `csv-ingest` feature.

pub mod csv;

pub use self::csv::{read_csv, CsvIngestError, EdgeColumns};
