//! Batch input and output.

pub mod export;
pub mod load;

pub use export::{csv_header, export_file, render_ranked_csv, write_ranked_csv};
pub use load::{load_mentions, load_records, load_sources, read_mentions, read_records};
