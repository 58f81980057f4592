pub mod csv_source;
pub mod error;

pub use csv_source::RosterSource;
pub use error::{IngestError, Result};
