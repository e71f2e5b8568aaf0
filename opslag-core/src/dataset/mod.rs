//! Dataset storage, parsing, and column selection.

pub mod registry;
pub mod source;
pub mod table;

pub use registry::DatasetRegistry;
pub use source::{RegistryFetch, TableSource, Upload};
pub use table::{ParsedTable, Row, select_column};
