//! # edi-adapter-csv
//!
//! CSV adapter for reading tables of raw EDI messages.
//!
//! Each data row carries a format tag and the raw message text. The
//! column names are configurable and default to `FORMAT` and `CONTENIDO`.
//!
//! ## Example Usage
//!
//! ```rust
//! use edi_adapter_csv::{CsvConfig, CsvReader};
//! use std::io::Cursor;
//!
//! let data = "FORMAT,CONTENIDO\nEDIFACT,UNH+1'\n";
//! let rows = CsvReader::new()
//!     .with_config(CsvConfig::new().delimiter(','))
//!     .read(Cursor::new(data))
//!     .unwrap();
//! assert_eq!(rows[0].format, "EDIFACT");
//! ```

pub mod config;
pub mod errors;
pub mod reader;

// Re-export main types
pub use config::{CsvConfig, DEFAULT_CONTENT_COLUMN, DEFAULT_FORMAT_COLUMN};
pub use errors::{CsvError, CsvResult};
pub use reader::{CsvReader, MessageRow, find_csv_file};

pub use errors::CsvError as Error;
pub type Result<T> = CsvResult<T>;
