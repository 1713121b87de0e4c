//! CSV configuration options

/// Default name of the column holding the format tag
pub const DEFAULT_FORMAT_COLUMN: &str = "FORMAT";
/// Default name of the column holding the raw message
pub const DEFAULT_CONTENT_COLUMN: &str = "CONTENIDO";

/// Configuration for reading a message table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvConfig {
    /// Field delimiter character (default: comma)
    pub delimiter: char,
    /// Quote character for fields containing special characters (default: double quote)
    pub quote_char: char,
    /// Header name of the format tag column
    pub format_column: String,
    /// Header name of the raw message column
    pub content_column: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote_char: '"',
            format_column: DEFAULT_FORMAT_COLUMN.to_string(),
            content_column: DEFAULT_CONTENT_COLUMN.to_string(),
        }
    }
}

impl CsvConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter character
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    pub fn quote_char(mut self, quote_char: char) -> Self {
        self.quote_char = quote_char;
        self
    }

    /// Set the format tag column name
    pub fn format_column(mut self, column: impl Into<String>) -> Self {
        self.format_column = column.into();
        self
    }

    /// Set the raw message column name
    pub fn content_column(mut self, column: impl Into<String>) -> Self {
        self.content_column = column.into();
        self
    }

    /// Convert delimiter to u8 for csv crate
    pub fn delimiter_u8(&self) -> u8 {
        self.delimiter as u8
    }

    /// Convert quote char to u8 for csv crate
    pub fn quote_char_u8(&self) -> u8 {
        self.quote_char as u8
    }
}
