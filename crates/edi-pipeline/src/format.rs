//! Format discriminator and parser dispatch

use std::fmt;

use edi_adapter_edifact::EdifactParser;
use edi_adapter_simplex::SimplexParser;
use edi_adapter_xml::XmlParser;
use edi_ir::{MessageParser, NormalizedRecordModel};

static EDIFACT: EdifactParser = EdifactParser;
static EDIXML: XmlParser = XmlParser;
static EDISIMPLEX: SimplexParser = SimplexParser;

/// Source format of a raw message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Edifact,
    Xml,
    Simplex,
}

impl Format {
    /// Every supported format
    pub const ALL: [Format; 3] = [Format::Edifact, Format::Xml, Format::Simplex];

    /// Resolve a literal format tag.
    ///
    /// Surrounding whitespace is ignored; the tag itself is case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|format| format.as_str() == tag)
    }

    /// Literal tag for this format
    pub fn as_str(self) -> &'static str {
        self.parser().format_name()
    }

    /// Parser handling this format
    pub fn parser(self) -> &'static dyn MessageParser {
        match self {
            Format::Edifact => &EDIFACT,
            Format::Xml => &EDIXML,
            Format::Simplex => &EDISIMPLEX,
        }
    }

    /// Parse a raw message with this format's parser
    pub fn parse(self, raw: &str) -> NormalizedRecordModel {
        self.parser().parse(raw)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
