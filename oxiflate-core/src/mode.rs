//! Framing modes.

use std::fmt;
use std::str::FromStr;

/// Container format around the DEFLATE stream.
///
/// The same value selects the framing for both compression and
/// decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Raw DEFLATE (RFC 1951), no header or checksum.
    Deflate,
    /// zlib (RFC 1950): 2-byte header, Adler-32 trailer.
    #[default]
    Zlib,
    /// gzip (RFC 1952): 10-byte header, CRC-32 and size trailer.
    Gzip,
}

impl Mode {
    /// All modes, in declaration order.
    pub const ALL: [Mode; 3] = [Mode::Deflate, Mode::Zlib, Mode::Gzip];

    /// Lowercase name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Deflate => "deflate",
            Mode::Zlib => "zlib",
            Mode::Gzip => "gzip",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode '{}': expected deflate, zlib or gzip", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deflate" | "raw" => Ok(Mode::Deflate),
            "zlib" => Ok(Mode::Zlib),
            "gzip" | "gz" => Ok(Mode::Gzip),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
