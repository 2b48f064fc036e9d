//! Error types for NBS decoding and registry loading

use std::io;

/// Failure to decode an NBS song
///
/// Every failure is structural: the byte source ended early, an I/O fault
/// occurred, or a position overflowed. Musically invalid values are clamped
/// by the decoder and never surface here. No partial song is ever returned.
#[derive(Debug, thiserror::Error)]
#[error("Failed to decode NBS song while reading {context}: {source}")]
pub struct DecodeError {
    context: &'static str,
    #[source]
    source: io::Error,
}

impl DecodeError {
    pub(crate) fn new(context: &'static str, source: io::Error) -> Self {
        Self { context, source }
    }

    /// Structurally invalid data that is not an I/O fault
    pub(crate) fn invalid(context: &'static str, message: &'static str) -> Self {
        Self::new(context, io::Error::new(io::ErrorKind::InvalidData, message))
    }

    /// Name of the field being read when decoding failed
    pub fn context(&self) -> &'static str {
        self.context
    }

    /// Whether the byte source ended before the song was complete
    pub fn is_truncated(&self) -> bool {
        self.source.kind() == io::ErrorKind::UnexpectedEof
    }

    /// The underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }
}

/// Failure to load a sound registry snapshot file
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid registry snapshot: {0}")]
    Toml(#[from] toml::de::Error),
}
