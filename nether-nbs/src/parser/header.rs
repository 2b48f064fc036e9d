//! Song header decoding

use std::io::Read;

use super::helpers::{read_bool, read_string, read_u8, read_u16, read_u32};
use crate::error::DecodeError;
use crate::song::{LoopSettings, SongInfo};
use crate::{
    DEFAULT_FIRST_CUSTOM_INSTRUMENT, INSTRUMENT_SLOTS, VERSION_EXPLICIT_LENGTH,
    VERSION_EXTENDED_NOTES,
};

/// Decoded header fields
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Header {
    /// Declared length (placeholder 0 for versions 1-2)
    pub length: u16,
    pub layer_count: u16,
    /// Metadata, without the layer table
    pub info: SongInfo,
}

impl Header {
    pub fn version(&self) -> u8 {
        self.info.version
    }

    /// Offset added to custom instrument codes so they land past the built-in slots
    pub fn instrument_shift(&self) -> i16 {
        i16::from(INSTRUMENT_SLOTS) - i16::from(self.info.first_custom_instrument)
    }
}

/// Read the header up to the start of the note stream
pub(crate) fn read_header<R: Read>(reader: &mut R) -> Result<Header, DecodeError> {
    // Classic files start with a non-zero length; newer ones with a zero marker
    let mut length = read_u16(reader, "song length")?;
    let mut version = 0;
    let mut first_custom_instrument = DEFAULT_FIRST_CUSTOM_INSTRUMENT;

    if length == 0 {
        version = read_u8(reader, "format version")?;
        first_custom_instrument = read_u8(reader, "vanilla instrument count")?;
        if version >= VERSION_EXPLICIT_LENGTH {
            length = read_u16(reader, "song length")?;
        }
        tracing::trace!(version, first_custom_instrument, "Versioned NBS header");
    } else {
        tracing::trace!(length, "Classic NBS header");
    }

    let layer_count = read_u16(reader, "layer count")?;
    let title = read_string(reader, "song name")?;
    let author = read_string(reader, "song author")?;
    let original_author = read_string(reader, "original author")?;
    let description = read_string(reader, "song description")?;
    let tempo_raw = read_u16(reader, "tempo")?;
    let auto_save_enabled = read_bool(reader, "auto-save flag")?;
    let auto_save_minutes = read_u8(reader, "auto-save duration")?;
    let time_signature = read_u8(reader, "time signature")?;

    // Editor statistics, not needed for playback
    let _minutes_spent = read_u32(reader, "minutes spent")?;
    let _left_clicks = read_u32(reader, "left-clicks")?;
    let _right_clicks = read_u32(reader, "right-clicks")?;
    let _blocks_added = read_u32(reader, "note blocks added")?;
    let _blocks_removed = read_u32(reader, "note blocks removed")?;

    let source_file = read_string(reader, "imported file name")?;

    let loop_settings = if version >= VERSION_EXTENDED_NOTES {
        Some(LoopSettings {
            enabled: read_bool(reader, "loop flag")?,
            max_count: read_u8(reader, "max loop count")?,
            start_tick: read_u16(reader, "loop start tick")?,
        })
    } else {
        None
    };

    Ok(Header {
        length,
        layer_count,
        info: SongInfo {
            version,
            first_custom_instrument,
            title,
            author,
            original_author,
            description,
            tempo_raw,
            auto_save: auto_save_enabled.then_some(auto_save_minutes),
            time_signature,
            source_file,
            loop_settings,
            layers: Vec::new(),
        },
    })
}
