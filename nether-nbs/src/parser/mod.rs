//! NBS file parser
//!
//! This module decodes NBS files into [`Song`] values. It consists of:
//!
//! - `helpers` - Little-endian field readers
//! - `header` - Header probe and metadata fields
//! - `notes` - Delta-encoded note stream and layer table
//! - `tests` - Test suite over hand-built files

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::instrument::InstrumentMap;
use crate::registry::SoundRegistry;
use crate::song::{Note, Song};
use crate::{GAME_TICKS_PER_SECOND, VERSION_EXPLICIT_LENGTH};

mod header;
mod helpers;
mod notes;

use header::read_header;
use notes::{read_layers, read_notes};

/// Decoder settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Play instruments 10-15 as instrument 0, like hosts that predate them
    pub legacy_instruments: bool,
    /// Rounding applied when converting the header tempo to a speed
    pub tempo_rounding: TempoRounding,
}

impl ParseOptions {
    pub fn new(legacy_instruments: bool) -> Self {
        Self {
            legacy_instruments,
            ..Self::default()
        }
    }
}

/// Rounding mode for the tempo to speed conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempoRounding {
    /// Round to nearest
    #[default]
    Round,
    /// Round up, as some older players did
    Ceil,
}

impl TempoRounding {
    fn apply(self, value: f64) -> f64 {
        match self {
            TempoRounding::Round => value.round(),
            TempoRounding::Ceil => value.ceil(),
        }
    }
}

impl FromStr for TempoRounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "round" => Ok(TempoRounding::Round),
            "ceil" => Ok(TempoRounding::Ceil),
            other => Err(format!(
                "unknown tempo rounding '{}' (expected 'round' or 'ceil')",
                other
            )),
        }
    }
}

impl fmt::Display for TempoRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TempoRounding::Round => f.write_str("round"),
            TempoRounding::Ceil => f.write_str("ceil"),
        }
    }
}

/// Convert the raw header tempo (ticks per second x 100) to a playback speed
///
/// A zero tempo, or one small enough to round to zero, yields 1.
pub(crate) fn tempo_to_speed(tempo_raw: u16, rounding: TempoRounding) -> u32 {
    if tempo_raw == 0 {
        return 1;
    }
    let ticks_per_second = f64::from(tempo_raw) / 100.0;
    let speed = rounding.apply(GAME_TICKS_PER_SECOND / ticks_per_second);
    (speed as u32).max(1)
}

/// Parse an NBS song from a byte source
///
/// The source is read once, front to back, and dropped before returning
/// on every path.
///
/// # Arguments
/// * `reader` - Byte source positioned at the start of the file
/// * `registry` - Sound registry snapshot used to resolve instruments
/// * `options` - Decoder settings
///
/// # Returns
/// * `Ok(Song)` - Decoded song
/// * `Err(DecodeError)` - The source ended early or could not be read
pub fn parse_nbs<R: Read>(
    mut reader: R,
    registry: &SoundRegistry,
    options: ParseOptions,
) -> Result<Song, DecodeError> {
    let mut header = read_header(&mut reader)?;
    let instruments = InstrumentMap::new(registry, options.legacy_instruments);
    let stream = read_notes(&mut reader, &header, &instruments)?;
    let layers = read_layers(&mut reader, &header)?;

    let version = header.version();
    let length = if version > 0 && version < VERSION_EXPLICIT_LENGTH {
        // No reliable length field before version 3
        stream.last_tick.unwrap_or(0)
    } else {
        u32::from(header.length)
    };
    let speed = tempo_to_speed(header.info.tempo_raw, options.tempo_rounding);

    let mut notes: BTreeMap<u32, Vec<Note>> = BTreeMap::new();
    for mut note in stream.notes {
        if let Some(layer) = layers.get(note.layer() as usize) {
            note.set_volume(layer.gain());
        }
        notes.entry(note.tick()).or_default().push(note);
    }

    header.info.layers = layers;
    let song = Song::new(length, speed, notes, header.info);

    tracing::debug!(
        version,
        layers = header.layer_count,
        length,
        speed,
        notes = song.note_count(),
        "Decoded NBS song"
    );

    Ok(song)
}

/// Parse an NBS song held in memory
pub fn parse_nbs_bytes(
    data: &[u8],
    registry: &SoundRegistry,
    options: ParseOptions,
) -> Result<Song, DecodeError> {
    parse_nbs(data, registry, options)
}

/// Parse an NBS file from disk
///
/// The file handle is closed before returning, whether decoding succeeds or not.
pub fn parse_nbs_file(
    path: impl AsRef<Path>,
    registry: &SoundRegistry,
    options: ParseOptions,
) -> Result<Song, DecodeError> {
    let file = File::open(path.as_ref()).map_err(|e| DecodeError::new("file", e))?;
    parse_nbs(BufReader::new(file), registry, options)
}
