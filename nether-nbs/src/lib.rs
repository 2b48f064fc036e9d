//! Nether-NBS: NBS (Note Block Studio) song decoder for Nethercore
//!
//! This crate decodes the Note Block Studio `.nbs` format into a time-indexed
//! collection of playable notes. Instrument codes are translated into host
//! sound identifiers through a [`SoundRegistry`] snapshot, so one decoder works
//! against hosts that spell their sound names differently.
//!
//! # Key Features
//!
//! - **All header revisions**: the classic header and format versions 1 to 5
//! - **Decode only**: no writer, songs are read-only once decoded
//! - **Name tolerant**: every instrument is resolved from several historical
//!   sound-name spellings, with a fixed fallback sound
//! - **Graceful degradation**: out-of-range keys, unknown instruments and a
//!   zero tempo are normalized instead of rejected
//!
//! # NBS Format Overview
//!
//! NBS files contain:
//! - Header with song metadata (length, layer count, title, author, tempo)
//! - Note stream, delta encoded twice (tick jumps, then layer jumps)
//! - Layer table (name, lock, volume, stereo panning)
//!
//! # Usage
//!
//! ```ignore
//! use nether_nbs::{ParseOptions, SoundRegistry, parse_nbs_file};
//!
//! let registry = SoundRegistry::modern();
//! let song = parse_nbs_file("song.nbs", &registry, ParseOptions::default()).unwrap();
//!
//! println!("Song: {}", song.info().title);
//! println!("Length: {} ticks at speed {}", song.length(), song.speed());
//! for (tick, notes) in song.notes() {
//!     println!("  {tick}: {} notes", notes.len());
//! }
//! ```
//!
//! # Format Reference
//!
//! - Note Block Studio file format
//! - <https://noteblock.studio/nbs>

mod error;
mod instrument;
mod parser;
mod registry;
mod song;
mod sound;

pub use error::{DecodeError, RegistryError};
pub use instrument::InstrumentMap;
pub use parser::{ParseOptions, TempoRounding, parse_nbs, parse_nbs_bytes, parse_nbs_file};
pub use registry::{SoundEntry, SoundRegistry};
pub use song::{LayerInfo, LoopSettings, Note, Song, SongInfo};
pub use sound::Sound;

// =============================================================================
// Format Constants
// =============================================================================

/// Number of instrument slots in the current instrument numbering
pub const INSTRUMENT_SLOTS: u8 = 16;

/// First custom instrument slot assumed when the header does not declare one
pub const DEFAULT_FIRST_CUSTOM_INSTRUMENT: u8 = 10;

/// Format version that introduced the explicit song length field
pub const VERSION_EXPLICIT_LENGTH: u8 = 3;

/// Format version that introduced layer stereo panning
pub const VERSION_LAYER_PANNING: u8 = 2;

/// Format version that introduced looping, note velocity/panning/fine pitch and layer locks
pub const VERSION_EXTENDED_NOTES: u8 = 4;

// =============================================================================
// Note Constants
// =============================================================================

/// Key number of the lowest playable note (F#3 on the piano layout)
pub const KEY_OFFSET: i16 = 33;

/// Number of semitones a note block can play above its lowest note
pub const KEY_RANGE: i16 = 24;

/// Semitone position of the unpitched note (pitch multiplier 1.0)
pub const KEY_CENTER: i16 = 12;

/// Layer volume that maps to full volume
pub const MAX_LAYER_VOLUME: u8 = 100;

/// Game ticks per second the tempo is expressed against
pub const GAME_TICKS_PER_SECOND: f64 = 20.0;

// =============================================================================
// Tests
// =============================================================================
