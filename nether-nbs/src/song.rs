//! Decoded song data structures

use std::collections::BTreeMap;

use serde::Serialize;

use crate::sound::Sound;

/// A decoded NBS song
///
/// Immutable once returned by the decoder; playback only reads it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    length: u32,
    speed: u32,
    notes: BTreeMap<u32, Vec<Note>>,
    info: SongInfo,
}

impl Song {
    pub(crate) fn new(
        length: u32,
        speed: u32,
        notes: BTreeMap<u32, Vec<Note>>,
        info: SongInfo,
    ) -> Self {
        Self {
            length,
            speed,
            notes,
            info,
        }
    }

    /// Total duration in ticks
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Playback rate derived from the header tempo, always at least 1
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Notes keyed by tick, only ticks holding at least one note
    pub fn notes(&self) -> &BTreeMap<u32, Vec<Note>> {
        &self.notes
    }

    /// Notes firing at `tick`, in layer order
    pub fn notes_at(&self, tick: u32) -> &[Note] {
        self.notes.get(&tick).map(Vec::as_slice).unwrap_or_default()
    }

    /// Ticks holding notes, ascending
    pub fn ticks(&self) -> impl Iterator<Item = u32> + '_ {
        self.notes.keys().copied()
    }

    /// Last tick holding a note
    pub fn highest_tick(&self) -> Option<u32> {
        self.notes.keys().next_back().copied()
    }

    /// Total number of notes across all ticks
    pub fn note_count(&self) -> usize {
        self.notes.values().map(Vec::len).sum()
    }

    /// Header and layer metadata
    pub fn info(&self) -> &SongInfo {
        &self.info
    }
}

/// A single note event
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Note {
    tick: u32,
    layer: u32,
    instrument: u8,
    key: u8,
    sound: Sound,
    pitch: f32,
    volume: f32,
}

impl Note {
    pub(crate) fn new(tick: u32, layer: u32, instrument: u8, key: u8, sound: Sound) -> Self {
        Self {
            tick,
            layer,
            instrument,
            key,
            sound,
            pitch: key_to_pitch(key),
            volume: 1.0,
        }
    }

    pub(crate) fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    /// Tick the note fires at
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Layer the note was authored on
    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// Instrument code after renumbering
    pub fn instrument(&self) -> u8 {
        self.instrument
    }

    /// Raw piano key number (0-87)
    pub fn key(&self) -> u8 {
        self.key
    }

    /// Resolved sound
    pub fn sound(&self) -> Sound {
        self.sound
    }

    /// Playback pitch multiplier (0.5 to 2.0)
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Playback volume (0.0 to 1.0)
    pub fn volume(&self) -> f32 {
        self.volume
    }
}

/// Pitch multiplier for a piano key
///
/// Note blocks span two octaves starting at key 33; keys outside that range
/// are clamped to its ends.
pub(crate) fn key_to_pitch(key: u8) -> f32 {
    let semitone = (i16::from(key) - crate::KEY_OFFSET).clamp(0, crate::KEY_RANGE);
    2f32.powf(f32::from(semitone - crate::KEY_CENTER) / 12.0)
}

/// Header and layer metadata of a song
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SongInfo {
    /// Format version (0 for the classic header)
    pub version: u8,
    /// First instrument slot holding a custom instrument
    pub first_custom_instrument: u8,
    pub title: String,
    pub author: String,
    pub original_author: String,
    pub description: String,
    /// Raw tempo (ticks per second x 100)
    pub tempo_raw: u16,
    /// Auto-save interval in minutes, `None` when disabled
    pub auto_save: Option<u8>,
    pub time_signature: u8,
    /// Name of the MIDI or schematic the song was imported from
    pub source_file: String,
    /// Loop settings (version 4 and later)
    pub loop_settings: Option<LoopSettings>,
    pub layers: Vec<LayerInfo>,
}

/// Song loop settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoopSettings {
    pub enabled: bool,
    /// 0 loops forever
    pub max_count: u8,
    pub start_tick: u16,
}

/// Layer table entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerInfo {
    pub name: String,
    pub locked: bool,
    /// Raw volume (0-100)
    pub volume: u8,
    /// Raw stereo position (0 = left, 100 = centre, 200 = right)
    pub panning: u8,
}

impl LayerInfo {
    /// Volume applied to this layer's notes
    pub fn gain(&self) -> f32 {
        f32::from(self.volume.min(crate::MAX_LAYER_VOLUME)) / f32::from(crate::MAX_LAYER_VOLUME)
    }
}
