//! Sound registry snapshot and cross-release name resolution
//!
//! Host releases rename their sound enumerants (`BLOCK_NOTE_HARP` became
//! `BLOCK_NOTE_BLOCK_HARP`, and so on). A [`SoundRegistry`] is a read-only
//! snapshot of one host's names, built once and shared by every decode.
//! Resolution walks a list of candidate spellings and returns the first one
//! the snapshot knows, or [`Sound::FALLBACK`].

use std::path::Path;

use hashbrown::HashMap;
use serde::Deserialize;

use crate::error::RegistryError;
use crate::sound::Sound;

/// One name the host exposes for a sound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundEntry {
    /// Canonical enumerant name, e.g. `BLOCK_NOTE_HARP`
    pub name: String,
    /// Namespaced key, e.g. `block.note.harp`
    pub key: Option<String>,
    /// Identifier the name maps to
    pub sound: Sound,
}

impl SoundEntry {
    pub fn new(name: impl Into<String>, key: Option<&str>, sound: Sound) -> Self {
        Self {
            name: name.into(),
            key: key.map(str::to_owned),
            sound,
        }
    }
}

/// Read-only name snapshot of a host sound registry
#[derive(Debug, Clone, Default)]
pub struct SoundRegistry {
    by_name: HashMap<String, Sound>,
    by_key: HashMap<String, Sound>,
}

/// Pre-1.13 host naming for the ten original instruments
const LEGACY_NAMES: [(&str, &str, Sound); 11] = [
    ("BLOCK_NOTE_HARP", "block.note.harp", Sound::BlockNoteBlockHarp),
    ("BLOCK_NOTE_BASS", "block.note.bass", Sound::BlockNoteBlockBass),
    ("BLOCK_NOTE_BASEDRUM", "block.note.basedrum", Sound::BlockNoteBlockBasedrum),
    ("BLOCK_NOTE_SNARE", "block.note.snare", Sound::BlockNoteBlockSnare),
    ("BLOCK_NOTE_HAT", "block.note.hat", Sound::BlockNoteBlockHat),
    ("BLOCK_NOTE_GUITAR", "block.note.guitar", Sound::BlockNoteBlockGuitar),
    ("BLOCK_NOTE_FLUTE", "block.note.flute", Sound::BlockNoteBlockFlute),
    ("BLOCK_NOTE_BELL", "block.note.bell", Sound::BlockNoteBlockBell),
    ("BLOCK_NOTE_CHIME", "block.note.chime", Sound::BlockNoteBlockChime),
    ("BLOCK_NOTE_XYLOPHONE", "block.note.xylophone", Sound::BlockNoteBlockXylophone),
    ("UI_TOAST_IN", "ui.toast.in", Sound::UiToastIn),
];

impl SoundRegistry {
    /// Build a snapshot from host entries
    ///
    /// The first entry for a given name or key wins.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = SoundEntry>,
    {
        let mut registry = Self::default();
        for entry in entries {
            if let Some(key) = entry.key {
                registry.by_key.entry(key).or_insert(entry.sound);
            }
            registry.by_name.entry(entry.name).or_insert(entry.sound);
        }
        registry
    }

    /// Snapshot of the current host naming
    pub fn modern() -> Self {
        Self::from_entries(
            Sound::ALL
                .into_iter()
                .map(|sound| SoundEntry::new(sound.name(), Some(sound.key()), sound)),
        )
    }

    /// Snapshot of the pre-1.13 host naming
    ///
    /// Hosts of that era only had the ten original note block sounds.
    pub fn legacy() -> Self {
        Self::from_entries(
            LEGACY_NAMES
                .into_iter()
                .map(|(name, key, sound)| SoundEntry::new(name, Some(key), sound)),
        )
    }

    /// Parse a TOML snapshot
    ///
    /// Entries naming a sound this crate does not know are skipped.
    pub fn from_toml_str(content: &str) -> Result<Self, RegistryError> {
        let file: SnapshotFile = toml::from_str(content)?;
        let entries = file.sounds.into_iter().filter_map(|entry| {
            match Sound::from_name(&entry.sound) {
                Some(sound) => Some(SoundEntry {
                    name: entry.name,
                    key: entry.key,
                    sound,
                }),
                None => {
                    tracing::warn!(
                        name = %entry.name,
                        sound = %entry.sound,
                        "Skipping registry entry with unknown sound"
                    );
                    None
                }
            }
        });
        Ok(Self::from_entries(entries))
    }

    /// Load a TOML snapshot from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Number of names in the snapshot
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Exact lookup by canonical enumerant name
    pub fn get(&self, name: &str) -> Option<Sound> {
        self.by_name.get(name).copied()
    }

    /// Exact lookup by namespaced key
    pub fn get_key(&self, key: &str) -> Option<Sound> {
        self.by_key.get(key).copied()
    }

    /// First candidate whose enumerant name is in the snapshot
    ///
    /// Candidates are tried in the order given. Returns [`Sound::FALLBACK`]
    /// when none match.
    pub fn resolve(&self, candidates: &[&str]) -> Sound {
        candidates
            .iter()
            .find_map(|name| self.get(name))
            .unwrap_or(Sound::FALLBACK)
    }

    /// Like [`resolve`](Self::resolve), also accepting namespaced keys
    ///
    /// Each candidate is checked as a name, then as a key, before moving on
    /// to the next candidate.
    pub fn resolve_with_keys(&self, candidates: &[&str]) -> Sound {
        candidates
            .iter()
            .find_map(|candidate| self.get(candidate).or_else(|| self.get_key(candidate)))
            .unwrap_or(Sound::FALLBACK)
    }
}

/// On-disk snapshot layout
#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    sounds: Vec<SnapshotEntry>,
}

#[derive(Debug, Deserialize)]
struct SnapshotEntry {
    name: String,
    #[serde(default)]
    key: Option<String>,
    sound: String,
}
