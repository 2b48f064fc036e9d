//! Instrument code to sound mapping

use crate::registry::SoundRegistry;
use crate::sound::Sound;
use crate::INSTRUMENT_SLOTS;

/// Candidate spellings for the ten original instruments, newest first
const ORIGINAL_INSTRUMENTS: [[&str; 3]; 10] = [
    ["BLOCK.NOTE_BLOCK.HARP", "BLOCK_NOTE_BLOCK_HARP", "BLOCK_NOTE_HARP"],
    ["BLOCK.NOTE_BLOCK.BASS", "BLOCK_NOTE_BLOCK_BASS", "BLOCK_NOTE_BASS"],
    ["BLOCK.NOTE_BLOCK.BASEDRUM", "BLOCK_NOTE_BLOCK_BASEDRUM", "BLOCK_NOTE_BASEDRUM"],
    ["BLOCK.NOTE_BLOCK.SNARE", "BLOCK_NOTE_BLOCK_SNARE", "BLOCK_NOTE_SNARE"],
    ["BLOCK.NOTE_BLOCK.HAT", "BLOCK_NOTE_BLOCK_HAT", "BLOCK_NOTE_HAT"],
    ["BLOCK.NOTE_BLOCK.GUITAR", "BLOCK_NOTE_BLOCK_GUITAR", "BLOCK_NOTE_GUITAR"],
    ["BLOCK.NOTE_BLOCK.FLUTE", "BLOCK_NOTE_BLOCK_FLUTE", "BLOCK_NOTE_FLUTE"],
    ["BLOCK.NOTE_BLOCK.BELL", "BLOCK_NOTE_BLOCK_BELL", "BLOCK_NOTE_BELL"],
    ["BLOCK.NOTE_BLOCK.CHIME", "BLOCK_NOTE_BLOCK_CHIME", "BLOCK_NOTE_CHIME"],
    ["BLOCK.NOTE_BLOCK.XYLOPHONE", "BLOCK_NOTE_BLOCK_XYLOPHONE", "BLOCK_NOTE_XYLOPHONE"],
];

/// Instruments 10-15, added in later host releases
const MODERN_INSTRUMENTS: [Sound; 6] = [
    Sound::BlockNoteBlockIronXylophone,
    Sound::BlockNoteBlockCowBell,
    Sound::BlockNoteBlockDidgeridoo,
    Sound::BlockNoteBlockBit,
    Sound::BlockNoteBlockBanjo,
    Sound::BlockNoteBlockPling,
];

/// Instrument table resolved against one registry
///
/// Resolution happens once at construction; [`sound`](Self::sound) is a
/// plain table lookup afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentMap {
    sounds: [Sound; INSTRUMENT_SLOTS as usize],
}

impl InstrumentMap {
    /// Resolve every instrument slot
    ///
    /// With `legacy_instruments` set, slots 10-15 play the same sound as
    /// slot 0, as hosts did before those instruments existed.
    pub fn new(registry: &SoundRegistry, legacy_instruments: bool) -> Self {
        let harp = registry.resolve(&ORIGINAL_INSTRUMENTS[0]);
        let mut sounds = [harp; INSTRUMENT_SLOTS as usize];

        for (slot, candidates) in sounds.iter_mut().zip(ORIGINAL_INSTRUMENTS.iter()) {
            *slot = registry.resolve(candidates);
        }

        if !legacy_instruments {
            let modern_start = ORIGINAL_INSTRUMENTS.len();
            sounds[modern_start..].copy_from_slice(&MODERN_INSTRUMENTS);
        }

        Self { sounds }
    }

    /// Sound for an instrument code; unknown codes play instrument 0
    pub fn sound(&self, instrument: u8) -> Sound {
        self.sounds
            .get(instrument as usize)
            .copied()
            .unwrap_or(self.sounds[0])
    }
}
