//! Host sound identifiers emitted by the decoder

use std::fmt;

use serde::{Serialize, Serializer};

/// A playable host sound
///
/// Hosts spell these differently across releases; a [`SoundRegistry`]
/// snapshot maps whatever spelling the host uses onto one of these.
///
/// [`SoundRegistry`]: crate::SoundRegistry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sound {
    BlockNoteBlockHarp,
    BlockNoteBlockBass,
    BlockNoteBlockBasedrum,
    BlockNoteBlockSnare,
    BlockNoteBlockHat,
    BlockNoteBlockGuitar,
    BlockNoteBlockFlute,
    BlockNoteBlockBell,
    BlockNoteBlockChime,
    BlockNoteBlockXylophone,
    BlockNoteBlockIronXylophone,
    BlockNoteBlockCowBell,
    BlockNoteBlockDidgeridoo,
    BlockNoteBlockBit,
    BlockNoteBlockBanjo,
    BlockNoteBlockPling,
    /// Always present in every host release; used when nothing else resolves
    UiToastIn,
}

impl Sound {
    /// Every known sound, in declaration order
    pub const ALL: [Sound; 17] = [
        Sound::BlockNoteBlockHarp,
        Sound::BlockNoteBlockBass,
        Sound::BlockNoteBlockBasedrum,
        Sound::BlockNoteBlockSnare,
        Sound::BlockNoteBlockHat,
        Sound::BlockNoteBlockGuitar,
        Sound::BlockNoteBlockFlute,
        Sound::BlockNoteBlockBell,
        Sound::BlockNoteBlockChime,
        Sound::BlockNoteBlockXylophone,
        Sound::BlockNoteBlockIronXylophone,
        Sound::BlockNoteBlockCowBell,
        Sound::BlockNoteBlockDidgeridoo,
        Sound::BlockNoteBlockBit,
        Sound::BlockNoteBlockBanjo,
        Sound::BlockNoteBlockPling,
        Sound::UiToastIn,
    ];

    /// Sound returned when no candidate name resolves
    pub const FALLBACK: Sound = Sound::UiToastIn;

    /// Canonical enumerant name in the current host naming
    pub const fn name(self) -> &'static str {
        match self {
            Sound::BlockNoteBlockHarp => "BLOCK_NOTE_BLOCK_HARP",
            Sound::BlockNoteBlockBass => "BLOCK_NOTE_BLOCK_BASS",
            Sound::BlockNoteBlockBasedrum => "BLOCK_NOTE_BLOCK_BASEDRUM",
            Sound::BlockNoteBlockSnare => "BLOCK_NOTE_BLOCK_SNARE",
            Sound::BlockNoteBlockHat => "BLOCK_NOTE_BLOCK_HAT",
            Sound::BlockNoteBlockGuitar => "BLOCK_NOTE_BLOCK_GUITAR",
            Sound::BlockNoteBlockFlute => "BLOCK_NOTE_BLOCK_FLUTE",
            Sound::BlockNoteBlockBell => "BLOCK_NOTE_BLOCK_BELL",
            Sound::BlockNoteBlockChime => "BLOCK_NOTE_BLOCK_CHIME",
            Sound::BlockNoteBlockXylophone => "BLOCK_NOTE_BLOCK_XYLOPHONE",
            Sound::BlockNoteBlockIronXylophone => "BLOCK_NOTE_BLOCK_IRON_XYLOPHONE",
            Sound::BlockNoteBlockCowBell => "BLOCK_NOTE_BLOCK_COW_BELL",
            Sound::BlockNoteBlockDidgeridoo => "BLOCK_NOTE_BLOCK_DIDGERIDOO",
            Sound::BlockNoteBlockBit => "BLOCK_NOTE_BLOCK_BIT",
            Sound::BlockNoteBlockBanjo => "BLOCK_NOTE_BLOCK_BANJO",
            Sound::BlockNoteBlockPling => "BLOCK_NOTE_BLOCK_PLING",
            Sound::UiToastIn => "UI_TOAST_IN",
        }
    }

    /// Namespaced key in the current host naming (lowercase, dotted)
    pub const fn key(self) -> &'static str {
        match self {
            Sound::BlockNoteBlockHarp => "block.note_block.harp",
            Sound::BlockNoteBlockBass => "block.note_block.bass",
            Sound::BlockNoteBlockBasedrum => "block.note_block.basedrum",
            Sound::BlockNoteBlockSnare => "block.note_block.snare",
            Sound::BlockNoteBlockHat => "block.note_block.hat",
            Sound::BlockNoteBlockGuitar => "block.note_block.guitar",
            Sound::BlockNoteBlockFlute => "block.note_block.flute",
            Sound::BlockNoteBlockBell => "block.note_block.bell",
            Sound::BlockNoteBlockChime => "block.note_block.chime",
            Sound::BlockNoteBlockXylophone => "block.note_block.xylophone",
            Sound::BlockNoteBlockIronXylophone => "block.note_block.iron_xylophone",
            Sound::BlockNoteBlockCowBell => "block.note_block.cow_bell",
            Sound::BlockNoteBlockDidgeridoo => "block.note_block.didgeridoo",
            Sound::BlockNoteBlockBit => "block.note_block.bit",
            Sound::BlockNoteBlockBanjo => "block.note_block.banjo",
            Sound::BlockNoteBlockPling => "block.note_block.pling",
            Sound::UiToastIn => "ui.toast.in",
        }
    }

    /// Look up a sound by its canonical enumerant name
    pub fn from_name(name: &str) -> Option<Sound> {
        Sound::ALL.into_iter().find(|sound| sound.name() == name)
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl Serialize for Sound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_inverts_name() {
        for sound in Sound::ALL {
            assert_eq!(Sound::from_name(sound.name()), Some(sound));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Sound::from_name("BLOCK_NOTE_HARP"), None);
        assert_eq!(Sound::from_name("block.note_block.harp"), None);
        assert_eq!(Sound::from_name(""), None);
    }

    #[test]
    fn test_names_and_keys_are_unique() {
        let mut names: Vec<_> = Sound::ALL.iter().map(|s| s.name()).collect();
        let mut keys: Vec<_> = Sound::ALL.iter().map(|s| s.key()).collect();
        names.sort_unstable();
        names.dedup();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(names.len(), Sound::ALL.len());
        assert_eq!(keys.len(), Sound::ALL.len());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Sound::UiToastIn.to_string(), "UI_TOAST_IN");
        assert_eq!(Sound::FALLBACK, Sound::UiToastIn);
    }
}
