//! Note stream and layer table decoding

use std::io::Read;

use super::header::Header;
use super::helpers::{read_bool, read_string, read_u8, read_u16};
use crate::error::DecodeError;
use crate::instrument::InstrumentMap;
use crate::song::{LayerInfo, Note};
use crate::{VERSION_EXTENDED_NOTES, VERSION_LAYER_PANNING};

/// Stereo position used before layers carried panning
const CENTER_PANNING: u8 = 100;

/// Notes in stream order, plus the last tick the stream reached
#[derive(Debug, Default)]
pub(crate) struct NoteStream {
    pub notes: Vec<Note>,
    pub last_tick: Option<u32>,
}

/// Decode the note stream
///
/// The stream is a sequence of tick jumps, each followed by a sequence of
/// layer jumps with one note record per layer jump. A zero jump ends the
/// inner sequence; a zero tick jump ends the stream.
pub(crate) fn read_notes<R: Read>(
    reader: &mut R,
    header: &Header,
    instruments: &InstrumentMap,
) -> Result<NoteStream, DecodeError> {
    let extended = header.version() >= VERSION_EXTENDED_NOTES;
    let first_custom = header.info.first_custom_instrument;
    let shift = header.instrument_shift();

    let mut stream = NoteStream::default();
    let mut tick: i64 = -1;

    loop {
        let tick_jump = read_u16(reader, "tick jump")?;
        if tick_jump == 0 {
            break;
        }
        tick += i64::from(tick_jump);
        let note_tick = u32::try_from(tick)
            .map_err(|_| DecodeError::invalid("tick jump", "tick position overflow"))?;
        stream.last_tick = Some(note_tick);

        let mut layer: i64 = -1;
        loop {
            let layer_jump = read_u16(reader, "layer jump")?;
            if layer_jump == 0 {
                break;
            }
            layer += i64::from(layer_jump);
            let note_layer = u32::try_from(layer)
                .map_err(|_| DecodeError::invalid("layer jump", "layer index overflow"))?;

            let mut instrument = read_u8(reader, "note instrument")?;
            let key = read_u8(reader, "note key")?;
            if extended {
                let _velocity = read_u8(reader, "note velocity")?;
                let _panning = read_u8(reader, "note panning")?;
                let _fine_pitch = read_u16(reader, "note fine pitch")?;
            }

            // Older files numbered custom instruments from a lower slot
            if shift > 0 && instrument >= first_custom {
                instrument = instrument.saturating_add(shift as u8);
            }

            stream.notes.push(Note::new(
                note_tick,
                note_layer,
                instrument,
                key,
                instruments.sound(instrument),
            ));
        }
    }

    Ok(stream)
}

/// Decode the layer table that follows the note stream
pub(crate) fn read_layers<R: Read>(
    reader: &mut R,
    header: &Header,
) -> Result<Vec<LayerInfo>, DecodeError> {
    let version = header.version();
    (0..header.layer_count)
        .map(|_| {
            let name = read_string(reader, "layer name")?;
            let locked = if version >= VERSION_EXTENDED_NOTES {
                read_bool(reader, "layer lock")?
            } else {
                false
            };
            let volume = read_u8(reader, "layer volume")?;
            let panning = if version >= VERSION_LAYER_PANNING {
                read_u8(reader, "layer panning")?
            } else {
                CENTER_PANNING
            };
            Ok(LayerInfo {
                name,
                locked,
                volume,
                panning,
            })
        })
        .collect()
}
