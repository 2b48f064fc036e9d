//! Text rendering of decoded songs

use std::fmt::Write;

use nether_nbs::{Note, Song};

/// Header, loop settings and layer table
pub fn summary(song: &Song) -> String {
    let info = song.info();
    let mut out = String::new();

    let _ = writeln!(out, "Title:       {}", or_dash(&info.title));
    let _ = writeln!(out, "Author:      {}", or_dash(&info.author));
    if !info.original_author.is_empty() {
        let _ = writeln!(out, "Original:    {}", info.original_author);
    }
    if !info.description.is_empty() {
        let _ = writeln!(out, "Description: {}", info.description);
    }
    let _ = writeln!(out, "Version:     {}", info.version);
    let _ = writeln!(
        out,
        "Length:      {} ticks (speed {}, tempo {:.2} t/s)",
        song.length(),
        song.speed(),
        f32::from(info.tempo_raw) / 100.0
    );
    let _ = writeln!(
        out,
        "Notes:       {} across {} ticks",
        song.note_count(),
        song.notes().len()
    );
    if let Some(settings) = info.loop_settings.filter(|l| l.enabled) {
        let count = match settings.max_count {
            0 => "forever".to_string(),
            n => format!("{} times", n),
        };
        let _ = writeln!(out, "Loop:        from tick {}, {}", settings.start_tick, count);
    }

    let _ = writeln!(out, "Layers:      {}", info.layers.len());
    for (index, layer) in info.layers.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>3} {:<24} vol {:>3}  pan {:>3}{}",
            index,
            or_dash(&layer.name),
            layer.volume,
            layer.panning,
            if layer.locked { "  [locked]" } else { "" }
        );
    }

    out
}

/// One line per note, grouped by tick
pub fn note_listing(song: &Song, until: Option<u32>) -> String {
    let mut out = String::new();
    for (tick, notes) in song.notes().range(..=until.unwrap_or(u32::MAX)) {
        for note in notes {
            let _ = writeln!(out, "{:>6}  {}", tick, note_line(note));
        }
    }
    out
}

fn note_line(note: &Note) -> String {
    format!(
        "L{:<3} {:<32} pitch {:.3}  vol {:.2}",
        note.layer(),
        note.sound(),
        note.pitch(),
        note.volume()
    )
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}
