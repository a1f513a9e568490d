// ensemble -- a band of instruments, modelled the object-oriented way
// Copyright (C) 2026  The ensemble developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The capability every instrument provides: it can be tuned, and it can
//! play a piece of music.

use std::io;

use crate::music::Music;

pub mod guitar;
pub mod piano;

pub use guitar::{AcousticGuitar, BassGuitar, ElectricGuitar};
pub use piano::Piano;

/// An instrument of some brand that can be tuned and played.
///
/// The undecorated rendering of a piece is [`Music::prepared`]; every
/// implementation of [`play`](Instrument::play) builds on that and wraps it
/// in its own phrasing.
pub trait Instrument: std::fmt::Debug {
    /// The brand name the instrument was built with.
    fn brand(&self) -> &str;

    /// Get the instrument in tune and describe the tuning.
    fn tune(&self) -> String;

    /// Render the piece the way this instrument sounds.
    fn play(&self, music: &Music) -> String;

    /// Tune first, then play, writing one line for each.
    ///
    /// Implementations customize a performance solely through
    /// [`tune`](Instrument::tune) and [`play`](Instrument::play).
    fn perform(&self, music: &Music, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "{}", self.tune())?;
        writeln!(out, "{}", self.play(music))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug)]
    struct Kazoo;

    impl Instrument for Kazoo {
        fn brand(&self) -> &str {
            "Hum"
        }

        fn tune(&self) -> String {
            "Kazoo needs no tuning".to_string()
        }

        fn play(&self, music: &Music) -> String {
            format!("Hum along to {}", music.prepared())
        }
    }

    #[test]
    fn perform_writes_tune_then_play() {
        let music = Music::parse("C L C");
        let mut out = Vec::new();
        Kazoo.perform(&music, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Kazoo needs no tuning\nHum along to C L C\n"
        );
    }
}
