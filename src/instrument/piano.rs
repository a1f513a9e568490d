// ensemble -- a band of instruments, modelled the object-oriented way
// Copyright (C) 2026  The ensemble developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use crate::instrument::Instrument;
use crate::music::Music;

/// A piano of a given brand, with or without pedals.
#[derive(Debug)]
pub struct Piano {
    brand: String,
    has_pedal: bool,
}

impl Piano {
    /// Every piano of this make has the same keyboard.
    pub const KEYS: u32 = 32;
    pub const BLACK_KEYS: u32 = 12;

    pub fn new(brand: impl Into<String>, has_pedal: bool) -> Piano {
        Piano {
            brand: brand.into(),
            has_pedal,
        }
    }

    pub fn has_pedal(&self) -> bool {
        self.has_pedal
    }

    /// Play with explicit control over the pedals. The pedals only sound
    /// when the piano has them *and* the player asks for them.
    ///
    /// This is deliberately not part of the [`Instrument`] capability:
    /// through a `dyn Instrument` only [`play`](Instrument::play) is
    /// reachable, which falls back to the piano's own pedal configuration.
    pub fn play_notes(&self, music: &Music, using_pedals: bool) -> String {
        let prepared_notes = music.prepared();
        if self.has_pedal && using_pedals {
            format!("Play piano notes {} with pedals.", prepared_notes)
        } else {
            format!("Play piano notes {} without pedals.", prepared_notes)
        }
    }
}

impl Instrument for Piano {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn tune(&self) -> String {
        format!("Piano standard tuning for {}.", self.brand)
    }

    fn play(&self, music: &Music) -> String {
        self.play_notes(music, self.has_pedal)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pedal_use_requires_pedals_and_intent() {
        let music = Music::parse("C L C");
        let piano = Piano::new("Lomi", true);
        assert_eq!(
            piano.play_notes(&music, false),
            "Play piano notes C L C without pedals."
        );
        assert_eq!(
            piano.play_notes(&music, true),
            "Play piano notes C L C with pedals."
        );

        let pedalless = Piano::new("Lomi", false);
        assert_eq!(
            pedalless.play_notes(&music, true),
            "Play piano notes C L C without pedals."
        );
    }

    #[test]
    fn capability_play_uses_own_pedal_configuration() {
        let music = Music::parse("C L C");
        let piano = Piano::new("Lomi", true);
        assert_eq!(piano.play(&music), "Play piano notes C L C with pedals.");

        // and the same holds when dispatching through the capability
        let instrument: &dyn Instrument = &piano;
        assert_eq!(
            instrument.play(&music),
            "Play piano notes C L C with pedals."
        );
    }

    #[test]
    fn tuning_names_the_brand() {
        let piano = Piano::new("Lomi", true);
        assert_eq!(piano.tune(), "Piano standard tuning for Lomi.");
    }
}
