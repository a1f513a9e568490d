// ensemble -- a band of instruments, modelled the object-oriented way
// Copyright (C) 2026  The ensemble developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The guitar family. Every guitar carries a string gauge; the electrified
//! members are additionally wired into a [`SharedAmplifier`] they do not own.

use log::debug;

use crate::amplifier::SharedAmplifier;
use crate::instrument::Instrument;
use crate::music::Music;

/// Volume an electric guitar dials in while tuning up.
const TUNING_VOLUME: i32 = 5;

/// An acoustic guitar needs nothing but its strings.
#[derive(Debug)]
pub struct AcousticGuitar {
    brand: String,
    string_gauge: String,
}

impl AcousticGuitar {
    pub const NUMBER_OF_STRINGS: u32 = 6;
    pub const FRET_COUNT: u32 = 20;
    pub const DEFAULT_GAUGE: &'static str = "light";

    pub fn new(brand: impl Into<String>, string_gauge: impl Into<String>) -> AcousticGuitar {
        AcousticGuitar {
            brand: brand.into(),
            string_gauge: string_gauge.into(),
        }
    }

    pub fn string_gauge(&self) -> &str {
        &self.string_gauge
    }
}

impl Instrument for AcousticGuitar {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn tune(&self) -> String {
        format!("Tune {} acoustic with E A D G B E", self.brand)
    }

    fn play(&self, music: &Music) -> String {
        format!("Play folk tune on frets {}.", music.prepared())
    }
}

/// An electric guitar wired into a shared amplifier.
///
/// Tuning powers the amplifier and dials in a default volume, which every
/// other instrument wired into the same amplifier will observe.
#[derive(Debug)]
pub struct ElectricGuitar {
    brand: String,
    string_gauge: String,
    amplifier: SharedAmplifier,
}

impl ElectricGuitar {
    pub const DEFAULT_GAUGE: &'static str = "light";

    pub fn new(
        brand: impl Into<String>,
        string_gauge: impl Into<String>,
        amplifier: SharedAmplifier,
    ) -> ElectricGuitar {
        ElectricGuitar {
            brand: brand.into(),
            string_gauge: string_gauge.into(),
            amplifier,
        }
    }

    pub fn string_gauge(&self) -> &str {
        &self.string_gauge
    }
}

impl Instrument for ElectricGuitar {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn tune(&self) -> String {
        let mut amplifier = self.amplifier.borrow_mut();
        amplifier.plug_in();
        amplifier.set_volume(TUNING_VOLUME);
        debug!("{}: amplifier on at volume {}", self.brand, amplifier.volume());
        format!("Tune {} bass with E A D G", self.brand)
    }

    fn play(&self, music: &Music) -> String {
        format!(
            "Play bass line {} at volume {}.",
            music.prepared(),
            self.amplifier.borrow().volume()
        )
    }
}

/// A bass guitar, sharing its amplifier the same way the electric does but
/// leaving the volume dial where it found it.
#[derive(Debug)]
pub struct BassGuitar {
    brand: String,
    string_gauge: String,
    amplifier: SharedAmplifier,
}

impl BassGuitar {
    pub const DEFAULT_GAUGE: &'static str = "heavy";

    pub fn new(
        brand: impl Into<String>,
        string_gauge: impl Into<String>,
        amplifier: SharedAmplifier,
    ) -> BassGuitar {
        BassGuitar {
            brand: brand.into(),
            string_gauge: string_gauge.into(),
            amplifier,
        }
    }

    pub fn string_gauge(&self) -> &str {
        &self.string_gauge
    }
}

impl Instrument for BassGuitar {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn tune(&self) -> String {
        self.amplifier.borrow_mut().plug_in();
        format!("Tune {} bass with E A D G", self.brand)
    }

    fn play(&self, music: &Music) -> String {
        format!(
            "Play bass line {} at volume {}.",
            music.prepared(),
            self.amplifier.borrow().volume()
        )
    }
}
