// ensemble -- a band of instruments, modelled the object-oriented way
// Copyright (C) 2026  The ensemble developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! A band is an ordered collection of instruments performing together.

use std::io;

use log::debug;

use crate::instrument::Instrument;
use crate::music::Music;

/// An ordered lineup of instruments, fixed at construction.
pub struct Band {
    instruments: Vec<Box<dyn Instrument>>,
}

impl Band {
    pub fn new(instruments: Vec<Box<dyn Instrument>>) -> Band {
        Band { instruments }
    }

    pub fn instruments(&self) -> &[Box<dyn Instrument>] {
        &self.instruments
    }

    /// Let every instrument perform the piece, in lineup order.
    ///
    /// Nothing is aggregated; the performance is exactly the ordered
    /// sequence of each instrument's tune and play lines.
    pub fn perform(&self, music: &Music, out: &mut dyn io::Write) -> io::Result<()> {
        debug!("{} instruments performing", self.instruments.len());
        for instrument in &self.instruments {
            instrument.perform(music, out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Instrument whose output lines carry its name, so the order of a
    /// performance can be read back from the sink.
    #[derive(Debug)]
    struct Scripted(&'static str);

    impl Instrument for Scripted {
        fn brand(&self) -> &str {
            self.0
        }

        fn tune(&self) -> String {
            format!("tune {}", self.0)
        }

        fn play(&self, _music: &Music) -> String {
            format!("play {}", self.0)
        }
    }

    #[test]
    fn performs_each_instrument_once_in_order() {
        let band = Band::new(vec![
            Box::new(Scripted("first")),
            Box::new(Scripted("second")),
            Box::new(Scripted("third")),
        ]);

        let mut out = Vec::new();
        band.perform(&Music::parse(""), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "tune first\nplay first\ntune second\nplay second\ntune third\nplay third\n"
        );
    }

    #[test]
    fn empty_band_performs_silently() {
        let band = Band::new(Vec::new());
        let mut out = Vec::new();
        band.perform(&Music::parse("C L C"), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
