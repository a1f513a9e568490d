// ensemble -- a band of instruments, modelled the object-oriented way
// Copyright (C) 2026  The ensemble developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `concert` - assemble a band from a lineup description and let it perform.

use std::io;
use std::rc::Rc;

use log::info;
use structopt::StructOpt;

use ensemble::amplifier::Amplifier;
use ensemble::band::Band;
use ensemble::garage::{AirFreshener, Car};
use ensemble::lineup;
use ensemble::music::Music;

#[derive(Debug, StructOpt)]
#[structopt(name = "concert", about = "Assemble a band and make it perform")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// The notes of the piece, separated by whitespace.
    #[structopt(long, default_value = "C L C")]
    notes: String,

    /// Who is in the band: whitespace-separated `kind:brand[:option]` entries.
    #[structopt(
        long,
        default_value = "piano:Lomi:pedal acoustic:Aloha electric:Gibson:medium bass:Fender:heavy"
    )]
    lineup: String,

    /// Also take the car out of the garage after the show.
    #[structopt(long)]
    drive: bool,
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level).unwrap();

    let music = Music::parse(&opt.notes);

    // one amplifier backstage, shared by every electrified instrument
    let amplifier = Amplifier::shared();
    let instruments = lineup::parse_lineup(&opt.lineup, &amplifier)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let band = Band::new(instruments);

    info!(
        "{} instruments perform {:?}",
        band.instruments().len(),
        music.prepared()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    band.perform(&music, &mut out)?;

    if opt.drive {
        let freshener = Rc::new(AirFreshener::default());
        info!("driving home, the car smells of {}", freshener.smell());
        Car::new(freshener).drive(&mut out)?;
    }

    Ok(())
}
