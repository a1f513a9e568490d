// ensemble -- a band of instruments, modelled the object-oriented way
// Copyright (C) 2026  The ensemble developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Composition and aggregation away from the bandstand: a car owns its
//! engine and wheels outright, while the air freshener hanging from the
//! mirror is supplied from outside and outlives any particular car.

use std::io;
use std::rc::Rc;

/// Built with the car, scrapped with the car.
#[derive(Debug)]
pub struct Engine {
    power: u32,
}

impl Engine {
    fn new() -> Engine {
        Engine { power: 100 }
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn start(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Engine is on")
    }
}

#[derive(Debug)]
pub struct Wheel {
    radius: u32,
}

impl Wheel {
    fn new() -> Wheel {
        Wheel { radius: 10 }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn rotate(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "wheels is rotating")
    }
}

/// Lives independently of any car it happens to hang in.
#[derive(Debug)]
pub struct AirFreshener {
    smell: String,
}

impl AirFreshener {
    pub fn new(smell: impl Into<String>) -> AirFreshener {
        AirFreshener { smell: smell.into() }
    }

    pub fn smell(&self) -> &str {
        &self.smell
    }
}

impl Default for AirFreshener {
    fn default() -> Self {
        AirFreshener::new("Pine")
    }
}

/// A car composes its engine and exactly four wheels, created internally
/// and never shared. The air freshener is merely referenced.
pub struct Car {
    engine: Engine,
    wheels: Vec<Wheel>,
    air_freshener: Rc<AirFreshener>,
}

impl Car {
    pub const WHEEL_COUNT: usize = 4;

    pub fn new(air_freshener: Rc<AirFreshener>) -> Car {
        Car {
            engine: Engine::new(),
            wheels: (0..Self::WHEEL_COUNT).map(|_| Wheel::new()).collect(),
            air_freshener,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn air_freshener(&self) -> &AirFreshener {
        &self.air_freshener
    }

    /// Start the engine, rotate each wheel in creation order, then roll.
    pub fn drive(&self, out: &mut dyn io::Write) -> io::Result<()> {
        self.engine.start(out)?;
        for wheel in &self.wheels {
            wheel.rotate(out)?;
        }
        writeln!(out, "The car is moving")
    }
}
