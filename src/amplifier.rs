// ensemble -- a band of instruments, modelled the object-oriented way
// Copyright (C) 2026  The ensemble developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! A shared amplifier that gates its audible volume behind a power switch.

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

/// Handle to an amplifier that several instruments may be wired into.
///
/// Identity matters here: plugging in through one handle is observable
/// through every other handle to the same amplifier.
pub type SharedAmplifier = Rc<RefCell<Amplifier>>;

/// An amplifier with a power switch and a volume dial.
///
/// The stored volume is clamped to `0..=10` and is only audible while the
/// amplifier is powered: while unplugged, the dial reads zero no matter
/// where it was left.
///
/// # Examples
///
/// ```
/// use ensemble::amplifier::Amplifier;
///
/// let mut amplifier = Amplifier::new();
/// amplifier.set_volume(15);
/// assert_eq!(amplifier.volume(), 0);
/// amplifier.plug_in();
/// assert_eq!(amplifier.volume(), 10);
/// ```
#[derive(Debug)]
pub struct Amplifier {
    on: bool,
    volume: i32,
}

impl Amplifier {
    pub const MAX_VOLUME: i32 = 10;

    pub fn new() -> Amplifier {
        Amplifier { on: false, volume: 0 }
    }

    /// A fresh amplifier behind a shared handle, ready to be wired into
    /// more than one guitar.
    pub fn shared() -> SharedAmplifier {
        Rc::new(RefCell::new(Amplifier::new()))
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn plug_in(&mut self) {
        trace!("amplifier plugged in");
        self.on = true;
    }

    pub fn unplug(&mut self) {
        trace!("amplifier unplugged");
        self.on = false;
    }

    /// The audible volume: zero while unplugged, the stored value otherwise.
    pub fn volume(&self) -> i32 {
        if self.on {
            self.volume
        } else {
            0
        }
    }

    /// Turn the dial. Values outside `0..=10` are clamped, not rejected.
    pub fn set_volume(&mut self, volume: i32) {
        let clamped = volume.max(0).min(Self::MAX_VOLUME);
        if clamped != volume {
            trace!("volume {} clamped to {}", volume, clamped);
        }
        self.volume = clamped;
    }
}

impl Default for Amplifier {
    fn default() -> Self {
        Amplifier::new()
    }
}
