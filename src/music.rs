// ensemble -- a band of instruments, modelled the object-oriented way
// Copyright (C) 2026  The ensemble developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Definitions of what a piece of music is.

/// A piece of music is an ordered sequence of note tokens.
///
/// Notes are opaque strings, the sequence may be empty, and once a piece is
/// constructed it never changes. Instruments decorate the rendering produced
/// by [`prepared`](Music::prepared), they never touch the notes themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Music {
    notes: Vec<String>,
}

impl Music {
    pub fn new(notes: Vec<String>) -> Music {
        Music { notes }
    }

    /// Parse a piece from a whitespace-separated note string.
    ///
    /// Parsing is total: blank input simply yields an empty piece.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensemble::music::Music;
    ///
    /// assert_eq!(Music::parse("C L C").prepared(), "C L C");
    /// assert_eq!(Music::parse("   ").prepared(), "");
    /// ```
    pub fn parse(input: &str) -> Music {
        Music {
            notes: input.split_whitespace().map(|note| note.to_string()).collect(),
        }
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Render the notes as a single string, joined by single spaces.
    pub fn prepared(&self) -> String {
        self.notes.join(" ")
    }
}
