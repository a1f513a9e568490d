pub mod amplifier;
pub mod band;
pub mod instrument;
pub mod lineup;
pub mod music;

// Unrelated to the band, but built from the same modelling ideas
pub mod garage;
