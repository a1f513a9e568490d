//! A simple textual format for describing who is in the band.
//!
//! A lineup is a whitespace-separated list of entries of the form
//! `kind:brand[:option]`, for example
//! `piano:Lomi:pedal acoustic:Aloha electric:Gibson:medium bass:Fender`.
//! For a piano the option is `pedal`; for the guitar kinds it is the string
//! gauge. Every `electric` and `bass` entry is wired into the caller's
//! shared amplifier.

use snafu::Snafu;

use crate::amplifier::SharedAmplifier;
use crate::instrument::{AcousticGuitar, BassGuitar, ElectricGuitar, Instrument, Piano};

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ParseError {
    #[snafu(display("Unknown instrument kind {:?}", kind))]
    UnknownKind { kind: String },
    #[snafu(display("Missing brand in lineup entry {:?}", entry))]
    MissingBrand { entry: String },
    #[snafu(display("Unknown piano option {:?}, expected \"pedal\"", option))]
    UnknownPianoOption { option: String },
}

/// Parse a lineup into instruments, wiring the electrified ones into the
/// given amplifier. An empty lineup is fine and yields an empty band.
pub fn parse_lineup(
    input: &str,
    amplifier: &SharedAmplifier,
) -> Result<Vec<Box<dyn Instrument>>, ParseError> {
    let mut instruments: Vec<Box<dyn Instrument>> = Vec::new();
    for entry in input.split_whitespace() {
        let mut fields = entry.splitn(3, ':');
        // splitn always yields at least one field
        let kind = fields.next().unwrap_or("");
        let brand = match fields.next() {
            Some(brand) if !brand.is_empty() => brand,
            _ => {
                return Err(ParseError::MissingBrand {
                    entry: entry.to_string(),
                })
            }
        };
        let option = fields.next();

        let instrument: Box<dyn Instrument> = match kind {
            "piano" => {
                let has_pedal = match option {
                    None => false,
                    Some("pedal") => true,
                    Some(other) => {
                        return Err(ParseError::UnknownPianoOption {
                            option: other.to_string(),
                        })
                    }
                };
                Box::new(Piano::new(brand, has_pedal))
            }
            "acoustic" => Box::new(AcousticGuitar::new(
                brand,
                option.unwrap_or(AcousticGuitar::DEFAULT_GAUGE),
            )),
            "electric" => Box::new(ElectricGuitar::new(
                brand,
                option.unwrap_or(ElectricGuitar::DEFAULT_GAUGE),
                amplifier.clone(),
            )),
            "bass" => Box::new(BassGuitar::new(
                brand,
                option.unwrap_or(BassGuitar::DEFAULT_GAUGE),
                amplifier.clone(),
            )),
            _ => {
                return Err(ParseError::UnknownKind {
                    kind: kind.to_string(),
                })
            }
        };
        instruments.push(instrument);
    }
    Ok(instruments)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::amplifier::Amplifier;
    use crate::music::Music;

    #[test]
    fn parses_a_full_band() {
        let amplifier = Amplifier::shared();
        let instruments = parse_lineup(
            "piano:Lomi:pedal acoustic:Aloha electric:Gibson:medium bass:Fender:heavy",
            &amplifier,
        )
        .unwrap();
        let brands: Vec<_> = instruments.iter().map(|i| i.brand()).collect();
        assert_eq!(brands, ["Lomi", "Aloha", "Gibson", "Fender"]);
    }

    #[test]
    fn empty_lineup_is_empty_band() {
        let amplifier = Amplifier::shared();
        assert!(parse_lineup("  ", &amplifier).unwrap().is_empty());
    }

    #[test]
    fn electrified_entries_share_the_amplifier() {
        let amplifier = Amplifier::shared();
        let instruments = parse_lineup("electric:Gibson bass:Fender", &amplifier).unwrap();

        // tuning the electric is audible through the bass
        instruments[0].tune();
        assert_eq!(
            instruments[1].play(&Music::parse("C L C")),
            "Play bass line C L C at volume 5."
        );
    }

    #[test]
    fn rejects_unknown_kinds() {
        let amplifier = Amplifier::shared();
        assert_eq!(
            parse_lineup("theremin:Moog", &amplifier).unwrap_err(),
            ParseError::UnknownKind {
                kind: "theremin".to_string()
            }
        );
    }

    #[test]
    fn rejects_missing_brands() {
        let amplifier = Amplifier::shared();
        assert_eq!(
            parse_lineup("piano", &amplifier).unwrap_err(),
            ParseError::MissingBrand {
                entry: "piano".to_string()
            }
        );
        assert_eq!(
            parse_lineup("piano:", &amplifier).unwrap_err(),
            ParseError::MissingBrand {
                entry: "piano:".to_string()
            }
        );
    }

    #[test]
    fn rejects_unknown_piano_options() {
        let amplifier = Amplifier::shared();
        assert_eq!(
            parse_lineup("piano:Lomi:legs", &amplifier).unwrap_err(),
            ParseError::UnknownPianoOption {
                option: "legs".to_string()
            }
        );
    }
}
