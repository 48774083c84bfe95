//! Devices, containers and their identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! object_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

object_id!(
    /// Unique identifier for tracks
    TrackId,
    "track"
);
object_id!(
    /// Unique identifier for rack and drum pad chains
    ChainId,
    "chain"
);
object_id!(
    /// Unique identifier for devices
    DeviceId,
    "device"
);
object_id!(
    /// Unique identifier for drum pads
    DrumPadId,
    "pad"
);

/// Device category, as reported by the DAW
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Instrument,
    MidiEffect,
    AudioEffect,
}

impl DeviceKind {
    /// Instruments and MIDI effects only accept MIDI-category content before them
    pub fn is_midi_side(self) -> bool {
        matches!(self, Self::Instrument | Self::MidiEffect)
    }

    /// Instruments and audio effects only accept audio-category content after them
    pub fn is_audio_side(self) -> bool {
        matches!(self, Self::Instrument | Self::AudioEffect)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Instrument => "instrument",
            Self::MidiEffect => "midi effect",
            Self::AudioEffect => "audio effect",
        };
        f.write_str(name)
    }
}

/// Something that holds an ordered device list.
///
/// Devices always live either directly on a track or inside a chain of a rack
/// (or of a drum pad).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainRef {
    Track(TrackId),
    Chain(ChainId),
}

impl ChainRef {
    pub fn is_track(self) -> bool {
        matches!(self, Self::Track(_))
    }
}

impl fmt::Display for ChainRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Track(id) => id.fmt(f),
            Self::Chain(id) => id.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_sides() {
        assert!(DeviceKind::Instrument.is_midi_side());
        assert!(DeviceKind::Instrument.is_audio_side());
        assert!(DeviceKind::MidiEffect.is_midi_side());
        assert!(!DeviceKind::MidiEffect.is_audio_side());
        assert!(DeviceKind::AudioEffect.is_audio_side());
        assert!(!DeviceKind::AudioEffect.is_midi_side());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(DeviceId(3).to_string(), "device#3");
        assert_eq!(ChainRef::Track(TrackId(1)).to_string(), "track#1");
        assert_eq!(ChainRef::Chain(ChainId(0)).to_string(), "chain#0");
    }
}
