//! Browser filter categories and the insertion-point inference

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::device::DeviceKind;

/// Content category the browser is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    #[default]
    Disabled,
    MidiEffectHotswap,
    AudioEffectHotswap,
    InstrumentHotswap,
    DrumPadHotswap,
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disabled => "disabled",
            Self::MidiEffectHotswap => "midi_effect_hotswap",
            Self::AudioEffectHotswap => "audio_effect_hotswap",
            Self::InstrumentHotswap => "instrument_hotswap",
            Self::DrumPadHotswap => "drum_pad_hotswap",
        };
        f.write_str(name)
    }
}

/// Where a newly browsed device lands relative to the track's selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertMode {
    #[default]
    Disabled,
    SelectedLeft,
    SelectedRight,
}

impl InsertMode {
    pub fn from_insert_left(insert_left: bool) -> Self {
        if insert_left {
            Self::SelectedLeft
        } else {
            Self::SelectedRight
        }
    }
}

impl fmt::Display for InsertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disabled => "disabled",
            Self::SelectedLeft => "selected_left",
            Self::SelectedRight => "selected_right",
        };
        f.write_str(name)
    }
}

/// Filter type for devices that fit between two consecutive devices of a
/// valid chain.
///
/// `None` on either side marks a chain boundary. A valid chain with MIDI
/// support looks like
///
/// ```text
/// <midi effect>* <instrument> <audio effect>*
/// ```
///
/// and a chain without MIDI support holds audio effects only. Only the two
/// neighbours are inspected; the rest of the chain is assumed valid.
pub fn filter_type_between(
    left: Option<DeviceKind>,
    right: Option<DeviceKind>,
    supports_midi: bool,
    is_drum_pad: bool,
    supports_instrument: bool,
) -> FilterType {
    if right.is_some_and(DeviceKind::is_midi_side) {
        return FilterType::MidiEffectHotswap;
    }
    if left.is_some_and(DeviceKind::is_audio_side) {
        return FilterType::AudioEffectHotswap;
    }
    match (supports_midi, supports_instrument, is_drum_pad) {
        (true, true, true) => FilterType::DrumPadHotswap,
        (true, true, false) => FilterType::InstrumentHotswap,
        (true, false, _) => FilterType::MidiEffectHotswap,
        (false, _, _) => FilterType::AudioEffectHotswap,
    }
}
