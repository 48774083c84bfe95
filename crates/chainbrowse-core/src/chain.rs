//! Structural rules for device chains

use crate::device::DeviceKind;
use crate::error::{ChainBrowseError, Result};

/// Check that `kinds` forms a valid chain.
///
/// With MIDI support: `<midi effect>* <instrument> <audio effect>*`, where an
/// instrument-less chain may hold MIDI effects only. Without MIDI support:
/// `<audio effect>*`.
pub fn validate_chain(kinds: &[DeviceKind], supports_midi: bool) -> Result<()> {
    let mut seen_instrument = false;

    for (index, &kind) in kinds.iter().enumerate() {
        let reason = match kind {
            _ if !supports_midi && kind != DeviceKind::AudioEffect => {
                Some("chain without MIDI input only holds audio effects")
            }
            DeviceKind::MidiEffect if seen_instrument => Some("MIDI effect after the instrument"),
            DeviceKind::Instrument if seen_instrument => Some("more than one instrument"),
            DeviceKind::AudioEffect if supports_midi && !seen_instrument => {
                Some("audio effect before the instrument")
            }
            _ => None,
        };

        if let Some(reason) = reason {
            return Err(ChainBrowseError::InvalidChain { index, kind, reason });
        }
        seen_instrument |= kind == DeviceKind::Instrument;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use DeviceKind::*;

    fn failing_index(kinds: &[DeviceKind], supports_midi: bool) -> Option<usize> {
        match validate_chain(kinds, supports_midi) {
            Err(ChainBrowseError::InvalidChain { index, .. }) => Some(index),
            _ => None,
        }
    }

    #[test]
    fn test_valid_midi_chains() {
        assert!(validate_chain(&[], true).is_ok());
        assert!(validate_chain(&[MidiEffect, MidiEffect], true).is_ok());
        assert!(validate_chain(&[Instrument], true).is_ok());
        assert!(validate_chain(&[MidiEffect, Instrument, AudioEffect, AudioEffect], true).is_ok());
    }

    #[test]
    fn test_valid_audio_chains() {
        assert!(validate_chain(&[], false).is_ok());
        assert!(validate_chain(&[AudioEffect, AudioEffect], false).is_ok());
    }

    #[test]
    fn test_invalid_chains_report_position() {
        assert_eq!(failing_index(&[Instrument, MidiEffect], true), Some(1));
        assert_eq!(failing_index(&[Instrument, AudioEffect, Instrument], true), Some(2));
        assert_eq!(failing_index(&[MidiEffect, AudioEffect], true), Some(1));
        assert_eq!(failing_index(&[AudioEffect, MidiEffect], false), Some(1));
        assert_eq!(failing_index(&[Instrument], false), Some(0));
    }

    #[test]
    fn test_error_message() {
        let err = validate_chain(&[Instrument, MidiEffect], true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid chain at position 1 (midi effect): MIDI effect after the instrument"
        );
    }
}
