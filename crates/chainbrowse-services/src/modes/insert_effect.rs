//! Insert browsing: add a new device next to the selection

use chainbrowse_core::{
    filter_type_between, ChainRef, DeviceId, FilterType, InsertMode, LiveObject, TrackId,
};
use tracing::{debug, warn};

use super::Mode;
use crate::live::{DeviceTree, LiveContext, SelectionState};

/// Restricts the browser to the device category that fits next to the
/// selected device, and tells the track which side the new device goes.
#[derive(Debug, Clone, Default)]
pub struct InsertEffectModeController {
    insert_left: bool,
    track_to_add_effect: Option<TrackId>,
    selection_for_insert: Option<DeviceId>,
    hotswap_was_enabled: bool,
}

impl InsertEffectModeController {
    /// Inserts to the right of the selection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_insert_left(insert_left: bool) -> Self {
        Self {
            insert_left,
            ..Self::default()
        }
    }

    pub fn insert_left(&self) -> bool {
        self.insert_left
    }

    pub fn insert_mode(&self) -> InsertMode {
        InsertMode::from_insert_left(self.insert_left)
    }

    /// Device the new device is inserted next to. `None` means the chain
    /// boundary of the selected track.
    pub fn selection_for_insert(&self) -> Option<DeviceId> {
        self.selection_for_insert
    }

    fn resolve_selection_for_insert<C: SelectionState + DeviceTree + ?Sized>(&self, ctx: &C) -> Option<DeviceId> {
        let selected = ctx.selected_object();

        if let Some(pad) = selected.and_then(|o| o.as_drum_pad()) {
            let devices = ctx
                .drum_pad_chains(pad)
                .first()
                .map(|&chain| ctx.chain_devices(ChainRef::Chain(chain)))
                .unwrap_or_default();
            let edge = if self.insert_left { devices.first() } else { devices.last() };
            if let Some(&device) = edge {
                return Some(device);
            }
        }

        selected
            .and_then(|o| o.as_device())
            .or_else(|| ctx.selected_device())
    }

    /// Filter type for the current insertion point
    pub fn filter_type<C: SelectionState + DeviceTree + ?Sized>(&self, ctx: &C) -> FilterType {
        let selected = self.selection_for_insert;
        let chain = match selected {
            Some(device) => ctx.device_parent(device),
            None => ctx.selected_track().map(ChainRef::Track),
        };
        let Some(chain) = chain else {
            warn!("No chain to insert into, browser filter stays disabled");
            return FilterType::Disabled;
        };

        let devices = ctx.chain_devices(chain);
        // Without a reference device the insertion point is the end of the chain
        let index = selected
            .and_then(|device| devices.iter().position(|&d| d == device))
            .unwrap_or(devices.len());
        let is_drum_pad = matches!(ctx.chain_parent(chain), Some(LiveObject::DrumPad(_)));
        let midi_support = ctx.chain_has_midi_input(chain);
        let supports_instrument = midi_support && (ctx.chain_has_audio_output(chain) || chain.is_track());
        let kind_of = |device: Option<DeviceId>| device.and_then(|d| ctx.device_kind(d));

        let (left, right) = if is_drum_pad {
            (selected, devices.get(index + 1).copied())
        } else {
            let left = if self.insert_left && index > 0 {
                devices.get(index - 1).copied()
            } else {
                None
            };
            (left, selected)
        };

        filter_type_between(kind_of(left), kind_of(right), midi_support, is_drum_pad, supports_instrument)
    }
}

impl<C: LiveContext + ?Sized> Mode<C> for InsertEffectModeController {
    fn name(&self) -> &'static str {
        if self.insert_left { "insert_effect_left" } else { "insert_effect_right" }
    }

    fn enter_mode(&mut self, ctx: &mut C) {
        self.track_to_add_effect = ctx.selected_track();
        self.selection_for_insert = self.resolve_selection_for_insert(&*ctx);

        match self.track_to_add_effect {
            Some(track) => ctx.set_device_insert_mode(track, self.insert_mode()),
            None => warn!("No track selected for insert"),
        }

        let filter_type = self.filter_type(&*ctx);
        ctx.set_filter_type(filter_type);

        self.hotswap_was_enabled = ctx.browse_mode();
        if self.hotswap_was_enabled {
            ctx.toggle_browse();
        }

        debug!(
            "Insert {} of {:?}, filter {}",
            self.insert_mode(),
            self.selection_for_insert,
            filter_type
        );
    }

    fn leave_mode(&mut self, ctx: &mut C) {
        if let Some(track) = self.track_to_add_effect.take() {
            ctx.set_device_insert_mode(track, InsertMode::Disabled);
        }
        ctx.set_filter_type(FilterType::Disabled);
        if std::mem::take(&mut self.hotswap_was_enabled) != ctx.browse_mode() {
            ctx.toggle_browse();
        }
        self.selection_for_insert = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::live::{ApplicationView, BrowserState, TrackView};
    use crate::live_set::LiveSet;
    use chainbrowse_core::{DeviceKind, DrumPadId};

    struct KeysTrack {
        set: LiveSet,
        track: TrackId,
        arp: DeviceId,
        synth: DeviceId,
        reverb: DeviceId,
    }

    /// MIDI track: Arp | Synth | Reverb
    fn keys_track() -> KeysTrack {
        let mut set = LiveSet::new();
        let track = set.add_track("Keys", true, true);
        let chain = ChainRef::Track(track);
        let arp = set.add_device(chain, "Arp", DeviceKind::MidiEffect).unwrap();
        let synth = set.add_device(chain, "Synth", DeviceKind::Instrument).unwrap();
        let reverb = set.add_device(chain, "Reverb", DeviceKind::AudioEffect).unwrap();
        set.select_track(Some(track)).unwrap();
        KeysTrack { set, track, arp, synth, reverb }
    }

    /// Drum rack on a MIDI track with one pad holding `pad_devices`
    fn drum_track(pad_devices: &[(&str, DeviceKind)], pad_audio_output: bool) -> (LiveSet, DrumPadId, Vec<DeviceId>) {
        let mut set = LiveSet::new();
        let track = set.add_track("Drums", true, true);
        let rack = set.add_device(ChainRef::Track(track), "Drum Rack", DeviceKind::Instrument).unwrap();
        let pad = set.add_drum_pad(rack, "Kick", 36).unwrap();
        let chain = set.add_pad_chain(pad, "Kick", true, pad_audio_output).unwrap();
        let devices = pad_devices
            .iter()
            .map(|&(name, kind)| set.add_device(ChainRef::Chain(chain), name, kind).unwrap())
            .collect();
        set.select_track(Some(track)).unwrap();
        set.select_object(Some(LiveObject::DrumPad(pad))).unwrap();
        (set, pad, devices)
    }

    fn enter(set: &mut LiveSet, insert_left: bool) -> InsertEffectModeController {
        let mut mode = InsertEffectModeController::with_insert_left(insert_left);
        mode.enter_mode(set);
        mode
    }

    #[test]
    fn test_insert_right_of_instrument_selection() {
        let mut t = keys_track();
        t.set.select_object(Some(LiveObject::Device(t.synth))).unwrap();
        let mode = enter(&mut t.set, false);

        assert_eq!(mode.selection_for_insert(), Some(t.synth));
        assert_eq!(t.set.filter_type(), FilterType::MidiEffectHotswap);
        assert_eq!(t.set.device_insert_mode(t.track), InsertMode::SelectedRight);
    }

    #[test]
    fn test_insert_left_between_instrument_and_audio_effect() {
        let mut t = keys_track();
        t.set.select_object(Some(LiveObject::Device(t.reverb))).unwrap();
        enter(&mut t.set, true);

        assert_eq!(t.set.filter_type(), FilterType::AudioEffectHotswap);
        assert_eq!(t.set.device_insert_mode(t.track), InsertMode::SelectedLeft);
    }

    #[test]
    fn test_insert_left_of_first_device() {
        let mut t = keys_track();
        t.set.select_object(Some(LiveObject::Device(t.arp))).unwrap();
        enter(&mut t.set, true);
        assert_eq!(t.set.filter_type(), FilterType::MidiEffectHotswap);
    }

    #[test]
    fn test_non_device_selection_falls_back_to_selected_device() {
        let mut t = keys_track();
        t.set.select_device(Some(t.reverb)).unwrap();
        t.set.select_object(Some(LiveObject::Track(t.track))).unwrap();
        let mode = enter(&mut t.set, false);
        assert_eq!(mode.selection_for_insert(), Some(t.reverb));
    }

    #[test]
    fn test_empty_midi_track_browses_instruments() {
        let mut set = LiveSet::new();
        let track = set.add_track("Empty", true, true);
        set.select_track(Some(track)).unwrap();
        let mode = enter(&mut set, false);

        assert_eq!(mode.selection_for_insert(), None);
        assert_eq!(set.filter_type(), FilterType::InstrumentHotswap);
    }

    #[test]
    fn test_empty_audio_track_browses_audio_effects() {
        let mut set = LiveSet::new();
        let track = set.add_track("Vox", false, true);
        set.select_track(Some(track)).unwrap();
        enter(&mut set, true);
        assert_eq!(set.filter_type(), FilterType::AudioEffectHotswap);
    }

    #[test]
    fn test_no_reference_device_inserting_left_sees_chain_end() {
        let mut set = LiveSet::new();
        let track = set.add_track("Bass", true, true);
        set.add_device(ChainRef::Track(track), "Synth", DeviceKind::Instrument).unwrap();
        set.select_track(Some(track)).unwrap();

        enter(&mut set, true);
        assert_eq!(set.filter_type(), FilterType::AudioEffectHotswap);
    }

    #[test]
    fn test_drum_pad_picks_chain_edge() {
        let pad_devices = [("Simpler", DeviceKind::Instrument), ("Saturator", DeviceKind::AudioEffect)];

        let (mut set, _, devices) = drum_track(&pad_devices, true);
        let mode = enter(&mut set, false);
        assert_eq!(mode.selection_for_insert(), Some(devices[1]));
        assert_eq!(set.filter_type(), FilterType::AudioEffectHotswap);

        let (mut set, _, devices) = drum_track(&pad_devices, true);
        let mode = enter(&mut set, true);
        assert_eq!(mode.selection_for_insert(), Some(devices[0]));
        assert_eq!(set.filter_type(), FilterType::AudioEffectHotswap);
    }

    #[test]
    fn test_drum_pad_instrument_right_of_reference_limits_to_midi_effects() {
        let pad_devices = [("Pitch", DeviceKind::MidiEffect), ("Simpler", DeviceKind::Instrument)];
        let (mut set, _, devices) = drum_track(&pad_devices, true);

        let mode = enter(&mut set, true);
        assert_eq!(mode.selection_for_insert(), Some(devices[0]));
        assert_eq!(set.filter_type(), FilterType::MidiEffectHotswap);
    }

    #[test]
    fn test_midi_track_without_audio_output_still_takes_instruments() {
        let mut set = LiveSet::new();
        let track = set.add_track("Sends", true, false);
        set.select_track(Some(track)).unwrap();
        let mode = enter(&mut set, false);

        assert_eq!(mode.selection_for_insert(), None);
        assert_eq!(set.filter_type(), FilterType::InstrumentHotswap);
    }

    #[test]
    fn test_drum_pad_after_midi_effect_browses_drum_pads() {
        let (mut set, _, _) = drum_track(&[("Pitch", DeviceKind::MidiEffect)], true);
        enter(&mut set, false);
        assert_eq!(set.filter_type(), FilterType::DrumPadHotswap);
    }

    #[test]
    fn test_drum_pad_without_audio_output_cannot_take_instrument() {
        let (mut set, _, _) = drum_track(&[("Pitch", DeviceKind::MidiEffect)], false);
        enter(&mut set, false);
        assert_eq!(set.filter_type(), FilterType::MidiEffectHotswap);
    }

    #[test]
    fn test_empty_drum_pad_uses_selected_device() {
        let (mut set, pad, _) = drum_track(&[], true);
        let rack = set.drum_pad_rack(pad).unwrap();
        set.select_device(Some(rack)).unwrap();

        let mode = enter(&mut set, false);
        assert_eq!(mode.selection_for_insert(), Some(rack));
        assert_eq!(set.filter_type(), FilterType::MidiEffectHotswap);
    }

    #[test]
    fn test_rack_chain_needs_audio_output_for_instruments() {
        for (audio_output, expected) in [
            (true, FilterType::InstrumentHotswap),
            (false, FilterType::MidiEffectHotswap),
        ] {
            let mut set = LiveSet::new();
            let track = set.add_track("Keys", true, true);
            let rack = set.add_device(ChainRef::Track(track), "Rack", DeviceKind::Instrument).unwrap();
            let chain = set.add_rack_chain(rack, "Layer", true, audio_output).unwrap();
            let delay = set.add_device(ChainRef::Chain(chain), "Delay", DeviceKind::AudioEffect).unwrap();
            set.select_track(Some(track)).unwrap();
            set.select_object(Some(LiveObject::Device(delay))).unwrap();

            enter(&mut set, true);
            assert_eq!(set.filter_type(), expected);
        }
    }

    #[test]
    fn test_enter_turns_browse_off_and_leave_restores_it() {
        let mut t = keys_track();
        t.set.set_browse_mode(true);
        let mut mode = enter(&mut t.set, false);
        assert!(!t.set.browse_mode());

        mode.leave_mode(&mut t.set);
        assert!(t.set.browse_mode());
        assert_eq!(t.set.filter_type(), FilterType::Disabled);
        assert_eq!(t.set.device_insert_mode(t.track), InsertMode::Disabled);
        assert_eq!(mode.selection_for_insert(), None);
    }

    #[test]
    fn test_leave_resets_even_without_enter() {
        let mut t = keys_track();
        t.set.set_filter_type(FilterType::InstrumentHotswap);
        let mut mode = InsertEffectModeController::new();
        mode.leave_mode(&mut t.set);

        assert_eq!(t.set.filter_type(), FilterType::Disabled);
        assert_eq!(t.set.device_insert_mode(t.track), InsertMode::Disabled);
        assert!(!t.set.browse_mode());
    }

    #[test]
    fn test_nothing_selected_stays_disabled() {
        let mut set = LiveSet::new();
        set.add_track("Keys", true, true);
        let mut mode = enter(&mut set, false);
        assert_eq!(set.filter_type(), FilterType::Disabled);
        mode.leave_mode(&mut set);
        assert_eq!(set.filter_type(), FilterType::Disabled);
    }

    #[test]
    fn test_insert_mode_and_name() {
        let left = InsertEffectModeController::with_insert_left(true);
        let right = InsertEffectModeController::new();
        assert!(left.insert_left());
        assert_eq!(left.insert_mode(), InsertMode::SelectedLeft);
        assert_eq!(right.insert_mode(), InsertMode::SelectedRight);
        assert_eq!(Mode::<LiveSet>::name(&right), "insert_effect_right");
    }
}
