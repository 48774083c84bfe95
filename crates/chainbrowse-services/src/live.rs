//! Capability traits for the DAW collaborators the browse modes talk to

use chainbrowse_core::{
    ChainId, ChainRef, DeviceId, DeviceKind, DrumPadId, FilterType, InsertMode, LiveObject,
    TrackId,
};

/// The user's current selection
pub trait SelectionState {
    fn hotswap_target(&self) -> Option<LiveObject>;
    fn selected_object(&self) -> Option<LiveObject>;
    fn set_selected_object(&mut self, object: LiveObject);
    fn selected_device(&self) -> Option<DeviceId>;
    fn selected_track(&self) -> Option<TrackId>;
}

/// Global application view. Browse mode can only be toggled, not set.
pub trait ApplicationView {
    fn browse_mode(&self) -> bool;
    fn toggle_browse(&mut self);
}

/// Browser content restriction
pub trait BrowserState {
    fn filter_type(&self) -> FilterType;
    fn set_filter_type(&mut self, filter_type: FilterType);
}

/// Per-track view flags
pub trait TrackView {
    fn device_insert_mode(&self, track: TrackId) -> InsertMode;
    fn set_device_insert_mode(&mut self, track: TrackId, mode: InsertMode);
}

/// Read-only introspection of tracks, chains and devices
pub trait DeviceTree {
    fn device_kind(&self, device: DeviceId) -> Option<DeviceKind>;
    /// Container the device sits in
    fn device_parent(&self, device: DeviceId) -> Option<ChainRef>;
    /// Devices of a container, in chain order
    fn chain_devices(&self, chain: ChainRef) -> Vec<DeviceId>;
    fn chain_has_midi_input(&self, chain: ChainRef) -> bool;
    fn chain_has_audio_output(&self, chain: ChainRef) -> bool;
    /// Owner of a rack chain: a drum pad or a rack device. Tracks have none.
    fn chain_parent(&self, chain: ChainRef) -> Option<LiveObject>;
    fn drum_pad_chains(&self, pad: DrumPadId) -> Vec<ChainId>;
}

/// Everything a browse mode may need from the host
pub trait LiveContext: SelectionState + ApplicationView + BrowserState + TrackView + DeviceTree {}

impl<T> LiveContext for T where
    T: SelectionState + ApplicationView + BrowserState + TrackView + DeviceTree + ?Sized
{
}
