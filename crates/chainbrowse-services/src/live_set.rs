//! In-memory DAW model implementing every capability trait

use chainbrowse_core::{
    can_browse_for_object, validate_chain, ChainBrowseError, ChainId, ChainRef, DeviceId,
    DeviceKind, DrumPadId, FilterType, InsertMode, LiveObject, Result, TrackId,
};
use serde::Serialize;
use tracing::debug;

use crate::live::{ApplicationView, BrowserState, DeviceTree, SelectionState, TrackView};

#[derive(Debug, Clone)]
struct TrackState {
    name: String,
    has_midi_input: bool,
    has_audio_output: bool,
    devices: Vec<DeviceId>,
    insert_mode: InsertMode,
}

#[derive(Debug, Clone)]
struct ChainState {
    name: String,
    owner: LiveObject,
    has_midi_input: bool,
    has_audio_output: bool,
    devices: Vec<DeviceId>,
}

#[derive(Debug, Clone)]
struct DeviceState {
    name: String,
    kind: DeviceKind,
    parent: ChainRef,
    chains: Vec<ChainId>,
    drum_pads: Vec<DrumPadId>,
}

#[derive(Debug, Clone)]
struct DrumPadState {
    name: String,
    note: u8,
    rack: DeviceId,
    chains: Vec<ChainId>,
}

#[derive(Debug, Clone, Default)]
struct Selection {
    hotswap_target: Option<LiveObject>,
    selected_object: Option<LiveObject>,
    selected_device: Option<DeviceId>,
    selected_track: Option<TrackId>,
}

/// Observable UI state of a [`LiveSet`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiState {
    pub browse_mode: bool,
    pub filter_type: FilterType,
    pub hotswap_target: Option<String>,
    pub selected_object: Option<String>,
    pub insert_modes: Vec<TrackInsertMode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackInsertMode {
    pub track: String,
    pub mode: InsertMode,
}

/// A set of tracks with their device chains, plus the selection and browser
/// state a controller sees.
///
/// Selecting a browsable object also makes it the hotswap target, and
/// selecting a device makes it the selected device, the way the host keeps
/// those fields in step.
#[derive(Debug, Clone, Default)]
pub struct LiveSet {
    tracks: Vec<TrackState>,
    chains: Vec<ChainState>,
    devices: Vec<DeviceState>,
    drum_pads: Vec<DrumPadState>,
    selection: Selection,
    browse_mode: bool,
    filter_type: FilterType,
}

impl LiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_track(&mut self, name: impl Into<String>, has_midi_input: bool, has_audio_output: bool) -> TrackId {
        let id = TrackId(self.tracks.len() as u32);
        self.tracks.push(TrackState {
            name: name.into(),
            has_midi_input,
            has_audio_output,
            devices: Vec::new(),
            insert_mode: InsertMode::Disabled,
        });
        id
    }

    /// Append a device to the end of `parent`'s chain
    pub fn add_device(&mut self, parent: ChainRef, name: impl Into<String>, kind: DeviceKind) -> Result<DeviceId> {
        let id = DeviceId(self.devices.len() as u32);
        self.devices_of_mut(parent)?.push(id);
        self.devices.push(DeviceState {
            name: name.into(),
            kind,
            parent,
            chains: Vec::new(),
            drum_pads: Vec::new(),
        });
        Ok(id)
    }

    /// Add a chain directly owned by a rack device
    pub fn add_rack_chain(
        &mut self,
        rack: DeviceId,
        name: impl Into<String>,
        has_midi_input: bool,
        has_audio_output: bool,
    ) -> Result<ChainId> {
        self.device(rack)?;
        let id = self.push_chain(LiveObject::Device(rack), name.into(), has_midi_input, has_audio_output);
        self.devices[rack.index()].chains.push(id);
        Ok(id)
    }

    pub fn add_drum_pad(&mut self, rack: DeviceId, name: impl Into<String>, note: u8) -> Result<DrumPadId> {
        let id = DrumPadId(self.drum_pads.len() as u32);
        self.device_mut(rack)?.drum_pads.push(id);
        self.drum_pads.push(DrumPadState {
            name: name.into(),
            note,
            rack,
            chains: Vec::new(),
        });
        Ok(id)
    }

    pub fn add_pad_chain(
        &mut self,
        pad: DrumPadId,
        name: impl Into<String>,
        has_midi_input: bool,
        has_audio_output: bool,
    ) -> Result<ChainId> {
        if pad.index() >= self.drum_pads.len() {
            return Err(ChainBrowseError::DrumPadNotFound(pad));
        }
        let id = self.push_chain(LiveObject::DrumPad(pad), name.into(), has_midi_input, has_audio_output);
        self.drum_pads[pad.index()].chains.push(id);
        Ok(id)
    }

    fn push_chain(&mut self, owner: LiveObject, name: String, has_midi_input: bool, has_audio_output: bool) -> ChainId {
        let id = ChainId(self.chains.len() as u32);
        self.chains.push(ChainState {
            name,
            owner,
            has_midi_input,
            has_audio_output,
            devices: Vec::new(),
        });
        id
    }

    pub fn set_hotswap_target(&mut self, target: Option<LiveObject>) -> Result<()> {
        if let Some(object) = target {
            self.check_object(object)?;
        }
        self.selection.hotswap_target = target;
        Ok(())
    }

    pub fn select_object(&mut self, object: Option<LiveObject>) -> Result<()> {
        match object {
            Some(object) => {
                self.check_object(object)?;
                self.apply_selected_object(object);
            }
            None => self.selection.selected_object = None,
        }
        Ok(())
    }

    pub fn select_device(&mut self, device: Option<DeviceId>) -> Result<()> {
        if let Some(id) = device {
            self.device(id)?;
        }
        self.selection.selected_device = device;
        Ok(())
    }

    pub fn select_track(&mut self, track: Option<TrackId>) -> Result<()> {
        if let Some(id) = track {
            self.track(id)?;
        }
        self.selection.selected_track = track;
        Ok(())
    }

    pub fn set_browse_mode(&mut self, enabled: bool) {
        self.browse_mode = enabled;
    }

    fn apply_selected_object(&mut self, object: LiveObject) {
        self.selection.selected_object = Some(object);
        if let Some(device) = object.as_device() {
            self.selection.selected_device = Some(device);
        }
        if can_browse_for_object(Some(&object)) {
            self.selection.hotswap_target = Some(object);
        }
    }

    /// Check every track and chain against the device ordering rules
    pub fn validate(&self) -> Result<()> {
        for track in &self.tracks {
            validate_chain(&self.kinds(&track.devices), track.has_midi_input)?;
        }
        for chain in &self.chains {
            validate_chain(&self.kinds(&chain.devices), chain.has_midi_input)?;
        }
        Ok(())
    }

    fn kinds(&self, devices: &[DeviceId]) -> Vec<DeviceKind> {
        devices.iter().map(|id| self.devices[id.index()].kind).collect()
    }

    pub fn find_track(&self, name: &str) -> Option<TrackId> {
        self.tracks.iter().position(|t| t.name == name).map(|i| TrackId(i as u32))
    }

    pub fn find_chain(&self, name: &str) -> Option<ChainId> {
        self.chains.iter().position(|c| c.name == name).map(|i| ChainId(i as u32))
    }

    pub fn find_device(&self, name: &str) -> Option<DeviceId> {
        self.devices.iter().position(|d| d.name == name).map(|i| DeviceId(i as u32))
    }

    pub fn find_drum_pad(&self, name: &str) -> Option<DrumPadId> {
        self.drum_pads.iter().position(|p| p.name == name).map(|i| DrumPadId(i as u32))
    }

    pub fn drum_pad_note(&self, pad: DrumPadId) -> Result<u8> {
        self.drum_pads
            .get(pad.index())
            .map(|p| p.note)
            .ok_or(ChainBrowseError::DrumPadNotFound(pad))
    }

    /// Rack device a drum pad belongs to
    pub fn drum_pad_rack(&self, pad: DrumPadId) -> Result<DeviceId> {
        self.drum_pads
            .get(pad.index())
            .map(|p| p.rack)
            .ok_or(ChainBrowseError::DrumPadNotFound(pad))
    }

    pub fn tracks(&self) -> impl Iterator<Item = TrackId> + '_ {
        (0..self.tracks.len()).map(|i| TrackId(i as u32))
    }

    /// Chains owned directly by a rack device
    pub fn rack_chains(&self, rack: DeviceId) -> Result<&[ChainId]> {
        self.device(rack).map(|d| d.chains.as_slice())
    }

    pub fn drum_pads(&self, rack: DeviceId) -> Result<&[DrumPadId]> {
        self.device(rack).map(|d| d.drum_pads.as_slice())
    }

    /// Human-readable name of any object in the set
    pub fn describe(&self, object: LiveObject) -> String {
        let name = match object {
            LiveObject::Track(id) => self.tracks.get(id.index()).map(|t| t.name.as_str()),
            LiveObject::Chain(id) => self.chains.get(id.index()).map(|c| c.name.as_str()),
            LiveObject::Device(id) => self.devices.get(id.index()).map(|d| d.name.as_str()),
            LiveObject::DrumPad(id) => self.drum_pads.get(id.index()).map(|p| p.name.as_str()),
            LiveObject::Index(_) => None,
        };
        match name {
            Some(name) => format!("{} ({})", name, object),
            None => object.to_string(),
        }
    }

    pub fn ui_state(&self) -> UiState {
        UiState {
            browse_mode: self.browse_mode,
            filter_type: self.filter_type,
            hotswap_target: self.selection.hotswap_target.map(|o| self.describe(o)),
            selected_object: self.selection.selected_object.map(|o| self.describe(o)),
            insert_modes: self
                .tracks
                .iter()
                .map(|t| TrackInsertMode {
                    track: t.name.clone(),
                    mode: t.insert_mode,
                })
                .collect(),
        }
    }

    fn check_object(&self, object: LiveObject) -> Result<()> {
        match object {
            LiveObject::Track(id) => self.track(id).map(|_| ()),
            LiveObject::Chain(id) => self.chain(id).map(|_| ()),
            LiveObject::Device(id) => self.device(id).map(|_| ()),
            LiveObject::DrumPad(id) => self
                .drum_pads
                .get(id.index())
                .map(|_| ())
                .ok_or(ChainBrowseError::DrumPadNotFound(id)),
            LiveObject::Index(_) => Ok(()),
        }
    }

    fn track(&self, id: TrackId) -> Result<&TrackState> {
        self.tracks.get(id.index()).ok_or(ChainBrowseError::TrackNotFound(id))
    }

    fn chain(&self, id: ChainId) -> Result<&ChainState> {
        self.chains.get(id.index()).ok_or(ChainBrowseError::ChainNotFound(id))
    }

    fn device(&self, id: DeviceId) -> Result<&DeviceState> {
        self.devices.get(id.index()).ok_or(ChainBrowseError::DeviceNotFound(id))
    }

    fn device_mut(&mut self, id: DeviceId) -> Result<&mut DeviceState> {
        self.devices.get_mut(id.index()).ok_or(ChainBrowseError::DeviceNotFound(id))
    }

    fn devices_of(&self, chain: ChainRef) -> Option<&[DeviceId]> {
        match chain {
            ChainRef::Track(id) => self.tracks.get(id.index()).map(|t| t.devices.as_slice()),
            ChainRef::Chain(id) => self.chains.get(id.index()).map(|c| c.devices.as_slice()),
        }
    }

    fn devices_of_mut(&mut self, chain: ChainRef) -> Result<&mut Vec<DeviceId>> {
        match chain {
            ChainRef::Track(id) => self
                .tracks
                .get_mut(id.index())
                .map(|t| &mut t.devices)
                .ok_or(ChainBrowseError::TrackNotFound(id)),
            ChainRef::Chain(id) => self
                .chains
                .get_mut(id.index())
                .map(|c| &mut c.devices)
                .ok_or(ChainBrowseError::ChainNotFound(id)),
        }
    }

    fn io_of(&self, chain: ChainRef) -> Option<(bool, bool)> {
        match chain {
            ChainRef::Track(id) => self.tracks.get(id.index()).map(|t| (t.has_midi_input, t.has_audio_output)),
            ChainRef::Chain(id) => self.chains.get(id.index()).map(|c| (c.has_midi_input, c.has_audio_output)),
        }
    }
}

impl SelectionState for LiveSet {
    fn hotswap_target(&self) -> Option<LiveObject> {
        self.selection.hotswap_target
    }

    fn selected_object(&self) -> Option<LiveObject> {
        self.selection.selected_object
    }

    fn set_selected_object(&mut self, object: LiveObject) {
        debug!("Selected object -> {}", self.describe(object));
        self.apply_selected_object(object);
    }

    fn selected_device(&self) -> Option<DeviceId> {
        self.selection.selected_device
    }

    fn selected_track(&self) -> Option<TrackId> {
        self.selection.selected_track
    }
}

impl ApplicationView for LiveSet {
    fn browse_mode(&self) -> bool {
        self.browse_mode
    }

    fn toggle_browse(&mut self) {
        self.browse_mode = !self.browse_mode;
        debug!("Browse mode -> {}", self.browse_mode);
    }
}

impl BrowserState for LiveSet {
    fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    fn set_filter_type(&mut self, filter_type: FilterType) {
        self.filter_type = filter_type;
    }
}

impl TrackView for LiveSet {
    fn device_insert_mode(&self, track: TrackId) -> InsertMode {
        self.tracks
            .get(track.index())
            .map(|t| t.insert_mode)
            .unwrap_or_default()
    }

    fn set_device_insert_mode(&mut self, track: TrackId, mode: InsertMode) {
        if let Some(t) = self.tracks.get_mut(track.index()) {
            t.insert_mode = mode;
        }
    }
}

impl DeviceTree for LiveSet {
    fn device_kind(&self, device: DeviceId) -> Option<DeviceKind> {
        self.devices.get(device.index()).map(|d| d.kind)
    }

    fn device_parent(&self, device: DeviceId) -> Option<ChainRef> {
        self.devices.get(device.index()).map(|d| d.parent)
    }

    fn chain_devices(&self, chain: ChainRef) -> Vec<DeviceId> {
        self.devices_of(chain).map(<[DeviceId]>::to_vec).unwrap_or_default()
    }

    fn chain_has_midi_input(&self, chain: ChainRef) -> bool {
        self.io_of(chain).is_some_and(|(midi, _)| midi)
    }

    fn chain_has_audio_output(&self, chain: ChainRef) -> bool {
        self.io_of(chain).is_some_and(|(_, audio)| audio)
    }

    fn chain_parent(&self, chain: ChainRef) -> Option<LiveObject> {
        match chain {
            ChainRef::Track(_) => None,
            ChainRef::Chain(id) => self.chains.get(id.index()).map(|c| c.owner),
        }
    }

    fn drum_pad_chains(&self, pad: DrumPadId) -> Vec<ChainId> {
        self.drum_pads
            .get(pad.index())
            .map(|p| p.chains.clone())
            .unwrap_or_default()
    }
}
