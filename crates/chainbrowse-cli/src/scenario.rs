//! TOML scenarios describing a set of tracks and the user's selection

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use chainbrowse_core::{ChainBrowseError, ChainRef, DeviceKind, LiveObject, Result};
use chainbrowse_services::LiveSet;
use serde::Deserialize;

fn yes() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub browse_mode: bool,
    #[serde(default)]
    pub tracks: Vec<TrackSpec>,
    #[serde(default)]
    pub selection: SelectionSpec,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackSpec {
    pub name: String,
    #[serde(default = "yes")]
    pub midi_input: bool,
    #[serde(default = "yes")]
    pub audio_output: bool,
    #[serde(default)]
    pub devices: Vec<DeviceSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceSpec {
    pub name: String,
    pub kind: DeviceKind,
    /// Rack chains
    #[serde(default)]
    pub chains: Vec<ChainSpec>,
    /// Drum rack pads
    #[serde(default)]
    pub pads: Vec<PadSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainSpec {
    pub name: String,
    #[serde(default = "yes")]
    pub midi_input: bool,
    #[serde(default = "yes")]
    pub audio_output: bool,
    #[serde(default)]
    pub devices: Vec<DeviceSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PadSpec {
    pub name: String,
    pub note: u8,
    #[serde(default)]
    pub chains: Vec<ChainSpec>,
}

/// References are written `kind:name`, e.g. `device:Operator` or `index:3`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionSpec {
    pub track: Option<String>,
    pub object: Option<String>,
    pub device: Option<String>,
    pub hotswap_target: Option<String>,
}

#[derive(Default)]
struct Names {
    tracks: HashSet<String>,
    chains: HashSet<String>,
    devices: HashSet<String>,
    pads: HashSet<String>,
}

fn claim(names: &mut HashSet<String>, name: &str) -> Result<()> {
    if names.insert(name.to_string()) {
        Ok(())
    } else {
        Err(ChainBrowseError::DuplicateName(name.to_string()))
    }
}

impl Scenario {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Build the live set and apply the selection
    pub fn build(&self) -> Result<LiveSet> {
        let mut set = LiveSet::new();
        let mut names = Names::default();

        for track in &self.tracks {
            claim(&mut names.tracks, &track.name)?;
            let id = set.add_track(&track.name, track.midi_input, track.audio_output);
            add_devices(&mut set, &mut names, ChainRef::Track(id), &track.devices)?;
        }

        let selection = &self.selection;
        if let Some(track) = &selection.track {
            let id = set
                .find_track(track)
                .ok_or_else(|| ChainBrowseError::UnknownReference(format!("track:{}", track)))?;
            set.select_track(Some(id))?;
        }
        if let Some(device) = &selection.device {
            let id = set
                .find_device(device)
                .ok_or_else(|| ChainBrowseError::UnknownReference(format!("device:{}", device)))?;
            set.select_device(Some(id))?;
        }
        if let Some(object) = &selection.object {
            let object = resolve_reference(&set, object)?;
            set.select_object(Some(object))?;
        }
        // Applied last: selecting an object moves the hotswap target
        if let Some(target) = &selection.hotswap_target {
            let target = resolve_reference(&set, target)?;
            set.set_hotswap_target(Some(target))?;
        }

        set.set_browse_mode(self.browse_mode);
        Ok(set)
    }
}

fn add_devices(set: &mut LiveSet, names: &mut Names, parent: ChainRef, devices: &[DeviceSpec]) -> Result<()> {
    for device in devices {
        claim(&mut names.devices, &device.name)?;
        let id = set.add_device(parent, &device.name, device.kind)?;

        for chain in &device.chains {
            claim(&mut names.chains, &chain.name)?;
            let chain_id = set.add_rack_chain(id, &chain.name, chain.midi_input, chain.audio_output)?;
            add_devices(set, names, ChainRef::Chain(chain_id), &chain.devices)?;
        }

        for pad in &device.pads {
            claim(&mut names.pads, &pad.name)?;
            let pad_id = set.add_drum_pad(id, &pad.name, pad.note)?;
            for chain in &pad.chains {
                claim(&mut names.chains, &chain.name)?;
                let chain_id = set.add_pad_chain(pad_id, &chain.name, chain.midi_input, chain.audio_output)?;
                add_devices(set, names, ChainRef::Chain(chain_id), &chain.devices)?;
            }
        }
    }
    Ok(())
}

/// Resolve a `kind:name` reference against the set
pub fn resolve_reference(set: &LiveSet, reference: &str) -> Result<LiveObject> {
    let unknown = || ChainBrowseError::UnknownReference(reference.to_string());
    let (kind, name) = reference.split_once(':').ok_or_else(unknown)?;

    let object = match kind {
        "track" => set.find_track(name).map(LiveObject::Track),
        "chain" => set.find_chain(name).map(LiveObject::Chain),
        "device" => set.find_device(name).map(LiveObject::Device),
        "pad" => set.find_drum_pad(name).map(LiveObject::DrumPad),
        "index" => name.trim().parse().ok().map(LiveObject::Index),
        _ => None,
    };
    object.ok_or_else(unknown)
}
