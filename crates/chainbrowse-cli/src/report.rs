//! One mode activation over a scenario, and how it is printed

use chainbrowse_core::{ChainRef, LiveObject};
use chainbrowse_services::{
    DeviceTree, HotswapModeController, InsertEffectModeController, LiveSet, Mode, UiState,
};
use serde::Serialize;

use crate::config::ModeKind;

#[derive(Debug, Serialize)]
pub struct Step {
    pub label: &'static str,
    pub state: UiState,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_hotswap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_for_insert: Option<String>,
    pub steps: Vec<Step>,
}

/// Enter and leave one mode, capturing the UI state around each transition
pub fn run(kind: ModeKind, insert_left: bool, set: &mut LiveSet) -> Report {
    let mut steps = vec![Step { label: "before", state: set.ui_state() }];

    let mut report = match kind {
        ModeKind::Hotswap => {
            let mut mode = HotswapModeController::new();
            let can_hotswap = mode.can_hotswap(&*set);
            mode.enter_mode(set);
            steps.push(Step { label: "entered", state: set.ui_state() });
            mode.leave_mode(set);
            Report {
                mode: Mode::<LiveSet>::name(&mode),
                can_hotswap: Some(can_hotswap),
                selection_for_insert: None,
                steps,
            }
        }
        ModeKind::Insert => {
            let mut mode = InsertEffectModeController::with_insert_left(insert_left);
            mode.enter_mode(set);
            let selection_for_insert = Some(
                mode.selection_for_insert()
                    .map(|d| set.describe(LiveObject::Device(d)))
                    .unwrap_or_else(|| "chain boundary".to_string()),
            );
            steps.push(Step { label: "entered", state: set.ui_state() });
            mode.leave_mode(set);
            Report {
                mode: Mode::<LiveSet>::name(&mode),
                can_hotswap: None,
                selection_for_insert,
                steps,
            }
        }
    };

    report.steps.push(Step { label: "left", state: set.ui_state() });
    report
}

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("mode: {}\n", report.mode));
    if let Some(can_hotswap) = report.can_hotswap {
        out.push_str(&format!("can hotswap: {}\n", can_hotswap));
    }
    if let Some(selection) = &report.selection_for_insert {
        out.push_str(&format!("insert next to: {}\n", selection));
    }

    for step in &report.steps {
        let state = &step.state;
        out.push_str(&format!("[{}]\n", step.label));
        out.push_str(&format!("  browse mode: {}\n", if state.browse_mode { "on" } else { "off" }));
        out.push_str(&format!("  filter: {}\n", state.filter_type));
        out.push_str(&format!("  hotswap target: {}\n", state.hotswap_target.as_deref().unwrap_or("-")));
        out.push_str(&format!("  selected object: {}\n", state.selected_object.as_deref().unwrap_or("-")));
        for track in &state.insert_modes {
            out.push_str(&format!("  insert mode {}: {}\n", track.track, track.mode));
        }
    }
    out
}

/// Indented listing of every track, device, rack chain and drum pad
pub fn render_tree(set: &LiveSet) -> String {
    let mut out = String::new();
    for track in set.tracks() {
        out.push_str(&format!("{}\n", set.describe(LiveObject::Track(track))));
        write_chain(&mut out, set, ChainRef::Track(track), 1);
    }
    out
}

fn write_chain(out: &mut String, set: &LiveSet, chain: ChainRef, depth: usize) {
    let indent = "  ".repeat(depth);
    for device in set.chain_devices(chain) {
        let kind = set.device_kind(device).map(|k| k.to_string()).unwrap_or_default();
        out.push_str(&format!("{}{} [{}]\n", indent, set.describe(LiveObject::Device(device)), kind));

        for &rack_chain in set.rack_chains(device).unwrap_or_default() {
            out.push_str(&format!("{}  {}\n", indent, set.describe(LiveObject::Chain(rack_chain))));
            write_chain(out, set, ChainRef::Chain(rack_chain), depth + 2);
        }
        for &pad in set.drum_pads(device).unwrap_or_default() {
            let note = set.drum_pad_note(pad).unwrap_or_default();
            out.push_str(&format!("{}  {} note {}\n", indent, set.describe(LiveObject::DrumPad(pad)), note));
            for pad_chain in set.drum_pad_chains(pad) {
                out.push_str(&format!("{}    {}\n", indent, set.describe(LiveObject::Chain(pad_chain))));
                write_chain(out, set, ChainRef::Chain(pad_chain), depth + 3);
            }
        }
    }
}
