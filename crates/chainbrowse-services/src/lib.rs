//! chainbrowse-services: Browse mode controllers and the DAW capabilities they use

pub mod live;
mod live_set;
pub mod modes;

pub use live::{ApplicationView, BrowserState, DeviceTree, LiveContext, SelectionState, TrackView};
pub use live_set::{LiveSet, TrackInsertMode, UiState};
pub use modes::{HotswapModeController, InsertEffectModeController, Mode};
