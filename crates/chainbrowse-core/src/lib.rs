//! chainbrowse-core: Domain types for device-chain browsing

mod chain;
mod device;
mod error;
pub mod filter;
mod object;

pub use chain::validate_chain;
pub use device::{ChainId, ChainRef, DeviceId, DeviceKind, DrumPadId, TrackId};
pub use error::{ChainBrowseError, Result};
pub use filter::{filter_type_between, FilterType, InsertMode};
pub use object::{can_browse_for_object, BrowsableKind, LiveObject};
