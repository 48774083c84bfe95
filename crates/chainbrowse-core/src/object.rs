//! Selection targets and browse eligibility

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::device::{ChainId, DeviceId, DrumPadId, TrackId};

/// Anything the DAW selection can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveObject {
    Track(TrackId),
    Chain(ChainId),
    Device(DeviceId),
    DrumPad(DrumPadId),
    /// Bare integer left in a selection slot by the host
    Index(i64),
}

/// How the browser may treat a selected object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowsableKind {
    /// Can be the target of a hotswap browse
    Browsable,
    /// Integer placeholder, never a real object
    Placeholder,
    /// Chain container; the browser cannot swap a chain
    Container,
}

impl LiveObject {
    pub fn browsable_kind(&self) -> BrowsableKind {
        match self {
            Self::Index(_) => BrowsableKind::Placeholder,
            Self::Chain(_) => BrowsableKind::Container,
            Self::Track(_) | Self::Device(_) | Self::DrumPad(_) => BrowsableKind::Browsable,
        }
    }

    pub fn as_device(&self) -> Option<DeviceId> {
        match self {
            Self::Device(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_drum_pad(&self) -> Option<DrumPadId> {
        match self {
            Self::DrumPad(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<DeviceId> for LiveObject {
    fn from(id: DeviceId) -> Self {
        Self::Device(id)
    }
}

impl fmt::Display for LiveObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Track(id) => id.fmt(f),
            Self::Chain(id) => id.fmt(f),
            Self::Device(id) => id.fmt(f),
            Self::DrumPad(id) => id.fmt(f),
            Self::Index(n) => write!(f, "index {}", n),
        }
    }
}

/// Whether `object` can be handed to the browser as a hotswap target
pub fn can_browse_for_object(object: Option<&LiveObject>) -> bool {
    object.is_some_and(|o| o.browsable_kind() == BrowsableKind::Browsable)
}
