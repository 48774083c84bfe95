//! Error types for chainbrowse

use thiserror::Error;

use crate::device::{ChainId, DeviceId, DeviceKind, DrumPadId, TrackId};

#[derive(Debug, Error)]
pub enum ChainBrowseError {
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),
    #[error("Chain not found: {0}")]
    ChainNotFound(ChainId),
    #[error("Device not found: {0}")]
    DeviceNotFound(DeviceId),
    #[error("Drum pad not found: {0}")]
    DrumPadNotFound(DrumPadId),
    #[error("Invalid chain at position {index} ({kind}): {reason}")]
    InvalidChain {
        index: usize,
        kind: DeviceKind,
        reason: &'static str,
    },
    #[error("Duplicate name: {0}")]
    DuplicateName(String),
    #[error("Unknown reference: {0}")]
    UnknownReference(String),
}

pub type Result<T> = std::result::Result<T, ChainBrowseError>;
