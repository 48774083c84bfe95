//! Hotswap browsing: replace the selected device through the browser

use chainbrowse_core::{can_browse_for_object, LiveObject};
use tracing::debug;

use super::Mode;
use crate::live::{ApplicationView, SelectionState};

/// Turns browse mode on with a valid hotswap target
#[derive(Debug, Clone, Default)]
pub struct HotswapModeController {
    browse_was_enabled: bool,
}

impl HotswapModeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything in the selection can be hotswapped
    pub fn can_hotswap<C: SelectionState + ?Sized>(&self, ctx: &C) -> bool {
        can_browse_for_object(ctx.hotswap_target().as_ref())
            || can_browse_for_object(ctx.selected_object().as_ref())
            || can_browse_for_object(ctx.selected_device().map(LiveObject::Device).as_ref())
    }

    fn ensure_valid_hotswap_target<C: SelectionState + ?Sized>(ctx: &mut C) {
        if can_browse_for_object(ctx.hotswap_target().as_ref()) {
            return;
        }

        let candidate = ctx
            .selected_object()
            .filter(|o| can_browse_for_object(Some(o)))
            .or_else(|| ctx.selected_device().map(LiveObject::Device));

        match candidate {
            Some(object) => {
                debug!("Promoting {} to hotswap target", object);
                ctx.set_selected_object(object);
            }
            None => debug!("Nothing selected to hotswap"),
        }
    }
}

impl<C: SelectionState + ApplicationView + ?Sized> Mode<C> for HotswapModeController {
    fn name(&self) -> &'static str {
        "hotswap"
    }

    fn enter_mode(&mut self, ctx: &mut C) {
        Self::ensure_valid_hotswap_target(ctx);
        self.browse_was_enabled = ctx.browse_mode();
        if !self.browse_was_enabled {
            ctx.toggle_browse();
        }
    }

    /// Puts browse mode back the way `enter_mode` found it, so browse mode
    /// that was already on before entry stays on. Without a prior entry this
    /// switches it off.
    fn leave_mode(&mut self, ctx: &mut C) {
        if ctx.browse_mode() != std::mem::take(&mut self.browse_was_enabled) {
            ctx.toggle_browse();
        }
    }
}
