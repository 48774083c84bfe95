//! Browse modes activated by the controller's mode framework

mod hotswap;
mod insert_effect;

pub use hotswap::HotswapModeController;
pub use insert_effect::InsertEffectModeController;

/// A mode the host switches in and out.
///
/// The host pairs every `enter_mode` with exactly one `leave_mode` and never
/// runs two modes at once. `C` is the DAW context the mode works on.
pub trait Mode<C: ?Sized> {
    fn name(&self) -> &'static str;
    fn enter_mode(&mut self, ctx: &mut C);
    fn leave_mode(&mut self, ctx: &mut C);
}
