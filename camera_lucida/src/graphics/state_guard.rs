/// StateGuard - scoped save/restore of graphics pipeline state

use std::ops::{Deref, DerefMut};
use crate::error::Result;
use crate::graphics::{GraphicsContext, StateFlags};

/// Saves pipeline state on creation and restores it when dropped.
///
/// Dereferences to the wrapped context, so a pass issues its commands
/// through the guard. Restoration runs on every exit path, including
/// `?` early returns. Guards nest: reborrow with `StateGuard::new(&mut *guard, ..)`.
///
/// # Example
///
/// ```no_run
/// use camera_lucida::lucida::graphics::{GraphicsContext, PolygonMode, StateFlags, StateGuard};
///
/// fn wireframe_pass(ctx: &mut dyn GraphicsContext) -> camera_lucida::lucida::Result<()> {
///     let mut pass = StateGuard::new(ctx, StateFlags::POLYGON)?;
///     pass.set_polygon_mode(PolygonMode::Line)?;
///     Ok(())
///     // polygon mode restored here
/// }
/// ```
pub struct StateGuard<'a> {
    ctx: &'a mut dyn GraphicsContext,
    flags: StateFlags,
}

impl<'a> StateGuard<'a> {
    /// Push the state groups named by `flags`
    ///
    /// # Errors
    ///
    /// Returns the backend error if the push fails; nothing is restored in
    /// that case since nothing was saved.
    pub fn new(ctx: &'a mut dyn GraphicsContext, flags: StateFlags) -> Result<Self> {
        ctx.push_state(flags)?;
        Ok(Self { ctx, flags })
    }

    /// State groups this guard restores
    pub fn flags(&self) -> StateFlags {
        self.flags
    }
}

impl<'a> Deref for StateGuard<'a> {
    type Target = dyn GraphicsContext + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.ctx
    }
}

impl<'a> DerefMut for StateGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.ctx
    }
}

impl Drop for StateGuard<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.ctx.pop_state() {
            crate::lucida_error!(
                "lucida::StateGuard",
                "Failed to restore {:?}: {}",
                self.flags,
                err
            );
        }
    }
}

#[cfg(test)]
#[path = "state_guard_tests.rs"]
mod tests;
