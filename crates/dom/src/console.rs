//! Diagnostic console for gallery widgets.
//!
//! Three channels (log, warn, error) routed through the `log` crate under the
//! `gallery` target. All of them are gated by a single flag and stay silent
//! unless explicitly enabled.

use log::{error, info, warn};

/// Log target used for every console line.
pub const CONSOLE_TARGET: &str = "gallery";

/// Console provides the gated logging channels used by widget controllers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Console {
    enabled: bool,
}

impl Console {
    #[inline]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Print a generic log line.
    #[inline]
    pub fn log<M: AsRef<str>>(&self, message: M) {
        if self.enabled {
            info!(target: CONSOLE_TARGET, "{}", message.as_ref());
        }
    }

    /// Print a warning line.
    #[inline]
    pub fn warn<M: AsRef<str>>(&self, message: M) {
        if self.enabled {
            warn!(target: CONSOLE_TARGET, "{}", message.as_ref());
        }
    }

    /// Print an error line.
    #[inline]
    pub fn error<M: AsRef<str>>(&self, message: M) {
        if self.enabled {
            error!(target: CONSOLE_TARGET, "{}", message.as_ref());
        }
    }
}
