//! Tuning parameters for [`Shortcutter`](crate::Shortcutter).

use crate::error::ShortcutError;

/// Tuning parameters for the shortcut search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShortcutConfig {
    /// Maximum number of original segments the search window advances per
    /// step. Must be at least 1.
    ///
    /// With values above 1 the acceptance bound after a step still adds only
    /// the cost of the single original segment preceding the new window end,
    /// so coarse granularity makes acceptance stricter.
    pub granularity: usize,

    /// Reserved. Accepted and stored but currently has no effect on the
    /// search.
    pub window: usize,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            granularity: 1,
            window: 0,
        }
    }
}

impl ShortcutConfig {
    /// Config with the given granularity and the default (inert) window.
    pub fn new(granularity: usize) -> Self {
        Self {
            granularity,
            ..Self::default()
        }
    }

    /// Set the reserved `window` parameter.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Check the parameters before a search.
    pub fn validate(&self) -> Result<(), ShortcutError> {
        if self.granularity == 0 {
            return Err(ShortcutError::ZeroGranularity);
        }
        Ok(())
    }
}
