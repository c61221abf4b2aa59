// SPDX-License-Identifier: MPL-2.0
//! Hide delay for transient field messages.

use crate::config::{
    DEFAULT_FIELD_MESSAGE_DELAY_MS, MAX_FIELD_MESSAGE_DELAY_MS, MIN_FIELD_MESSAGE_DELAY_MS,
};
use std::time::Duration;

/// How long a field message stays visible, in milliseconds.
///
/// This newtype enforces validity at the type level: values are clamped to
/// the supported range so a config file cannot request an instant or
/// practically infinite window.
///
/// # Example
///
/// ```
/// use grimoire::ui::fields::MessageDelay;
///
/// let delay = MessageDelay::new(3000);
/// assert_eq!(delay.value(), 3000);
///
/// let too_short = MessageDelay::new(0);
/// assert_eq!(too_short.value(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDelay(u32);

impl MessageDelay {
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_FIELD_MESSAGE_DELAY_MS, MAX_FIELD_MESSAGE_DELAY_MS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for MessageDelay {
    fn default() -> Self {
        Self(DEFAULT_FIELD_MESSAGE_DELAY_MS)
    }
}
