// SPDX-License-Identifier: MPL-2.0
//! Transient validation messages for form controls.
//!
//! Every input-like control owns a [`TransientMessageField`]. Validation code
//! pushes a [`FieldMessage`] into it and the field hides the message on its
//! own after a [`MessageDelay`].

mod delay;
mod message;
mod transient;

pub use delay::MessageDelay;
pub use message::FieldMessage;
pub use transient::{TransientMessageField, Visibility};
