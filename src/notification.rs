//! Notification module
//!
//! Transient in-UI notifications: copy confirmations and config warnings.

pub mod notification_render;
mod notification_state;

pub use notification_state::{Notification, NotificationKind, NotificationState};
