//! Output macros for application messages.
//!
//! Every macro checks [`is_debug_mode`] once per process. In debug mode the
//! message becomes a `tracing` event; otherwise it is printed plainly, with
//! errors going to stderr.
//!
//! Debug mode is on when either `TASKBERRY_DEBUG` or `RUST_LOG` is set.
//!
//! ```rust
//! use taskberry::{msg_error, msg_success};
//! use taskberry::libs::messages::Message;
//!
//! msg_success!(Message::TaskCreated(1));
//! msg_error!(Message::TaskTitleRequired);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when `TASKBERRY_DEBUG` or `RUST_LOG` is set. Cached after
/// the first call.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKBERRY_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message as-is, optionally surrounded by blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}
