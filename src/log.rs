//! Status output with colored module prefixes.
//!
//! ```ignore
//! log!("scan"; "found {} fonts", fonts.len());
//! warn!("marker missing in {}", path.display());
//! ```
//!
//! Everything here goes to stdout and is silenced by [`set_quiet`]. Fatal
//! errors are not routed through this module; the binary prints them.

use std::io::{Write, stdout};
use std::sync::atomic::{AtomicBool, Ordering};

use colored::{ColoredString, Colorize};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Log a message with a colored `[module]` prefix.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::log::log($module, &format!($($arg)*))
    }};
}

/// Log a message under a yellow `[warning]` prefix.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        $crate::log::log("warning", &format!($($arg)*))
    }};
}

pub fn log(module: &str, message: &str) {
    if is_quiet() {
        return;
    }
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Print text as-is, so build logs can be grepped for the generated markup.
pub fn verbatim(text: &str) {
    if is_quiet() {
        return;
    }
    let mut stdout = stdout().lock();
    writeln!(stdout, "{text}").ok();
    stdout.flush().ok();
}

#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "warning" => prefix.bright_yellow().bold(),
        "write" => prefix.bright_green().bold(),
        _ => prefix.bright_blue().bold(),
    }
}
