//! Builder warnings with colored terminal output.
//!
//! Warnings flag suspicious but accepted input, such as a combinator outside
//! the four CSS combinators. Each unique message is printed once per process
//! (or until [`clear_warnings`] is called).

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Messages already printed, keyed by `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Lock the warning set. A poisoned lock is recovered: the set only ever
/// holds strings, so a panic while holding it cannot leave it half-written.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about questionable builder input (prints once per unique message).
///
/// # Example
/// ```
/// use selkit_common::warning::{has_warned, warn_once};
///
/// warn_once("Builder", "combinator '>>' is not a CSS combinator");
/// assert!(has_warned("Builder", "combinator '>>' is not a CSS combinator"));
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[selkit {component}] warning: {message}").yellow());
    }
}

/// Whether `message` has been reported for `component` since the last
/// [`clear_warnings`].
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings so they can be printed again.
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
