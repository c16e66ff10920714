//! Stable per-instance DOM ids.

use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(0);

/// Returns a fresh `prefix-N` id. `N` increases monotonically for the lifetime of the page.
pub(crate) fn next_instance_id(prefix: &str) -> String {
    let n = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_prefixed() {
        let first = next_instance_id("ui-input");
        let second = next_instance_id("ui-input");

        assert!(first.starts_with("ui-input-"));
        assert_ne!(first, second);
    }
}
