//! Timing helpers for logging.

use std::time::Instant;

/// RAII timer that logs elapsed time at DEBUG level on drop.
///
/// # Example
/// ```ignore
/// let _t = Timed::debug("delaunay triangulation");
/// // ... do work ...
/// // logs "delaunay triangulation: 1.234ms" when _t is dropped
/// ```
pub(crate) struct Timed {
    name: &'static str,
    start: Instant,
}

impl Timed {
    pub(crate) fn debug(name: &'static str) -> Self {
        log::trace!("{}...", name);
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for Timed {
    fn drop(&mut self) {
        log::debug!("{}: {:.3?}", self.name, self.start.elapsed());
    }
}
