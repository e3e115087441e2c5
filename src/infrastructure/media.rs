//! Opens stock audio and animation links in the desktop browser.

use tracing::{debug, warn};

/// Hands every link to the system opener, returning how many were launched.
pub fn open_media_links<'a>(links: impl IntoIterator<Item = &'a str>) -> usize {
    links
        .into_iter()
        .filter(|&link| match opener::open_browser(link) {
            Ok(()) => {
                debug!(link, "Opened media link");
                true
            }
            Err(e) => {
                warn!(link, error = %e, "Failed to open media link");
                false
            }
        })
        .count()
}
