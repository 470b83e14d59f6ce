//! The fake systemd shutdown played before exiting.

use super::boot_sequencer::BootSurface;
use crate::model::markup::{Line, Tag};
use crate::services::time_source::TimeSource;
use std::time::Duration;

pub const SHUTDOWN_LINES: [&str; 4] = [
    "Stopping User Manager...",
    "Stopping Graphical Interface...",
    "Unmounting filesystems...",
    "System halting.",
];

/// Gap between shutdown lines.
pub const LINE_GAP: Duration = Duration::from_millis(400);
/// Hold after the last line before the process exits.
pub const FINAL_HOLD: Duration = Duration::from_millis(1000);

/// Play the shutdown lines onto `surface`. The surface is left visible.
pub fn play_shutdown(surface: Option<&mut dyn BootSurface>, time: &dyn TimeSource) {
    let Some(surface) = surface else {
        return;
    };
    tracing::info!("Shutting down");
    surface.show();
    for (i, text) in SHUTDOWN_LINES.iter().enumerate() {
        if i > 0 {
            time.sleep(LINE_GAP);
        }
        surface.append(Line::tagged(*text, Tag::Muted));
    }
    time.sleep(FINAL_HOLD);
}
