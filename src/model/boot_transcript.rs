//! Scripted boot logs.
//!
//! A [`BootTranscript`] is an immutable, named list of [`BootLine`]s. The
//! built-in catalogue mimics a few distro boot styles; the sequencer picks
//! one per run.

use super::markup::{Line, Tag};
use std::time::Duration;

/// Leading status tag in systemd-style lines.
const OK_TAG: &str = "[  OK  ]";
/// Inline status tag in init-style lines.
const OK_INLINE: &str = "[OK]";

/// A single boot log line and the pause that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootLine {
    pub text: &'static str,
    pub delay_ms: u64,
}

impl BootLine {
    pub const fn new(text: &'static str, delay_ms: u64) -> Self {
        Self { text, delay_ms }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Render the line, styling the first status marker.
    ///
    /// A line containing `[  OK  ]` is rendered with the tag moved to the
    /// front (systemd style); otherwise the first `[OK]` is styled in place.
    /// All other text is verbatim.
    pub fn render(&self) -> Line {
        let text = self.text;
        if let Some(idx) = text.find(OK_TAG) {
            let rest = format!("{}{}", &text[..idx], &text[idx + OK_TAG.len()..]);
            return Line::tagged(OK_TAG, Tag::BootOk).with(rest, Tag::Plain);
        }
        if let Some(idx) = text.find(OK_INLINE) {
            return Line::plain(&text[..idx])
                .with(OK_INLINE, Tag::BootOk)
                .with(&text[idx + OK_INLINE.len()..], Tag::Plain);
        }
        Line::plain(text)
    }
}

/// A named, ordered boot log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootTranscript {
    pub name: &'static str,
    pub lines: Vec<BootLine>,
}

impl BootTranscript {
    pub fn new(name: &'static str, lines: Vec<BootLine>) -> Self {
        Self { name, lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of every line's delay.
    pub fn total_delay(&self) -> Duration {
        self.lines.iter().map(BootLine::delay).sum()
    }

    /// The built-in catalogue, in a fixed order.
    pub fn catalogue() -> Vec<BootTranscript> {
        vec![Self::arch(), Self::ubuntu(), Self::minimal(), Self::fedora()]
    }

    pub fn arch() -> Self {
        Self::new(
            "arch",
            vec![
                BootLine::new(":: Synchronizing package databases...", 100),
                BootLine::new("[  OK  ] Started systemd-journald.service.", 80),
                BootLine::new("[  OK  ] Started systemd-udevd.service.", 100),
                BootLine::new(":: Running early hook [udev]", 120),
                BootLine::new("[  OK  ] Reached target Local File Systems.", 150),
                BootLine::new("[  OK  ] Started User Manager for UID 1000.", 200),
                BootLine::new("[  OK  ] Started Alacritty Terminal.", 150),
                BootLine::new("", 100),
                BootLine::new("Arch Linux 6.7.0-arch1-1 (tty1)", 300),
                BootLine::new("", 100),
                BootLine::new("Loading Zsh...", 400),
                BootLine::new("Initializing Powerlevel10k...", 500),
                BootLine::new("Done.", 200),
            ],
        )
    }

    pub fn ubuntu() -> Self {
        Self::new(
            "ubuntu",
            vec![
                BootLine::new(
                    "[    0.000000] Linux version 6.5.0-generic (buildd@lcy02-amd64)",
                    50,
                ),
                BootLine::new(
                    "[    0.123456] Command line: BOOT_IMAGE=/boot/vmlinuz-6.5.0-generic",
                    80,
                ),
                BootLine::new("[  OK  ] Started snap.lxd.activate.service.", 100),
                BootLine::new("[  OK  ] Started Network Manager.", 120),
                BootLine::new("[  OK  ] Started OpenSSH server.", 100),
                BootLine::new("[  OK  ] Reached target Graphical Interface.", 150),
                BootLine::new("[  OK  ] Started GNOME Display Manager.", 200),
                BootLine::new("", 100),
                BootLine::new("Ubuntu 24.04 LTS portfolio tty1", 300),
                BootLine::new("", 100),
                BootLine::new("Loading Zsh...", 400),
                BootLine::new("Initializing Powerlevel10k...", 500),
                BootLine::new("Done.", 200),
            ],
        )
    }

    pub fn minimal() -> Self {
        Self::new(
            "minimal",
            vec![
                BootLine::new("init: starting system...", 100),
                BootLine::new("init: mounting filesystems... [OK]", 150),
                BootLine::new("init: network... [OK]", 120),
                BootLine::new("init: display... [OK]", 100),
                BootLine::new("init: starting user services...", 200),
                BootLine::new("", 100),
                BootLine::new("Welcome to portfolio-os v2.0", 300),
                BootLine::new("", 100),
                BootLine::new("Loading shell...", 400),
                BootLine::new("Done.", 200),
            ],
        )
    }

    pub fn fedora() -> Self {
        Self::new(
            "fedora",
            vec![
                BootLine::new("[  OK  ] Finished Load Kernel Modules.", 80),
                BootLine::new("[  OK  ] Started Plymouth Boot Screen.", 100),
                BootLine::new("[  OK  ] Started Avahi mDNS/DNS-SD Stack.", 120),
                BootLine::new(
                    "[  OK  ] Started Network Manager Script Dispatcher Service.",
                    150,
                ),
                BootLine::new("[  OK  ] Started GDM Display Manager.", 180),
                BootLine::new("[  OK  ] Reached target Multi-User System.", 200),
                BootLine::new("", 100),
                BootLine::new("Fedora Linux 39 (Workstation Edition)", 300),
                BootLine::new("", 100),
                BootLine::new("Loading Zsh...", 400),
                BootLine::new("Initializing Powerlevel10k...", 500),
                BootLine::new("Done.", 200),
            ],
        )
    }
}
