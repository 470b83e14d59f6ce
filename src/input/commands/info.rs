//! `help`, `whoami`, `neofetch` and `journalctl`.

use super::{CommandContext, CommandResult};
use crate::input::command_registry::builtin_commands;
use crate::input::invocation::CommandInvocation;
use crate::model::markup::{JournalKind, Line, Markup, Tag};

/// Width of the usage column in `help`.
const HELP_USAGE_WIDTH: usize = 18;

const HELP_TIP: &str = "Tip: Use ↑/↓ for history, Tab for autocomplete";

/// Lists every command. Never looks at content.
pub fn help(_inv: &CommandInvocation, _ctx: &CommandContext<'_>) -> CommandResult {
    let mut out = Markup::line("Available Commands:", Tag::Header);
    out.push_blank();

    for command in builtin_commands() {
        let mut line = Line::plain("  ").with(command.synopsis, Tag::CommandName);
        let mut width = command.synopsis.chars().count();
        if let Some(hint) = command.arg_hint {
            line.push(" ", Tag::Plain);
            line.push(hint, Tag::CommandArg);
            width += 1 + hint.chars().count();
        }
        let padding = HELP_USAGE_WIDTH.saturating_sub(width).max(2);
        line.push(" ".repeat(padding), Tag::Plain);
        line.push(command.description, Tag::CommandDesc);
        out.push(line);
    }

    out.push_blank();
    out.push(Line::tagged(HELP_TIP, Tag::Muted));
    CommandResult::text(out)
}

/// Profile summary and the flattened skill list.
pub fn whoami(_inv: &CommandInvocation, ctx: &CommandContext<'_>) -> CommandResult {
    let content = ctx.content;
    let profile = &content.profile;

    let mut out = Markup::line(&profile.name, Tag::Name);
    out.push(Line::tagged(&profile.role, Tag::Role));
    out.push_blank();
    out.push(Line::plain(&profile.intro));
    out.push_blank();

    out.push(Line::tagged("Tech Stack:", Tag::Section));
    let mut chips = Line::new();
    for (i, skill) in content.all_skills().into_iter().enumerate() {
        if i > 0 {
            chips.push(" ", Tag::Plain);
        }
        chips.push(skill, Tag::Chip);
    }
    out.push(chips);

    if let Some(building) = &profile.currently_building {
        out.push_blank();
        out.push(Line::tagged("Currently Building:", Tag::Section));
        out.push(Line::plain(building));
    }

    if !content.socials.is_empty() {
        out.push_blank();
        for social in &content.socials {
            out.push(
                Line::tagged(format!("{}: ", social.name), Tag::Label)
                    .with(display_link(&social.link), Tag::Link),
            );
        }
    }

    CommandResult::text(out)
}

/// Block-letter art, one gradient band per pair of rows.
const NEOFETCH_ART: [(&str, u8); 6] = [
    ("    █████╗ ██████╗ ", 1),
    ("   ██╔══██╗██╔══██╗", 1),
    ("   ███████║██████╔╝", 2),
    ("   ██╔══██║██╔══██╗", 2),
    ("   ██║  ██║██║  ██║", 3),
    ("   ╚═╝  ╚═╝╚═╝  ╚═╝", 3),
];

const DEFAULT_STACK: &str = "NestJS • Next.js • Docker";
const DEFAULT_FOCUS: &str = "Data Science • ML/AI";

/// Art beside a key/value panel, including minutes since start.
pub fn neofetch(_inv: &CommandInvocation, ctx: &CommandContext<'_>) -> CommandResult {
    let profile = &ctx.content.profile;
    let uptime = format!("{} mins", ctx.uptime.as_secs() / 60);
    let info: [(&str, &str); 7] = [
        ("Name:", profile.name.as_str()),
        ("Role:", profile.role.as_str()),
        ("Shell:", "Zsh + Powerlevel10k"),
        ("Terminal:", "Alacritty"),
        ("Stack:", profile.stack.as_deref().unwrap_or(DEFAULT_STACK)),
        ("Focus:", profile.focus.as_deref().unwrap_or(DEFAULT_FOCUS)),
        ("Uptime:", uptime.as_str()),
    ];

    let art_width = NEOFETCH_ART
        .iter()
        .map(|(row, _)| row.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = Markup::new();
    for i in 0..NEOFETCH_ART.len().max(info.len()) {
        let mut line = match NEOFETCH_ART.get(i) {
            Some((row, band)) => {
                let pad = art_width - row.chars().count();
                Line::tagged(*row, Tag::Art(*band)).with(" ".repeat(pad), Tag::Plain)
            }
            None => Line::plain(" ".repeat(art_width)),
        };
        if let Some((label, value)) = info.get(i) {
            line.push("   ", Tag::Plain);
            line.push(*label, Tag::Label);
            line.push(" ", Tag::Plain);
            line.push(*value, Tag::Value);
        }
        out.push(line);
    }
    CommandResult::text(out)
}

const JOURNAL: [(&str, JournalKind, &str); 3] = [
    (
        "2024-01",
        JournalKind::Learned,
        "Computer Vision for sports analytics",
    ),
    (
        "2023-06",
        JournalKind::Built,
        "First production Next.js application",
    ),
    (
        "2022-09",
        JournalKind::Started,
        "Full-stack development with MERN",
    ),
];

/// `journalctl -u growth`: the growth timeline, newest first.
pub fn journalctl(inv: &CommandInvocation, _ctx: &CommandContext<'_>) -> CommandResult {
    if inv.joined_args() != "-u growth" {
        return CommandResult::error("journalctl: invalid option");
    }

    let mut out = Markup::line("-- Growth journal entries --", Tag::Header);
    for (date, kind, text) in JOURNAL {
        out.push_blank();
        out.push(Line::tagged(date, Tag::JournalDate));
        out.push(
            Line::tagged(kind.label(), Tag::Journal(kind)).with(format!(" {}", text), Tag::Plain),
        );
    }
    out.push_blank();
    out.push(Line::tagged("-- End of journal --", Tag::Muted));
    CommandResult::text(out)
}

/// Strip the scheme for display.
pub(crate) fn display_link(link: &str) -> &str {
    link.strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))
        .or_else(|| link.strip_prefix("mailto:"))
        .unwrap_or(link)
}
