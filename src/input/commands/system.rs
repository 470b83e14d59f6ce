//! `clear`, `sudo` and `rm`: commands that mostly exist for their effects.

use super::info::display_link;
use super::{CommandContext, CommandResult};
use crate::input::invocation::CommandInvocation;
use crate::model::markup::{Line, Markup, Tag};
use crate::services::effects::SideEffect;
use std::time::Duration;

const DEFAULT_EMAIL: &str = "hello@portfolio.dev";

/// Empties the transcript with a brief flash.
pub fn clear(_inv: &CommandInvocation, _ctx: &CommandContext<'_>) -> CommandResult {
    CommandResult::clear_screen().with_effect(SideEffect::Flash)
}

/// `sudo hire me` throws confetti; anything else asks for a password.
pub fn sudo(inv: &CommandInvocation, ctx: &CommandContext<'_>) -> CommandResult {
    if inv.joined_args() != "hire me" {
        return CommandResult::error(format!("[sudo] password for {}:", user_name(ctx)));
    }

    let mut out = Markup::line("🎉 sudo: hire successful!", Tag::Header);
    out.push_blank();
    out.push(Line::plain("Thanks for considering me!"));
    out.push_blank();
    for pitch in [
        "✓ Available for full-time opportunities",
        "✓ Open to interesting projects",
        "✓ Remote-friendly",
    ] {
        out.push(Line::tagged(pitch, Tag::Success));
    }
    out.push_blank();
    out.push(Line::plain("📧 Let's connect: ").with(contact_email(ctx), Tag::Link));

    CommandResult::text(out).with_effect(SideEffect::Confetti)
}

/// `rm -rf /` glitches the screen, waits, then admits it was a joke.
pub fn rm(inv: &CommandInvocation, ctx: &CommandContext<'_>) -> CommandResult {
    if inv.arg(0) != Some("-rf") || inv.arg(1) != Some("/") {
        return CommandResult::error("rm: missing operand");
    }

    let out = Markup::line("⚠️ System Recovery Mode", Tag::Header)
        .with(Line::plain(
            "Just kidding! This is a safe portfolio environment.",
        ))
        .with(Line::tagged("Try 'help' for actual commands.", Tag::Muted));

    CommandResult::text(out)
        .with_effect(SideEffect::Glitch)
        .with_pause(Duration::from_millis(ctx.shell.pause_after_rm_ms))
}

/// Lower-cased first name, as a login would spell it.
fn user_name(ctx: &CommandContext<'_>) -> String {
    ctx.content
        .profile
        .name
        .split_whitespace()
        .next()
        .map(str::to_lowercase)
        .unwrap_or_else(|| "guest".to_string())
}

fn contact_email<'a>(ctx: &CommandContext<'a>) -> &'a str {
    let content = ctx.content;
    if let Some(email) = content.profile.email.as_deref() {
        return email;
    }
    content
        .social("email")
        .map(|s| display_link(&s.link))
        .unwrap_or(DEFAULT_EMAIL)
}
