//! `ls`, `cat` and `wget`: the pretend filesystem.

use super::info::display_link;
use super::{CommandContext, CommandResult};
use crate::input::invocation::CommandInvocation;
use crate::model::markup::{Line, Markup, Tag};

/// Directory names `ls` accepts; all of them list the projects.
const PROJECT_DIRS: [&str; 3] = [".", "projects", "projects/"];

const README: &str = "README.md";

const DEFAULT_DOMAIN: &str = "portfolio.dev";

/// `ls [dir]`: one entry per project.
pub fn ls(inv: &CommandInvocation, ctx: &CommandContext<'_>) -> CommandResult {
    let dir = inv.arg(0).unwrap_or(".");
    if !PROJECT_DIRS.contains(&dir) {
        return CommandResult::error(format!(
            "ls: cannot access '{}': No such directory",
            dir
        ));
    }

    let mut out = Markup::new();
    for project in &ctx.content.projects {
        out.push(Line::plain("▸ ").with(&project.name, Tag::Directory));
    }
    CommandResult::text(out)
}

/// `cat README.md`: a generated overview document.
pub fn cat(inv: &CommandInvocation, ctx: &CommandContext<'_>) -> CommandResult {
    let file = inv.joined_args();
    if !file.eq_ignore_ascii_case(README) {
        let shown = if file.is_empty() {
            "missing operand"
        } else {
            file.as_str()
        };
        return CommandResult::error(format!("cat: {}: No such file", shown));
    }

    let content = ctx.content;
    let mut out = Markup::line(
        format!("# {}'s Portfolio", content.profile.name),
        Tag::Header,
    );
    out.push_blank();
    out.push(Line::plain(&content.profile.intro));
    out.push_blank();

    out.push(Line::tagged("## Projects", Tag::Section));
    for project in &content.projects {
        out.push(
            Line::plain("- ")
                .with(&project.name, Tag::Name)
                .with(format!(": {}", project.description), Tag::Plain),
        );
    }
    out.push_blank();

    out.push(Line::tagged("## Contact", Tag::Section));
    for social in &content.socials {
        out.push(
            Line::plain(format!("- {}: ", social.name)).with(&social.link, Tag::Link),
        );
    }
    CommandResult::text(out)
}

/// `wget resume.pdf`: a fake download log.
pub fn wget(inv: &CommandInvocation, ctx: &CommandContext<'_>) -> CommandResult {
    if inv.arg(0) != Some("resume.pdf") {
        return CommandResult::error("wget: missing URL");
    }

    let domain = ctx
        .content
        .profile
        .website
        .as_deref()
        .map(|site| display_link(site).trim_end_matches('/'))
        .filter(|site| !site.is_empty())
        .unwrap_or(DEFAULT_DOMAIN);

    let mut out = Markup::new();
    for text in [
        format!("--2024-01-01 12:00:00--  https://{}/resume.pdf", domain),
        format!("Resolving {}... done.", domain),
        format!("Connecting to {}|443|... connected.", domain),
        "HTTP request sent, awaiting response... 200 OK".to_string(),
        "Length: 142857 (140K) [application/pdf]".to_string(),
        "Saving to: 'resume.pdf'".to_string(),
    ] {
        out.push(Line::plain(text));
    }
    out.push_blank();
    out.push(Line::plain(
        "resume.pdf      100%[========>] 140K  --.-KB/s    in 0.1s",
    ));
    out.push_blank();
    out.push(Line::tagged("'resume.pdf' saved", Tag::Success));
    CommandResult::text(out)
}
