#![allow(dead_code)]

pub mod tracing;

use std::sync::Arc;
use std::time::Duration;
use termfolio::config::ShellConfig;
use termfolio::content::ContentData;
use termfolio::input::command_registry::CommandRegistry;
use termfolio::input::commands::{CommandContext, CommandResult};
use termfolio::input::invocation::CommandInvocation;

/// A content document with every section filled in.
pub const FULL_CONTENT: &str = r#"{
    "profile": {
        "name": "Linus Example",
        "role": "Kernel Hacker",
        "intro": "I maintain things.",
        "email": "linus@example.org",
        "website": "https://linus.example.org"
    },
    "projects": [
        {"name": "kernel", "description": "A monolithic kernel", "link": "https://x/kernel", "tech": ["C"]},
        {"name": "vcs", "description": "A content tracker", "link": "https://x/vcs", "tech": ["C", "Shell"]}
    ],
    "experience": [
        {"period": "1991-now", "title": "Maintainer", "company": "Self", "highlights": ["Merged.", "Released."]}
    ],
    "skills": {"languages": ["C", "Rust"], "frameworks": ["Kbuild"], "databases": ["SQLite"]},
    "socials": [
        {"name": "GitHub", "link": "github.com/linus", "icon": "gh"},
        {"name": "Email", "link": "mailto:linus@example.org", "icon": "mail"}
    ]
}"#;

pub fn full_content() -> ContentData {
    ContentData::from_json(FULL_CONTENT).expect("fixture parses")
}

pub fn shared(content: ContentData) -> Arc<ContentData> {
    Arc::new(content)
}

/// Parse and dispatch one command line against `content`.
pub fn dispatch(content: &ContentData, line: &str) -> CommandResult {
    let shell = ShellConfig::default();
    let ctx = CommandContext::new(content, Duration::from_secs(90), &shell);
    let invocation = CommandInvocation::parse(line).expect("non-blank command line");
    CommandRegistry::new().dispatch(&invocation, &ctx)
}
