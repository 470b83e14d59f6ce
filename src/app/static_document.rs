//! The static view: a scrollable résumé built from the content document.

use crate::content::ContentData;
use crate::model::markup::{Line, Markup, Tag};

/// Skill categories shown in the static view, in display order.
///
/// Each entry is (display label, content keys); the first non-empty key wins.
const SKILL_CATEGORIES: [(&str, &[&str]); 6] = [
    ("Languages", &["languages"]),
    ("Frameworks", &["frameworks"]),
    ("Databases", &["databases"]),
    ("Dev Tools", &["dev_tools", "devtools"]),
    ("System Design", &["system_design"]),
    ("ML/Data", &["ml_data"]),
];

/// Static document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDocument {
    /// Lower-cased profile name
    pub hero_name: String,
    pub hero_stack: String,
    /// Everything below the hero
    pub body: Markup,
}

impl StaticDocument {
    pub fn build(content: &ContentData) -> Self {
        let mut body = Markup::new();
        projects(content, &mut body);
        experience(content, &mut body);
        skills(content, &mut body);
        contact(content, &mut body);
        Self {
            hero_name: content.profile.name.to_lowercase(),
            hero_stack: content.stack_line(),
            body,
        }
    }

    /// Section titles present in the body, in order.
    pub fn sections(&self) -> Vec<&str> {
        self.body.spans_tagged(Tag::Header)
    }
}

fn section(out: &mut Markup, title: &str) {
    if !out.is_empty() {
        out.push_blank();
    }
    out.push(Line::tagged(title, Tag::Header));
    out.push_blank();
}

fn chips(items: &[String]) -> Line {
    let mut line = Line::plain("  ");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            line.push(" ", Tag::Plain);
        }
        line.push(format!("[{}]", item), Tag::Chip);
    }
    line
}

fn projects(content: &ContentData, out: &mut Markup) {
    if content.projects.is_empty() {
        return;
    }
    section(out, "Projects");
    for project in &content.projects {
        out.push(Line::plain("▸ ").with(&project.name, Tag::Directory));
        out.push(Line::plain(format!("  {}", project.description)));
        if !project.tech.is_empty() {
            out.push(chips(&project.tech));
        }
        if !project.link.is_empty() {
            out.push(Line::plain("  ").with(&project.link, Tag::Link));
        }
        out.push_blank();
    }
}

fn experience(content: &ContentData, out: &mut Markup) {
    if content.experience.is_empty() {
        return;
    }
    section(out, "Experience");
    for job in &content.experience {
        out.push(Line::tagged(&job.period, Tag::JournalDate));
        out.push(
            Line::tagged(&job.title, Tag::Name)
                .with(" @ ", Tag::Muted)
                .with(&job.company, Tag::Role),
        );
        let summary = job
            .highlights
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        if !summary.is_empty() {
            out.push(Line::plain(format!("  {}", summary)));
        }
        out.push_blank();
    }
}

fn skills(content: &ContentData, out: &mut Markup) {
    let categories: Vec<(&str, &[String])> = SKILL_CATEGORIES
        .iter()
        .filter_map(|(label, keys)| {
            keys.iter()
                .map(|key| content.skills_in(key))
                .find(|skills| !skills.is_empty())
                .map(|skills| (*label, skills))
        })
        .collect();
    if categories.is_empty() {
        return;
    }
    section(out, "Skills");
    for (label, skills) in categories {
        out.push(Line::tagged(label, Tag::Section));
        out.push(chips(skills));
    }
}

fn contact(content: &ContentData, out: &mut Markup) {
    if content.socials.is_empty() {
        return;
    }
    section(out, "Contact");
    for social in &content.socials {
        out.push(
            Line::tagged(format!("{:<12}", social.name), Tag::Label).with(&social.link, Tag::Link),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "profile": {"name": "Grace Hopper", "role": "Compiler Engineer", "intro": "x"},
        "projects": [{"name": "cobol", "description": "Business language", "link": "https://x/cobol", "tech": ["COBOL", "FLOW-MATIC"]}],
        "experience": [{"period": "1944-1946", "title": "Programmer", "company": "Harvard", "highlights": ["Mark I.", "Found a moth.", "Third."]}],
        "skills": {"languages": ["COBOL"], "devtools": ["A-0"], "ml_data": []},
        "socials": [{"name": "Email", "link": "mailto:grace@navy.mil", "icon": "e"}]
    }"#;

    #[test]
    fn test_full_document_has_all_sections() {
        let content = ContentData::from_json(FULL).unwrap();
        let doc = StaticDocument::build(&content);

        assert_eq!(doc.hero_name, "grace hopper");
        assert_eq!(doc.hero_stack, "compiler");
        assert_eq!(doc.sections(), vec!["Projects", "Experience", "Skills", "Contact"]);

        let text = doc.body.text();
        assert!(text.contains("[COBOL] [FLOW-MATIC]"));
        assert!(text.contains("Mark I. Found a moth."));
        assert!(!text.contains("Third."));
        assert!(text.contains("Dev Tools"));
        assert!(!text.contains("ML/Data"));
        assert!(text.contains("mailto:grace@navy.mil"));
    }

    #[test]
    fn test_fallback_document_omits_empty_sections() {
        let doc = StaticDocument::build(&ContentData::fallback());
        assert_eq!(doc.hero_name, "abhijit rayarao");
        assert_eq!(doc.hero_stack, "software");
        assert!(doc.sections().is_empty());
        assert!(doc.body.is_empty());
    }
}
