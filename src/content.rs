//! Portfolio content: profile, projects, experience, skills and socials.
//!
//! Content is read once at startup from a JSON document and is read-only
//! afterwards. When the document is missing or malformed the shell still
//! runs on [`ContentData::fallback`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from reading the content document.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("cannot read content {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse content {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub intro: String,
    /// Second line of the terminal intro
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// What `whoami` lists under "Currently Building"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currently_building: Option<String>,
    /// Contact address used by `sudo hire me`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Domain used in the `wget` transcript
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// `neofetch` "Stack" row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// `neofetch` "Focus" row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default, alias = "desc")]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default, alias = "date")]
    pub period: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub name: String,
    pub link: String,
    #[serde(default)]
    pub icon: String,
}

/// The full content document.
///
/// `skills` keeps the document's category order; `whoami` flattens it in
/// that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentData {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,
    #[serde(default)]
    pub skills: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub socials: Vec<Social>,
}

impl Default for ContentData {
    fn default() -> Self {
        Self::fallback()
    }
}

impl ContentData {
    /// Minimal profile with empty collections, used when no content loads.
    pub fn fallback() -> Self {
        let skills = ["languages", "frameworks", "databases"]
            .into_iter()
            .map(|k| (k.to_string(), Vec::new()))
            .collect();
        Self {
            profile: Profile {
                name: "Abhijit Rayarao".to_string(),
                role: "Software Engineer".to_string(),
                intro: "Building production applications.".to_string(),
                tagline: None,
                currently_building: None,
                email: None,
                website: None,
                stack: None,
                focus: None,
            },
            projects: Vec::new(),
            experience: Vec::new(),
            education: None,
            skills,
            socials: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load content from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents).map_err(|source| ContentError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load content, degrading to the fallback profile on any failure.
    ///
    /// `None` means no content source was configured at all.
    pub fn load_or_fallback(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No content document configured, using fallback profile");
            return Self::fallback();
        };
        match Self::load_from_file(path) {
            Ok(content) => {
                tracing::info!(
                    "Loaded content from {} ({} projects, {} socials)",
                    path.display(),
                    content.projects.len(),
                    content.socials.len()
                );
                content
            }
            Err(e) => {
                tracing::warn!("Failed to load content, using fallback profile: {}", e);
                Self::fallback()
            }
        }
    }

    /// Every skill across categories, in document order.
    pub fn all_skills(&self) -> Vec<&str> {
        self.skills
            .values()
            .flat_map(|v| v.iter().map(String::as_str))
            .collect()
    }

    /// Skills in one category; empty when the category is absent.
    pub fn skills_in(&self, category: &str) -> &[String] {
        self.skills.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Find a social link by case-insensitive name.
    pub fn social(&self, name: &str) -> Option<&Social> {
        self.socials
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Hero stack line: first word of the role, then a few headline skills.
    pub fn stack_line(&self) -> String {
        let lead = self
            .profile
            .role
            .split_whitespace()
            .next()
            .map(str::to_lowercase)
            .unwrap_or_else(|| "developer".to_string());
        let mut parts = vec![lead];
        parts.extend(self.skills_in("frameworks").iter().take(3).cloned());
        parts.extend(self.skills_in("databases").iter().take(1).cloned());
        parts.extend(self.skills_in("ml_data").iter().take(1).cloned());
        parts.join(" • ")
    }
}
