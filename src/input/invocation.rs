//! Parsing a submitted line into a command name and arguments.

/// A parsed command line.
///
/// The name is lower-cased; arguments keep their case and order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub name: String,
    pub args: Vec<String>,
}

impl CommandInvocation {
    pub fn new(name: impl Into<String>, args: &[&str]) -> Self {
        Self {
            name: name.into().to_lowercase(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Split on whitespace. Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let name = words.next()?.to_lowercase();
        Some(Self {
            name,
            args: words.map(str::to_string).collect(),
        })
    }

    /// Arguments joined by single spaces.
    pub fn joined_args(&self) -> String {
        self.args.join(" ")
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercases_name_only() {
        let inv = CommandInvocation::parse("  CAT  README.md ").unwrap();
        assert_eq!(inv.name, "cat");
        assert_eq!(inv.args, vec!["README.md"]);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let inv = CommandInvocation::parse("sudo\thire   me").unwrap();
        assert_eq!(inv.joined_args(), "hire me");
        assert_eq!(inv.arg(1), Some("me"));
        assert_eq!(inv.arg(2), None);
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert!(CommandInvocation::parse("").is_none());
        assert!(CommandInvocation::parse("   \t ").is_none());
    }
}
