//! Contact entries and roster file loading.
//!
//! A roster is a TOML file with one `[[contacts]]` table per entry:
//!
//! ```toml
//! [[contacts]]
//! name = "Adam"
//! title = "Director, Thought Engineering"
//! image = "adam.png"   # optional
//! ```
//!
//! Contacts are fully populated here before the selector is constructed;
//! the selector itself never looks at the fields.

use std::path::Path;

use serde::Deserialize;

use crate::error::{RosterError, RosterResult};

/// One entry in the contact roster.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Display name
    pub name: String,

    /// Job title or role
    pub title: String,

    /// Optional image identifier (shown dimly in the card when present)
    #[serde(default)]
    pub image: Option<String>,
}

/// A loaded contact roster.
#[derive(Debug, Clone, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl Roster {
    /// Load contacts from a TOML roster file.
    ///
    /// A file that parses but declares no contacts is an error here so the
    /// message can name the file, instead of surfacing as a bare empty-list
    /// failure from the selector.
    pub fn load(path: &Path) -> RosterResult<Vec<Contact>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RosterError::Read(path.to_path_buf(), e))?;

        let roster: Roster = toml::from_str(&contents)
            .map_err(|e| RosterError::Parse(path.to_path_buf(), e))?;

        if roster.contacts.is_empty() {
            return Err(RosterError::NoContacts(path.to_path_buf()));
        }

        Ok(roster.contacts)
    }

    /// The built-in sample roster used when no roster file is configured.
    pub fn sample() -> Vec<Contact> {
        vec![
            Contact {
                name: "Adam".to_string(),
                title: "Director, Thought Engineering".to_string(),
                image: None,
            },
            Contact {
                name: "Brittany".to_string(),
                title: "Lead Whisperer, Cat Rescue League".to_string(),
                image: None,
            },
            Contact {
                name: "Russell".to_string(),
                title: "Owner, Javascript n' drink of Brooklyn".to_string(),
                image: None,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roster() {
        let toml = r#"
            [[contacts]]
            name = "Adam"
            title = "Director, Thought Engineering"

            [[contacts]]
            name = "Brittany"
            title = "Lead Whisperer, Cat Rescue League"
            image = "brittany.png"
        "#;

        let roster: Roster = toml::from_str(toml).unwrap();
        assert_eq!(roster.contacts.len(), 2);
        assert_eq!(roster.contacts[0].name, "Adam");
        assert_eq!(roster.contacts[0].image, None);
        assert_eq!(roster.contacts[1].image, Some("brittany.png".to_string()));
    }

    #[test]
    fn test_parse_rejects_missing_title() {
        let toml = r#"
            [[contacts]]
            name = "Adam"
        "#;

        assert!(toml::from_str::<Roster>(toml).is_err());
    }

    #[test]
    fn test_load_empty_roster_fails() {
        let dir = std::env::temp_dir();
        let path = dir.join("rolo_test_empty_roster.toml");
        std::fs::write(&path, "# no contacts here\n").unwrap();

        let result = Roster::load(&path);
        assert!(matches!(result, Err(RosterError::NoContacts(_))));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Roster::load(Path::new("/nonexistent/rolo_roster.toml"));
        assert!(matches!(result, Err(RosterError::Read(_, _))));
    }

    #[test]
    fn test_sample_roster() {
        let contacts = Roster::sample();
        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[0].name, "Adam");
        assert_eq!(contacts[2].title, "Owner, Javascript n' drink of Brooklyn");
    }
}
