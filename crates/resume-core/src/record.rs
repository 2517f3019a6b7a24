//! Résumé record as read from the data file.
//!
//! Only the fields the transformer consumes are modeled; everything else in
//! the record is ignored on deserialization.

use serde::{Deserialize, Deserializer};

/// The résumé record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    /// Display name, optionally spelled out glyph by glyph for styling.
    pub title: Title,
    /// Professional label, e.g. "Software Engineer".
    pub label: String,
    /// Contact entries in display order.
    #[serde(default)]
    pub contact_info: Vec<ContactInfo>,
}

/// A résumé title: either plain text or a sequence of glyphs.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Title {
    Plain(String),
    Glyphs(Vec<Glyph>),
}

impl Title {
    /// Flatten the title into a single string.
    pub fn flatten(&self) -> String {
        match self {
            Title::Plain(text) => text.clone(),
            Title::Glyphs(glyphs) => glyphs.iter().map(Glyph::as_str).collect(),
        }
    }
}

/// A single glyph of a stylized title.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Glyph {
    Plain(String),
    Styled { character: String },
}

impl Glyph {
    pub fn as_str(&self) -> &str {
        match self {
            Glyph::Plain(c) => c,
            Glyph::Styled { character } => character,
        }
    }
}

/// Contact info entry, discriminated by its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContactInfo {
    Email {
        display: String,
    },
    Website {
        link: String,
    },
    /// Outer `None` means the field was absent, inner `None` an explicit `null`.
    Location {
        #[serde(default, deserialize_with = "present")]
        city: Option<Option<String>>,
        #[serde(rename = "countryCode", default, deserialize_with = "present")]
        country_code: Option<Option<String>>,
        #[serde(default, deserialize_with = "present")]
        region: Option<Option<String>>,
    },
    /// Any entry type this tool does not consume (phone, social links, ...).
    #[serde(other)]
    Other,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ContactInfo {
    pub fn kind(&self) -> Option<ContactKind> {
        match self {
            ContactInfo::Email { .. } => Some(ContactKind::Email),
            ContactInfo::Website { .. } => Some(ContactKind::Website),
            ContactInfo::Location { .. } => Some(ContactKind::Location),
            ContactInfo::Other => None,
        }
    }
}

/// The contact info types the transformer requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Website,
    Location,
}

impl std::fmt::Display for ContactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactKind::Email => write!(f, "email"),
            ContactKind::Website => write!(f, "website"),
            ContactKind::Location => write!(f, "location"),
        }
    }
}

impl ResumeRecord {
    /// Parse a record from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// First contact entry of the given kind.
    pub fn contact(&self, kind: ContactKind) -> Option<&ContactInfo> {
        self.contact_info.iter().find(|ci| ci.kind() == Some(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_title() {
        let title: Title = serde_json::from_str(r#""Jane Doe""#).unwrap();
        assert_eq!(title.flatten(), "Jane Doe");
    }

    #[test]
    fn test_glyph_title() {
        let title: Title =
            serde_json::from_str(r#"["J", {"character": "a", "classes": ["accent"]}, "n", "e"]"#)
                .unwrap();
        assert!(matches!(title, Title::Glyphs(ref g) if g.len() == 4));
        assert_eq!(title.flatten(), "Jane");
    }

    #[test]
    fn test_empty_glyph_title() {
        let title: Title = serde_json::from_str("[]").unwrap();
        assert_eq!(title.flatten(), "");
    }

    #[test]
    fn test_contact_info_ignores_unknown_types_and_fields() {
        let json = r#"
            {
                "title": "Jane",
                "label": "Engineer",
                "summary": "not consumed",
                "contactInfo": [
                    {"type": "phone", "display": "555-0100"},
                    {"type": "email", "display": "jane@x.com", "link": "mailto:jane@x.com"},
                    {"type": "location", "city": "Metropolis", "countryCode": "US", "region": "NY"}
                ]
            }
        "#;

        let record = ResumeRecord::from_json(json).unwrap();
        assert_eq!(record.contact_info.len(), 3);
        assert!(matches!(record.contact_info[0], ContactInfo::Other));
        assert!(record.contact(ContactKind::Website).is_none());
        match record.contact(ContactKind::Location) {
            Some(ContactInfo::Location { country_code, .. }) => {
                assert_eq!(country_code, &Some(Some("US".to_string())));
            }
            other => panic!("unexpected location entry: {:?}", other),
        }
    }

    #[test]
    fn test_contact_lookup_takes_first_match() {
        let json = r#"
            {
                "title": "Jane",
                "label": "Engineer",
                "contactInfo": [
                    {"type": "email", "display": "first@x.com"},
                    {"type": "email", "display": "second@x.com"}
                ]
            }
        "#;

        let record = ResumeRecord::from_json(json).unwrap();
        match record.contact(ContactKind::Email) {
            Some(ContactInfo::Email { display }) => assert_eq!(display, "first@x.com"),
            other => panic!("unexpected email entry: {:?}", other),
        }
    }

    #[test]
    fn test_location_distinguishes_null_from_absent() {
        let json = r#"
            {
                "title": "Jane",
                "label": "Engineer",
                "contactInfo": [
                    {"type": "location", "city": null, "countryCode": "US"}
                ]
            }
        "#;

        let record = ResumeRecord::from_json(json).unwrap();
        match record.contact(ContactKind::Location) {
            Some(ContactInfo::Location {
                city,
                country_code,
                region,
            }) => {
                assert_eq!(city, &Some(None));
                assert_eq!(country_code, &Some(Some("US".to_string())));
                assert_eq!(region, &None);
            }
            other => panic!("unexpected location entry: {:?}", other),
        }
    }

    #[test]
    fn test_contact_kind_display() {
        assert_eq!(ContactKind::Location.to_string(), "location");
    }
}
