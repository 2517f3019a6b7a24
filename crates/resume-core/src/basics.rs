//! The JSON Résumé `basics` document and the transformer that builds it.

use serde::Serialize;

use crate::gravatar;
use crate::record::{ContactInfo, ContactKind, ResumeRecord};
use crate::{CoreError, Result};

/// Top-level resume.json document.
///
/// No `$schema` key is emitted: jsonresume.org rejects documents carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeJson {
    pub basics: TransformedBasics,
}

/// The `basics` section of a JSON Résumé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformedBasics {
    pub name: String,
    pub label: String,
    pub picture: String,
    pub email: String,
    pub website: String,
    pub location: Location,
}

/// Fields absent from the record are omitted; explicit `null`s are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Option<String>>,
}

impl ResumeJson {
    /// Transform a résumé record into a resume.json document.
    ///
    /// Fails if the record lacks an `email`, `website` or `location` contact entry.
    pub fn from_record(record: &ResumeRecord) -> Result<Self> {
        let email = match record.contact(ContactKind::Email) {
            Some(ContactInfo::Email { display }) => display.clone(),
            _ => return Err(missing(ContactKind::Email)),
        };

        let website = match record.contact(ContactKind::Website) {
            Some(ContactInfo::Website { link }) => link.clone(),
            _ => return Err(missing(ContactKind::Website)),
        };

        let location = match record.contact(ContactKind::Location) {
            Some(ContactInfo::Location {
                city,
                country_code,
                region,
            }) => Location {
                city: city.clone(),
                country_code: country_code.clone(),
                region: region.clone(),
            },
            _ => return Err(missing(ContactKind::Location)),
        };

        Ok(Self {
            basics: TransformedBasics {
                name: record.title.flatten(),
                label: record.label.clone(),
                picture: gravatar::avatar_url(&email),
                email,
                website,
                location,
            },
        })
    }

    /// Serialize as pretty-printed JSON with 2-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn missing(kind: ContactKind) -> CoreError {
    CoreError::MissingContact { kind }
}
