//! # Donor records
//!
//! [`DonorRecord`] is the backend-owned entity returned by `GET /api/donors`.
//! The client never mutates it, only renders it. Beyond the always-present
//! contact fields the backend may include a donation type, location, blood
//! group and last-donation date; everything optional defaults to a rendered
//! placeholder.
//!
//! [`DonorKind`] decides which directory sections a record appears in. A
//! record without a `donor_type` shows up in **both** the organ and blood
//! sections — older registrations predate the field, and hiding them would
//! make real donors unfindable.

use serde::{Deserialize, Serialize};

/// What the donor has registered to give.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonorKind {
    Organ,
    Blood,
    Both,
}

/// A registered donor as listed by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DonorRecord {
    pub fullname: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_type: Option<DonorKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_donated: Option<String>,
}

impl DonorRecord {
    /// Whether this record belongs in the organ-donor section.
    pub fn in_organ_list(&self) -> bool {
        matches!(
            self.donor_type,
            None | Some(DonorKind::Organ) | Some(DonorKind::Both)
        )
    }

    /// Whether this record belongs in the blood-donor section.
    pub fn in_blood_list(&self) -> bool {
        matches!(
            self.donor_type,
            None | Some(DonorKind::Blood) | Some(DonorKind::Both)
        )
    }

    /// Location line; the backend does not track location yet.
    pub fn location_display(&self) -> &str {
        self.location.as_deref().unwrap_or("Location not specified")
    }

    /// Blood-group badge text.
    pub fn blood_group_display(&self) -> &str {
        self.blood_group.as_deref().unwrap_or("Unknown")
    }

    /// Last-donation line shown on the card.
    pub fn last_donated_display(&self) -> &str {
        self.last_donated.as_deref().unwrap_or("Not recorded")
    }

    /// The card's full rendered text, lowercased, for the search filter.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.fullname,
            self.location_display(),
            self.phone,
            self.blood_group_display(),
            self.last_donated_display(),
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_donor_type_defaults_to_both_sections() {
        let record: DonorRecord =
            serde_json::from_str(r#"{"fullname":"Asha Rao","phone":"9876543210"}"#).unwrap();
        assert_eq!(record.donor_type, None);
        assert!(record.in_organ_list());
        assert!(record.in_blood_list());
    }

    #[test]
    fn donor_type_routes_to_one_section() {
        let organ = DonorRecord {
            donor_type: Some(DonorKind::Organ),
            ..Default::default()
        };
        assert!(organ.in_organ_list());
        assert!(!organ.in_blood_list());

        let blood = DonorRecord {
            donor_type: Some(DonorKind::Blood),
            ..Default::default()
        };
        assert!(!blood.in_organ_list());
        assert!(blood.in_blood_list());

        let both = DonorRecord {
            donor_type: Some(DonorKind::Both),
            ..Default::default()
        };
        assert!(both.in_organ_list());
        assert!(both.in_blood_list());
    }

    #[test]
    fn placeholders_for_untracked_fields() {
        let record = DonorRecord {
            fullname: "Asha Rao".to_string(),
            phone: "9876543210".to_string(),
            ..Default::default()
        };
        assert_eq!(record.location_display(), "Location not specified");
        assert_eq!(record.blood_group_display(), "Unknown");
        assert_eq!(record.last_donated_display(), "Not recorded");
    }

    #[test]
    fn search_text_covers_all_rendered_fields() {
        let record = DonorRecord {
            fullname: "Asha Rao".to_string(),
            phone: "9876543210".to_string(),
            location: Some("Chennai".to_string()),
            blood_group: Some("B+".to_string()),
            ..Default::default()
        };
        let text = record.search_text();
        assert!(text.contains("asha rao"));
        assert!(text.contains("chennai"));
        assert!(text.contains("9876543210"));
        assert!(text.contains("b+"));
    }

    #[test]
    fn donor_kind_wire_format() {
        let parsed: DonorKind = serde_json::from_str("\"both\"").unwrap();
        assert_eq!(parsed, DonorKind::Both);
        assert!(serde_json::from_str::<DonorKind>("\"plasma\"").is_err());
    }
}
