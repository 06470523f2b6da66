use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A catalog record as stored in the `namesofallahs` collection.
///
/// Field names are camelCase on the wire and in BSON so existing documents
/// written by earlier deployments deserialize unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub number: i32,
    pub arabic_name: String,
    pub transliteration: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief_meaning: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by a client when adding a record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewName {
    pub number: i32,
    pub arabic_name: String,
    pub transliteration: String,
    pub translation: String,
    pub brief_meaning: Option<String>,
}

impl Name {
    pub fn new(new: NewName) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            number: new.number,
            arabic_name: new.arabic_name,
            transliteration: new.transliteration,
            translation: new.translation,
            brief_meaning: new.brief_meaning,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive substring match against the searchable fields.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.arabic_name.to_lowercase().contains(&needle)
            || self.transliteration.to_lowercase().contains(&needle)
    }
}
