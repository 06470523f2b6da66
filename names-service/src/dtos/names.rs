use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Name, NewName};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddNameRequest {
    #[validate(range(min = 1, max = 99, message = "Number must be between 1 and 99"))]
    #[schema(example = 1)]
    pub number: i32,

    #[validate(length(min = 1, message = "Arabic name is required"))]
    #[schema(example = "الرحمن")]
    pub arabic_name: String,

    #[validate(length(min = 1, message = "Transliteration is required"))]
    #[schema(example = "Ar-Rahman")]
    pub transliteration: String,

    #[validate(length(min = 1, message = "Translation is required"))]
    #[schema(example = "The Merciful")]
    pub translation: String,

    #[validate(length(max = 4000, message = "Brief meaning is too long"))]
    #[schema(example = "He who wills goodness and mercy for all His creatures")]
    pub brief_meaning: Option<String>,
}

impl From<AddNameRequest> for NewName {
    fn from(req: AddNameRequest) -> Self {
        Self {
            number: req.number,
            arabic_name: req.arabic_name,
            transliteration: req.transliteration,
            translation: req.translation,
            brief_meaning: req.brief_meaning,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNameRequest {
    #[validate(length(min = 1, max = 4000, message = "Brief meaning must be 1-4000 characters"))]
    #[schema(example = "The Most Gracious")]
    pub brief_meaning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NameResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: Option<String>,
    #[schema(example = 1)]
    pub number: i32,
    #[schema(example = "الرحمن")]
    pub arabic_name: String,
    #[schema(example = "Ar-Rahman")]
    pub transliteration: String,
    #[schema(example = "The Merciful")]
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_meaning: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Name> for NameResponse {
    fn from(name: Name) -> Self {
        Self {
            id: name.id.map(|oid| oid.to_hex()),
            number: name.number,
            arabic_name: name.arabic_name,
            transliteration: name.transliteration,
            translation: name.translation,
            brief_meaning: name.brief_meaning,
            created_at: name.created_at,
            updated_at: name.updated_at,
        }
    }
}
