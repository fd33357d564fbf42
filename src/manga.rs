use crate::author::Author;
use crate::chapter::Chapter;
use crate::types::null_as_default;

use std::ops::{ Deref, DerefMut };

use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Category {
    #[serde(rename="oid", deserialize_with="null_as_default")]
    pub id: String,
    #[serde(deserialize_with="null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Manga {
    #[serde(rename="oid", deserialize_with="null_as_default")]
    pub id: String,
    #[serde(deserialize_with="null_as_default")]
    pub name: String,
    /// First entry of `authors` once they have been resolved. Never sent by the API.
    #[serde(skip_deserializing, skip_serializing_if="Option::is_none")]
    pub author: Option<Author>,
    #[serde(deserialize_with="null_as_default")]
    pub authors: Vec<Author>,
    #[serde(deserialize_with="null_as_default")]
    pub author_ids: Vec<String>,
    #[serde(deserialize_with="null_as_default")]
    pub genres: Vec<String>,
    #[serde(deserialize_with="null_as_default")]
    pub rank: i64,
    #[serde(deserialize_with="null_as_default")]
    pub updated_chapters: i64,
    #[serde(deserialize_with="null_as_default")]
    pub new_chapters: Vec<Chapter>,
    #[serde(alias="cmpleted", deserialize_with="null_as_default")]
    pub completed: bool,
    #[serde(deserialize_with="null_as_default")]
    pub thumbnail: String,
    #[serde(rename="updated_at", skip_serializing_if="Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}
impl Manga {
    pub fn set_primary_author(&mut self) {
        self.author = self.authors.first().cloned();
    }
}

/// The shape returned when a single manga is requested. It carries the full chapter list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MangaSingle {
    #[serde(flatten)]
    pub manga: Manga,
    #[serde(deserialize_with="null_as_default")]
    pub description: String,
    #[serde(deserialize_with="null_as_default")]
    pub chapters: Vec<Chapter>,
    #[serde(rename="rich_categories", deserialize_with="null_as_default")]
    pub categories: Vec<Category>,
    #[serde(deserialize_with="null_as_default")]
    pub cover: String,
    #[serde(deserialize_with="null_as_default")]
    pub artworks: Vec<String>,
    #[serde(rename="alias", deserialize_with="null_as_default")]
    pub aliases: Vec<String>,
}

impl Deref for MangaSingle {
    type Target = Manga;
    fn deref(&self) -> &Manga {
        &self.manga
    }
}

impl DerefMut for MangaSingle {
    fn deref_mut(&mut self) -> &mut Manga {
        &mut self.manga
    }
}
