use crate::types::null_as_default;

use serde::{ Deserialize, Serialize };

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Chapter {
    #[serde(rename="oid", deserialize_with="null_as_default")]
    pub id: String,
    #[serde(deserialize_with="null_as_default")]
    pub name: String,

    // Only available if requested as part of a single manga
    #[serde(deserialize_with="null_as_default")]
    pub order: i64,

    // Only available if requested as a chapter
    #[serde(deserialize_with="null_as_default")]
    pub pages: Vec<String>,
}
impl Chapter {
    pub fn with_pages(mut self, pages:Vec<String>) -> Self {
        self.pages = pages;
        self
    }
}

/// Linear scan, first match wins.
pub fn find_chapter<'a>(chapters:&'a [Chapter], id:&str) -> Option<&'a Chapter> {
    chapters.iter().find(|chapter| chapter.id == id)
}
