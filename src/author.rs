use crate::types::null_as_default;

use serde::{ Deserialize, Serialize };

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Author {
    #[serde(rename="oid", deserialize_with="null_as_default")]
    pub id: String,
    #[serde(deserialize_with="null_as_default")]
    pub name: String,
    #[serde(deserialize_with="null_as_default")]
    pub thumbnail: String,

    // Only available if requested through a manga
    #[serde(deserialize_with="null_as_default")]
    pub role: String,
}
