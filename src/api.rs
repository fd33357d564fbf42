use crate::author::Author;
use crate::chapter::{ self, Chapter };
use crate::config::ClientBuilder;
use crate::manga::{ Manga, MangaSingle };
use crate::requester::{ Requester, RequesterError };
use crate::types::{ IdRecord, SearchRequest };

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum APIError {
    #[error("error requesting {step}: {source}")]
    Request {
        step: &'static str,
        source: RequesterError,
    },
    #[error("error decoding {step}: {source}")]
    Decode {
        step: &'static str,
        source: serde_json::Error,
    },
    #[error("chapter {chapter_id} not found in manga {manga_id}")]
    ChapterNotFound {
        manga_id: String,
        chapter_id: String,
    },
    #[error("author with id {id} not found")]
    AuthorNotFound {
        id: String,
    },
    #[error("manga {id} has no authors")]
    NoAuthors {
        id: String,
    },
}

impl APIError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ChapterNotFound { .. } | Self::AuthorNotFound { .. })
    }

    pub(crate) fn request(step:&'static str) -> impl FnOnce(RequesterError) -> Self {
        move |source| Self::Request { step, source }
    }
}

pub(crate) fn decode<T:DeserializeOwned>(step:&'static str, data:Value) -> Result<T, APIError> {
    serde_json::from_value(data).map_err(|source| APIError::Decode { step, source })
}

/// A MangaRock client. Holds no state between calls besides its configuration.
#[derive(Debug, Clone)]
pub struct API {
    pub(crate) requester: Requester,
    pub(crate) meta_url: String,
}
impl API {
    /// A client against the public MangaRock endpoints.
    pub fn new() -> Self {
        Self::from_parts(Client::new(), crate::config::DEFAULT_BASE_URL, crate::config::DEFAULT_META_URL)
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_parts(client:Client, base_url:&str, meta_url:&str) -> Self {
        Self {
            requester: Requester::new(client, base_url),
            meta_url: meta_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.requester.base_url()
    }

    pub fn meta_url(&self) -> &str {
        &self.meta_url
    }

    /// Returns the latest mangas. Only the ids of the feed are used, the full
    /// records are requested through the metadata endpoint so fields like
    /// recently added chapters are missing, but authors are added.
    ///
    /// `page` is accepted but not sent: the feed endpoint only serves its first page.
    pub async fn latest(&self, page:u32) -> Result<Vec<Manga>, APIError> {
        debug!("latest mangas requested for page {}, the feed is not paginated", page);
        let res = self.requester.get(&self.requester.url("/mrs_latest"), &[])
            .await
            .map_err(APIError::request("latest mangas"))?;

        let latest = decode::<Vec<Manga>>("latest mangas", res)?;
        let ids = latest.into_iter()
            .map(|m| m.id)
            .collect::<Vec<String>>();

        let mangas = self.mangas_by_ids(&ids).await?;
        self.add_authors(mangas).await
    }

    pub async fn search(&self, query:&str) -> Result<Vec<Manga>, APIError> {
        let body = SearchRequest {
            kind: "series",
            keywords: query,
        };
        let res = self.requester.post(&self.requester.url("/mrs_search"), &[], &body)
            .await
            .map_err(APIError::request("search"))?;

        let ids = decode::<Vec<String>>("search results", res)?;
        let mangas = self.mangas_by_ids(&ids).await?;
        self.add_authors(mangas).await
    }

    /// Returns a single manga. It contains more fields than the ones from a list.
    pub async fn manga(&self, id:&str) -> Result<MangaSingle, APIError> {
        let res = self.requester.post(&self.requester.url("/info"), &[("oid", id)], &())
            .await
            .map_err(APIError::request("manga info"))?;

        let mut manga = decode::<MangaSingle>("manga info", res)?;
        if manga.authors.is_empty() {
            return Err(APIError::NoAuthors { id: id.to_string() });
        }
        manga.set_primary_author();

        Ok(manga)
    }

    pub async fn mangas(&self, ids:&[String]) -> Result<Vec<Manga>, APIError> {
        self.mangas_by_ids(ids).await
    }

    /// Returns a chapter of a manga together with its page urls.
    pub async fn chapter(&self, manga_id:&str, chapter_id:&str) -> Result<Chapter, APIError> {
        let manga = self.manga(manga_id).await?;

        let res = self.requester.post(&self.requester.url("/pages"), &[("oid", chapter_id)], &())
            .await
            .map_err(APIError::request("chapter pages"))?;
        let pages = decode::<Vec<String>>("chapter pages", res)?;

        chapter::find_chapter(&manga.chapters, chapter_id)
            .map(|c| c.clone().with_pages(pages))
            .ok_or_else(|| APIError::ChapterNotFound {
                manga_id: manga_id.to_string(),
                chapter_id: chapter_id.to_string(),
            })
    }

    /// Returns an author and their mangas.
    pub async fn author(&self, id:&str) -> Result<(Author, Vec<Manga>), APIError> {
        let author = self.authors_by_ids(&[id.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| APIError::AuthorNotFound { id: id.to_string() })?;

        let res = self.requester.get(&self.requester.url("/mrs_serie_related_author"), &[("oid", id)])
            .await
            .map_err(APIError::request("author mangas"))?;
        let ids = decode::<Vec<IdRecord>>("author mangas", res)?
            .into_iter()
            .map(|m| m.id)
            .collect::<Vec<String>>();

        let mut mangas = self.mangas_by_ids(&ids).await?;
        for manga in mangas.iter_mut() {
            manga.author = Some(author.clone());
        }

        Ok((author, mangas))
    }
}

impl Default for API {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_kinds() {
        assert!(APIError::AuthorNotFound { id: "a".to_string() }.is_not_found());
        assert!(APIError::ChapterNotFound { manga_id: "m".to_string(), chapter_id: "c".to_string() }.is_not_found());
        assert!(!APIError::NoAuthors { id: "m".to_string() }.is_not_found());
        assert_eq!(APIError::AuthorNotFound { id: "mrs-author-0".to_string() }.to_string(), "author with id mrs-author-0 not found");
        assert_eq!(APIError::NoAuthors { id: "mrs-serie-300".to_string() }.to_string(), "manga mrs-serie-300 has no authors");
    }

    #[test]
    fn decode_errors_name_the_step() {
        let err = decode::<Vec<String>>("chapter pages", serde_json::json!({ "pages": [] })).unwrap_err();
        assert!(matches!(err, APIError::Decode { step: "chapter pages", .. }));
        assert!(err.to_string().starts_with("error decoding chapter pages"));
    }

    #[test]
    fn default_endpoints() {
        let api = API::new();
        assert_eq!(api.base_url(), "https://api.mangarockhd.com/query/web401");
        assert_eq!(api.meta_url(), "https://api.mangarockhd.com/meta");
    }
}
