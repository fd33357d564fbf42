//! Resolving ids through the shared metadata endpoint.
//!
//! The endpoint answers with a map from id to record for whatever kind of id
//! it is given, so the same request serves mangas and authors alike.

use crate::api::{ self, API, APIError };
use crate::author::Author;
use crate::manga::Manga;

use std::collections::HashMap;

use log::debug;

/// Walks `ids` in order and keeps the mangas that were returned for them.
pub fn order_by_ids(map:&HashMap<String, Manga>, ids:&[String]) -> Vec<Manga> {
    ids.iter()
        .filter_map(|id| {
            let manga = map.get(id).cloned();
            if manga.is_none() {
                debug!("no metadata returned for manga {}", id);
            }
            manga
        })
        .collect::<Vec<Manga>>()
}

/// Appends the resolved authors to each manga in the order of its author ids
/// and sets the primary author. Unresolved ids are skipped.
pub fn attach_authors(mangas:&mut [Manga], authors:Vec<Author>) {
    let author_map = authors.into_iter()
        .map(|author| (author.id.clone(), author))
        .collect::<HashMap<String, Author>>();

    for manga in mangas.iter_mut() {
        for id in manga.author_ids.iter() {
            match author_map.get(id) {
                Some(author) => manga.authors.push(author.clone()),
                None => debug!("author {} of manga {} could not be resolved", id, manga.id),
            }
        }
        if manga.authors.is_empty() {
            continue;
        }
        manga.set_primary_author();
    }
}

impl API {
    async fn meta(&self, step:&'static str, ids:&[String]) -> Result<serde_json::Value, APIError> {
        self.requester.post(&self.meta_url, &[], ids)
            .await
            .map_err(APIError::request(step))
    }

    /// Returns mangas in the order of `ids`. Ids without a record are dropped.
    pub async fn mangas_by_ids(&self, ids:&[String]) -> Result<Vec<Manga>, APIError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let res = self.meta("manga metadata", ids).await?;
        let manga_map = api::decode::<HashMap<String, Manga>>("manga metadata", res)?;
        Ok(order_by_ids(&manga_map, ids))
    }

    /// Returns authors in whatever order the endpoint sent them.
    pub async fn authors_by_ids(&self, ids:&[String]) -> Result<Vec<Author>, APIError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let res = self.meta("author metadata", ids).await?;
        let author_map = api::decode::<HashMap<String, Author>>("author metadata", res)?;
        Ok(author_map.into_values().collect::<Vec<Author>>())
    }

    /// Resolves the authors of all mangas in one request and attaches them.
    pub async fn add_authors(&self, mut mangas:Vec<Manga>) -> Result<Vec<Manga>, APIError> {
        let ids = mangas.iter()
            .flat_map(|manga| manga.author_ids.iter().cloned())
            .collect::<Vec<String>>();

        let authors = self.authors_by_ids(&ids).await?;
        attach_authors(&mut mangas, authors);

        Ok(mangas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manga(id:&str, author_ids:&[&str]) -> Manga {
        Manga {
            id: id.to_string(),
            author_ids: author_ids.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn author(id:&str, name:&str) -> Author {
        Author {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn ids(ids:&[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn order_follows_input_and_drops_missing() {
        let map = ["a", "b", "c"].iter()
            .map(|id| (id.to_string(), manga(id, &[])))
            .collect::<HashMap<String, Manga>>();

        let ordered = order_by_ids(&map, &ids(&["c", "x", "a", "b"]));
        let got = ordered.iter().map(|m| m.id.as_str()).collect::<Vec<&str>>();
        assert_eq!(got, vec!["c", "a", "b"]);
    }

    #[test]
    fn order_keeps_duplicate_ids() {
        let map = HashMap::from([("a".to_string(), manga("a", &[]))]);
        assert_eq!(order_by_ids(&map, &ids(&["a", "a"])).len(), 2);
        assert!(order_by_ids(&map, &ids(&["z"])).is_empty());
    }

    #[test]
    fn attaches_authors_in_manga_order() {
        let mut mangas = vec![manga("m1", &["a2", "a1"]), manga("m2", &["a1"])];
        attach_authors(&mut mangas, vec![author("a1", "One"), author("a2", "Two")]);

        let names = mangas[0].authors.iter().map(|a| a.name.as_str()).collect::<Vec<&str>>();
        assert_eq!(names, vec!["Two", "One"]);
        assert_eq!(mangas[0].author.as_ref().map(|a| a.id.as_str()), Some("a2"));
        assert_eq!(mangas[1].author.as_ref().map(|a| a.name.as_str()), Some("One"));
    }

    #[test]
    fn unresolved_authors_are_skipped() {
        let mut mangas = vec![manga("m1", &["gone", "a1"]), manga("m2", &["gone"])];
        attach_authors(&mut mangas, vec![author("a1", "One")]);

        assert_eq!(mangas[0].authors.len(), 1);
        assert_eq!(mangas[0].author.as_ref().map(|a| a.id.as_str()), Some("a1"));
        assert!(mangas[1].authors.is_empty());
        assert!(mangas[1].author.is_none());
    }

    #[test]
    fn manga_without_authors_is_untouched() {
        let mut mangas = vec![manga("m1", &[])];
        attach_authors(&mut mangas, vec![author("a1", "One")]);
        attach_authors(&mut mangas, vec![]);

        assert!(mangas[0].authors.is_empty());
        assert!(mangas[0].author.is_none());
    }
}
