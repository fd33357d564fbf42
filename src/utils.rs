use regex::Regex;

/// Accepts a bare series id or a mangarock.com url containing one.
pub fn get_manga_id(s:&str) -> Option<String> {
    lazy_static! {
        static ref MANGA_RE:Regex = Regex::new(r"(mrs-serie-\d+)").unwrap();
    }

    let id = MANGA_RE.captures(s)?.get(1)?.as_str().to_string();
    Some(id)
}

/// Accepts a bare chapter id or a mangarock.com url containing one.
pub fn get_chapter_id(s:&str) -> Option<String> {
    lazy_static! {
        static ref CHAPTER_RE:Regex = Regex::new(r"(mrs-chapter-\d+)").unwrap();
    }

    let id = CHAPTER_RE.captures(s)?.get(1)?.as_str().to_string();
    Some(id)
}

/// Accepts a bare author id or a mangarock.com url containing one.
pub fn get_author_id(s:&str) -> Option<String> {
    lazy_static! {
        static ref AUTHOR_RE:Regex = Regex::new(r"(mrs-author-\d+)").unwrap();
    }

    let id = AUTHOR_RE.captures(s)?.get(1)?.as_str().to_string();
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manga_id_from_url() {
        assert_eq!(get_manga_id("https://mangarock.com/manga/mrs-serie-100177863").as_deref(), Some("mrs-serie-100177863"));
        assert_eq!(get_manga_id("mrs-serie-100177863").as_deref(), Some("mrs-serie-100177863"));
        assert_eq!(get_manga_id("https://mangarock.com/manga/"), None);
    }

    #[test]
    fn chapter_id_from_url() {
        let url = "https://mangarock.com/manga/mrs-serie-100177863/chapter/mrs-chapter-100177864";
        assert_eq!(get_chapter_id(url).as_deref(), Some("mrs-chapter-100177864"));
        assert_eq!(get_manga_id(url).as_deref(), Some("mrs-serie-100177863"));
        assert_eq!(get_chapter_id("mrs-serie-100177863"), None);
    }

    #[test]
    fn author_id_from_url() {
        assert_eq!(get_author_id("https://mangarock.com/author/mrs-author-100177862").as_deref(), Some("mrs-author-100177862"));
        assert_eq!(get_author_id("mrs-author-100177862").as_deref(), Some("mrs-author-100177862"));
        assert_eq!(get_author_id("https://mangarock.com/manga/mrs-serie-100177863"), None);
    }
}
