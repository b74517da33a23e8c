//! Extraction of signed-file references from a directory listing page.

use crate::error::{FiledistError, FiledistResult};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use reqwest::Url;
use tracing::warn;

/// A file offered by a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    /// Final path segment of the reference, e.g. `tulltaxan_dif_240115.pgp`.
    pub name: String,
    /// Absolute URL of the file.
    pub url: String,
}

impl FileRef {
    /// Resolves a listing `href` against the category URL.
    ///
    /// Only the reference's final path segment is kept, so absolute and
    /// relative links to the same file resolve identically.
    pub fn resolve(category_url: &str, href: &str) -> FiledistResult<Self> {
        let name = last_segment(href).to_string();
        let url = join_url(category_url, &name)?;
        Ok(Self { name, url })
    }
}

fn last_segment(href: &str) -> &str {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    path.rsplit('/').next().unwrap_or(path)
}

/// Joins `name` onto the directory denoted by `base`.
pub fn join_url(base: &str, name: &str) -> FiledistResult<String> {
    let invalid = |reason: String| FiledistError::Url {
        url: base.to_string(),
        reason,
    };
    let mut base = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    base.join(name)
        .map(|url| url.to_string())
        .map_err(|e| invalid(e.to_string()))
}

fn has_extension(href: &str, extension: &str) -> bool {
    last_segment(href)
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case(extension))
}

fn href_of(tag: &BytesStart<'_>) -> Option<String> {
    tag.html_attributes()
        .filter_map(Result::ok)
        .find(|attr| attr.key.local_name().as_ref().eq_ignore_ascii_case(b"href"))
        .map(|attr| match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        })
}

/// Collects every anchor target whose file extension is `extension`, in page order.
///
/// Listing pages are HTML rather than strict XML; anything the reader cannot
/// get past ends the scan, and the references found so far are returned.
pub fn extract_signed_refs(markup: &[u8], extension: &str) -> Vec<String> {
    let mut reader = Reader::from_reader(markup);
    reader.config_mut().check_end_names = false;

    let mut refs = Vec::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(tag)) | Ok(Event::Empty(tag))
                if tag.local_name().as_ref().eq_ignore_ascii_case(b"a") =>
            {
                if let Some(href) = href_of(&tag).filter(|h| has_extension(h, extension)) {
                    refs.push(href);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(
                    error = %e,
                    position = reader.buffer_position() as u64,
                    collected = refs.len(),
                    "listing markup malformed, keeping references found so far"
                );
                break;
            }
        }
        buf.clear();
    }
    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_strips_path_and_query() {
        assert_eq!(last_segment("/a/b/file_240101.pgp?x=1"), "file_240101.pgp");
        assert_eq!(last_segment("file_240101.pgp"), "file_240101.pgp");
    }

    #[test]
    fn extension_match_is_on_final_segment() {
        assert!(has_extension("x/tulltaxan_240101.pgp", "pgp"));
        assert!(has_extension("TULLTAXAN_240101.PGP", "pgp"));
        assert!(!has_extension("x.pgp/readme.txt", "pgp"));
        assert!(!has_extension(".pgp", "pgp"));
        assert!(!has_extension("../", "pgp"));
    }

    #[test]
    fn join_treats_base_as_directory() {
        assert_eq!(
            join_url("https://example.test/xml/dif/", "f_240101.pgp").unwrap(),
            "https://example.test/xml/dif/f_240101.pgp"
        );
        assert_eq!(
            join_url("https://example.test/xml/dif", "f_240101.pgp").unwrap(),
            "https://example.test/xml/dif/f_240101.pgp"
        );
        assert!(matches!(
            join_url("not a url", "f.pgp"),
            Err(FiledistError::Url { .. })
        ));
    }
}
