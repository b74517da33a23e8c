//! Chronological ordering of listed files by the date embedded in their names.

use crate::error::{FiledistError, FiledistResult};
use crate::listing::FileRef;
use chrono::NaiveDate;

/// A listed file together with its embedded date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedFile {
    pub file: FileRef,
    pub date: NaiveDate,
}

/// Parses the `YYMMDD` token of `<description>_<YYMMDD>.<ext>`.
///
/// The token is the text after the last underscore, up to the first dot.
pub fn embedded_date(name: &str) -> FiledistResult<NaiveDate> {
    let fail = |reason: &str| FiledistError::FileName {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    let (_, tail) = name.rsplit_once('_').ok_or_else(|| fail("no underscore"))?;
    let (token, _) = tail.split_once('.').ok_or_else(|| fail("no extension"))?;
    if token.len() != 6 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(fail("date token is not six digits"));
    }
    NaiveDate::parse_from_str(token, "%y%m%d").map_err(|e| fail(&e.to_string()))
}

/// Orders files oldest first, keeping listing order among equal dates.
///
/// One non-conforming name fails the whole batch.
pub fn sort_by_embedded_date(files: Vec<FileRef>) -> FiledistResult<Vec<DatedFile>> {
    let mut dated = files
        .into_iter()
        .map(|file| {
            let date = embedded_date(&file.name)?;
            Ok(DatedFile { file, date })
        })
        .collect::<FiledistResult<Vec<_>>>()?;
    dated.sort_by_key(|f| f.date);
    Ok(dated)
}
