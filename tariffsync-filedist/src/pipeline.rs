//! Signed envelope to plaintext stream.

use crate::error::{FiledistError, FiledistResult};
use crate::keyring::EnvelopeOpener;
use flate2::read::MultiGzDecoder;
use std::io::{self, BufRead, BufReader, Cursor, Read};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const GZIP_DEFLATE: u8 = 8;
const GZIP_HEADER_LEN: usize = 10;

/// Decompressed export document.
///
/// Owns every buffer behind it, so dropping the stream on any path releases
/// the downloaded and authenticated bytes.
pub struct PlaintextStream {
    inner: BufReader<MultiGzDecoder<Cursor<Vec<u8>>>>,
}

impl Read for PlaintextStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for PlaintextStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

/// Wraps an authenticated payload in a gzip reader after checking its header.
pub fn decompress(payload: Vec<u8>) -> FiledistResult<PlaintextStream> {
    if payload.len() < GZIP_HEADER_LEN {
        return Err(FiledistError::Decompression(format!(
            "payload too short for a gzip header ({} bytes)",
            payload.len()
        )));
    }
    if payload[..2] != GZIP_MAGIC {
        return Err(FiledistError::Decompression(
            "payload is not gzip (bad magic)".to_string(),
        ));
    }
    if payload[2] != GZIP_DEFLATE {
        return Err(FiledistError::Decompression(format!(
            "unsupported gzip compression method {}",
            payload[2]
        )));
    }
    Ok(PlaintextStream {
        inner: BufReader::new(MultiGzDecoder::new(Cursor::new(payload))),
    })
}

/// Authenticates a raw downloaded file and opens its decompressed content.
pub fn open_plaintext(raw: &[u8], opener: &dyn EnvelopeOpener) -> FiledistResult<PlaintextStream> {
    let payload = opener.open(raw)?;
    decompress(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn gzip_payload_reads_back() {
        let mut stream = decompress(gzip(b"<export/>")).unwrap();
        let mut out = String::new();
        stream.read_to_string(&mut out).unwrap();
        assert_eq!(out, "<export/>");
    }

    #[test]
    fn concatenated_members_are_read_in_full() {
        let mut payload = gzip(b"<export>");
        payload.extend(gzip(b"</export>"));
        let mut out = String::new();
        decompress(payload).unwrap().read_to_string(&mut out).unwrap();
        assert_eq!(out, "<export></export>");
    }

    #[test]
    fn plain_xml_is_not_a_gzip_stream() {
        let err = decompress(b"<export></export>".to_vec()).err().unwrap();
        assert!(matches!(err, FiledistError::Decompression(_)));
    }

    #[test]
    fn short_payload_is_rejected() {
        let err = decompress(vec![0x1f, 0x8b]).err().unwrap();
        assert!(matches!(err, FiledistError::Decompression(_)));
    }
}
