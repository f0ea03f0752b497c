//! Magic-byte sniffing: is this file a PDF?

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::utils::config::{HEADER_LEN, PDF_MAGIC};

/// True when `header` starts with the PDF signature.
pub fn is_pdf_header(header: &[u8]) -> bool {
    header.starts_with(PDF_MAGIC)
}

/// Read up to [`HEADER_LEN`] bytes from the start of `path`.
fn read_header(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header)?;
    Ok(header)
}

/// True only if `path` can be opened and its header is a PDF.
/// Open and read failures are not errors here; the file is just not a candidate.
pub fn classify(path: &Path) -> bool {
    match read_header(path) {
        Ok(header) => is_pdf_header(&header),
        Err(_) => false,
    }
}
