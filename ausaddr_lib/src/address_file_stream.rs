use std::{
    borrow::Cow,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use tracing::warn;

/// Reads a file holding one address per line.
///
/// Every line is yielded, blank ones included, so results stay aligned with
/// the input. Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub struct AddressFileStream {
    reader: BufReader<File>,
    line_number: usize,
    buf: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEntry {
    /// 1-based line number within the file.
    pub line_number: usize,
    pub address: String,
}

impl AddressFileStream {
    pub fn new<P: AsRef<Path>>(filename: P) -> io::Result<AddressFileStream> {
        Ok(AddressFileStream {
            reader: BufReader::new(File::open(filename)?),
            line_number: 0,
            buf: vec![],
        })
    }
}

impl Iterator for AddressFileStream {
    type Item = io::Result<AddressEntry>;

    fn next(&mut self) -> Option<io::Result<AddressEntry>> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                let line = String::from_utf8_lossy(&self.buf);
                if let Cow::Owned(_) = line {
                    warn!(line = self.line_number, "replaced invalid UTF-8 in address");
                }
                Some(Ok(AddressEntry {
                    line_number: self.line_number,
                    address: line.trim_end_matches(['\n', '\r']).to_string(),
                }))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
