/// Encoding and newline preservation for the strings file
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf8Bom,
    /// Classic `.properties` encoding; used when the bytes are not valid UTF-8
    Latin1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Newline {
    #[default]
    Lf,
    Crlf,
}

impl Newline {
    pub fn as_str(self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::Crlf => "\r\n",
        }
    }
}

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// How a file was laid out on disk, so a rewrite looks the same.
///
/// A single CRLF anywhere marks the file as CRLF; mixed files are rewritten
/// with CRLF on every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextLayout {
    pub encoding: Encoding,
    pub newline: Newline,
}

impl TextLayout {
    pub fn detect(content: &[u8]) -> Self {
        let encoding = if content.starts_with(&UTF8_BOM) {
            Encoding::Utf8Bom
        } else if std::str::from_utf8(content).is_ok() {
            Encoding::Utf8
        } else {
            Encoding::Latin1
        };

        let newline = if content.windows(2).any(|w| w == b"\r\n") {
            Newline::Crlf
        } else {
            Newline::Lf
        };

        Self { encoding, newline }
    }

    pub fn decode(&self, bytes: &[u8]) -> io::Result<String> {
        match self.encoding {
            Encoding::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Encoding::Utf8Bom => {
                let body = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
                String::from_utf8(body.to_vec())
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            }
            // Latin-1 bytes map one to one onto U+0000..=U+00FF
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    /// Whether every character of `text` can be written without escaping.
    pub fn can_encode(&self, text: &str) -> bool {
        match self.encoding {
            Encoding::Utf8 | Encoding::Utf8Bom => true,
            Encoding::Latin1 => text.chars().all(|ch| u32::from(ch) <= 0xFF),
        }
    }

    /// Fails with `InvalidData` rather than escaping characters Latin-1 cannot hold.
    pub fn encode(&self, text: &str) -> io::Result<Vec<u8>> {
        match self.encoding {
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Utf8Bom => {
                let mut bytes = UTF8_BOM.to_vec();
                bytes.extend_from_slice(text.as_bytes());
                Ok(bytes)
            }
            Encoding::Latin1 => text
                .chars()
                .map(|ch| {
                    u8::try_from(u32::from(ch)).map_err(|_| {
                        io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("'{ch}' cannot be written to a Latin-1 file"),
                        )
                    })
                })
                .collect(),
        }
    }
}
