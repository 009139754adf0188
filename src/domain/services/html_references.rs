//! Asset reference extraction from HTML shells
//!
//! A small tag/attribute scanner: it tokenizes start tags, reads their
//! attributes regardless of order or quoting, and reports `<script src>`
//! and `<link rel="stylesheet" href>` references. Comments are skipped and
//! inline script bodies are never scanned for tags.

/// What kind of asset a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Script,
    Stylesheet,
}

/// One asset URL referenced from an HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    pub kind: ReferenceKind,
    pub url: String,
}

impl AssetReference {
    /// Last path segment of the URL, without query or fragment
    pub fn file_name(&self) -> &str {
        let end = self
            .url
            .find(|c| c == '?' || c == '#')
            .unwrap_or(self.url.len());
        let path = &self.url[..end];
        path.rsplit('/').next().unwrap_or(path)
    }
}

/// Extract every script and stylesheet reference, in document order
pub fn extract_references(html: &str) -> Vec<AssetReference> {
    let mut refs = Vec::new();
    let bytes = html.as_bytes();
    let mut pos = 0;

    while let Some(offset) = html[pos..].find('<') {
        let start = pos + offset;

        if html[start..].starts_with("<!--") {
            pos = match html[start + 4..].find("-->") {
                Some(end) => start + 4 + end + 3,
                None => break,
            };
            continue;
        }

        let Some(&next) = bytes.get(start + 1) else {
            break;
        };
        if !next.is_ascii_alphabetic() {
            // End tags, doctype, processing instructions, stray '<'
            pos = start + 1;
            continue;
        }

        let tag = parse_start_tag(html, start + 1);
        pos = tag.end;

        match tag.name.as_str() {
            "script" => {
                if let Some(src) = tag.attr("src").filter(|s| !s.is_empty()) {
                    refs.push(AssetReference {
                        kind: ReferenceKind::Script,
                        url: src.to_string(),
                    });
                }
                if !tag.self_closing {
                    pos = skip_raw_text(html, pos, "</script");
                }
            }
            "style" if !tag.self_closing => {
                pos = skip_raw_text(html, pos, "</style");
            }
            "link" => {
                let is_stylesheet = tag.attr("rel").is_some_and(|rel| {
                    rel.split_ascii_whitespace()
                        .any(|t| t.eq_ignore_ascii_case("stylesheet"))
                });
                if is_stylesheet {
                    if let Some(href) = tag.attr("href").filter(|s| !s.is_empty()) {
                        refs.push(AssetReference {
                            kind: ReferenceKind::Stylesheet,
                            url: href.to_string(),
                        });
                    }
                }
            }
            _ => {}
        }
    }

    refs
}

struct StartTag {
    name: String,
    attrs: Vec<(String, String)>,
    self_closing: bool,
    /// Byte offset just past the closing `>`
    end: usize,
}

impl StartTag {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Parse a start tag whose name begins at `pos` (just after `<`)
fn parse_start_tag(html: &str, mut pos: usize) -> StartTag {
    let bytes = html.as_bytes();
    let len = bytes.len();

    let name_start = pos;
    while pos < len && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'-') {
        pos += 1;
    }
    let name = html[name_start..pos].to_ascii_lowercase();

    let mut attrs = Vec::new();
    let mut self_closing = false;

    loop {
        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= len {
            break;
        }
        match bytes[pos] {
            b'>' => {
                pos += 1;
                break;
            }
            b'/' => {
                self_closing = true;
                pos += 1;
                continue;
            }
            _ => {}
        }
        self_closing = false;

        let attr_start = pos;
        while pos < len
            && !bytes[pos].is_ascii_whitespace()
            && !matches!(bytes[pos], b'=' | b'>' | b'/')
        {
            pos += 1;
        }
        let attr_name = html[attr_start..pos].to_ascii_lowercase();

        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }

        let mut value = String::new();
        if pos < len && bytes[pos] == b'=' {
            pos += 1;
            while pos < len && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            if pos < len && (bytes[pos] == b'"' || bytes[pos] == b'\'') {
                let quote = bytes[pos];
                let value_start = pos + 1;
                let value_end = html[value_start..]
                    .bytes()
                    .position(|b| b == quote)
                    .map_or(len, |p| value_start + p);
                value = decode_entities(&html[value_start..value_end]);
                pos = (value_end + 1).min(len);
            } else {
                let value_start = pos;
                while pos < len && !bytes[pos].is_ascii_whitespace() && bytes[pos] != b'>' {
                    pos += 1;
                }
                value = decode_entities(&html[value_start..pos]);
            }
        }

        if !attr_name.is_empty() {
            attrs.push((attr_name, value));
        } else if pos == attr_start {
            // Unparseable byte; step over it so the scan always advances
            pos += 1;
        }
    }

    StartTag {
        name,
        attrs,
        self_closing,
        end: pos,
    }
}

/// Skip raw text content up to (and including) the matching end tag
fn skip_raw_text(html: &str, pos: usize, end_tag: &str) -> usize {
    let lower = html[pos..].to_ascii_lowercase();
    match lower.find(end_tag) {
        Some(offset) => {
            let close = pos + offset;
            html[close..].find('>').map_or(html.len(), |p| close + p + 1)
        }
        None => html.len(),
    }
}

fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    raw.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
