use std::ops::Range;

/// Byte ranges of the comments leading a node whose trivia starts at `pos`.
///
/// Scans forward over whitespace and comments until the first token. A comment
/// on the same line as the preceding token (that is, before the first line
/// break) trails that token and is not collected. At the start of the file
/// there is no preceding token, so everything is collected, after skipping a
/// `#!` line.
pub fn leading_comment_ranges(text: &str, pos: usize) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut pos = pos.min(bytes.len());
    let mut collecting = pos == 0;

    if pos == 0 && text.starts_with("#!") {
        pos = line_end(bytes, 0);
    }

    while pos < bytes.len() {
        match bytes[pos] {
            b'\r' | b'\n' => {
                pos += 1;
                collecting = true;
            }
            b' ' | b'\t' | 0x0b | 0x0c => pos += 1,
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                let start = pos;
                pos = line_end(bytes, pos + 2);
                if collecting {
                    ranges.push(start..pos);
                }
            }
            b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                let start = pos;
                pos = block_comment_end(bytes, pos + 2);
                if collecting {
                    ranges.push(start..pos);
                }
            }
            b if b >= 0x80 => {
                // Non-ASCII whitespace (NBSP, BOM, line separators) is trivia too.
                match text[pos..].chars().next() {
                    Some(c) if c.is_whitespace() || c == '\u{feff}' => {
                        if matches!(c, '\u{2028}' | '\u{2029}') {
                            collecting = true;
                        }
                        pos += c.len_utf8();
                    }
                    _ => break,
                }
            }
            _ => break,
        }
    }

    ranges
}

/// The leading comment nearest to the node, if any.
pub fn nearest_leading_comment(text: &str, pos: usize) -> Option<&str> {
    leading_comment_ranges(text, pos)
        .pop()
        .map(|range| &text[range])
}

fn line_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| b == b'\n' || b == b'\r')
        .map_or(bytes.len(), |offset| from + offset)
}

/// Position just past the closing `*/`, or the end of text if unterminated.
fn block_comment_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .windows(2)
        .position(|w| w == b"*/")
        .map_or(bytes.len(), |offset| from + offset + 2)
}
