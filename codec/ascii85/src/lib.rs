//! ASCII base-85 encoding.
//!
//! Every group of four input bytes is written as five characters in the range
//! `!`..=`u`. A full group of zero bytes is abbreviated as `z`. A trailing
//! group of `n < 4` bytes is padded with zeros and only the first `n + 1`
//! characters are emitted. Encoded data ends with the end-of-data marker `~>`.

use std::fmt::Display;

const OFFSET: u8 = b'!';
const LAST: u8 = b'u';
const ZERO_GROUP: u8 = b'z';
const END_MARKER: &[u8] = b"~>";
const START_MARKER: &[u8] = b"<~";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Byte outside of the encoding alphabet.
    InvalidCharacter { byte: u8, position: usize },
    /// `z` is only allowed at the start of a group.
    MisplacedZero { position: usize },
    /// Five characters that don't fit into four bytes.
    Overflow { position: usize },
    /// A final group that consists of a single character.
    TruncatedGroup,
    /// `~` that is not followed by `>`.
    InvalidEndMarker { position: usize },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::InvalidCharacter { byte, position } => {
                write!(f, "invalid character 0x{:02x} at position {}", byte, position)
            }
            DecodeError::MisplacedZero { position } => write!(f, "`z` inside a group at position {}", position),
            DecodeError::Overflow { position } => write!(f, "group ending at position {} overflows", position),
            DecodeError::TruncatedGroup => write!(f, "final group has only one character"),
            DecodeError::InvalidEndMarker { position } => write!(f, "broken end marker at position {}", position),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Number of bytes `encode` produces for `len` input bytes, assuming no zero
/// groups get abbreviated.
pub fn max_encoded_len(len: usize) -> usize {
    let full = len / 4;
    let rest = len % 4;
    full * 5 + if rest == 0 { 0 } else { rest + 1 } + END_MARKER.len()
}

fn encode_group(group: [u8; 4]) -> [u8; 5] {
    let mut value = u32::from_be_bytes(group);
    let mut out = [0u8; 5];
    for digit in out.iter_mut().rev() {
        *digit = (value % 85) as u8 + OFFSET;
        value /= 85;
    }
    out
}

pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(max_encoded_len(data.len()));

    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        let group = [chunk[0], chunk[1], chunk[2], chunk[3]];
        if group == [0; 4] {
            out.push(ZERO_GROUP);
        } else {
            out.extend_from_slice(&encode_group(group));
        }
    }

    let rest = chunks.remainder();
    if !rest.is_empty() {
        let mut group = [0u8; 4];
        group[..rest.len()].copy_from_slice(rest);
        out.extend_from_slice(&encode_group(group)[..rest.len() + 1]);
    }

    out.extend_from_slice(END_MARKER);
    out
}

pub fn decode(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let input = data.strip_prefix(START_MARKER).unwrap_or(data);
    let skipped = data.len() - input.len();

    let mut out = Vec::with_capacity(input.len() / 5 * 4 + 4);
    let mut value: u64 = 0;
    let mut count = 0usize;

    for (index, &byte) in input.iter().enumerate() {
        let position = index + skipped;
        match byte {
            b if b.is_ascii_whitespace() => {}
            b'~' => {
                if input.get(index + 1) != Some(&b'>') {
                    return Err(DecodeError::InvalidEndMarker { position });
                }
                break;
            }
            ZERO_GROUP if count == 0 => out.extend_from_slice(&[0; 4]),
            ZERO_GROUP => return Err(DecodeError::MisplacedZero { position }),
            OFFSET..=LAST => {
                value = value * 85 + u64::from(byte - OFFSET);
                count += 1;
                if count == 5 {
                    let group = u32::try_from(value).map_err(|_| DecodeError::Overflow { position })?;
                    out.extend_from_slice(&group.to_be_bytes());
                    value = 0;
                    count = 0;
                }
            }
            _ => return Err(DecodeError::InvalidCharacter { byte, position }),
        }
    }

    match count {
        0 => {}
        1 => return Err(DecodeError::TruncatedGroup),
        _ => {
            // pad with the highest digit so the truncated bytes round up
            for _ in count..5 {
                value = value * 85 + u64::from(LAST - OFFSET);
            }
            let group = u32::try_from(value).map_err(|_| DecodeError::Overflow { position: data.len() })?;
            out.extend_from_slice(&group.to_be_bytes()[..count - 1]);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_empty() {
        assert_eq!(encode(b""), b"~>".to_vec());
        assert_eq!(decode(b"~>"), Ok(vec![]));
    }

    #[test]
    fn encode_known_text() {
        // Reference output of the Adobe encoder for "Man ".
        assert_eq!(encode(b"Man "), b"9jqo^~>".to_vec());
        assert_eq!(encode(b"Man"), b"9jqo~>".to_vec());
    }

    #[test]
    fn zero_group_is_abbreviated() {
        let encoded = encode(&[0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encoded, b"zz~>".to_vec());
        assert_eq!(decode(&encoded), Ok(vec![0; 8]));
    }

    #[test]
    fn partial_zero_group_is_not_abbreviated() {
        let encoded = encode(&[0, 0]);
        assert_eq!(encoded, b"!!!~>".to_vec());
        assert_eq!(decode(&encoded), Ok(vec![0, 0]));
    }

    #[test]
    fn decode_reverts_encode() {
        let input: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).collect();
        for len in [0, 1, 2, 3, 4, 5, 127, input.len()] {
            assert_eq!(decode(&encode(&input[..len])), Ok(input[..len].to_vec()), "length {}", len);
        }
    }

    #[test]
    fn decode_skips_whitespace_and_prefix() {
        assert_eq!(decode(b"<~9jq\n o^ ~>"), Ok(b"Man ".to_vec()));
    }

    #[test]
    fn decode_without_end_marker() {
        assert_eq!(decode(b"9jqo^"), Ok(b"Man ".to_vec()));
    }

    #[test]
    fn decode_errors() {
        assert_eq!(
            decode(b"9jqo^v"),
            Err(DecodeError::InvalidCharacter { byte: b'v', position: 5 })
        );
        assert_eq!(decode(b"9jzqo"), Err(DecodeError::MisplacedZero { position: 2 }));
        assert_eq!(decode(b"uuuuu"), Err(DecodeError::Overflow { position: 4 }));
        assert_eq!(decode(b"9jqo^9~>"), Err(DecodeError::TruncatedGroup));
        assert_eq!(decode(b"9jqo^~"), Err(DecodeError::InvalidEndMarker { position: 5 }));
    }

    #[test]
    fn max_len_matches_output() {
        let input = b"abcdefghij";
        for len in 0..input.len() {
            assert_eq!(encode(&input[..len]).len(), max_encoded_len(len));
        }
    }
}
