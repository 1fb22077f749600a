//! Big-endian record decoding for table files
//!
//! Every field is a `u32` in network byte order. `0xFFFFFFFF` marks an
//! absent scalar. Three record layouts exist:
//!
//! - **pair**: `key1 key2 value1 value2`
//! - **sequence**: `key1 key2 len v1 … vlen`
//! - **ivs-svs**: `ivs_base ivs_selector svs_base svs_selector base90 base2004`
//!
//! A table is a concatenation of records with no header. A file that ends
//! inside a record, or holds a value that is not a Unicode scalar, is
//! rejected as a whole.

use super::{IvsSvsRecord, IvsSvsTable, MappingTable};
use crate::chars::{atoms_from_chars, CodePointTuple};
use crate::error::{Result, TransliterationError};

/// Marker for an absent scalar
pub const ABSENT: u32 = 0xFFFF_FFFF;

/// Cursor over the words of one table
struct Reader<'a> {
    table: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(table: &'a str, bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(malformed(
                table,
                format!("length {} is not a multiple of 4", bytes.len()),
            ));
        }
        Ok(Self {
            table,
            bytes,
            pos: 0,
        })
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn word(&mut self) -> Result<u32> {
        let end = self.pos + 4;
        let Some(chunk) = self.bytes.get(self.pos..end) else {
            return Err(malformed(
                self.table,
                format!("truncated record at byte {}", self.pos),
            ));
        };
        self.pos = end;
        Ok(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
    }

    fn scalar(&mut self) -> Result<Option<char>> {
        let at = self.pos;
        match self.word()? {
            ABSENT => Ok(None),
            value => char::from_u32(value).map(Some).ok_or_else(|| {
                malformed(
                    self.table,
                    format!("invalid scalar value {:#x} at byte {}", value, at),
                )
            }),
        }
    }

    fn required_scalar(&mut self) -> Result<char> {
        let at = self.pos;
        self.scalar()?
            .ok_or_else(|| malformed(self.table, format!("missing scalar at byte {}", at)))
    }

    /// A `first second` pair; absent when `first` is
    fn tuple(&mut self) -> Result<Option<CodePointTuple>> {
        let first = self.scalar()?;
        let second = self.scalar()?;
        Ok(first.map(|first| CodePointTuple::new(first, second)))
    }
}

fn malformed(table: &str, reason: String) -> TransliterationError {
    TransliterationError::MalformedTable {
        table: table.to_string(),
        reason,
    }
}

/// Decode a table of `key1 key2 value1 value2` records
///
/// An absent `value1` maps the key to nothing, which removes the character.
pub fn read_pair_table(name: &str, bytes: &[u8]) -> Result<MappingTable> {
    let mut reader = Reader::new(name, bytes)?;
    let mut table = MappingTable::new(name);
    while !reader.at_end() {
        let key = reader.required_scalar()?;
        let key = CodePointTuple::new(key, reader.scalar()?);
        let value = reader.tuple()?;
        table.insert(key, value.into_iter().collect());
    }
    tracing::debug!("decoded pair table {}: {} records", name, table.len());
    Ok(table)
}

/// Decode a table of `key1 key2 len v1 … vlen` records
///
/// The values are regrouped into atoms, so a selector following its base
/// stays attached to it. A zero length removes the character.
pub fn read_sequence_table(name: &str, bytes: &[u8]) -> Result<MappingTable> {
    let mut reader = Reader::new(name, bytes)?;
    let mut table = MappingTable::new(name);
    while !reader.at_end() {
        let key = reader.required_scalar()?;
        let key = CodePointTuple::new(key, reader.scalar()?);
        let len = reader.word()?;
        let mut values = Vec::new();
        for _ in 0..len {
            values.push(reader.required_scalar()?);
        }
        table.insert(key, atoms_from_chars(values));
    }
    tracing::debug!("decoded sequence table {}: {} records", name, table.len());
    Ok(table)
}

/// Decode a table of IVS/SVS/base records
pub fn read_ivs_svs_table(name: &str, bytes: &[u8]) -> Result<IvsSvsTable> {
    let mut reader = Reader::new(name, bytes)?;
    let mut records = Vec::new();
    while !reader.at_end() {
        let base = reader.required_scalar()?;
        let selector = reader.required_scalar()?;
        records.push(IvsSvsRecord {
            ivs: CodePointTuple::pair(base, selector),
            svs: reader.tuple()?,
            base90: reader.scalar()?,
            base2004: reader.scalar()?,
        });
    }
    tracing::debug!("decoded ivs-svs table {}: {} records", name, records.len());
    Ok(IvsSvsTable::new(records))
}

/// Encode words as big-endian bytes
#[cfg(test)]
pub(crate) fn encode(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(c: char) -> CodePointTuple {
        CodePointTuple::single(c)
    }

    #[test]
    fn test_pair_table() {
        #[rustfmt::skip]
        let bytes = encode(&[
            '舊' as u32, ABSENT, '旧' as u32, ABSENT,
            '葛' as u32, 0xE0100, '葛' as u32, ABSENT,
            '\u{FEFF}' as u32, ABSENT, ABSENT, ABSENT,
        ]);
        let table = read_pair_table("kanji-old-new", &bytes).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&single('舊')), Some(&[single('旧')][..]));
        assert_eq!(
            table.get(&CodePointTuple::pair('葛', '\u{E0100}')),
            Some(&[single('葛')][..])
        );
        assert_eq!(table.get(&single('\u{FEFF}')), Some(&[][..]));
    }

    #[test]
    fn test_sequence_table() {
        #[rustfmt::skip]
        let bytes = encode(&[
            '㍻' as u32, ABSENT, 2, '平' as u32, '成' as u32,
            '㌔' as u32, ABSENT, 3, 'キ' as u32, 'ロ' as u32, 0xFE00,
        ]);
        let table = read_sequence_table("combined", &bytes).unwrap();
        assert_eq!(table.get(&single('㍻')), Some(&[single('平'), single('成')][..]));
        assert_eq!(
            table.get(&single('㌔')),
            Some(&[single('キ'), CodePointTuple::pair('ロ', '\u{FE00}')][..])
        );
    }

    #[test]
    fn test_ivs_svs_table() {
        #[rustfmt::skip]
        let bytes = encode(&[
            '葛' as u32, 0xE0100, ABSENT, ABSENT, '葛' as u32, ABSENT,
            '辻' as u32, 0xE0101, '辻' as u32, 0xFE00, ABSENT, '辻' as u32,
        ]);
        let table = read_ivs_svs_table("ivs-svs-base", &bytes).unwrap();
        assert_eq!(table.len(), 2);
        let record = &table.records()[1];
        assert_eq!(record.ivs, CodePointTuple::pair('辻', '\u{E0101}'));
        assert_eq!(record.svs, Some(CodePointTuple::pair('辻', '\u{FE00}')));
        assert_eq!(record.base90, None);
        assert_eq!(record.base2004, Some('辻'));
    }

    #[test]
    fn test_truncated_record() {
        let bytes = encode(&['舊' as u32, ABSENT, '旧' as u32]);
        let err = read_pair_table("kanji-old-new", &bytes).unwrap_err();
        assert!(matches!(err, TransliterationError::MalformedTable { .. }));
        assert!(err.to_string().contains("truncated"));

        let bytes = encode(&['㍻' as u32, ABSENT, 2, '平' as u32]);
        let err = read_sequence_table("combined", &bytes).unwrap_err();
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn test_partial_word() {
        let err = read_pair_table("kanji-old-new", &[0, 0, 0]).unwrap_err();
        assert!(err.to_string().contains("multiple of 4"));
    }

    #[test]
    fn test_invalid_scalar() {
        let bytes = encode(&[0xD800, ABSENT, 'a' as u32, ABSENT]);
        let err = read_pair_table("kanji-old-new", &bytes).unwrap_err();
        assert!(err.to_string().contains("0xd800"));
    }

    #[test]
    fn test_absent_key_is_rejected() {
        let bytes = encode(&[ABSENT, ABSENT, 'a' as u32, ABSENT]);
        assert!(read_pair_table("kanji-old-new", &bytes).is_err());
    }

    #[test]
    fn test_empty_input() {
        let table = read_pair_table("kanji-old-new", &[]).unwrap();
        assert!(table.is_empty());
    }
}
