use crate::{length::Length, tag::Tag, Asn1DerError, Result};

/// Identifier and length of a DER object plus the absolute offset of its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvHeader {
    pub tag: Tag,
    pub length: usize,
    pub value_start: usize,
}

impl TlvHeader {
    /// Absolute offset one past the last value octet
    #[inline]
    pub fn value_end(&self) -> usize {
        self.value_start + self.length
    }
}

/// A reader over a fully buffered DER input.
///
/// Offsets are always absolute (relative to the start of the buffer the cursor was created
/// with), including for cursors obtained with [`DerCursor::bounded`]. A cursor never reads past
/// its limit, and any failed operation leaves the offset untouched.
///
/// ```
/// use certpeek_der::{DerCursor, Tag};
///
/// let der = [0x30, 0x03, 0x02, 0x01, 0x07];
/// let mut cursor = DerCursor::new(&der);
/// let sequence = cursor.expect_tlv(Tag::SEQUENCE).unwrap();
/// assert_eq!(sequence.value_end(), 5);
/// assert_eq!(cursor.read_value(Tag::INTEGER).unwrap(), &[0x07]);
/// assert!(cursor.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct DerCursor<'a> {
    buf: &'a [u8],
    offset: usize,
    limit: usize,
}

impl<'a> DerCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            offset: 0,
            limit: buf.len(),
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.limit - self.offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offset >= self.limit
    }

    /// Looks at the next octet without consuming it
    pub fn peek_byte(&self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            self.buf.get(self.offset).copied()
        }
    }

    pub fn peek_tag(&self) -> Option<Tag> {
        self.peek_byte().map(Tag::from)
    }

    /// Reads the identifier and length octets of the next object.
    ///
    /// On success the cursor is positioned on the first value octet. The whole value is
    /// guaranteed to lie within the cursor limit.
    pub fn read_tlv(&mut self) -> Result<TlvHeader> {
        let start = self.offset;
        let window = self.buf.get(start..self.limit).ok_or(Asn1DerError::UnexpectedEof)?;
        let (tag, rest) = window.split_first().ok_or(Asn1DerError::UnexpectedEof)?;
        let tag = Tag::from(*tag);

        let (length, length_octets) = Length::deserialized(rest)?;
        let value_start = start + 1 + length_octets;
        let value_end = value_start.checked_add(length).ok_or(Asn1DerError::UnexpectedEof)?;
        if value_end > self.limit {
            debug_log!(
                "read_tlv: TRUNCATED DATA ({} of {} bytes at offset {})",
                self.limit.saturating_sub(value_start),
                length,
                value_start
            );
            return Err(Asn1DerError::UnexpectedEof);
        }

        debug_log!("read_tlv: {} ({} bytes) at offset {}", tag, length, start);
        self.offset = value_start;

        Ok(TlvHeader {
            tag,
            length,
            value_start,
        })
    }

    /// Reads the next header and checks its tag
    pub fn expect_tlv(&mut self, expected: Tag) -> Result<TlvHeader> {
        let start = self.offset;
        let header = self.read_tlv()?;

        if header.tag != expected {
            debug_log!("expect_tlv: INVALID (found {}, expected {})", header.tag, expected);
            self.offset = start;
            return Err(Asn1DerError::UnexpectedTag {
                expected,
                actual: header.tag,
                offset: start,
            });
        }

        Ok(header)
    }

    /// Reads a whole primitive object of the given tag and returns its value octets
    pub fn read_value(&mut self, expected: Tag) -> Result<&'a [u8]> {
        let start = self.offset;
        let header = self.expect_tlv(expected)?;
        self.read_raw(header.length).map_err(|e| {
            self.offset = start;
            e
        })
    }

    /// Enters a constructed object of the given tag.
    ///
    /// Returns a cursor bounded to the object value; `self` is moved past the whole object.
    pub fn read_constructed(&mut self, expected: Tag) -> Result<DerCursor<'a>> {
        let start = self.offset;
        let header = self.expect_tlv(expected)?;
        let inner = self.bounded(header.value_end())?;
        self.seek(header.value_end()).map_err(|e| {
            self.offset = start;
            e
        })?;
        Ok(inner)
    }

    /// Returns the next `len` octets and advances past them
    pub fn read_raw(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.offset.checked_add(len).ok_or(Asn1DerError::UnexpectedEof)?;
        if end > self.limit {
            debug_log!("read_raw: TRUNCATED DATA ({} bytes requested at offset {})", len, self.offset);
            return Err(Asn1DerError::UnexpectedEof);
        }

        let bytes = self.buf.get(self.offset..end).ok_or(Asn1DerError::UnexpectedEof)?;
        self.offset = end;
        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.read_raw(len).map(|_| ())
    }

    /// Moves forward to an absolute offset previously obtained from a header
    pub fn seek(&mut self, offset: usize) -> Result<()> {
        if offset < self.offset || offset > self.limit {
            return Err(Asn1DerError::OutOfRange { offset });
        }
        self.offset = offset;
        Ok(())
    }

    /// Creates a cursor over the same buffer starting at the current offset and ending at `end`
    pub fn bounded(&self, end: usize) -> Result<DerCursor<'a>> {
        if end < self.offset || end > self.limit {
            return Err(Asn1DerError::OutOfRange { offset: end });
        }
        Ok(DerCursor {
            buf: self.buf,
            offset: self.offset,
            limit: end,
        })
    }
}
