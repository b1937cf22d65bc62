use std::fmt;

/// Single identifier octet of a DER object.
///
/// High tag numbers (multi-octet identifiers) never show up in the X.509 structures this crate
/// walks and are not supported.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tag(u8);

impl Tag {
    pub const INTEGER: Self = Tag(0x02);
    pub const BIT_STRING: Self = Tag(0x03);
    pub const OCTET_STRING: Self = Tag(0x04);
    pub const OID: Self = Tag(0x06);
    pub const UTF8_STRING: Self = Tag(0x0C);
    pub const NUMERIC_STRING: Self = Tag(0x12);
    pub const PRINTABLE_STRING: Self = Tag(0x13);
    pub const TELETEX_STRING: Self = Tag(0x14);
    pub const IA5_STRING: Self = Tag(0x16);
    pub const UTC_TIME: Self = Tag(0x17);
    pub const GENERALIZED_TIME: Self = Tag(0x18);
    pub const UNIVERSAL_STRING: Self = Tag(0x1C);
    pub const BMP_STRING: Self = Tag(0x1E);
    pub const SEQUENCE: Self = Tag(0x30);
    pub const SET: Self = Tag(0x31);
    pub const CTX_0: Self = Tag::context_specific_constructed(0);

    #[inline]
    pub const fn context_specific_constructed(number: u8) -> Self {
        Tag(0xA0 | number)
    }

    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Character string types that can carry an attribute value of a `Name`
    #[inline]
    pub fn is_string(self) -> bool {
        matches!(
            self,
            Tag::UTF8_STRING
                | Tag::NUMERIC_STRING
                | Tag::PRINTABLE_STRING
                | Tag::TELETEX_STRING
                | Tag::IA5_STRING
                | Tag::UNIVERSAL_STRING
                | Tag::BMP_STRING
        )
    }
}

impl From<u8> for Tag {
    fn from(tag: u8) -> Self {
        Self(tag)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tag::INTEGER => write!(f, "INTEGER"),
            Tag::BIT_STRING => write!(f, "BIT STRING"),
            Tag::OCTET_STRING => write!(f, "OCTET STRING"),
            Tag::OID => write!(f, "OBJECT IDENTIFIER"),
            Tag::UTF8_STRING => write!(f, "UTF8String"),
            Tag::NUMERIC_STRING => write!(f, "NumericString"),
            Tag::PRINTABLE_STRING => write!(f, "PrintableString"),
            Tag::TELETEX_STRING => write!(f, "TeletexString"),
            Tag::IA5_STRING => write!(f, "IA5String"),
            Tag::UTC_TIME => write!(f, "UTCTime"),
            Tag::GENERALIZED_TIME => write!(f, "GeneralizedTime"),
            Tag::UNIVERSAL_STRING => write!(f, "UniversalString"),
            Tag::BMP_STRING => write!(f, "BMPString"),
            Tag::SEQUENCE => write!(f, "SEQUENCE"),
            Tag::SET => write!(f, "SET"),
            Tag::CTX_0 => write!(f, "ContextTag0"),
            unknown => write!(f, "UNKNOWN(0x{:02X})", unknown.0),
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({}[{}])", self, self.0)
    }
}
