use crate::oids;
use certpeek_der::{decode_oid, DerCursor, Tag};
use std::fmt;

/// Attributes of an X.501 `Name`, keyed by short name (`CN`, `O`, ...) or dotted OID.
///
/// Keys are unique and kept in order of first appearance. When a key shows up again (several
/// `OU` for instance) the last value wins but the key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DistinguishedName {
    attributes: Vec<(String, String)>,
}

impl DistinguishedName {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the value it replaces
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        let key = key.into();
        let value = value.into();

        match self.attributes.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, existing_value)) => Some(std::mem::replace(existing_value, value)),
            None => {
                self.attributes.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn common_name(&self) -> Option<&str> {
        self.get("CN")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DistinguishedName {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut name = DistinguishedName::new();
        for (key, value) in iter {
            name.insert(key, value);
        }
        name
    }
}

impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.iter() {
            if first {
                first = false;
            } else {
                write!(f, ",")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DistinguishedName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Reads a `Name` (`SEQUENCE OF RelativeDistinguishedName`).
///
/// Only the outer header is mandatory. The first malformed RDN stops attribute collection: what
/// was gathered so far is returned and the cursor is still moved past the whole `Name`.
pub(crate) fn parse_name(cursor: &mut DerCursor<'_>) -> certpeek_der::Result<DistinguishedName> {
    let header = cursor.expect_tlv(Tag::SEQUENCE)?;
    let name_end = header.value_end();
    let mut rdns = cursor.bounded(name_end)?;

    let mut name = DistinguishedName::new();
    while !rdns.is_empty() {
        let rdn_start = rdns.position();
        match parse_relative_distinguished_name(&mut rdns) {
            Ok(attributes) => {
                for (key, value) in attributes {
                    name.insert(key, value);
                }
            }
            Err(e) => {
                log::debug!(
                    "dropping name attributes from offset {} to {}: {}",
                    rdn_start,
                    name_end,
                    e
                );
                break;
            }
        }
    }

    cursor.seek(name_end)?;

    Ok(name)
}

fn parse_relative_distinguished_name(rdns: &mut DerCursor<'_>) -> certpeek_der::Result<Vec<(String, String)>> {
    let mut set = rdns.read_constructed(Tag::SET)?;

    let mut attributes = Vec::new();
    while !set.is_empty() {
        let mut type_and_value = set.read_constructed(Tag::SEQUENCE)?;

        let oid = decode_oid(type_and_value.read_value(Tag::OID)?)?;
        let key = oids::label_or_dotted(oid, oids::attribute_short_name);

        let value_header = type_and_value.read_tlv()?;
        if !value_header.tag.is_string() {
            log::trace!("{} attribute value is a {}, reading it as text anyway", key, value_header.tag);
        }
        let value = type_and_value.read_raw(value_header.length)?;

        attributes.push((key, String::from_utf8_lossy(value).into_owned()));
    }

    Ok(attributes)
}
