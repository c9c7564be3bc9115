//! The `information` record and its normalization rules.
//!
//! Every text field is stored lower-cased and trimmed. `name`, `city` and
//! `state` admit ASCII letters and whitespace only. `address` admits letters,
//! digits, whitespace and any non-word character, which leaves `_` as the only
//! rejected character.

use std::fmt;

/// A record field, used to report which input failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    City,
    Address,
    State,
}

impl Field {
    /// Column name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::City => "city",
            Self::Address => "address",
            Self::State => "state",
        }
    }

    fn accepts(self, value: &str) -> bool {
        match self {
            Self::Address => value.chars().all(is_address_char),
            _ => value.chars().all(is_plain_text_char),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the `information` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub city: String,
    pub address: String,
    pub state: String,
}

impl Record {
    /// Normalize raw field values and check them against the field rules.
    ///
    /// All four fields are checked for emptiness before any character check,
    /// so a missing field is always reported ahead of a malformed one.
    pub fn parse(name: &str, city: &str, address: &str, state: &str) -> crate::Result<Self> {
        let record = Self {
            name: normalize_text(name),
            city: normalize_text(city),
            address: normalize_text(address),
            state: normalize_text(state),
        };

        for (field, value) in record.fields() {
            if value.is_empty() {
                return Err(crate::Error::MissingField(field));
            }
        }

        for (field, value) in record.fields() {
            if !field.accepts(value) {
                return Err(crate::Error::InvalidCharacters(field));
            }
        }

        Ok(record)
    }

    /// Field/value pairs in column order.
    pub fn fields(&self) -> [(Field, &str); 4] {
        [
            (Field::Name, self.name.as_str()),
            (Field::City, self.city.as_str()),
            (Field::Address, self.address.as_str()),
            (Field::State, self.state.as_str()),
        ]
    }
}

/// Lower-case and trim a stored text value.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Lower-case a lookup name. Lookup names are not trimmed; the store compares
/// `LOWER(name)` against them verbatim.
pub fn normalize_lookup_name(raw: &str) -> String {
    raw.to_lowercase()
}

fn is_plain_text_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// Letters, digits, whitespace, or any non-word character.
fn is_address_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || !is_word_char(c)
}
