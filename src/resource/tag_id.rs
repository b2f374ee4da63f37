//! Composite label identifier
//!
//! A label is externally identified by `root_scope_name:ip`. The two
//! components must be recoverable from the joined string on every read and
//! delete, so neither may contain the delimiter. Construction enforces that;
//! parsing rejects anything that could not have been composed here.

use crate::error::{Error, Result};
use std::fmt;

/// Delimiter joining the two identifier components.
pub const TAG_ID_DELIMITER: char = ':';

/// Composite identifier for a label binding: root scope name + ip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagId {
    root_scope_name: String,
    ip: String,
}

impl TagId {
    /// Compose an identifier from its two components. Fails if either
    /// component contains the delimiter, since the result would not
    /// decompose back to the same pair.
    pub fn new(root_scope_name: &str, ip: &str) -> Result<Self> {
        if root_scope_name.contains(TAG_ID_DELIMITER) {
            return Err(Error::DelimiterInComponent {
                field: "root_scope_name",
                delimiter: TAG_ID_DELIMITER,
            });
        }
        if ip.contains(TAG_ID_DELIMITER) {
            return Err(Error::DelimiterInComponent {
                field: "ip",
                delimiter: TAG_ID_DELIMITER,
            });
        }
        Ok(Self {
            root_scope_name: root_scope_name.to_string(),
            ip: ip.to_string(),
        })
    }

    /// Decompose a stored identifier. Fails with an invalid-format error
    /// when the delimiter is absent, or when the ip part still contains one
    /// (an id this crate could never have composed).
    pub fn parse(id: &str) -> Result<Self> {
        let Some((root_scope_name, ip)) = id.split_once(TAG_ID_DELIMITER) else {
            return Err(Error::InvalidTagId(id.to_string()));
        };
        if ip.contains(TAG_ID_DELIMITER) {
            return Err(Error::InvalidTagId(id.to_string()));
        }
        Ok(Self {
            root_scope_name: root_scope_name.to_string(),
            ip: ip.to_string(),
        })
    }

    pub fn root_scope_name(&self) -> &str {
        &self.root_scope_name
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.root_scope_name, TAG_ID_DELIMITER, self.ip)
    }
}
