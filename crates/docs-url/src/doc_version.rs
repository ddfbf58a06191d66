#![allow(clippy::from_over_into)]

use crate::pad_version_string;
use crate::version_error::VersionError;
use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::ops::Deref;
use std::str::FromStr;

static VERSION_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+(\.[0-9]+)?$").unwrap());

/// Represents a version identifier supplied by a documentation publish
/// pipeline, such as "3.15" or "3.16.0". A missing patch component is
/// padded with zero, while the raw form is preserved so that verbatim
/// splicing never reformats what the caller supplied.
#[derive(Clone, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct DocVersion {
    version: Version,
    raw: String,
}

impl DocVersion {
    /// Parse the provided string into a publish version based on the
    /// following rules, in order:
    ///
    /// - If the value is empty, error with `Empty`.
    /// - If not a 2 or 3 component dot-separated number, error
    ///   with `UnknownFormat`.
    /// - Else pad a missing patch component and parse with [`Version`].
    pub fn parse<T: AsRef<str>>(value: T) -> Result<Self, VersionError> {
        Self::from_str(value.as_ref())
    }

    /// Return the version exactly as supplied by the caller.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Return the three-component `v` prefixed path segment used by the
    /// guides host, for example "3.15" becomes "v3.15.0".
    pub fn guides_segment(&self) -> String {
        format!("v{}", self.version)
    }
}

impl Deref for DocVersion {
    type Target = Version;

    fn deref(&self) -> &Self::Target {
        &self.version
    }
}

impl FromStr for DocVersion {
    type Err = VersionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(VersionError::Empty);
        }

        if !VERSION_FORMAT.is_match(value) {
            return Err(VersionError::UnknownFormat(value.to_owned()));
        }

        let version = Version::parse(&pad_version_string(value))?;

        Ok(Self {
            version,
            raw: value.to_owned(),
        })
    }
}

impl TryFrom<String> for DocVersion {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl Into<String> for DocVersion {
    fn into(self) -> String {
        self.raw
    }
}

impl Debug for DocVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Debug version as a string instead of a struct
        write!(f, "{}", self)
    }
}

impl Display for DocVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl PartialEq<&str> for DocVersion {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

impl AsRef<DocVersion> for DocVersion {
    fn as_ref(&self) -> &DocVersion {
        self
    }
}
