mod doc_host;
mod doc_version;
mod rewriter;
mod version_error;

use once_cell::sync::Lazy;
use regex::Regex;

pub use doc_host::*;
pub use doc_version::*;
pub use rewriter::*;
pub use version_error::*;

/// The release placeholder is the literal path segment `release`, which
/// documentation URLs use to mean "current/latest". Any other segment value
/// is an already pinned version.
pub fn is_release_segment<T: AsRef<str>>(value: T) -> bool {
    value.as_ref() == "release"
}

static TWO_COMPONENT_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").unwrap());

/// Pad a "major.minor" version string with a zero patch component, so that
/// "3.15" becomes "3.15.0". Values in any other form are returned unchanged.
pub fn pad_version_string<T: AsRef<str>>(value: T) -> String {
    let value = value.as_ref();

    if TWO_COMPONENT_VERSION.is_match(value) {
        format!("{value}.0")
    } else {
        value.to_owned()
    }
}
