use std::fmt;

/// Represents a documentation site family that publishes versioned content.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DocHost {
    /// The API reference site, versioned per product.
    ApiReference,
    /// The prose guides site.
    Guides,
}

impl DocHost {
    /// Classify an absolute URL by its host prefix. Returns [`None`] for
    /// every host we do not publish.
    pub fn detect<T: AsRef<str>>(url: T) -> Option<Self> {
        let url = url.as_ref();

        if url.starts_with("https://api.emberjs.com/") {
            Some(Self::ApiReference)
        } else if url.starts_with("https://guides.emberjs.com/") {
            Some(Self::Guides)
        } else {
            None
        }
    }

    /// Return the canonical host name.
    pub fn host(&self) -> &'static str {
        match self {
            Self::ApiReference => "api.emberjs.com",
            Self::Guides => "guides.emberjs.com",
        }
    }
}

impl fmt::Display for DocHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.host())
    }
}
