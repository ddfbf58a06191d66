use crate::doc_host::DocHost;
use crate::doc_version::DocVersion;
use crate::is_release_segment;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static API_REFERENCE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<base>https://api\.emberjs\.com/[^/]+/)(?<segment>[^/]+)(?<rest>/.*)?$")
        .unwrap()
});

static GUIDES_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<base>https://guides\.emberjs\.com/)(?<segment>[^/]+)(?<rest>/.*)?$").unwrap()
});

/// Replace a generic `release` path segment with a pinned version segment.
///
/// API reference URLs (`api.emberjs.com/<product>/release[/...]`) pin to the
/// target version verbatim, while guides URLs (`guides.emberjs.com/release/...`)
/// pin to the `v` prefixed three-component form of the primary version.
/// URLs that already carry a pinned version, or that do not match a known
/// host, are returned unchanged. This never fails, as a no-op is the
/// failure-safe default for unrecognized input.
pub fn rewrite_release_url(url: &str, primary_version: &str, target_version: &str) -> String {
    let Some(host) = DocHost::detect(url) else {
        return url.to_owned();
    };

    let pattern = match host {
        DocHost::ApiReference => &API_REFERENCE_URL,
        DocHost::Guides => &GUIDES_URL,
    };

    let Some(caps) = pattern.captures(url) else {
        return url.to_owned();
    };

    if !is_release_segment(&caps["segment"]) {
        return url.to_owned();
    }

    let version = match host {
        DocHost::ApiReference => target_version.to_owned(),
        DocHost::Guides => DocVersion::parse(primary_version)
            .map(|version| version.guides_segment())
            // Malformed primary versions still splice as-is
            .unwrap_or_else(|_| format!("v{primary_version}")),
    };

    trace!(url, version, "Pinning release placeholder to a published version");

    format!(
        "{}{}{}",
        &caps["base"],
        version,
        caps.name("rest").map(|cap| cap.as_str()).unwrap_or_default(),
    )
}

/// Rewrites documentation URLs for a single publish run.
pub struct UrlRewriter {
    /// The version currently being published. Guides URLs pin to this.
    pub primary: DocVersion,
    /// The version cross-references should point to, which may differ
    /// from the primary. API reference URLs pin to this.
    pub target: DocVersion,
}

impl UrlRewriter {
    pub fn new(primary: DocVersion, target: DocVersion) -> Self {
        Self { primary, target }
    }

    /// Pin the release placeholder in the provided URL, if it has one.
    pub fn rewrite(&self, url: &str) -> String {
        rewrite_release_url(url, self.primary.as_str(), self.target.as_str())
    }
}
