#[derive(thiserror::Error, Debug)]
pub enum VersionError {
    #[error("Empty version string.")]
    Empty,

    #[error("Unknown version format `{0}`. Must be a major.minor or major.minor.patch number.")]
    UnknownFormat(String),

    #[error(transparent)]
    Semver(#[from] semver::Error),
}
