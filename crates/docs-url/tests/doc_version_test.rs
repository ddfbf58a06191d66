use docs_url::DocVersion;
use semver::Version;

mod doc_version {
    use super::*;

    #[test]
    fn parses_minor_versions() {
        let version = DocVersion::parse("3.15").unwrap();

        assert_eq!(version.as_str(), "3.15");
        assert_eq!(*version, Version::new(3, 15, 0));
    }

    #[test]
    fn parses_patch_versions() {
        let version = DocVersion::parse("3.16.0").unwrap();

        assert_eq!(version.as_str(), "3.16.0");
        assert_eq!(*version, Version::new(3, 16, 0));
    }

    #[test]
    fn formats_guides_segments() {
        assert_eq!(
            DocVersion::parse("3.15").unwrap().guides_segment(),
            "v3.15.0"
        );
        assert_eq!(
            DocVersion::parse("3.16.0").unwrap().guides_segment(),
            "v3.16.0"
        );
    }

    #[test]
    fn displays_the_raw_form() {
        assert_eq!(DocVersion::parse("3.15").unwrap().to_string(), "3.15");
        assert_eq!(DocVersion::parse("3.15").unwrap(), "3.15");
    }

    #[test]
    fn serializes_to_strings() {
        let version = DocVersion::parse("3.15").unwrap();

        assert_eq!(serde_json::to_string(&version).unwrap(), "\"3.15\"");
        assert_eq!(
            serde_json::from_str::<DocVersion>("\"3.15\"").unwrap(),
            version
        );
    }

    #[test]
    fn error_empty() {
        assert_eq!(
            DocVersion::parse("").unwrap_err().to_string(),
            "Empty version string."
        );
    }

    #[test]
    fn error_missing_minor() {
        assert_eq!(
            DocVersion::parse("3").unwrap_err().to_string(),
            "Unknown version format `3`. Must be a major.minor or major.minor.patch number."
        );
    }

    #[test]
    fn error_aliases() {
        assert!(DocVersion::parse("release").is_err());
        assert!(DocVersion::parse("latest").is_err());
    }

    #[test]
    fn error_requirements() {
        assert!(DocVersion::parse("^3.15").is_err());
        assert!(DocVersion::parse(">=3.15").is_err());
        assert!(DocVersion::parse("3.15.*").is_err());
    }

    #[test]
    fn error_prefixed_versions() {
        assert!(DocVersion::parse("v3.15").is_err());
    }
}
