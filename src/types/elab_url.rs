//! Base URL of an eLabJournal API.

use crate::errors::InvalidElabUrl;
use aliri_braid::braid;
use url::Url;

/// An [ElabUrl] is the base URL for an eLabJournal API, e.g.
/// `https://uio.elabjournal.com/api/v1/`
///
/// Resource paths are appended to it and filters become its query string,
/// so it must be an absolute `http(s)` URL without query or fragment.
#[braid(validator, serde)]
pub struct ElabUrl(String);

impl aliri_braid::Validator for ElabUrl {
    type Error = InvalidElabUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        let url = Url::parse(s).map_err(|source| InvalidElabUrl::Malformed {
            url: s.to_string(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            Err(InvalidElabUrl::Protocol(s.to_string()))
        } else if url.query().is_some() || url.fragment().is_some() {
            Err(InvalidElabUrl::QueryOrFragment(s.to_string()))
        } else if !url.path().ends_with("/api/v1/") {
            Err(InvalidElabUrl::EndpointVersion(s.to_string()))
        } else {
            Ok(())
        }
    }
}

impl ElabUrl {
    /// Parse into a [Url] to which resource paths can be appended.
    pub(crate) fn to_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("http://localhost/api/v1/")]
    #[case("http://localhost:8000/api/v1/")]
    #[case("https://uio.elabjournal.com/api/v1/")]
    #[case("https://elab.example.org/journal/api/v1/")]
    fn test_parse_url(#[case] url: &str) {
        let elab_url = ElabUrl::try_from(url).unwrap();
        assert_eq!(elab_url.to_url().unwrap().as_str(), url);
    }

    #[rstest]
    #[case("uio.elabjournal.com/api/v1/")]
    #[case("https://")]
    #[case("http://[::1/api/v1/")]
    fn test_reject_malformed(#[case] url: &str) {
        assert!(matches!(
            ElabUrl::try_from(url).unwrap_err(),
            InvalidElabUrl::Malformed { .. }
        ))
    }

    #[rstest]
    #[case("ftp://uio.elabjournal.com/api/v1/")]
    #[case("file:///api/v1/")]
    #[case("mailto:api/v1/")]
    fn test_reject_bad_protocol(#[case] url: &str) {
        assert!(matches!(
            ElabUrl::try_from(url).unwrap_err(),
            InvalidElabUrl::Protocol(_)
        ))
    }

    #[rstest]
    #[case("https://uio.elabjournal.com/api/v1/?key=1")]
    #[case("https://uio.elabjournal.com/api/v1/#top")]
    fn test_reject_query_or_fragment(#[case] url: &str) {
        assert!(matches!(
            ElabUrl::try_from(url).unwrap_err(),
            InvalidElabUrl::QueryOrFragment(_)
        ))
    }

    #[rstest]
    #[case("https://uio.elabjournal.com")]
    #[case("https://uio.elabjournal.com/api/v2/")]
    #[case("https://uio.elabjournal.com/api/v1")]
    fn test_reject_bad_endpoint_version(#[case] url: &str) {
        assert!(matches!(
            ElabUrl::try_from(url).unwrap_err(),
            InvalidElabUrl::EndpointVersion(_)
        ))
    }
}
