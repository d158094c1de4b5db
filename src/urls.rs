//! Pure URL builders for the upstream content-data endpoints.
//!
//! Each builder maps `(service, variant)` identifiers to a request path;
//! none of them perform I/O or validation.

/// Most-read list for a service, e.g. `/news/mostread.json` or
/// `/zhongwen/mostread/simp.json`.
pub fn most_read_endpoint(service: &str, variant: Option<&str>) -> String {
    match variant {
        Some(v) => format!("/{}/mostread/{}.json", service, v),
        None => format!("/{}/mostread.json", service),
    }
}

/// Secondary-column content shown alongside story pages.
pub fn secondary_column_url(service: &str, variant: Option<&str>) -> String {
    match variant {
        Some(v) => format!("/{}/sty-secondary-column/{}", service, v),
        None => format!("/{}/sty-secondary-column", service),
    }
}

/// Onward-journey recommendations for one asset.
pub fn recommendations_url(service: &str, variant: Option<&str>, asset_id: &str) -> String {
    match variant {
        Some(v) => format!("/{}/recommendations/{}/{}", service, v, asset_id),
        None => format!("/{}/recommendations/{}", service, asset_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_read_without_variant() {
        assert_eq!(most_read_endpoint("news", None), "/news/mostread.json");
    }

    #[test]
    fn most_read_with_variant() {
        assert_eq!(
            most_read_endpoint("zhongwen", Some("simp")),
            "/zhongwen/mostread/simp.json"
        );
    }

    #[test]
    fn secondary_column_without_variant() {
        assert_eq!(
            secondary_column_url("mundo", None),
            "/mundo/sty-secondary-column"
        );
    }

    #[test]
    fn secondary_column_with_variant() {
        assert_eq!(
            secondary_column_url("serbian", Some("lat")),
            "/serbian/sty-secondary-column/lat"
        );
    }

    #[test]
    fn recommendations_without_variant() {
        assert_eq!(
            recommendations_url("mundo", None, "noticias-12345678"),
            "/mundo/recommendations/noticias-12345678"
        );
    }

    #[test]
    fn recommendations_with_variant() {
        assert_eq!(
            recommendations_url("serbian", Some("cyr"), "srbija-87654321"),
            "/serbian/recommendations/cyr/srbija-87654321"
        );
    }

    #[test]
    fn builders_are_deterministic() {
        assert_eq!(
            most_read_endpoint("news", Some("simp")),
            most_read_endpoint("news", Some("simp"))
        );
        assert_eq!(
            recommendations_url("news", None, "world-1"),
            recommendations_url("news", None, "world-1")
        );
    }
}
