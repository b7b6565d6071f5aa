//! Cross-origin access for the browser client.

use salvo::{
    cors::{Cors, CorsHandler},
    http::{HeaderValue, Method, header::InvalidHeaderValue},
};

/// CORS hoop allowing `origin` to call the API.
///
/// Installed on the [`salvo::Service`] rather than the router so preflight `OPTIONS` requests
/// are answered even though no route handles them.
///
/// # Errors
///
/// Returns an error if `origin` is not a valid header value.
pub(crate) fn handler(origin: &str) -> Result<CorsHandler, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(origin)?;

    Ok(Cors::new()
        .allow_origin(origin)
        .allow_methods(vec![Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers(vec!["content-type", "x-request-id"])
        .expose_headers(vec!["location", "x-request-id"])
        .into_handler())
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn ok() -> &'static str {
        "ok"
    }

    fn make_service() -> Result<Service, InvalidHeaderValue> {
        Ok(Service::new(Router::with_path("ad-spaces").get(ok))
            .hoop(handler("http://localhost:3000")?))
    }

    #[test]
    fn rejects_origins_that_are_not_header_values() {
        assert!(handler("http://bad\norigin").is_err());
    }

    #[tokio::test]
    async fn allowed_origin_is_echoed() -> TestResult {
        let res = TestClient::get("http://example.com/ad-spaces")
            .add_header("origin", "http://localhost:3000", true)
            .send(&make_service()?)
            .await;

        let allowed = res
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(allowed, Some("http://localhost:3000"));

        Ok(())
    }

    #[tokio::test]
    async fn other_origins_get_no_allow_header() -> TestResult {
        let res = TestClient::get("http://example.com/ad-spaces")
            .add_header("origin", "https://elsewhere.example", true)
            .send(&make_service()?)
            .await;

        assert!(
            res.headers().get("access-control-allow-origin").is_none(),
            "unexpected allow-origin header"
        );

        Ok(())
    }
}
