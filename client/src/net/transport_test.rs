use super::*;
use signon::net::Method;

#[tokio::test]
async fn native_send_reports_network_error() {
    let request = ApiRequest { method: Method::Post, url: "/api/login".to_owned(), body: None };
    let err = GlooTransport.send(request).await.unwrap_err();
    assert_eq!(err, ApiError::Network(UNAVAILABLE.to_owned()));
}
