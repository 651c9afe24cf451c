//! Integration tests for the lookup providers using mockito for HTTP mocking.

use mockito::{Matcher, Server};
use osint_lookup_bot::providers::{BreachEndpoint, IpEndpoint, LookupProvider, PhoneEndpoint};
use osint_lookup_bot::{
    EmailProvider, IpProvider, LookupResult, PhoneProvider, PhoneReport, QueryDispatcher,
};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::{Duration, Instant};

const TIMEOUT: Duration = Duration::from_secs(5);

fn phone_provider(base: &str) -> PhoneProvider {
    PhoneProvider::new(PhoneEndpoint::new(format!("{}/geo/api.php", base)), TIMEOUT)
}

fn ip_provider(base: &str) -> IpProvider {
    IpProvider::new(IpEndpoint::new(format!("{}/json", base)), TIMEOUT)
}

fn email_provider(base: &str) -> EmailProvider {
    EmailProvider::new(BreachEndpoint::new(base, "test-hibp-key"), TIMEOUT)
}

// ========================= Phone =========================

#[tokio::test]
async fn test_phone_lookup_success() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/geo/api.php")
        .match_query(Matcher::UrlEncoded("telcod".into(), "79123456789".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "country": {"name": "Russia", "iso": "RU"},
            "0": {"oper": "MTS", "mobile": true, "region": "Moscow"}
        }"#,
        )
        .create_async()
        .await;

    let result = phone_provider(&server.url()).lookup("+79123456789").await;

    mock.assert_async().await;
    assert_eq!(
        result,
        LookupResult::Phone(PhoneReport {
            country: "Russia".to_string(),
            operator: "MTS".to_string(),
            is_mobile: true,
        })
    );
}

#[tokio::test]
async fn test_phone_lookup_missing_fields_default() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/geo/api.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"limit": 10}"#)
        .create_async()
        .await;

    let result = phone_provider(&server.url()).lookup("88005553535").await;

    assert_eq!(result, LookupResult::Phone(PhoneReport::default()));
}

#[tokio::test]
async fn test_phone_lookup_server_error() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/geo/api.php")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let result = phone_provider(&server.url()).lookup("+79123456789").await;

    assert_eq!(result, LookupResult::Error);
}

#[tokio::test]
async fn test_phone_lookup_malformed_json() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/geo/api.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let result = phone_provider(&server.url()).lookup("+79123456789").await;

    assert_eq!(result, LookupResult::Error);
}

#[tokio::test]
async fn test_phone_lookup_timeout() {
    // Accepts connections into the backlog but never answers.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let provider = PhoneProvider::new(
        PhoneEndpoint::new(format!("{}/geo/api.php", base)),
        Duration::from_millis(300),
    );

    let started = Instant::now();
    let result = provider.lookup("+79123456789").await;

    assert_eq!(result, LookupResult::Error);
    assert!(started.elapsed() < Duration::from_secs(5));
    drop(listener);
}

#[tokio::test]
async fn test_phone_timeout_renders_generic_notice_only() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let short = Duration::from_millis(300);

    let dispatcher = QueryDispatcher::new(
        Arc::new(PhoneProvider::new(
            PhoneEndpoint::new(format!("{}/geo/api.php", base)),
            short,
        )),
        Arc::new(IpProvider::new(IpEndpoint::new(base.clone()), short)),
        Arc::new(EmailProvider::new(BreachEndpoint::new(base.clone(), "k"), short)),
    );

    let response = dispatcher.handle("+79123456789").await;

    assert_eq!(response.text, osint_lookup_bot::formatter::LOOKUP_FAILED);
    assert!(response.actions.is_empty());
    assert!(!response.text.contains("Страна"));
    drop(listener);
}

#[tokio::test]
async fn test_connection_refused_is_error() {
    // Bind then drop to get a port nobody listens on.
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

    let result = ip_provider(&format!("http://{}", addr)).lookup("8.8.8.8").await;

    assert_eq!(result, LookupResult::Error);
}

// ========================= IP =========================

#[tokio::test]
async fn test_ip_lookup_success() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/json/8.8.8.8")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "status": "success",
            "country": "United States",
            "countryCode": "US",
            "city": "Mountain View",
            "isp": "Google LLC",
            "query": "8.8.8.8"
        }"#,
        )
        .create_async()
        .await;

    let result = ip_provider(&server.url()).lookup("8.8.8.8").await;

    mock.assert_async().await;
    match result {
        LookupResult::Ip(report) => {
            assert_eq!(report.country, "United States");
            assert_eq!(report.city, "Mountain View");
            assert_eq!(report.isp, "Google LLC");
        }
        other => panic!("Expected Ip result, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_ip_lookup_private_range_defaults() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/json/192.168.0.1")
        .with_status(200)
        .with_body(r#"{"status":"fail","message":"private range","query":"192.168.0.1"}"#)
        .create_async()
        .await;

    let result = ip_provider(&server.url()).lookup("192.168.0.1").await;

    match result {
        LookupResult::Ip(report) => {
            assert_eq!(report.country, "N/A");
            assert_eq!(report.city, "N/A");
            assert_eq!(report.isp, "N/A");
        }
        other => panic!("Expected Ip result, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_ip_lookup_rate_limited() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/json/1.1.1.1")
        .with_status(429)
        .create_async()
        .await;

    let result = ip_provider(&server.url()).lookup("1.1.1.1").await;

    assert_eq!(result, LookupResult::Error);
}

// ========================= Email =========================

#[tokio::test]
async fn test_email_lookup_breaches() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", Matcher::Regex(r"^/breachedaccount/test(@|%40)example\.com$".into()))
        .match_header("hibp-api-key", "test-hibp-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
            {"Name": "Adobe"}, {"Name": "LinkedIn"}, {"Name": "Dropbox"},
            {"Name": "MySpace"}, {"Name": "Tumblr"}, {"Name": "Canva"},
            {"Name": "Zynga"}
        ]"#,
        )
        .create_async()
        .await;

    let result = email_provider(&server.url()).lookup("test@example.com").await;

    mock.assert_async().await;
    match result {
        LookupResult::Email(report) => {
            assert_eq!(report.count(), 7);
            assert_eq!(
                report.names(),
                ["Adobe", "LinkedIn", "Dropbox", "MySpace", "Tumblr"]
            );
        }
        other => panic!("Expected Email result, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_email_lookup_not_found_is_clean() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", Matcher::Regex(r"^/breachedaccount/".into()))
        .with_status(404)
        .create_async()
        .await;

    let result = email_provider(&server.url()).lookup("clean@example.com").await;

    match result {
        LookupResult::Email(report) => {
            assert_eq!(report.count(), 0);
            assert!(report.names().is_empty());
        }
        other => panic!("Expected Email result, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_email_lookup_unauthorized_is_error() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", Matcher::Regex(r"^/breachedaccount/".into()))
        .with_status(401)
        .with_body(r#"{"statusCode":401,"message":"Access denied due to missing hibp-api-key."}"#)
        .create_async()
        .await;

    let result = email_provider(&server.url()).lookup("test@example.com").await;

    assert_eq!(result, LookupResult::Error);
}

#[tokio::test]
async fn test_email_lookup_malformed_body_is_error() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", Matcher::Regex(r"^/breachedaccount/".into()))
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let result = email_provider(&server.url()).lookup("test@example.com").await;

    assert_eq!(result, LookupResult::Error);
}

#[tokio::test]
async fn test_providers_report_their_kind() {
    use osint_lookup_bot::QueryKind;

    assert_eq!(phone_provider("http://x").kind(), QueryKind::Phone);
    assert_eq!(ip_provider("http://x").kind(), QueryKind::IpAddress);
    assert_eq!(email_provider("http://x").kind(), QueryKind::Email);
}

// ========================= End to end =========================

#[tokio::test]
async fn test_dispatcher_against_mock_services() {
    let mut server = Server::new_async().await;

    let _ip = server
        .mock("GET", "/json/8.8.8.8")
        .with_status(200)
        .with_body(r#"{"country":"United States","city":"Mountain View","isp":"Google LLC"}"#)
        .create_async()
        .await;

    let _email = server
        .mock("GET", Matcher::Regex(r"^/breachedaccount/".into()))
        .with_status(404)
        .create_async()
        .await;

    let url = server.url();
    let dispatcher = QueryDispatcher::new(
        Arc::new(phone_provider(&url)),
        Arc::new(ip_provider(&url)),
        Arc::new(email_provider(&url)),
    );

    let ip = dispatcher.handle("8.8.8.8").await;
    assert_eq!(
        ip.text,
        "🖥️ IP: 8.8.8.8\n🌍 Страна: United States\n🏙️ Город: Mountain View\n📶 Провайдер: Google LLC"
    );

    let email = dispatcher.handle("test@example.com").await;
    assert_eq!(
        email.text,
        "📧 Email: test@example.com\n✅ Не найден в известных утечках"
    );
}
