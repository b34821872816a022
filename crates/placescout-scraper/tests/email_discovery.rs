//! Integration tests for `EmailDiscoverer` against wiremock-served websites.

use std::time::Duration;

use placescout_core::BusinessRecord;
use placescout_scraper::EmailDiscoverer;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_UA: &str = "Mozilla/5.0 (test)";

fn discoverer() -> EmailDiscoverer {
    EmailDiscoverer::new(5, TEST_UA, "fr-FR,fr;q=0.9").expect("discoverer should build")
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!("<html><body>{body}</body></html>"),
        "text/html; charset=utf-8",
    )
}

async fn mount_html(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(html(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn homepage_business_address_beats_generic() {
    let server = MockServer::start().await;
    mount_html(
        &server,
        "/",
        r#"<a href="mailto:noreply@business.com">x</a> Écrivez-nous: contact@business.com"#,
    )
    .await;

    let email = discoverer().discover(&format!("{}/", server.uri())).await;
    assert_eq!(email.as_deref(), Some("contact@business.com"));
}

#[tokio::test]
async fn falls_through_to_contact_page() {
    let server = MockServer::start().await;
    mount_html(&server, "/", "<h1>Bienvenue</h1>").await;
    mount_html(
        &server,
        "/contact",
        r#"<a href="mailto:Info@Shop.fr?subject=Bonjour">Nous écrire</a>"#,
    )
    .await;

    let email = discoverer().discover(&server.uri()).await;
    assert_eq!(email.as_deref(), Some("info@shop.fr"));
}

#[tokio::test]
async fn stops_at_first_page_with_a_hit() {
    let server = MockServer::start().await;
    mount_html(&server, "/accueil", "<p>bonjour@cafe.fr</p>").await;
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(html("<p>other@cafe.fr</p>"))
        .expect(0)
        .mount(&server)
        .await;

    let email = discoverer()
        .discover(&format!("{}/accueil", server.uri()))
        .await;
    assert_eq!(email.as_deref(), Some("bonjour@cafe.fr"));
}

#[tokio::test]
async fn skips_non_html_responses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"email":"json@cafe.fr"}"#, "application/json"),
        )
        .mount(&server)
        .await;
    mount_html(&server, "/nous-contacter", "<p>accueil@cafe.fr</p>").await;

    let email = discoverer().discover(&server.uri()).await;
    assert_eq!(email.as_deref(), Some("accueil@cafe.fr"));
}

#[tokio::test]
async fn skips_error_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_raw("<p>oops@cafe.fr</p>", "text/html"),
        )
        .mount(&server)
        .await;
    mount_html(&server, "/about", "<p>team@cafe.fr</p>").await;

    let email = discoverer().discover(&server.uri()).await;
    assert_eq!(email.as_deref(), Some("team@cafe.fr"));
}

#[tokio::test]
async fn rejects_asset_lookalikes() {
    let server = MockServer::start().await;
    mount_html(&server, "/", r#"<img src="/img/banner@2x.png" alt="">"#).await;

    let email = discoverer().discover(&server.uri()).await;
    assert_eq!(email, None);
}

#[tokio::test]
async fn returns_none_when_nothing_found() {
    // Unmatched paths get wiremock's default 404.
    let server = MockServer::start().await;
    mount_html(&server, "/", "<p>Appelez-nous au 04 78 00 00 00</p>").await;

    let email = discoverer().discover(&server.uri()).await;
    assert_eq!(email, None);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 7, "homepage plus every contact path");
}

#[tokio::test]
async fn unreachable_site_yields_none() {
    let email = discoverer().discover("http://127.0.0.1:1/").await;
    assert_eq!(email, None);
}

#[tokio::test]
async fn non_http_website_makes_no_requests() {
    let server = MockServer::start().await;
    let email = discoverer().discover("www.cafe.fr").await;
    assert_eq!(email, None);
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn batch_sets_emails_and_reports_progress_per_record() {
    let server = MockServer::start().await;
    mount_html(&server, "/", "<p>contact@boulangerie.fr</p>").await;

    let mut with_site = BusinessRecord::new("a", "Boulangerie");
    with_site.website = Some(format!("{}/", server.uri()));
    let without_site = BusinessRecord::new("b", "Sans Site");
    let mut records = vec![with_site, without_site];

    let mut progress: Vec<(usize, usize)> = Vec::new();
    discoverer()
        .enrich_with_emails(&mut records, 0, |done, total| progress.push((done, total)))
        .await;

    assert_eq!(records[0].email.as_deref(), Some("contact@boulangerie.fr"));
    assert_eq!(records[1].email, None);
    assert_eq!(progress, vec![(1, 2), (2, 2)]);
}

#[tokio::test(start_paused = true)]
async fn batch_sleeps_between_businesses_but_not_before_first() {
    // No websites, so no requests; only the pacing sleeps advance the clock.
    let mut records: Vec<BusinessRecord> = (0..4)
        .map(|i| BusinessRecord::new(format!("id{i}"), format!("Shop {i}")))
        .collect();

    let started = tokio::time::Instant::now();
    let mut stamps: Vec<Duration> = Vec::new();
    discoverer()
        .enrich_with_emails(&mut records, 200, |_, _| stamps.push(started.elapsed()))
        .await;

    let delay = Duration::from_millis(200);
    assert_eq!(stamps.len(), 4);
    assert!(stamps[0] < delay, "first business must not wait, got {:?}", stamps[0]);
    for pair in stamps.windows(2) {
        assert!(pair[1] - pair[0] >= delay, "businesses too close: {pair:?}");
    }
    assert!(started.elapsed() >= delay * 3);
    assert!(records.iter().all(|r| r.email.is_none()));
}
