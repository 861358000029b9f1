//! End-to-end crawl behavior against mock documentation sites

use pulse_modules::config::Config;
use pulse_modules::Crawler;
use url::Url;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Serves an endless tree of documentation pages: every page links to two children
struct EndlessDocs;

impl Respond for EndlessDocs {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let current = request.url.path().trim_end_matches('/');
        ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body><a href="{0}/0">Left</a><a href="{0}/1">Right</a></body></html>"#,
            current
        ))
    }
}

fn test_crawler() -> Crawler {
    Crawler::new(&Config::default()).expect("Failed to build crawler")
}

fn html_page(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html")
}

#[tokio::test]
async fn test_crawl_terminates_at_page_limit() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/docs.*"))
        .respond_with(EndlessDocs)
        .mount(&mock_server)
        .await;

    let seed = Url::parse(&format!("{}/docs", mock_server.uri())).unwrap();

    for limit in [1, 5, 12] {
        let pages = test_crawler().crawl(&seed, limit).await;
        assert_eq!(pages.len(), limit, "limit {} not reached exactly", limit);
        assert!(pages.attempted() <= limit);
    }
}

#[tokio::test]
async fn test_crawl_stays_on_seed_domain() {
    let docs_site = MockServer::start().await;
    let other_site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/docs"))
        .respond_with(html_page(format!(
            r#"<a href="{}/docs/external">External docs</a><a href="/docs/local">Local</a>"#,
            other_site.uri()
        )))
        .expect(1)
        .mount(&docs_site)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/local"))
        .respond_with(html_page("<p>local</p>".to_string()))
        .expect(1)
        .mount(&docs_site)
        .await;
    Mock::given(method("GET"))
        .respond_with(html_page("<p>should never be fetched</p>".to_string()))
        .expect(0)
        .mount(&other_site)
        .await;

    let seed = Url::parse(&format!("{}/docs", docs_site.uri())).unwrap();
    let pages = test_crawler().crawl(&seed, 30).await;

    assert_eq!(pages.len(), 2);
    let origin = pulse_modules::url::extract_origin(&seed).unwrap();
    for url in pages.urls() {
        let parsed = Url::parse(url).unwrap();
        assert_eq!(pulse_modules::url::extract_origin(&parsed).unwrap(), origin);
    }
}

#[tokio::test]
async fn test_crawl_ignores_off_topic_links() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="/pricing">Pricing</a><a href="/blog/launch">Blog</a><a href="/Support/faq">FAQ</a>"#
                .to_string(),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Support/faq"))
        .respond_with(html_page("<p>faq</p>".to_string()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pricing"))
        .respond_with(html_page("<p>pricing</p>".to_string()))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/blog/launch"))
        .respond_with(html_page("<p>blog</p>".to_string()))
        .expect(0)
        .mount(&mock_server)
        .await;

    // The seed itself is crawled even without a topical keyword
    let seed = Url::parse(&format!("{}/", mock_server.uri())).unwrap();
    let pages = test_crawler().crawl(&seed, 30).await;

    assert_eq!(pages.len(), 2);
    assert!(pages.contains(&format!("{}/Support/faq", mock_server.uri())));
}

#[tokio::test]
async fn test_crawl_follows_fragment_keywords_and_download_links() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="/guide#help">Guide</a><a href="/docs/x" download>Manual</a><a href="/guide#intro">Intro</a>"#
                .to_string(),
        ))
        .mount(&mock_server)
        .await;
    // The keyword only appears in the fragment; the page is still fetched once
    Mock::given(method("GET"))
        .and(path("/guide"))
        .respond_with(html_page("<p>guide</p>".to_string()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/x"))
        .respond_with(html_page("<p>manual</p>".to_string()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let seed = Url::parse(&format!("{}/", base)).unwrap();
    let pages = test_crawler().crawl(&seed, 30).await;

    let urls: Vec<&str> = pages.urls().collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/", base).as_str(),
            format!("{}/guide", base).as_str(),
            format!("{}/docs/x", base).as_str(),
        ]
    );
}

#[tokio::test]
async fn test_crawl_fetches_each_url_once() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    // Every page links to every other page, including itself
    let all_links = format!(
        r##"<a href="{0}/docs">Home</a><a href="{0}/docs/a">A</a><a href="{0}/docs/b">B</a>
            <a href="{0}/docs/a#section">A again</a><a href="/docs/b">B relative</a>"##,
        base
    );
    for route in ["/docs", "/docs/a", "/docs/b"] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(html_page(all_links.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let seed = Url::parse(&format!("{}/docs", base)).unwrap();
    let pages = test_crawler().crawl(&seed, 30).await;

    assert_eq!(pages.len(), 3);
    assert_eq!(pages.attempted(), 3);
    let mut urls: Vec<&str> = pages.urls().collect();
    urls.sort();
    urls.dedup();
    assert_eq!(urls.len(), 3);
}

#[tokio::test]
async fn test_crawl_survives_fetch_failures() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/help"))
        .respond_with(html_page(format!(
            r#"<a href="{0}/help/broken">Broken</a><a href="{0}/help/missing">Missing</a><a href="{0}/help/ok">OK</a>"#,
            base
        )))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/help/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/help/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/help/ok"))
        .respond_with(html_page(format!(
            r#"<p>fine</p><a href="{}/help/broken">Broken again</a>"#,
            base
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let seed = Url::parse(&format!("{}/help", base)).unwrap();
    let pages = test_crawler().crawl(&seed, 30).await;

    assert_eq!(pages.len(), 2);
    assert_eq!(pages.attempted(), 4);
    assert_eq!(pages.failed(), 2);
    assert!(pages.contains(&format!("{}/help", base)));
    assert!(pages.contains(&format!("{}/help/ok", base)));
    assert!(!pages.contains(&format!("{}/help/broken", base)));
}
