//! Full pipeline runs: crawl, extract and classify

use pulse_modules::config::Config;
use pulse_modules::{Pipeline, RemoteCapability, Strategy};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SECURITY_TEXT: &str = "Go to Security Settings to enable privacy controls for your account.";
const PLUGIN_TEXT: &str = "Install the plugin before running the setup wizard.";
const ACCOUNT_TEXT: &str = "Reset your account password from the profile screen.";

fn html_page(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html")
}

/// Mounts a small documentation site: an index page linking to two articles
async fn mount_docs_site(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/docs"))
        .respond_with(html_page(format!(
            r#"<html><head><title>Docs</title></head><body>
                <h1>Product documentation home</h1>
                <a href="/docs/security">Security</a>
                <a href="/docs/plugins">Plugins</a>
                <a href="/about">About us</a>
                <p>{}</p>
            </body></html>"#,
            SECURITY_TEXT
        )))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/security"))
        .respond_with(html_page(format!(
            "<h2>Security</h2><p>{}</p><li>{}</li>",
            SECURITY_TEXT, ACCOUNT_TEXT
        )))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/plugins"))
        .respond_with(html_page(format!("<p>{}</p>", PLUGIN_TEXT)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(html_page("<p>We care about security and privacy a lot.</p>".to_string()))
        .expect(0)
        .mount(server)
        .await;
}

fn config_with_remote(api: &MockServer) -> Config {
    let mut config = Config::default();
    config.classifier.api_base_url = format!("{}/v1", api.uri());
    config
}

#[tokio::test]
async fn test_rule_based_pipeline_end_to_end() {
    let docs = MockServer::start().await;
    mount_docs_site(&docs).await;

    let pipeline = Pipeline::new(&Config::default(), RemoteCapability::MissingCredential)
        .expect("Failed to build pipeline");
    let (result, stats) = pipeline
        .run_with_report(&[format!("{}/docs", docs.uri())])
        .await;

    assert_eq!(stats.seeds_accepted, 1);
    assert_eq!(stats.pages_fetched, 3);
    // SECURITY_TEXT appears on two pages but counts once
    assert_eq!(stats.fragments, 3);
    assert_eq!(stats.strategy, Some(Strategy::RuleBased));

    let security = result.find("Security & Privacy").expect("missing security module");
    assert_eq!(security.submodule("Security Settings"), Some(SECURITY_TEXT));

    let account = result.find("Account Management").expect("missing account module");
    assert_eq!(account.submodule("Account Settings"), Some(ACCOUNT_TEXT));

    // "plugin" outranks "install"/"setup"
    let plugins = result.find("Plugins").expect("missing plugins module");
    assert_eq!(plugins.submodule("Plugin Usage"), Some(PLUGIN_TEXT));
    assert!(result.find("Getting Started").is_none());

    assert_eq!(stats.modules, result.len());
}

#[tokio::test]
async fn test_pipeline_is_deterministic() {
    let docs = MockServer::start().await;
    mount_docs_site(&docs).await;

    let pipeline = Pipeline::new(&Config::default(), RemoteCapability::MissingCredential)
        .expect("Failed to build pipeline");
    let seeds = [format!("{}/docs", docs.uri())];

    let first = pipeline.run(&seeds).await;
    let second = pipeline.run(&seeds).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_invalid_seeds_skipped_valid_ones_processed() {
    let docs = MockServer::start().await;
    mount_docs_site(&docs).await;

    let pipeline = Pipeline::new(&Config::default(), RemoteCapability::MissingCredential)
        .expect("Failed to build pipeline");
    let (result, stats) = pipeline
        .run_with_report(&[
            "not-a-url".to_string(),
            format!("{}/docs", docs.uri()),
            "mailto:docs@example.com".to_string(),
        ])
        .await;

    assert_eq!(stats.seeds_skipped, 2);
    assert_eq!(stats.seeds_accepted, 1);
    assert!(!result.is_empty());
}

#[tokio::test]
async fn test_fragments_shared_across_seeds() {
    let docs = MockServer::start().await;
    mount_docs_site(&docs).await;

    let pipeline = Pipeline::new(&Config::default(), RemoteCapability::MissingCredential)
        .expect("Failed to build pipeline");
    let (_, stats) = pipeline
        .run_with_report(&[
            format!("{}/docs", docs.uri()),
            format!("{}/docs/plugins", docs.uri()),
        ])
        .await;

    assert_eq!(stats.seeds_accepted, 2);
    assert_eq!(stats.pages_fetched, 4);
    assert_eq!(stats.fragments, 3);
}

#[tokio::test]
async fn test_no_content_skips_classifier() {
    let docs = MockServer::start().await;
    let api = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/help"))
        .respond_with(html_page("<p>Short.</p><div>Nothing in content tags at all here.</div>".to_string()))
        .mount(&docs)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&api)
        .await;

    let capability = RemoteCapability::from_credential(Some("test-key".to_string()));
    let pipeline =
        Pipeline::new(&config_with_remote(&api), capability).expect("Failed to build pipeline");
    let (result, stats) = pipeline
        .run_with_report(&[format!("{}/help", docs.uri())])
        .await;

    assert!(result.is_empty());
    assert_eq!(stats.pages_fetched, 1);
    assert_eq!(stats.fragments, 0);
    assert_eq!(stats.strategy, None);
}

#[cfg(feature = "remote-classifier")]
#[tokio::test]
async fn test_remote_classification_end_to_end() {
    let docs = MockServer::start().await;
    let api = MockServer::start().await;
    mount_docs_site(&docs).await;

    let answer = r#"[{"module": "Extensions", "Description": "Add-ons for the product.", "Submodules": {"Plugin Installation": "Installing plugins before setup."}}]"#;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("Install the plugin before running the setup wizard."))
        .and(body_string_contains("gpt-4o-mini"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": answer } }]
        })))
        .expect(1)
        .mount(&api)
        .await;

    let capability = RemoteCapability::from_credential(Some("test-key".to_string()));
    let pipeline =
        Pipeline::new(&config_with_remote(&api), capability).expect("Failed to build pipeline");
    let (result, stats) = pipeline
        .run_with_report(&[format!("{}/docs", docs.uri())])
        .await;

    assert_eq!(stats.strategy, Some(Strategy::Remote));
    assert_eq!(result.len(), 1);
    let extensions = result.find("Extensions").unwrap();
    assert_eq!(
        extensions.submodule("Plugin Installation"),
        Some("Installing plugins before setup.")
    );
}

#[cfg(feature = "remote-classifier")]
#[tokio::test]
async fn test_remote_failure_falls_back_to_rules() {
    let docs = MockServer::start().await;
    let api = MockServer::start().await;
    mount_docs_site(&docs).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&api)
        .await;

    let capability = RemoteCapability::from_credential(Some("bad-key".to_string()));
    let pipeline =
        Pipeline::new(&config_with_remote(&api), capability).expect("Failed to build pipeline");
    let (result, stats) = pipeline
        .run_with_report(&[format!("{}/docs", docs.uri())])
        .await;

    assert_eq!(stats.strategy, Some(Strategy::RuleBased));
    assert!(result.find("Plugins").is_some());
    assert!(result.find("Security & Privacy").is_some());
}
