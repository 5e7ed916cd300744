//! Integration tests for bilingual behavior: a language toggle re-renders
//! already-fetched content without touching the network.

use serde_json::json;
use serial_test::serial;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nardi_portal::fetcher::api::fetch_news;
use nardi_portal::fetcher::cache::clear_http_response_cache;
use nardi_portal::fetcher::create_http_client_with_timeout;
use nardi_portal::locale::{Language, LanguageStore};
use nardi_portal::select_localized;

#[tokio::test]
#[serial]
async fn test_language_toggle_does_not_refetch() {
    clear_http_response_cache().await;
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/newsblocks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 1,
                "documentId": "n1",
                "title": "ჩემპიონატი",
                "englishName": "Championship",
                "createdAt": "2024-04-01T09:00:00.000Z"
            }],
            "meta": {}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_http_client_with_timeout(5).unwrap();
    let posts = fetch_news(&client, &mock_server.uri()).await.unwrap();

    let dir = tempdir().unwrap();
    let store = LanguageStore::open(dir.path().join("language"));
    let mut rx = store.subscribe();

    // Render in the default language, toggle, render again. The same
    // fetched data serves both renders; expect(1) verifies no refetch.
    assert_eq!(posts[0].display_title(store.current(), "-"), "ჩემპიონატი");

    store.set(Language::English).unwrap();
    rx.changed().await.unwrap();
    assert_eq!(posts[0].display_title(*rx.borrow(), "-"), "Championship");
}

#[test]
fn test_select_localized_over_raw_record() {
    let record = json!({
        "name": "თბილისის ღია პირველობა",
        "englishName": "Tbilisi Open"
    });

    assert_eq!(
        select_localized(&record, "name", Language::Georgian, "-"),
        "თბილისის ღია პირველობა"
    );
    assert_eq!(
        select_localized(&record, "name", Language::English, "-"),
        "Tbilisi Open"
    );

    // Missing preferred variant falls back to the other, then placeholder
    let georgian_only = json!({ "name": "მხოლოდ ქართულად" });
    assert_eq!(
        select_localized(&georgian_only, "name", Language::English, "-"),
        "მხოლოდ ქართულად"
    );
    let empty = json!({});
    assert_eq!(select_localized(&empty, "name", Language::English, "-"), "-");
}

#[test]
fn test_preference_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("language");

    LanguageStore::open(&path).set(Language::English).unwrap();
    assert_eq!(LanguageStore::open(&path).current(), Language::English);

    // Corrupted or foreign tags fall back to Georgian
    std::fs::write(&path, "fr").unwrap();
    assert_eq!(LanguageStore::open(&path).current(), Language::Georgian);
}
