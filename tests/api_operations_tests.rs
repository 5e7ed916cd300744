//! Integration tests for the page-level operations: shaping, grouping,
//! localization, locale query parameters and the contact submission.

use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nardi_portal::error::AppError;
use nardi_portal::fetcher::api;
use nardi_portal::fetcher::cache::clear_http_response_cache;
use nardi_portal::fetcher::create_http_client_with_timeout;
use nardi_portal::fetcher::models::ContactMessage;
use nardi_portal::locale::Language;

fn test_client() -> reqwest::Client {
    create_http_client_with_timeout(5).unwrap()
}

#[tokio::test]
#[serial]
async fn test_archive_grouped_by_year_descending() {
    clear_http_response_cache().await;
    let mock_server = MockServer::start().await;

    let body = json!({
        "data": [
            { "id": 1, "documentId": "t1", "name": "ძველი", "Archived": true,
              "year": 2021, "createdAt": "2021-05-01T00:00:00.000Z" },
            { "id": 2, "documentId": "t2", "name": "ახალი", "Archived": true,
              "createdAt": "2023-05-01T00:00:00.000Z" },
            { "id": 3, "documentId": "t3", "name": "კიდევ", "Archived": true,
              "year": 2021, "createdAt": "2021-08-01T00:00:00.000Z" }
        ],
        "meta": {}
    });
    Mock::given(method("GET"))
        .and(path("/api/tournaments"))
        .and(query_param("filters[Archived][$eq]", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let groups = api::fetch_archived_tournaments_by_year(&test_client(), &mock_server.uri())
        .await
        .unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, 2023);
    assert_eq!(groups[1].0, 2021);
    assert_eq!(groups[1].1.len(), 2);
    // Within a year, newest first
    assert_eq!(groups[1].1[0].document_id, "t3");
}

#[tokio::test]
#[serial]
async fn test_missing_tournament_maps_to_domain_not_found() {
    clear_http_response_cache().await;
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = api::fetch_tournament(&test_client(), &mock_server.uri(), "ghost")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::TournamentNotFound { .. }));
    assert!(err.is_not_found());
}

#[tokio::test]
#[serial]
async fn test_calendar_flattens_and_partitions() {
    clear_http_response_cache().await;
    let mock_server = MockServer::start().await;

    let body = json!({
        "data": [
            { "id": 1, "documentId": "t1", "name": "A", "TournamentCalendar": [
                { "id": 10, "name": "ტური 1", "date": "2024-02-01", "finished": true },
                { "id": 11, "name": "ტური 2", "date": "2024-06-01", "finished": false }
            ]},
            { "id": 2, "documentId": "t2", "name": "B", "TournamentCalendar": [
                { "id": 20, "name": "ფინალი", "date": "2024-04-01", "finished": false }
            ]}
        ],
        "meta": {}
    });
    Mock::given(method("GET"))
        .and(path("/api/tournaments"))
        .and(query_param("populate", "TournamentCalendar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let events = api::fetch_calendar(&test_client(), &mock_server.uri())
        .await
        .unwrap();
    assert_eq!(events.len(), 3);
    // Newest first across tournaments
    assert_eq!(events[0].id, 11);
    assert_eq!(events[1].id, 20);

    let (finished, upcoming) = api::partition_events(events);
    assert_eq!(finished.len(), 1);
    assert_eq!(upcoming.len(), 2);

    let event = api::find_calendar_event(&test_client(), &mock_server.uri(), 20)
        .await
        .unwrap();
    assert_eq!(event.name.as_deref(), Some("ფინალი"));

    let err = api::find_calendar_event(&test_client(), &mock_server.uri(), 999)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::CalendarEventNotFound { .. }));
}

#[tokio::test]
#[serial]
async fn test_leaderboard_picks_most_recently_updated() {
    clear_http_response_cache().await;
    let mock_server = MockServer::start().await;

    let body = json!({
        "data": [
            { "id": 1, "documentId": "old", "name": "ძველი", "Archived": false,
              "updatedAt": "2024-01-01T00:00:00.000Z",
              "leaderboard": [ { "id": 1, "name": "ა", "score": 5.0 } ] },
            { "id": 2, "documentId": "empty", "name": "ცარიელი", "Archived": false,
              "updatedAt": "2024-09-01T00:00:00.000Z", "leaderboard": [] },
            { "id": 3, "documentId": "new", "name": "ახალი", "Archived": false,
              "updatedAt": "2024-06-01T00:00:00.000Z",
              "leaderboard": [
                  { "id": 2, "name": "ბ", "score": 3.0 },
                  { "id": 3, "name": "გ", "score": 8.0 }
              ] }
        ],
        "meta": {}
    });
    // The default leaderboard only asks the server for non-archived tournaments
    Mock::given(method("GET"))
        .and(path("/api/tournaments"))
        .and(query_param("filters[Archived][$eq]", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let view = api::fetch_leaderboard(&test_client(), &mock_server.uri(), None)
        .await
        .unwrap()
        .unwrap();

    // "empty" is newer but has no standings; "new" wins over "old"
    assert_eq!(view.tournament.document_id, "new");
    assert_eq!(view.entries[0].score, 8.0);
    assert_eq!(view.rank_of(0), 1);
}

#[tokio::test]
#[serial]
async fn test_leaderboard_by_id_searches_all_tournaments() {
    clear_http_response_cache().await;
    let mock_server = MockServer::start().await;

    let body = json!({
        "data": [
            { "id": 1, "documentId": "live", "name": "მიმდინარე", "Archived": false,
              "updatedAt": "2024-09-01T00:00:00.000Z",
              "leaderboard": [ { "id": 1, "name": "ა", "score": 5.0 } ] },
            { "id": 2, "documentId": "past", "name": "დასრულებული", "Archived": true,
              "updatedAt": "2023-01-01T00:00:00.000Z",
              "leaderboard": [ { "id": 2, "name": "ბ", "score": 7.0 } ] }
        ],
        "meta": {}
    });
    // An explicit selection looks across the unfiltered collection
    Mock::given(method("GET"))
        .and(path("/api/tournaments"))
        .and(query_param("populate", "leaderboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let view = api::fetch_leaderboard(&test_client(), &mock_server.uri(), Some("past"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.tournament.document_id, "past");
    assert_eq!(view.entries[0].score, 7.0);
}

#[tokio::test]
#[serial]
async fn test_champions_matrix_years() {
    clear_http_response_cache().await;
    let mock_server = MockServer::start().await;

    let body = json!({
        "data": [
            { "id": 1, "name": "გიორგი", "englishName": "Giorgi", "results": [
                { "year": 2022, "name": "I ადგილი", "englishName": "1st place" },
                { "year": 2024, "name": "II ადგილი" }
            ]},
            { "id": 2, "name": "ანა", "results": [
                { "year": 2023, "name": "I ადგილი" }
            ]}
        ],
        "meta": {}
    });
    Mock::given(method("GET"))
        .and(path("/api/Contestant-results"))
        .and(query_param("populate", "results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let matrix = api::fetch_champions(&test_client(), &mock_server.uri())
        .await
        .unwrap();
    assert_eq!(matrix.years, vec![2024, 2023, 2022]);
    let giorgi = &matrix.contestants[0];
    assert_eq!(
        matrix
            .result_for(giorgi, 2022)
            .unwrap()
            .display_name(Language::English, "-"),
        "1st place"
    );
    assert!(matrix.result_for(giorgi, 2023).is_none());
}

#[tokio::test]
#[serial]
async fn test_footer_requests_locale() {
    clear_http_response_cache().await;
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/footer"))
        .and(query_param("locale", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "adress": "12 Rustaveli Ave", "number": "+995 32 000000",
                      "mail": "info@nardi.ge" },
            "meta": {}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let footer = api::fetch_footer(&test_client(), &mock_server.uri(), Language::English)
        .await
        .unwrap();
    assert_eq!(footer.adress.as_deref(), Some("12 Rustaveli Ave"));
    assert_eq!(footer.mail.as_deref(), Some("info@nardi.ge"));
}

#[tokio::test]
#[serial]
async fn test_international_text_block_selects_locale_client_side() {
    clear_http_response_cache().await;
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/international"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "content": [ { "type": "paragraph", "children": [
                    { "type": "text", "text": "საერთაშორისო" } ] } ],
                "englishContent": [ { "type": "paragraph", "children": [
                    { "type": "text", "text": "International" } ] } ]
            },
            "meta": {}
        })))
        .mount(&mock_server)
        .await;

    let block = api::fetch_text_block(
        &test_client(),
        &mock_server.uri(),
        api::TextBlockKind::International,
        Language::English,
    )
    .await
    .unwrap();

    let english = block.rich_text(Language::English).unwrap();
    assert!(english.to_string().contains("International"));
    let georgian = block.rich_text(Language::Georgian).unwrap();
    assert!(georgian.to_string().contains("საერთაშორისო"));
}

#[tokio::test]
#[serial]
async fn test_heroes_resolve_relative_media_urls() {
    clear_http_response_cache().await;
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": 1, "image": { "url": "/uploads/a.jpg" } },
                { "id": 2 },
                { "id": 3, "image": { "url": "https://cdn.example.com/b.jpg" } }
            ],
            "meta": {}
        })))
        .mount(&mock_server)
        .await;

    let heroes = api::fetch_heroes(&test_client(), &mock_server.uri())
        .await
        .unwrap();
    let urls = api::hero_image_urls(&heroes, &mock_server.uri());
    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0], format!("{}/uploads/a.jpg", mock_server.uri()));
    assert_eq!(urls[1], "https://cdn.example.com/b.jpg");
}

#[tokio::test]
#[serial]
async fn test_submit_contact_posts_wrapped_payload() {
    clear_http_response_cache().await;
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/mails"))
        .and(body_partial_json(json!({
            "data": { "name": "Nino", "email": "nino@example.com", "message": "გამარჯობა" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": 1 } })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let message = ContactMessage {
        name: "Nino".to_string(),
        email: "nino@example.com".to_string(),
        message: "გამარჯობა".to_string(),
    };
    api::submit_contact(&test_client(), &mock_server.uri(), &message)
        .await
        .unwrap();
}

#[tokio::test]
#[serial]
async fn test_submit_contact_surfaces_server_rejection() {
    clear_http_response_cache().await;
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/mails"))
        .respond_with(ResponseTemplate::new(400).set_body_string("validation failed"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let message = ContactMessage {
        name: "Nino".to_string(),
        email: "not-an-email".to_string(),
        message: "x".to_string(),
    };
    let err = api::submit_contact(&test_client(), &mock_server.uri(), &message)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ApiClientError { status: 400, .. }));
}
