use nhl_stats_client::{AppError, Config, NhlClient};
use std::sync::{Arc, Once};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

static TRACING: Once = Once::new();

/// Installs a test subscriber once for the whole suite, so running with
/// `RUST_LOG=nhl_stats_client=debug` surfaces the client's traces alongside
/// failing test output.
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn client_for(server: &MockServer) -> NhlClient {
    init_tracing();
    NhlClient::new(Config::with_api_domain(server.uri())).expect("client should build")
}

fn franchises_body() -> serde_json::Value {
    serde_json::json!({
        "franchises": [
            {
                "franchiseId": 1,
                "teamName": "Canadiens",
                "locationName": "Montréal",
                "mostRecentTeamId": 8,
                "firstSeasonId": 19171918,
                "link": "/api/v1/franchises/1"
            },
            {
                "franchiseId": 2,
                "teamName": "Wanderers",
                "locationName": "Montreal",
                "mostRecentTeamId": 41,
                "firstSeasonId": 19171918,
                "lastSeasonId": 19171918,
                "link": "/api/v1/franchises/2"
            },
            {
                "franchiseId": 7,
                "teamName": "Maroons",
                "locationName": "Montreal",
                "mostRecentTeamId": 43,
                "firstSeasonId": 19241925,
                "lastSeasonId": 19371938,
                "link": "/api/v1/franchises/7"
            },
            {
                "franchiseId": 6,
                "teamName": "Bruins",
                "locationName": "Boston",
                "mostRecentTeamId": 6,
                "firstSeasonId": 19241925,
                "link": "/api/v1/franchises/6"
            },
            {
                "franchiseId": 10,
                "teamName": "Rangers",
                "locationName": "New York",
                "mostRecentTeamId": 3,
                "firstSeasonId": 19261927,
                "link": "/api/v1/franchises/10"
            },
            {
                "franchiseId": 25,
                "teamName": "Oilers",
                "locationName": "Edmonton",
                "mostRecentTeamId": 22,
                "firstSeasonId": 19791980,
                "link": "/api/v1/franchises/25"
            }
        ]
    })
}

/// Mounts the franchises endpoint expecting exactly `expected_calls` hits,
/// so tests double as proof of the populate-once cache behavior.
async fn mount_franchises(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/v1/franchises"))
        .respond_with(ResponseTemplate::new(200).set_body_json(franchises_body()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn oilers_team_body() -> serde_json::Value {
    serde_json::json!({
        "teams": [{
            "id": 22,
            "name": "Edmonton Oilers",
            "abbreviation": "EDM",
            "teamName": "Oilers",
            "shortName": "Edmonton",
            "locationName": "Edmonton",
            "franchiseId": 25,
            "active": true,
            "link": "/api/v1/teams/22",
            "firstYearOfPlay": "1979",
            "venue": { "id": 5100, "name": "Rogers Place", "city": "Edmonton" },
            "division": {
                "id": 15,
                "name": "Pacific",
                "link": "/api/v1/divisions/15"
            },
            "conference": {
                "id": 5,
                "name": "Western",
                "link": "/api/v1/conferences/5"
            },
            "franchise": {
                "franchiseId": 25,
                "teamName": "Oilers",
                "link": "/api/v1/franchises/25"
            },
            "officialSiteUrl": "http://www.edmontonoilers.com/"
        }]
    })
}

#[tokio::test]
async fn test_conferences_all() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/conferences"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "conferences": [
                { "id": 6, "name": "Eastern", "link": "/api/v1/conferences/6", "active": true },
                { "id": 5, "name": "Western", "link": "/api/v1/conferences/5", "active": true }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let conferences = client.conferences().await.unwrap();
    assert_eq!(conferences.len(), 2);
    assert_eq!(conferences[0].active, Some(true));
    assert_eq!(conferences[1].active, Some(true));
}

#[tokio::test]
async fn test_conference_by_id_has_absolute_link() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/conferences"))
        .and(query_param("conferenceId", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "conferences": [
                { "id": 6, "name": "Eastern", "link": "/api/v1/conferences/6" }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let eastern = client.conference_by_id(6).await.unwrap();
    assert_eq!(eastern.to_string(), "Eastern");
    assert_eq!(
        eastern.link,
        format!("{}/api/v1/conferences/6", server.uri())
    );
}

#[tokio::test]
async fn test_division_by_id_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/divisions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "divisions": []
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.division_by_id(0, &[]).await;
    assert!(matches!(
        result,
        Err(AppError::NotFound { entity: "division", .. })
    ));
}

#[tokio::test]
async fn test_division_by_id_passes_expand_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/divisions"))
        .and(query_param("divisionId", "15"))
        .and(query_param("expand", "division.conference"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "divisions": [{
                "id": 15,
                "name": "Pacific",
                "link": "/api/v1/divisions/15",
                "conference": { "id": 5, "name": "Western", "link": "/api/v1/conferences/5" }
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pacific = client
        .division_by_id(15, &["division.conference"])
        .await
        .unwrap();
    assert_eq!(pacific.name, "Pacific");
    assert!(pacific.conference.is_some());
}

#[tokio::test]
async fn test_franchises_are_fetched_once_and_cached() {
    let server = MockServer::start().await;
    mount_franchises(&server, 1).await;

    let client = client_for(&server);
    let all = client.franchises().await.unwrap();
    assert!(all.len() > 2);

    // Every one of these is served from the cache; the mock's expect(1)
    // fails on drop if another network call happens.
    let bruins = client.franchise_by_id(6).await.unwrap();
    assert_eq!(bruins.to_string(), "Boston Bruins");
    assert_eq!(bruins.first_season_id, 19241925);

    let rangers = client.franchise_by_name("Rangers").await.unwrap();
    assert_eq!(rangers.location, "New York");

    let edmonton = client.franchise_by_location("Edmonton").await.unwrap();
    assert_eq!(edmonton.len(), 1);
    assert_eq!(edmonton[0].team_name, "Oilers");
}

#[tokio::test]
async fn test_franchise_by_id_returns_shared_instance() {
    let server = MockServer::start().await;
    mount_franchises(&server, 1).await;

    let client = client_for(&server);
    // First call populates the cache, second is a pure lookup; both must
    // yield the identical shared instance, not merely equal values.
    let first = client.franchise_by_id(6).await.unwrap();
    let second = client.franchise_by_id(6).await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_franchise_by_id_not_found() {
    let server = MockServer::start().await;
    mount_franchises(&server, 1).await;

    let client = client_for(&server);
    for missing_id in [0, 9001] {
        let result = client.franchise_by_id(missing_id).await;
        assert!(matches!(
            result,
            Err(AppError::NotFound { entity: "franchise", .. })
        ));
    }
}

#[tokio::test]
async fn test_franchise_by_location_ignores_case_and_accents() {
    let server = MockServer::start().await;
    mount_franchises(&server, 1).await;

    let client = client_for(&server);
    let accented = client.franchise_by_location("montréal").await.unwrap();
    assert_eq!(accented.len(), 3);
    let mixed_case = client.franchise_by_location("montrEal").await.unwrap();
    assert_eq!(mixed_case.len(), 3);
}

#[tokio::test]
async fn test_franchise_by_location_no_match_is_empty() {
    let server = MockServer::start().await;
    mount_franchises(&server, 1).await;

    let client = client_for(&server);
    let result = client.franchise_by_location("Ecuador").await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_franchise_by_name_not_found() {
    let server = MockServer::start().await;
    mount_franchises(&server, 1).await;

    let client = client_for(&server);
    let result = client.franchise_by_name("Bitch Pigeons").await;
    assert!(matches!(
        result,
        Err(AppError::NotFound { entity: "franchise", .. })
    ));
}

#[tokio::test]
async fn test_franchise_links_are_absolute() {
    let server = MockServer::start().await;
    mount_franchises(&server, 1).await;

    let client = client_for(&server);
    let franchises = client.franchises().await.unwrap();
    for franchise in &franchises {
        assert!(
            franchise.link.starts_with(&server.uri()),
            "link {} should start with {}",
            franchise.link,
            server.uri()
        );
    }
}

#[tokio::test]
async fn test_team_franchise_is_not_duplicated() {
    let server = MockServer::start().await;
    mount_franchises(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams"))
        .and(query_param("teamId", "22"))
        .respond_with(ResponseTemplate::new(200).set_body_json(oilers_team_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let oilers_team = client.team_by_id(22, &[]).await.unwrap();
    let oilers_franchise = client.franchise_by_id(25).await.unwrap();

    assert_eq!(oilers_team.team_name, "Oilers");
    assert!(Arc::ptr_eq(
        oilers_team.franchise.as_ref().unwrap(),
        &oilers_franchise
    ));
}

#[tokio::test]
async fn test_team_lookup_triggers_franchise_population() {
    let server = MockServer::start().await;
    mount_franchises(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(oilers_team_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let teams = client.teams(&[]).await.unwrap();
    assert_eq!(teams.len(), 1);

    let franchise = teams[0].franchise.as_ref().unwrap();
    assert_eq!(franchise.to_string(), "Edmonton Oilers");
    // The cache filled as a side effect of the team lookup covers the
    // complete fields the inline payload lacked.
    assert_eq!(franchise.most_recent_team_id, 22);
}

#[tokio::test]
async fn test_team_links_are_absolute_including_nested() {
    let server = MockServer::start().await;
    mount_franchises(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(oilers_team_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let oilers = client.team_by_id(22, &[]).await.unwrap();

    assert_eq!(oilers.link, format!("{}/api/v1/teams/22", server.uri()));
    assert_eq!(
        oilers.division.link,
        format!("{}/api/v1/divisions/15", server.uri())
    );
    assert_eq!(
        oilers.conference.as_ref().unwrap().link,
        format!("{}/api/v1/conferences/5", server.uri())
    );
}

#[tokio::test]
async fn test_teams_by_season() {
    let server = MockServer::start().await;
    mount_franchises(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams"))
        .and(query_param("season", "20112012"))
        .respond_with(ResponseTemplate::new(200).set_body_json(oilers_team_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let teams = client.teams_by_season(20112012, &[]).await.unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].venue.as_ref().unwrap()["name"], "Rogers Place");
}

#[tokio::test]
async fn test_team_by_id_ambiguous_response_is_an_error() {
    let server = MockServer::start().await;
    let team = oilers_team_body()["teams"][0].clone();
    Mock::given(method("GET"))
        .and(path("/api/v1/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "teams": [team.clone(), team]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.team_by_id(22, &[]).await;
    assert!(matches!(
        result,
        Err(AppError::AmbiguousId { entity: "team", id: 22, count: 2 })
    ));
}

#[tokio::test]
async fn test_extra_field_on_typed_entity_is_schema_violation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/conferences"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "conferences": [{
                "id": 6,
                "name": "Eastern",
                "link": "/api/v1/conferences/6",
                "surprise": "field"
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.conferences().await;
    assert!(matches!(result, Err(AppError::SchemaViolation { .. })));
}

#[tokio::test]
async fn test_http_error_statuses_map_to_typed_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/conferences"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.conferences().await;
    assert!(matches!(
        result,
        Err(AppError::ApiServerError { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_concurrent_first_franchise_lookups_fetch_once() {
    let server = MockServer::start().await;
    mount_franchises(&server, 1).await;

    let client = Arc::new(client_for(&server));
    let lookups = (0..8).map(|_| {
        let client = Arc::clone(&client);
        tokio::spawn(async move { client.franchise_by_id(6).await })
    });

    for handle in lookups {
        let franchise = handle.await.unwrap().unwrap();
        assert_eq!(franchise.team_name, "Bruins");
    }
}
