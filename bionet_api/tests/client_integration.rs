use bionet_api::types::FaunaGroup;
use bionet_api::{Client, Error, Query, SightingQuery};
use wiremock::matchers::{basic_auth, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_sightings_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("sightings.json");

    Mock::given(method("GET"))
        .and(path("/SpeciesSightings_CoreData"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let records = client
        .get_sightings(&SightingQuery::default())
        .await
        .unwrap();

    // Response order is preserved.
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].scientific_name, "Petaurus breviceps");
    assert_eq!(records[1].scientific_name, "Phascolarctos cinereus");
    assert_eq!(records[2].scientific_name, "Pteropus poliocephalus");
    assert_eq!(records[1].bc_act_status.as_deref(), Some("Endangered"));
}

#[tokio::test]
async fn get_sightings_sends_odata_params() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("sightings.json");

    Mock::given(method("GET"))
        .and(path("/SpeciesSightings_CoreData"))
        .and(query_param("$filter", "Class eq 'Mammalia'"))
        .and(query_param("$top", "10"))
        .and(query_param(
            "$select",
            "ScientificName,CommonName,Class,BCActStatus,EPBCActStatus,DateFirst,DateLast,Latitude_GDA94,Longitude_GDA94",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = SightingQuery::default()
        .with_group(FaunaGroup::Mammals)
        .with_max_records(10);
    let result = client.get_sightings(&query).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn get_sightings_truncates_to_max_records() {
    let mock_server = MockServer::start().await;
    // The fixture holds three records; a server ignoring $top must not leak
    // more than the requested limit to the caller.
    let body = load_fixture("sightings.json");

    Mock::given(method("GET"))
        .and(path("/SpeciesSightings_CoreData"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = SightingQuery::default().with_max_records(2);
    let records = client.get_sightings(&query).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].scientific_name, "Petaurus breviceps");
}

#[tokio::test]
async fn get_sightings_empty_result() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("sightings_empty.json");

    Mock::given(method("GET"))
        .and(path("/SpeciesSightings_CoreData"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let records = client
        .get_sightings(&SightingQuery::default())
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn get_sightings_rejects_nonpositive_limit_before_any_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = SightingQuery::default().with_max_records(0);
    let result = client.get_sightings(&query).await;
    assert!(matches!(result, Err(Error::InvalidQuery(_))));
}

#[tokio::test]
async fn get_sightings_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SpeciesSightings_CoreData"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_sightings(&SightingQuery::default()).await;
    assert!(matches!(
        result,
        Err(Error::HttpStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn get_sightings_server_error_with_oversized_multibyte_body() {
    let mock_server = MockServer::start().await;
    // A body longer than the logged snippet limit, with a two-byte character
    // straddling the cutoff. Must still surface as HttpStatus, not a panic.
    let body = format!("{}é{}", "x".repeat(1999), "y".repeat(100));

    Mock::given(method("GET"))
        .and(path("/SpeciesSightings_CoreData"))
        .respond_with(ResponseTemplate::new(500).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_sightings(&SightingQuery::default()).await;
    match result {
        Err(Error::HttpStatus { status: 500, body }) => {
            assert!(body.ends_with("...[truncated]"));
        }
        other => panic!("expected HttpStatus error, got {:?}", other.map(|r| r.len())),
    }
}

#[tokio::test]
async fn get_sightings_unreachable_host() {
    // Nothing listens on port 1; the connect failure must map to RequestFailed.
    let client = Client::with_base_url("http://127.0.0.1:1");
    let result = client.get_sightings(&SightingQuery::default()).await;
    assert!(matches!(result, Err(Error::RequestFailed)));
}

#[tokio::test]
async fn get_sightings_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SpeciesSightings_CoreData"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_sightings(&SightingQuery::default()).await;
    assert!(matches!(result, Err(Error::UnexpectedResponse)));
}

#[tokio::test]
async fn get_sightings_missing_value_key() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("missing_value.json");

    Mock::given(method("GET"))
        .and(path("/SpeciesSightings_CoreData"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_sightings(&SightingQuery::default()).await;
    assert!(matches!(result, Err(Error::UnexpectedResponse)));
}

#[tokio::test]
async fn get_sightings_sends_basic_auth() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("sightings.json");

    Mock::given(method("GET"))
        .and(path("/SpeciesSightings_CoreData"))
        .and(basic_auth("licensed", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client =
        Client::with_base_url(&mock_server.uri()).with_credentials("licensed", "secret");
    let result = client.get_sightings(&SightingQuery::default()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn ping_success() {
    let mock_server = MockServer::start().await;
    // The probe only selects ScientificName, so that is all it gets back.
    let body = load_fixture("ping.json");

    Mock::given(method("GET"))
        .and(path("/SpeciesSightings_CoreData"))
        .and(query_param("$top", "1"))
        .and(query_param("$select", "ScientificName"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    assert!(client.ping().await.is_ok());
}

#[tokio::test]
async fn ping_unreachable_service() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SpeciesSightings_CoreData"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    assert!(matches!(
        client.ping().await,
        Err(Error::HttpStatus { status: 503, .. })
    ));
}
