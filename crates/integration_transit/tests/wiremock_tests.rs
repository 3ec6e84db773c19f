//! Integration tests for the geocoding and transit clients (wiremock-based)

use std::time::Duration;

use domain::value_objects::{Coordinates, WheelchairBoarding};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_transit::{
    FetchError, GeocodingClient, GeocodingConfig, GeocodingError, MapboxGeocodingClient,
    MbtaTransitClient, TransitClient, TransitConfig, TransitError,
};

fn geocoding_for_mock(base_url: &str) -> GeocodingConfig {
    GeocodingConfig::for_testing(&format!("{base_url}/places"))
}

fn transit_for_mock(base_url: &str) -> TransitConfig {
    TransitConfig::for_testing(&format!("{base_url}/stops"))
}

fn boston_common() -> Coordinates {
    Coordinates::new("42.3551", "-71.0656").unwrap()
}

const fn sample_features_json() -> &'static str {
    r#"{
        "type": "FeatureCollection",
        "features": [{
            "id": "poi.1",
            "place_name": "Boston Common, Boston, Massachusetts 02108, United States",
            "geometry": { "type": "Point", "coordinates": [-71.0656, 42.3551] }
        }]
    }"#
}

const fn sample_stops_json() -> &'static str {
    r#"{
        "data": [
            {
                "id": "place-pktrm",
                "type": "stop",
                "attributes": { "name": "Park Street", "wheelchair_boarding": 1 }
            },
            {
                "id": "place-boyls",
                "type": "stop",
                "attributes": { "name": "Boylston", "wheelchair_boarding": 2 }
            }
        ]
    }"#
}

// ---- geocoding ----

#[tokio::test]
async fn test_resolve_place_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/Boston%20Common.json"))
        .and(query_param("access_token", "test-token"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_features_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = MapboxGeocodingClient::new(&geocoding_for_mock(&server.uri())).unwrap();
    let coords = client.resolve_place("Boston Common").await.unwrap();

    assert_eq!(coords.latitude(), "42.3551");
    assert_eq!(coords.longitude(), "-71.0656");
}

#[tokio::test]
async fn test_resolve_place_sends_one_encoded_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/Tremont%20St%3B%20Boston%20%26%20Co%2B1.json"))
        .and(query_param("access_token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_features_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = MapboxGeocodingClient::new(&geocoding_for_mock(&server.uri())).unwrap();
    let coords = client.resolve_place("Tremont St; Boston & Co+1").await.unwrap();

    assert_eq!(coords.latitude(), "42.3551");
}

#[tokio::test]
async fn test_resolve_place_no_features() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"features": []}"#))
        .mount(&server)
        .await;

    let client = MapboxGeocodingClient::new(&geocoding_for_mock(&server.uri())).unwrap();
    let err = client
        .resolve_place("Nonexistent Place XYZ")
        .await
        .unwrap_err();

    assert!(matches!(err, GeocodingError::NotFound(_)));
    assert_eq!(err.to_string(), "no location found for Nonexistent Place XYZ");
}

#[tokio::test]
async fn test_resolve_place_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = MapboxGeocodingClient::new(&geocoding_for_mock(&server.uri())).unwrap();
    let err = client.resolve_place("Boston Common").await.unwrap_err();

    assert!(matches!(
        err,
        GeocodingError::Fetch(FetchError::Status(500))
    ));
}

#[tokio::test]
async fn test_resolve_place_invalid_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = MapboxGeocodingClient::new(&geocoding_for_mock(&server.uri())).unwrap();
    let err = client.resolve_place("Boston Common").await.unwrap_err();

    assert!(matches!(err, GeocodingError::Fetch(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_resolve_place_without_token_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_features_json()))
        .expect(0)
        .mount(&server)
        .await;

    let config = GeocodingConfig {
        access_token: String::new(),
        ..geocoding_for_mock(&server.uri())
    };
    let client = MapboxGeocodingClient::new(&config).unwrap();
    let err = client.resolve_place("Boston Common").await.unwrap_err();

    assert!(matches!(err, GeocodingError::Configuration(_)));
}

#[tokio::test]
async fn test_resolve_place_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sample_features_json())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = GeocodingConfig {
        timeout_secs: 1,
        ..geocoding_for_mock(&server.uri())
    };
    let client = MapboxGeocodingClient::new(&config).unwrap();
    let err = client.resolve_place("Boston Common").await.unwrap_err();

    assert!(matches!(
        err,
        GeocodingError::Fetch(FetchError::Timeout { timeout_secs: 1 })
    ));
}

// ---- nearest stop ----

#[tokio::test]
async fn test_nearest_stop_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("sort", "distance"))
        .and(query_param("filter[latitude]", "42.3551"))
        .and(query_param("filter[longitude]", "-71.0656"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_stops_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = MbtaTransitClient::new(&transit_for_mock(&server.uri())).unwrap();
    let stop = client.nearest_stop(&boston_common()).await.unwrap();

    assert_eq!(stop.stop_name(), "Park Street");
    assert!(stop.wheelchair_accessible());
    assert_eq!(stop.wheelchair_boarding(), WheelchairBoarding::Accessible);
}

#[tokio::test]
async fn test_nearest_stop_not_accessible() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data": [{"attributes": {"name": "Boylston", "wheelchair_boarding": 2}}]}"#,
        ))
        .mount(&server)
        .await;

    let client = MbtaTransitClient::new(&transit_for_mock(&server.uri())).unwrap();
    let stop = client.nearest_stop(&boston_common()).await.unwrap();

    assert_eq!(stop.stop_name(), "Boylston");
    assert!(!stop.wheelchair_accessible());
    assert_eq!(stop.wheelchair_boarding(), WheelchairBoarding::NotAccessible);
}

#[tokio::test]
async fn test_nearest_stop_empty_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": []}"#))
        .mount(&server)
        .await;

    let client = MbtaTransitClient::new(&transit_for_mock(&server.uri())).unwrap();
    let err = client.nearest_stop(&boston_common()).await.unwrap_err();

    assert!(matches!(err, TransitError::NotFound(_)));
    assert_eq!(err.to_string(), "no stations found near 42.3551,-71.0656");
}

#[tokio::test]
async fn test_nearest_stop_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = MbtaTransitClient::new(&transit_for_mock(&server.uri())).unwrap();
    let err = client.nearest_stop(&boston_common()).await.unwrap_err();

    assert!(matches!(err, TransitError::Fetch(FetchError::Status(503))));
}

#[tokio::test]
async fn test_nearest_stop_connection_refused() {
    // nothing listens on port 1
    let client = MbtaTransitClient::new(&TransitConfig::for_testing(
        "http://127.0.0.1:1/stops",
    ))
    .unwrap();
    let err = client.nearest_stop(&boston_common()).await.unwrap_err();

    assert!(matches!(err, TransitError::Fetch(FetchError::Connection(_))));
    assert!(!err.to_string().contains("test-key"));
}
