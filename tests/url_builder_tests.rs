//! Integration tests for URL construction through the public API.

use chrono::{TimeZone, Utc};
use hubspot_legacy::clients::{build_url, Connection, HttpError, Params, UrlOptions};
use hubspot_legacy::{AccessToken, ApiKey, BaseUrl, ConfigError, HubspotConfig, PortalId};

fn demo_config() -> HubspotConfig {
    HubspotConfig::builder()
        .api_key(ApiKey::new("demo").unwrap())
        .portal_id(PortalId::from(62515))
        .build()
        .unwrap()
}

#[test]
fn test_contact_profile_urls() {
    let config = demo_config();

    assert_eq!(
        build_url(
            &config,
            "/test/:portal_id/profile",
            &Params::new(),
            &UrlOptions::new()
        )
        .unwrap(),
        "https://api.hubapi.com/test/62515/profile?hapikey=demo"
    );

    let params = Params::new().with("email", "email@address.com");
    assert_eq!(
        build_url(&config, "/test/:email/profile", &params, &UrlOptions::new()).unwrap(),
        "https://api.hubapi.com/test/email%40address.com/profile?hapikey=demo"
    );
}

#[test]
fn test_time_range_query() {
    let start = Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2014, 1, 2, 0, 0, 0).unwrap();
    let params = Params::new().with("created__range", start..end);

    let url = build_url(&demo_config(), "/test", &params, &UrlOptions::new()).unwrap();

    assert_eq!(
        url,
        "https://api.hubapi.com/test?created__range=1388534400000&created__range=1388620800000&hapikey=demo"
    );
}

#[test]
fn test_sub_second_precision_is_dropped() {
    let time = Utc.timestamp_opt(1_388_534_400, 750_000_000).unwrap();
    let params = Params::new().with("since", time);

    let url = build_url(&demo_config(), "/test", &params, &UrlOptions::new()).unwrap();

    assert_eq!(
        url,
        "https://api.hubapi.com/test?since=1388534400000&hapikey=demo"
    );
}

#[test]
fn test_batch_list_ids() {
    let params = Params::new().with("batch_list_id", vec![1, 2, 3]);

    let url = build_url(&demo_config(), "/test", &params, &UrlOptions::new()).unwrap();

    assert_eq!(
        url,
        "https://api.hubapi.com/test?listId=1&listId=2&listId=3&hapikey=demo"
    );
}

#[test]
fn test_base_url_override_without_api_key() {
    let options = UrlOptions::new()
        .base_url(BaseUrl::new("https://cool.com").unwrap())
        .without_api_key();

    let url = build_url(&demo_config(), "/test", &Params::new(), &options).unwrap();

    assert_eq!(url, "https://cool.com/test");
}

#[test]
fn test_api_key_required_even_when_suppressed() {
    let config = HubspotConfig::builder().build().unwrap();
    let options = UrlOptions::new().without_api_key();

    let result = build_url(&config, "/test", &Params::new(), &options);

    assert!(matches!(
        result,
        Err(HttpError::Config(ConfigError::MissingSetting { setting: "hapikey" }))
    ));
}

#[test]
fn test_access_token_needs_no_api_key() {
    let config = HubspotConfig::builder()
        .access_token(AccessToken::new("oauth-token").unwrap())
        .build()
        .unwrap();

    let url = build_url(&config, "/test", &Params::new(), &UrlOptions::new()).unwrap();

    assert_eq!(url, "https://api.hubapi.com/test");
}

#[test]
fn test_connection_url_for_matches_build_url() {
    let config = demo_config();
    let connection = Connection::new(config.clone()).unwrap();
    let params = Params::new()
        .with("form_guid", "abc")
        .with("property", vec!["firstname", "lastname"]);

    assert_eq!(
        connection
            .url_for("/forms/v2/forms/:form_guid", &params)
            .unwrap(),
        build_url(
            &config,
            "/forms/v2/forms/:form_guid",
            &params,
            &UrlOptions::new()
        )
        .unwrap()
    );
    assert_eq!(
        connection
            .url_for("/forms/v2/forms/:form_guid", &params)
            .unwrap(),
        "https://api.hubapi.com/forms/v2/forms/abc?property=firstname&property=lastname&hapikey=demo"
    );
}
