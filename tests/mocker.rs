//! End-to-end behaviour of the mocker through its public API.

use serde_json::json;

use response_mocker::{
    HttpClient, MockError, RequestOptions, ResponseMocker, ResponseRecord, ResponseSpec,
    StatusCode,
};

const RIDES: &str = "https://giant.balloon.com/rides";
const ORANGES: &str = "https://oranges.org/squeeze_orange";

/// Production-style code that only knows about the client port.
fn fetch_page<C: HttpClient>(client: &mut C, page: &str) -> Result<serde_json::Value, MockError> {
    let response = client.get(RIDES, RequestOptions::new().param("page", page))?;
    response.raise_for_status()?;
    Ok(response.json())
}

fn history_urls(mocker: &ResponseMocker) -> Vec<String> {
    mocker.history().iter().map(|r| r.url().to_string()).collect()
}

#[test]
fn same_url_different_params_is_not_ambiguous() {
    let mut mocker = ResponseMocker::new();
    let page = |n: &str| ResponseSpec::new(RIDES, 200, ["get"]).json(json!({"page": n}));
    mocker.register_response(page("1")).unwrap();
    mocker.register_response(page("2").param("page", "2")).unwrap();
    mocker.register_response(page("3").param("page", "3")).unwrap();

    let mut results = Vec::new();
    results.push(mocker.get(RIDES, RequestOptions::new()).unwrap().json());
    results.push(mocker.get(RIDES, RequestOptions::new().param("page", "2")).unwrap().json());
    results.push(mocker.get(RIDES, RequestOptions::new().param("page", "3")).unwrap().json());
    results.push(mocker.get(&format!("{RIDES}?page=2"), RequestOptions::new()).unwrap().json());
    results.push(mocker.get(&format!("{RIDES}?page=3"), RequestOptions::new()).unwrap().json());

    assert_eq!(
        results,
        vec![
            json!({"page": "1"}),
            json!({"page": "2"}),
            json!({"page": "3"}),
            json!({"page": "2"}),
            json!({"page": "3"}),
        ]
    );
}

#[test]
fn registered_query_string_matches_explicit_params() {
    let mut mocker = ResponseMocker::new();
    let spec = ResponseSpec::new(format!("{RIDES}?time=now"), 200, ["get"])
        .json(json!("Sorry, tickets are sold out."));
    mocker.register_response(spec).unwrap();

    let response = mocker.get(RIDES, RequestOptions::new().param("time", "now")).unwrap();
    assert_eq!(response.json(), json!("Sorry, tickets are sold out."));
    assert_eq!(response.url(), format!("{RIDES}?time=now"));
    assert_eq!(response.status_code(), &StatusCode::Code(200));
}

#[test]
fn post_keeps_request_headers_and_payload() {
    let mut mocker = ResponseMocker::new();
    let spec = ResponseSpec::new(ORANGES, 201, ["post"]).json(json!("Success."));
    mocker.register_response(spec).unwrap();

    let options = RequestOptions::new()
        .header("orange_type", "California")
        .payload(json!({"squeeze_level": 5}));
    let response = mocker.post(ORANGES, options).unwrap();

    assert_eq!(response.json(), json!("Success."));
    assert_eq!(response.url(), ORANGES);
    let request = response.request();
    assert_eq!(request.headers().get("orange_type").map(String::as_str), Some("California"));
    assert_eq!(request.payload(), Some(&json!({"squeeze_level": 5})));
}

#[test]
fn cannot_alter_responses_via_reference() {
    let mut mocker = ResponseMocker::new();
    let expected = json!({
        "things": "stuff",
        "words": "series of letters",
        "login_date": "today",
        "login_token": "abcd",
        "nested": {"roles": ["admin"]},
    });
    let spec = ResponseSpec::new(ORANGES, 201, ["post"]).json(expected.clone());
    mocker.register_response(spec).unwrap();

    let response = mocker.post(ORANGES, RequestOptions::new()).unwrap();
    let mut first = response.json();
    let object = first.as_object_mut().unwrap();
    object.remove("things");
    object.remove("login_token");
    object.remove("login_date");
    first["nested"]["roles"].as_array_mut().unwrap().clear();

    assert_ne!(first, response.json());
    assert_eq!(response.json(), expected);

    let again = mocker.post(ORANGES, RequestOptions::new()).unwrap();
    assert_eq!(again.json(), expected);
    assert_eq!(mocker.responses()[0].decoded_json, expected);
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut mocker = ResponseMocker::new();
    mocker.register_response(ResponseSpec::new("hi.bob", "999", ["bang", "boom"])).unwrap();

    let err = mocker.register_response(ResponseSpec::new("hi.bob", "777", ["bang"])).unwrap_err();
    assert!(matches!(err, MockError::DuplicateRegistration { .. }));

    mocker.register_response(ResponseSpec::new("hi.bob", "777", ["bang"]).param("a", "1")).unwrap();
    mocker.register_response(ResponseSpec::new("hi.bill", "999", ["bang"])).unwrap();
    assert_eq!(mocker.responses().len(), 3);
}

#[test]
fn unregistered_url_names_the_request() {
    let mut mocker = ResponseMocker::new();
    let err = mocker.get(RIDES, RequestOptions::new().param("time", "now")).unwrap_err();
    assert!(matches!(err, MockError::UnregisteredUrl { .. }));
    assert_eq!(err.message(), format!("No response registered for get {RIDES}?time=now"));
}

#[test]
fn force_inserted_duplicate_is_ambiguous() {
    let mut mocker = ResponseMocker::new();
    let spec = ResponseSpec::new(RIDES, 500, ["get"]);
    mocker.register_response(spec.clone()).unwrap();
    mocker.force_register(spec);

    let err = mocker.get(RIDES, RequestOptions::new()).unwrap_err();
    assert!(matches!(err, MockError::AmbiguousUrlMatch { .. }));
    assert!(err.message().contains(RIDES));
    assert!(mocker.history().is_empty());
}

#[test]
fn raise_for_status_reports_request_and_response() {
    let mut mocker = ResponseMocker::new();
    let url = format!("{RIDES}?time=now");
    mocker.register_response(ResponseSpec::new(url.as_str(), 500, ["get"])).unwrap();
    mocker.register_response(ResponseSpec::new(ORANGES, 404, ["get"])).unwrap();

    let err = mocker.get(&url, RequestOptions::new()).unwrap().raise_for_status().unwrap_err();
    assert!(err.message().contains("500"));
    assert!(err.message().contains(&url));
    assert_eq!(err.request().url(), RIDES);
    assert_eq!(err.response().status_code(), &StatusCode::Code(500));

    let not_found = mocker.get(ORANGES, RequestOptions::new()).unwrap();
    assert!(not_found.raise_for_status().is_err());
}

#[test]
fn success_statuses_do_not_raise() {
    let mut mocker = ResponseMocker::new();
    mocker.register_response(ResponseSpec::new(RIDES, 200, ["get"])).unwrap();
    mocker.register_response(ResponseSpec::new(RIDES, 201, ["post"])).unwrap();
    assert!(mocker.get(RIDES, RequestOptions::new()).unwrap().raise_for_status().is_ok());
    assert!(mocker.post(RIDES, RequestOptions::new()).unwrap().raise_for_status().is_ok());
}

#[test]
fn history_keeps_last_n_in_dispatch_order() {
    let mut mocker = ResponseMocker::with_q_depth(5);
    let rides_now = format!("{RIDES}?time=now");
    let sold_out = json!("Sorry, tickets are sold out.");
    let spec = ResponseSpec::new(rides_now.as_str(), 200, ["get"]).json(sold_out);
    mocker.register_response(spec).unwrap();
    mocker.register_response(ResponseSpec::new("2", "666", ["post"])).unwrap();

    for _ in 0..5 {
        mocker.get(RIDES, RequestOptions::new().param("time", "now")).unwrap();
    }
    assert_eq!(history_urls(&mocker), vec![rides_now.clone(); 5]);

    mocker.post("2", RequestOptions::new().payload(json!({"ninjas": "best"}))).unwrap();
    let mut expected = vec![rides_now; 4];
    expected.push("2".to_string());
    assert_eq!(history_urls(&mocker), expected);

    for _ in 0..4 {
        mocker.post("2", RequestOptions::new().payload(json!({"ninjas": "best"}))).unwrap();
    }
    assert_eq!(history_urls(&mocker), vec!["2".to_string(); 5]);
}

#[test]
fn history_entries_are_distinct_requests() {
    let mut mocker = ResponseMocker::with_q_depth(3);
    mocker.register_response(ResponseSpec::new(RIDES, 200, ["get"])).unwrap();
    let first = mocker.get(RIDES, RequestOptions::new()).unwrap();
    let second = mocker.get(RIDES, RequestOptions::new()).unwrap();

    let history: Vec<ResponseRecord> = mocker.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].request().id(), first.request().id());
    assert_eq!(history[1].request().id(), second.request().id());
    assert_ne!(first.request().id(), second.request().id());
}

#[test]
fn code_under_test_can_take_the_mocker_as_its_client() {
    let mut mocker = ResponseMocker::new();
    let spec = ResponseSpec::new(RIDES, 200, ["get"]).param("page", "2").json(json!([1, 2]));
    mocker.register_response(spec).unwrap();
    mocker.register_response(ResponseSpec::new(RIDES, 503, ["get"]).param("page", "3")).unwrap();

    assert_eq!(fetch_page(&mut mocker, "2").unwrap(), json!([1, 2]));
    assert!(matches!(fetch_page(&mut mocker, "3"), Err(MockError::Http(_))));
    assert!(matches!(fetch_page(&mut mocker, "4"), Err(MockError::UnregisteredUrl { .. })));
}

#[test]
fn list_params_match_regardless_of_key_order() {
    let mut mocker = ResponseMocker::new();
    let spec = ResponseSpec::new(RIDES, 200, ["get"])
        .param("a", "1")
        .param("c", ["4", "5"])
        .json(json!("listed"));
    mocker.register_response(spec).unwrap();

    let response = mocker.get(&format!("{RIDES}?c=4&c=5&a=1"), RequestOptions::new()).unwrap();
    assert_eq!(response.json(), json!("listed"));

    let reordered = mocker.get(&format!("{RIDES}?c=5&c=4&a=1"), RequestOptions::new());
    assert!(matches!(reordered, Err(MockError::UnregisteredUrl { .. })));
}

#[test]
fn transcript_round_trips_history() {
    let dir = std::env::temp_dir().join("response_mocker_integration_transcript");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("history.yaml");

    let mut mocker = ResponseMocker::new();
    let spec = ResponseSpec::new(ORANGES, 201, ["post"]).json(json!({"ok": true}));
    mocker.register_response(spec).unwrap();
    mocker.post(ORANGES, RequestOptions::new().payload(json!({"squeeze_level": 5}))).unwrap();

    mocker.write_transcript(&path, "oranges").unwrap();
    let transcript = response_mocker::Transcript::load(&path).unwrap();
    assert_eq!(transcript.name, "oranges");
    assert_eq!(transcript.exchanges.len(), 1);
    assert_eq!(transcript.exchanges[0].response, mocker.history()[0]);

    let _ = std::fs::remove_dir_all(&dir);
}
