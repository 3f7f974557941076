//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results or error messages. Comparing parsed JSON (not
//! raw strings) avoids false negatives from field-ordering differences.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde_json::Value;
use todo_core::{
    ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, Todo, TodoClient, TodoId,
    UpdateTodo,
};

const BASE_URL: &str = "http://127.0.0.1:8000";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn input_id(case: &Value) -> TodoId {
    TodoId::from(case["input_id"].as_str().unwrap())
}

fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    if let Some(headers) = expected.get("headers") {
        let expected_headers: Vec<(String, String)> =
            serde_json::from_value(headers.clone()).unwrap();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }

    match expected.get("body") {
        Some(body) => {
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

fn check_outcome<T>(name: &str, case: &Value, result: Result<T, ApiError>)
where
    T: DeserializeOwned + PartialEq + Debug,
{
    match case.get("expected_error") {
        Some(message) => {
            let err = result.unwrap_err();
            assert_eq!(err.to_string(), message.as_str().unwrap(), "{name}: error");
        }
        None => {
            let value = result.unwrap();
            if let Some(expected) = case.get("expected_result") {
                let expected: T = serde_json::from_value(expected.clone()).unwrap();
                assert_eq!(value, expected, "{name}: parsed result");
            }
        }
    }
}

#[test]
fn list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        check_request(name, &c.build_list_todos(), &case["expected_request"]);
        check_outcome::<Vec<Todo>>(name, &case, c.parse_list_todos(simulated(&case)));
    }
}

#[test]
fn get_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();
        check_request(name, &c.build_get_todo(&input_id(&case)), &case["expected_request"]);
        check_outcome::<Todo>(name, &case, c.parse_get_todo(simulated(&case)));
    }
}

#[test]
fn create_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: CreateTodo = serde_json::from_value(case["input"].clone()).unwrap();
        check_request(name, &c.build_create_todo(&input).unwrap(), &case["expected_request"]);
        check_outcome::<Todo>(name, &case, c.parse_create_todo(simulated(&case)));
    }
}

#[test]
fn update_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let input: UpdateTodo = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_update_todo(&input_id(&case), &input).unwrap();
        check_request(name, &req, &case["expected_request"]);
        check_outcome::<Todo>(name, &case, c.parse_update_todo(simulated(&case)));
    }
}

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        check_request(name, &c.build_delete_todo(&input_id(&case)), &case["expected_request"]);
        check_outcome::<()>(name, &case, c.parse_delete_todo(simulated(&case)));
    }
}
