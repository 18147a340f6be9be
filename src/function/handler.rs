//! Serverless HTTP event handler.
//!
//! Stateless mapping from a cloud-function event to a canned
//! per-domain chatbot response. Handles CORS preflight, base64 body
//! decoding, domain routing, a health/status payload, and a 404
//! catalogue of known endpoints. All failures are caught at the top
//! level and returned as a 500 with debug-gated detail.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use serde_json::{json, Value};

use super::event::{FunctionEvent, FunctionResponse};
use crate::core::config::debug_enabled;
use crate::core::errors::ApiError;

const VERSION: &str = "1.0.0";

/// Chatbot domains with canned responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Domain {
    Medical,
    Education,
    General,
}

impl Domain {
    fn type_name(&self) -> &'static str {
        match self {
            Domain::Medical => "medical",
            Domain::Education => "education",
            Domain::General => "general",
        }
    }
}

/// Known route keys in match priority order. Aliases map onto the
/// three canned domains.
const ROUTES: &[(&str, Domain)] = &[
    ("medical", Domain::Medical),
    ("education", Domain::Education),
    ("general", Domain::General),
    ("mental_health", Domain::Medical),
    ("finance", Domain::General),
    ("legal", Domain::General),
    ("career", Domain::General),
    ("developer", Domain::General),
    ("entertainment", Domain::General),
];

fn cors_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Methods".to_string(),
            "GET, POST, PUT, DELETE, OPTIONS".to_string(),
        ),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type, Authorization, X-Requested-With".to_string(),
        ),
        ("Access-Control-Max-Age".to_string(), "86400".to_string()),
        ("Content-Type".to_string(), "application/json".to_string()),
    ])
}

fn create_response(status_code: u16, body: Value) -> FunctionResponse {
    FunctionResponse {
        status_code,
        headers: cors_headers(),
        body: body.to_string(),
    }
}

/// Handle one function event. Never panics; any internal error becomes
/// a 500 response with detail gated behind the DEBUG flag.
pub fn handle_event(event: &FunctionEvent) -> FunctionResponse {
    match route_event(event) {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("Function handler error: {}", err);
            error_response(&anyhow::Error::new(err), debug_enabled())
        }
    }
}

fn route_event(event: &FunctionEvent) -> Result<FunctionResponse, ApiError> {
    tracing::debug!(
        method = %event.http_method,
        path = %event.path,
        raw_path = event.raw_path.as_deref().unwrap_or(""),
        "Handling function event"
    );

    // CORS preflight
    if event.http_method == "OPTIONS" {
        return Ok(create_response(
            200,
            json!({ "message": "CORS preflight successful" }),
        ));
    }

    let body = parse_body(event);
    let path = event.path.to_lowercase();
    let raw_path = event
        .raw_path
        .as_deref()
        .unwrap_or(&event.path)
        .to_lowercase();

    let route = ROUTES
        .iter()
        .find(|(key, _)| path.contains(key) || raw_path.contains(key));

    if let Some((_, domain)) = route {
        if event.http_method == "POST" {
            let message = body
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("No message provided");
            return Ok(create_response(
                200,
                canned_response(*domain, message, event.request_id.as_deref()),
            ));
        }
    }

    if event.http_method == "GET" || path.ends_with("/api") || path.contains("health") {
        return Ok(create_response(
            200,
            json!({
                "status": "✅ Multi-Chatbot Platform API Online!",
                "message": "All chatbot endpoints operational",
                "endpoints": endpoint_names(),
                "version": VERSION,
                "timestamp": Utc::now().to_rfc3339(),
                "debug": {
                    "path": event.path,
                    "raw_path": event.raw_path,
                    "method": event.http_method,
                    "detected_route": route.map(|(key, _)| *key),
                },
            }),
        ));
    }

    Ok(create_response(
        404,
        json!({
            "error": "Endpoint not found",
            "available_endpoints": endpoint_names(),
            "requested_path": event.path,
            "raw_path": event.raw_path,
            "method": event.http_method,
            "help": "POST to /api/{endpoint} with JSON body containing 'message' field",
        }),
    ))
}

/// Build a 500 response. The error message is always included; the
/// full error chain only when the debug flag is set.
pub fn error_response(err: &anyhow::Error, debug: bool) -> FunctionResponse {
    let detail = if debug {
        format!("{:#}", err)
    } else {
        "Enable DEBUG for error detail".to_string()
    };

    create_response(
        500,
        json!({
            "success": false,
            "error": "Internal server error",
            "message": err.to_string(),
            "detail": detail,
        }),
    )
}

/// Decode and parse the event body. A body that is not valid JSON is
/// wrapped as a raw passthrough record, never rejected.
fn parse_body(event: &FunctionEvent) -> Value {
    let raw = match event.body.as_deref() {
        Some(raw) if !raw.is_empty() => raw,
        _ => return json!({}),
    };

    let decoded = if event.is_base64_encoded {
        match BASE64
            .decode(raw)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
        {
            Some(text) => text,
            None => {
                tracing::warn!("Failed to base64-decode event body");
                return json!({ "raw": raw });
            }
        }
    } else {
        raw.to_string()
    };

    serde_json::from_str(&decoded).unwrap_or_else(|_| json!({ "raw": raw }))
}

fn endpoint_names() -> Vec<&'static str> {
    ROUTES.iter().map(|(key, _)| *key).collect()
}

fn canned_response(domain: Domain, message: &str, request_id: Option<&str>) -> Value {
    let response = match domain {
        Domain::Medical => format!(
            "🏥 **Medical AI Response**\n\nThank you for your medical question: *\"{message}\"*\n\n\
             I'm here to provide general health information. Please note:\n\n\
             - This is **not medical advice**\n\
             - Always consult healthcare professionals\n\
             - For emergencies, call emergency services\n\n\
             How else can I help with your health questions?"
        ),
        Domain::Education => format!(
            "📚 **Education AI Response**\n\nGreat question: *\"{message}\"*\n\n\
             I'm here to help you learn! Here are some key points:\n\n\
             - **Learning is a journey** - take it step by step\n\
             - **Practice makes perfect** - apply what you learn\n\
             - **Stay curious** - ask more questions!\n\n\
             What else would you like to explore together?"
        ),
        Domain::General => format!(
            "🤖 **General AI Response**\n\nHello! You said: *\"{message}\"*\n\n\
             I'm here to help with:\n\n\
             - **General questions** and conversations\n\
             - **Problem-solving** assistance\n\
             - **Information** and explanations\n\
             - **Creative tasks** and brainstorming\n\n\
             What would you like to discuss next?"
        ),
    };

    json!({
        "response": response,
        "status": "success",
        "type": domain.type_name(),
        "request_id": request_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(method: &str, path: &str, body: Option<&str>) -> FunctionEvent {
        FunctionEvent {
            http_method: method.to_string(),
            path: path.to_string(),
            raw_path: None,
            body: body.map(str::to_string),
            is_base64_encoded: false,
            request_id: Some("req-1".to_string()),
        }
    }

    fn body_json(response: &FunctionResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn options_returns_cors_headers_regardless_of_path() {
        for path in ["/", "/api/medical", "/nowhere"] {
            let response = handle_event(&event("OPTIONS", path, None));
            assert_eq!(response.status_code, 200);
            assert_eq!(
                response.headers.get("Access-Control-Allow-Origin"),
                Some(&"*".to_string())
            );
        }
    }

    #[test]
    fn post_to_medical_returns_medical_canned_response() {
        let response = handle_event(&event(
            "POST",
            "/api/medical",
            Some(r#"{"message": "I have a headache"}"#),
        ));
        assert_eq!(response.status_code, 200);

        let body = body_json(&response);
        assert_eq!(body["status"], "success");
        assert_eq!(body["type"], "medical");
        assert!(body["response"]
            .as_str()
            .unwrap()
            .contains("I have a headache"));
        assert!(body["response"].as_str().unwrap().contains("Medical"));
    }

    #[test]
    fn mental_health_routes_to_medical_domain() {
        let response = handle_event(&event(
            "POST",
            "/api/mental_health",
            Some(r#"{"message": "stress"}"#),
        ));

        let body = body_json(&response);
        assert_eq!(body["type"], "medical");
        assert!(body["response"].as_str().unwrap().contains("Medical"));
    }

    #[test]
    fn finance_routes_to_general_domain() {
        let response = handle_event(&event(
            "POST",
            "/api/finance",
            Some(r#"{"message": "stocks"}"#),
        ));

        let body = body_json(&response);
        assert_eq!(body["type"], "general");
        assert!(body["response"].as_str().unwrap().contains("General"));
    }

    #[test]
    fn missing_message_field_uses_placeholder() {
        let response = handle_event(&event("POST", "/api/education", Some("{}")));

        let body = body_json(&response);
        assert!(body["response"]
            .as_str()
            .unwrap()
            .contains("No message provided"));
    }

    #[test]
    fn malformed_body_becomes_raw_record_not_an_error() {
        let response = handle_event(&event("POST", "/api/general", Some("{not json")));
        assert_eq!(response.status_code, 200);

        // the unparseable body carries no message field
        let body = body_json(&response);
        assert!(body["response"]
            .as_str()
            .unwrap()
            .contains("No message provided"));
    }

    #[test]
    fn parse_body_wraps_invalid_json_as_raw() {
        let parsed = parse_body(&event("POST", "/api/general", Some("plain text")));
        assert_eq!(parsed, json!({ "raw": "plain text" }));
    }

    #[test]
    fn parse_body_decodes_base64() {
        let mut ev = event("POST", "/api/general", None);
        ev.body = Some(BASE64.encode(r#"{"message":"decoded"}"#));
        ev.is_base64_encoded = true;

        let parsed = parse_body(&ev);
        assert_eq!(parsed["message"], "decoded");
    }

    #[test]
    fn parse_body_falls_back_to_raw_on_bad_base64() {
        let mut ev = event("POST", "/api/general", Some("!!! not base64 !!!"));
        ev.is_base64_encoded = true;

        let parsed = parse_body(&ev);
        assert_eq!(parsed, json!({ "raw": "!!! not base64 !!!" }));
    }

    #[test]
    fn get_returns_status_payload_with_endpoints() {
        let response = handle_event(&event("GET", "/api", None));
        assert_eq!(response.status_code, 200);

        let body = body_json(&response);
        assert_eq!(body["version"], VERSION);
        let endpoints = body["endpoints"].as_array().unwrap();
        assert!(endpoints.iter().any(|e| e.as_str() == Some("medical")));
        assert!(endpoints.iter().any(|e| e.as_str() == Some("entertainment")));
    }

    #[test]
    fn get_on_domain_path_reports_detected_route() {
        let response = handle_event(&event("GET", "/api/medical", None));
        assert_eq!(response.status_code, 200);

        let body = body_json(&response);
        assert_eq!(body["debug"]["detected_route"], "medical");
    }

    #[test]
    fn unmatched_post_returns_404_with_endpoint_list() {
        let response = handle_event(&event("POST", "/api/unknown", Some("{}")));
        assert_eq!(response.status_code, 404);

        let body = body_json(&response);
        assert_eq!(body["error"], "Endpoint not found");
        assert_eq!(
            body["available_endpoints"].as_array().unwrap().len(),
            ROUTES.len()
        );
        assert_eq!(body["requested_path"], "/api/unknown");
    }

    #[test]
    fn route_detection_uses_raw_path_too() {
        let mut ev = event("POST", "/prod", Some(r#"{"message": "hi"}"#));
        ev.raw_path = Some("/prod/api/education".to_string());

        let response = handle_event(&ev);
        let body = body_json(&response);
        assert_eq!(body["type"], "education");
    }

    #[test]
    fn error_response_gates_detail_behind_debug() {
        let err = anyhow::Error::new(ApiError::Internal("database exploded".to_string()));

        let hidden = error_response(&err, false);
        assert_eq!(hidden.status_code, 500);
        let body = body_json(&hidden);
        assert_eq!(body["detail"], "Enable DEBUG for error detail");
        assert!(body["message"].as_str().unwrap().contains("database exploded"));

        let shown = error_response(&err, true);
        let body = body_json(&shown);
        assert!(body["detail"].as_str().unwrap().contains("database exploded"));
    }
}
