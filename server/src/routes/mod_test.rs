use super::*;
use crate::config::AppConfig;

fn test_state() -> AppState {
    AppState::new(AppConfig {
        port: 3000,
        supabase_url: "https://proj.supabase.co".to_owned(),
        supabase_anon_key: "anon-key".to_owned(),
        geocoder_url: "https://geo.example".to_owned(),
    })
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn public_config_exposes_service_urls_and_anon_key() {
    let Json(body) = public_config(State(test_state())).await;
    assert_eq!(
        body,
        PublicConfig {
            supabase_url: "https://proj.supabase.co".to_owned(),
            supabase_anon_key: "anon-key".to_owned(),
            geocoder_url: "https://geo.example".to_owned(),
        }
    );
}

#[tokio::test]
async fn public_config_serializes_with_snake_case_keys() {
    let Json(body) = public_config(State(test_state())).await;
    let value = serde_json::to_value(body).unwrap();
    assert_eq!(value["supabase_url"], "https://proj.supabase.co");
    assert_eq!(value["supabase_anon_key"], "anon-key");
    assert_eq!(value["geocoder_url"], "https://geo.example");
}
