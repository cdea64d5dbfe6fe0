use std::time::Duration;

use axum::routing::MethodRouter;
use axum::{Json, Router};
use serde_json::{json, Value};

use dexview_core::page::Notifier;
use dexview_core::pokemon::PokemonStub;

/// Bind a stub API on an ephemeral local port and return its base URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Handler answering every call with the same JSON body
pub fn json_ok(value: Value) -> MethodRouter {
    axum::routing::get(move || {
        let value = value.clone();
        async move { Json(value) }
    })
}

/// Handler answering with the same JSON body after a fixed delay
pub fn json_ok_after(value: Value, delay: Duration) -> MethodRouter {
    axum::routing::get(move || {
        let value = value.clone();
        async move {
            tokio::time::sleep(delay).await;
            Json(value)
        }
    })
}

/// Handler answering 500 with a plain body
pub fn server_error() -> MethodRouter {
    axum::routing::get(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") })
}

/// Handler answering 200 with a body that is not JSON
pub fn not_json() -> MethodRouter {
    axum::routing::get(|| async { "definitely not json" })
}

/// Detail record in the PokeAPI wire shape
pub fn detail_json(id: u32, name: &str, image: &str, types: &[&str]) -> Value {
    let type_slots: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(slot, type_name)| json!({"slot": slot + 1, "type": {"name": type_name}}))
        .collect();

    json!({
        "id": id,
        "name": name,
        "sprites": {"other": {"official-artwork": {"front_default": image}}},
        "types": type_slots,
    })
}

/// Roster page in the PokeAPI wire shape
pub fn roster_json(entries: &[(&str, &str)]) -> Value {
    let results: Vec<Value> = entries
        .iter()
        .map(|(name, url)| json!({"name": name, "url": url}))
        .collect();

    json!({
        "count": entries.len(),
        "next": null,
        "previous": null,
        "results": results,
    })
}

pub fn stub(name: &str, url: &str) -> PokemonStub {
    PokemonStub {
        name: name.to_string(),
        url: url.to_string(),
    }
}

/// Notifier that records messages instead of interrupting anyone
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
