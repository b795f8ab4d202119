#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use rest_builder::{ApiService, ClientConfig, JsonSerializer, Serializer};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wiremock::MockServer;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dto {
    pub id: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthDto {
    pub email: String,
    pub password: String,
}

/// JSON serializer that counts how many bodies it decoded.
#[derive(Debug, Default)]
pub struct CountingSerializer {
    deserialized: AtomicUsize,
}

impl CountingSerializer {
    pub fn deserialized(&self) -> usize {
        self.deserialized.load(Ordering::SeqCst)
    }
}

impl Serializer for CountingSerializer {
    type Error = serde_json::Error;

    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, Self::Error> {
        JsonSerializer.serialize(value)
    }

    fn deserialize<T: DeserializeOwned>(&self, text: &str) -> Result<T, Self::Error> {
        self.deserialized.fetch_add(1, Ordering::SeqCst);
        JsonSerializer.deserialize(text)
    }
}

/// Client that talks to the mock server directly, ignoring proxy variables.
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

pub fn json_service() -> ApiService<JsonSerializer> {
    ApiService::with_transport(JsonSerializer, local_client())
}

pub fn counting_service() -> ApiService<CountingSerializer> {
    ApiService::with_transport(CountingSerializer::default(), local_client())
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(&server.uri()).unwrap()
}

/// A URL on a local port with nothing listening on it.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api/ping")
}
