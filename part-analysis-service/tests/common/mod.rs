#![allow(dead_code)]

use part_analysis_service::config::PartAnalysisConfig;
use part_analysis_service::services::providers::VisionProvider;
use part_analysis_service::startup::Application;
use reqwest::multipart::{Form, Part};
use service_core::config::Config;
use std::collections::HashMap;
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";

/// JPEG header followed by a few bytes of payload.
pub const JPEG_BYTES: &[u8] = &[
    0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01,
];

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn post_analyze(&self, form: Form) -> reqwest::Response {
        self.client
            .post(format!("{}/analyze", self.address))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Config pointing at the crate's `public/` directory on a random port.
pub fn test_config(overrides: &[(&str, &str)]) -> PartAnalysisConfig {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("GEMINI_API_KEY".to_string(), TEST_API_KEY.to_string()),
        (
            "PUBLIC_DIR".to_string(),
            concat!(env!("CARGO_MANIFEST_DIR"), "/public").to_string(),
        ),
    ]);
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }

    PartAnalysisConfig::from_lookup(Config { port: 0 }, |key| vars.get(key).cloned())
        .expect("Failed to build test configuration")
}

/// Spawn the application with the given provider.
pub async fn spawn_app_with(config: PartAnalysisConfig, provider: Arc<dyn VisionProvider>) -> TestApp {
    let app = Application::build_with_provider(config, provider)
        .await
        .expect("Failed to build application");
    finish_spawn(app)
}

pub async fn spawn_app(provider: Arc<dyn VisionProvider>) -> TestApp {
    spawn_app_with(test_config(&[]), provider).await
}

/// Spawn the application with the real Gemini provider aimed at `api_base`.
pub async fn spawn_gemini_app(api_base: &str) -> TestApp {
    let config = test_config(&[("GEMINI_API_BASE", api_base)]);
    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    finish_spawn(app)
}

fn finish_spawn(app: Application) -> TestApp {
    let port = app.port();
    tokio::spawn(app.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
    }
}

pub fn image_part(name: &str) -> Part {
    Part::bytes(JPEG_BYTES.to_vec())
        .file_name(name.to_string())
        .mime_str("image/jpeg")
        .unwrap()
}

/// The Toyota Corolla brake disc upload.
pub fn corolla_form() -> Form {
    Form::new()
        .text("brand", "Toyota")
        .text("model", "Corolla")
        .text("year", "2015")
        .text("type", "brake disc")
        .part("image", image_part("disc.jpg"))
}
