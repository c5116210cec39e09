//! Shared setup for integration tests.
//!
//! Every test gets its own [`MockServer`] standing in for both Steam APIs, and a router configured
//! to talk to it.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use {
	axum::{
		Router,
		body::{Body, Bytes},
	},
	color_eyre::eyre,
	http::{Method, Request, StatusCode},
	httpmock::MockServer,
	serde_json::Value as JsonValue,
	steamstat_api::Config,
	tower::ServiceExt,
};

pub const API_KEY: &str = "test-api-key";
pub const GABEN: &str = "76561197960287930";

pub struct TestApp
{
	pub steam: MockServer,
	router: Router,
}

#[derive(Debug)]
pub struct TestResponse
{
	pub status: StatusCode,
	pub headers: http::HeaderMap,
	pub body: Bytes,
}

impl TestApp
{
	/// An app with an API key.
	pub async fn new() -> eyre::Result<Self>
	{
		Self::with_config(|config| config.steam.api_key = Some(Box::from(API_KEY))).await
	}

	/// An app with the default configuration, patched by `configure`.
	///
	/// Both Steam base URLs point at the mock server, unless `configure` changes them.
	pub async fn with_config(configure: impl FnOnce(&mut Config)) -> eyre::Result<Self>
	{
		let steam = MockServer::start_async().await;
		let mut config = Config::default();

		config.steam.web_api_url = steam.base_url().parse()?;
		config.steam.store_api_url = steam.base_url().parse()?;
		configure(&mut config);

		let router = steamstat_api::router(&config)?;

		Ok(Self { steam, router })
	}

	pub async fn get(&self, uri: &str) -> eyre::Result<TestResponse>
	{
		self.request(Method::GET, uri).await
	}

	pub async fn request(&self, method: Method, uri: &str) -> eyre::Result<TestResponse>
	{
		let request = Request::builder().method(method).uri(uri).body(Body::empty())?;
		let response = self.router.clone().oneshot(request).await?;
		let status = response.status();
		let headers = response.headers().clone();
		let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

		Ok(TestResponse { status, headers, body })
	}
}

impl TestResponse
{
	pub fn json(&self) -> eyre::Result<JsonValue>
	{
		Ok(serde_json::from_slice(&self.body)?)
	}

	pub fn text(&self) -> eyre::Result<&str>
	{
		Ok(std::str::from_utf8(&self.body)?)
	}
}
