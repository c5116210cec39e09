use {
	super::HealthService,
	axum::{Router, extract::State, routing},
};

pub(crate) fn router(health_svc: HealthService) -> Router
{
	Router::new().route("/health-check", routing::get(health_check)).with_state(health_svc)
}

/// Always `200 OK`; the body tells whether anything is wrong.
#[instrument(level = "trace")]
async fn health_check(State(health_svc): State<HealthService>) -> &'static str
{
	health_svc.status()
}
