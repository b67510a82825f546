use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServiceConfig;
use crate::explain::{prompts, DisabledProvider, Explainer, LLMProvider, OpenAICompatibleProvider};
use crate::language::Language;
use crate::prediction::{
    self, disease, lookup, predict_by_position, predict_traits, Child, ConfidenceTier,
    DiseaseAssessment, GenderToken, ParentTraits, PredictedTraits, RiskLevel,
};
use crate::store::{PredictionKind, PredictionRecord, PredictionStore, SqlitePredictionStore};

pub const API_NAME: &str = "Baby Gender & Genetics Prediction API";
pub const API_VERSION: &str = "1.0";

/// Collaborator failure surfaced to the caller as a 500.
pub struct ServerError(anyhow::Error);

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("Request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}

impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[derive(Clone)]
pub struct AppState {
    pub explainer: Explainer,
    pub store: Arc<dyn PredictionStore>,
    pub history_limit: usize,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn LLMProvider>,
        store: Arc<dyn PredictionStore>,
        history_limit: usize,
    ) -> Self {
        Self {
            explainer: Explainer::new(provider),
            store,
            history_limit,
        }
    }

    async fn record<I, R>(&self, kind: PredictionKind, input: &I, result: &R) -> Result<()>
    where
        I: Serialize,
        R: Serialize,
    {
        let record = PredictionRecord::new(
            kind,
            serde_json::to_value(input)?,
            serde_json::to_value(result)?,
        );
        self.store
            .insert(&record)
            .await
            .with_context(|| format!("failed to store {} prediction", kind.as_str()))
    }
}

// --- Request / response bodies ---

#[derive(Debug, Deserialize, Serialize)]
pub struct GenderPredictionRequest {
    pub current_pregnancy_order: i64,
    pub wife_family_children: Vec<Child>,
    pub husband_family_children: Vec<Child>,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GenderPredictionResponse {
    pub predicted_gender: GenderToken,
    pub confidence: ConfidenceTier,
    pub explanation: String,
    pub wife_pattern: Vec<GenderToken>,
    pub husband_pattern: Vec<GenderToken>,
}

fn default_child_number() -> u32 {
    1
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TablePredictionRequest {
    pub wife_family: Vec<GenderToken>,
    pub husband_family: Vec<GenderToken>,
    #[serde(default = "default_child_number")]
    pub child_number: u32,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TablePredictionResponse {
    pub predicted_gender: prediction::Gender,
    /// Percentage
    pub confidence: u8,
    pub pattern_found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub explanation: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GeneticDiseaseRequest {
    pub wife_family_diseases: Vec<String>,
    pub husband_family_diseases: Vec<String>,
    pub gender: GenderToken,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GeneticDiseaseResponse {
    pub risk_assessment: RiskLevel,
    pub diseases_info: Vec<disease::DiseaseInfo>,
    pub recommendations: String,
    pub detailed_explanation: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TraitsPredictionRequest {
    pub mother_traits: ParentTraits,
    pub father_traits: ParentTraits,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TraitsPredictionResponse {
    pub predicted_traits: PredictedTraits,
    pub explanation: String,
}

// --- Router ---

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(root))
        .route("/predict-gender", post(predict_gender))
        .route("/predict-gender/table", post(predict_gender_table))
        .route("/predict-genetic-diseases", post(predict_genetic_diseases))
        .route("/predict-traits", post(predict_traits_handler))
        .route("/history", get(history));

    Router::new()
        .route("/api/", get(root))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the state from configuration: SQLite store plus the configured
/// language model (or none, when no API key is set).
pub async fn build_state(config: &ServiceConfig) -> Result<AppState> {
    let store = SqlitePredictionStore::new(&config.db_path)
        .await
        .with_context(|| {
            format!("failed to open prediction store at {}", config.db_path.display())
        })?;

    let provider: Arc<dyn LLMProvider> = match &config.llm_api_key {
        Some(key) => Arc::new(OpenAICompatibleProvider::new(
            config.llm_base_url.clone(),
            Some(key.clone()),
            config.llm_model.clone(),
            config.llm_timeout,
        )?),
        None => {
            info!("LLM_API_KEY not set; explanations will use the fallback text");
            Arc::new(DisabledProvider)
        }
    };

    Ok(AppState::new(provider, Arc::new(store), config.history_limit))
}

pub async fn run_server(config: ServiceConfig) -> Result<()> {
    let state = build_state(&config).await?;
    let stored = state.store.count().await.context("failed to count stored predictions")?;
    info!(
        model = state.explainer.model(),
        db = %config.db_path.display(),
        stored,
        "🏛️  Prediction service initialized"
    );

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("🚀 Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
}

// --- Handlers ---

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": API_NAME, "version": API_VERSION }))
}

async fn predict_gender(
    State(state): State<AppState>,
    Json(req): Json<GenderPredictionRequest>,
) -> Result<Json<GenderPredictionResponse>, ServerError> {
    let prediction = predict_by_position(
        req.current_pregnancy_order,
        &req.wife_family_children,
        &req.husband_family_children,
    );
    info!(
        order = req.current_pregnancy_order,
        gender = %prediction.gender,
        confidence = %prediction.confidence,
        "positional gender prediction"
    );

    let prompt = prompts::gender_prompt(req.current_pregnancy_order, &prediction, req.language);
    let explanation = state.explainer.explain(prompt, req.language).await;

    let response = GenderPredictionResponse {
        predicted_gender: prediction.gender,
        confidence: prediction.confidence,
        explanation,
        wife_pattern: prediction.wife_pattern,
        husband_pattern: prediction.husband_pattern,
    };
    state.record(PredictionKind::Gender, &req, &response).await?;

    Ok(Json(response))
}

async fn predict_gender_table(
    State(state): State<AppState>,
    Json(req): Json<TablePredictionRequest>,
) -> Result<Json<TablePredictionResponse>, ServerError> {
    let prediction = lookup::predict_tokens(
        &mut rand::thread_rng(),
        &req.wife_family,
        &req.husband_family,
        req.child_number,
    );
    info!(
        child = req.child_number,
        gender = %prediction.gender,
        confidence = prediction.confidence,
        found = prediction.pattern_found,
        "table gender prediction"
    );

    let explanation = prompts::table_explanation(
        &req.wife_family,
        &req.husband_family,
        &prediction,
        req.child_number,
        req.language,
    );

    let response = TablePredictionResponse {
        predicted_gender: prediction.gender,
        confidence: prediction.confidence,
        pattern_found: prediction.pattern_found,
        note: prediction.note,
        explanation,
    };
    state.record(PredictionKind::GenderTable, &req, &response).await?;

    Ok(Json(response))
}

async fn predict_genetic_diseases(
    State(state): State<AppState>,
    Json(req): Json<GeneticDiseaseRequest>,
) -> Result<Json<GeneticDiseaseResponse>, ServerError> {
    let assessment: DiseaseAssessment = prediction::assess_diseases(
        &req.wife_family_diseases,
        &req.husband_family_diseases,
        req.gender.gender(),
        req.language,
    );
    info!(
        reported = req.wife_family_diseases.len() + req.husband_family_diseases.len(),
        risk = assessment.risk_assessment.as_str(),
        "genetic disease assessment"
    );

    let mut prompt = prompts::genetic_prompt(
        &req.wife_family_diseases,
        &req.husband_family_diseases,
        req.gender.gender(),
        req.language,
    );
    prompt.push_str(&prompts::assessment_summary(&assessment));
    let detailed_explanation = state.explainer.explain(prompt, req.language).await;

    let response = GeneticDiseaseResponse {
        risk_assessment: assessment.risk_assessment,
        diseases_info: assessment.diseases_info,
        recommendations: disease::recommendations(req.language).to_string(),
        detailed_explanation,
    };
    state.record(PredictionKind::Genetic, &req, &response).await?;

    Ok(Json(response))
}

async fn predict_traits_handler(
    State(state): State<AppState>,
    Json(req): Json<TraitsPredictionRequest>,
) -> Result<Json<TraitsPredictionResponse>, ServerError> {
    let child = predict_traits(&req.mother_traits, &req.father_traits);
    let predicted_traits = child.localized(req.language);
    info!(?child, "traits prediction");

    let prompt = prompts::traits_prompt(
        &req.mother_traits,
        &req.father_traits,
        &predicted_traits,
        req.language,
    );
    let explanation = state.explainer.explain(prompt, req.language).await;

    let response = TraitsPredictionResponse {
        predicted_traits,
        explanation,
    };
    state.record(PredictionKind::Traits, &req, &response).await?;

    Ok(Json(response))
}

async fn history(
    State(state): State<AppState>,
) -> Result<Json<Vec<PredictionRecord>>, ServerError> {
    let records = state
        .store
        .recent(state.history_limit)
        .await
        .context("History retrieval error")?;
    Ok(Json(records))
}
