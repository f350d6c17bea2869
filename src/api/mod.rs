mod report;

use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::core::{
    ChartPoint, ComparisonBar, InputError, Inputs, InternalModelInputs, OutputFloorResult,
    RwaInputs, comparison_chart, evaluate,
};

const DEFAULT_CREDIT_RWAS: f64 = 400_000_000.0;
const DEFAULT_EQUITY_RWAS: f64 = 100_000_000.0;
const DEFAULT_OPERATIONAL_RWAS: f64 = 50_000_000.0;
const DEFAULT_MARKET_RWAS: f64 = 80_000_000.0;
const DEFAULT_CVA_RWAS: f64 = 20_000_000.0;
const DEFAULT_INTERNAL_MODEL_RWAS: f64 = 370_000_000.0;
const DEFAULT_INTERNAL_MODEL_COSTS: f64 = 5_000_000.0;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    #[error("invalid request: {0}")]
    Request(String),
    #[error("invalid arguments: {0}")]
    Usage(String),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Input(_) | ApiError::Request(_) | ApiError::Usage(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Encode(_) | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Keeps only the first line of clap's rendered error, without its `error: ` prefix.
impl From<clap::Error> for ApiError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let first_line = rendered.lines().next().unwrap_or_default().trim();
        let msg = first_line.strip_prefix("error: ").unwrap_or(first_line);
        ApiError::Usage(msg.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error_response(self.status(), &self.to_string())
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "output-floor",
    version,
    about = "Basel III output floor calculator (standardised approach vs internal-model RWAs)"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Log at debug level unless RUST_LOG is set")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate one set of inputs and print the result
    Evaluate(EvaluateArgs),
    /// Serve the evaluation API over HTTP
    Serve(ServeArgs),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct InputArgs {
    #[arg(long, default_value_t = DEFAULT_CREDIT_RWAS, help = "Credit risk RWAs")]
    pub credit_rwas: f64,
    #[arg(long, default_value_t = DEFAULT_EQUITY_RWAS, help = "Equity risk RWAs")]
    pub equity_rwas: f64,
    #[arg(long, default_value_t = DEFAULT_OPERATIONAL_RWAS, help = "Operational risk RWAs")]
    pub operational_rwas: f64,
    #[arg(long, default_value_t = DEFAULT_MARKET_RWAS, help = "Market risk RWAs")]
    pub market_rwas: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_CVA_RWAS,
        help = "Credit valuation adjustment risk RWAs"
    )]
    pub cva_rwas: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INTERNAL_MODEL_RWAS,
        help = "RWAs calculated with internal models"
    )]
    pub internal_model_rwas: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INTERNAL_MODEL_COSTS,
        help = "Total cost of implementing the internal model"
    )]
    pub internal_model_costs: f64,
}

impl Default for InputArgs {
    fn default() -> Self {
        Self {
            credit_rwas: DEFAULT_CREDIT_RWAS,
            equity_rwas: DEFAULT_EQUITY_RWAS,
            operational_rwas: DEFAULT_OPERATIONAL_RWAS,
            market_rwas: DEFAULT_MARKET_RWAS,
            cva_rwas: DEFAULT_CVA_RWAS,
            internal_model_rwas: DEFAULT_INTERNAL_MODEL_RWAS,
            internal_model_costs: DEFAULT_INTERNAL_MODEL_COSTS,
        }
    }
}

impl From<InputArgs> for Inputs {
    fn from(args: InputArgs) -> Self {
        Inputs {
            rwas: RwaInputs {
                credit: args.credit_rwas,
                equity: args.equity_rwas,
                operational: args.operational_rwas,
                market: args.market_rwas,
                cva: args.cva_rwas,
            },
            internal_model: InternalModelInputs {
                rwas: args.internal_model_rwas,
                costs: args.internal_model_costs,
            },
        }
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct ServeArgs {
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

impl ServeArgs {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct EvaluatePayload {
    credit_rwas: Option<f64>,
    equity_rwas: Option<f64>,
    operational_rwas: Option<f64>,
    market_rwas: Option<f64>,
    cva_rwas: Option<f64>,
    internal_model_rwas: Option<f64>,
    internal_model_costs: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    pub bars: [ComparisonBar; 2],
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub inputs: Inputs,
    pub result: OutputFloorResult,
    pub comparison: ComparisonResponse,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub fn build_report(inputs: Inputs) -> Result<EvaluationReport, InputError> {
    let result = evaluate(&inputs)?;
    let chart = comparison_chart(&inputs, &result);
    debug!(
        total_rwas = result.total_rwas,
        output_floor = result.output_floor_value,
        source = %result.chosen_rwa_source,
        worth_it = result.is_internal_model_worth_it,
        "evaluated output floor"
    );
    Ok(EvaluationReport {
        inputs,
        result,
        comparison: ComparisonResponse {
            bars: chart.bars,
            points: chart.long_format(),
        },
    })
}

pub fn run_evaluate(args: &EvaluateArgs) -> Result<String, ApiError> {
    let report = build_report(args.inputs.into())?;
    match args.format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/defaults", get(defaults_handler))
        .route(
            "/api/evaluate",
            get(evaluate_get_handler).post(evaluate_post_handler),
        )
        .fallback(not_found_handler)
}

pub async fn run_http_server(addr: SocketAddr) -> Result<(), ApiError> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "output floor HTTP API listening");
    axum::serve(listener, router()).await?;
    Ok(())
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn defaults_handler() -> Response {
    json_response(StatusCode::OK, Inputs::from(InputArgs::default()))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn evaluate_get_handler(query: Result<Query<EvaluatePayload>, QueryRejection>) -> Response {
    match query {
        Ok(Query(payload)) => evaluate_handler_impl(payload).await,
        Err(rejection) => rejected(ApiError::Request(rejection.body_text())),
    }
}

async fn evaluate_post_handler(body: Result<Json<EvaluatePayload>, JsonRejection>) -> Response {
    match body {
        Ok(Json(payload)) => evaluate_handler_impl(payload).await,
        Err(rejection) => rejected(ApiError::Request(rejection.body_text())),
    }
}

async fn evaluate_handler_impl(payload: EvaluatePayload) -> Response {
    let inputs = Inputs::from(input_args_from_payload(payload));
    match build_report(inputs) {
        Ok(report) => json_response(StatusCode::OK, report),
        Err(err) => rejected(err.into()),
    }
}

fn rejected(err: ApiError) -> Response {
    warn!(error = %err, "rejected evaluation request");
    err.into_response()
}

fn input_args_from_payload(payload: EvaluatePayload) -> InputArgs {
    let mut args = InputArgs::default();

    if let Some(v) = payload.credit_rwas {
        args.credit_rwas = v;
    }
    if let Some(v) = payload.equity_rwas {
        args.equity_rwas = v;
    }
    if let Some(v) = payload.operational_rwas {
        args.operational_rwas = v;
    }
    if let Some(v) = payload.market_rwas {
        args.market_rwas = v;
    }
    if let Some(v) = payload.cva_rwas {
        args.cva_rwas = v;
    }
    if let Some(v) = payload.internal_model_rwas {
        args.internal_model_rwas = v;
    }
    if let Some(v) = payload.internal_model_costs {
        args.internal_model_costs = v;
    }

    args
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
