//! HTTP surface of the relay
//!
//! One route: `POST /ask`. Every internal failure becomes
//! `500 { "answer": "Server error" }`; the cause is only logged.

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::persona;
use crate::provider::{CompletionProvider, OpenAiCompatProvider, SharedProvider};
use crate::types::{AskRequest, AskResponse};
use std::convert::Infallible;
use std::sync::Arc;
use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::{reject, Filter, Rejection, Reply};

/// Largest accepted request body
const MAX_BODY_BYTES: u64 = 16 * 1024;

/// Answer one question with the persona prepended
pub async fn relay_question(
    provider: &dyn CompletionProvider,
    question: &str,
) -> Result<String, RelayError> {
    let messages = persona::conversation(question);
    provider.complete(&messages).await
}

/// All relay routes, with permissive CORS and request tracing
pub fn routes(
    provider: SharedProvider,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["POST"])
        .allow_headers(vec!["content-type"]);

    ask(provider)
        .recover(recover_body)
        .with(cors)
        .with(warp::trace::request())
}

fn ask(
    provider: SharedProvider,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path("ask")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_provider(provider))
        .and_then(handle_ask)
}

fn with_provider(
    provider: SharedProvider,
) -> impl Filter<Extract = (SharedProvider,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&provider))
}

fn server_error() -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&AskResponse::server_error()),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}

/// Unreadable `/ask` bodies get the same 500 as upstream failures
async fn recover_body(
    err: Rejection,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, Rejection> {
    let bad_body = err.find::<BodyDeserializeError>().is_some()
        || err.find::<reject::PayloadTooLarge>().is_some()
        || err.find::<reject::LengthRequired>().is_some()
        || err.find::<reject::UnsupportedMediaType>().is_some();
    if !bad_body {
        return Err(err);
    }
    tracing::warn!("Rejected /ask body: {:?}", err);
    Ok(server_error())
}

async fn handle_ask(
    request: AskRequest,
    provider: SharedProvider,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, Infallible> {
    match relay_question(provider.as_ref(), &request.question).await {
        Ok(answer) => Ok(warp::reply::with_status(
            warp::reply::json(&AskResponse::new(answer)),
            StatusCode::OK,
        )),
        Err(e) => {
            tracing::error!("Failed to answer question: {}", e);
            Ok(server_error())
        }
    }
}

/// Run the relay until Ctrl-C
pub async fn serve(config: RelayConfig) -> Result<(), RelayError> {
    let provider: SharedProvider = Arc::new(OpenAiCompatProvider::from_config(&config)?);
    serve_with(config, provider).await
}

/// Run the relay with a given provider until Ctrl-C
pub async fn serve_with(config: RelayConfig, provider: SharedProvider) -> Result<(), RelayError> {
    let (addr, server) = warp::serve(routes(provider)).try_bind_with_graceful_shutdown(
        config.bind,
        async {
            // ctrl_c only fails if the handler cannot be installed
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down relay");
        },
    )?;

    tracing::info!("Relay listening on http://{} (model {})", addr, config.model);
    server.await;
    Ok(())
}
