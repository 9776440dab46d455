//! Background request plumbing: at most one in-flight call per action.
//!
//! Requests run on a dedicated thread that blocks on the shared Tokio
//! runtime; results come back over an mpsc channel polled by the main
//! loop. Esc cancels via the request's CancellationToken.

use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::thread;

use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::api::{ApiClient, ApiError};
use crate::core::model::AnalysisResult;

/// Result of a background call, delivered to the main loop.
pub(super) enum Outcome {
    Analysis(Result<AnalysisResult, ApiError>),
    ChatReply(Result<String, ApiError>),
}

/// Handle to the in-flight request.
pub(super) struct PendingRequest {
    pub rx: mpsc::Receiver<Outcome>,
    pub cancel: CancellationToken,
}

pub(super) fn spawn_analyze(
    rt: &Arc<Runtime>,
    client: &Arc<ApiClient>,
    path: PathBuf,
) -> PendingRequest {
    let (tx, rx) = mpsc::channel();
    let cancel = CancellationToken::new();
    let rt = Arc::clone(rt);
    let client = Arc::clone(client);
    let cancelled = cancel.clone();
    thread::spawn(move || {
        let result = rt.block_on(async {
            tokio::select! {
                _ = cancelled.cancelled() => Err(ApiError::Cancelled),
                res = client.analyze_image(&path) => res,
            }
        });
        let _ = tx.send(Outcome::Analysis(result));
    });
    PendingRequest { rx, cancel }
}

pub(super) fn spawn_chat(
    rt: &Arc<Runtime>,
    client: &Arc<ApiClient>,
    disease_name: String,
) -> PendingRequest {
    let (tx, rx) = mpsc::channel();
    let cancel = CancellationToken::new();
    let rt = Arc::clone(rt);
    let client = Arc::clone(client);
    let cancelled = cancel.clone();
    thread::spawn(move || {
        let result = rt.block_on(async {
            tokio::select! {
                _ = cancelled.cancelled() => Err(ApiError::Cancelled),
                res = client.disease_info(&disease_name) => res,
            }
        });
        let _ = tx.send(Outcome::ChatReply(result));
    });
    PendingRequest { rx, cancel }
}
