use std::future::Future;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // .env first so RUST_LOG / LOG_FORMAT are visible to the subscriber
    dotenv().ok();
    let json = common::utils::logging::init_logging_from_env();
    info!(service = "food_delivery", event = "logger_init", json, "tracing subscriber initialized");
}

/// Resolves on Ctrl+C.
fn shutdown_signal(instance_id: Uuid, pid: u32) -> impl Future<Output = ()> + Send + 'static {
    async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(service = "food_delivery", event = "signal_error", error = %e, "cannot listen for Ctrl+C");
            return;
        }
        info!(service = "food_delivery", event = "shutdown_signal", %instance_id, pid, "received Ctrl+C, shutting down");
    }
}

fn main() -> std::process::ExitCode {
    init_logging();

    let instance_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "food_delivery",
            event = "panic",
            %instance_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    // config.toml first, then TOKIO_WORKER_THREADS
    let worker_threads = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.server.worker_threads,
        Err(_) => std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()),
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "food_delivery", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "food_delivery",
        event = "start",
        %instance_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "food delivery service starting"
    );

    rt.block_on(async move {
        match server::run_with_shutdown(shutdown_signal(instance_id, pid)).await {
            Ok(()) => {
                info!(service = "food_delivery", event = "stop", %instance_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "food_delivery", event = "run_failed", error = %e, "server returned error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
