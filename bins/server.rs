use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // load .env first so RUST_LOG and friends take effect
    dotenv().ok();
    // LOG_FORMAT=json switches to structured JSON lines
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => common::utils::logging::init_logging_json(),
        _ => common::utils::logging::init_logging_default(),
    }
    info!(service = "fleet_rental", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "fleet_rental",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "fleet_rental", event = "config_invalid", error = %e, "invalid configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "fleet_rental", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "fleet_rental",
        event = "start",
        %service_id,
        pid,
        version,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        data_dir = %cfg.storage.data_dir.display(),
        "fleet rental service starting"
    );

    rt.block_on(async move {
        let server_task = tokio::spawn(async move {
            server::run(cfg).await.map_err(|e| {
                error!(service = "fleet_rental", event = "run_failed", error = %e, "server::run returned error");
                e
            })
        });

        tokio::select! {
            res = server_task => match res {
                Ok(Ok(())) => {
                    info!(service = "fleet_rental", event = "stop", %service_id, pid, "server stopped normally");
                    std::process::ExitCode::SUCCESS
                }
                // already logged
                Ok(Err(_)) => std::process::ExitCode::FAILURE,
                Err(e) => {
                    error!(service = "fleet_rental", event = "task_join_error", error = %e, "server task join error");
                    std::process::ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                // every save is a temp-file rename, so dropping in-flight requests leaves no partial file
                info!(service = "fleet_rental", event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
