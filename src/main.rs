use clap::Parser;
use color_eyre::eyre::Result;
use std::path::PathBuf;
use std::sync::Arc;
use syllabus_daemon::catalog::Catalog;
use syllabus_daemon::cors::{build_cors_layer, DEFAULT_CORS_ORIGINS};
use syllabus_daemon::grpc_logging::GrpcLoggingLayer;
use syllabus_daemon::logging::{
    self, default_log_dir, init_logging, parse_rotation, LogConfig, LOG_FILENAME,
};
use syllabus_daemon::server::proto::syllabus_daemon_server::SyllabusDaemonServer;
use syllabus_daemon::server::SyllabusDaemonService;
use syllabus_daemon::user_config::{self, StoreBackend, UserConfig};
use syllabus_daemon::FILE_DESCRIPTOR_SET;
use tonic::transport::Server;
use tracing::{info, warn};

const DEFAULT_ADDR: &str = "127.0.0.1:50061";

/// Syllabus Daemon - ordered course lessons and sections over gRPC
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, env = "SYLLABUS_DAEMON_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    /// Comma-separated list of allowed CORS origins ("*" allows all)
    #[arg(
        long,
        env = "SYLLABUS_CORS_ORIGINS",
        default_value = DEFAULT_CORS_ORIGINS,
        value_delimiter = ','
    )]
    cors_origins: Vec<String>,

    /// Enable JSON log format
    #[arg(long, env = "SYLLABUS_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "SYLLABUS_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.syllabus/logs)
    #[arg(long, env = "SYLLABUS_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Storage backend (default: from ~/.syllabus/config.toml, else markdown)
    #[arg(long, env = "SYLLABUS_STORE", value_enum)]
    store: Option<StoreBackend>,

    /// Directory for the Markdown stores (default: ~/.syllabus/data)
    #[arg(long, env = "SYLLABUS_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn report_server_error(
    addr: std::net::SocketAddr,
    log_file: &std::path::Path,
    e: &tonic::transport::Error,
) {
    let err_string = format!("{e:?}");
    eprintln!();
    if err_string.contains("AddrInUse") {
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of syllabus-daemon may already be running.");
        eprintln!("Use a different port: syllabus-daemon --addr 127.0.0.1:50062");
    } else {
        eprintln!("Error: Failed to start server: {e}");
    }
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

async fn open_catalog(backend: StoreBackend, data_dir: PathBuf) -> Result<Catalog> {
    match backend {
        StoreBackend::Memory => {
            warn!("Using in-memory store; data is lost on exit");
            Ok(Catalog::in_memory())
        }
        StoreBackend::Markdown => {
            info!(data_dir = %data_dir.display(), "Opening markdown store");
            Ok(Catalog::open(&data_dir).await?)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let log_dir = args.log_dir.unwrap_or_else(default_log_dir);
    let log_file = log_dir.join(LOG_FILENAME);
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };
    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    let user_cfg = user_config::load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });
    let backend = args.store.unwrap_or(user_cfg.storage.backend);
    let data_dir = args.data_dir.unwrap_or_else(|| user_cfg.storage.data_dir());
    let catalog = Arc::new(open_catalog(backend, data_dir).await?);

    let addr = args.addr.parse()?;

    let cors_origins: Vec<String> = args
        .cors_origins
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    info!("CORS origins: {}", cors_origins.join(", "));
    let cors = build_cors_layer(cors_origins);

    let reflection_service = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    let service = SyllabusDaemonService::new(catalog);

    info!("Starting Syllabus daemon on {} (gRPC + gRPC-Web)", addr);

    let server_result = Server::builder()
        .accept_http1(true) // Required for gRPC-Web
        .layer(cors)
        .layer(GrpcLoggingLayer)
        .layer(tonic_web::GrpcWebLayer::new())
        .add_service(reflection_service)
        .add_service(SyllabusDaemonServer::new(service))
        .serve_with_shutdown(addr, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {e}");
                std::future::pending::<()>().await;
            }
            info!("Received shutdown signal, stopping server...");
        })
        .await;

    if let Err(e) = server_result {
        report_server_error(addr, &log_file, &e);
        return Err(e.into());
    }

    info!("Syllabus daemon stopped");
    Ok(())
}
