use {
    crate::{
        api,
        auction::{
            repository::Repository,
            service::Service as AuctionService,
        },
        config::{
            Config,
            RunOptions,
        },
        kernel::{
            auth::StaticKeyAuthorizer,
            clock::SystemClock,
            id::UuidGenerator,
        },
        metrics_api::start_metrics,
        state::ServerState,
    },
    anyhow::anyhow,
    axum_prometheus::PrometheusMetricLayer,
    std::{
        sync::{
            atomic::{
                AtomicBool,
                Ordering,
            },
            Arc,
        },
        time::Duration,
    },
    tokio::task::JoinHandle,
};

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    tokio::spawn(async move {
        tracing::info!("Registered shutdown signal handler...");
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = ?err, "Failed to listen for the shutdown signal");
        }
        tracing::info!("Shut down signal received, waiting for tasks...");
        SHOULD_EXIT.store(true, Ordering::Release);
    });

    let config = Config::load(&run_options.config.config).map_err(|err| {
        anyhow!(
            "Failed to load config from file({path}): {:?}",
            err,
            path = run_options.config.config
        )
    })?;

    let auction_service = AuctionService::new(
        Repository::default(),
        Arc::new(StaticKeyAuthorizer::new(config.secret_keys)),
        Arc::new(SystemClock),
        Arc::new(UuidGenerator),
    );
    let state = Arc::new(ServerState { auction_service });

    let (metric_layer, metric_handle) = PrometheusMetricLayer::pair();
    let server_loop = tokio::spawn(api::start_api(
        run_options.clone(),
        config.allowed_origins,
        state,
        metric_layer,
    ));
    let metrics_loop = tokio::spawn(start_metrics(run_options, metric_handle));

    tokio::try_join!(
        run_until_exit(server_loop),
        run_until_exit(metrics_loop)
    )?;
    Ok(())
}

/// Waits for a server task and signals every other task to shut down if it failed.
async fn run_until_exit(task: JoinHandle<anyhow::Result<()>>) -> anyhow::Result<()> {
    let result = task.await.map_err(anyhow::Error::from).and_then(|result| result);
    if let Err(err) = &result {
        tracing::error!(error = ?err, "Server task failed, shutting down");
        SHOULD_EXIT.store(true, Ordering::Release);
    }
    result
}

// A static exit flag to indicate to running threads that we're shutting down. This is used to
// gracefully shutdown the application.
//
// NOTE: A more idiomatic approach would be to use a tokio::sync::broadcast channel, and to send a
// shutdown signal to all running tasks. However, this is a bit more complicated to implement and
// we don't rely on global state for anything else.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);
