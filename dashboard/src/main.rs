//! Dashboard entry-point: loads configuration, wires adapters, and runs the
//! command loop on stdin.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io::{self, Write};
use std::sync::Arc;

use dashboard::config::DashboardSettings;
use dashboard::domain::ports::InertCardActions;
use dashboard::domain::{DashboardSession, LoadState, UserLoader};
use dashboard::inbound::cli::DashboardApp;
use dashboard::outbound::dummyjson::DummyJsonDirectory;
use dashboard::telemetry;
use ortho_config::OrthoConfig;
use staff_attributes::RandomAttributes;
use tokio::runtime::Builder;
use tracing::info;

fn main() -> io::Result<()> {
    telemetry::init();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let settings = DashboardSettings::load_from_iter(env::args_os())
        .map_err(|error| io::Error::other(format!("load configuration: {error}")))?;
    let endpoint = settings.endpoint().map_err(invalid_input)?;
    let limit = settings.limit().map_err(invalid_input)?;
    let filters = settings.initial_filters().map_err(invalid_input)?;

    let directory = DummyJsonDirectory::new(endpoint, settings.timeout())
        .map_err(|error| io::Error::other(format!("create HTTP client: {error}")))?;
    info!(endpoint = %directory.endpoint(), limit = limit.get(), "starting dashboard");
    let loader = UserLoader::new(
        Arc::new(directory),
        Box::new(RandomAttributes::from_optional_seed(settings.seed)),
        limit,
    );
    let mut app = DashboardApp::new(
        DashboardSession::new(filters),
        loader,
        Arc::new(InertCardActions),
        io::stdout(),
    );

    if settings.once {
        app.load().await;
        app.render()?;
        return match app.session().state() {
            LoadState::Failed { reason } => Err(io::Error::other(reason.clone())),
            LoadState::Loading | LoadState::Ready => Ok(()),
        };
    }

    app.activate().await?;
    writeln!(io::stdout(), "Type `help` for commands.")?;
    app.run(io::stdin().lock()).await
}

fn invalid_input(error: impl std::error::Error + Send + Sync + 'static) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error)
}
