mod app;
mod cli;
mod handoff;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- HoopLife crashed ---");
        eprintln!("Please report this issue at: https://github.com/hooplifenba/hooplife-shell/issues");
        eprintln!("------------------------\n");

        default_hook(info);
    }));
}

fn main() {
    // Install panic hook for crash notes
    install_panic_hook();

    // Parse CLI arguments
    let args = cli::parse();

    // Load config first so its [logging] section can set the default level.
    // Diagnostics emitted during this load predate the subscriber.
    let loaded = match args.config.as_deref() {
        Some(path) => hooplife_config::load_from_path(std::path::Path::new(path)),
        None => hooplife_config::load_config(),
    };
    let (mut config, config_err) = match loaded {
        Ok(c) => (c, None),
        Err(e) => (hooplife_config::ShellConfig::default(), Some(e)),
    };

    // Initialize logging: CLI override > config > "info"
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(&config.logging.level)
        .to_string();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(level.parse().unwrap_or_else(|_| "info".parse().unwrap())),
        )
        .init();

    tracing::info!("HoopLife shell v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_err {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    // CLI overrides
    if let Some(url) = args.url {
        tracing::info!("Using app URL override: {url}");
        config.app.url = url;
    }
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    tracing::info!("Hosting {}", config.app.url);

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app::ShellApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
