use anyhow::{Context, Result};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{info, warn};
use wpanet::{
    app::{App, AppConfig},
    backend::ifconfig::IfconfigBackend,
    cli::CommandLineArgs,
    config::document::ConfigDocument,
    domain::common::StatusKind,
    event::{Event, EventHandler},
    handler::handle_key_events,
    keybinds::Keybinds,
    logging::init_tracing_subscriber,
    registry::NetworkRegistry,
    sync::{SyncOutcome, sync},
    tui::Tui,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    if let Some(path) = &args.log_file {
        init_tracing_subscriber(path)?;
    }

    let document = ConfigDocument::load(&args.config_file)
        .with_context(|| format!("cannot load {}", args.config_file.display()))?;
    let registry = NetworkRegistry::from(document.networks().to_vec());

    let backend = IfconfigBackend::new(args.command_timeout);
    println!("Scanning for networks on {}...", args.iface);
    let (scan, scan_error) = backend.scan_or_empty(&args.iface).await;

    let config = AppConfig {
        iface: args.iface.clone(),
        theme: args.theme,
        keybinds: Keybinds::load(),
    };
    let mut app = App::new(config, registry, scan);
    if let Some(msg) = scan_error {
        app.set_status(StatusKind::Error, msg);
    }

    let registry = run_session(app).await?;

    match sync(&document, &registry)? {
        SyncOutcome::Unchanged => println!("config file was not changed"),
        SyncOutcome::Changed if args.restart => {
            println!("new config, restarting network...");
            match backend.restart(&args.iface).await {
                Ok(out) => info!("{} {} finished", out.program, out.args.join(" ")),
                Err(e) => {
                    warn!("restart failed: {e}");
                    println!("restart failed: {e}");
                }
            }
        }
        SyncOutcome::Changed => println!(
            "new config, please run \"service netif restart {}\" manually",
            args.iface
        ),
    }

    Ok(())
}

/// Runs the interactive session until the user quits and hands back the
/// edited registry.
async fn run_session(mut app: App) -> Result<NetworkRegistry> {
    let (width, height) = crossterm::terminal::size()?;
    app.resize(width, height);

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    let events = EventHandler::new(25);
    let mut tui = Tui::new(terminal, events);
    tui.init().context("failed to initialize the terminal")?;

    let result = event_loop(&mut tui, &mut app).await;
    tui.exit()?;
    drop(tui);
    if let Err(e) = result {
        warn!("session aborted with {} known networks: {e:#}", app.registry.len());
        eprintln!("session aborted, config file was not changed");
        return Err(e);
    }

    info!("session finished with {} known networks", app.registry.len());
    Ok(app.into_registry())
}

async fn event_loop(tui: &mut Tui<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running() {
        tui.draw(app)?;

        match tui.events.next().await? {
            Event::Key(key_event) => handle_key_events(key_event, app),
            Event::Resize(width, height) => app.resize(width, height),
        }
    }
    Ok(())
}
