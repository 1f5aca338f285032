use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::debug;

use crate::api::ApiClient;
use crate::config::Config;
use crate::identity::LoginBridge;
use crate::ui::app::{App, Command};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// How long mismatched cards stay up before they flip back.
pub const MISMATCH_DELAY: Duration = Duration::from_secs(1);

const TICK_RATE: Duration = Duration::from_millis(250);

/// Async collaborators the command executor reaches for.
pub struct Services {
    pub api: Arc<ApiClient>,
    pub login: Arc<LoginBridge>,
    /// Contract address used for both the balance query and the mint
    /// recipient.
    pub address: String,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        Self {
            api: Arc::new(ApiClient::new(&config.backend)),
            login: Arc::new(LoginBridge::new(&config.login)),
            address: config.token.contract_address.clone(),
        }
    }
}

pub fn run(config: &Config, handle: Handle, mouse: bool) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(mouse)?;
    let events = EventHandler::new(TICK_RATE);
    let services = Services::new(config);
    let mut app = App::new(config);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.set_size(cols, rows);
    }
    execute_all(&handle, &services, &events.sender(), app.startup_commands());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(event) => {
                let commands = app.handle_event(event);
                execute_all(&handle, &services, &events.sender(), commands);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

pub fn execute_all(
    handle: &Handle,
    services: &Services,
    tx: &Sender<AppEvent>,
    commands: Vec<Command>,
) {
    for command in commands {
        execute(handle, services, tx.clone(), command);
    }
}

/// Spawns one task per command; the result comes back through the
/// event channel as data. A dropped receiver just discards the send.
pub fn execute(handle: &Handle, services: &Services, tx: Sender<AppEvent>, command: Command) {
    debug!(?command, "executing command");
    match command {
        Command::ScheduleMismatch { epoch } => {
            handle.spawn(async move {
                tokio::time::sleep(MISMATCH_DELAY).await;
                let _ = tx.send(AppEvent::MismatchTimer { epoch });
            });
        }
        Command::FetchProfile => {
            let login = Arc::clone(&services.login);
            handle.spawn(async move {
                let result = login.fetch_profile().await;
                let _ = tx.send(AppEvent::ProfileFetched(result));
            });
        }
        Command::FetchContractDetail => {
            let api = Arc::clone(&services.api);
            handle.spawn(async move {
                let result = api.contract_detail().await;
                let _ = tx.send(AppEvent::ContractDetailFetched(result));
            });
        }
        Command::FetchBalance => {
            let api = Arc::clone(&services.api);
            let address = services.address.clone();
            handle.spawn(async move {
                let result = api.balance(&address).await;
                let _ = tx.send(AppEvent::BalanceFetched(result));
            });
        }
        Command::FetchPriceFeed => {
            let api = Arc::clone(&services.api);
            handle.spawn(async move {
                let result = api.price_feed().await;
                let _ = tx.send(AppEvent::PriceFeedFetched(result));
            });
        }
        Command::Mint { amount } => {
            let api = Arc::clone(&services.api);
            let address = services.address.clone();
            handle.spawn(async move {
                let result = api.mint(&address, &amount).await;
                let _ = tx.send(AppEvent::MintCompleted(result));
            });
        }
    }
}
