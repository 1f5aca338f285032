use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

use crate::api::{ApiError, ContractDetail, MintReceipt, PriceFeed, TokenBalance};
use crate::identity::{IdentityError, Profile};

/// Everything that can wake the app: player input, the tick, terminal
/// geometry changes, the mismatch timer, and async call results. Each
/// async result carries its `Result` so a failure reaches the UI as
/// data instead of vanishing.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// The 1-second mismatch delay for `epoch` elapsed.
    MismatchTimer { epoch: u64 },
    ProfileFetched(Result<Profile, IdentityError>),
    ContractDetailFetched(Result<ContractDetail, ApiError>),
    BalanceFetched(Result<TokenBalance, ApiError>),
    MintCompleted(Result<MintReceipt, ApiError>),
    PriceFeedFetched(Result<PriceFeed, ApiError>),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Mouse(mouse)) => {
                            if event_tx.send(AppEvent::Mouse(mouse)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Clone of the injection side of the channel, handed to async
    /// tasks so their results come back through the same loop.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
