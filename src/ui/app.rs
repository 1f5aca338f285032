use std::mem;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::config::Config;
use crate::ui::board;
use crate::ui::events::AppEvent;
use crate::ui::game::{shuffled_deck, Card, GameIntent, GamePhase, GameReducer, GameState};
use crate::ui::layout;
use crate::ui::mvi::Reducer;

/// Fixed reward minted when every pair is found.
pub const MINT_REWARD_AMOUNT: &str = "10";

/// Side effects the runtime executes as async tasks. The app itself
/// never touches the network or the clock; it only emits these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ScheduleMismatch { epoch: u64 },
    FetchProfile,
    FetchContractDetail,
    FetchBalance,
    FetchPriceFeed,
    Mint { amount: String },
}

/// The single state container: game board plus presentation state.
/// Mutated only from the event loop thread.
pub struct App {
    should_quit: bool,
    size: (u16, u16),
    game: GameState,
    cursor: usize,
    player_name: Option<String>,
    balance: Option<String>,
    mint_tx: Option<String>,
    token_name: Option<String>,
    token_symbol: Option<String>,
    price: Option<String>,
    status: Option<String>,
    explorer_url: String,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            size: (80, 24),
            game: GameState::default(),
            cursor: 0,
            player_name: None,
            balance: None,
            mint_tx: None,
            token_name: None,
            token_symbol: None,
            price: None,
            status: None,
            explorer_url: config.token.explorer_url(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    pub fn balance(&self) -> Option<&str> {
        self.balance.as_deref()
    }

    pub fn mint_tx(&self) -> Option<&str> {
        self.mint_tx.as_deref()
    }

    pub fn token_name(&self) -> Option<&str> {
        self.token_name.as_deref()
    }

    pub fn token_symbol(&self) -> Option<&str> {
        self.token_symbol.as_deref()
    }

    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn explorer_url(&self) -> &str {
        &self.explorer_url
    }

    pub fn set_size(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    /// Fired once on startup: identity, contract metadata, balance,
    /// and price feed, all independent.
    pub fn startup_commands(&self) -> Vec<Command> {
        vec![
            Command::FetchProfile,
            Command::FetchContractDetail,
            Command::FetchBalance,
            Command::FetchPriceFeed,
        ]
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Vec<Command> {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Mouse(mouse) => self.on_mouse(mouse),
            AppEvent::Tick => Vec::new(),
            AppEvent::Resize(cols, rows) => {
                self.size = (cols, rows);
                Vec::new()
            }
            AppEvent::MismatchTimer { epoch } => {
                self.dispatch(GameIntent::MismatchElapsed { epoch })
            }
            AppEvent::ProfileFetched(Ok(profile)) => {
                self.player_name = Some(profile.display_name);
                Vec::new()
            }
            AppEvent::ProfileFetched(Err(err)) => self.surface("profile", err),
            AppEvent::ContractDetailFetched(Ok(detail)) => {
                self.token_name = detail.name;
                self.token_symbol = detail.symbol;
                Vec::new()
            }
            AppEvent::ContractDetailFetched(Err(err)) => self.surface("contract detail", err),
            AppEvent::BalanceFetched(Ok(balance)) => {
                self.balance = Some(balance.balance);
                Vec::new()
            }
            AppEvent::BalanceFetched(Err(err)) => self.surface("balance", err),
            AppEvent::MintCompleted(Ok(receipt)) => {
                info!(tx = %receipt.transaction_hash, "reward minted");
                self.mint_tx = Some(receipt.transaction_hash);
                Vec::new()
            }
            AppEvent::MintCompleted(Err(err)) => self.surface("mint", err),
            AppEvent::PriceFeedFetched(Ok(feed)) => {
                self.price = feed.price;
                Vec::new()
            }
            AppEvent::PriceFeedFetched(Err(err)) => self.surface("price feed", err),
        }
    }

    /// Starts (or, after game over, restarts) with a fresh random
    /// permutation.
    pub fn start_new_game(&mut self) -> Vec<Command> {
        self.start_with_deck(shuffled_deck(&mut rand::thread_rng()))
    }

    /// Deterministic entry point: tests inject the permutation.
    pub fn start_with_deck(&mut self, deck: Vec<Card>) -> Vec<Command> {
        self.mint_tx = None;
        self.cursor = 0;
        self.dispatch(GameIntent::Start { deck })
    }

    /// Runs the reducer and derives side effects from the transition:
    /// a freshly pending mismatch schedules its timer, and the
    /// transition into `Over` issues the mint followed by a balance
    /// refresh — two independent calls, mint first, no rollback.
    pub fn dispatch(&mut self, intent: GameIntent) -> Vec<Command> {
        let phase_before = self.game.phase;
        let pending_before = self.game.pending_mismatch;
        self.game = GameReducer::reduce(mem::take(&mut self.game), intent);

        let mut commands = Vec::new();
        if let Some(epoch) = self.game.pending_mismatch {
            if pending_before != Some(epoch) {
                commands.push(Command::ScheduleMismatch { epoch });
            }
        }
        if phase_before != GamePhase::Over && self.game.phase == GamePhase::Over {
            info!(
                score = self.game.score,
                turns = self.game.turns,
                "all pairs found"
            );
            commands.push(Command::Mint {
                amount: MINT_REWARD_AMOUNT.to_string(),
            });
            commands.push(Command::FetchBalance);
        }
        commands
    }

    fn surface(&mut self, what: &str, err: impl std::fmt::Display) -> Vec<Command> {
        warn!(what, %err, "async call failed");
        self.status = Some(format!("{} unavailable: {}", what, err));
        Vec::new()
    }

    fn on_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Vec::new();
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Vec::new()
            }
            KeyCode::Char('s') if self.game.phase == GamePhase::NotStarted => {
                self.start_new_game()
            }
            KeyCode::Char('r') if self.game.phase == GamePhase::Over => self.start_new_game(),
            KeyCode::Left => self.move_cursor(|cursor, cols, _| {
                if cursor % cols > 0 {
                    cursor - 1
                } else {
                    cursor
                }
            }),
            KeyCode::Right => self.move_cursor(|cursor, cols, count| {
                if cursor % cols < cols - 1 && cursor + 1 < count {
                    cursor + 1
                } else {
                    cursor
                }
            }),
            KeyCode::Up => self.move_cursor(|cursor, cols, _| cursor.saturating_sub(cols)),
            KeyCode::Down => self.move_cursor(|cursor, cols, count| {
                if cursor + cols < count {
                    cursor + cols
                } else {
                    cursor
                }
            }),
            KeyCode::Enter | KeyCode::Char(' ')
                if self.game.phase == GamePhase::InProgress =>
            {
                let index = self.cursor;
                self.dispatch(GameIntent::Flip { index })
            }
            _ => Vec::new(),
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Vec<Command> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Vec::new();
        }
        if self.game.phase != GamePhase::InProgress {
            return Vec::new();
        }
        let grid = self.grid_area();
        match board::hit_test(grid, self.game.deck.len(), mouse.column, mouse.row) {
            Some(index) => {
                self.cursor = index;
                self.dispatch(GameIntent::Flip { index })
            }
            None => Vec::new(),
        }
    }

    fn move_cursor(&mut self, step: impl Fn(usize, usize, usize) -> usize) -> Vec<Command> {
        let count = self.game.deck.len();
        if count == 0 {
            return Vec::new();
        }
        let cols = board::columns_for(self.grid_area().width);
        self.cursor = step(self.cursor, cols, count).min(count - 1);
        Vec::new()
    }

    fn grid_area(&self) -> Rect {
        let area = Rect::new(0, 0, self.size.0, self.size.1);
        board::board_area(layout::body_rect(area))
    }
}
