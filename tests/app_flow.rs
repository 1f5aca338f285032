use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use matchmint::api::ApiError;
use matchmint::config::Config;
use matchmint::ui::app::{App, Command, MINT_REWARD_AMOUNT};
use matchmint::ui::events::AppEvent;
use matchmint::ui::game::{card_set, GameIntent, GamePhase};
use matchmint::ui::{board, layout};

fn app() -> App {
    App::new(&Config::default())
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn win(app: &mut App) -> Vec<Command> {
    app.start_with_deck(card_set().to_vec());
    let mut commands = Vec::new();
    for index in 0..10 {
        commands.extend(app.dispatch(GameIntent::Flip { index }));
    }
    commands
}

#[test]
fn startup_issues_the_four_initial_fetches() {
    let commands = app().startup_commands();
    assert_eq!(
        commands,
        vec![
            Command::FetchProfile,
            Command::FetchContractDetail,
            Command::FetchBalance,
            Command::FetchPriceFeed,
        ]
    );
}

#[test]
fn pressing_s_starts_a_game() {
    let mut app = app();
    assert_eq!(app.game().phase, GamePhase::NotStarted);
    app.handle_event(key(KeyCode::Char('s')));
    assert_eq!(app.game().phase, GamePhase::InProgress);
    assert_eq!(app.game().deck.len(), 10);
}

#[test]
fn winning_emits_exactly_one_mint_followed_by_a_balance_refresh() {
    let mut app = app();
    let commands = win(&mut app);

    assert_eq!(app.game().phase, GamePhase::Over);
    let mints: Vec<_> = commands
        .iter()
        .filter(|c| matches!(c, Command::Mint { .. }))
        .collect();
    assert_eq!(mints.len(), 1);

    // The terminal transition yields mint first, refresh second.
    let tail = &commands[commands.len() - 2..];
    assert_eq!(
        tail,
        &[
            Command::Mint {
                amount: MINT_REWARD_AMOUNT.to_string()
            },
            Command::FetchBalance,
        ]
    );
}

#[test]
fn mismatch_schedules_its_timer_exactly_once() {
    let mut app = app();
    app.start_with_deck(card_set().to_vec());

    let first = app.dispatch(GameIntent::Flip { index: 0 });
    assert!(first.is_empty());

    let second = app.dispatch(GameIntent::Flip { index: 2 });
    let epoch = app.game().epoch;
    assert_eq!(second, vec![Command::ScheduleMismatch { epoch }]);

    // Blocked flips during the delay schedule nothing.
    let third = app.dispatch(GameIntent::Flip { index: 4 });
    assert!(third.is_empty());
}

#[test]
fn mismatch_timer_event_resolves_the_comparison() {
    let mut app = app();
    app.start_with_deck(card_set().to_vec());
    app.dispatch(GameIntent::Flip { index: 0 });
    app.dispatch(GameIntent::Flip { index: 2 });

    let epoch = app.game().epoch;
    app.handle_event(AppEvent::MismatchTimer { epoch });
    assert!(app.game().flipped.is_empty());
    assert_eq!(app.game().turns, 1);
}

#[test]
fn timer_from_a_previous_game_does_not_touch_the_new_board() {
    let mut app = app();
    app.start_with_deck(card_set().to_vec());
    app.dispatch(GameIntent::Flip { index: 0 });
    app.dispatch(GameIntent::Flip { index: 2 });
    let stale_epoch = app.game().epoch;

    app.start_with_deck(card_set().to_vec());
    let fresh = app.game().clone();

    let commands = app.handle_event(AppEvent::MismatchTimer { epoch: stale_epoch });
    assert!(commands.is_empty());
    assert_eq!(app.game(), &fresh);
}

#[test]
fn failed_balance_call_surfaces_a_status_line_and_play_continues() {
    let mut app = app();
    let commands = app.handle_event(AppEvent::BalanceFetched(Err(ApiError::Status {
        endpoint: "contract/balance",
        status: 500,
    })));
    assert!(commands.is_empty());
    let status = app.status().expect("failure should surface");
    assert!(status.contains("balance"));

    // The game itself is untouched by the failed call.
    app.start_with_deck(card_set().to_vec());
    app.dispatch(GameIntent::Flip { index: 0 });
    assert_eq!(app.game().flipped, vec![0]);
}

#[test]
fn mouse_click_on_a_card_flips_it() {
    let mut app = app();
    app.set_size(80, 30);
    app.start_with_deck(card_set().to_vec());

    let grid = board::board_area(layout::body_rect(Rect::new(0, 0, 80, 30)));
    let rects = board::card_rects(grid, 10);
    let target = rects[3];

    app.handle_event(AppEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: target.x + target.width / 2,
        row: target.y + 1,
        modifiers: KeyModifiers::NONE,
    }));
    assert_eq!(app.game().flipped, vec![3]);
}

#[test]
fn click_outside_the_grid_is_ignored() {
    let mut app = app();
    app.set_size(80, 30);
    app.start_with_deck(card_set().to_vec());

    app.handle_event(AppEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }));
    assert!(app.game().flipped.is_empty());
}

#[test]
fn r_resets_only_after_game_over() {
    let mut app = app();
    app.start_with_deck(card_set().to_vec());
    app.handle_event(key(KeyCode::Char('r')));
    assert_eq!(app.game().phase, GamePhase::InProgress);
    assert_eq!(app.game().epoch, 1);

    win(&mut app);
    app.handle_event(AppEvent::MintCompleted(Ok(matchmint::api::MintReceipt {
        transaction_hash: "0xfeed".to_string(),
    })));
    assert_eq!(app.mint_tx(), Some("0xfeed"));

    app.handle_event(key(KeyCode::Char('r')));
    assert_eq!(app.game().phase, GamePhase::InProgress);
    assert_eq!(app.game().score, 0);
    assert_eq!(app.game().turns, 0);
    // Stale receipt from the previous round is cleared.
    assert_eq!(app.mint_tx(), None);
}

#[test]
fn q_requests_quit() {
    let mut app = app();
    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}
