//! The card grid: geometry shared by rendering and mouse hit-testing.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};

use crate::ui::game::{GamePhase, GameState};
use crate::ui::theme::{CARD_BACK, CARD_CURSOR, CARD_FACE, CARD_MATCHED};

pub const CARD_WIDTH: u16 = 9;
pub const CARD_HEIGHT: u16 = 3;
pub const CARD_GAP: u16 = 1;

/// Width at which the grid switches from the narrow 2-column layout
/// to the full 5-column one, the terminal analogue of the original's
/// desktop media query.
pub const WIDE_BREAKPOINT: u16 = 52;

/// Rows reserved under the grid for win/status messaging.
pub const MESSAGE_ROWS: u16 = 5;

pub fn columns_for(width: u16) -> usize {
    if width >= WIDE_BREAKPOINT {
        5
    } else {
        2
    }
}

/// The part of the body the grid occupies; the rest shows messages.
pub fn board_area(body: Rect) -> Rect {
    Rect {
        height: body.height.saturating_sub(MESSAGE_ROWS),
        ..body
    }
}

/// One rect per card, centered horizontally, row-major order.
pub fn card_rects(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || area.width < CARD_WIDTH {
        return Vec::new();
    }
    let columns = columns_for(area.width);
    let total_width = columns as u16 * CARD_WIDTH + (columns as u16 - 1) * CARD_GAP;
    let x0 = area.x + area.width.saturating_sub(total_width) / 2;
    (0..count)
        .map(|i| {
            let col = (i % columns) as u16;
            let row = (i / columns) as u16;
            Rect::new(
                x0 + col * (CARD_WIDTH + CARD_GAP),
                area.y + row * (CARD_HEIGHT + CARD_GAP),
                CARD_WIDTH,
                CARD_HEIGHT,
            )
        })
        .collect()
}

/// Which card, if any, sits under the given terminal cell.
pub fn hit_test(area: Rect, count: usize, x: u16, y: u16) -> Option<usize> {
    card_rects(area, count).iter().position(|rect| {
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
    })
}

pub struct BoardWidget<'a> {
    pub game: &'a GameState,
    pub cursor: usize,
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rects = card_rects(area, self.game.deck.len());
        for (index, rect) in rects.into_iter().enumerate() {
            // Cards that don't fit the current terminal are clipped
            // whole rather than drawn partially.
            if rect.x + rect.width > area.x + area.width
                || rect.y + rect.height > area.y + area.height
            {
                continue;
            }

            let face_up = self.game.is_face_up(index);
            let matched = self
                .game
                .deck
                .get(index)
                .map(|card| self.game.matched.contains(&card.value))
                .unwrap_or(false);

            let border = if self.game.phase == GamePhase::InProgress && index == self.cursor {
                Style::default().fg(CARD_CURSOR)
            } else if matched {
                Style::default().fg(CARD_MATCHED)
            } else if face_up {
                Style::default().fg(CARD_FACE)
            } else {
                Style::default().fg(CARD_BACK)
            };

            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .render(rect, buf);

            let symbol = if face_up {
                self.game.deck[index].value.symbol()
            } else {
                "?"
            };
            let style = if face_up {
                Style::default().fg(CARD_FACE)
            } else {
                Style::default().fg(CARD_BACK)
            };
            let x = rect.x + rect.width / 2 - 1;
            let y = rect.y + rect.height / 2;
            buf.set_string(x, y, symbol, style);
        }
    }
}
