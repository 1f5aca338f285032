use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::app::{App, MINT_REWARD_AMOUNT};
use crate::ui::board::{board_area, BoardWidget};
use crate::ui::footer::Footer;
use crate::ui::game::GamePhase;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, WIN_SPECIAL, WIN_TOKEN};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    frame.render_widget(Header { app }.widget(), header);
    draw_body(frame, app, body);
    frame.render_widget(Footer { app }.widget(footer), footer);
}

fn draw_body(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let grid = board_area(body);
    let game = app.game();
    if game.phase != GamePhase::NotStarted {
        frame.render_widget(
            BoardWidget {
                game,
                cursor: app.cursor(),
            },
            grid,
        );
    }

    let message_area = Rect {
        x: body.x,
        y: body.y + grid.height,
        width: body.width,
        height: body.height.saturating_sub(grid.height),
    };
    frame.render_widget(
        Paragraph::new(messages(app)).alignment(Alignment::Center),
        message_area,
    );
}

fn messages(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let game = app.game();
    match game.phase {
        GamePhase::NotStarted => {
            lines.push(Line::styled(
                "Press S to start",
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            ));
        }
        GamePhase::InProgress => {}
        GamePhase::Over => {
            if game.score > 100 {
                lines.push(Line::styled(
                    "Amazing — over 100 points! Congratulations!",
                    Style::default().fg(WIN_SPECIAL).add_modifier(Modifier::BOLD),
                ));
            } else {
                lines.push(Line::styled(
                    "Game clear! Well played!",
                    Style::default().fg(HEADER_TEXT),
                ));
            }
            let token = app.token_symbol().unwrap_or("tokens").to_string();
            lines.push(Line::styled(
                format!("You received {} {}!", MINT_REWARD_AMOUNT, token),
                Style::default().fg(WIN_TOKEN).add_modifier(Modifier::BOLD),
            ));
            if let Some(tx) = app.mint_tx() {
                lines.push(Line::styled(
                    format!("tx {}", tx),
                    Style::default().fg(HEADER_SEPARATOR),
                ));
            }
            lines.push(Line::styled(
                "Press R to play again",
                Style::default().fg(STATUS_OK),
            ));
        }
    }
    if let Some(status) = app.status() {
        lines.push(Line::styled(
            status.to_string(),
            Style::default().fg(STATUS_ERROR),
        ));
    }
    lines
}
