use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, TITLE};

pub struct Header<'a> {
    pub app: &'a App,
}

impl<'a> Header<'a> {
    pub fn widget(&self) -> Paragraph<'a> {
        let app = self.app;
        let text = Style::default().fg(HEADER_TEXT);
        let separator = Style::default().fg(HEADER_SEPARATOR);
        let title = Style::default().fg(TITLE).add_modifier(Modifier::BOLD);

        let token = app.token_symbol().unwrap_or("tokens");
        let name_line = Line::from(vec![
            Span::styled(" MATCHMINT", title),
            Span::styled("  │  ", separator),
            Span::styled("Player: ", text),
            Span::styled(app.player_name().unwrap_or("—"), text),
        ]);

        let mut balance_spans = vec![
            Span::styled(format!(" {} balance: ", token), text),
            Span::styled(app.balance().unwrap_or("…").to_string(), text),
            Span::styled("  │  ", separator),
            Span::styled(app.explorer_url(), separator),
        ];
        if let Some(price) = app.price() {
            balance_spans.push(Span::styled("  │  ", separator));
            balance_spans.push(Span::styled(format!("price: {}", price), text));
        }

        let game = app.game();
        let counter_line = Line::from(vec![
            Span::styled(format!(" Score: {}", game.score), text),
            Span::styled("  │  ", separator),
            Span::styled(format!("Turns: {}", game.turns), text),
            Span::styled("  │  ", separator),
            Span::styled(format!("Pairs: {}/5", game.pairs_found()), text),
        ]);

        Paragraph::new(vec![name_line, Line::from(balance_spans), counter_line]).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
