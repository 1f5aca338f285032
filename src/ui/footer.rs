use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::App;
use crate::ui::game::GamePhase;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    pub app: &'a App,
}

impl Footer<'_> {
    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = match self.app.game().phase {
            GamePhase::NotStarted => " S: Start │ Q: Quit",
            GamePhase::InProgress => " Click / Arrows+Enter: Flip │ Q: Quit",
            GamePhase::Over => " R: Reset │ Q: Quit",
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
