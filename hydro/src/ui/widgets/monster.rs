//! Freak display widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget},
};

use hydro_core::MonsterType;

use crate::ui::theme::GameTheme;
use crate::view;

/// Shows a freak's art with its type and stage underneath
pub struct MonsterWidget<'a> {
    monster: MonsterType,
    stage: u8,
    theme: &'a GameTheme,
    title: &'a str,
    border_style: Style,
}

impl<'a> MonsterWidget<'a> {
    pub fn new(monster: MonsterType, stage: u8, theme: &'a GameTheme) -> Self {
        Self {
            monster,
            stage,
            theme,
            title: " Your Freak ",
            border_style: theme.border_style(false),
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }
}

impl Widget for MonsterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(self.border_style);

        let art_style = Style::default().fg(self.theme.stage_color(self.stage));
        // Pad art rows to one width so centering keeps them aligned
        let art = self.monster.art(self.stage).trim_matches('\n');
        let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut lines: Vec<Line> = art
            .lines()
            .map(|l| Line::from(Span::styled(format!("{l:<width$}"), art_style)))
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            view::monster_line(self.monster),
            self.theme.text_style(),
        )));
        lines.push(Line::from(Span::styled(
            view::stage_line(self.stage),
            self.theme.text_style(),
        )));

        Paragraph::new(Text::from(lines))
            .block(block)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
