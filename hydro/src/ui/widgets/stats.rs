//! Score and progress sidebar

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use hydro_core::{evolution, EvolutionStore};

use crate::ui::theme::GameTheme;
use crate::view;

/// Score, collection count and a progress bar toward the next stage
pub struct StatsWidget<'a> {
    store: &'a EvolutionStore,
    theme: &'a GameTheme,
}

impl<'a> StatsWidget<'a> {
    pub fn new(store: &'a EvolutionStore, theme: &'a GameTheme) -> Self {
        Self { store, theme }
    }

    /// Fraction of the way from the current stage's threshold to the next
    fn progress(&self) -> f64 {
        let stage = self.store.selected_stage();
        let Some(next) = evolution::next_threshold(stage) else {
            return 1.0;
        };
        let floor = stage
            .checked_sub(1)
            .and_then(evolution::next_threshold)
            .unwrap_or(0.0);
        ((self.store.hydration_score() - floor) / (next - floor)).clamp(0.0, 1.0)
    }
}

impl Widget for StatsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Score/collection/next
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Progress bar
                Constraint::Min(0),
            ])
            .split(inner);

        let lines = vec![
            Line::from(Span::styled(
                view::score_line(self.store),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(view::collected_line(self.store)),
            Line::from(Span::styled(
                view::next_evolution_line(self.store),
                self.theme.system_style(),
            )),
        ];
        Paragraph::new(lines).render(chunks[0], buf);

        let stage = self.store.selected_stage();
        Gauge::default()
            .gauge_style(Style::default().fg(self.theme.stage_color(stage + 1)))
            .ratio(self.progress())
            .label(format!("{:.0}%", self.progress() * 100.0))
            .render(chunks[2], buf);
    }
}
