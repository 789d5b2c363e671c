//! Render orchestration for the Hydro Freaks TUI

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use hydro_core::{DrinkKind, MonsterType};

use crate::app::{App, Screen};
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{InputWidget, MonsterWidget, StatsWidget};
use crate::view;

/// Overlay types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Help,
    /// The active freak just reached a new stage
    Evolved { monster: MonsterType, stage: u8 },
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    render_title_bar(frame, app, layout.title_area);

    let monster = MonsterWidget::new(
        app.store.selected_type(),
        app.store.selected_stage(),
        &app.theme,
    );
    frame.render_widget(monster, layout.monster_area);

    // The sidebar changes with the screen; the freak always stays visible
    let sidebar = layout.sidebar_area;
    match app.screen() {
        Screen::Main => frame.render_widget(StatsWidget::new(&app.store, &app.theme), sidebar),
        Screen::ChooseDrink => render_drink_menu(frame, app, sidebar),
        Screen::EnterVolume(kind) => render_volume_prompt(frame, app, kind, sidebar),
        Screen::Collection => render_collection(frame, app, sidebar),
        Screen::SelectMonster => render_select_monster(frame, app, sidebar),
        Screen::History => render_history(frame, app, sidebar),
    }

    render_menu_bar(frame, app, layout.menu_area);
    render_status_bar(frame, app, layout.status_bar);

    if let Some(overlay) = app.overlay() {
        render_overlay(frame, app, overlay, area);
    }
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));
    let title = Paragraph::new(Line::from(Span::styled(view::TITLE, app.theme.title_style())))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(title, area);
}

fn sidebar_block<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true))
}

/// Render the drink kind menu
fn render_drink_menu(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = DrinkKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| Line::from(view::drink_option_line(i + 1, *kind)))
        .collect();
    lines.push(Line::from("0. Cancel"));

    frame.render_widget(
        Paragraph::new(lines).block(sidebar_block(app, " Add Hydration ")),
        area,
    );
}

/// Render the volume prompt for the chosen drink
fn render_volume_prompt(frame: &mut Frame, app: &App, kind: DrinkKind, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let info = vec![
        Line::from(Span::styled(
            format!("{} ({:.1}x points)", kind.name(), kind.multiplier()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter amount in milliliters, then press Enter",
            app.theme.system_style(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(info).block(sidebar_block(app, " Add Hydration ")),
        chunks[0],
    );

    let input = InputWidget::new(app.input_buffer(), &app.theme)
        .cursor_position(app.cursor_position())
        .title(" Amount ")
        .placeholder("e.g. 250")
        .suffix(" ml");
    frame.render_widget(input, chunks[1]);
}

/// Render the collection of hatched freaks
fn render_collection(frame: &mut Frame, app: &App, area: Rect) {
    let collection = app.store.collection();
    let lines: Vec<Line> = if collection.iter().all(|&(_, stage)| stage == 0) {
        vec![Line::from("Your collection is empty. Drink more water!")]
    } else {
        collection
            .into_iter()
            .map(|(monster, stage)| {
                Line::from(Span::styled(
                    view::collection_line(monster, stage),
                    Style::default().fg(app.theme.stage_color(stage)),
                ))
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(sidebar_block(app, " Monster Collection ")),
        area,
    );
}

/// Render the freak selection list
fn render_select_monster(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = MonsterType::ALL
        .iter()
        .enumerate()
        .map(|(i, &monster)| {
            let unlocked = app.store.is_unlocked(monster);
            let style = app.theme.row_style(unlocked, i == app.selection);
            ListItem::new(Line::from(Span::styled(
                view::select_line(&app.store, monster),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(sidebar_block(app, " Select Monster "))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.selection));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render recent drinks, newest first
fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let recent = app.store.recent_drinks(app.config.history_limit);

    let mut lines: Vec<Line> = if recent.entries.is_empty() {
        vec![Line::from("No drink recorded yet.")]
    } else {
        recent
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Line::from(view::history_line(i + 1, entry)))
            .collect()
    };
    if recent.hidden > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            view::hidden_line(recent.hidden),
            app.theme.system_style(),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(sidebar_block(app, " Drink History "))
            .wrap(Wrap { trim: false }),
        area,
    );
}

/// Render the hotkey menu for the current screen
fn render_menu_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hint = match app.screen() {
        Screen::Main => {
            "1 Add drink  2 Collection  3 Change freak  4 History  ? Help  0 Exit"
        }
        Screen::ChooseDrink => "1 Water  2 Soda  3 Coffee  0/Esc Cancel",
        Screen::EnterVolume(_) => "Enter Add  Esc Back",
        Screen::Collection | Screen::History => "Enter/Esc Back",
        Screen::SelectMonster => "1-4 or j/k + Enter Select  0/Esc Cancel",
    };

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(false));
    frame.render_widget(Paragraph::new(hint).block(block), area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.status_message() {
        Some(message) => Line::from(Span::styled(message.to_string(), app.theme.text_style())),
        None => Line::from(Span::styled(
            format!("Saving to {}", app.store.save_path().display()),
            app.theme.system_style(),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Render overlay
fn render_overlay(frame: &mut Frame, app: &App, overlay: &Overlay, area: Rect) {
    match overlay {
        Overlay::Help => render_help_overlay(frame, app, area),
        Overlay::Evolved { monster, stage } => {
            render_evolved_overlay(frame, app, *monster, *stage, area)
        }
    }
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(52, 17, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let heading = Style::default().add_modifier(Modifier::UNDERLINED);
    let help_text = vec![
        Line::from(Span::styled(
            " Hydro Freaks - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Scoring:", heading)),
        Line::from("  Water 1.0x, Soda 0.5x, Coffee 0.3x points per ml"),
        Line::from("  Your freak evolves at 100, 300 and 500 points"),
        Line::from("  Reaching the final stage hatches a new egg"),
        Line::from(""),
        Line::from(Span::styled("Keys:", heading)),
        Line::from("  1-4      Menu choices"),
        Line::from("  j/k      Move in the selection list"),
        Line::from("  Esc      Go back"),
        Line::from("  0 or q   Exit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

/// Render the evolution celebration
fn render_evolved_overlay(frame: &mut Frame, app: &App, monster: MonsterType, stage: u8, area: Rect) {
    let popup_area = centered_rect_fixed(36, 14, area);
    frame.render_widget(Clear, popup_area);

    // Blink the border between the old and new stage colors
    let border_color = if (app.animation_frame / 4) % 2 == 0 {
        app.theme.stage_color(stage)
    } else {
        app.theme.highlight
    };

    let widget = MonsterWidget::new(monster, stage, &app.theme)
        .title(" Your freak just evolved!!! ")
        .border_style(Style::default().fg(border_color));
    frame.render_widget(widget, popup_area);
}
