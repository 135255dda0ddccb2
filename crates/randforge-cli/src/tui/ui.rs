use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::state::{App, MENU, Screen};

pub fn draw_ui(frame: &mut ratatui::Frame, app: &App) {
    match app.screen {
        Screen::Menu => draw_menu(frame, app),
        Screen::Form => draw_form(frame, app),
        Screen::Results => draw_results(frame, app),
    }
}

fn frame_layout(frame: &ratatui::Frame, body_height: u16) -> [ratatui::layout::Rect; 3] {
    let area = frame.size();
    let vertical_pad = area.height.saturating_sub(body_height + 1) / 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_pad),
            Constraint::Length(body_height),
            Constraint::Min(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

fn draw_menu(frame: &mut ratatui::Frame, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            "RANDFORGE",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Random value generator",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for (index, (label, _)) in MENU.iter().enumerate() {
        let numbered = format!("{}. {label}", index + 1);
        if index == app.menu_idx {
            lines.push(Line::from(vec![
                Span::styled(" ► ", Style::default().fg(Color::Green)),
                Span::styled(
                    numbered,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(numbered, Style::default().fg(Color::Gray)),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ move · Enter select · 1-6 jump · q quit",
        Style::default().fg(Color::DarkGray),
    )));

    let [_, body, _] = frame_layout(frame, lines.len() as u16);
    let paragraph = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(paragraph, body);
}

fn draw_form(frame: &mut ratatui::Frame, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            app.mode.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.mode.hint(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    for (index, field) in app.fields.iter().enumerate() {
        let text = format!("{}: {}", field.label, field.value);
        if index == app.field_idx {
            lines.push(Line::from(vec![
                Span::styled(" ► ", Style::default().fg(Color::Green)),
                Span::styled(
                    text,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("▌", Style::default().fg(Color::Green)),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(text, Style::default().fg(Color::Gray)),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter next/submit · ↑/↓ move · Esc back",
        Style::default().fg(Color::DarkGray),
    )));

    let [_, body, _] = frame_layout(frame, lines.len() as u16);
    let paragraph = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Left)
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(paragraph, body);
}

fn draw_results(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let header = if app.error.is_some() {
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("{} — {} value(s)", app.mode.title(), app.results.len()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let body = match &app.error {
        Some(message) => Paragraph::new(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )))
        .wrap(Wrap { trim: false }),
        None => {
            let lines: Vec<Line> = app
                .results
                .iter()
                .map(|value| Line::from(Span::styled(value.clone(), Style::default().fg(Color::White))))
                .collect();
            Paragraph::new(lines).wrap(Wrap { trim: false })
        }
    };
    frame.render_widget(
        body.block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    let footer = Paragraph::new(Line::from(Span::styled(
        "Enter/Esc menu · q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, chunks[2]);
}
