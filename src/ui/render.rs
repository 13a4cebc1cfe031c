use crate::animation::AnimationFrame;
use crate::machine::{ButtonState, Phase};
use crate::ui::app::App;
use crate::ui::big_digits;
use crate::ui::explosion::ExplosionCanvas;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions, scale_rect};
use crate::ui::theme::{solid, BACKGROUND, BUTTON_RED, HEADER_TEXT, RESET_BACKGROUND, SUBTITLE};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use std::time::Instant;

const BUTTON_WIDTH: u16 = 26;
const BUTTON_HEIGHT: u16 = 9;
const BUTTON_LABEL: &str = "PRESS ME!";
const RESET_WIDTH: u16 = 13;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(Header::new().widget(state), header);
    match state.phase() {
        Phase::Initial => draw_initial(frame, body, &app.frame(now)),
        Phase::Countdown => draw_countdown(frame, body, state),
        Phase::Explosion => draw_explosion(frame, body, &app.frame(now)),
    }
    frame.render_widget(Footer::new().widget(state.phase(), footer), footer);
}

fn draw_initial(frame: &mut Frame<'_>, body: Rect, animation: &AnimationFrame) {
    let [_, slot, _, subtitle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(body);

    let button = scale_rect(
        centered_rect_by_size(slot, BUTTON_WIDTH, BUTTON_HEIGHT),
        animation.button_scale,
    );
    let red = solid(BUTTON_RED);
    let inner_height = button.height.saturating_sub(2);
    let mut lines = vec![Line::from(""); usize::from(inner_height.saturating_sub(1) / 2)];
    lines.push(Line::from(BUTTON_LABEL));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(red)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(red).bg(BACKGROUND)),
            ),
        button,
    );

    frame.render_widget(
        Paragraph::new("Dare to press the button?")
            .alignment(Alignment::Center)
            .style(Style::default().fg(SUBTITLE)),
        subtitle,
    );
}

fn draw_countdown(frame: &mut Frame<'_>, body: Rect, state: &ButtonState) {
    let [_, number, _, label, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(big_digits::HEIGHT as u16),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(body);

    let rows = big_digits::glyph(state.countdown().value())
        .map(|rows| rows.iter().map(|row| Line::from(*row)).collect::<Vec<_>>())
        .unwrap_or_else(|| vec![Line::from(state.countdown().to_string())]);
    frame.render_widget(
        Paragraph::new(rows).alignment(Alignment::Center).style(
            Style::default()
                .fg(solid(BUTTON_RED))
                .add_modifier(Modifier::BOLD),
        ),
        number,
    );

    if let Some(caption) = state.countdown_label() {
        frame.render_widget(
            Paragraph::new(caption)
                .alignment(Alignment::Center)
                .style(Style::default().fg(HEADER_TEXT)),
            label,
        );
    }
}

fn draw_explosion(frame: &mut Frame<'_>, body: Rect, animation: &AnimationFrame) {
    frame.render_widget(ExplosionCanvas::new(animation), body);

    let [_, boom, _, reset, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(body);

    frame.render_widget(
        Paragraph::new("💥 BOOM! 💥")
            .alignment(Alignment::Center)
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)),
        boom,
    );
    frame.render_widget(
        Paragraph::new("Reset")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(RESET_BACKGROUND)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(HEADER_TEXT)),
            ),
        centered_rect_by_size(reset, RESET_WIDTH, 3),
    );
}
