use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::Banner;

/// Title and message for an overlay banner.
#[must_use]
pub fn banner_text(banner: Banner) -> (&'static str, String) {
    match banner {
        Banner::Ready => ("READY?", "Press any arrow key to start!".to_owned()),
        Banner::GameOver { score } => (
            "GAME OVER",
            format!("Score: {score} • Press SPACE to restart"),
        ),
        Banner::NewHighScore { score } => (
            "NEW HIGH SCORE!",
            format!("{score} points! Press SPACE to play again"),
        ),
        Banner::Victory { score } => (
            "BOARD CLEARED!",
            format!("{score} points! Press SPACE"),
        ),
    }
}

/// Draws a banner as a centered popup over the board.
pub fn render_banner(frame: &mut Frame<'_>, area: Rect, banner: Banner, theme: &Theme) {
    let popup = centered_popup(area, 90, 40);
    frame.render_widget(Clear, popup);

    let (title, message) = banner_text(banner);
    let lines = vec![
        Line::from(title).style(
            Style::default()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(message),
        Line::from(""),
        Line::from("[1] smart [2] ghost [3] adapt")
            .style(Style::default().fg(theme.menu_footer)),
        Line::from("[Q]/[Esc] Quit").style(Style::default().fg(theme.menu_footer)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::default().fg(theme.border_fg))),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
