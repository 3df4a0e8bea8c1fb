use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::AiSettings;
use crate::game::Snapshot;
use crate::renderer::{FrameInfo, board_size};

const VALUE_FLASH_HOLD_DURATION: Duration = Duration::from_millis(600);
const VALUE_FLASH_FADE_DURATION: Duration = Duration::from_millis(900);
const VALUE_FLASH_DURATION: Duration = Duration::from_millis(1_500);
const SEPARATOR: &str = " │ ";

/// Per-value flash timestamps for HUD value transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudValueFlash {
    pub score_changed_at: Option<Instant>,
    pub level_changed_at: Option<Instant>,
    pub high_score_changed_at: Option<Instant>,
    last_seen: Option<(u32, u32, u32)>,
}

impl HudValueFlash {
    /// Stamps every value that differs from the previous observation.
    ///
    /// The first observation only records the baseline.
    pub fn observe(&mut self, snapshot: &Snapshot<'_>, now: Instant) {
        let current = (snapshot.score, snapshot.level, snapshot.high_score);
        if let Some((score, level, high_score)) = self.last_seen {
            if score != current.0 {
                self.score_changed_at = Some(now);
            }
            if level != current.1 {
                self.level_changed_at = Some(now);
            }
            if high_score != current.2 {
                self.high_score_changed_at = Some(now);
            }
        }
        self.last_seen = Some(current);
    }
}

/// Centres the board, renders the two HUD rows beneath it and returns the
/// board area.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot<'_>,
    info: &FrameInfo<'_>,
) -> Rect {
    let (board_width, board_height) = board_size(snapshot.grid);
    let [column] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(area);
    let [play_area, score_area, status_area] = Layout::vertical([
        Constraint::Length(board_height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(column);

    let theme = info.theme;
    frame.render_widget(
        Paragraph::new(score_line(snapshot, info))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.ui_muted)),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(toggles_line(
            snapshot.settings,
            snapshot.tick_interval_ms,
            theme.ui_accent,
            theme.ui_muted,
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.ui_muted)),
        status_area,
    );

    play_area
}

fn score_line(snapshot: &Snapshot<'_>, info: &FrameInfo<'_>) -> Line<'static> {
    let theme = info.theme;
    let flash = info.value_flash;
    let value = |changed_at| {
        Style::default().fg(flash_color(theme.ui_bright, theme.ui_accent, changed_at, info.now))
    };

    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(snapshot.score.to_string(), value(flash.score_changed_at)),
        Span::raw(SEPARATOR),
        Span::raw("Level: "),
        Span::styled(snapshot.level.to_string(), value(flash.level_changed_at)),
        Span::raw(SEPARATOR),
        Span::raw("Hi: "),
        Span::styled(
            snapshot.high_score.to_string(),
            value(flash.high_score_changed_at),
        ),
        Span::raw(SEPARATOR),
        Span::raw("Len: "),
        Span::styled(
            snapshot.player.len().to_string(),
            Style::default().fg(theme.ui_bright),
        ),
    ])
}

fn toggles_line(
    settings: AiSettings,
    tick_interval_ms: u64,
    on_color: Color,
    off_color: Color,
) -> Line<'static> {
    let toggle = |key: &str, label: &str, enabled: bool| {
        let style = Style::default().fg(if enabled { on_color } else { off_color });
        Span::styled(format!("[{key}] {label}"), style)
    };

    Line::from(vec![
        toggle("1", "Smart", settings.smart_food),
        Span::raw(" "),
        toggle("2", "Ghost", settings.ghost),
        Span::raw(" "),
        toggle("3", "Adapt", settings.adaptive),
        Span::raw(SEPARATOR),
        Span::raw(format!("{tick_interval_ms}ms")),
    ])
}

fn flash_color(base: Color, accent: Color, changed_at: Option<Instant>, now: Instant) -> Color {
    let Some(changed_at) = changed_at else {
        return base;
    };
    let elapsed = now.saturating_duration_since(changed_at);
    if elapsed >= VALUE_FLASH_DURATION {
        return base;
    }
    if elapsed <= VALUE_FLASH_HOLD_DURATION {
        return accent;
    }

    let fade_elapsed = elapsed - VALUE_FLASH_HOLD_DURATION;
    let t = fade_elapsed.as_secs_f32() / VALUE_FLASH_FADE_DURATION.as_secs_f32();
    blend_color(accent, base, ease_out_cubic(t))
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

fn blend_color(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(fr, fg, fb), Color::Rgb(tr, tg, tb)) => {
            Color::Rgb(lerp_u8(fr, tr, t), lerp_u8(fg, tg, t), lerp_u8(fb, tb, t))
        }
        _ if t < 1.0 => from,
        _ => to,
    }
}

fn lerp_u8(from: u8, to: u8, t: f32) -> u8 {
    (f32::from(from) + (f32::from(to) - f32::from(from)) * t).round() as u8
}
