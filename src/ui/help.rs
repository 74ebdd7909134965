use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::app::App;

pub fn build_help_text(app: &App, theme: &Theme) -> Text<'static> {
    let tr = app.settings.translator();
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        tr.t("help.title"),
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title(&tr.t("help.global"), theme));
    lines.extend(section_lines(
        &[
            "q: Quit",
            "?: Toggle help",
            "1-5: Feed / Products / Notifications / Settings / Help",
            "Tab: Toggle focus (tab bar / content)",
            "Left/Right: Navigate tabs (tab bar focus)",
            "r: Refresh current view",
            "esc: Back",
        ],
        theme,
    ));

    lines.push(Line::from(""));
    lines.push(section_title(&tr.t("help.lists"), theme));
    lines.extend(section_lines(&["Up/Down: Move selection", "Enter: Open"], theme));

    lines.push(Line::from(""));
    lines.push(section_title(&tr.t("help.screens"), theme));
    lines.extend(section_lines(
        &[
            "Feed - m: Load next page",
            "Products - f: Cycle category filter, /: Search by name",
            "Product - r: Load more reviews",
            "Notifications - space: Mark read, a: Mark all read",
            "Settings - t: Cycle theme (system/light/dark), l: Cycle language",
        ],
        theme,
    ));

    Text::from(lines)
}

fn section_title(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str], theme: &Theme) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(theme.text()),
            ))
        })
        .collect()
}
