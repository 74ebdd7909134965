use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::app::App;
use crate::palette::ColorRole;
use crate::types::ThemePreference;

/// Roles shown as swatches under the theme choice.
const SWATCHES: [ColorRole; 6] = [
    ColorRole::BrandAccentColor,
    ColorRole::PrimaryText,
    ColorRole::Success,
    ColorRole::Warning,
    ColorRole::Error,
    ColorRole::RatingStar,
];

pub fn build_settings_text(app: &App, theme: &Theme) -> Text<'static> {
    let tr = app.settings.translator();
    let label = Style::default().fg(theme.dim());
    let mut lines = Vec::new();

    let mut choices = vec![Span::styled(format!("  {}: ", tr.t("settings.theme")), label)];
    for preference in ThemePreference::ALL {
        let name = tr.t(&format!("theme.{}", preference.as_str()));
        let style = if preference == app.settings.theme_preference() {
            Style::default()
                .fg(theme.on_primary())
                .bg(theme.primary())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text())
        };
        choices.push(Span::styled(format!(" {name} "), style));
        choices.push(Span::raw(" "));
    }
    lines.push(Line::from(choices));

    let scheme = app.settings.actual_theme();
    lines.push(Line::from(vec![
        Span::styled(format!("  {}: ", tr.t("settings.active")), label),
        Span::styled(
            tr.t(&format!("theme.{}", scheme.as_str())),
            Style::default().fg(theme.accent()).add_modifier(Modifier::BOLD),
        ),
    ]));

    let mut swatches = vec![Span::raw("  ")];
    for role in SWATCHES {
        swatches.push(Span::styled("███ ", Style::default().fg(theme.color(role))));
    }
    lines.push(Line::from(swatches));
    lines.push(Line::from(""));

    let mut languages = vec![Span::styled(format!("  {}: ", tr.t("settings.language")), label)];
    for code in crate::i18n::SUPPORTED_LANGUAGES {
        let style = if code == app.settings.language() {
            Style::default()
                .fg(theme.on_primary())
                .bg(theme.primary())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text())
        };
        languages.push(Span::styled(format!(" {code} "), style));
        languages.push(Span::raw(" "));
    }
    lines.push(Line::from(languages));

    Text::from(lines)
}
