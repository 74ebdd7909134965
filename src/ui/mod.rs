mod feed;
mod help;
mod helpers;
mod notifications;
mod products;
mod settings;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, AppView, FocusMode, TABS};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = Theme::new(app.settings.palette());
    let tr = app.settings.translator();
    let area = frame.area();

    let body_text = match app.view {
        AppView::Feed => feed::build_feed_text(app, &theme),
        AppView::Products => products::build_products_text(app, &theme),
        AppView::ProductDetail => products::build_product_detail_text(app, &theme),
        AppView::Notifications => notifications::build_notifications_text(app, &theme),
        AppView::Settings => settings::build_settings_text(app, &theme),
        AppView::Help => help::build_help_text(app, &theme),
    };
    let title = match (&app.view, &app.selected_product) {
        (AppView::ProductDetail, Some(product)) => product.name.clone(),
        _ => tr.t(app.view.tab_key()),
    };

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background())),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Revio  ",
            Style::default()
                .fg(theme.on_primary())
                .bg(theme.primary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            tr.t("app.tagline"),
            Style::default()
                .fg(theme.text_secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(framed(&theme));
    frame.render_widget(header, layout[0]);

    let mut body_lines = vec![
        tabs_line(app, &theme),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    body_lines.extend(body_text.lines);
    body_lines.push(Line::from(""));
    body_lines.push(Line::from(Span::styled(
        "----------------------------------------",
        Style::default().fg(theme.color(crate::palette::ColorRole::Divider)),
    )));
    body_lines.extend(keybinds_lines(app, &theme));
    let body = Paragraph::new(Text::from(body_lines))
        .style(Style::default().fg(theme.text()))
        .alignment(Alignment::Left)
        .scroll((body_scroll(app), 0))
        .block(framed(&theme));
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Text::from(status_line(app, &theme)))
        .alignment(Alignment::Left)
        .block(framed(&theme));
    frame.render_widget(footer, layout[2]);
}

fn framed(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(theme.secondary()))
}

// Keeps the selected feed entry on screen; each post takes two lines.
fn body_scroll(app: &App) -> u16 {
    let lines = match app.view {
        AppView::Feed => app.selected_post_index.saturating_sub(4).saturating_mul(2),
        AppView::Products => app.selected_product_index.saturating_sub(10),
        AppView::Notifications => app.selected_notification_index.saturating_sub(10),
        _ => 0,
    };
    u16::try_from(lines).unwrap_or(u16::MAX)
}

fn tabs_line(app: &App, theme: &Theme) -> Line<'static> {
    let tr = app.settings.translator();
    let mut spans = Vec::new();
    for (index, view) in TABS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let active = view.tab_key() == app.view.tab_key();
        let focused = app.focus_mode == FocusMode::TabBar && app.selected_tab_index == index;
        let style = if active {
            Style::default()
                .fg(theme.on_primary())
                .bg(theme.highlight())
                .add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default()
                .fg(theme.highlight())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.color(crate::palette::ColorRole::TabInactive))
        };
        let mut name = tr.t(view.tab_key());
        if *view == AppView::Notifications && app.unread_notifications() > 0 {
            name = format!("{name} ({})", app.unread_notifications());
        }
        spans.push(Span::styled(format!(" {name} "), style));
    }

    Line::from(spans)
}

fn status_line(app: &App, theme: &Theme) -> Line<'static> {
    let tr = app.settings.translator();
    let preference = app.settings.theme_preference();
    let scheme = app.settings.actual_theme();
    Line::from(vec![
        Span::styled("● ", Style::default().fg(theme.success())),
        Span::styled(
            format!(
                "{}: {} ({})",
                tr.t("settings.theme"),
                tr.t(&format!("theme.{}", preference.as_str())),
                tr.t(&format!("theme.{}", scheme.as_str())),
            ),
            Style::default().fg(theme.text()),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{}: {}", tr.t("settings.language"), app.settings.language()),
            Style::default().fg(theme.text()),
        ),
    ])
}

fn keybinds_lines(app: &App, theme: &Theme) -> Vec<Line<'static>> {
    let tr = app.settings.translator();
    let focus_hint = match app.focus_mode {
        FocusMode::TabBar => tr.t("hint.tabbar"),
        FocusMode::Content => tr.t("hint.global"),
    };
    let view_hint = match app.view {
        AppView::Feed => tr.t("feed.hint"),
        AppView::Products => tr.t("products.hint"),
        AppView::ProductDetail => tr.t("product.hint"),
        AppView::Notifications => tr.t("notifications.hint"),
        AppView::Settings => tr.t("settings.hint"),
        AppView::Help => tr.t("help.close"),
    };
    vec![
        Line::from(Span::styled(focus_hint, Style::default().fg(theme.highlight()))),
        Line::from(Span::styled(view_hint, Style::default().fg(theme.dim()))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqliteStore;
    use crate::settings::Settings;

    #[test]
    fn scroll_offset_saturates_on_long_feeds() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("revio.db"));
        let mut app = App::new(store, Settings::default());

        app.selected_post_index = 9;
        assert_eq!(body_scroll(&app), 10);

        app.selected_post_index = 40_000;
        assert_eq!(body_scroll(&app), u16::MAX);

        app.view = AppView::Help;
        assert_eq!(body_scroll(&app), 0);
    }
}
