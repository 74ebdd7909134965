use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{StarGlyph, rating_stars};
use super::theme::Theme;
use crate::app::App;

pub fn build_feed_text(app: &App, theme: &Theme) -> Text<'static> {
    let tr = app.settings.translator();
    if app.posts.is_empty() {
        return Text::from(tr.t("feed.empty"));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            tr.translate("feed.count", "", &[("count", &app.posts.len().to_string())]),
            Style::default().fg(theme.accent()),
        )),
        Line::from(""),
    ];

    for (index, post) in app.posts.iter().enumerate() {
        let selected = index == app.selected_post_index;
        let marker_style = if selected {
            Style::default()
                .fg(theme.selection_marker())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim())
        };
        let title_style = if selected {
            Style::default()
                .fg(theme.highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text()).add_modifier(Modifier::BOLD)
        };

        let mut header = vec![
            Span::styled(if selected { "> " } else { "  " }, marker_style),
            Span::styled(post.title.clone(), title_style),
            Span::raw("  "),
        ];
        header.extend(star_spans(post.rating, theme));
        header.push(Span::styled(
            format!(" {:.1}", post.rating),
            Style::default().fg(theme.dim()),
        ));
        lines.push(Line::from(header));

        lines.push(Line::from(Span::styled(
            format!("    {}", post.content),
            Style::default().fg(theme.text_secondary()),
        )));
        if selected {
            lines.push(Line::from(Span::styled(
                format!("    {} | {}", post.id, post.images.join(", ")),
                Style::default().fg(theme.dim()),
            )));
        }
    }

    Text::from(lines)
}

pub fn star_spans(rating: f32, theme: &Theme) -> Vec<Span<'static>> {
    rating_stars(rating)
        .into_iter()
        .map(|glyph: StarGlyph| {
            Span::styled(glyph.symbol(), Style::default().fg(theme.color(glyph.role())))
        })
        .collect()
}
