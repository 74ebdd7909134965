use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::feed::star_spans;
use super::helpers::{clamp_name, hex_to_color};
use super::theme::Theme;
use crate::app::App;

pub fn build_products_text(app: &App, theme: &Theme) -> Text<'static> {
    let tr = app.settings.translator();
    let mut lines = Vec::new();

    if app.search_active {
        lines.push(Line::from(vec![
            Span::styled(
                tr.t("search.prompt"),
                Style::default()
                    .fg(theme.highlight())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(app.search_query.clone(), Style::default().fg(theme.text())),
            Span::styled("_", Style::default().fg(theme.highlight())),
        ]));
        lines.push(Line::from(Span::styled(
            tr.t("search.hint"),
            Style::default().fg(theme.dim()),
        )));
    } else if !app.search_query.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(tr.t("search.prompt"), Style::default().fg(theme.accent())),
            Span::styled(app.search_query.clone(), Style::default().fg(theme.text())),
        ]));
    }

    let category = match app.category_filter {
        Some(category) => tr.t(category.label_key()),
        None => tr.t("products.all"),
    };
    lines.push(Line::from(Span::styled(
        tr.translate("products.filter", "", &[("category", &category)]),
        Style::default().fg(theme.accent()),
    )));
    lines.push(Line::from(""));

    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(theme.warn()),
        )));
        return Text::from(lines);
    }

    let products = app.filtered_products();
    if products.is_empty() {
        lines.push(Line::from(Span::styled(
            tr.t("products.empty"),
            Style::default().fg(theme.dim()),
        )));
        return Text::from(lines);
    }

    for (index, product) in products.iter().enumerate() {
        let selected = index == app.selected_product_index;
        let name_style = if selected {
            Style::default()
                .fg(theme.highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text())
        };
        let rating: f32 = product.rating.parse().unwrap_or(0.0);
        let mut spans = vec![
            Span::styled(
                if selected { "> " } else { "  " },
                Style::default().fg(theme.selection_marker()),
            ),
            Span::styled(clamp_name(&product.name, 22), name_style),
            Span::raw(" "),
            Span::styled(
                clamp_name(&tr.t(product.category.label_key()), 20),
                Style::default().fg(theme.text_secondary()),
            ),
            Span::raw(" "),
        ];
        spans.extend(star_spans(rating, theme));
        spans.push(Span::styled(
            format!(
                " {}  {}",
                product.rating,
                tr.translate(
                    "products.ratings",
                    "",
                    &[("count", &product.number_of_ratings.to_string())]
                )
            ),
            Style::default().fg(theme.dim()),
        ));
        lines.push(Line::from(spans));
    }

    Text::from(lines)
}

pub fn build_product_detail_text(app: &App, theme: &Theme) -> Text<'static> {
    let tr = app.settings.translator();
    let Some(product) = &app.selected_product else {
        return Text::from(tr.t("products.empty"));
    };

    let rating: f32 = product.rating.parse().unwrap_or(0.0);
    let mut stars = vec![Span::raw("  ")];
    stars.extend(star_spans(rating, theme));
    stars.push(Span::styled(
        format!(
            " {}  {}",
            product.rating,
            tr.translate(
                "products.ratings",
                "",
                &[("count", &product.number_of_ratings.to_string())]
            )
        ),
        Style::default().fg(theme.dim()),
    ));

    let mut lines = vec![
        Line::from(Span::styled(
            format!("  {}", product.name),
            Style::default().fg(theme.text()).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}  |  {}", tr.t(product.category.label_key()), product.image),
            Style::default().fg(theme.text_secondary()),
        )),
        Line::from(stars),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", tr.t("product.reviews")),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if app.reviews.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", tr.t("product.no_reviews")),
            Style::default().fg(theme.dim()),
        )));
    }

    for review in &app.reviews {
        let author_style = hex_to_color(&review.avatar_color)
            .map(|color| Style::default().fg(color).add_modifier(Modifier::BOLD))
            .unwrap_or_else(|| Style::default().fg(theme.text()));
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(clamp_name(&review.author, 8), author_style),
            Span::raw(" "),
        ];
        spans.extend(star_spans(f32::from(review.stars), theme));
        spans.push(Span::styled(
            format!("  {}", review.text),
            Style::default().fg(theme.text()),
        ));
        lines.push(Line::from(spans));
    }

    Text::from(lines)
}
