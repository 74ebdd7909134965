use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::app::App;
use crate::palette::ColorRole;
use crate::types::NotificationKind;

/// Icon, color role and message key per kind, in declaration order.
const NOTIFICATION_STYLES: [(&str, ColorRole, &str); 4] = [
    ("♥", ColorRole::Error, "notification.like"),
    ("✎", ColorRole::Info, "notification.comment"),
    ("+", ColorRole::Success, "notification.follow"),
    ("★", ColorRole::RatingStar, "notification.review"),
];

fn style_for(kind: NotificationKind) -> (&'static str, ColorRole, &'static str) {
    NOTIFICATION_STYLES[kind as usize]
}

pub fn build_notifications_text(app: &App, theme: &Theme) -> Text<'static> {
    let tr = app.settings.translator();
    if app.notifications.is_empty() {
        return Text::from(tr.t("notifications.empty"));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            tr.translate(
                "notifications.unread",
                "",
                &[("count", &app.unread_notifications().to_string())],
            ),
            Style::default().fg(theme.accent()),
        )),
        Line::from(""),
    ];

    for (index, notification) in app.notifications.iter().enumerate() {
        let selected = index == app.selected_notification_index;
        let (icon, role, message_key) = style_for(notification.kind);
        let mut message_style = if notification.read {
            Style::default().fg(theme.dim())
        } else {
            Style::default().fg(theme.text()).add_modifier(Modifier::BOLD)
        };
        if selected {
            message_style = message_style.fg(theme.highlight());
        }
        lines.push(Line::from(vec![
            Span::styled(
                if selected { "> " } else { "  " },
                Style::default().fg(theme.selection_marker()),
            ),
            Span::styled(format!("{icon} "), Style::default().fg(theme.color(role))),
            Span::styled(
                tr.translate(message_key, message_key, &[("actor", &notification.actor)]),
                message_style,
            ),
            Span::styled(
                if notification.read { "" } else { "  ●" },
                Style::default().fg(theme.primary()),
            ),
            Span::styled(
                if selected { format!("  {}", notification.id) } else { String::new() },
                Style::default().fg(theme.dim()),
            ),
        ]));
    }

    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_translated_message() {
        let translator = crate::i18n::Translator::default();
        for kind in NotificationKind::ALL {
            let (_, _, key) = style_for(kind);
            let message = translator.translate(key, "", &[("actor", "Ana")]);
            assert!(message.contains("Ana"), "{kind:?}: {message}");
        }
    }
}
