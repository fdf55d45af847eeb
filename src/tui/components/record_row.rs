//! Per-endpoint row rendering for the record list.
//!
//! Each record kind has its own layout. Missing fields render as blanks;
//! a record whose typed view is empty (e.g. a bare number in the array)
//! falls back to a single generic label.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::record::{Album, Post, Record, RecordKind, Todo, User};

/// Body preview is capped to keep rows compact.
const BODY_PREVIEW_LINES: usize = 2;

fn id_text(id: Option<i64>) -> String {
    id.map_or_else(|| "?".to_string(), |id| id.to_string())
}

fn badge(text: String, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {text} "),
        Style::default().fg(Color::White).bg(bg).add_modifier(Modifier::BOLD),
    )
}

fn dim(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

/// Places `right` at the far end of a line `width` cells wide.
fn spread(left: Vec<Span<'static>>, right: Span<'static>, width: usize) -> Line<'static> {
    let used: usize = left.iter().map(|s| s.content.width()).sum::<usize>() + right.content.width();
    let mut spans = left;
    spans.push(Span::raw(" ".repeat(width.saturating_sub(used).max(1))));
    spans.push(right);
    Line::from(spans)
}

fn post_lines(post: &Post, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        spread(
            vec![badge(format!("Post #{}", id_text(post.id)), Color::Blue)],
            dim(format!("User ID: {}", id_text(post.user_id))),
            width,
        ),
        Line::from(Span::styled(
            post.title.clone().unwrap_or_default(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(body) = post.body.as_deref() {
        let wrapped = textwrap::wrap(body, width.max(1));
        let truncated = wrapped.len() > BODY_PREVIEW_LINES;
        for (i, part) in wrapped.iter().take(BODY_PREVIEW_LINES).enumerate() {
            let mut text = part.to_string();
            if truncated && i + 1 == BODY_PREVIEW_LINES {
                text.push('…');
            }
            lines.push(Line::from(dim(text)));
        }
    }
    lines
}

fn user_lines(user: &User) -> Vec<Line<'static>> {
    let initial = user
        .name
        .as_deref()
        .and_then(|n| n.chars().next())
        .map_or_else(|| "?".to_string(), |c| c.to_string());
    let field = |label: &str, value: Option<&str>| {
        vec![
            Span::styled(format!("{label}: "), Style::default().add_modifier(Modifier::BOLD)),
            dim(value.unwrap_or_default().to_string()),
        ]
    };
    let company = user.company.as_ref().and_then(|c| c.name.as_deref());
    let city = user.address.as_ref().and_then(|a| a.city.as_deref());

    let mut contact = field("Email", user.email.as_deref());
    contact.push(Span::raw("  "));
    contact.extend(field("Phone", user.phone.as_deref()));

    let mut org = field("Website", user.website.as_deref());
    org.push(Span::raw("  "));
    org.extend(field("Company", company));
    org.push(Span::raw("  "));
    org.extend(field("City", city));

    vec![
        Line::from(vec![
            badge(initial, Color::Blue),
            Span::raw(" "),
            Span::styled(
                user.name.clone().unwrap_or_default(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            dim(format!("  @{}", user.username.as_deref().unwrap_or_default())),
        ]),
        Line::from(contact),
        Line::from(org),
    ]
}

fn album_lines(album: &Album, width: usize) -> Vec<Line<'static>> {
    vec![spread(
        vec![
            badge(format!("Album #{}", id_text(album.id)), Color::Red),
            Span::raw(" "),
            Span::styled(
                album.title.clone().unwrap_or_default(),
                Style::default().fg(Color::White),
            ),
        ],
        dim(format!("User: {}", id_text(album.user_id))),
        width,
    )]
}

fn todo_lines(todo: &Todo, width: usize) -> Vec<Line<'static>> {
    let done = todo.completed.unwrap_or(false);
    let (mark, mark_style, title_style) = if done {
        (
            "✓",
            Style::default().fg(Color::Green),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("○", Style::default().fg(Color::Gray), Style::default().fg(Color::White))
    };
    vec![spread(
        vec![
            Span::styled(mark, mark_style),
            Span::raw(" "),
            Span::styled(todo.title.clone().unwrap_or_default(), title_style),
        ],
        dim(format!("#{}", id_text(todo.id))),
        width,
    )]
}

/// Lines for one record, `width` cells wide. Does not include spacing.
pub fn row_lines(record: &Record, width: usize) -> Vec<Line<'static>> {
    match &record.kind {
        RecordKind::Post(p) if *p != Post::default() => post_lines(p, width),
        RecordKind::User(u) if *u != User::default() => user_lines(u),
        RecordKind::Album(a) if *a != Album::default() => album_lines(a, width),
        RecordKind::Todo(t) if *t != Todo::default() => todo_lines(t, width),
        _ => vec![Line::from(record.fallback_label().to_string())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::endpoint::EndpointKey;
    use crate::test_support::sample_records;
    use serde_json::json;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_post_row_has_badge_title_and_body() {
        let record = &sample_records(EndpointKey::Posts)[1];
        let lines = row_lines(record, 60);
        let rendered = text(&lines);
        assert!(rendered.contains("Post #2"));
        assert!(rendered.contains("User ID: 1"));
        assert!(rendered.contains("qui est esse"));
        assert!(rendered.contains("est rerum tempore vitae"));
    }

    #[test]
    fn test_post_body_preview_is_capped() {
        let body = "word ".repeat(100);
        let record = Record::from_value(EndpointKey::Posts, json!({"id": 1, "title": "t", "body": body}));
        let lines = row_lines(&record, 20);
        assert_eq!(lines.len(), 2 + BODY_PREVIEW_LINES);
        assert!(text(&lines).ends_with('…'));
    }

    #[test]
    fn test_user_row_shows_contact_details() {
        let record = &sample_records(EndpointKey::Users)[0];
        let rendered = text(&row_lines(record, 80));
        assert!(rendered.contains(" L "));
        assert!(rendered.contains("Leanne Graham"));
        assert!(rendered.contains("@Bret"));
        assert!(rendered.contains("Company: Romaguera-Crona"));
        assert!(rendered.contains("City: Gwenborough"));
    }

    #[test]
    fn test_user_row_tolerates_missing_nested_fields() {
        let record = &sample_records(EndpointKey::Users)[2];
        let rendered = text(&row_lines(record, 80));
        assert!(rendered.contains("Clementine Bauch"));
        assert!(rendered.contains("Company: "));
    }

    #[test]
    fn test_todo_row_marks_completion() {
        let records = sample_records(EndpointKey::Todos);
        let open = row_lines(&records[0], 40);
        let done = row_lines(&records[1], 40);
        assert!(text(&open).starts_with('○'));
        assert!(text(&done).starts_with('✓'));
        assert!(done[0].spans[2].style.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_album_row_right_aligns_user() {
        let record = &sample_records(EndpointKey::Albums)[0];
        let lines = row_lines(record, 50);
        let rendered = text(&lines);
        assert_eq!(rendered.width(), 50);
        assert!(rendered.ends_with("User: 1"));
    }

    #[test]
    fn test_untyped_record_uses_fallback_label() {
        let record = Record::from_value(EndpointKey::Albums, json!(5));
        assert_eq!(text(&row_lines(&record, 30)), "Item");
    }
}
