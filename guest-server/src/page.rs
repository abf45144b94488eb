//! Server-rendered guest page

use std::fmt::Write;

use guest_client::LookupState;
use seat_layout::{Highlight, RenderedLayout, render_svg};
use shared::error::ErrorCode;
use shared::models::{Event, Guest, NameSuggestion};

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#171717;color:#e5e5e5}\
main{max-width:720px;margin:0 auto;padding:24px}\
.hero{width:100%;max-height:280px;object-fit:cover;border-radius:12px}\
.host{color:#a3a3a3;font-style:italic}\
form.lookup{display:flex;gap:8px;margin:24px 0}\
input{flex:1;padding:10px;border-radius:8px;border:1px solid #525252;background:#262626;color:inherit}\
button{padding:10px 16px;border-radius:8px;border:0;background:#d6b25e;color:#1c1917;cursor:pointer}\
.notice{padding:12px;border-radius:8px;background:#262626}\
.error{background:#450a0a}\
.suggestions{display:flex;gap:8px;flex-wrap:wrap}\
.seating-chart{width:100%;height:auto;margin-top:16px}\
.menu li{margin:6px 0}.menu small{color:#a3a3a3}";

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Everything the guest page shows
pub struct GuestPage<'a> {
    pub event: &'a Event,
    pub lookup: &'a LookupState,
    /// Computed chart for the found guest
    pub layout: Option<&'a RenderedLayout>,
    /// Transient message above the result, e.g. a failed check-in
    pub notice: Option<&'a str>,
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
         <title>{}</title><style>{STYLE}</style></head><body><main>{body}</main></body></html>",
        escape_html(title)
    )
}

pub fn render_guest_page(page: &GuestPage<'_>) -> String {
    let event = page.event;
    let mut body = String::new();

    if let Some(image) = &event.image {
        let _ = write!(body, r#"<img class="hero" src="{}" alt="">"#, escape_html(image));
    }
    let _ = write!(body, "<h1>{}</h1>", escape_html(&event.name));
    if let Some(message) = &event.host_message {
        let _ = write!(body, r#"<p class="host">{}</p>"#, escape_html(message));
    }

    let typed_name = match page.lookup {
        LookupState::Idle => "",
        LookupState::Found(guest) => guest.name.as_str(),
        LookupState::Loading { name }
        | LookupState::NotFound { name, .. }
        | LookupState::Failed { name, .. } => name.as_str(),
    };
    let _ = write!(
        body,
        r#"<form class="lookup" method="get"><input name="name" placeholder="Your full name" value="{}" autocomplete="name" required><button type="submit">Find my table</button></form>"#,
        escape_html(typed_name)
    );

    if let Some(notice) = page.notice {
        let _ = write!(body, r#"<p class="notice error">{}</p>"#, escape_html(notice));
    }

    body.push_str(r#"<section class="result">"#);
    match page.lookup {
        LookupState::Idle | LookupState::Loading { .. } => {}
        LookupState::Found(guest) => render_found(&mut body, guest, page.layout, &event.name),
        LookupState::NotFound { suggestions, .. } => render_not_found(&mut body, suggestions),
        LookupState::Failed { message, .. } => {
            let _ = write!(body, r#"<p class="notice error">{}</p>"#, escape_html(message));
        }
    }
    body.push_str("</section>");

    render_menu(&mut body, event);
    document(&event.name, &body)
}

fn render_found(body: &mut String, guest: &Guest, layout: Option<&RenderedLayout>, title: &str) {
    let name = escape_html(&guest.name);
    let highlight = layout.map(|l| l.highlight).unwrap_or(Highlight::Unassigned);

    match highlight {
        Highlight::Active { table_id } => {
            let _ = write!(body, "<h2>Table {table_id}</h2><p>Welcome, {name}! Your seat is highlighted below.</p>");
            if let Some(layout) = layout {
                body.push_str(&render_svg(layout, title));
            }
        }
        Highlight::NotInLayout { table_id } => {
            let _ = write!(
                body,
                r#"<h2>Table {table_id}</h2><p class="notice">Welcome, {name}! Your table isn't on the seating chart yet. Please ask the host.</p>"#
            );
        }
        Highlight::Unassigned => {
            let _ = write!(
                body,
                r#"<p class="notice">Welcome, {name}! You don't have a table assigned yet. Please check with the host.</p>"#
            );
        }
    }

    match guest.arrived_at {
        Some(arrived_at) => {
            let _ = write!(body, "<p>Checked in at {}</p>", arrived_at.format("%H:%M UTC"));
        }
        None => {
            let _ = write!(
                body,
                r#"<form method="post"><input type="hidden" name="name" value="{name}"><button type="submit">I'm here</button></form>"#
            );
        }
    }
}

fn render_not_found(body: &mut String, suggestions: &[NameSuggestion]) {
    let _ = write!(
        body,
        r#"<p class="notice">{}</p>"#,
        escape_html(ErrorCode::GuestNotFound.message())
    );
    if suggestions.is_empty() {
        return;
    }

    body.push_str(r#"<p>Did you mean:</p><form class="suggestions" method="get">"#);
    for suggestion in suggestions {
        let name = escape_html(&suggestion.name);
        let _ = write!(body, r#"<button type="submit" name="name" value="{name}">{name}</button>"#);
    }
    body.push_str("</form>");
}

fn render_menu(body: &mut String, event: &Event) {
    if event.menu.is_empty() {
        return;
    }

    body.push_str(r#"<section class="menu"><h2>Menu</h2><ul>"#);
    for item in &event.menu {
        let _ = write!(body, "<li>{}", escape_html(item.name()));
        if let Some(description) = item.description() {
            let _ = write!(body, "<br><small>{}</small>", escape_html(description));
        }
        body.push_str("</li>");
    }
    body.push_str("</ul></section>");
}

/// Standalone page for errors that prevent showing the event at all.
/// `retry` adds a link that reloads the same URL.
pub fn render_error_page(title: &str, message: &str, retry: bool) -> String {
    let mut body = format!(
        r#"<h1>{}</h1><p class="notice error">{}</p>"#,
        escape_html(title),
        escape_html(message)
    );
    if retry {
        body.push_str(r#"<p><a href="">Try again</a></p>"#);
    }
    document(title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use seat_layout::compute_layout;
    use shared::models::{Layout, MenuItem, RenderBox, Table};

    fn event() -> Event {
        let tables = (1..=3)
            .map(|id| Table {
                render: Some(RenderBox::new(20.0 * id as f64, 50.0, 10.0, 10.0)),
                ..Table::round(id, 0.0, 0.0)
            })
            .collect();
        Event {
            name: "Summer <Party>".into(),
            host_message: Some("Welcome!".into()),
            menu: vec![
                MenuItem::Plain("Soup".into()),
                MenuItem::Detailed {
                    name: "Steak".into(),
                    description: Some("with fries".into()),
                },
            ],
            layout: Layout::new("custom", tables),
            ..Default::default()
        }
    }

    fn guest(table: Option<i64>) -> Guest {
        Guest {
            name: "Alex".into(),
            table,
            arrived_at: None,
        }
    }

    fn render(lookup: &LookupState, event: &Event) -> String {
        let layout = match lookup {
            LookupState::Found(g) => Some(compute_layout(&event.layout, g.table)),
            _ => None,
        };
        render_guest_page(&GuestPage {
            event,
            lookup,
            layout: layout.as_ref(),
            notice: None,
        })
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"Tom's" & co</b>"#), "&lt;b&gt;&quot;Tom&#39;s&quot; &amp; co&lt;/b&gt;");
    }

    #[test]
    fn test_idle_page() {
        let event = event();
        let html = render(&LookupState::Idle, &event);
        assert!(html.contains("<h1>Summer &lt;Party&gt;</h1>"));
        assert!(html.contains("Welcome!"));
        assert!(html.contains("<small>with fries</small>"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_found_with_table_shows_chart() {
        let event = event();
        let html = render(&LookupState::Found(guest(Some(2))), &event);
        assert!(html.contains("<h2>Table 2</h2>"));
        assert!(html.contains("<svg"));
        assert_eq!(html.matches(r#"class="table active""#).count(), 1);
        assert!(html.contains("I&#39;m here") || html.contains("I'm here"));
    }

    #[test]
    fn test_found_without_table_has_no_chart() {
        let event = event();
        let html = render(&LookupState::Found(guest(None)), &event);
        assert!(html.contains("don't have a table assigned yet"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_table_missing_from_layout_has_no_chart() {
        let event = event();
        let html = render(&LookupState::Found(guest(Some(9))), &event);
        assert!(html.contains("isn't on the seating chart"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_not_found_with_suggestions() {
        let event = event();
        let lookup = LookupState::NotFound {
            name: "Alx".into(),
            suggestions: vec![NameSuggestion { name: "Alex".into() }],
        };
        let html = render(&lookup, &event);
        assert!(html.contains("couldn&#39;t find your name"));
        assert!(html.contains(r#"<button type="submit" name="name" value="Alex">Alex</button>"#));
        assert!(html.contains(r#"value="Alx""#));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_failed_lookup() {
        let event = event();
        let lookup = LookupState::Failed {
            name: "Alex".into(),
            message: "Something went wrong. Please try again.".into(),
        };
        let html = render(&lookup, &event);
        assert!(html.contains("Something went wrong. Please try again."));
    }

    #[test]
    fn test_arrival_replaces_check_in_button() {
        let event = event();
        let mut g = guest(Some(1));
        g.arrived_at = Some(Utc.with_ymd_and_hms(2026, 6, 1, 18, 30, 0).unwrap());
        let html = render(&LookupState::Found(g), &event);
        assert!(html.contains("Checked in at 18:30 UTC"));
        assert!(!html.contains(r#"method="post""#));
    }

    #[test]
    fn test_error_page() {
        let html = render_error_page("Event not found", "Event not found", false);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Event not found</h1>"));
        assert!(!html.contains("Try again"));

        let html = render_error_page("Something went wrong", "Please try again.", true);
        assert!(html.contains(r#"<a href="">Try again</a>"#));
    }
}
