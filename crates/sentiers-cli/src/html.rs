//! Standalone HTML rendering of a session
//!
//! Every dataset value is escaped before it reaches the page. Links and images
//! are emitted only for http(s) URLs.

use html_escape::{encode_double_quoted_attribute, encode_text};
use sentiers_core::{Theme, TrailRecord};
use sentiers_filter::{CatalogSession, ResultState};

use crate::views::{detail_fields, difficulty_icons, type_badge, DetailKind};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; padding: 1.5rem; background: #f8fafc; color: #0f172a; }
html.dark body { background: #0f172a; color: #e2e8f0; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 0.5rem; border-bottom: 1px solid #cbd5e1; }
tr.selected, .card.selected { background: #dbeafe; }
html.dark tr.selected, html.dark .card.selected { background: #1e3a8a; }
.badge { font-size: 0.75rem; padding: 0.1rem 0.5rem; border-radius: 9999px; background: #e2e8f0; color: #0f172a; }
.badge.walking { background: #dcfce7; }
.badge.heritage { background: #fef3c7; }
.cards { display: none; }
.card { border: 1px solid #cbd5e1; border-radius: 0.5rem; padding: 1rem; margin-bottom: 0.75rem; }
.empty { padding: 2rem; text-align: center; opacity: 0.7; }
.details { margin-top: 1.5rem; border: 1px solid #cbd5e1; border-radius: 0.5rem; padding: 1rem; }
.details img { max-width: 100%; }
.image-placeholder { height: 12rem; display: flex; align-items: center; justify-content: center; background: #f1f5f9; border-radius: 0.5rem; color: #94a3b8; }
@media (max-width: 768px) {
  .results-table { display: none; }
  .cards { display: block; }
}
"#;

const IMAGE_PLACEHOLDER: &str =
    "<div class=\"image-placeholder\"><p>Image non disponible</p></div>\n";

/// Render the whole page for the session's current result and selection
pub fn render_page(session: &CatalogSession, theme: Theme) -> String {
    let html_class = match theme {
        Theme::Dark => " class=\"dark\"",
        Theme::Light => "",
    };

    let mut body = format!("<h1>Sentiers ({})</h1>\n", session.result_count());

    match session.state() {
        ResultState::EmptyCatalog => {
            body.push_str("<p class=\"empty\">Aucun sentier dans le catalogue.</p>\n");
        }
        ResultState::NoMatches => {
            body.push_str(
                "<p class=\"empty\">Aucun sentier ne correspond à vos critères.</p>\n",
            );
        }
        ResultState::Results(_) => {
            body.push_str(&render_table(session));
            body.push_str(&render_cards(session));
        }
    }

    if let Some(record) = session.selected() {
        body.push_str(&render_details(record));
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"fr\"{}>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Sentiers</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        html_class, STYLES, body
    )
}

fn render_table(session: &CatalogSession) -> String {
    let mut html = String::from(
        "<table class=\"results-table\">\n<thead><tr><th>Code</th><th>Nom</th><th>Type</th>\
         <th>Difficulté</th><th>Départ</th></tr></thead>\n<tbody>\n",
    );

    for record in session.results() {
        let class = if session.is_selected(record) {
            " class=\"selected\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<tr{} data-code=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            class,
            encode_double_quoted_attribute(&record.code),
            encode_text(&record.code),
            encode_text(&record.name),
            render_badge(record),
            difficulty_icons(record),
            encode_text(&record.starting_point),
        ));
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

fn render_cards(session: &CatalogSession) -> String {
    let mut html = String::from("<div class=\"cards\">\n");

    for record in session.results() {
        let class = if session.is_selected(record) {
            "card selected"
        } else {
            "card"
        };
        html.push_str(&format!(
            "<div class=\"{}\" data-code=\"{}\"><strong>{}</strong> {}<h3>{}</h3><p>📍 {}</p><p>{}</p></div>\n",
            class,
            encode_double_quoted_attribute(&record.code),
            encode_text(&record.code),
            render_badge(record),
            encode_text(&record.name),
            encode_text(&record.starting_point),
            difficulty_icons(record),
        ));
    }

    html.push_str("</div>\n");
    html
}

fn render_badge(record: &TrailRecord) -> String {
    match type_badge(&record.trail_type) {
        Some(label) => {
            let kind = if label == "Randonnée" {
                "walking"
            } else {
                "heritage"
            };
            format!("<span class=\"badge {}\">{}</span>", kind, label)
        }
        None => encode_text(record.trail_type.as_str()).into_owned(),
    }
}

fn render_details(record: &TrailRecord) -> String {
    let mut html = format!(
        "<section class=\"details\">\n<h2>{}</h2>\n",
        encode_text(&record.name)
    );

    match record.image_url.as_deref().filter(|url| is_web_url(url)) {
        Some(src) => html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            encode_double_quoted_attribute(src),
            encode_double_quoted_attribute(&record.name)
        )),
        None => html.push_str(IMAGE_PLACEHOLDER),
    }

    html.push_str("<dl>\n");
    for field in detail_fields(record) {
        let value = match field.kind {
            DetailKind::Image => continue,
            DetailKind::Difficulty => {
                format!("{} Niveau {}", difficulty_icons(record), record.difficulty)
            }
            DetailKind::Link if is_web_url(&field.value) => format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Voir plus d'infos</a>",
                encode_double_quoted_attribute(&field.value)
            ),
            _ => encode_text(&field.value).into_owned(),
        };
        html.push_str(&format!("<dt>{}</dt><dd>{}</dd>\n", field.kind.label_fr(), value));
    }
    html.push_str("</dl>\n</section>\n");

    html
}

fn is_web_url(value: &str) -> bool {
    let lower = value.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
