//! Static HTML landing page at `/`.

use axum::response::Html;
use chrono::Datelike;

const LANDING_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Plant Tracker Gardening App API</title>
    <style>
        body {
            background: #23272f;
            color: #fff;
            font-family: 'Segoe UI', 'Roboto', 'Helvetica Neue', sans-serif;
            margin: 0;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .container {
            background: #2c313a;
            border-radius: 18px;
            padding: 2.5rem;
            text-align: center;
        }
        h1 { color: #90caf9; }
        a { color: #1976d2; font-weight: 600; text-decoration: none; }
        a:hover { color: #90caf9; text-decoration: underline; }
        .footer { color: #689f38; margin-top: 2rem; }
    </style>
</head>
<body>
    <div class="container">
        <h1>&#127793; Plant Tracker Gardening App API</h1>
        <p>Welcome to the Plant Tracker Gardening App backend.</p>
        <p>Browse <a href="/api/v1/plants">/api/v1/plants</a> or check <a href="/health">/health</a>.</p>
        <div class="footer">Happy Gardening! &copy; {year}</div>
    </div>
</body>
</html>
"#;

pub fn render_landing(year: i32) -> String {
    LANDING_TEMPLATE.replace("{year}", &year.to_string())
}

pub async fn landing_page() -> Html<String> {
    Html(render_landing(chrono::Utc::now().year()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_carries_year() {
        let html = render_landing(2031);
        assert!(html.contains("&copy; 2031"));
        assert!(!html.contains("{year}"));
    }
}
