/**
 * Page Stubs
 *
 * Server-rendered view stubs for the named page routes. Full template
 * rendering is an external collaborator; these handlers return minimal
 * HTML shells that link the static assets.
 */

use axum::response::Html;

const HOME: &str = r#"<!DOCTYPE html>
<html>
<head><title>Askboard</title><link rel="stylesheet" href="/static/style.css"></head>
<body><h1>Askboard</h1><p>Recent questions</p></body>
</html>"#;

const ASK: &str = r#"<!DOCTYPE html>
<html>
<head><title>Ask a question - Askboard</title><link rel="stylesheet" href="/static/style.css"></head>
<body><h1>Ask a question</h1></body>
</html>"#;

const SIGNUP: &str = r#"<!DOCTYPE html>
<html>
<head><title>Sign up - Askboard</title><link rel="stylesheet" href="/static/style.css"></head>
<body><h1>Sign up</h1></body>
</html>"#;

const LOGIN: &str = r#"<!DOCTYPE html>
<html>
<head><title>Log in - Askboard</title><link rel="stylesheet" href="/static/style.css"></head>
<body><h1>Log in</h1></body>
</html>"#;

/// `GET /`
pub async fn home() -> Html<&'static str> {
    Html(HOME)
}

/// `GET /ask`
pub async fn ask() -> Html<&'static str> {
    Html(ASK)
}

/// `GET /signup`
pub async fn signup() -> Html<&'static str> {
    Html(SIGNUP)
}

/// `GET /login`
pub async fn login() -> Html<&'static str> {
    Html(LOGIN)
}
