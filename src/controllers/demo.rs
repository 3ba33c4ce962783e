use axum::response::Html;

/// Serves the demo client: a single page that posts the clone form to a
/// configurable service URL and plays back the returned audio
pub async fn demo_page() -> Html<&'static str> {
    Html(include_str!("demo.html"))
}
