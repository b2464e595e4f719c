use axum::{http::header, response::{Html, IntoResponse}};

macro_rules! include_res {
    ($p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

pub async fn index() -> Html<&'static str> {
    Html(include_res!("/index.html"))
}

pub async fn styles() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], include_res!("/styles.css"))
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        include_res!("/script.js"),
    )
}
