use axum::response::Html;

const HOME_PAGE: &str = include_str!("../../assets/home.html");

pub async fn home_handler() -> Html<&'static str> {
    Html(HOME_PAGE)
}
