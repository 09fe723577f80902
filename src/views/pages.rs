use maud::{html, DOCTYPE};

use super::layout::{vertical_layout, Chrome};

pub fn loading_page(chrome: &Chrome) -> String {
    html! {
        div.layout {
            (vertical_layout(120, chrome))
            div.content #loading { "Loading..." }
        }
    }
    .into_string()
}

pub fn error_page(message: &str, chrome: &Chrome) -> String {
    html! {
        div.layout {
            (vertical_layout(120, chrome))
            div.content {
                div.content-header {
                    div.content-title { "Erreur" }
                }
                div data-testid="error-message" { (message) }
            }
        }
    }
    .into_string()
}

/// 完整 HTML 文档, 内容区域位于 #root
pub fn document(location: &str, content: &str) -> String {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Billed" }
            }
            body data-location=(location) {
                div #root { (maud::PreEscaped(content)) }
            }
        }
    }
    .into_string()
}
