use crate::assistant::Role;
use maud::{html, Markup};

pub fn chat_bubble(role: Role, content: &str) -> Markup {
    let class = match role {
        Role::User => "bubble user",
        Role::Assistant => "bubble assistant",
    };

    html! {
        div class=(class) {
            p { (content) }
        }
    }
}
