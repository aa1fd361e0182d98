use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz/:quiz_type", QuizView)] Quiz { quiz_type: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            nav { class: "topbar",
                Link { to: Route::Home {}, "Quiz" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
