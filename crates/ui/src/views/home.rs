use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_type = ctx.default_quiz_type().to_string();

    rsx! {
        div { class: "page",
            h2 { "Timed Quiz" }
            p { "Answer before the bar runs out. Hard questions pay more and cost less." }
            Link { class: "start", to: Route::Quiz { quiz_type: quiz_type.clone() }, "Start {quiz_type} quiz" }
        }
    }
}
