use dioxus::prelude::*;

use quiz_core::OptionKey;

use crate::vm::QuizScreenVm;

#[component]
pub fn QuestionPanel(vm: QuizScreenVm, on_answer: EventHandler<OptionKey>) -> Element {
    let fill_style = format!("width: {:.2}%", vm.time_percent);
    let marker_style = format!("left: {:.2}%", vm.time_percent);

    rsx! {
        div { class: "quiz",
            div { class: "time-bar", title: "{vm.time_label}",
                div { class: "time-bar-fill", style: "{fill_style}" }
                if let Some(adjustment) = vm.adjustment.clone() {
                    div {
                        class: "{adjustment.class}",
                        style: "{marker_style}",
                        "{adjustment.label}"
                    }
                }
            }
            p { class: "quiz-progress", "{vm.progress_label}" }
            div { class: "{vm.difficulty_class}", "{vm.difficulty_label}" }
            div { class: "question-text", "{vm.question_text}" }
            div { class: "options",
                for option in vm.options.clone() {
                    button {
                        key: "{option.key}",
                        id: "option-{option.key}",
                        class: "{option.class}",
                        onclick: move |_| on_answer.call(option.key),
                        "{option.text}"
                    }
                }
            }
        }
    }
}
