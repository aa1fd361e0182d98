use dioxus::prelude::*;

use crate::vm::{SummaryRowVm, SummaryVm};

#[component]
pub fn SummaryPanel(vm: SummaryVm) -> Element {
    rsx! {
        div { class: "summary",
            div { class: "summary-card summary-header",
                h2 { "{vm.title}" }
                p { class: "summary-subtitle", "{vm.subtitle}" }
                p { class: "summary-score", "Score: {vm.score_label}" }
                if let Some(elapsed) = vm.elapsed_label.clone() {
                    p { class: "summary-elapsed", "Time taken: {elapsed}" }
                }
            }
            if vm.rows.is_empty() {
                p { class: "summary-empty", "No questions were answered." }
            }
            for (index, row) in vm.rows.iter().cloned().enumerate() {
                SummaryRow { key: "{index}", row }
            }
        }
    }
}

#[component]
fn SummaryRow(row: SummaryRowVm) -> Element {
    let answer_class = if row.is_correct {
        "answer answer-correct"
    } else {
        "answer answer-wrong"
    };

    rsx! {
        div { class: "summary-card",
            h3 { "{row.heading}" }
            p { class: "{answer_class}", "{row.user_answer}" }
            if let Some(correct) = row.correct_answer.clone() {
                p { class: "answer answer-expected", "{correct}" }
            }
            p { class: "explanation", "{row.explanation}" }
        }
    }
}
