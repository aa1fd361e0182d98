use quiz_core::{Difficulty, OptionKey, SessionPhase, SessionSnapshot};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjustmentVm {
    pub label: String,
    pub positive: bool,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionButtonVm {
    pub key: OptionKey,
    pub text: String,
    pub class: &'static str,
}

/// Everything the in-progress quiz screen draws.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizScreenVm {
    pub progress_label: String,
    pub time_percent: f64,
    pub time_label: String,
    pub adjustment: Option<AdjustmentVm>,
    pub difficulty_label: &'static str,
    pub difficulty_class: &'static str,
    pub question_text: String,
    pub options: Vec<OptionButtonVm>,
    /// An answer is showing feedback; further clicks are ignored by the session.
    pub locked: bool,
}

/// Map an in-progress snapshot. Returns `None` when there is no current question.
#[must_use]
pub fn map_quiz_screen(snapshot: &SessionSnapshot) -> Option<QuizScreenVm> {
    if snapshot.phase != SessionPhase::InProgress {
        return None;
    }
    let question = snapshot.current_question.as_ref()?;

    let options = question
        .options()
        .map(|(key, text)| OptionButtonVm {
            key,
            text: text.to_string(),
            class: option_class(snapshot, key),
        })
        .collect();

    Some(QuizScreenVm {
        progress_label: format!(
            "Question {} of {}",
            snapshot.current_index + 1,
            snapshot.question_count
        ),
        time_percent: snapshot.time_fraction() * 100.0,
        time_label: format!("{:.0}s", snapshot.remaining_time.ceil()),
        adjustment: snapshot.last_adjustment.map(adjustment_vm),
        difficulty_label: question.difficulty().label(),
        difficulty_class: difficulty_class(question.difficulty()),
        question_text: question.text().to_string(),
        options,
        locked: snapshot.selected_option.is_some(),
    })
}

fn option_class(snapshot: &SessionSnapshot, key: OptionKey) -> &'static str {
    if snapshot.selected_option != Some(key) {
        return "option";
    }
    match snapshot.selected_is_correct {
        Some(true) => "option option-correct",
        _ => "option option-wrong",
    }
}

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "difficulty difficulty-easy",
        Difficulty::Medium | Difficulty::Hard => "difficulty difficulty-tough",
    }
}

fn adjustment_vm(adjustment: i32) -> AdjustmentVm {
    let positive = adjustment > 0;
    let (label, class) = if positive {
        (format!("+{adjustment}"), "time-adjustment gain")
    } else {
        (adjustment.to_string(), "time-adjustment loss")
    };
    AdjustmentVm {
        label,
        positive,
        class,
    }
}
