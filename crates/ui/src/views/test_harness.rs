use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::time::fixed_now;
use quiz_core::{OptionKey, Question};
use services::{
    Clock, DriverConfig, QuestionProvider, QuizLoopService, QuizType, StaticQuestionProvider,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuestionPanel, QuizView, SummaryPanel};
use crate::vm::{QuizScreenVm, SummaryVm};

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn default_quiz_type(&self) -> QuizType {
        QuizType::default()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizRouterHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView { quiz_type: "general".to_string() } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until the rendered html contains `needle` or the attempts run out.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..40 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(provider: impl QuestionProvider + 'static) -> ViewHarness {
    let quiz_loop = QuizLoopService::new(Clock::fixed(fixed_now()), Arc::new(provider))
        .with_driver_config(DriverConfig::default());
    let app = Arc::new(TestApp {
        quiz_loop: Arc::new(quiz_loop),
    });
    let dom = VirtualDom::new_with_props(QuizRouterHarness, QuizHarnessProps { app });
    ViewHarness { dom }
}

pub fn static_provider(questions: Vec<Question>) -> StaticQuestionProvider {
    StaticQuestionProvider::from_questions(questions)
}

#[derive(Props, Clone, PartialEq)]
struct QuestionHarnessProps {
    vm: QuizScreenVm,
}

#[component]
fn QuestionHarness(props: QuestionHarnessProps) -> Element {
    rsx! { QuestionPanel { vm: props.vm.clone(), on_answer: move |_key: OptionKey| {} } }
}

#[derive(Props, Clone, PartialEq)]
struct SummaryHarnessProps {
    vm: SummaryVm,
}

#[component]
fn SummaryHarness(props: SummaryHarnessProps) -> Element {
    rsx! { SummaryPanel { vm: props.vm.clone() } }
}

pub fn render_question(vm: QuizScreenVm) -> String {
    let mut dom = VirtualDom::new_with_props(QuestionHarness, QuestionHarnessProps { vm });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn render_summary(vm: SummaryVm) -> String {
    let mut dom = VirtualDom::new_with_props(SummaryHarness, SummaryHarnessProps { vm });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
