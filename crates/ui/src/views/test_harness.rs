use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{ProgressMap, Question, QuestionBank, QuestionId};
use services::{QuizLoopService, QuizServices};
use storage::repository::{KeyValueRepository, Storage};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

#[derive(Clone)]
struct TestApp {
    progress: ProgressMap,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        "Test Quiz".to_string()
    }

    fn initial_progress(&self) -> ProgressMap {
        self.progress.clone()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    context: AppContext,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizRoot(props: QuizHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct QuizHarness {
    pub dom: VirtualDom,
    context: AppContext,
    handles: QuizTestHandles,
}

fn mount(context: &AppContext, handles: &QuizTestHandles) -> VirtualDom {
    VirtualDom::new_with_props(
        QuizRoot,
        QuizHarnessProps {
            context: context.clone(),
            handles: handles.clone(),
        },
    )
}

impl QuizHarness {
    /// Drop the current tree and mount a new quiz view over the same context.
    pub fn remount(&mut self) {
        self.handles = QuizTestHandles::default();
        self.dom = mount(&self.context, &self.handles);
        self.rebuild();
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
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

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn bank(ids: &[u64]) -> Arc<QuestionBank> {
    let questions = ids
        .iter()
        .map(|id| Question::new(QuestionId::new(*id), format!("Q{id}"), format!("A{id}")).unwrap())
        .collect();
    Arc::new(QuestionBank::new(questions).unwrap())
}

/// Build a rendered quiz over `slots`, loading progress the way the app does.
pub async fn setup_quiz_harness(ids: &[u64], slots: Arc<dyn KeyValueRepository>) -> QuizHarness {
    let quiz_loop = QuizServices::from_storage(Storage { slots }, bank(ids)).quiz_loop();
    let progress = quiz_loop.load_progress().await;
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        progress,
        quiz_loop,
    });
    let context = build_app_context(&app);
    let handles = QuizTestHandles::default();

    let dom = mount(&context, &handles);
    let mut harness = QuizHarness {
        dom,
        context,
        handles,
    };
    harness.rebuild();
    harness
}
