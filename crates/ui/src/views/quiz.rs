use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;

use quiz_core::model::{Outcome, ProgressMap};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{QuizIntent, apply_intent, intent_for_key, map_quiz_screen};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.title().to_string();
    let quiz_loop = ctx.quiz_loop();

    let mut revision = use_signal(|| 0_u64);
    let save_error = use_signal(|| None::<ViewError>);

    // The session is not a signal: it notifies its own subscribers, and the
    // subscription below is what schedules a re-render.
    let session = use_hook(|| {
        let mut session = quiz_loop.start_session(ctx.progress());
        session.subscribe(move |_change| revision += 1);
        Rc::new(RefCell::new(session))
    });

    // Saves run one after another so the newest snapshot is written last.
    let saver = use_coroutine(move |mut rx: UnboundedReceiver<ProgressMap>| {
        let quiz_loop = quiz_loop.clone();
        let mut save_error = save_error;
        async move {
            while let Some(snapshot) = rx.next().await {
                match quiz_loop.save_progress(&snapshot).await {
                    Ok(()) => save_error.set(None),
                    Err(_) => save_error.set(Some(ViewError::SaveFailed)),
                }
            }
        }
    });

    let dispatch = {
        let session = Rc::clone(&session);
        let quiz_loop = ctx.quiz_loop();
        let ctx = ctx.clone();
        use_callback(move |intent: QuizIntent| {
            tracing::debug!(?intent, "quiz intent");
            let graded = apply_intent(&quiz_loop, &mut session.borrow_mut(), intent);
            if let Some(result) = graded {
                ctx.set_progress(result.progress.clone());
                saver.send(result.progress);
            }
        })
    };

    #[cfg(test)]
    {
        use_hook(|| {
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch);
            }
        });
    }

    // Reading the revision subscribes this component to session changes.
    let _ = revision();
    let screen = map_quiz_screen(&session.borrow());
    let revealed = screen.can_grade();

    rsx! {
        div {
            class: "quiz",
            tabindex: "0",
            onkeydown: move |evt: KeyboardEvent| {
                if let Some(intent) = intent_for_key(&evt.data.key(), revealed) {
                    evt.prevent_default();
                    dispatch.call(intent);
                }
            },
            div { class: "quiz__card",
                h1 { class: "quiz__title", "{title}" }
                p { class: "quiz__position", "{screen.position_label}" }
                p { class: "quiz__progress", "{screen.progress_label}" }
                div { class: "quiz__question",
                    p { "{screen.question}" }
                }
                if let Some(answer) = screen.answer.as_ref() {
                    div { class: "quiz__answer",
                        strong { "Answer:" }
                        " {answer}"
                    }
                }
                div { class: "quiz__controls",
                    button {
                        class: "quiz__button",
                        id: "quiz-prev",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Previous),
                        "Prev"
                    }
                    if revealed {
                        button {
                            class: "quiz__button quiz__button--right",
                            id: "quiz-grade-right",
                            r#type: "button",
                            onclick: move |_| dispatch.call(QuizIntent::Grade(Outcome::Correct)),
                            "I Got It Right"
                        }
                        button {
                            class: "quiz__button quiz__button--wrong",
                            id: "quiz-grade-wrong",
                            r#type: "button",
                            onclick: move |_| dispatch.call(QuizIntent::Grade(Outcome::Incorrect)),
                            "I Got It Wrong"
                        }
                    } else {
                        button {
                            class: "quiz__button quiz__button--reveal",
                            id: "quiz-reveal",
                            r#type: "button",
                            onclick: move |_| dispatch.call(QuizIntent::Reveal),
                            "Check Answer"
                        }
                    }
                    button {
                        class: "quiz__button",
                        id: "quiz-next",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Next),
                        "Next"
                    }
                }
                div { class: "quiz__controls quiz__controls--secondary",
                    button {
                        class: "quiz__button quiz__button--random",
                        id: "quiz-random",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Random),
                        "Random Question"
                    }
                }
                if let Some(err) = save_error() {
                    p { class: "quiz__error", role: "status", "{err.message()}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
