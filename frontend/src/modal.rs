//! Lead-capture dialog.
//!
//! The parent owns whether the dialog *should* be open. `ModalLifecycle`
//! shadows that flag so the content is mounted one frame before it fades in,
//! and stays mounted for the length of the fade-out after a close request.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config::{LEAD_FORM_ID, MODAL_TRANSITION_MS};
use crate::dom::{self, AnimationFrame, BodyScrollLock, EventListener};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    /// Mounted, waiting one frame before becoming visible.
    Opening,
    Open,
    /// Fading out, unmounted once the transition has had time to finish.
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open,
    Close,
    FrameElapsed(u32),
    UnmountElapsed(u32),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalLifecycle {
    pub phase: ModalPhase,
    /// Bumped on every phase change. Deferred callbacks carry the value they
    /// were scheduled under and are dropped if it no longer matches.
    pub generation: u32,
}

impl ModalLifecycle {
    pub fn is_rendered(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_visible(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    fn enter(self, phase: ModalPhase) -> Self {
        Self {
            phase,
            generation: self.generation.wrapping_add(1),
        }
    }

    pub fn apply(self, action: ModalAction) -> Self {
        match (self.phase, action) {
            (ModalPhase::Closed, ModalAction::Open) => self.enter(ModalPhase::Opening),
            // Still mounted, so there is nothing to wait for.
            (ModalPhase::Closing, ModalAction::Open) => self.enter(ModalPhase::Open),
            (ModalPhase::Opening | ModalPhase::Open, ModalAction::Close) => {
                self.enter(ModalPhase::Closing)
            }
            (ModalPhase::Opening, ModalAction::FrameElapsed(generation))
                if generation == self.generation =>
            {
                self.enter(ModalPhase::Open)
            }
            (ModalPhase::Closing, ModalAction::UnmountElapsed(generation))
                if generation == self.generation =>
            {
                self.enter(ModalPhase::Closed)
            }
            _ => self,
        }
    }
}

impl Reducible for ModalLifecycle {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Keys that dismiss the dialog. "Esc" is what older Edge reports.
pub fn dismiss_action(key: &str) -> Option<ModalAction> {
    match key {
        "Escape" | "Esc" => Some(ModalAction::Close),
        _ => None,
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or(MODAL_TRANSITION_MS)]
    pub transition_ms: u32,
    #[prop_or(AttrValue::from(LEAD_FORM_ID))]
    pub form_id: AttrValue,
}

#[function_component(LeadModal)]
pub fn lead_modal(props: &LeadModalProps) -> Html {
    let lifecycle = use_reducer_eq(ModalLifecycle::default);
    let on_close: Rc<RefCell<Callback<()>>> = use_mut_ref(|| props.on_close.clone());
    *on_close.borrow_mut() = props.on_close.clone();

    {
        let dispatcher = lifecycle.dispatcher();
        use_effect_with_deps(
            move |open| {
                dispatcher.dispatch(if *open { ModalAction::Open } else { ModalAction::Close });
                || ()
            },
            props.open,
        );
    }

    // Background scrolling is locked for exactly as long as the parent wants the dialog open.
    use_effect_with_deps(
        |open| {
            let lock = if *open {
                BodyScrollLock::acquire()
                    .map_err(|err| warn!("Failed to lock body scroll: {:?}", err))
                    .ok()
            } else {
                None
            };
            move || drop(lock)
        },
        props.open,
    );

    {
        let dispatcher = lifecycle.dispatcher();
        use_effect_with_deps(
            move |&(phase, generation, transition_ms)| {
                let cancel: Box<dyn FnOnce()> = match phase {
                    ModalPhase::Opening => {
                        let fallback = dispatcher.clone();
                        match AnimationFrame::request(move || {
                            dispatcher.dispatch(ModalAction::FrameElapsed(generation))
                        }) {
                            Ok(frame) => Box::new(move || drop(frame)),
                            Err(err) => {
                                warn!("requestAnimationFrame failed, using a timeout: {:?}", err);
                                let timeout = Timeout::new(0, move || {
                                    fallback.dispatch(ModalAction::FrameElapsed(generation))
                                });
                                Box::new(move || drop(timeout))
                            }
                        }
                    }
                    ModalPhase::Closing => {
                        let timeout = Timeout::new(transition_ms, move || {
                            dispatcher.dispatch(ModalAction::UnmountElapsed(generation))
                        });
                        Box::new(move || drop(timeout))
                    }
                    ModalPhase::Open | ModalPhase::Closed => Box::new(|| ()),
                };
                move || cancel()
            },
            (lifecycle.phase, lifecycle.generation, props.transition_ms),
        );
    }

    {
        let on_close = on_close.clone();
        use_effect_with_deps(
            move |rendered| {
                let listener = if *rendered {
                    dom::window()
                        .and_then(|window| {
                            EventListener::new(&window, "keydown", move |event: Event| {
                                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                                    return;
                                };
                                if dismiss_action(&event.key()) == Some(ModalAction::Close) {
                                    on_close.borrow().emit(());
                                }
                            })
                        })
                        .map_err(|err| warn!("Failed to attach keydown listener: {:?}", err))
                        .ok()
                } else {
                    None
                };
                move || drop(listener)
            },
            lifecycle.is_rendered(),
        );
    }

    if !lifecycle.is_rendered() {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let transition = format!("transition-duration: {}ms;", props.transition_ms);

    html! {
        <div
            class={classes!("modal-overlay", lifecycle.is_visible().then(|| "visible"))}
            style={transition.clone()}
            onclick={close.clone()}
        >
            <div
                class="modal-dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby="lead-modal-title"
                style={transition}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <button class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
                <h2 id="lead-modal-title">{"Request a quote"}</h2>
                <p class="modal-subtitle">
                    {"Tell us about your team and we will get back to you within one business day."}
                </p>
                <div class="lead-form-frame">
                    <div class="lead-form-loading">
                        <span class="spinner"></span>
                        <span>{"Loading form..."}</span>
                    </div>
                    <div
                        class="lead-form-embed"
                        data-fillout-id={props.form_id.clone()}
                        data-fillout-embed-type="standard"
                        data-fillout-inherit-parameters=""
                        data-fillout-dynamic-resize=""
                    ></div>
                </div>
            </div>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.7);
                    backdrop-filter: blur(4px);
                    opacity: 0;
                    transition-property: opacity;
                    transition-timing-function: ease;
                }
                .modal-overlay.visible {
                    opacity: 1;
                }
                .modal-dialog {
                    position: relative;
                    width: 100%;
                    max-width: 640px;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: #fff;
                    color: #111827;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.35);
                    transform: translateY(16px) scale(0.98);
                    transition-property: transform;
                    transition-timing-function: ease;
                }
                .modal-overlay.visible .modal-dialog {
                    transform: none;
                }
                .modal-close {
                    position: absolute;
                    top: 12px;
                    right: 12px;
                    width: 36px;
                    height: 36px;
                    border-radius: 50%;
                    border: none;
                    background: #f3f4f6;
                    font-size: 22px;
                    cursor: pointer;
                }
                .modal-subtitle {
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                }
                .lead-form-frame {
                    position: relative;
                    width: 100%;
                    height: 500px;
                }
                .lead-form-loading {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    color: #6b7280;
                    z-index: 0;
                }
                .lead-form-embed {
                    position: relative;
                    z-index: 1;
                    width: 100%;
                    height: 500px;
                }
                .spinner {
                    width: 32px;
                    height: 32px;
                    border: 3px solid #e5e7eb;
                    border-top-color: #f59e0b;
                    border-radius: 50%;
                    animation: spin 0.8s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::{Element, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    type Control<T> = Rc<RefCell<Option<Callback<T>>>>;

    #[derive(Properties)]
    struct HostProps {
        control: Control<bool>,
        duration: Control<u32>,
        closes: Rc<Cell<u32>>,
        transition_ms: u32,
    }

    impl PartialEq for HostProps {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.control, &other.control)
                && Rc::ptr_eq(&self.duration, &other.duration)
                && Rc::ptr_eq(&self.closes, &other.closes)
                && self.transition_ms == other.transition_ms
        }
    }

    /// Owns the desired-open flag the way `App` does and lets a test flip it.
    #[function_component(Host)]
    fn host(props: &HostProps) -> Html {
        let open = use_state(|| false);
        let transition_ms = use_state(|| props.transition_ms);
        *props.control.borrow_mut() = Some({
            let open = open.clone();
            Callback::from(move |value: bool| open.set(value))
        });
        *props.duration.borrow_mut() = Some({
            let transition_ms = transition_ms.clone();
            Callback::from(move |value: u32| transition_ms.set(value))
        });

        let on_close = {
            let open = open.clone();
            let closes = props.closes.clone();
            Callback::from(move |_| {
                closes.set(closes.get() + 1);
                open.set(false);
            })
        };

        html! {
            <LeadModal open={*open} on_close={on_close} transition_ms={*transition_ms} />
        }
    }

    struct Mounted {
        root: Element,
        control: Control<bool>,
        duration: Control<u32>,
        closes: Rc<Cell<u32>>,
        handle: yew::AppHandle<Host>,
    }

    impl Mounted {
        fn set_open(&self, open: bool) {
            self.control
                .borrow()
                .as_ref()
                .expect("host has rendered")
                .emit(open);
        }

        fn set_transition(&self, ms: u32) {
            self.duration
                .borrow()
                .as_ref()
                .expect("host has rendered")
                .emit(ms);
        }

        fn overlay(&self) -> Option<Element> {
            self.root.query_selector(".modal-overlay").unwrap()
        }

        fn is_shown(&self) -> bool {
            self.overlay()
                .map(|overlay| overlay.class_list().contains("visible"))
                .unwrap_or(false)
        }

        fn unmount(self) {
            self.handle.destroy();
            self.root.remove();
        }
    }

    async fn mount() -> Mounted {
        mount_with(MODAL_TRANSITION_MS).await
    }

    async fn mount_with(transition_ms: u32) -> Mounted {
        let document = dom::document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let control = Control::<bool>::default();
        let duration = Control::<u32>::default();
        let closes = Rc::new(Cell::new(0));
        let props = HostProps {
            control: control.clone(),
            duration: duration.clone(),
            closes: closes.clone(),
            transition_ms,
        };
        let handle = yew::Renderer::<Host>::with_root_and_props(root.clone(), props).render();
        settle(20).await;

        Mounted { root, control, duration, closes, handle }
    }

    async fn settle(ms: u32) {
        TimeoutFuture::new(ms).await;
    }

    fn body_overflow() -> String {
        dom::document()
            .unwrap()
            .body()
            .unwrap()
            .style()
            .get_property_value("overflow")
            .unwrap()
    }

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        dom::window().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    async fn content_outlives_close_by_the_transition() {
        let modal = mount().await;
        assert!(modal.overlay().is_none());

        modal.set_open(true);
        settle(50).await;
        assert!(modal.is_shown());

        modal.set_open(false);
        settle(10).await;
        assert!(modal.overlay().is_some());
        assert!(!modal.is_shown());

        settle(150).await;
        assert!(modal.overlay().is_some(), "removed before the fade finished");

        settle(250).await;
        assert!(modal.overlay().is_none());
        modal.unmount();
    }

    #[wasm_bindgen_test]
    async fn unmount_delay_follows_transition_duration() {
        let modal = mount_with(1000).await;
        modal.set_open(true);
        settle(50).await;

        modal.set_open(false);
        settle(500).await;
        assert!(modal.overlay().is_some(), "removed before a 1000ms fade finished");

        settle(600).await;
        assert!(modal.overlay().is_none());
        modal.unmount();
    }

    #[wasm_bindgen_test]
    async fn shorter_duration_mid_fade_reschedules_unmount() {
        let modal = mount_with(1000).await;
        modal.set_open(true);
        settle(50).await;

        modal.set_open(false);
        settle(100).await;
        modal.set_transition(50);
        settle(200).await;
        assert!(modal.overlay().is_none(), "still waiting on the old 1000ms delay");
        modal.unmount();
    }

    #[wasm_bindgen_test]
    async fn reopen_during_fade_keeps_content_mounted() {
        let modal = mount().await;
        modal.set_open(true);
        settle(50).await;

        modal.set_open(false);
        settle(100).await;
        modal.set_open(true);

        for _ in 0..8 {
            settle(50).await;
            assert!(modal.overlay().is_some());
        }
        assert!(modal.is_shown());

        modal.set_open(false);
        settle(400).await;
        modal.unmount();
    }

    #[wasm_bindgen_test]
    async fn escape_closes_only_while_mounted() {
        let modal = mount().await;

        press("Escape");
        settle(10).await;
        assert_eq!(modal.closes.get(), 0);

        modal.set_open(true);
        settle(50).await;
        press("Enter");
        settle(10).await;
        assert_eq!(modal.closes.get(), 0);
        assert!(modal.is_shown());

        press("Escape");
        settle(10).await;
        assert_eq!(modal.closes.get(), 1);
        assert!(!modal.is_shown());

        settle(400).await;
        assert!(modal.overlay().is_none());

        press("Escape");
        settle(10).await;
        assert_eq!(modal.closes.get(), 1);
        modal.unmount();
    }

    #[wasm_bindgen_test]
    async fn backdrop_click_closes_but_dialog_click_does_not() {
        let modal = mount().await;
        modal.set_open(true);
        settle(50).await;

        let dialog = modal
            .root
            .query_selector(".modal-dialog")
            .unwrap()
            .unwrap()
            .dyn_into::<web_sys::HtmlElement>()
            .unwrap();
        dialog.click();
        settle(10).await;
        assert_eq!(modal.closes.get(), 0);

        modal
            .overlay()
            .unwrap()
            .dyn_into::<web_sys::HtmlElement>()
            .unwrap()
            .click();
        settle(10).await;
        assert_eq!(modal.closes.get(), 1);

        settle(400).await;
        modal.unmount();
    }

    #[wasm_bindgen_test]
    async fn body_scroll_follows_desired_state() {
        let modal = mount().await;
        assert_eq!(body_overflow(), "");

        modal.set_open(true);
        settle(20).await;
        assert_eq!(body_overflow(), "hidden");

        // Restored on the close request, not after the fade.
        modal.set_open(false);
        settle(10).await;
        assert!(modal.overlay().is_some());
        assert_eq!(body_overflow(), "");

        settle(400).await;
        modal.unmount();
    }
}
