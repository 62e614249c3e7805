use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;

use super::{
    dom::{self, ScrollLock, StylesheetCursor},
    hooks::use_capability,
    widgets::{BadgeList, ExternalLink},
};
use crate::{
    content::{asset_path, Project, PLACEHOLDER_GLYPH},
    scope::Suppression,
    viewer::{
        in_close_reserve, Capability, DialogAction, Point, ProjectDialog, ViewerAction,
        ViewerState,
    },
};

const FULLSCREEN_OWN_CLICK_SELECTOR: &str = "button, [data-clickable]";

impl Reducible for ProjectDialog {
    type Action = DialogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn capture_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Capture,
        passive: false,
    }
}

fn is_escape(event: &Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .map(|event| event.key() == "Escape")
        .unwrap_or(false)
}

fn first_touch(event: &Event, changed: bool) -> Option<Point> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touches = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    let touch = touches.get(0)?;
    Some(dom::client_point(touch.client_x(), touch.client_y()))
}

#[derive(Properties, PartialEq)]
pub struct ProjectImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ProjectImage)]
pub fn project_image(props: &ProjectImageProps) -> Html {
    let failed = use_state_eq(|| false);

    {
        let failed = failed.clone();
        use_effect_with(props.src.clone(), move |_| {
            failed.set(false);
            || ()
        });
    }

    if *failed {
        return html! {
            <div
                class={classes!("image-placeholder", props.class.clone())}
                role="img"
                aria-label={props.alt.clone()}
            >
                <span class="placeholder-glyph" aria-hidden="true">{PLACEHOLDER_GLYPH}</span>
                <p>{props.placeholder.clone()}</p>
            </div>
        };
    }

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    html! {
        <img
            class={props.class.clone()}
            src={props.src.clone()}
            alt={props.alt.clone()}
            loading="lazy"
            onerror={onerror}
        />
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    on_open: Callback<()>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    let onkeydown = {
        let on_open = props.on_open.clone();
        Callback::from(move |event: KeyboardEvent| {
            if matches!(event.key().as_str(), "Enter" | " ") {
                event.prevent_default();
                on_open.emit(());
            }
        })
    };

    html! {
        <article
            class={classes!("project-card", "cursor-pointer", project.featured.then_some("is-featured"))}
            role="button"
            tabindex="0"
            aria-haspopup="dialog"
            aria-label={format!("{}: more info", project.title)}
            onclick={onclick}
            onkeydown={onkeydown}
        >
            <div class="project-card-media">
                <ProjectImage
                    src={project.hero_src()}
                    alt={project.title}
                    placeholder="Project Image"
                />
                <div class="project-card-hover" aria-hidden="true">
                    <span class="button button-small">{"More Info"}</span>
                </div>
            </div>
            <div class="project-card-body">
                <header class="project-card-header">
                    <h3>{project.title}</h3>
                    if project.featured {
                        <span class="badge badge-featured">{"★ Featured"}</span>
                    }
                </header>
                <p class="muted">{project.description}</p>
                <BadgeList items={project.summary_tech()} />
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct CarouselProps {
    project: &'static Project,
    viewer: ViewerState,
    dispatch: Callback<ViewerAction>,
}

#[function_component(Carousel)]
fn carousel(props: &CarouselProps) -> Html {
    let project = props.project;
    let images = props.viewer.images();

    let Some(index) = props.viewer.current() else {
        return html! {
            <div class="carousel carousel-empty">
                <span class="placeholder-glyph" aria-hidden="true">{PLACEHOLDER_GLYPH}</span>
                <p class="muted">{"No screenshots yet"}</p>
            </div>
        };
    };

    let step = |action: ViewerAction| {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(action))
    };

    html! {
        <div class="carousel" aria-roledescription="carousel">
            <div class="carousel-viewport">
                <div
                    class="carousel-track"
                    style={format!("transform: translateX(-{}%);", index * 100)}
                >
                    { for project.images.iter().enumerate().map(|(slide, name)| html! {
                        <div
                            class="carousel-slide"
                            key={slide}
                            aria-hidden={(slide != index).then_some("true")}
                        >
                            <button
                                type="button"
                                class="carousel-zoom"
                                aria-label={format!("View screenshot {} fullscreen", slide + 1)}
                                onclick={step(ViewerAction::OpenFullscreen(slide))}
                            >
                                <ProjectImage
                                    src={asset_path(name)}
                                    alt={project.screenshot_alt(slide)}
                                    placeholder={format!("Project Screenshot {}", slide + 1)}
                                />
                                <span class="zoom-hint" aria-hidden="true">{"⤢"}</span>
                            </button>
                        </div>
                    }) }
                </div>
            </div>
            if images.can_navigate() {
                <button
                    type="button"
                    class="carousel-step carousel-prev"
                    aria-label="Previous screenshot"
                    onclick={step(ViewerAction::Previous)}
                >
                    {"‹"}
                </button>
                <button
                    type="button"
                    class="carousel-step carousel-next"
                    aria-label="Next screenshot"
                    onclick={step(ViewerAction::Next)}
                >
                    {"›"}
                </button>
            }
            if let Some(label) = props.viewer.counter_label() {
                <p class="carousel-counter" aria-live="polite">{label}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DetailListProps {
    title: AttrValue,
    items: &'static [&'static str],
    marker: AttrValue,
}

#[function_component(DetailList)]
fn detail_list(props: &DetailListProps) -> Html {
    if props.items.is_empty() {
        return Html::default();
    }

    html! {
        <section class="detail-block">
            <h4>{props.title.clone()}</h4>
            <ul class="detail-list">
                { for props.items.iter().map(|item| html! {
                    <li key={*item}>
                        <span class="detail-marker" aria-hidden="true">{props.marker.clone()}</span>
                        {*item}
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: &'static Project,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let project = props.project;
    let capability = use_capability();
    let dialog = use_reducer_eq(|| ProjectDialog::new(project.image_count(), capability));

    let viewer = dialog.viewer();
    let is_open = dialog.is_open();
    let is_fullscreen = viewer.is_fullscreen();
    let nav_capability = viewer.capability();

    {
        let dispatcher = dialog.dispatcher();
        use_effect_with(capability, move |capability| {
            dispatcher.dispatch(DialogAction::Viewer(ViewerAction::Capability(*capability)));
            || ()
        });
    }

    {
        let dispatcher = dialog.dispatcher();
        use_effect_with(is_open, move |&is_open| {
            let mut guards = None;
            if is_open {
                let escape = dom::document().map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        if is_escape(event) {
                            dispatcher.dispatch(DialogAction::Escape);
                        }
                    })
                });
                guards = Some((ScrollLock::engage(), escape));
            }
            move || drop(guards)
        });
    }

    // Fullscreen owns Escape: catch it at the window before the dialog sees it.
    {
        let dispatcher = dialog.dispatcher();
        use_effect_with(is_fullscreen, move |&is_fullscreen| {
            let listener = is_fullscreen.then(window).flatten().map(|win| {
                EventListener::new_with_options(&win, "keydown", capture_options(), move |event| {
                    if !is_escape(event) {
                        return;
                    }
                    event.prevent_default();
                    event.stop_immediate_propagation();
                    dispatcher.dispatch(DialogAction::Viewer(ViewerAction::Escape));
                })
            });
            move || drop(listener)
        });
    }

    {
        let dispatcher = dialog.dispatcher();
        use_effect_with((is_fullscreen, nav_capability), move |&(is_fullscreen, capability)| {
            let mut listeners = Vec::new();

            if let Some(document) = is_fullscreen.then(dom::document).flatten() {
                match capability {
                    Capability::Desktop => {
                        let on_move = {
                            let dispatcher = dispatcher.clone();
                            EventListener::new(&document, "mousemove", move |event| {
                                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                                    return;
                                };
                                dispatcher.dispatch(DialogAction::Viewer(ViewerAction::PointerMove {
                                    at: dom::client_point(event.client_x(), event.client_y()),
                                    viewport_width: dom::viewport_size().0,
                                }));
                            })
                        };
                        let on_click = {
                            let dispatcher = dispatcher.clone();
                            EventListener::new_with_options(
                                &document,
                                "click",
                                capture_options(),
                                move |event| {
                                    if dom::target_matches(event, FULLSCREEN_OWN_CLICK_SELECTOR) {
                                        return;
                                    }
                                    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                                        return;
                                    };
                                    let at = dom::client_point(mouse.client_x(), mouse.client_y());
                                    let viewport_width = dom::viewport_size().0;
                                    if in_close_reserve(at, viewport_width) {
                                        return;
                                    }
                                    event.prevent_default();
                                    event.stop_propagation();
                                    dispatcher.dispatch(DialogAction::Viewer(ViewerAction::Click {
                                        at,
                                        viewport_width,
                                    }));
                                },
                            )
                        };
                        listeners.push(on_move);
                        listeners.push(on_click);
                    }
                    Capability::Touch => {
                        let on_start = {
                            let dispatcher = dispatcher.clone();
                            EventListener::new(&document, "touchstart", move |event| {
                                if let Some(at) = first_touch(event, false) {
                                    dispatcher.dispatch(DialogAction::Viewer(ViewerAction::TouchStart(at)));
                                }
                            })
                        };
                        let on_end = {
                            let dispatcher = dispatcher.clone();
                            EventListener::new(&document, "touchend", move |event| {
                                if let Some(at) = first_touch(event, true) {
                                    dispatcher.dispatch(DialogAction::Viewer(ViewerAction::TouchEnd(at)));
                                }
                            })
                        };
                        listeners.push(on_start);
                        listeners.push(on_end);
                    }
                }
            }

            move || drop(listeners)
        });
    }

    use_effect_with(viewer.hides_cursor(), |&hide| {
        let guard = hide.then(|| Suppression::acquire(StylesheetCursor::default()));
        move || drop(guard)
    });

    let dispatch_viewer = {
        let dispatcher = dialog.dispatcher();
        Callback::from(move |action: ViewerAction| {
            dispatcher.dispatch(DialogAction::Viewer(action))
        })
    };

    let on_open = {
        let dispatcher = dialog.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DialogAction::Open))
    };

    let on_close = {
        let dispatcher = dialog.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DialogAction::Close))
    };

    let on_close_fullscreen = {
        let dispatcher = dialog.dispatcher();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            dispatcher.dispatch(DialogAction::Viewer(ViewerAction::CloseFullscreen))
        })
    };

    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());
    let title_id = format!("project-title-{}", project.title.to_lowercase().replace(' ', "-"));

    html! {
        <>
            <ProjectCard project={project} on_open={on_open} />

            if is_open {
                <div class="dialog-backdrop" onclick={on_close.clone()}>
                    <div
                        class="dialog"
                        role="dialog"
                        aria-modal="true"
                        aria-labelledby={title_id.clone()}
                        onclick={keep_open}
                    >
                        <button type="button" class="dialog-close" aria-label="Close" onclick={on_close}>
                            {"✕"}
                        </button>

                        <header class="dialog-header">
                            <div class="dialog-heading">
                                <h3 id={title_id}>{project.title}</h3>
                                if project.featured {
                                    <span class="badge badge-featured">{"★ Featured"}</span>
                                }
                            </div>
                            <p class="muted">{project.description}</p>
                            <div class="dialog-links">
                                <ExternalLink
                                    href={project.github}
                                    label="Code"
                                    icon={AttrValue::from("⌥")}
                                    class={classes!("button", "button-outline")}
                                />
                                <ExternalLink
                                    href={project.demo}
                                    label="Demo"
                                    icon={AttrValue::from("↗")}
                                    class={classes!("button")}
                                />
                            </div>
                        </header>

                        <Carousel project={project} viewer={viewer.clone()} dispatch={dispatch_viewer} />

                        <section class="detail-block">
                            <h4>{"About This Project"}</h4>
                            <p>{project.long_description}</p>
                        </section>

                        <dl class="detail-facts">
                            <div><dt>{"Timeline"}</dt><dd>{project.timeline}</dd></div>
                            <div><dt>{"Team Size"}</dt><dd>{project.team_size}</dd></div>
                            <div><dt>{"My Role"}</dt><dd>{project.role}</dd></div>
                        </dl>

                        <section class="detail-block">
                            <h4>{"Technologies Used"}</h4>
                            <BadgeList items={project.tech} />
                        </section>

                        <div class="detail-grid">
                            <DetailList title="Key Features" items={project.key_features} marker="✓" />
                            <DetailList title="Challenges" items={project.challenges} marker="!" />
                            <DetailList title="Outcomes" items={project.outcomes} marker="↑" />
                        </div>
                    </div>
                </div>
            }

            if is_fullscreen {
                <div
                    class={classes!("fullscreen", (nav_capability == Capability::Desktop).then_some("zone-nav"))}
                    role="dialog"
                    aria-modal="true"
                    aria-label={format!("{} screenshots", project.title)}
                >
                    if let Some(index) = viewer.current() {
                        <ProjectImage
                            key={index}
                            class="fullscreen-image"
                            src={project.image_src(index).unwrap_or_default()}
                            alt={project.screenshot_alt(index)}
                            placeholder={format!("Project Screenshot {}", index + 1)}
                        />
                    }
                    <button
                        type="button"
                        class="fullscreen-close"
                        data-clickable="true"
                        aria-label="Close fullscreen"
                        onclick={on_close_fullscreen}
                    >
                        {"✕"}
                    </button>
                    if let Some(label) = viewer.counter_label() {
                        <p class="fullscreen-counter" aria-live="polite">{label}</p>
                    }
                </div>
            }

            if let Some(glyph) = viewer.zone_glyph() {
                <div
                    class="zone-cursor"
                    style={format!("left: {:.1}px; top: {:.1}px;", viewer.pointer().x, viewer.pointer().y)}
                    title={glyph.label()}
                    aria-hidden="true"
                >
                    {glyph.symbol()}
                </div>
            }
        </>
    }
}
