mod cursor_overlay;
mod dom;
mod hooks;
mod project_modal;
mod sections;
mod widgets;

use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::{
    content::{SectionId, OWNER_FIRST_NAME},
    motion::active_section,
};
use cursor_overlay::CustomCursor;
use sections::{AboutSection, ContactSection, ExperienceSection, HeroSection, ProjectsSection};

const ACTIVE_SECTION_PROBE: f64 = 1.0 / 3.0;

fn current_section() -> SectionId {
    let probe_y = dom::viewport_size().1 * ACTIVE_SECTION_PROBE;
    active_section(&dom::section_tops(), probe_y).unwrap_or(SectionId::Hero)
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let active = use_state_eq(|| SectionId::Hero);

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let update = Rc::new(move || active.set(current_section()));
            update();

            let listeners: Vec<EventListener> = window()
                .map(|win| {
                    ["scroll", "resize"]
                        .into_iter()
                        .map(|event| {
                            let update = Rc::clone(&update);
                            EventListener::new(&win, event, move |_| update())
                        })
                        .collect()
                })
                .unwrap_or_default();

            move || drop(listeners)
        });
    }

    html! {
        <header class="site-header">
            <button
                type="button"
                class="brand"
                onclick={Callback::from(|_: MouseEvent| dom::scroll_to_section(SectionId::Hero))}
            >
                <span class="gradient-text">{OWNER_FIRST_NAME}</span>
            </button>
            <nav aria-label="Sections">
                <ul class="nav-list">
                    { for SectionId::ALL.iter().map(|&section| {
                        let is_active = *active == section;
                        html! {
                            <li key={section.as_str()}>
                                <button
                                    type="button"
                                    class={classes!("nav-item", is_active.then_some("is-active"))}
                                    aria-current={is_active.then_some("location")}
                                    onclick={Callback::from(move |_: MouseEvent| dom::scroll_to_section(section))}
                                >
                                    {section.nav_label()}
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        </header>
    }
}

#[function_component(App)]
fn app() -> Html {
    let reduced_motion = use_memo((), |_| dom::prefers_reduced_motion());
    let fine_pointer = use_memo((), |_| dom::fine_pointer());

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            if *fine_pointer {
                <CustomCursor smoothing={!*reduced_motion} />
            }
            <div class={classes!("page-shell", reduced_motion.then_some("reduced-motion"))}>
                <Navigation />
                <main id="content">
                    <HeroSection reduced_motion={*reduced_motion} />
                    <div class="section-fade" aria-hidden="true" />
                    <AboutSection />
                    <ProjectsSection />
                    <ExperienceSection />
                    <ContactSection />
                </main>
            </div>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        dom::document()
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
