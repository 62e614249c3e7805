use web_sys::MouseEvent;
use yew::prelude::*;

use super::{
    dom,
    hooks::{use_in_view, use_scroll_progress, use_viewport_size},
    project_modal::ProjectModal,
    widgets::{ExternalLink, RevealBlock},
};
use crate::{
    content::{
        SectionId, CONTACT_METHODS, EXPERIENCE, OWNER_FIRST_NAME, OWNER_NAME, OWNER_TITLE,
        PROJECTS, RESUME_PATH, SKILLS, STORY, TOOLS,
    },
    motion::{
        particle_field, skill_fill, stagger_delay_ms, EnterFrom, HeroTransform, RevealMode,
        HERO_REVEAL_THRESHOLD, PARTICLE_COUNT, PROJECTS_REVEAL_THRESHOLD,
        SECTION_REVEAL_THRESHOLD,
    },
};

fn scroll_button(section: SectionId) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| dom::scroll_to_section(section))
}

#[function_component(MouseScrollIcon)]
fn mouse_scroll_icon() -> Html {
    html! {
        <button
            type="button"
            class="scroll-hint"
            aria-label="Scroll to About"
            onclick={scroll_button(SectionId::About)}
        >
            <span class="scroll-hint-mouse" aria-hidden="true">
                <span class="scroll-hint-wheel" />
            </span>
        </button>
    }
}

#[function_component(FloatingParticles)]
fn floating_particles() -> Html {
    let viewport = use_viewport_size();
    let particles = use_memo(viewport, |&(width, height)| {
        particle_field(PARTICLE_COUNT, width, height, dom::random)
    });

    html! {
        <div class="particles" aria-hidden="true">
            { for particles.iter().map(|particle| html! {
                <span class="particle" style={particle.style()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub reduced_motion: bool,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), HERO_REVEAL_THRESHOLD, RevealMode::Retrigger);
    let progress = use_scroll_progress(node.clone(), !props.reduced_motion);
    let transform = HeroTransform::at(progress);

    html! {
        <section id={SectionId::Hero.as_str()} class="hero" ref={node}>
            <div class="hero-glow glow-primary" aria-hidden="true" />
            <div class="hero-glow glow-secondary" aria-hidden="true" />
            <FloatingParticles />

            <div class="hero-copy" style={transform.style()}>
                <RevealBlock revealed={in_view}>
                    <h1 class="hero-name">
                        <span class="gradient-text">{OWNER_FIRST_NAME}</span>
                    </h1>
                </RevealBlock>
                <RevealBlock revealed={in_view} delay_ms={200}>
                    <p class="hero-title">
                        {OWNER_TITLE}
                        <span class="wave" aria-hidden="true">{" 👋"}</span>
                    </p>
                </RevealBlock>
                <RevealBlock revealed={in_view} delay_ms={400}>
                    <p class="hero-tagline muted">
                        {"I build fast, dependable web applications end to end, from the database to the last pixel."}
                    </p>
                </RevealBlock>
                <RevealBlock revealed={in_view} delay_ms={600} class="hero-actions">
                    <button
                        type="button"
                        class="button"
                        onclick={scroll_button(SectionId::Projects)}
                    >
                        {"View My Work"}
                    </button>
                    <button
                        type="button"
                        class="button button-outline"
                        onclick={scroll_button(SectionId::Contact)}
                    >
                        {"Get In Touch"}
                    </button>
                </RevealBlock>
            </div>

            <RevealBlock revealed={in_view} delay_ms={800} class="hero-scroll">
                <MouseScrollIcon />
            </RevealBlock>
        </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), SECTION_REVEAL_THRESHOLD, RevealMode::Once);

    html! {
        <section id={SectionId::About.as_str()} class="section about" ref={node}>
            <RevealBlock revealed={in_view} class="section-heading">
                <h2>{"About "}<span class="gradient-text">{"Me"}</span></h2>
            </RevealBlock>

            <div class="about-grid">
                <RevealBlock revealed={in_view} from={EnterFrom::Left} delay_ms={200} class="about-story">
                    <h3>{"My Story"}</h3>
                    { for STORY.iter().map(|paragraph| html! { <p class="muted">{*paragraph}</p> }) }

                    <h4>{"Tools I Use"}</h4>
                    <ul class="badge-list">
                        { for TOOLS.iter().enumerate().map(|(index, tool)| html! {
                            <li key={*tool}>
                                <RevealBlock
                                    revealed={in_view}
                                    delay_ms={stagger_delay_ms(400, 100, index)}
                                    class="badge"
                                >
                                    {*tool}
                                </RevealBlock>
                            </li>
                        }) }
                    </ul>
                </RevealBlock>

                <RevealBlock revealed={in_view} from={EnterFrom::Right} delay_ms={400} class="about-skills">
                    <h3>{"Skills"}</h3>
                    { for SKILLS.iter().enumerate().map(|(index, skill)| {
                        let delay = stagger_delay_ms(600, 100, index);
                        let fill = skill_fill(skill.level, in_view);
                        html! {
                            <div class="skill" key={skill.name}>
                                <div class="skill-label">
                                    <span>{skill.name}</span>
                                    <span class="muted">{format!("{}%", skill.level)}</span>
                                </div>
                                <div
                                    class="skill-track"
                                    role="progressbar"
                                    aria-label={skill.name}
                                    aria-valuemin="0"
                                    aria-valuemax="100"
                                    aria-valuenow={fill.to_string()}
                                >
                                    <div
                                        class="skill-fill"
                                        style={format!("width: {fill}%; --reveal-delay: {delay}ms;")}
                                    />
                                </div>
                            </div>
                        }
                    }) }
                </RevealBlock>
            </div>
        </section>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), PROJECTS_REVEAL_THRESHOLD, RevealMode::Once);

    html! {
        <section id={SectionId::Projects.as_str()} class="section projects" ref={node}>
            <RevealBlock revealed={in_view} class="section-heading">
                <h2>{"Featured "}<span class="gradient-text">{"Projects"}</span></h2>
                <p class="muted">{"A selection of things I have designed, built and shipped."}</p>
            </RevealBlock>

            <div class="project-grid">
                { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                    <RevealBlock
                        revealed={in_view}
                        delay_ms={stagger_delay_ms(0, 100, index)}
                        class={classes!("project-cell", project.featured.then_some("span-2"))}
                    >
                        <ProjectModal project={project} />
                    </RevealBlock>
                }) }
            </div>
        </section>
    }
}

#[function_component(ExperienceSection)]
pub fn experience_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), SECTION_REVEAL_THRESHOLD, RevealMode::Once);
    let last = EXPERIENCE.len().saturating_sub(1);

    html! {
        <section id={SectionId::Experience.as_str()} class="section experience" ref={node}>
            <RevealBlock revealed={in_view} class="section-heading">
                <h2>{"Work "}<span class="gradient-text">{"Experience"}</span></h2>
            </RevealBlock>

            <ol class="timeline">
                { for EXPERIENCE.iter().enumerate().map(|(index, entry)| html! {
                    <li class="timeline-entry" key={entry.company}>
                        <RevealBlock
                            revealed={in_view}
                            from={EnterFrom::alternating(index)}
                            delay_ms={stagger_delay_ms(0, 200, index)}
                        >
                            <div class="timeline-marker" aria-hidden="true">
                                <span class="timeline-dot" />
                                if index < last {
                                    <span class="timeline-connector" />
                                }
                            </div>
                            <article class="timeline-card">
                                <header>
                                    <h3>{entry.position}</h3>
                                    <p class="timeline-company">{entry.company}</p>
                                    <p class="muted timeline-meta">
                                        <span>{entry.period}</span>
                                        <span aria-hidden="true">{" · "}</span>
                                        <span>{entry.location}</span>
                                    </p>
                                </header>
                                <p class="muted">{entry.description}</p>
                                <h4>{"Key Achievements"}</h4>
                                <ul class="detail-list">
                                    { for entry.achievements.iter().map(|item| html! {
                                        <li key={*item}>{*item}</li>
                                    }) }
                                </ul>
                            </article>
                        </RevealBlock>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), SECTION_REVEAL_THRESHOLD, RevealMode::Once);

    html! {
        <section id={SectionId::Contact.as_str()} class="section contact" ref={node}>
            <RevealBlock revealed={in_view} class="section-heading">
                <h2>{"Get In "}<span class="gradient-text">{"Touch"}</span></h2>
                <p class="muted">
                    {"Have a project in mind or just want to say hello? My inbox is always open."}
                </p>
            </RevealBlock>

            <div class="contact-grid">
                { for CONTACT_METHODS.iter().enumerate().map(|(index, method)| html! {
                    <RevealBlock
                        revealed={in_view}
                        delay_ms={stagger_delay_ms(200, 100, index)}
                        class="contact-cell"
                    >
                        <a
                            class={classes!("contact-card", method.kind.accent_class())}
                            href={method.href}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <span class="contact-icon" aria-hidden="true">{method.kind.icon()}</span>
                            <span class="contact-title">{method.title}</span>
                            <span class="muted">{method.value}</span>
                        </a>
                    </RevealBlock>
                }) }
            </div>

            <RevealBlock revealed={in_view} delay_ms={600} class="contact-resume">
                <a class="button" href={RESUME_PATH} download="">
                    {"Download Resume"}
                </a>
                <ExternalLink href={RESUME_PATH} label="View online" />
            </RevealBlock>

            <footer class="site-footer muted">
                <p>{format!("© {OWNER_NAME}. Built with Rust, Yew and WebAssembly.")}</p>
            </footer>
        </section>
    }
}
