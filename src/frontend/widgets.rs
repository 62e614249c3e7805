use yew::prelude::*;

use crate::motion::{delay_style, EnterFrom};

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_else(link_class)]
    pub class: Classes,
}

fn link_class() -> Classes {
    classes!("link")
}

#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={props.class.clone()}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            if let Some(icon) = props.icon.clone() {
                <span class="link-icon" aria-hidden="true">{icon}</span>
            }
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealBlockProps {
    pub revealed: bool,
    #[prop_or(EnterFrom::Below)]
    pub from: EnterFrom,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(RevealBlock)]
pub fn reveal_block(props: &RevealBlockProps) -> Html {
    html! {
        <div
            class={classes!(
                "reveal",
                props.from.class(),
                props.revealed.then_some("is-revealed"),
                props.class.clone()
            )}
            style={delay_style(props.delay_ms)}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeListProps {
    pub items: &'static [&'static str],
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(BadgeList)]
pub fn badge_list(props: &BadgeListProps) -> Html {
    html! {
        <ul class={classes!("badge-list", props.class.clone())}>
            { for props.items.iter().map(|item| html! { <li class="badge" key={*item}>{*item}</li> }) }
        </ul>
    }
}
