use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub eyebrow: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class="site-section">
            <div class="section-inner">
                if let Some(eyebrow) = &props.eyebrow {
                    <p class="section-eyebrow">{eyebrow}</p>
                }
                if let Some(title) = &props.title {
                    <h2 class="section-title">{title}</h2>
                }
                if let Some(subtitle) = &props.subtitle {
                    <p class="section-subtitle">{subtitle}</p>
                }
                <div class="section-body">
                    { for props.children.iter() }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatProps {
    pub label: AttrValue,
    pub value: AttrValue,
}

#[function_component(Stat)]
pub fn stat(props: &StatProps) -> Html {
    html! {
        <div class="stat">
            <span class="stat-value">{&props.value}</span>
            <span class="stat-label">{&props.label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillProps {
    pub children: Children,
}

#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
    html! {
        <span class="pill">
            <IconSvg icon={Icon::Sparkles} class="pill-icon" />
            { for props.children.iter() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Option<Icon>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            if let Some(title) = &props.title {
                <div class="card-header">
                    <h3 class="card-title">
                        if let Some(icon) = props.icon {
                            <IconSvg icon={icon} size={20} />
                        }
                        {title}
                    </h3>
                </div>
            }
            <div class="card-content">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
}

#[derive(Properties, PartialEq)]
pub struct BrandButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(BrandButton)]
pub fn brand_button(props: &BrandButtonProps) -> Html {
    let (variant_class, style) = match props.variant {
        ButtonVariant::Solid => (
            "brand-button solid",
            format!("background: {}; color: var(--brand-navy);", config::gold_gradient()),
        ),
        ButtonVariant::Outline => (
            "brand-button outline",
            "border-color: var(--brand-gold); color: var(--brand-navy);".to_string(),
        ),
    };

    html! {
        <button type="button" class={classes!(variant_class, props.class.clone())} style={style} onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </button>
    }
}
