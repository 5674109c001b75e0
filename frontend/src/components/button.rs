use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "lq-btn--primary",
            ButtonVariant::Secondary => "lq-btn--secondary",
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "lq-btn--sm",
            ButtonSize::Md => "lq-btn--md",
            ButtonSize::Lg => "lq-btn--lg",
        }
    }
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, pulse: bool) -> Classes {
    classes!(
        "lq-btn",
        variant.class(),
        size.class(),
        pulse.then_some("lq-btn--pulse")
    )
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// Soft glow breathing around the button.
    #[prop_or_default]
    pub pulse: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Renders a link instead of a button.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!(
        button_classes(props.variant, props.size, props.pulse),
        props.class.clone()
    );
    let shine = (props.variant == ButtonVariant::Primary)
        .then(|| html! { <span class="lq-btn__shine"></span> });

    match &props.href {
        Some(href) => html! {
            <a href={href.clone()} {class} aria-label={props.aria_label.clone()}>
                { for props.children.iter() }
                { for shine }
            </a>
        },
        None => {
            let onclick = props.onclick.clone();
            html! {
                <button {class} {onclick} aria-label={props.aria_label.clone()}>
                    { for props.children.iter() }
                    { for shine }
                </button>
            }
        }
    }
}

pub const CSS: &str = r#"
.lq-btn {
    position: relative;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    font-weight: 600;
    border-radius: 9999px;
    border: none;
    cursor: pointer;
    text-decoration: none;
    transition: transform 0.2s cubic-bezier(0.34, 1.56, 0.64, 1), box-shadow 0.3s ease-out, background 0.3s ease-out, color 0.3s ease-out;
}
.lq-btn:hover { transform: scale(1.05); }
.lq-btn:active { transform: scale(0.98); }
.lq-btn:focus-visible { outline: 2px solid #8B5CF6; outline-offset: 2px; }
.lq-btn--primary {
    background: linear-gradient(90deg, #4F46E5, #7C3AED);
    color: white;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}
.lq-btn--primary:hover { box-shadow: 0 20px 25px -5px rgba(168, 85, 247, 0.25); }
.lq-btn--secondary {
    background: white;
    color: #4F46E5;
    border: 2px solid #4F46E5;
}
.lq-btn--secondary:hover { background: #4F46E5; color: white; }
.lq-btn--sm { padding: 0.5rem 1rem; font-size: 0.875rem; }
.lq-btn--md { padding: 0.75rem 1.5rem; font-size: 1rem; }
.lq-btn--lg { padding: 1rem 2rem; font-size: 1.125rem; }
.lq-btn__shine {
    position: absolute;
    inset: 0;
    border-radius: 9999px;
    background: white;
    opacity: 0;
    transition: opacity 0.3s;
}
.lq-btn__shine:hover { opacity: 0.1; }
@keyframes lq-button-glow {
    0%, 100% { box-shadow: 0 0 20px rgba(79, 70, 229, 0.3); }
    50% { box-shadow: 0 0 40px rgba(79, 70, 229, 0.5); }
}
.lq-btn--pulse { animation: lq-button-glow 2s cubic-bezier(0.4, 0, 0.2, 1) infinite; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_button_is_primary_medium() {
        let classes = button_classes(ButtonVariant::default(), ButtonSize::default(), false);
        assert_eq!(classes.to_string(), "lq-btn lq-btn--primary lq-btn--md");
    }

    #[test]
    fn pulse_adds_glow() {
        let classes = button_classes(ButtonVariant::Secondary, ButtonSize::Lg, true);
        assert!(classes.contains("lq-btn--pulse"));
        assert!(classes.contains("lq-btn--secondary"));
        assert!(classes.contains("lq-btn--lg"));
    }

    #[test]
    fn every_class_has_a_rule() {
        for class in [
            "lq-btn--primary",
            "lq-btn--secondary",
            "lq-btn--sm",
            "lq-btn--md",
            "lq-btn--lg",
            "lq-btn--pulse",
        ] {
            assert!(CSS.contains(&format!(".{} ", class)), "{}", class);
        }
    }
}
