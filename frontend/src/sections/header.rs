use yew::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::config::HeaderConfig;
use crate::content::NAV_LINKS;
use crate::motion::variants::HEADER_DROP;
use crate::motion::{entrance_class, use_scroll_y};

pub fn is_scrolled(scroll_y: f64, config: &HeaderConfig) -> bool {
    scroll_y > config.scrolled_threshold_px
}

#[function_component(Header)]
pub fn header() -> Html {
    let config = HeaderConfig::default();
    let scroll_y = use_scroll_y();
    let menu_open = use_state(|| false);

    let scrolled = is_scrolled(scroll_y, &config);
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let open = *menu_open;

    html! {
        <>
            <style>{ CSS }</style>
            <header class={classes!(
                "lq-header",
                scrolled.then_some("lq-header--scrolled"),
                entrance_class(&HEADER_DROP, 0, true)
            )}>
                <div class="lq-header__bar">
                    <a href="#" class="lq-logo">
                        <div class="lq-logo__mark">{"🦉"}</div>
                        <span class="lq-logo__name">{"LearnQuest"}</span>
                    </a>

                    <nav class="lq-header__nav">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.label} href={link.href} class="lq-header__link">{ link.label }</a>
                        }) }
                    </nav>

                    <div class="lq-header__actions">
                        <a href="#" class="lq-header__link">{"Log In"}</a>
                        <Button variant={ButtonVariant::Primary} size={ButtonSize::Sm}>{"Start Free"}</Button>
                    </div>

                    <button
                        class={classes!("lq-burger", open.then_some("lq-burger--open"))}
                        onclick={toggle_menu}
                        aria-label="Toggle menu"
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>

            <div class={classes!("lq-menu", open.then_some("lq-menu--open"))}>
                <div class="lq-menu__backdrop" onclick={close_menu.clone()}></div>
                <div class="lq-menu__panel">
                    <nav class="lq-menu__nav">
                        { for NAV_LINKS.iter().enumerate().map(|(i, link)| html! {
                            <a
                                key={link.label}
                                href={link.href}
                                class="lq-menu__link"
                                style={format!("transition-delay: {}ms;", 100 + i * 50)}
                                onclick={close_menu.clone()}
                            >
                                { link.label }
                            </a>
                        }) }
                    </nav>
                    <div class="lq-menu__actions">
                        <Button class="lq-full" size={ButtonSize::Md}>{"Start Free Trial"}</Button>
                        <Button class="lq-full" variant={ButtonVariant::Secondary} size={ButtonSize::Md}>{"Log In"}</Button>
                    </div>
                </div>
            </div>
        </>
    }
}

const CSS: &str = r#"
.lq-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: transparent;
    transition: background 0.3s, box-shadow 0.3s;
}
.lq-header--scrolled {
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(24px);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}
.lq-header__bar {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1rem;
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
@media (min-width: 640px) { .lq-header__bar { height: 5rem; } }
.lq-logo { display: flex; align-items: center; gap: 0.5rem; text-decoration: none; transition: transform 0.2s; }
.lq-logo:hover { transform: scale(1.05); }
.lq-logo__mark {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.25rem;
    background: linear-gradient(135deg, #A855F7, #4F46E5);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}
.lq-logo__name { font-family: var(--font-nunito); font-size: 1.25rem; font-weight: 700; color: #1F2937; }
.lq-header__nav, .lq-header__actions { display: none; align-items: center; gap: 2rem; }
.lq-header__link {
    font-size: 0.875rem;
    font-weight: 500;
    color: #374151;
    text-decoration: none;
    transition: color 0.2s, transform 0.2s;
}
.lq-header--scrolled .lq-header__link { color: #4B5563; }
.lq-header__link:hover { color: #9333EA; transform: translateY(-2px); }
.lq-burger {
    width: 2.5rem;
    height: 2.5rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 0.375rem;
    border: none;
    background: none;
    cursor: pointer;
}
.lq-burger span { width: 1.5rem; height: 2px; border-radius: 9999px; background: #1F2937; transition: transform 0.3s, opacity 0.3s; }
.lq-burger--open span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
.lq-burger--open span:nth-child(2) { opacity: 0; }
.lq-burger--open span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }
@media (min-width: 768px) {
    .lq-header__nav, .lq-header__actions { display: flex; }
    .lq-burger, .lq-menu { display: none; }
}
.lq-menu { position: fixed; inset: 0; z-index: 40; opacity: 0; pointer-events: none; transition: opacity 0.3s; }
.lq-menu--open { opacity: 1; pointer-events: auto; }
.lq-menu__backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.5); backdrop-filter: blur(4px); }
.lq-menu__panel {
    position: absolute;
    top: 0;
    right: 0;
    width: 18rem;
    height: 100%;
    padding: 5rem 1.5rem 1.5rem;
    box-sizing: border-box;
    background: white;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    transform: translateX(100%);
    transition: transform 0.5s cubic-bezier(0.34, 1.2, 0.64, 1);
}
.lq-menu--open .lq-menu__panel { transform: translateX(0); }
.lq-menu__nav { display: flex; flex-direction: column; gap: 1rem; margin-bottom: 2rem; }
.lq-menu__link {
    font-size: 1.125rem;
    font-weight: 500;
    color: #374151;
    text-decoration: none;
    padding: 0.5rem 0;
    border-bottom: 1px solid #F3F4F6;
    opacity: 0;
    transform: translateX(20px);
    transition: opacity 0.3s, transform 0.3s;
}
.lq-menu--open .lq-menu__link { opacity: 1; transform: translateX(0); }
.lq-menu__actions { display: flex; flex-direction: column; gap: 0.75rem; }
.lq-full { width: 100%; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_past_threshold() {
        let config = HeaderConfig::default();
        assert!(!is_scrolled(0.0, &config));
        assert!(!is_scrolled(50.0, &config));
        assert!(is_scrolled(50.5, &config));
    }
}
