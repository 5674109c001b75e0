use chrono::{Datelike, Local};
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::content::{FOOTER_COLUMNS, SOCIAL_LINKS};

/// Loose shape check for the newsletter field: one `@` with a non-empty
/// local part and a dotted domain.
pub fn is_plausible_email(input: &str) -> bool {
    let input = input.trim();
    match input.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !input.contains(char::is_whitespace)
                && domain.split_once('.').map_or(false, |(host, tld)| {
                    !host.is_empty() && !tld.is_empty() && !tld.ends_with('.')
                })
        }
        None => false,
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Newsletter {
    Editing,
    Invalid,
    Subscribed,
}

/// Outcome of pressing "Subscribe". The address itself stays out of the log.
fn submit_newsletter(email: &str) -> Newsletter {
    if is_plausible_email(email) {
        info!("Newsletter signup received");
        Newsletter::Subscribed
    } else {
        Newsletter::Invalid
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let status = use_state(|| Newsletter::Editing);

    let onchange = {
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            status.set(Newsletter::Editing);
        })
    };
    let onsubmit = {
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            status.set(submit_newsletter(&email));
        })
    };
    let year = Local::now().year();

    html! {
        <footer class="lq-footer">
            <style>{ CSS }</style>
            <div class="lq-footer__inner">
                <div class="lq-footer__grid">
                    <div class="lq-footer__brand">
                        <a href="#" class="lq-footer__logo">
                            <div class="lq-logo__mark lq-footer__mark">{"🦉"}</div>
                            <span>{"LearnQuest"}</span>
                        </a>
                        <p class="lq-footer__about">
                            {"Making learning fun for kids in grades 4-6 through gamified education. Join the adventure!"}
                        </p>
                        <div class="lq-footer__socials">
                            { for SOCIAL_LINKS.iter().map(|(icon, link)| html! {
                                <a key={link.label} href={link.href} class="lq-social" aria-label={link.label}>
                                    { *icon }
                                </a>
                            }) }
                        </div>
                    </div>

                    { for FOOTER_COLUMNS.iter().map(|column| html! {
                        <div key={column.title}>
                            <h4 class="lq-footer__heading">{ column.title }</h4>
                            <ul class="lq-footer__links">
                                { for column.links.iter().map(|link| html! {
                                    <li key={link.label}><a href={link.href}>{ link.label }</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="lq-newsletter">
                    <div>
                        <h4 class="lq-footer__heading">{"Subscribe to our newsletter"}</h4>
                        <p class="lq-footer__muted">{"Get learning tips and updates delivered to your inbox."}</p>
                    </div>
                    if *status == Newsletter::Subscribed {
                        <p class="lq-newsletter__done">{"🎉 Thanks! Check your inbox soon."}</p>
                    } else {
                        <form class="lq-newsletter__form" {onsubmit}>
                            <input
                                type="email"
                                placeholder="Enter your email"
                                class={classes!("lq-newsletter__input", (*status == Newsletter::Invalid).then_some("lq-newsletter__input--invalid"))}
                                value={(*email).clone()}
                                {onchange}
                            />
                            <button type="submit" class="lq-newsletter__button">{"Subscribe"}</button>
                        </form>
                    }
                </div>

                <div class="lq-footer__bottom">
                    <p class="lq-footer__muted">{ format!("© {} LearnQuest. All rights reserved.", year) }</p>
                    <div class="lq-footer__legal">
                        <a href="#">{"Privacy"}</a>
                        <a href="#">{"Terms"}</a>
                        <a href="#">{"Cookies"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

const CSS: &str = r#"
.lq-footer { background: #0F172A; color: white; }
.lq-footer__inner { max-width: 72rem; margin: 0 auto; padding: 4rem 1rem; }
.lq-footer__grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; margin-bottom: 3rem; }
@media (min-width: 768px) { .lq-footer__grid { grid-template-columns: repeat(4, 1fr); } }
@media (min-width: 1024px) { .lq-footer__grid { grid-template-columns: repeat(5, 1fr); } }
.lq-footer__brand { grid-column: span 2; margin-bottom: 2rem; }
@media (min-width: 768px) { .lq-footer__brand { grid-column: span 4; } }
@media (min-width: 1024px) { .lq-footer__brand { grid-column: span 1; margin-bottom: 0; } }
.lq-footer__logo {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
    color: white;
    text-decoration: none;
    font-family: var(--font-nunito);
    font-size: 1.5rem;
    font-weight: 700;
    transition: transform 0.2s;
}
.lq-footer__logo:hover { transform: scale(1.02); }
.lq-footer__mark { width: 3rem; height: 3rem; font-size: 1.5rem; }
.lq-footer__about { font-size: 0.875rem; line-height: 1.625; color: #9CA3AF; margin: 0 0 1.5rem; }
.lq-footer__socials { display: flex; gap: 0.75rem; }
.lq-social {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 0.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.125rem;
    text-decoration: none;
    background: rgba(255, 255, 255, 0.1);
    transition: background 0.2s, transform 0.2s;
}
.lq-social:hover { background: #9333EA; transform: translateY(-3px) scale(1.1); }
.lq-footer__heading { font-family: var(--font-nunito); font-weight: 700; color: white; margin: 0 0 1rem; }
.lq-footer__links { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 0.75rem; }
.lq-footer__links a, .lq-footer__legal a { font-size: 0.875rem; color: #9CA3AF; text-decoration: none; transition: color 0.2s; }
.lq-footer__links a:hover, .lq-footer__legal a:hover { color: white; }
.lq-footer__muted { font-size: 0.875rem; color: #6B7280; margin: 0; }
.lq-newsletter {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
    padding: 2rem 0;
    margin-bottom: 2rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
}
@media (min-width: 768px) { .lq-newsletter { flex-direction: row; } }
.lq-newsletter__form { display: flex; gap: 0.75rem; width: 100%; }
@media (min-width: 768px) { .lq-newsletter__form { width: auto; } }
.lq-newsletter__input {
    flex: 1;
    padding: 0.75rem 1rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.1);
    color: white;
    outline: none;
    transition: border-color 0.2s;
}
@media (min-width: 768px) { .lq-newsletter__input { width: 16rem; } }
.lq-newsletter__input::placeholder { color: #6B7280; }
.lq-newsletter__input:focus { border-color: #A855F7; }
.lq-newsletter__input--invalid, .lq-newsletter__input--invalid:focus { border-color: #F87171; }
.lq-newsletter__button {
    padding: 0.75rem 1.5rem;
    border: none;
    border-radius: 0.75rem;
    color: white;
    font-weight: 600;
    white-space: nowrap;
    cursor: pointer;
    background: linear-gradient(90deg, #A855F7, #4F46E5);
    transition: transform 0.2s;
}
.lq-newsletter__button:hover { transform: scale(1.05); }
.lq-newsletter__done { color: #86EFAC; font-weight: 600; margin: 0; }
.lq-footer__bottom {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding-top: 2rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
}
@media (min-width: 768px) { .lq-footer__bottom { flex-direction: row; } }
.lq-footer__legal { display: flex; align-items: center; gap: 1.5rem; }
"#;

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use log::{Log, Metadata, Record};

    use super::*;

    static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct Capture;

    impl Log for Capture {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut records) = RECORDS.lock() {
                records.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_plausible_email("parent@example.com"));
        assert!(is_plausible_email("  kid.learner+quest@mail.school.org "));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "parent",
            "@example.com",
            "parent@",
            "parent@example",
            "a@b@c.com",
            "par ent@example.com",
            "parent@.com",
            "parent@example.",
        ] {
            assert!(!is_plausible_email(bad), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn signup_is_logged_without_the_address() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Trace);

        assert_eq!(submit_newsletter("parent@example.com"), Newsletter::Subscribed);
        assert_eq!(submit_newsletter("parent@"), Newsletter::Invalid);

        let records = RECORDS.lock().unwrap();
        assert!(records.iter().any(|r| r == "Newsletter signup received"));
        assert!(records.iter().all(|r| !r.contains("parent@")));
    }
}
