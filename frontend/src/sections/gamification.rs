use yew::prelude::*;

use crate::components::{AnimatedCounter, Badge, BadgeSize, CircularProgress, ProgressBar, XpBadge};
use crate::config::SECTION_VIEW_MARGIN;
use crate::content::{LeaderboardEntry, BADGES, LEADERBOARD, PLAYER, STARS};
use crate::motion::counter::format_thousands;
use crate::motion::variants::{LoopAnimation, FADE_IN_LEFT, FADE_IN_UP, PULSE, STAGGER, TWINKLE};
use crate::motion::{entrance_class, loop_class, use_in_view};

use super::SectionHeading;

const CHALLENGE_DONE: u64 = 3;
const CHALLENGE_TOTAL: u64 = 5;

/// Colors of the rank disc for the podium places.
fn rank_class(rank: u32) -> &'static str {
    match rank {
        1 => "lq-rank--gold",
        2 => "lq-rank--silver",
        3 => "lq-rank--bronze",
        _ => "lq-rank--plain",
    }
}

fn stat_box(icon: &'static str, value: Html, label: &'static str) -> Html {
    html! {
        <div class="lq-statbox">
            <div class="lq-statbox__icon">{ icon }</div>
            <div class="lq-statbox__value">{ value }</div>
            <div class="lq-statbox__label">{ label }</div>
        </div>
    }
}

fn leaderboard_row(entry: &LeaderboardEntry, index: usize, visible: bool) -> Html {
    let delay = 800 + index as u32 * 100;
    html! {
        <div class={classes!(
            "lq-leader",
            entry.is_user.then_some("lq-leader--you"),
            entrance_class(&FADE_IN_LEFT, delay, visible)
        )}>
            <div class={classes!("lq-rank", rank_class(entry.rank))}>{ entry.rank }</div>
            <div class="lq-leader__avatar">{ entry.avatar }</div>
            <div class="lq-leader__name">{ entry.name }</div>
            <div class="lq-leader__xp">{ format!("{} XP", format_thousands(entry.xp)) }</div>
        </div>
    }
}

#[function_component(Gamification)]
pub fn gamification() -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), SECTION_VIEW_MARGIN);
    let panel = |i| entrance_class(&FADE_IN_UP, STAGGER.delay_for(i), visible);

    html! {
        <section ref={node} id="rewards" class="lq-section lq-rewards">
            <style>{ CSS }</style>
            <div class="lq-rewards__sky">
                { for STARS.iter().enumerate().map(|(i, star)| {
                    let twinkle = LoopAnimation { duration_ms: star.duration_ms, ..TWINKLE };
                    html! {
                        <div
                            key={i}
                            class={classes!("lq-star", loop_class(&twinkle, star.delay_ms))}
                            style={format!("left: {}%; top: {}%; font-size: {}px;", star.left, star.top, star.size_px)}
                        >
                            { star.icon }
                        </div>
                    }
                }) }
            </div>

            <div class="lq-container">
                <SectionHeading
                    eyebrow="🎮 Gamification"
                    eyebrow_class="lq-pill--gold"
                    title="Earn, Collect & Compete!"
                    subtitle="Level up your learning journey with XP points, achievements, and leaderboards!"
                    {visible}
                    dark={true}
                />

                <div class="lq-rewards__grid">
                    <div class="lq-rewards__column">
                        <div class={classes!("lq-glass", panel(0))}>
                            <div class="lq-glass__head">
                                <h3 class="lq-glass__title">{"Your Progress"}</h3>
                                <XpBadge xp={PLAYER.xp} level={PLAYER.level} />
                            </div>
                            <div class="lq-rewards__bar">
                                <ProgressBar
                                    value={PLAYER.xp}
                                    max={PLAYER.next_level_xp}
                                    label="XP to next level"
                                    color="#FBBF24"
                                />
                            </div>
                            <div class="lq-statboxes">
                                { stat_box("⚡", html! { <AnimatedCounter target={PLAYER.xp} /> }, "Total XP") }
                                { stat_box("🔥", html! { { format!("{} days", PLAYER.streak_days) } }, "Streak") }
                                { stat_box("📜", html! { { PLAYER.quests } }, "Quests") }
                            </div>
                        </div>

                        <div class={classes!("lq-challenge", panel(1))}>
                            <div class="lq-challenge__glow"></div>
                            <div class="lq-challenge__body">
                                <div class="lq-challenge__text">
                                    <div class="lq-challenge__head">
                                        <span>{"⏰"}</span>
                                        <h3 class="lq-glass__title">{"Daily Challenge"}</h3>
                                    </div>
                                    <p>{ format!("Complete {} Math problems to earn bonus XP!", CHALLENGE_TOTAL) }</p>
                                    <div class="lq-challenge__reward">
                                        <span class="lq-challenge__trophy">{"🏆"}</span>
                                        <span>{"+500 XP"}</span>
                                        <span class={classes!("lq-challenge__done", loop_class(&PULSE, 0))}>
                                            { format!("{}/{} Done", CHALLENGE_DONE, CHALLENGE_TOTAL) }
                                        </span>
                                    </div>
                                </div>
                                <CircularProgress
                                    value={CHALLENGE_DONE}
                                    max={CHALLENGE_TOTAL}
                                    size={96}
                                    color="#FFFFFF"
                                />
                            </div>
                        </div>
                    </div>

                    <div class="lq-rewards__column">
                        <div class={classes!("lq-glass", panel(2))}>
                            <h3 class="lq-glass__title lq-glass__title--spaced">{"🏅 Your Badges"}</h3>
                            <div class="lq-badges">
                                { for BADGES.iter().enumerate().map(|(i, badge)| html! {
                                    <Badge
                                        key={badge.title}
                                        icon={badge.icon}
                                        title={badge.title}
                                        color={badge.color}
                                        unlocked={badge.unlocked}
                                        size={BadgeSize::Sm}
                                        revealed={visible}
                                        delay_ms={500 + i as u32 * 100}
                                    />
                                }) }
                            </div>
                        </div>

                        <div class={classes!("lq-glass", panel(3))}>
                            <div class="lq-glass__head">
                                <h3 class="lq-glass__title">{"🏆 Leaderboard"}</h3>
                                <span class="lq-glass__note">{"This Week"}</span>
                            </div>
                            <div class="lq-leaders">
                                { for LEADERBOARD.iter().enumerate().map(|(i, entry)| html! {
                                    <div key={entry.rank}>{ leaderboard_row(entry, i, visible) }</div>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

const CSS: &str = r#"
.lq-rewards { background: linear-gradient(180deg, #1E1B4B 0%, #312E81 50%, #3730A3 100%); }
.lq-rewards__sky { position: absolute; inset: 0; overflow: hidden; pointer-events: none; }
.lq-star { position: absolute; color: rgba(255, 255, 255, 0.2); }
.lq-rewards__grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
@media (min-width: 1024px) { .lq-rewards__grid { grid-template-columns: repeat(2, 1fr); } }
.lq-rewards__column { display: flex; flex-direction: column; gap: 2rem; }
.lq-glass {
    background: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(24px);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.5rem;
    padding: 1.5rem;
}
.lq-glass__head { display: flex; align-items: center; justify-content: space-between; gap: 1rem; margin-bottom: 1.5rem; }
.lq-glass__title { font-family: var(--font-nunito); font-size: 1.25rem; font-weight: 700; color: white; margin: 0; }
.lq-glass__title--spaced { margin-bottom: 1.5rem; }
.lq-glass__note { font-size: 0.875rem; color: #D8B4FE; }
.lq-rewards__bar { margin-bottom: 1.5rem; }
.lq-rewards__bar .lq-progress__label, .lq-rewards__bar .lq-progress__value { color: #E9D5FF; }
.lq-rewards__bar .lq-progress__track { background: rgba(255, 255, 255, 0.1); }
.lq-statboxes { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.lq-statbox { text-align: center; }
.lq-statbox__icon { font-size: 1.5rem; margin-bottom: 0.25rem; }
.lq-statbox__value { font-family: var(--font-nunito); font-size: 1.25rem; font-weight: 700; color: white; }
.lq-statbox__label { font-size: 0.75rem; color: #D8B4FE; }
.lq-challenge {
    position: relative;
    overflow: hidden;
    border-radius: 1.5rem;
    padding: 1.5rem;
    background: linear-gradient(135deg, #F97316, #DB2777);
}
.lq-challenge__glow {
    position: absolute;
    top: 0;
    right: 0;
    width: 8rem;
    height: 8rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.1);
    filter: blur(40px);
    transform: translate(50%, -50%);
}
.lq-challenge__body { position: relative; z-index: 1; display: flex; align-items: center; gap: 1.5rem; }
.lq-challenge__text { flex: 1; }
.lq-challenge__head { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1rem; font-size: 1.5rem; }
.lq-challenge p { color: rgba(255, 255, 255, 0.9); margin: 0 0 1rem; }
.lq-challenge__reward { display: flex; flex-wrap: wrap; align-items: center; gap: 0.75rem; color: white; font-weight: 700; }
.lq-challenge__trophy { font-size: 1.875rem; }
.lq-challenge__done { padding: 0.5rem 1rem; border-radius: 9999px; background: rgba(255, 255, 255, 0.2); font-weight: 600; }
.lq-challenge .lq-ring__svg circle:first-child { stroke: rgba(255, 255, 255, 0.2); }
.lq-challenge .lq-ring__value, .lq-challenge .lq-ring__label { color: white; }
.lq-badges { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.lq-badges .lq-badge__title { color: #E9D5FF; }
.lq-leaders { display: flex; flex-direction: column; gap: 0.75rem; }
.lq-leader { display: flex; align-items: center; gap: 1rem; padding: 0.75rem; border-radius: 0.75rem; background: rgba(255, 255, 255, 0.05); }
.lq-leader--you {
    background: linear-gradient(90deg, rgba(147, 51, 234, 0.5), rgba(79, 70, 229, 0.5));
    border: 1px solid rgba(192, 132, 252, 0.3);
}
.lq-rank {
    width: 2rem;
    height: 2rem;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.875rem;
    font-weight: 700;
}
.lq-rank--gold { background: #FACC15; color: #713F12; }
.lq-rank--silver { background: #D1D5DB; color: #374151; }
.lq-rank--bronze { background: #FB923C; color: #7C2D12; }
.lq-rank--plain { background: rgba(255, 255, 255, 0.1); color: white; }
.lq-leader__avatar { font-size: 1.5rem; }
.lq-leader__name { flex: 1; color: white; font-weight: 600; }
.lq-leader__xp { color: #FACC15; font-weight: 700; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn podium_places_get_their_own_colors() {
        assert_eq!(rank_class(1), "lq-rank--gold");
        assert_eq!(rank_class(2), "lq-rank--silver");
        assert_eq!(rank_class(3), "lq-rank--bronze");
        assert_eq!(rank_class(4), "lq-rank--plain");
        assert_eq!(rank_class(5), "lq-rank--plain");
    }
}
