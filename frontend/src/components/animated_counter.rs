use log::warn;
use yew::prelude::*;

use crate::motion::counter::{format_thousands, CountUp};
use crate::motion::frame::FrameLoop;
use crate::motion::use_in_view;

/// Counts from zero up to `target` once the element behind `node` first
/// enters the viewport shrunk by `root_margin`.
#[hook]
pub fn use_count_up(node: NodeRef, root_margin: &'static str, target: u64) -> u64 {
    let visible = use_in_view(node, root_margin);
    let count = use_state(|| 0u64);

    {
        let count = count.clone();
        use_effect_with_deps(
            move |&(visible, target): &(bool, u64)| {
                let frames = if visible {
                    let counter = CountUp::new(target);
                    let setter = count.setter();
                    let mut elapsed = 0.0;
                    let started = FrameLoop::start(move |dt| {
                        elapsed += dt;
                        setter.set(counter.value_at(elapsed));
                        !counter.is_done(elapsed)
                    });
                    match started {
                        Ok(frames) => Some(frames),
                        Err(err) => {
                            warn!("count-up skipped: {}", err);
                            count.set(target);
                            None
                        }
                    }
                } else {
                    None
                };
                move || drop(frames)
            },
            (visible, target),
        );
    }

    *count
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: u64,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let count = use_count_up(node.clone(), "0px", props.target);

    html! {
        <span ref={node} class="lq-counter">{ format_thousands(count) }</span>
    }
}
