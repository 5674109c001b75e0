use std::f64::consts::PI;

use yew::prelude::*;

use crate::color::{shade_or_base, with_alpha};
use crate::config::WIDGET_VIEW_MARGIN;
use crate::motion::counter::format_thousands;
use crate::motion::use_in_view;

use super::animated_counter::use_count_up;

pub const DEFAULT_PROGRESS_COLOR: &str = "#4F46E5";
pub const MILESTONES: [u8; 3] = [25, 50, 75];

/// Filled share of the bar in percent, capped at 100.
pub fn percentage(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

pub fn fill_gradient(color: &str) -> String {
    format!(
        "linear-gradient(90deg, {} 0%, {} 100%)",
        color,
        shade_or_base(color, 30)
    )
}

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub value: u64,
    #[prop_or(100)]
    pub max: u64,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or(true)]
    pub show_value: bool,
    #[prop_or(AttrValue::Static(DEFAULT_PROGRESS_COLOR))]
    pub color: AttrValue,
    #[prop_or(true)]
    pub animated: bool,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), WIDGET_VIEW_MARGIN);

    let width = if visible {
        percentage(props.value as f64, props.max as f64)
    } else {
        0.0
    };
    let transition = if props.animated {
        "width 1500ms ease-out 200ms"
    } else {
        "none"
    };
    let fill_style = format!(
        "width: {}%; background: {}; transition: {};",
        width,
        fill_gradient(&props.color),
        transition
    );

    html! {
        <div ref={node} class="lq-progress">
            if props.label.is_some() || props.show_value {
                <div class="lq-progress__header">
                    if let Some(label) = &props.label {
                        <span class="lq-progress__label">{ label.clone() }</span>
                    }
                    if props.show_value {
                        <span class="lq-progress__value" style={format!("color: {};", props.color)}>
                            { format!("{} / {}", format_thousands(props.value), format_thousands(props.max)) }
                        </span>
                    }
                </div>
            }
            <div class="lq-progress__track">
                <div class="lq-progress__fill" style={fill_style}>
                    <div class="lq-progress__shimmer"></div>
                </div>
                { for MILESTONES.iter().map(|m| html! {
                    <div key={*m} class="lq-progress__milestone" style={format!("left: {}%;", m)}></div>
                }) }
            </div>
        </div>
    }
}

/// Radius and circumference of a ring drawn with a stroke of
/// `stroke_width` inside a `size` square.
pub fn ring_geometry(size: f64, stroke_width: f64) -> (f64, f64) {
    let radius = ((size - stroke_width) / 2.0).max(0.0);
    (radius, radius * 2.0 * PI)
}

/// Dash offset leaving `value / max` of the ring stroked.
pub fn dash_offset(circumference: f64, value: f64, max: f64) -> f64 {
    circumference * (1.0 - percentage(value, max) / 100.0)
}

#[derive(Properties, PartialEq)]
pub struct CircularProgressProps {
    pub value: u64,
    #[prop_or(100)]
    pub max: u64,
    #[prop_or(120)]
    pub size: u32,
    #[prop_or(8)]
    pub stroke_width: u32,
    #[prop_or(AttrValue::Static(DEFAULT_PROGRESS_COLOR))]
    pub color: AttrValue,
    #[prop_or(true)]
    pub show_value: bool,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(CircularProgress)]
pub fn circular_progress(props: &CircularProgressProps) -> Html {
    let node = use_node_ref();
    let shown = use_count_up(node.clone(), WIDGET_VIEW_MARGIN, props.value);

    let size = props.size as f64;
    let (radius, circumference) = ring_geometry(size, props.stroke_width as f64);
    let offset = dash_offset(circumference, shown as f64, props.max as f64);
    let center = size / 2.0;

    html! {
        <div class="lq-ring">
            <div class="lq-ring__box" style={format!("width: {}px; height: {}px;", props.size, props.size)}>
                <svg ref={node} width={props.size.to_string()} height={props.size.to_string()} class="lq-ring__svg">
                    <circle
                        cx={center.to_string()}
                        cy={center.to_string()}
                        r={radius.to_string()}
                        fill="none"
                        stroke="#E5E7EB"
                        stroke-width={props.stroke_width.to_string()}
                    />
                    <circle
                        cx={center.to_string()}
                        cy={center.to_string()}
                        r={radius.to_string()}
                        fill="none"
                        stroke={props.color.clone()}
                        stroke-width={props.stroke_width.to_string()}
                        stroke-linecap="round"
                        stroke-dasharray={circumference.to_string()}
                        stroke-dashoffset={offset.to_string()}
                        style={format!("filter: drop-shadow(0 0 6px {});", with_alpha(&props.color, "66"))}
                    />
                </svg>
                if props.show_value {
                    <div class="lq-ring__value">
                        <span style={format!("color: {};", props.color)}>
                            { format!("{}%", percentage(shown as f64, props.max as f64).round()) }
                        </span>
                    </div>
                }
            </div>
            if let Some(label) = &props.label {
                <span class="lq-ring__label">{ label.clone() }</span>
            }
        </div>
    }
}

pub const CSS: &str = r#"
.lq-progress { width: 100%; }
.lq-progress__header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 0.5rem;
    font-size: 0.875rem;
}
.lq-progress__label { font-family: var(--font-nunito); font-weight: 600; color: #374151; }
.lq-progress__value { font-weight: 700; }
.lq-progress__track {
    position: relative;
    width: 100%;
    overflow: hidden;
    height: 0.75rem;
    border-radius: 9999px;
    background: #E5E7EB;
}
.lq-progress__fill { position: relative; height: 100%; overflow: hidden; border-radius: 9999px; }
.lq-progress__shimmer {
    position: absolute;
    inset: 0;
    opacity: 0.3;
    background: linear-gradient(90deg, transparent 0%, rgba(255, 255, 255, 0.5) 50%, transparent 100%);
    animation: lq-shimmer 2s infinite linear;
}
@keyframes lq-shimmer {
    from { transform: translateX(-100%); }
    to { transform: translateX(100%); }
}
.lq-progress__milestone {
    position: absolute;
    top: 0;
    width: 2px;
    height: 100%;
    background: rgba(255, 255, 255, 0.3);
}
.lq-ring { display: flex; flex-direction: column; align-items: center; gap: 0.5rem; }
.lq-ring__box { position: relative; }
.lq-ring__svg { transform: rotate(-90deg); }
.lq-ring__value {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    font-family: var(--font-nunito);
    font-size: 1.5rem;
    font-weight: 700;
}
.lq-ring__label { font-family: var(--font-nunito); font-size: 0.875rem; font-weight: 600; color: #4B5563; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_capped() {
        assert_eq!(percentage(50.0, 200.0), 25.0);
        assert_eq!(percentage(9750.0, 10500.0).round(), 93.0);
        assert_eq!(percentage(300.0, 100.0), 100.0);
        assert_eq!(percentage(5.0, 0.0), 0.0);
    }

    #[test]
    fn fill_lightens_toward_the_end() {
        assert_eq!(
            fill_gradient(DEFAULT_PROGRESS_COLOR),
            "linear-gradient(90deg, #4F46E5 0%, #6d64ff 100%)"
        );
    }

    #[test]
    fn ring_offsets() {
        let (radius, circumference) = ring_geometry(120.0, 8.0);
        assert_eq!(radius, 56.0);
        assert!((circumference - 351.858).abs() < 1e-3);

        assert_eq!(dash_offset(circumference, 0.0, 100.0), circumference);
        assert_eq!(dash_offset(circumference, 100.0, 100.0), 0.0);
        assert!((dash_offset(circumference, 25.0, 100.0) - circumference * 0.75).abs() < 1e-9);
    }
}
