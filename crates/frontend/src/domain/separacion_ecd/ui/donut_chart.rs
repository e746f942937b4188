use contracts::domain::separacion_ecd::StatusStats;
use leptos::prelude::*;

/// Status donut; segments follow the chart order starting at 12 o'clock
#[component]
pub fn DonutChart(
    #[prop(into)]
    stats: Signal<StatusStats>,
    radius: f64,
    stroke_width: f64,
    /// Caption under the percentage
    #[prop(optional)]
    caption: Option<&'static str>,
) -> impl IntoView {
    let size = (radius + stroke_width) * 2.0;
    let center = size / 2.0;

    view! {
        <svg
            class="donut-chart"
            width=size
            height=size
            viewBox=format!("0 0 {} {}", size, size)
        >
            <circle
                cx=center
                cy=center
                r=radius
                fill="none"
                stroke="#E2E8F0"
                stroke-width=stroke_width
            />
            {move || {
                stats
                    .get()
                    .donut_segments(radius)
                    .into_iter()
                    .map(|segment| view! {
                        <circle
                            cx=center
                            cy=center
                            r=radius
                            fill="none"
                            stroke=segment.status.color()
                            stroke-width=stroke_width
                            stroke-dasharray=segment.dash_array(radius)
                            stroke-dashoffset={-segment.offset}
                            transform=format!("rotate(-90 {} {})", center, center)
                        >
                            <title>
                                {format!("{}: {}", segment.status.display_name(), segment.count)}
                            </title>
                        </circle>
                    })
                    .collect_view()
            }}
            <text
                x=center
                y=center
                text-anchor="middle"
                dominant-baseline="central"
                class="donut-chart__value"
            >
                {move || format!("{}%", stats.get().completed_pct())}
            </text>
            {caption.map(|caption| view! {
                <text
                    x=center
                    y={center + radius * 0.35}
                    text-anchor="middle"
                    class="donut-chart__caption"
                >
                    {caption}
                </text>
            })}
        </svg>
    }
}
