use contracts::domain::separacion_ecd::summary::circumference;
use leptos::prelude::*;

const RING_RADIUS: f64 = 45.0;

/// Stroke offset that leaves `percentage` of the ring drawn
pub fn ring_offset(percentage: u32) -> f64 {
    let pct = percentage.min(100) as f64;
    circumference(RING_RADIUS) * (1.0 - pct / 100.0)
}

/// Ring showing the overall completed percentage
#[component]
pub fn ProgressCard(
    #[prop(into)]
    percentage: Signal<u32>,
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Completado".to_string());

    view! {
        <div class="progress-card">
            <span class="progress-card__label">{label}</span>
            <svg class="progress-card__ring" viewBox="0 0 100 100">
                <circle cx="50" cy="50" r=RING_RADIUS fill="none" stroke="#E2E8F0" stroke-width="3" />
                <circle
                    cx="50"
                    cy="50"
                    r=RING_RADIUS
                    fill="none"
                    stroke="#C1232B"
                    stroke-width="3"
                    stroke-dasharray=circumference(RING_RADIUS)
                    stroke-dashoffset=move || ring_offset(percentage.get())
                    stroke-linecap="round"
                    transform="rotate(-90 50 50)"
                />
                <text x="50" y="55" text-anchor="middle" font-size="16" font-weight="bold" fill="#0F172A">
                    {move || format!("{}%", percentage.get())}
                </text>
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_offset_bounds() {
        assert!((ring_offset(0) - circumference(RING_RADIUS)).abs() < 1e-9);
        assert!(ring_offset(100).abs() < 1e-9);
        assert!(ring_offset(150).abs() < 1e-9);
    }
}
