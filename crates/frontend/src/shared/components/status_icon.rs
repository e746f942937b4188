use crate::shared::icons::icon;
use contracts::enums::ProcessStatus;
use leptos::prelude::*;

pub fn status_icon_name(status: ProcessStatus) -> &'static str {
    match status {
        ProcessStatus::Success => "check",
        ProcessStatus::Pending => "clock",
        ProcessStatus::InProgress => "zap",
        ProcessStatus::Error => "x",
    }
}

/// Coloured status glyph with a hover tooltip
#[component]
pub fn StatusIcon(status: ProcessStatus, #[prop(into)] tooltip: String) -> impl IntoView {
    view! {
        <span class=format!("status-icon status-icon--{}", status.code())>
            {icon(status_icon_name(status))}
            <span class="status-icon__tooltip" role="tooltip">{tooltip}</span>
        </span>
    }
}
