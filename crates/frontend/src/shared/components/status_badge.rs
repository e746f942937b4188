use super::status_icon::status_icon_name;
use crate::shared::icons::icon;
use contracts::enums::ProcessStatus;
use leptos::prelude::*;
use thaw::*;

fn badge_color(status: ProcessStatus) -> BadgeColor {
    match status {
        ProcessStatus::Success => BadgeColor::Success,
        ProcessStatus::Pending => BadgeColor::Warning,
        ProcessStatus::InProgress => BadgeColor::Informative,
        ProcessStatus::Error => BadgeColor::Danger,
    }
}

/// Labelled status pill
#[component]
pub fn StatusBadge(status: ProcessStatus) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(status)>
            <span class="status-badge" title=status.tooltip()>
                {icon(status_icon_name(status))}
                <span>{status.display_name()}</span>
            </span>
        </Badge>
    }
}
