use crate::shared::icons::icon;
use contracts::domain::separacion_ecd::ConfirmationSummary;
use contracts::enums::ActionMode;
use leptos::prelude::*;
use thaw::*;

/// Confirmation dialog for a bulk action.
///
/// Lists the accounts that will be processed and, separately, the ones
/// excluded with the reason for each. Confirm stays disabled when nothing is
/// eligible or while the request is in flight.
#[component]
pub fn ConfirmationModal(
    open: RwSignal<bool>,
    #[prop(into)]
    summary: Signal<Option<ConfirmationSummary>>,
    #[prop(into)]
    loading: Signal<bool>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let mode = move || summary.with(|s| s.as_ref().map(|s| s.mode).unwrap_or(ActionMode::Execute));
    let can_confirm = move || summary.with(|s| s.as_ref().is_some_and(|s| s.can_confirm()));
    let confirm_disabled = Signal::derive(move || !can_confirm() || loading.get());

    let close = move |_| {
        if !loading.get_untracked() {
            open.set(false);
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || mode().modal_title()}</DialogTitle>
                    <DialogContent>
                        <div class="confirmation">
                            <p class="confirmation__message">{move || mode().modal_message()}</p>

                            {move || summary.get().map(|s| {
                                let total = s.total;
                                let valid = s.valid_count();
                                let excluded = s.excluded_count();
                                let invalid = s.invalid.clone();
                                view! {
                                    <div class="confirmation__total">
                                        <span>"Total de registros"</span>
                                        <strong>{total}</strong>
                                    </div>
                                    <div class="confirmation__breakdown">
                                        <div class="confirmation__row confirmation__row--valid">
                                            {icon("check-circle")}
                                            <span>{format!("{} válida{}", valid, if valid == 1 { "" } else { "s" })}</span>
                                        </div>
                                        {(excluded > 0).then(|| view! {
                                            <div class="confirmation__row confirmation__row--excluded">
                                                {icon("alert-circle")}
                                                <span>{format!("{} excluida{}", excluded, if excluded == 1 { "" } else { "s" })}</span>
                                            </div>
                                            <ul class="confirmation__reasons">
                                                {invalid.into_iter().map(|r| view! {
                                                    <li>
                                                        <strong>{r.account_code}</strong>
                                                        ": "
                                                        {r.reason.unwrap_or_default()}
                                                    </li>
                                                }).collect_view()}
                                            </ul>
                                        })}
                                    </div>
                                }
                            })}

                            {move || (mode() == ActionMode::Delete).then(|| view! {
                                <div class="confirmation__warning">
                                    {icon("alert-circle")}
                                    <span>"Esta acción no se puede deshacer."</span>
                                </div>
                            })}
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Subtle on_click=close>
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=confirm_disabled
                            on_click=move |_| on_confirm.run(())
                        >
                            {move || loading.get().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
                            {move || summary.with(|s| s.as_ref().map(|s| s.confirm_label()).unwrap_or_default())}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
