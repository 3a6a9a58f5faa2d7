//! Dropdown for choosing an event contract.

#[cfg(test)]
#[path = "event_selector_test.rs"]
mod event_selector_test;

use contracts::Address;
use contracts::units::short_address;
use leptos::prelude::*;

use crate::state::ui::UiState;

/// Option text for an event address, e.g. `0x1234...abcd`.
pub fn option_label(address: &Address) -> String {
    short_address(address, 6, 4)
}

/// Whether the option for `option` should be marked selected. `None` marks
/// the placeholder.
pub fn is_selected(selected: Option<Address>, option: Option<&Address>) -> bool {
    selected.as_ref() == option
}

/// Event picker bound to `UiState::selected`.
#[component]
pub fn EventSelector(
    #[prop(into)] contracts: Signal<Vec<Address>>,
    #[prop(default = "Select Event")] label: &'static str,
    #[prop(default = "Choose an event...")] placeholder: &'static str,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Selection is driven per option; the options mount after the select's
    // own properties are applied.
    view! {
        <label class="event-selector">
            <span class="event-selector__label">{label}</span>
            <select
                class="event-selector__select"
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    ui.update(|u| u.select_contract(&raw));
                }
            >
                <option value="" prop:selected=move || is_selected(ui.get().selected, None)>
                    {placeholder}
                </option>
                {move || {
                    contracts
                        .get()
                        .into_iter()
                        .map(|addr| {
                            view! {
                                <option
                                    value=addr.to_string()
                                    prop:selected=move || is_selected(ui.get().selected, Some(&addr))
                                >
                                    {option_label(&addr)}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}
