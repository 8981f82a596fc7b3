//! Category chip bar bound to a `CatalogFilter` signal.

use leptos::prelude::*;

use crate::state::catalog::{CatalogFilter, CategoryFilter};

#[component]
pub fn CategoryChips(chips: Vec<CategoryFilter>, filter: RwSignal<CatalogFilter>) -> impl IntoView {
    view! {
        <div class="chips" role="group" aria-label="Filter by category">
            {chips
                .into_iter()
                .map(|chip| {
                    let selected = move || filter.with(|f| f.category == chip);
                    view! {
                        <button
                            class="chip"
                            class:chip--selected=selected
                            aria-pressed=move || selected().to_string()
                            on:click=move |_| filter.update(|f| f.category = chip)
                        >
                            {chip.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
