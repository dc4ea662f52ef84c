use leptos::prelude::*;

use crate::gallery::CategoryFilter;

const ACTIVE: &str = "px-4 py-2 rounded-lg text-sm font-medium transition-all duration-200 bg-primary text-primary-foreground shadow-glow";
const INACTIVE: &str = "px-4 py-2 rounded-lg text-sm font-medium transition-all duration-200 bg-secondary/50 text-muted-foreground hover:text-foreground hover:bg-secondary";

/// "All" followed by one button per category.
pub fn filter_bar<C>(
    categories: Vec<C>,
    label: fn(&C) -> &'static str,
    selected: RwSignal<CategoryFilter<C>>,
) -> impl IntoView
where
    C: Copy + Eq + Send + Sync + 'static,
{
    let all = view! {
        <button
            class=move || if selected.with(CategoryFilter::is_all) { ACTIVE } else { INACTIVE }
            on:click=move |_| selected.set(CategoryFilter::All)
        >
            "All"
        </button>
    };
    let rest = categories
        .into_iter()
        .map(|category| {
            view! {
                <button
                    class=move || {
                        if selected.with(|f| f.is_selected(category)) { ACTIVE } else { INACTIVE }
                    }
                    on:click=move |_| selected.set(CategoryFilter::Only(category))
                >
                    {label(&category)}
                </button>
            }
        })
        .collect_view();

    view! { <div class="flex flex-wrap justify-center gap-3 mb-12">{all} {rest}</div> }
}
