use leptos::prelude::*;

use crate::content::Stat;

#[component]
pub fn StatGrid(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mt-16">
            {stats
                .iter()
                .map(|stat| {
                    view! {
                        <div class="text-center p-6 rounded-xl bg-card border border-border">
                            <div class="text-3xl font-bold text-primary mb-2">{stat.value.as_str()}</div>
                            <div class="text-sm text-muted-foreground">{stat.label.as_str()}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
