use leptos::prelude::*;

use super::ScrollContext;
use crate::nav::{self, Section};

#[component]
pub fn Navigation(brand: &'static str) -> impl IntoView {
    let ctx = expect_context::<ScrollContext>();
    let (menu_open, set_menu_open) = signal(false);
    let scrolled = Memo::new(move |_| nav::is_scrolled(ctx.scroll_y.get()));

    let nav_click = move |section: Section| {
        ctx.scroll_to(section);
        set_menu_open.set(false);
    };

    let item_class = move |section: Section| {
        if ctx.active.get() == section {
            "text-primary bg-primary/10"
        } else {
            "text-muted-foreground hover:text-foreground hover:bg-secondary/50"
        }
    };

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-glass/80 backdrop-blur-lg border-b border-glass-border shadow-glass"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <button
                        class="flex-shrink-0 text-xl font-bold text-primary"
                        on:click=move |_| nav_click(Section::Home)
                    >
                        {brand}
                    </button>
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-4">
                            {Section::ALL
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <button
                                            class=move || {
                                                format!(
                                                    "relative flex items-center px-3 py-2 rounded-lg text-sm font-medium transition-all duration-200 {}",
                                                    item_class(section),
                                                )
                                            }
                                            aria-current=move || {
                                                (ctx.active.get() == section).then_some("true")
                                            }
                                            on:click=move |_| nav_click(section)
                                        >
                                            {section.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="md:hidden">
                        <button
                            class="p-2 text-foreground hover:text-primary"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-card/95 backdrop-blur-lg border-t border-border">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class=move || {
                                            format!(
                                                "w-full flex items-center px-3 py-2 rounded-lg text-base font-medium transition-all duration-200 {}",
                                                item_class(section),
                                            )
                                        }
                                        on:click=move |_| nav_click(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
