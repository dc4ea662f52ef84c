use leptos::prelude::*;

use super::filter::filter_bar;
use super::stats::StatGrid;
use crate::content::{SkillCategory, SkillEntry, Stat};
use crate::gallery::{categories, filter_items, CategoryFilter};

#[component]
pub fn Skills(skills: &'static [SkillEntry], stats: &'static [Stat]) -> impl IntoView {
    let selected = RwSignal::new(CategoryFilter::<SkillCategory>::default());

    let visible = move || {
        filter_items(skills, selected.get())
            .into_iter()
            .map(|skill| view! { <SkillCard skill /> })
            .collect_view()
    };

    view! {
        <div class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4">
                        "Technical " <span class="text-primary">"Skills"</span>
                    </h2>
                    <div class="w-20 h-1 bg-primary mx-auto rounded-full"></div>
                </div>
                {filter_bar(categories(skills), SkillCategory::label, selected)}
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">{visible}</div>
                <StatGrid stats />
            </div>
        </div>
    }
}

#[component]
fn SkillCard(skill: &'static SkillEntry) -> impl IntoView {
    view! {
        <div class="p-6 rounded-xl bg-card border border-border hover:border-primary/40 transition-colors">
            <div class="flex items-center justify-between mb-1">
                <h3 class="font-semibold">{skill.name.as_str()}</h3>
                <span class="text-sm text-primary font-medium">{format!("{}%", skill.level)}</span>
            </div>
            <p class="text-xs text-muted-foreground mb-3">{skill.category.label()}</p>
            <div class="w-full h-2 rounded-full bg-secondary mb-4">
                <div
                    class="h-2 rounded-full bg-primary transition-all duration-700"
                    style=format!("width: {}%", skill.level)
                ></div>
            </div>
            <div class="flex flex-wrap gap-2">
                {skill
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-2 py-0.5 text-xs rounded-md bg-secondary text-secondary-foreground">
                                {tech.as_str()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
