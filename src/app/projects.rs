use leptos::prelude::*;

use super::filter::filter_bar;
use super::stats::StatGrid;
use crate::content::{Project, ProjectCategory, ProjectStatus, Stat};
use crate::gallery::{categories, filter_items, CategoryFilter, SingleExpansion};

fn status_badge(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "bg-green-500/10 text-green-400 border-green-500/30",
        ProjectStatus::Ongoing => "bg-blue-500/10 text-blue-400 border-blue-500/30",
        ProjectStatus::Archived => "bg-muted/20 text-muted-foreground border-border",
    }
}

#[component]
pub fn Projects(projects: &'static [Project], stats: &'static [Stat]) -> impl IntoView {
    let selected = RwSignal::new(CategoryFilter::<ProjectCategory>::default());
    let expanded = RwSignal::new(SingleExpansion::default());

    let visible = move || {
        filter_items(projects, selected.get())
            .into_iter()
            .map(|project| view! { <ProjectCard project expanded /> })
            .collect_view()
    };

    view! {
        <div class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4">
                        "Featured " <span class="text-primary">"Projects"</span>
                    </h2>
                    <div class="w-20 h-1 bg-primary mx-auto rounded-full"></div>
                </div>
                {filter_bar(categories(projects), ProjectCategory::label, selected)}
                <div class="grid lg:grid-cols-2 gap-8">{visible}</div>
                <StatGrid stats />
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, expanded: RwSignal<SingleExpansion>) -> impl IntoView {
    let id = project.id.as_str();
    let is_expanded = Memo::new(move |_| expanded.with(|e| e.is_expanded(id)));

    view! {
        <article class="p-6 rounded-xl bg-card border border-border hover:border-primary/40 transition-colors">
            <div class="flex items-start justify-between gap-4 mb-3">
                <div>
                    <h3 class="text-xl font-semibold">{project.title.as_str()}</h3>
                    <p class="text-sm text-muted-foreground">
                        {project.year.as_str()} " · " {project.category.label()}
                    </p>
                </div>
                <span class=format!(
                    "shrink-0 px-2 py-0.5 text-xs rounded-full border capitalize {}",
                    status_badge(project.status),
                )>{project.status.label()}</span>
            </div>
            <p class="text-sm leading-relaxed mb-4">{project.description.as_str()}</p>
            <Show when=move || is_expanded.get()>
                <div class="mb-4 space-y-4 animate-fade-in">
                    <p class="text-sm leading-relaxed text-muted-foreground">
                        {project.long_description.as_str()}
                    </p>
                    <div>
                        <h4 class="text-sm font-semibold mb-2">"Key Features"</h4>
                        <ul class="text-sm space-y-1 list-disc list-inside text-muted-foreground">
                            {project
                                .features
                                .iter()
                                .map(|f| view! { <li>{f.as_str()}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </Show>
            <div class="p-3 mb-4 rounded-md bg-primary/5 border-l-4 border-primary">
                <p class="text-sm">
                    <span class="font-medium text-primary">"Impact: "</span>
                    {project.impact.as_str()}
                </p>
            </div>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
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
            <div class="flex flex-wrap items-center gap-4">
                <button
                    class="text-sm font-medium text-primary hover:underline"
                    aria-expanded=move || is_expanded.get().to_string()
                    on:click=move |_| expanded.update(|e| e.toggle(id))
                >
                    {move || if is_expanded.get() { "Show Less" } else { "Learn More" }}
                </button>
                {project
                    .demo_url
                    .as_deref()
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-sm text-muted-foreground hover:text-primary"
                            >
                                "Live Demo"
                            </a>
                        }
                    })}
                {project
                    .source_url
                    .as_deref()
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-sm text-muted-foreground hover:text-primary"
                            >
                                "Source"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
