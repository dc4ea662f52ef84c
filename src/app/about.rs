use leptos::prelude::*;

use crate::content::AboutContent;

#[component]
pub fn About(about: &'static AboutContent) -> impl IntoView {
    view! {
        <div class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4">
                        "About " <span class="text-primary">"Me"</span>
                    </h2>
                    <div class="w-20 h-1 bg-primary mx-auto rounded-full"></div>
                </div>
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class="space-y-6">
                        {about
                            .paragraphs
                            .iter()
                            .map(|p| {
                                view! {
                                    <p class="text-base text-muted-foreground leading-relaxed">
                                        {p.as_str()}
                                    </p>
                                }
                            })
                            .collect_view()}
                        <div class="flex flex-wrap gap-2">
                            {about
                                .featured
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-3 py-1 text-sm rounded-md bg-secondary text-secondary-foreground">
                                            {tech.as_str()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="bg-card p-4 rounded-md border-l-4 border-primary">
                            <p class="text-sm text-primary mb-2 font-medium">
                                {about.current_role.title.as_str()}
                            </p>
                            <p class="text-sm">{about.current_role.description.as_str()}</p>
                        </div>
                    </div>
                    <div class="grid sm:grid-cols-2 gap-6">
                        {about
                            .highlights
                            .iter()
                            .map(|h| {
                                view! {
                                    <div class="p-6 rounded-xl bg-card border border-border hover:border-primary/40 transition-colors">
                                        <h3 class="font-semibold mb-2">{h.title.as_str()}</h3>
                                        <p class="text-sm text-muted-foreground">{h.description.as_str()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
