use leptos::prelude::*;

use super::ScrollContext;
use crate::content::{HeroContent, Link};
use crate::nav::Section;

#[component]
pub fn Hero(owner: &'static str, hero: &'static HeroContent) -> impl IntoView {
    let ctx = expect_context::<ScrollContext>();

    view! {
        <div class="min-h-screen flex items-center justify-center px-4 sm:px-6 lg:px-8 pt-16">
            <div class="max-w-4xl mx-auto text-center animate-fade-in">
                <h1 class="text-4xl sm:text-6xl font-bold mb-6">
                    "Hi, I'm " <span class="text-primary">{owner}</span>
                </h1>
                <p class="text-lg sm:text-xl text-muted-foreground mb-6 leading-relaxed">
                    {hero.tagline.as_str()}
                </p>
                <div class="flex flex-wrap justify-center gap-2 mb-8">
                    {hero
                        .specialties
                        .iter()
                        .map(|s| {
                            view! {
                                <span class="px-3 py-1 text-sm rounded-full bg-primary/10 text-primary border border-primary/20">
                                    {s.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-10">
                    <button
                        class="px-6 py-3 rounded-lg font-medium bg-primary text-primary-foreground hover:opacity-90 transition-opacity"
                        on:click=move |_| ctx.scroll_to(Section::Projects)
                    >
                        "View My Work"
                    </button>
                    <button
                        class="px-6 py-3 rounded-lg font-medium border border-border hover:bg-secondary/50 transition-colors"
                        on:click=move |_| ctx.scroll_to(Section::Contact)
                    >
                        "Get In Touch"
                    </button>
                </div>
                <div class="flex justify-center gap-6">
                    {hero.socials.iter().map(social_link).collect_view()}
                </div>
            </div>
        </div>
    }
}

fn social_link(link: &'static Link) -> impl IntoView {
    let external = link.is_external();
    view! {
        <a
            href=link.href.as_str()
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class="text-muted-foreground hover:text-primary transition-colors"
            aria-label=link.label.as_str()
        >
            {link.label.as_str()}
        </a>
    }
}
