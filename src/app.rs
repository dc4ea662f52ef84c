mod about;
mod contact;
mod education;
mod filter;
mod hero;
mod navigation;
mod projects;
mod skills;
mod stats;
mod timeline;

use chrono::{DateTime, Datelike};
use leptos::{either::Either, ev, html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_window};

use crate::content::{portfolio, Portfolio};
use crate::nav::{self, Section, SectionBounds};

use about::About;
use contact::Contact;
use education::Education;
use hero::Hero;
use navigation::Navigation;
use projects::Projects;
use skills::Skills;
use timeline::Timeline;

const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let base = portfolio()
        .map(|p| p.site.base_path.as_str())
        .unwrap_or("/");
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href=format!("{base}favicon.ico") />
                <link rel="stylesheet" id="leptos" href=format!("{base}pkg/portfolio-site.css") />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Page-level scroll state shared with every section. The page composer owns
/// the only window scroll listener; children read from here.
#[derive(Clone, Copy)]
pub struct ScrollContext {
    pub active: ReadSignal<Section>,
    pub scroll_y: ReadSignal<f64>,
    nodes: [NodeRef<html::Section>; Section::ALL.len()],
}

impl ScrollContext {
    fn node(&self, section: Section) -> NodeRef<html::Section> {
        self.nodes[section as usize]
    }

    fn bounds(&self) -> Vec<SectionBounds> {
        Section::ALL
            .into_iter()
            .filter_map(|section| {
                let el = self.node(section).get_untracked()?;
                Some(SectionBounds {
                    section,
                    top: el.offset_top() as f64,
                    height: el.offset_height() as f64,
                })
            })
            .collect()
    }

    pub fn scroll_to(&self, section: Section) {
        let Some(el) = self.node(section).get_untracked() else {
            log::warn!("section #{} is not mounted", section.id());
            return;
        };
        window().scroll_to_with_x_and_y(0.0, nav::scroll_target(el.offset_top() as f64));
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match portfolio() {
        Ok(content) => Either::Left(view! { <Page content /> }),
        Err(e) => {
            log::error!("Couldn't load portfolio content: {e}");
            Either::Right(view! {
                <div class="max-w-2xl mx-auto my-16 p-4 rounded-md border border-red-500/40 text-red-400">
                    <h1 class="font-bold text-xl mb-2">"Content unavailable"</h1>
                    <pre class="whitespace-pre-wrap">{e.to_string()}</pre>
                </div>
            })
        }
    }
}

#[component]
fn Page(content: &'static Portfolio) -> impl IntoView {
    let (active, set_active) = signal(Section::default());
    let (scroll_y, set_scroll_y) = signal(0.0_f64);
    let ctx = ScrollContext {
        active,
        scroll_y,
        nodes: Section::ALL.map(|_| NodeRef::new()),
    };
    provide_context(ctx);

    // Removed again when the page's reactive owner is disposed
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        set_scroll_y.set(y);
        if let Some(section) = nav::section_at(y, &ctx.bounds()) {
            if section != active.get_untracked() {
                set_active.set(section);
            }
        }
    });

    // Deep links like `#projects` highlight their section before the first scroll event
    Effect::new(move |_| {
        let hash = window().location().hash().unwrap_or_default();
        if let Some(section) = Section::from_id(hash.trim_start_matches('#')) {
            set_active.set(section);
        }
    });

    let owner = content.site.owner.as_str();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background text-foreground">
            <Navigation brand=content.site.brand.as_str() />
            <main class="relative">
                <section id=Section::Home.id() node_ref=ctx.node(Section::Home) class="relative">
                    <Hero owner hero=&content.hero />
                </section>
                <section id=Section::About.id() node_ref=ctx.node(Section::About) class="relative">
                    <About about=&content.about />
                </section>
                <section
                    id=Section::Timeline.id()
                    node_ref=ctx.node(Section::Timeline)
                    class="relative bg-gradient-subtle"
                >
                    <Timeline events=&content.timeline />
                </section>
                <section id=Section::Skills.id() node_ref=ctx.node(Section::Skills) class="relative">
                    <Skills skills=&content.skills stats=&content.skill_stats />
                </section>
                <section
                    id=Section::Projects.id()
                    node_ref=ctx.node(Section::Projects)
                    class="relative bg-gradient-subtle"
                >
                    <Projects projects=&content.projects stats=&content.project_stats />
                </section>
                <section
                    id=Section::Education.id()
                    node_ref=ctx.node(Section::Education)
                    class="relative"
                >
                    <Education education=&content.education certifications=&content.certifications />
                </section>
                <section
                    id=Section::Contact.id()
                    node_ref=ctx.node(Section::Contact)
                    class="relative bg-gradient-subtle"
                >
                    <Contact site=&content.site contact=&content.contact />
                </section>
            </main>
            <Footer owner />
        </div>
    }
}

#[component]
fn Footer(owner: &'static str) -> impl IntoView {
    let year = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|d| d.year().to_string())
        .unwrap_or_default();
    view! {
        <footer class="py-12 px-4 sm:px-6 lg:px-8 bg-card border-t border-border">
            <div class="max-w-7xl mx-auto text-center">
                <p class="text-muted-foreground">{format!("© {year} {owner}. All rights reserved.")}</p>
                <p class="text-sm text-muted-foreground mt-2">"Built with Rust, Leptos, and Tailwind CSS"</p>
            </div>
        </footer>
    }
}
