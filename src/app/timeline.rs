use leptos::{ev, html, prelude::*, web_sys::HtmlElement};
use leptos_use::use_event_listener;
use wasm_bindgen::JsCast;

use crate::carousel::{visible_tags, Carousel, WheelPager, VISIBLE_TAGS};
use crate::content::{EventKind, TimelineEvent};
use crate::gallery::ExpansionSet;

/// Distance between the left edges of two neighbouring cards, or the card
/// width when there is only one.
fn card_stride(strip: &HtmlElement) -> f64 {
    let Some(first) = strip.first_element_child() else {
        return 0.0;
    };
    let first: HtmlElement = first.unchecked_into();
    match first.next_element_sibling() {
        Some(second) => {
            let second: HtmlElement = second.unchecked_into();
            (second.offset_left() - first.offset_left()) as f64
        }
        None => first.offset_width() as f64,
    }
}

fn kind_badge(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Work => "bg-primary/10 text-primary border-primary/30",
        EventKind::Education => "bg-accent/10 text-accent border-accent/30",
        EventKind::Achievement => "bg-yellow-500/10 text-yellow-400 border-yellow-500/30",
    }
}

#[component]
pub fn Timeline(events: &'static [TimelineEvent]) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(events.len()));
    let pager = StoredValue::new(WheelPager::default());
    let expanded = RwSignal::new(ExpansionSet::default());
    let strip = NodeRef::<html::Div>::new();

    let sync = move |el: &HtmlElement| {
        let max_scroll = (el.scroll_width() - el.client_width()) as f64;
        let mut tracked = carousel.get_untracked();
        tracked.track(el.scroll_left() as f64, card_stride(el), max_scroll);
        if tracked != carousel.get_untracked() {
            carousel.set(tracked);
        }
    };

    let go_to = move |index: usize| {
        let Some(el) = strip.get_untracked() else {
            return;
        };
        let mut next = carousel.get_untracked();
        let index = next.seek(index);
        carousel.set(next);
        el.set_scroll_left(next.offset_of(index, card_stride(&el)).round() as i32);
        // Already resting on the target: no scroll event will follow
        sync(&el);
    };

    let on_scroll = move |_: ev::Event| {
        if let Some(el) = strip.get_untracked() {
            sync(&el);
        }
    };

    // Registered on the element itself so prevent_default is honoured
    let _ = use_event_listener(strip, ev::wheel, move |e| {
        let (dx, dy) = (e.delta_x(), e.delta_y());
        if !WheelPager::captures(dx, dy) {
            return;
        }
        e.prevent_default();
        let Some(direction) = pager.try_update_value(|p| p.push(dx, dy)).flatten() else {
            return;
        };
        let mut next = carousel.get_untracked();
        if next.page(direction) {
            go_to(next.index());
        }
    });

    view! {
        <div class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4">
                        "Career " <span class="text-primary">"Timeline"</span>
                    </h2>
                    <div class="w-20 h-1 bg-primary mx-auto rounded-full"></div>
                </div>
                <div class="flex items-center justify-between mb-6">
                    <button
                        class="p-2 rounded-full border border-border hover:bg-secondary/50 disabled:opacity-40 disabled:cursor-not-allowed"
                        aria-label="Previous event"
                        disabled=move || !carousel.with(Carousel::can_scroll_prev)
                        on:click=move |_| go_to(carousel.get_untracked().index().saturating_sub(1))
                    >
                        "←"
                    </button>
                    <span class="text-sm text-muted-foreground">
                        {move || carousel.with(Carousel::counter)}
                    </span>
                    <button
                        class="p-2 rounded-full border border-border hover:bg-secondary/50 disabled:opacity-40 disabled:cursor-not-allowed"
                        aria-label="Next event"
                        disabled=move || !carousel.with(Carousel::can_scroll_next)
                        on:click=move |_| go_to(carousel.get_untracked().index() + 1)
                    >
                        "→"
                    </button>
                </div>
                <div
                    node_ref=strip
                    class="flex gap-6 overflow-x-auto snap-x snap-mandatory scroll-smooth pb-4 scrollbar-hide"
                    on:scroll=on_scroll
                >
                    {events
                        .iter()
                        .map(|event| view! { <EventCard event expanded /> })
                        .collect_view()}
                </div>
                <div class="flex justify-center gap-2 mt-6">
                    {(0..events.len())
                        .map(|i| {
                            view! {
                                <button
                                    class=move || {
                                        if carousel.with(|c| c.index() == i) {
                                            "w-8 h-2 rounded-full bg-primary transition-all"
                                        } else {
                                            "w-2 h-2 rounded-full bg-muted-foreground/40 hover:bg-muted-foreground transition-all"
                                        }
                                    }
                                    aria-label=format!("Go to event {}", i + 1)
                                    on:click=move |_| go_to(i)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn EventCard(event: &'static TimelineEvent, expanded: RwSignal<ExpansionSet>) -> impl IntoView {
    let id = event.id.as_str();
    let is_expanded = Memo::new(move |_| expanded.with(|set| set.is_expanded(id)));
    let overflows = event.technologies.len() > VISIBLE_TAGS;

    let tags = move || {
        let (shown, hidden) = visible_tags(&event.technologies, is_expanded.get());
        let chips = shown
            .iter()
            .map(|tech| {
                view! {
                    <span class="px-2 py-0.5 text-xs rounded-md bg-secondary text-secondary-foreground">
                        {tech.as_str()}
                    </span>
                }
            })
            .collect_view();
        let toggle_label = overflows.then(|| {
            if is_expanded.get() {
                "Show less".to_string()
            } else {
                format!("+{hidden} more")
            }
        });
        view! {
            {chips}
            {toggle_label
                .map(|label| {
                    view! {
                        <button
                            class="px-2 py-0.5 text-xs rounded-md text-primary hover:underline"
                            on:click=move |_| expanded.update(|set| set.toggle(id))
                        >
                            {label}
                        </button>
                    }
                })}
        }
    };

    view! {
        <article class="snap-start shrink-0 w-80 sm:w-96 p-6 rounded-xl bg-card border border-border hover:border-primary/40 transition-colors">
            <div class="flex items-center justify-between mb-3">
                <span class="text-sm font-medium text-primary">{event.date.as_str()}</span>
                <span class=format!(
                    "px-2 py-0.5 text-xs rounded-full border {}",
                    kind_badge(event.kind),
                )>{event.kind.label()}</span>
            </div>
            <h3 class="text-lg font-semibold">{event.title.as_str()}</h3>
            <p class="text-sm text-muted-foreground mb-3">
                {event.company.as_str()} " · " {event.location.as_str()}
            </p>
            <p class="text-sm leading-relaxed mb-4">{event.description.as_str()}</p>
            <ul class="text-sm space-y-1 mb-4 list-disc list-inside text-muted-foreground">
                {event
                    .achievements
                    .iter()
                    .map(|a| view! { <li>{a.as_str()}</li> })
                    .collect_view()}
            </ul>
            <div class="flex flex-wrap gap-2">{tags}</div>
        </article>
    }
}
