use leptos::prelude::*;

use crate::content::{Certification, CertificationStatus, EducationEntry};

#[component]
pub fn Education(
    education: &'static [EducationEntry],
    certifications: &'static [Certification],
) -> impl IntoView {
    view! {
        <div class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4">
                        "Education & " <span class="text-primary">"Certifications"</span>
                    </h2>
                    <div class="w-20 h-1 bg-primary mx-auto rounded-full"></div>
                </div>
                <div class="space-y-8 mb-16">
                    {education.iter().map(|entry| view! { <EntryCard entry /> }).collect_view()}
                </div>
                <h3 class="text-2xl font-bold text-center mb-8">"Certifications"</h3>
                <div class="grid md:grid-cols-2 gap-6">
                    {certifications
                        .iter()
                        .map(|cert| {
                            let badge = match cert.status {
                                CertificationStatus::Completed => {
                                    "bg-green-500/10 text-green-400 border-green-500/30"
                                }
                                CertificationStatus::InProgress => {
                                    "bg-yellow-500/10 text-yellow-400 border-yellow-500/30"
                                }
                            };
                            view! {
                                <div class="flex items-start justify-between gap-4 p-6 rounded-xl bg-card border border-border">
                                    <div>
                                        <h4 class="font-semibold">{cert.name.as_str()}</h4>
                                        <p class="text-sm text-muted-foreground">{cert.issuer.as_str()}</p>
                                    </div>
                                    <span class=format!(
                                        "shrink-0 px-2 py-0.5 text-xs rounded-full border {badge}",
                                    )>{cert.status.label()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn EntryCard(entry: &'static EducationEntry) -> impl IntoView {
    view! {
        <article class="p-8 rounded-xl bg-card border border-border">
            <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-4 mb-4">
                <div>
                    <span class="px-2 py-0.5 text-xs rounded-full bg-primary/10 text-primary border border-primary/30">
                        {entry.kind.label()}
                    </span>
                    <h4 class="text-xl font-semibold mt-2">{entry.degree.as_str()}</h4>
                    <p class="text-muted-foreground">
                        {entry.institution.as_str()} " · " {entry.location.as_str()}
                    </p>
                </div>
                <div class="md:text-right">
                    <p class="text-sm font-medium text-primary">{entry.duration.as_str()}</p>
                    {entry
                        .grade
                        .as_deref()
                        .map(|grade| view! { <p class="text-sm text-muted-foreground">{grade}</p> })}
                </div>
            </div>
            <p class="text-sm leading-relaxed mb-4">{entry.description.as_str()}</p>
            <ul class="text-sm space-y-1 list-disc list-inside text-muted-foreground">
                {entry.highlights.iter().map(|h| view! { <li>{h.as_str()}</li> }).collect_view()}
            </ul>
        </article>
    }
}
