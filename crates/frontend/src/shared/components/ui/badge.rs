use leptos::prelude::*;

/// Colour family of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Neutral => "badge--neutral",
            Tone::Info => "badge--primary",
            Tone::Success => "badge--success",
            Tone::Warning => "badge--warning",
            Tone::Danger => "badge--error",
        }
    }
}

/// Status badge shown in table cells
#[component]
pub fn Badge(
    #[prop(optional)] tone: Tone,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
        <span class=format!("badge {}", tone.class())>{label}</span>
    }
}
