use leptos::prelude::*;
use setup_blog_core::Tone;

#[derive(Clone, Copy, Default)]
pub enum BadgeColor {
    #[default]
    Violet,
    Green,
    Orange,
}

impl BadgeColor {
    fn class(self) -> &'static str {
        match self {
            BadgeColor::Violet => "px-3 py-1 text-xs font-medium rounded-full border bg-violet-900/30 text-violet-200 border-violet-700",
            BadgeColor::Green => "px-3 py-1 text-xs font-medium rounded-full border bg-green-900/30 text-green-300 border-green-800",
            BadgeColor::Orange => "px-3 py-1 text-xs font-medium rounded-full border bg-orange-900/30 text-orange-300 border-orange-800",
        }
    }
}

impl From<Tone> for BadgeColor {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Neutral => BadgeColor::Violet,
            Tone::Success => BadgeColor::Green,
            Tone::Warning => BadgeColor::Orange,
        }
    }
}

#[component]
pub fn Badge(children: Children, #[prop(optional)] color: BadgeColor) -> impl IntoView {
    view! { <span class=color.class()>{children()}</span> }
}
