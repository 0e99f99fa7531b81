//! Inline SVG icons (stroke style, 24x24 viewBox)

use leptos::prelude::*;

#[component]
fn Icon(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn House(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M3 10.5 12 3l9 7.5" />
            <path d="M5 9.5V21h14V9.5" />
        </Icon>
    }
}

#[component]
pub fn Menu(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M4 6h16" />
            <path d="M4 12h16" />
            <path d="M4 18h16" />
        </Icon>
    }
}

#[component]
pub fn Close(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M6 6l12 12" />
            <path d="M18 6 6 18" />
        </Icon>
    }
}

#[component]
pub fn User(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <circle cx="12" cy="8" r="4" />
            <path d="M4 21c0-4 4-6 8-6s8 2 8 6" />
        </Icon>
    }
}

#[component]
pub fn Copy(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <rect x="9" y="9" width="12" height="12" rx="2" />
            <path d="M5 15V5a2 2 0 0 1 2-2h10" />
        </Icon>
    }
}

#[component]
pub fn Check(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M5 12l5 5L20 7" />
        </Icon>
    }
}
