use leptos::prelude::*;
use setup_blog_core::Step;

use super::code_block::CodeBlock;

/// What / why / command / expected output for one step.
#[component]
pub fn StepCard(step: Step) -> impl IntoView {
    let Step {
        label,
        title,
        what,
        why,
        command,
        expect,
        note,
    } = step;

    let field = |name: &'static str, value: Option<String>| {
        value.map(|value| {
            view! {
                <p class="mt-2 text-[var(--color-text)]">
                    <span class="font-semibold text-violet-300">{name}</span>
                    " "
                    {value}
                </p>
            }
        })
    };

    view! {
        <div class="rounded-[14px] bg-[var(--card-bg)] border-l-[5px] border-[var(--color-secondary)] p-6 my-6">
            <h4 class="text-lg font-semibold text-white">
                <span class="text-[var(--color-secondary)] mr-2">{label}</span>
                {title}
            </h4>
            {field("What:", what)}
            {field("Why:", why)}
            {command.map(|code| view! { <CodeBlock code=code /> })}
            {field("Expect:", expect)}
            {note
                .map(|note| {
                    view! {
                        <p class="mt-2 italic text-[var(--color-text-muted)]">
                            <span class="not-italic font-semibold text-[var(--color-warning)]">"Note: "</span>
                            {note}
                        </p>
                    }
                })}
        </div>
    }
}
