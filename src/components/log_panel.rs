//! Log Panel Component
//!
//! Collapsible footer listing the records held by the rolling logger.

use leptos::prelude::*;

/// Buffered log lines, oldest first; empty if no logger is installed
fn buffered_lines() -> Vec<String> {
    rolling_logger::logger()
        .map(|logger| logger.recent())
        .unwrap_or_default()
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let toggle = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let now_open = !open.get_untracked();
        if now_open {
            // Snapshot on open; the buffer itself is not reactive
            set_lines.set(buffered_lines());
        }
        set_open.set(now_open);
    };

    view! {
        <footer class="log-panel container">
            <a href="#" class="log-toggle grey-text" on:click=toggle>
                {move || if open.get() { "Hide log" } else { "Show log" }}
            </a>
            <Show when=move || open.get()>
                <pre class="log-lines">
                    {move || lines.get().join("\n")}
                </pre>
            </Show>
        </footer>
    }
}
