use leptos::prelude::*;
use super::BRAND;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_| set_menu_open.set(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">{BRAND}</a>
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>
                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    <a href="/#services" class="nav-link" on:click=close_menu>"Services"</a>
                    <a href="/#projects" class="nav-link" on:click=close_menu>"Projects"</a>
                    // Jumps to the ContactSection anchor
                    <a href="#contact" class="nav-link active" on:click=close_menu>"Contact"</a>
                </div>
            </div>
        </nav>
    }
}
