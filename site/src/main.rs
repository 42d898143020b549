// SM Supports site shell: nav, contact section, footer.
// Build with `trunk serve` from this directory.

mod sections;

use contact_section::components::ContactSection;
use contact_section::styles::CONTACT_CSS;
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    // tracing events from contact-section arrive here through the `log` bridge
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting contact site");
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{SITE_CSS}{CONTACT_CSS}</style>
        <Nav />
        <main>
            <ContactSection />
        </main>
        <Footer />
    }
}
