use leptos::prelude::*;
use super::BRAND;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-links">
                <a href="mailto:contact@smsupports.com" class="footer-link">"Email"</a>
                <a href="https://wa.me/+8801301360818" target="_blank" rel="noopener noreferrer" class="footer-link">"WhatsApp"</a>
                <a href="#contact" class="footer-link">"Contact"</a>
            </div>
            <p class="footer-copyright">{format!("(c)2025 {BRAND}. Dhaka, Bangladesh.")}</p>
        </footer>
    }
}
