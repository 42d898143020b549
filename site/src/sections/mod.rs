// Site chrome around the contact section

/// Brand name shown in the nav and footer
pub const BRAND: &str = "SM Supports";

mod footer;
mod nav;

pub use footer::Footer;
pub use nav::Nav;

/// Page-level styles for the nav and footer
pub const SITE_CSS: &str = r#"
body { margin: 0; font-family: Inter, system-ui, sans-serif; }
.nav { position: sticky; top: 0; z-index: 50; backdrop-filter: blur(12px); background: rgba(255, 255, 255, 0.8); border-bottom: 1px solid rgba(15, 23, 42, 0.06); }
.nav-inner { display: flex; align-items: center; justify-content: space-between; max-width: 80rem; margin: 0 auto; padding: 1rem 1.5rem; }
.nav-brand { font-weight: 800; color: #0f172a; text-decoration: none; }
.nav-links { display: flex; gap: 1.5rem; }
.nav-link { color: #64748b; text-decoration: none; }
.nav-link:hover, .nav-link.active { color: #6d28d9; }
.nav-toggle { display: none; border: 0; background: none; font: inherit; cursor: pointer; }
@media (max-width: 640px) {
    .nav-toggle { display: block; }
    .nav-links { display: none; }
    .nav-links.open { display: flex; flex-direction: column; position: absolute; top: 100%; left: 0; right: 0; padding: 1rem 1.5rem; background: #ffffff; }
}
.footer { padding: 2rem 1.5rem; text-align: center; color: #64748b; font-size: 0.875rem; }
.footer-links { display: flex; justify-content: center; gap: 1rem; margin-bottom: 0.75rem; }
.footer-link { color: inherit; }
"#;
