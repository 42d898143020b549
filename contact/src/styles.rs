//! CSS for the contact section.
//!
//! The components only emit semantic class names; this stylesheet gives them
//! layout, the glass-card look, the accent gradients and the keyframes for
//! the floating and pulsing decorations. Responsive breakpoints live here
//! too, so the components never compute them.
//!
//! # Customization
//!
//! ```rust
//! use contact_section::styles::CONTACT_CSS;
//!
//! let overrides = ".contact-section { --brand: #0ea5e9; }";
//! let combined = format!("{}\n{}", CONTACT_CSS, overrides);
//! assert!(combined.contains("--brand"));
//! ```

/// Complete stylesheet for [`crate::components::ContactSection`].
pub const CONTACT_CSS: &str = r#"
.contact-section {
    --brand: #6d28d9;
    --brand-soft: rgba(109, 40, 217, 0.12);
    --brand-faint: rgba(109, 40, 217, 0.05);
    --violet: #9333ea;
    --fg: #0f172a;
    --fg-muted: #64748b;
    --glass: rgba(255, 255, 255, 0.8);
    --glass-soft: rgba(255, 255, 255, 0.6);
    --glass-border: rgba(255, 255, 255, 0.2);
    --radius: 12px;

    position: relative;
    overflow: hidden;
    padding: 4rem 0 9rem;
    color: var(--fg);
    background: linear-gradient(135deg, #ffffff 0%, #ffffff 60%, rgba(241, 245, 249, 0.3) 100%);
}

@media (prefers-color-scheme: dark) {
    .contact-section {
        --fg: #e2e8f0;
        --fg-muted: #94a3b8;
        --glass: rgba(15, 23, 42, 0.8);
        --glass-soft: rgba(15, 23, 42, 0.6);
        background: linear-gradient(135deg, #020617 0%, #020617 60%, rgba(30, 41, 59, 0.3) 100%);
    }
}

.muted { color: var(--fg-muted); }

/* Backdrop ---------------------------------------------------------------- */

.contact-backdrop {
    position: absolute;
    inset: 0;
    pointer-events: none;
    user-select: none;
}

.backdrop-tile { position: absolute; width: 4rem; height: 4rem; }
.tile-face {
    width: 100%;
    height: 100%;
    border-radius: var(--radius);
    border: 1px solid var(--brand-soft);
    background: linear-gradient(135deg, rgba(109, 40, 217, 0.2), var(--brand-faint));
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    backdrop-filter: blur(4px);
}
.tile-top-right { top: 5rem; right: 2.5rem; width: 8rem; height: 8rem; }
.tile-bottom-left { bottom: 8rem; left: 2rem; width: 7rem; height: 7rem; }
.tile-upper-left { top: 33%; left: 25%; width: 5rem; height: 5rem; }
.tile-mid-left { top: 50%; left: 16%; width: 5rem; height: 5rem; }
.tile-lower-right { bottom: 33%; right: 16%; width: 4rem; height: 4rem; }
.tilt-cw .tile-face { transform: rotate(57deg); }
.tilt-ccw .tile-face { transform: rotate(-57deg); }
.tilt-diamond .tile-face { transform: rotate(45deg); }

.backdrop-orb {
    position: absolute;
    border-radius: 9999px;
    filter: blur(64px);
    background: radial-gradient(circle, rgba(109, 40, 217, 0.1), rgba(109, 40, 217, 0.05), transparent);
}
.orb-upper-right { top: 25%; right: 25%; width: 16rem; height: 16rem; }
.orb-lower-left { bottom: 25%; left: 25%; width: 14rem; height: 14rem; }

/* Header ------------------------------------------------------------------ */

.contact-container {
    position: relative;
    z-index: 10;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.contact-header { text-align: center; margin-bottom: 5rem; }

.header-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    border: 1px solid rgba(109, 40, 217, 0.2);
    background: linear-gradient(90deg, var(--brand-soft), rgba(147, 51, 234, 0.1));
    color: var(--brand);
    font-size: 0.875rem;
    font-weight: 500;
}
.header-badge-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: var(--brand); }

.header-title {
    margin: 0 0 1.5rem;
    font-size: clamp(2.25rem, 6vw, 4.5rem);
    font-weight: 900;
    line-height: 0.9;
    letter-spacing: -0.025em;
}
.title-line { display: block; background-clip: text; -webkit-background-clip: text; color: transparent; }
.title-line + .title-line { margin-top: 0.5rem; }
.line-lead { background-image: linear-gradient(90deg, var(--fg), var(--fg-muted)); }
.line-mid { background-image: linear-gradient(90deg, var(--brand), rgba(109, 40, 217, 0.8)); }
.line-tail { background-image: linear-gradient(90deg, rgba(109, 40, 217, 0.8), rgba(109, 40, 217, 0.6)); }

.header-lead {
    max-width: 48rem;
    margin: 0 auto;
    color: var(--fg-muted);
    font-size: clamp(1rem, 2vw, 1.5rem);
    font-weight: 300;
    line-height: 1.6;
}
.sparkle-icon { display: inline-block; margin-left: 0.5rem; color: var(--brand); vertical-align: middle; }

/* Layout ------------------------------------------------------------------ */

.contact-grid { display: grid; gap: 3rem; align-items: start; }
@media (min-width: 1024px) {
    .contact-grid { grid-template-columns: 1fr 1fr; gap: 4rem; }
}

.contact-cards-column { display: flex; flex-direction: column; gap: 1.5rem; }
.contact-cards-grid { display: grid; gap: 1.5rem; }
@media (min-width: 640px) {
    .contact-cards-grid { grid-template-columns: 1fr 1fr; }
}

/* Form card --------------------------------------------------------------- */

.form-card-shell,
.contact-card-shell { position: relative; perspective: 1000px; }

.form-card,
.contact-card,
.availability-card {
    position: relative;
    overflow: hidden;
    border-radius: var(--radius);
    border: 1px solid var(--glass-border);
    backdrop-filter: blur(24px);
    transition: transform 500ms ease, box-shadow 500ms ease;
}

.form-card { background: var(--glass); box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }
.form-card:hover { transform: translateY(-0.5rem); box-shadow: 0 25px 50px -12px rgba(109, 40, 217, 0.2); }

.card-glow {
    position: absolute;
    inset: 0;
    opacity: 0;
    background: linear-gradient(90deg, var(--brand-faint), rgba(147, 51, 234, 0.05));
    transition: opacity 500ms ease;
}
.form-card-shell:hover .card-glow { opacity: 1; }

.form-card-body { position: relative; padding: 2.5rem; }
.form-card-heading { margin-bottom: 2rem; }
.form-card-heading h3 { margin: 0 0 0.5rem; font-size: 1.875rem; font-weight: 700; }

.contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
.field-group { display: flex; flex-direction: column; gap: 1rem; }
.field-shell { position: relative; }

.field-input {
    box-sizing: border-box;
    width: 100%;
    height: 3rem;
    padding: 0 1rem;
    border-radius: 6px;
    border: 1px solid var(--glass-border);
    background: rgba(255, 255, 255, 0.5);
    color: var(--fg);
    font: inherit;
    transition: background 300ms ease, border-color 300ms ease;
}
.field-input:focus { outline: none; border-color: rgba(109, 40, 217, 0.5); box-shadow: 0 0 0 2px rgba(109, 40, 217, 0.5); }
.field-shell:hover .field-input { background: rgba(255, 255, 255, 0.7); }
.field-textarea { height: 8rem; padding: 0.75rem 1rem; resize: none; }

.field-glow {
    position: absolute;
    inset: 0;
    border-radius: 6px;
    pointer-events: none;
    opacity: 0;
    background: linear-gradient(90deg, var(--brand-faint), rgba(147, 51, 234, 0.05));
    transition: opacity 300ms ease;
}
.field-shell:hover .field-glow { opacity: 1; }

.submit-btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    width: 100%;
    height: 3rem;
    border: 0;
    border-radius: 8px;
    background: linear-gradient(90deg, var(--brand), var(--violet));
    color: #ffffff;
    font: inherit;
    font-weight: 600;
    cursor: pointer;
    transition: transform 300ms ease, box-shadow 300ms ease;
}
.submit-btn:hover { transform: translateY(-0.25rem); box-shadow: 0 10px 15px -3px rgba(109, 40, 217, 0.25); }
.submit-icon { transition: transform 300ms ease; }
.submit-btn:hover .submit-icon { transform: translateX(0.25rem); }

.confirmation { text-align: center; padding: 2rem 0; }
.confirmation-badge {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1rem;
    border-radius: 9999px;
    background: linear-gradient(90deg, #22c55e, #10b981);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}
.confirmation-title { margin: 0 0 0.5rem; color: #16a34a; font-size: 1.25rem; font-weight: 600; }

.float-badge {
    position: absolute;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 1rem;
    border: 1px solid rgba(109, 40, 217, 0.2);
    background: linear-gradient(135deg, rgba(109, 40, 217, 0.2), var(--brand-soft));
    color: var(--brand);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}
.badge-top { top: -1rem; right: -1rem; width: 4rem; height: 4rem; transform: rotate(12deg); }
.badge-bottom { bottom: -1rem; left: -1rem; width: 3rem; height: 3rem; transform: rotate(-12deg); }

/* Contact cards ----------------------------------------------------------- */

.contact-card { background: var(--glass-soft); box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }
.contact-card:hover { transform: translateY(-0.5rem) scale(1.05); box-shadow: 0 25px 50px -12px rgba(109, 40, 217, 0.2); }

.card-accent-overlay { position: absolute; inset: 0; opacity: 0; transition: opacity 500ms ease; }
.contact-card-shell:hover .card-accent-overlay { opacity: 0.1; }

.contact-card-body { position: relative; display: flex; align-items: flex-start; gap: 1rem; padding: 1.5rem; }
.contact-card-icon {
    display: flex;
    padding: 0.75rem;
    border-radius: 0.75rem;
    color: #ffffff;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transition: transform 300ms ease;
}
.contact-card-shell:hover .contact-card-icon { transform: scale(1.1); }
.contact-card-text { flex: 1; }
.contact-card-label { margin: 0 0 0.5rem; font-weight: 600; transition: color 300ms ease; }
.contact-card-shell:hover .contact-card-label { color: var(--brand); }
.contact-card-link { display: block; color: var(--fg-muted); text-decoration: none; transition: color 300ms ease; }
.contact-card-link:hover { color: var(--brand); }

.card-corner {
    position: absolute;
    top: -0.25rem;
    right: -0.25rem;
    display: flex;
    align-items: center;
    justify-content: center;
    width: 2rem;
    height: 2rem;
    border-radius: 8px;
    opacity: 0.2;
    transform: rotate(12deg);
}
.card-corner-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: #ffffff; }

.availability-card {
    padding: 1.5rem;
    text-align: center;
    border-color: rgba(109, 40, 217, 0.2);
    background: linear-gradient(135deg, var(--brand-faint), rgba(147, 51, 234, 0.05));
}
.availability-card:hover { transform: translateY(-0.5rem); border-color: rgba(109, 40, 217, 0.4); }
.availability-title {
    margin: 0 0 0.75rem;
    font-size: 1.125rem;
    font-weight: 600;
    background: linear-gradient(90deg, var(--brand), var(--violet));
    background-clip: text;
    -webkit-background-clip: text;
    color: transparent;
}
.availability-card p { margin: 0; font-size: 0.875rem; line-height: 1.6; }

/* Accents ----------------------------------------------------------------- */

.accent-ocean { background-image: linear-gradient(135deg, #3b82f6, #06b6d4); }
.accent-meadow { background-image: linear-gradient(135deg, #22c55e, #10b981); }
.accent-orchid { background-image: linear-gradient(135deg, #a855f7, #ec4899); }
.accent-ember { background-image: linear-gradient(135deg, #f97316, #ef4444); }
.accent-brand { background-image: linear-gradient(135deg, rgba(109, 40, 217, 0.2), rgba(147, 51, 234, 0.2)); color: var(--brand); }

/* Reveal transitions ------------------------------------------------------ */

.reveal {
    opacity: 0;
    transform: translateY(2rem);
    transition: opacity 1000ms ease, transform 1000ms ease;
}
.reveal.is-visible { opacity: 1; transform: translateY(0); }
.reveal-delay-200 { transition-delay: 200ms; }
.reveal-delay-400 { transition-delay: 400ms; }

/* Decoration keyframes ---------------------------------------------------- */

@keyframes contact-float {
    0%, 100% { translate: 0 0; }
    50% { translate: 0 -12px; }
}
@keyframes contact-pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}

.animate-float-slow { animation: contact-float 8s ease-in-out infinite; }
.animate-float-medium { animation: contact-float 6s ease-in-out infinite; }
.animate-float-fast { animation: contact-float 4s ease-in-out infinite; }
.animate-pulse { animation: contact-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite; }
.animate-pulse-slow { animation: contact-pulse 6s ease-in-out infinite; }
.animate-pulse-medium { animation: contact-pulse 4s ease-in-out infinite; }

@media (prefers-reduced-motion: reduce) {
    .reveal { transition: none; }
    [class*="animate-"] { animation: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::CONTACT_CSS;

    #[test]
    fn stylesheet_covers_reveal_and_animation_classes() {
        for class in [
            ".reveal.is-visible",
            ".reveal-delay-200",
            ".reveal-delay-400",
            ".animate-float-slow",
            ".animate-float-medium",
            ".animate-float-fast",
            ".animate-pulse-slow",
            ".animate-pulse-medium",
        ] {
            assert!(CONTACT_CSS.contains(class), "missing {class}");
        }
    }

    #[test]
    fn stylesheet_covers_every_accent() {
        for entry in crate::types::CONTACT_ENTRIES {
            let selector = format!(".{}", entry.accent.class());
            assert!(CONTACT_CSS.contains(&selector), "missing {selector}");
        }
    }
}
