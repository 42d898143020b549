//! Decorative background matching the hero section.

use leptos::prelude::*;

/// Floating tiles: position class, tilt class, float animation.
const TILES: [(&str, &str, &str); 5] = [
    ("tile-top-right", "tilt-cw", "animate-float-slow"),
    ("tile-bottom-left", "tilt-ccw", "animate-float-medium"),
    ("tile-upper-left", "tilt-diamond", "animate-float-fast"),
    ("tile-mid-left", "tilt-ccw", "animate-float-slow"),
    ("tile-lower-right", "tilt-diamond", "animate-float-medium"),
];

/// Gradient orbs: position class, pulse animation.
const ORBS: [(&str, &str); 2] = [
    ("orb-upper-right", "animate-pulse-slow"),
    ("orb-lower-left", "animate-pulse-medium"),
];

/// Floating tiles and gradient orbs behind the section content.
///
/// Purely visual: hidden from assistive technology and from pointer events.
#[component]
pub fn ContactBackdrop() -> impl IntoView {
    view! {
        <div class="contact-backdrop" aria-hidden="true">
            {TILES
                .iter()
                .map(|(position, tilt, animation)| {
                    view! {
                        <div class=format!("backdrop-tile {position} {tilt} {animation}")>
                            <div class="tile-face"></div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            {ORBS
                .iter()
                .map(|(position, animation)| {
                    view! { <div class=format!("backdrop-orb {position} {animation}")></div> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
