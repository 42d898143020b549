//! Static export of the contact section.
//!
//! Run with: `cargo run --example static_export --features ssr`

use contact_section::{SectionOptions, render_contact_section};

fn main() {
    let options = SectionOptions {
        inline_styles: true,
        ..Default::default()
    };

    let html = render_contact_section(&options);

    let output_path = "contact_section.html";
    std::fs::write(output_path, &html).expect("Failed to write contact section");

    println!("Contact section written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
