/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    let config = rune_config::RuneConfig::load();

    println!("=== Rune Slides Configuration ===\n");

    println!("Presentation:");
    println!("  Theme: {}", config.presentation.theme);
    println!("  Start Slide: {}", config.presentation.start_slide);
    println!();

    println!("Transitions:");
    println!("  Duration: {}ms", config.transitions.slide_duration_ms);
    println!("  Easing: {}", config.transitions.slide_easing);
    println!();

    println!("Keys:");
    println!("  Next: {}", config.keys.next.join(", "));
    println!("  Previous: {}", config.keys.previous.join(", "));
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
