//! Show the settings panel the host would display.

use zoomfollow_follow_core::memory_host::MemoryHost;
use zoomfollow_follow_core::settings::{self, PropertyKind};

pub fn run(layers: Vec<String>, json: bool) -> anyhow::Result<()> {
    let mut host = MemoryHost::new();
    for name in layers {
        host.add_layer(name, 0, 0);
    }
    let props = settings::properties(&host);

    if json {
        let doc = serde_json::json!({
            "description": settings::description(),
            "defaults": settings::defaults(),
            "properties": props,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{}", settings::description());
    println!("{}", "=".repeat(50));

    for prop in &props {
        match &prop.kind {
            PropertyKind::EditableList { options } => {
                println!("{} [{}]: editable list", prop.label, prop.key);
                if options.is_empty() {
                    println!("     (no layers; pass --layer NAME)");
                }
                for option in options {
                    println!("     - {option}");
                }
            }
            PropertyKind::FloatSlider { min, max, step } => {
                println!(
                    "{} [{}]: slider {min:.2} to {max:.2}, step {step:.2}",
                    prop.label, prop.key
                );
            }
        }
    }

    let defaults = settings::defaults();
    println!();
    println!(
        "Defaults: zoom {:.2}, smoothness {:.2}",
        defaults.zoom, defaults.smoothing
    );

    Ok(())
}
