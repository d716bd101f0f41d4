//! Check cursor sampling on this system.

use zoomfollow_follow_core::sampler::detect_sampler;

pub fn run() -> anyhow::Result<()> {
    println!("ZoomFollow System Check");
    println!("{}", "=".repeat(50));

    println!("     Platform: {}", std::env::consts::OS);

    let mut sampler = detect_sampler();
    println!("     Cursor sampler: {}", sampler.name());

    match sampler.sample() {
        Ok(point) => {
            println!("[OK] Cursor position: ({}, {})", point.x, point.y);
            println!();
            println!("Cursor sampling works. The layer will follow the pointer.");
        }
        Err(e) if e.is_input_unavailable() => {
            println!("[WARN] Cursor unavailable: {e}");
            println!();
            println!("The controller will skip ticks until the cursor can be read.");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
