//! Version command implementation

use crate::error::Result;
use crate::platform::registry::KNOWN_PLATFORMS;
use crate::settings;

pub fn run() -> Result<()> {
    println!("trendctl {}", env!("CARGO_PKG_VERSION"));
    let settings_path = settings::default_path()
        .map_or_else(|| "(no config directory)".to_string(), |p| p.display().to_string());
    println!("  settings:        {settings_path}");
    println!("  known platforms: {}", KNOWN_PLATFORMS.len());
    Ok(())
}
