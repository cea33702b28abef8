use std::sync::Arc;

use zonal::{Atlas, ToggleSet};
use zonal_mock::MockSource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let atlas = Atlas::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;

    // Show everything Waymo, but hide the San Francisco zone and force one
    // Phoenix revision off. More specific toggles win.
    let mut toggles = ToggleSet::new();
    toggles.set_operator("Waymo", true);
    toggles.set_zone("Waymo", "San Francisco", false);
    toggles.set_revision("w-phx-1", false);

    for (operator, group) in &atlas.visible(&toggles) {
        println!("{operator} ({}):", group.color);
        for feature in &group.features {
            let name = feature.properties.name.as_deref().unwrap_or("<unnamed>");
            println!("  {}: {name}", feature.id);
        }
    }

    Ok(())
}
