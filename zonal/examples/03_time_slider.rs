use std::sync::Arc;

use zonal::Atlas;
use zonal_mock::MockSource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let atlas = Atlas::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;

    // Scrub the slider and print which boundary is in force per zone.
    for percent in [0.0, 25.0, 50.0, 75.0, 100.0] {
        let instant = atlas.timeline().instant_at(percent);
        let render = atlas.visible_at_percent(percent);
        let active: usize = render.values().map(zonal::RenderGroup::len).sum();
        println!("{percent:>5}% -> {instant}: {active} zone boundaries in force");
        for (operator, group) in &render {
            for feature in &group.features {
                let name = feature.properties.name.as_deref().unwrap_or("<unnamed>");
                println!("        {operator}: {name}");
            }
        }
    }

    Ok(())
}
