use std::sync::Arc;

use zonal::Atlas;
use zonal_mock::MockSource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the atlas over the deterministic mock source.
    let atlas = Atlas::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;

    // 2. Build the hierarchy the toggle panel binds to.
    let model = atlas.model();

    // 3. Print the artifact as it would be written to zones.json.
    println!("{}", serde_json::to_string_pretty(&model)?);

    Ok(())
}
