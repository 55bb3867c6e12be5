//! Generate static files

use anyhow::Result;

use crate::content;
use crate::generator::Generator;
use crate::Site;

/// Generate the static site
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let generator = Generator::new(site)?;
    generator.generate()?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} pages in {:.2}s",
        content::all().len(),
        duration.as_secs_f64()
    );

    Ok(())
}
