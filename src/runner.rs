//! The pipeline runner: source → square → keep evens → two rendered lines.

use std::io::Write;

use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::numeric::{is_even, square};
use crate::render::render_line;
use crate::view::{filter, transform};

#[derive(Debug, Clone, Default)]
pub struct PipelineRunner {
    config: PipelineConfig,
}

impl PipelineRunner {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        debug!(numbers = ?self.config.numbers, "building views");

        let squared = transform(self.config.numbers.iter().copied(), square);
        let even_squared = filter(&squared, |n: &i32| is_even(*n));

        let squared_count = render_line(out, &self.config.squared_label, &squared)?;
        let even_count = render_line(out, &self.config.even_label, &even_squared)?;
        out.flush()?;

        info!(squared = squared_count, even = even_count, "pipeline finished");
        Ok(())
    }
}
