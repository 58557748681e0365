//! Document geometry of the pitch page.
//!
//! Sections stack vertically below a hero header. Each block's document top is
//! the sum of everything above it; viewport-relative tops are derived from the
//! live scroll offset by the host.

use anyhow::{Result, bail};
use section_nav::{SECTION_ORDER, SectionId};
use serde::{Deserialize, Serialize};

/// One section block in document order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionBlock {
    pub section: SectionId,
    pub height: f64,
    #[serde(default)]
    pub heading: String,
}

/// Page geometry: viewport size, hero header and section blocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub viewport_height: f64,
    pub hero_height: f64,
    pub sections: Vec<SectionBlock>,
}

impl PageLayout {
    /// Reject layouts the host cannot place.
    ///
    /// # Errors
    /// Fails on non-positive sizes or a section listed twice.
    pub fn validate(&self) -> Result<()> {
        if self.viewport_height <= 0.0 {
            bail!("viewport height must be positive, got {}", self.viewport_height);
        }
        if self.hero_height < 0.0 {
            bail!("hero height must not be negative, got {}", self.hero_height);
        }
        let mut seen = [false; SECTION_ORDER.len()];
        for block in &self.sections {
            if block.height <= 0.0 {
                bail!("section '{}' has non-positive height {}", block.section, block.height);
            }
            if seen[block.section.index()] {
                bail!("section '{}' listed more than once", block.section);
            }
            seen[block.section.index()] = true;
        }
        Ok(())
    }

    /// Total document height.
    pub fn document_height(&self) -> f64 {
        self.hero_height + self.sections.iter().map(|block| block.height).sum::<f64>()
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    /// Document top of a section, if the page has it.
    pub fn document_top(&self, section: SectionId) -> Option<f64> {
        let mut top = self.hero_height;
        for block in &self.sections {
            if block.section == section {
                return Some(top);
            }
            top += block.height;
        }
        None
    }

    /// Heading text of a section, if the page has it.
    pub fn heading(&self, section: SectionId) -> Option<&str> {
        self.sections
            .iter()
            .find(|block| block.section == section)
            .map(|block| block.heading.as_str())
    }
}

impl Default for PageLayout {
    /// The pitch page as laid out in an 800 px tall viewport.
    fn default() -> Self {
        let block = |section, height, heading: &str| SectionBlock {
            section,
            height,
            heading: heading.to_owned(),
        };
        Self {
            viewport_height: 800.0,
            hero_height: 600.0,
            sections: vec![
                block(SectionId::Problem, 900.0, "The Challenge: Operational Friction"),
                block(SectionId::Future, 1100.0, "Strategic Shift: Space-Aware Intelligence"),
                block(SectionId::Technical, 1400.0, "The Technical Engine"),
                block(SectionId::Value, 1000.0, "Roadmap & Business Measures"),
            ],
        }
    }
}
