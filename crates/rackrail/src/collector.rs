//! In-memory [`StyleSink`] that renders plain CSS.

use rrcss::StyleSheet;

use crate::emitter::StyleSink;
use crate::error::Result;

/// Collects submitted styles per layer, in submission order.
///
/// Rendering puts base before components before utilities, the order a
/// Tailwind build emits its layers in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssCollector {
    pub base: StyleSheet,
    pub components: StyleSheet,
    pub utilities: StyleSheet,
}

impl CssCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.components.is_empty() && self.utilities.is_empty()
    }

    /// All three layers as one sheet.
    pub fn stylesheet(&self) -> StyleSheet {
        let mut sheet = self.base.clone();
        sheet.extend(self.components.clone());
        sheet.extend(self.utilities.clone());
        sheet
    }

    pub fn to_css(&self) -> String {
        self.stylesheet().to_css()
    }
}

impl StyleSink for CssCollector {
    fn add_base(&mut self, styles: StyleSheet) -> Result<()> {
        self.base.extend(styles);
        Ok(())
    }

    fn add_components(&mut self, styles: StyleSheet) -> Result<()> {
        self.components.extend(styles);
        Ok(())
    }

    fn add_utilities(&mut self, styles: StyleSheet) -> Result<()> {
        self.utilities.extend(styles);
        Ok(())
    }
}
