use indexmap::IndexMap;

use crate::error::{RoadmapError, RoadmapResult};
use crate::render::Color;

/// Service-to-color assignment for bubbles and the legend.
///
/// Entries keep insertion order for stable legends; lookups for services
/// without an entry fall back to a neutral color.
#[derive(Debug, Clone, PartialEq)]
pub struct ServicePalette {
    colors: IndexMap<String, Color>,
    fallback_color: Color,
}

impl Default for ServicePalette {
    fn default() -> Self {
        let mut colors = IndexMap::new();
        colors.insert("Finance".to_owned(), Color::rgb(0.20, 0.59, 0.86));
        colors.insert("Marketing".to_owned(), Color::rgb(0.91, 0.30, 0.24));
        colors.insert("IT".to_owned(), Color::rgb(0.18, 0.80, 0.44));
        colors.insert("HR".to_owned(), Color::rgb(0.95, 0.61, 0.07));
        Self {
            colors,
            fallback_color: Color::rgb(0.58, 0.65, 0.65),
        }
    }
}

impl ServicePalette {
    #[must_use]
    pub fn empty_with_fallback(fallback_color: Color) -> Self {
        Self {
            colors: IndexMap::new(),
            fallback_color,
        }
    }

    #[must_use]
    pub fn color_for(&self, service: &str) -> Color {
        self.colors
            .get(service)
            .copied()
            .unwrap_or(self.fallback_color)
    }

    #[must_use]
    pub fn fallback_color(&self) -> Color {
        self.fallback_color
    }

    #[must_use]
    pub fn contains(&self, service: &str) -> bool {
        self.colors.contains_key(service)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Color)> {
        self.colors
            .iter()
            .map(|(service, color)| (service.as_str(), *color))
    }

    /// Assigns a color to a service, replacing any existing assignment.
    pub fn set_color(&mut self, service: impl Into<String>, color: Color) -> RoadmapResult<()> {
        let service = service.into();
        if service.trim().is_empty() {
            return Err(RoadmapError::InvalidData(
                "palette service name must not be blank".to_owned(),
            ));
        }
        color.validate()?;

        self.colors.insert(service, color);
        Ok(())
    }

    pub fn set_fallback_color(&mut self, color: Color) -> RoadmapResult<()> {
        color.validate()?;
        self.fallback_color = color;
        Ok(())
    }

    /// Removes a service assignment. Returns `true` when removed.
    pub fn remove(&mut self, service: &str) -> bool {
        self.colors.shift_remove(service).is_some()
    }
}
