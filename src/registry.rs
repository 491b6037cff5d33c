//! Colormaps registered under `apc:` names.
//!
//! A [`ColormapRegistry`] is a plain value owned by the caller: plotting
//! front ends build one (usually with [`ColormapRegistry::with_defaults`])
//! and look colormaps up by name.

use std::collections::BTreeMap;
use tracing::debug;
use crate::{
    error::{Error, Result},
    gradients::all_gradients,
    palettes::{self, all_palettes},
    ColorRange, Gradient, Palette, RGBColor,
};

/// Prefix of registered names.
pub const PREFIX: &str = "apc:";

/// Return `name` with the registry prefix, unless it already has it.
pub fn prefixed(name: &str) -> String {
    if name.starts_with(PREFIX) { name.to_string() }
    else { format!("{PREFIX}{name}") }
}

/// A colormap: a palette sampled by bands or a gradient interpolated
/// between its anchors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Colormap {
    Listed(Palette),
    Linear(Gradient),
}

impl Colormap {
    pub fn name(&self) -> &str {
        match self {
            Colormap::Listed(p) => p.name(),
            Colormap::Linear(g) => g.name(),
        }
    }

    /// Return the colormap with its colors in reverse order.
    pub fn reverse(&self) -> Colormap {
        match self {
            Colormap::Listed(p) => Colormap::Listed(p.reverse()),
            Colormap::Linear(g) => Colormap::Linear(g.reverse()),
        }
    }
}

impl<Color: RGBColor> ColorRange<Color> for Colormap {
    fn rgb(&self, t: f64) -> Color {
        match self {
            Colormap::Listed(p) => p.rgb(t),
            Colormap::Linear(g) => g.rgb(t),
        }
    }
}

/// Named colormaps, sorted by name.
#[derive(Clone, Debug, Default)]
pub struct ColormapRegistry {
    maps: BTreeMap<String, Colormap>,
}

impl ColormapRegistry {
    /// An empty registry.
    pub fn new() -> Self { Self::default() }

    /// A registry holding the brand palettes (including `apc:All`) and
    /// the brand gradients with their reversed variants.
    ///
    /// # Example
    ///
    /// ```
    /// use arcadia_color::ColormapRegistry;
    /// let reg = ColormapRegistry::with_defaults();
    /// assert!(reg.contains("apc:magma"));
    /// assert!(reg.contains("apc:magma_r"));
    /// assert!(reg.contains("apc:Accent"));
    /// ```
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        for p in all_palettes().into_iter().chain([&*palettes::ALL]) {
            reg.register_palette_replacing(p.clone());
        }
        for (_, g) in all_gradients() {
            reg.register_gradient_replacing(g.clone());
        }
        debug!(colormaps = reg.len(), "registered default colormaps");
        reg
    }

    fn check_free(&self, name: &str) -> Result<()> {
        let name = prefixed(name);
        if self.maps.contains_key(&name) {
            return Err(Error::AlreadyRegistered { name });
        }
        Ok(())
    }

    /// Insert `cmap`, replacing any colormap with the same name.
    fn insert(&mut self, cmap: Colormap) {
        let name = prefixed(cmap.name());
        if let Some(old) = self.maps.insert(name, cmap) {
            debug!(name = old.name(), "replaced colormap");
        }
    }

    /// Register `palette` as `apc:<name>`.
    ///
    /// # Errors
    ///
    /// Fails if the name is already taken.
    pub fn register_palette(&mut self, palette: Palette) -> Result<()> {
        self.check_free(palette.name())?;
        debug!(name = palette.name(), "registering palette");
        self.insert(Colormap::Listed(palette));
        Ok(())
    }

    /// Register `palette`, replacing any colormap with the same name.
    pub fn register_palette_replacing(&mut self, palette: Palette) {
        self.insert(Colormap::Listed(palette));
    }

    /// Register `gradient` as `apc:<name>` and its reverse as
    /// `apc:<name>_r`.
    ///
    /// # Errors
    ///
    /// Fails if one of the two names is already taken; nothing is
    /// registered then.
    pub fn register_gradient(&mut self, gradient: Gradient) -> Result<()> {
        let reversed = gradient.reverse();
        self.check_free(gradient.name())?;
        self.check_free(reversed.name())?;
        debug!(name = gradient.name(), "registering gradient");
        self.insert(Colormap::Linear(gradient));
        self.insert(Colormap::Linear(reversed));
        Ok(())
    }

    /// [`Self::register_gradient`], replacing existing colormaps.
    pub fn register_gradient_replacing(&mut self, gradient: Gradient) {
        let reversed = gradient.reverse();
        self.insert(Colormap::Linear(gradient));
        self.insert(Colormap::Linear(reversed));
    }

    /// Return the colormap registered as `name`.  The `apc:` prefix
    /// may be omitted.
    pub fn get(&self, name: &str) -> Option<&Colormap> {
        self.maps.get(&prefixed(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.maps.contains_key(&prefixed(name))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize { self.maps.len() }

    pub fn is_empty(&self) -> bool { self.maps.is_empty() }

    /// Remove and return the colormap registered as `name`.
    pub fn remove(&mut self, name: &str) -> Option<Colormap> {
        let removed = self.maps.remove(&prefixed(name));
        if removed.is_some() {
            debug!(name, "removed colormap");
        }
        removed
    }
}
