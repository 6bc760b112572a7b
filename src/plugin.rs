//! Named plugin dispatch.
//!
//! A plugin takes the image first and at most one boolean parameter with a
//! default, and reports whether it modified the image. Callers that select
//! transforms by name (a command line, a batch script) go through
//! [`Plugin::parse`] or [`str::parse`].

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::buffer::Image;
use crate::error::PictoolError;

/// One transform together with its parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plugin {
    /// Print the pixels; see [`crate::display`].
    Display,
    /// Zero the red channel; see [`crate::dered`].
    Dered,
    /// Greyscale or sepia; see [`crate::mono`].
    Mono { sepia: bool },
    /// Mirror; see [`crate::flip`].
    Flip { vertical: bool },
    /// Swap rows and columns; see [`crate::transpose`].
    Transpose,
    /// 90° rotation; see [`crate::rotate`].
    Rotate { right: bool },
}

impl Plugin {
    /// Every plugin, with default parameters.
    pub const ALL: [Plugin; 6] = [
        Plugin::Display,
        Plugin::Dered,
        Plugin::Mono { sepia: false },
        Plugin::Flip { vertical: false },
        Plugin::Transpose,
        Plugin::Rotate { right: false },
    ];

    /// Look up a plugin by name, with default parameters.
    pub fn from_name(name: &str) -> Result<Self, PictoolError> {
        Self::ALL
            .into_iter()
            .find(|plugin| plugin.name() == name)
            .ok_or_else(|| PictoolError::UnknownPlugin(name.to_string()))
    }

    /// Look up a plugin by name and apply `key=value` arguments.
    ///
    /// The key must be the plugin's parameter and the value a boolean
    /// literal (`true`/`false`, or `True`/`False`).
    pub fn parse<'a, I>(name: &str, args: I) -> Result<Self, PictoolError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut plugin = Self::from_name(name)?;
        for arg in args {
            let (key, value) = arg.split_once('=').ok_or_else(|| PictoolError::UnknownParameter {
                plugin: plugin.name(),
                parameter: arg.to_string(),
            })?;
            plugin = plugin.with_argument(key.trim(), value.trim())?;
        }
        Ok(plugin)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Plugin::Display => "display",
            Plugin::Dered => "dered",
            Plugin::Mono { .. } => "mono",
            Plugin::Flip { .. } => "flip",
            Plugin::Transpose => "transpose",
            Plugin::Rotate { .. } => "rotate",
        }
    }

    /// The plugin's parameter name and current value, if it takes one.
    pub fn parameter(&self) -> Option<(&'static str, bool)> {
        match *self {
            Plugin::Mono { sepia } => Some(("sepia", sepia)),
            Plugin::Flip { vertical } => Some(("vertical", vertical)),
            Plugin::Rotate { right } => Some(("right", right)),
            Plugin::Display | Plugin::Dered | Plugin::Transpose => None,
        }
    }

    fn with_argument(self, key: &str, value: &str) -> Result<Self, PictoolError> {
        let Some((parameter, _)) = self.parameter().filter(|(name, _)| *name == key) else {
            return Err(PictoolError::UnknownParameter {
                plugin: self.name(),
                parameter: key.to_string(),
            });
        };
        let flag = parse_bool(value).ok_or_else(|| PictoolError::InvalidArgument {
            parameter,
            value: value.to_string(),
        })?;
        Ok(match self {
            Plugin::Mono { .. } => Plugin::Mono { sepia: flag },
            Plugin::Flip { .. } => Plugin::Flip { vertical: flag },
            Plugin::Rotate { .. } => Plugin::Rotate { right: flag },
            other => other,
        })
    }

    /// Run the plugin. Returns `true` if the image was modified.
    pub fn apply(&self, image: &mut Image) -> bool {
        let (width, height) = (image.width(), image.height());
        let modified = match *self {
            #[cfg(feature = "std")]
            Plugin::Display => crate::display::display(image),
            #[cfg(not(feature = "std"))]
            Plugin::Display => false,
            Plugin::Dered => crate::color::dered(image),
            Plugin::Mono { sepia } => crate::color::mono(image, sepia),
            Plugin::Flip { vertical } => crate::geometry::flip(image, vertical),
            Plugin::Transpose => crate::geometry::transpose(image),
            Plugin::Rotate { right } => crate::geometry::rotate(image, right),
        };
        tracing::debug!(
            plugin = self.name(),
            width,
            height,
            new_width = image.width(),
            new_height = image.height(),
            modified,
            "applied plugin"
        );
        modified
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "True" => Some(true),
        "false" | "False" => Some(false),
        _ => None,
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        if let Some((parameter, value)) = self.parameter() {
            write!(f, " {parameter}={value}")?;
        }
        Ok(())
    }
}

/// Parses `"name"` or `"name key=value"`.
impl FromStr for Plugin {
    type Err = PictoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().unwrap_or_default();
        Self::parse(name, words)
    }
}

impl TryFrom<String> for Plugin {
    type Error = PictoolError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
