use std::collections::BTreeMap;

use crate::style::color::Color;

/// A closed set of symbolic names with a mandatory default.
///
/// `from_name` is total: unknown names resolve to `Self::default()`, since
/// template authors routinely pass ad hoc strings.
pub trait NamedVariant: Copy + Default + PartialEq + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Canonical snake_case name.
    fn name(self) -> &'static str;

    /// Resolve a name; case, surrounding whitespace and `-`/`_` are ignored.
    fn from_name(name: &str) -> Self {
        let wanted = normalize_name(name);
        match Self::ALL
            .iter()
            .copied()
            .find(|v| normalize_name(v.name()) == wanted)
        {
            Some(v) => v,
            None => {
                tracing::debug!(
                    name,
                    fallback = Self::default().name(),
                    "unknown variant name"
                );
                Self::default()
            }
        }
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

// Serialize as the canonical name; deserialize through the total lookup.
macro_rules! named_variant_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str($crate::style::variant::NamedVariant::name(*self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let name = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(<$ty as $crate::style::variant::NamedVariant>::from_name(&name))
            }
        }
    };
}
pub(crate) use named_variant_serde;

/// Caller-defined style table with a mandatory fallback entry.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleTable<S> {
    default_name: String,
    default_style: S,
    entries: BTreeMap<String, S>,
}

impl<S> StyleTable<S> {
    /// Create a table whose fallback is `default_style` under `default_name`.
    pub fn new(default_name: impl Into<String>, default_style: S) -> Self {
        Self {
            default_name: normalize_name(&default_name.into()),
            default_style,
            entries: BTreeMap::new(),
        }
    }

    /// Builder-style [`StyleTable::insert`].
    pub fn with(mut self, name: impl Into<String>, style: S) -> Self {
        self.insert(name, style);
        self
    }

    /// Add or replace an entry. Using the default name replaces the fallback.
    pub fn insert(&mut self, name: impl Into<String>, style: S) {
        let name = normalize_name(&name.into());
        if name == self.default_name {
            self.default_style = style;
        } else {
            self.entries.insert(name, style);
        }
    }

    /// True when `name` has its own entry (or is the default name).
    pub fn contains(&self, name: &str) -> bool {
        let name = normalize_name(name);
        name == self.default_name || self.entries.contains_key(&name)
    }

    /// The fallback entry.
    pub fn default_style(&self) -> &S {
        &self.default_style
    }

    /// Look up `name`, falling back to the default entry. Never fails.
    pub fn resolve(&self, name: &str) -> &S {
        let key = normalize_name(name);
        if key == self.default_name {
            return &self.default_style;
        }
        self.entries.get(&key).unwrap_or_else(|| {
            tracing::debug!(name, fallback = %self.default_name, "unknown style name");
            &self.default_style
        })
    }
}

/// Resolved look of a title card.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TitleStyle {
    /// Full-canvas background; transparent means none.
    pub background: Color,
    /// Title text color.
    pub text_color: Color,
    /// Subtitle color.
    pub accent_color: Color,
    /// Title font size in pixels.
    pub font_size_px: f64,
    /// Title font weight.
    pub font_weight: u16,
    /// Render the title uppercase.
    pub uppercase: bool,
}

/// Built-in title card variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TitleVariant {
    /// Light background, dark text.
    Minimal,
    /// Transparent background, cyan accent.
    Standard,
    /// Large white type on transparent background.
    #[default]
    Bold,
    /// Heavy uppercase type on a dark background.
    Kinetic,
    /// Translucent dark glass panel.
    Glass,
}

impl NamedVariant for TitleVariant {
    const ALL: &'static [Self] = &[
        Self::Minimal,
        Self::Standard,
        Self::Bold,
        Self::Kinetic,
        Self::Glass,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Bold => "bold",
            Self::Kinetic => "kinetic",
            Self::Glass => "glass",
        }
    }
}

named_variant_serde!(TitleVariant);

impl TitleVariant {
    /// Concrete style record.
    pub fn style(self) -> TitleStyle {
        const CYAN: Color = Color::rgb(0x00, 0xD9, 0xFF);
        let (background, text_color, accent_color) = match self {
            Self::Minimal => (
                Color::rgb(0xF5, 0xF7, 0xFA),
                Color::rgb(0x1A, 0x1A, 0x1A),
                Color::rgb(0x00, 0x66, 0xFF),
            ),
            Self::Standard => (Color::TRANSPARENT, Color::WHITE, CYAN),
            Self::Bold => (Color::TRANSPARENT, Color::WHITE, Color::WHITE),
            Self::Kinetic => (Color::rgb(0x0A, 0x0E, 0x1A), Color::WHITE, CYAN),
            Self::Glass => (Color::rgb(10, 14, 26).with_alpha(0.85), Color::WHITE, CYAN),
        };
        TitleStyle {
            background,
            text_color,
            accent_color,
            font_size_px: if self == Self::Bold { 120.0 } else { 96.0 },
            font_weight: if self == Self::Kinetic { 900 } else { 700 },
            uppercase: self == Self::Kinetic,
        }
    }
}

/// Resolved look of a code panel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CodeStyle {
    /// Panel fill.
    pub background: Color,
    /// Border width in pixels; zero means no border.
    pub border_width: f64,
    /// Border color.
    pub border_color: Color,
    /// Corner radius in pixels.
    pub corner_radius: f64,
    /// Inner padding in pixels.
    pub padding: f64,
}

/// Built-in code panel variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CodeVariant {
    /// Borderless dark card.
    Minimal,
    /// Near-black terminal window.
    Terminal,
    /// Editor window with title bar.
    #[default]
    Editor,
    /// Black panel with cyan outline.
    Hacker,
}

impl NamedVariant for CodeVariant {
    const ALL: &'static [Self] = &[Self::Minimal, Self::Terminal, Self::Editor, Self::Hacker];

    fn name(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Terminal => "terminal",
            Self::Editor => "editor",
            Self::Hacker => "hacker",
        }
    }
}

named_variant_serde!(CodeVariant);

impl CodeVariant {
    /// Concrete style record.
    pub fn style(self) -> CodeStyle {
        let white = |a: f64| Color::WHITE.with_alpha(a);
        let (background, border_width, border_color, corner_radius, padding) = match self {
            Self::Minimal => (
                Color::rgb(30, 35, 50).with_alpha(0.95),
                0.0,
                Color::TRANSPARENT,
                12.0,
                30.0,
            ),
            Self::Terminal => (
                Color::rgb(20, 20, 20).with_alpha(0.98),
                1.0,
                white(0.1),
                8.0,
                30.0,
            ),
            Self::Editor => (
                Color::rgb(26, 31, 46).with_alpha(0.98),
                1.0,
                white(0.05),
                12.0,
                0.0,
            ),
            Self::Hacker => (
                Color::rgb(0, 0, 0).with_alpha(0.95),
                1.0,
                Color::rgb(0x00, 0xD9, 0xFF),
                8.0,
                30.0,
            ),
        };
        CodeStyle {
            background,
            border_width,
            border_color,
            corner_radius,
            padding,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/variant.rs"]
mod tests;
