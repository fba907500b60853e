//! Text state, line dash pattern and rendering intent.
//!
//! The small mutable aggregates nested inside a `GraphicsState`. Each one is
//! owned by exactly one graphics state and duplicated through `copy()` when
//! the state is saved.

/// PDF Text State - text positioning and rendering parameters.
///
/// Set by the text state operators (Tc, Tw, Tz, TL, Tf, Tr, Ts) and by
/// graphics state parameter dictionaries.
#[derive(Debug, Clone, PartialEq)]
pub struct TextState {
    /// Character spacing (Tc)
    pub char_spacing: f64,
    /// Word spacing (Tw), applied to the single-byte space character
    pub word_spacing: f64,
    /// Horizontal scaling percentage (Tz, 100 = normal)
    pub horizontal_scaling: f64,
    /// Text leading (TL)
    pub leading: f64,
    /// Current font resource name (e.g. "F1")
    pub font_name: Option<String>,
    /// Font size in text space units
    pub font_size: f64,
    /// Text rendering mode (Tr, 0-7)
    pub render_mode: i32,
    /// Text rise (Ts), superscript/subscript offset
    pub rise: f64,
    /// Text knockout flag (TK)
    pub knockout: bool,
}

impl TextState {
    /// Create a new text state with default values.
    pub fn new() -> Self {
        Self {
            char_spacing: 0.0,
            word_spacing: 0.0,
            horizontal_scaling: 100.0,
            leading: 0.0,
            font_name: None,
            font_size: 0.0,
            render_mode: 0,
            rise: 0.0,
            knockout: true,
        }
    }

    /// Create a copy of this text state.
    pub fn copy(&self) -> Self {
        Self {
            char_spacing: self.char_spacing,
            word_spacing: self.word_spacing,
            horizontal_scaling: self.horizontal_scaling,
            leading: self.leading,
            font_name: self.font_name.clone(),
            font_size: self.font_size,
            render_mode: self.render_mode,
            rise: self.rise,
            knockout: self.knockout,
        }
    }
}

impl Default for TextState {
    fn default() -> Self {
        Self::new()
    }
}

/// Line dash pattern: alternating on/off lengths plus a phase (d operator).
///
/// An empty array is a solid line. A graphics state with no pattern at all
/// holds `None` instead, which stays distinguishable from the empty array.
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    pub array: Vec<f64>,
    pub phase: f64,
}

impl DashPattern {
    pub fn new(array: Vec<f64>, phase: f64) -> Self {
        Self { array, phase }
    }

    /// The solid line pattern `[] 0`.
    pub fn solid() -> Self {
        Self::new(Vec::new(), 0.0)
    }

    pub fn is_solid(&self) -> bool {
        self.array.is_empty()
    }

    /// Create a copy of this dash pattern.
    pub fn copy(&self) -> Self {
        Self {
            array: self.array.to_vec(),
            phase: self.phase,
        }
    }
}

/// Colour rendering intent (ri operator, RI entry).
///
/// Unknown names are kept verbatim; a consumer is expected to treat them as
/// RelativeColorimetric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderingIntent {
    AbsoluteColorimetric,
    RelativeColorimetric,
    Saturation,
    Perceptual,
    Other(String),
}

impl RenderingIntent {
    pub fn from_name(name: &str) -> Self {
        match name {
            "AbsoluteColorimetric" => Self::AbsoluteColorimetric,
            "RelativeColorimetric" => Self::RelativeColorimetric,
            "Saturation" => Self::Saturation,
            "Perceptual" => Self::Perceptual,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::AbsoluteColorimetric => "AbsoluteColorimetric",
            Self::RelativeColorimetric => "RelativeColorimetric",
            Self::Saturation => "Saturation",
            Self::Perceptual => "Perceptual",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for RenderingIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.name())
    }
}
