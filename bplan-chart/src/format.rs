use std::{fmt, str::FromStr};

/// The image formats a chart can be written in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    /// Portable Network Graphics bitmap
    Png,
    /// Scalable Vector Graphics
    #[default]
    Svg,
}

impl ChartFormat {
    /// The file extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ChartFormat {
    type Err = ChartFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("png") {
            Ok(Self::Png)
        } else if s.eq_ignore_ascii_case("svg") {
            Ok(Self::Svg)
        } else {
            Err(Self::Err::UnknownFormat(s.to_owned()))
        }
    }
}

/// Errors from parsing a [`ChartFormat`]
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ChartFormatError {
    /// The name is not a supported image format
    #[error("Unknown chart format: {0}")]
    UnknownFormat(String),
}
