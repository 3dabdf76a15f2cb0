use crate::ChartError;
use plotters::style::{FontStyle, register_font};
use std::sync::OnceLock;

/// DejaVu Sans, distributed under the Bitstream Vera license (see `assets/`)
static DEJAVU_SANS: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Registers the bundled typeface as the `sans-serif` family used by every chart
///
/// Bitmap output rasterizes its own glyphs, so text cannot be drawn until a
/// font is registered. Other styles fall back to the regular face. The
/// registration runs once per process.
pub(crate) fn register() -> Result<(), ChartError> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();

    let registered = *REGISTERED
        .get_or_init(|| register_font("sans-serif", FontStyle::Normal, DEJAVU_SANS).is_ok());
    if registered {
        Ok(())
    } else {
        Err(ChartError::Font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        assert!(register().is_ok());
        assert!(register().is_ok());
    }
}
