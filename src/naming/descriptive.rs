//! Stage 3: descriptive naming via HSV banding
//!
//! When neither lookup stage produces a name, the pixel is classified by
//! hue, saturation, and value bands into a composed description such as
//! "vivid bright red" or "pale dark blue". This stage never fails: every
//! in-range pixel maps to a non-empty string.

use crate::constants::naming::*;
use crate::frame::Pixel;
use palette::{FromColor, Hsv, Srgb};

/// The twelve 30-degree hue bands, starting at the wrapped red band
const HUE_BANDS: [&str; 12] = [
    "red",
    "orange",
    "yellow",
    "yellow-green",
    "green",
    "cyan-green",
    "cyan",
    "blue",
    "blue-violet",
    "violet",
    "magenta",
    "red-magenta",
];

/// Lower edge of the orange band; red wraps across 0/360 below this
const RED_UPPER_DEGREES: f32 = 15.0;

/// Convert a pixel to (hue degrees [0,360), saturation %, value %)
fn to_hsv(pixel: Pixel) -> (f32, f32, f32) {
    let srgb = Srgb::new(
        pixel[0] as f32 / 255.0,
        pixel[1] as f32 / 255.0,
        pixel[2] as f32 / 255.0,
    );
    let hsv = Hsv::from_color(srgb);
    (
        hsv.hue.into_positive_degrees(),
        hsv.saturation * 100.0,
        hsv.value * 100.0,
    )
}

/// Name the hue band for a hue in degrees [0,360)
///
/// The red band wraps the 0/360 boundary: hue < 15 or hue >= 345 is "red".
/// Band edges are inclusive on the lower side, so hue 344.999 still falls in
/// the 315-345 "red-magenta" band.
pub fn hue_band(hue: f32) -> &'static str {
    if !(RED_UPPER_DEGREES..RED_WRAP_DEGREES).contains(&hue) {
        return HUE_BANDS[0];
    }
    let index = ((hue - RED_UPPER_DEGREES) / HUE_BAND_DEGREES) as usize + 1;
    HUE_BANDS[index.min(HUE_BANDS.len() - 1)]
}

/// Compose a descriptive name from HSV components
///
/// Saturation and value are percentages in [0,100]. Low-saturation colors
/// take the gray path; chromatic colors get the hue band name with the value
/// modifier applied first ("dark"/"bright") and the saturation modifier
/// ("pale"/"vivid") prefixed in front, so both can combine.
pub fn describe_hsv(hue: f32, saturation: f32, value: f32) -> String {
    if saturation < GRAY_MAX_SATURATION {
        return if value < GRAY_DARK_VALUE {
            "very dark gray"
        } else if value < GRAY_LIGHT_VALUE {
            "gray"
        } else {
            "light gray"
        }
        .to_string();
    }

    let mut name = hue_band(hue).to_string();

    if value < DARK_VALUE {
        name = format!("dark {name}");
    } else if value > BRIGHT_VALUE {
        name = format!("bright {name}");
    }

    if saturation < PALE_SATURATION {
        name = format!("pale {name}");
    } else if saturation > VIVID_SATURATION {
        name = format!("vivid {name}");
    }

    name
}

/// Descriptive name for a pixel
pub fn describe(pixel: Pixel) -> String {
    let (hue, saturation, value) = to_hsv(pixel);
    describe_hsv(hue, saturation, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_band_boundaries() {
        assert_eq!(hue_band(0.0), "red");
        assert_eq!(hue_band(14.999), "red");
        assert_eq!(hue_band(15.0), "orange");
        assert_eq!(hue_band(44.999), "orange");
        assert_eq!(hue_band(45.0), "yellow");
        assert_eq!(hue_band(105.0), "green");
        assert_eq!(hue_band(165.0), "cyan");
        assert_eq!(hue_band(195.0), "blue");
        assert_eq!(hue_band(255.0), "violet");
        assert_eq!(hue_band(315.0), "red-magenta");
        assert_eq!(hue_band(344.999), "red-magenta");
        assert_eq!(hue_band(345.0), "red");
        assert_eq!(hue_band(359.999), "red");
    }

    #[test]
    fn test_gray_buckets() {
        assert_eq!(describe_hsv(0.0, 5.0, 10.0), "very dark gray");
        assert_eq!(describe_hsv(120.0, 10.0, 29.999), "very dark gray");
        assert_eq!(describe_hsv(120.0, 10.0, 30.0), "gray");
        assert_eq!(describe_hsv(240.0, 19.999, 69.999), "gray");
        assert_eq!(describe_hsv(240.0, 0.0, 70.0), "light gray");
        assert_eq!(describe_hsv(300.0, 15.0, 100.0), "light gray");
    }

    #[test]
    fn test_saturation_boundary_is_strict() {
        // Saturation exactly 20 is chromatic, not gray
        let name = describe_hsv(0.0, 20.0, 50.0);
        assert!(!name.contains("gray"), "got {name}");
        assert!(name.ends_with("red"));
    }

    #[test]
    fn test_modifiers() {
        assert_eq!(describe_hsv(200.0, 60.0, 50.0), "blue");
        assert_eq!(describe_hsv(200.0, 60.0, 20.0), "dark blue");
        assert_eq!(describe_hsv(200.0, 60.0, 90.0), "bright blue");
        assert_eq!(describe_hsv(200.0, 30.0, 50.0), "pale blue");
        assert_eq!(describe_hsv(200.0, 90.0, 50.0), "vivid blue");
    }

    #[test]
    fn test_modifiers_compose_value_first() {
        assert_eq!(describe_hsv(200.0, 30.0, 20.0), "pale dark blue");
        assert_eq!(describe_hsv(200.0, 90.0, 90.0), "vivid bright blue");
        assert_eq!(describe_hsv(30.0, 90.0, 20.0), "vivid dark orange");
    }

    #[test]
    fn test_describe_pixels() {
        assert_eq!(describe([10, 10, 10]), "very dark gray");
        assert_eq!(describe([128, 128, 128]), "gray");
        assert_eq!(describe([230, 230, 230]), "light gray");
        // (255,10,10): saturation ~96%, value 100%, hue ~0
        assert_eq!(describe([255, 10, 10]), "vivid bright red");
    }

    #[test]
    fn test_describe_never_empty() {
        for pixel in [[0, 0, 0], [255, 255, 255], [1, 254, 128], [77, 0, 209]] {
            assert!(!describe(pixel).is_empty());
        }
    }
}
