//! Color literal parsing for token values.
//!
//! Supports the color syntaxes a CSS stylesheet accepts for theme colors:
//!
//! - Hex: `"#353a65"`, `"#fff"`, and the alpha forms `"#ffff"` / `"#353a65cc"`
//! - RGB functions: `rgb(53, 58, 101)`, `rgb(53 58 101 / 50%)`, `rgba(...)`
//! - HSL functions: `hsl(235deg 31% 30%)`, `hsla(235, 31%, 30%, 0.5)`
//! - Named colors: `rebeccapurple`, `Navy`, `transparent`, `currentColor`
//!
//! Parsing is only a syntax check. Loading a configuration never calls it;
//! use [`ThemeTokens::validate_colors`](super::ThemeTokens::validate_colors)
//! at the point where the stylesheet is about to be generated.
//!
//! # Example
//!
//! ```rust
//! use gale_theme::theme::ColorValue;
//!
//! let main = ColorValue::parse("#353a65").unwrap();
//! assert_eq!(main, ColorValue::Rgb(0x35, 0x3a, 0x65));
//! assert!(ColorValue::parse("#35g").is_err());
//! ```

use std::fmt;

/// Token categories whose values must be color literals.
pub const COLOR_CATEGORIES: &[&str] = &[
    "colors",
    "accentColor",
    "backgroundColor",
    "borderColor",
    "boxShadowColor",
    "caretColor",
    "divideColor",
    "fill",
    "gradientColorStops",
    "outlineColor",
    "placeholderColor",
    "ringColor",
    "ringOffsetColor",
    "stroke",
    "textColor",
    "textDecorationColor",
];

/// Returns true if tokens in `category` hold color literals.
pub fn is_color_category(category: &str) -> bool {
    COLOR_CATEGORIES.contains(&category)
}

/// A parsed color literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// Opaque RGB color.
    Rgb(u8, u8, u8),
    /// RGB color with an alpha channel (0 = transparent, 255 = opaque).
    Rgba(u8, u8, u8, u8),
    /// HSL color. Hue is in degrees, saturation and lightness in percent.
    Hsl {
        hue: f32,
        saturation: f32,
        lightness: f32,
        alpha: Option<f32>,
    },
    /// CSS color keyword, stored lowercase.
    Named(String),
}

impl ColorValue {
    /// Parses a color literal.
    ///
    /// Whitespace around the value is ignored; function names and keywords
    /// are matched case-insensitively.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty color value".to_string());
        }

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, &["rgba", "rgb"]) {
            return Self::parse_rgb(args);
        }
        if let Some(args) = function_args(&lower, &["hsla", "hsl"]) {
            return Self::parse_hsl(args);
        }

        Self::parse_named(&lower)
    }

    /// Parses a hex color code (without the `#` prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex: {}", hex));
        }

        let digits: Vec<u8> = hex
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();

        match digits.as_slice() {
            // #rgb and #rgba expand each digit: f -> ff
            [r, g, b] => Ok(ColorValue::Rgb(r * 17, g * 17, b * 17)),
            [r, g, b, a] => Ok(ColorValue::Rgba(r * 17, g * 17, b * 17, a * 17)),
            [r1, r2, g1, g2, b1, b2] => {
                Ok(ColorValue::Rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2))
            }
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(ColorValue::Rgba(
                r1 * 16 + r2,
                g1 * 16 + g2,
                b1 * 16 + b2,
                a1 * 16 + a2,
            )),
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3, 4, 6 or 8 digits)",
                hex
            )),
        }
    }

    fn parse_rgb(args: &str) -> Result<Self, String> {
        let (channels, alpha) = split_components(args)?;
        let [r, g, b]: [u8; 3] = channels
            .iter()
            .map(|c| parse_channel(c))
            .collect::<Result<Vec<_>, _>>()?
            .try_into()
            .map_err(|_| "rgb() requires exactly 3 channels".to_string())?;

        match alpha {
            Some(a) => {
                let alpha = (parse_alpha(a)? * 255.0).round() as u8;
                Ok(ColorValue::Rgba(r, g, b, alpha))
            }
            None => Ok(ColorValue::Rgb(r, g, b)),
        }
    }

    fn parse_hsl(args: &str) -> Result<Self, String> {
        let (components, alpha) = split_components(args)?;
        if components.len() != 3 {
            return Err(format!(
                "hsl() requires exactly 3 components, got {}",
                components.len()
            ));
        }

        let hue = parse_hue(components[0])?;
        let saturation = parse_percentage(components[1])?;
        let lightness = parse_percentage(components[2])?;
        let alpha = alpha.map(parse_alpha).transpose()?;

        Ok(ColorValue::Hsl {
            hue,
            saturation,
            lightness,
            alpha,
        })
    }

    fn parse_named(name: &str) -> Result<Self, String> {
        if name == "transparent" || name == "currentcolor" || NAMED_COLORS.contains(&name) {
            Ok(ColorValue::Named(name.to_string()))
        } else {
            Err(format!("Unknown color name: {}", name))
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            ColorValue::Rgba(r, g, b, a) => write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a),
            ColorValue::Hsl {
                hue,
                saturation,
                lightness,
                alpha: None,
            } => write!(f, "hsl({}deg {}% {}%)", hue, saturation, lightness),
            ColorValue::Hsl {
                hue,
                saturation,
                lightness,
                alpha: Some(a),
            } => write!(f, "hsl({}deg {}% {}% / {})", hue, saturation, lightness, a),
            ColorValue::Named(name) => f.write_str(name),
        }
    }
}

/// Returns the argument list of `name(...)` for the first matching name.
fn function_args<'a>(s: &'a str, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        s.strip_prefix(name)
            .and_then(|rest| rest.trim_start().strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
    })
}

/// Splits function arguments into main components and an optional alpha.
///
/// Accepts both the legacy comma syntax (`1, 2, 3, 0.5`) and the modern
/// space syntax (`1 2 3 / 0.5`).
fn split_components(args: &str) -> Result<(Vec<&str>, Option<&str>), String> {
    let args = args.trim();

    if args.contains(',') {
        let mut parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let alpha = if parts.len() == 4 { parts.pop() } else { None };
        return Ok((parts, alpha));
    }

    let (main, alpha) = match args.split_once('/') {
        Some((main, alpha)) => (main, Some(alpha.trim())),
        None => (args, None),
    };
    if alpha == Some("") {
        return Err("Missing alpha value after '/'".to_string());
    }

    Ok((main.split_whitespace().collect(), alpha))
}

fn parse_number(s: &str) -> Result<f32, String> {
    s.parse::<f32>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| format!("Invalid number '{}'", s))
}

fn parse_channel(s: &str) -> Result<u8, String> {
    let value = match s.strip_suffix('%') {
        Some(pct) => parse_number(pct)? / 100.0 * 255.0,
        None => parse_number(s)?,
    };
    if !(0.0..=255.0).contains(&value) {
        return Err(format!("Color channel {} out of range (0-255)", s));
    }
    Ok(value.round() as u8)
}

fn parse_alpha(s: &str) -> Result<f32, String> {
    let value = match s.strip_suffix('%') {
        Some(pct) => parse_number(pct)? / 100.0,
        None => parse_number(s)?,
    };
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("Alpha {} out of range (0-1)", s));
    }
    Ok(value)
}

fn parse_hue(s: &str) -> Result<f32, String> {
    parse_number(s.strip_suffix("deg").unwrap_or(s))
}

fn parse_percentage(s: &str) -> Result<f32, String> {
    let value = parse_number(s.strip_suffix('%').unwrap_or(s))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(format!("Percentage {} out of range (0-100)", s));
    }
    Ok(value)
}

/// CSS Color Module Level 4 named colors.
const NAMED_COLORS: &[&str] = &[
    "aliceblue",
    "antiquewhite",
    "aqua",
    "aquamarine",
    "azure",
    "beige",
    "bisque",
    "black",
    "blanchedalmond",
    "blue",
    "blueviolet",
    "brown",
    "burlywood",
    "cadetblue",
    "chartreuse",
    "chocolate",
    "coral",
    "cornflowerblue",
    "cornsilk",
    "crimson",
    "cyan",
    "darkblue",
    "darkcyan",
    "darkgoldenrod",
    "darkgray",
    "darkgreen",
    "darkgrey",
    "darkkhaki",
    "darkmagenta",
    "darkolivegreen",
    "darkorange",
    "darkorchid",
    "darkred",
    "darksalmon",
    "darkseagreen",
    "darkslateblue",
    "darkslategray",
    "darkslategrey",
    "darkturquoise",
    "darkviolet",
    "deeppink",
    "deepskyblue",
    "dimgray",
    "dimgrey",
    "dodgerblue",
    "firebrick",
    "floralwhite",
    "forestgreen",
    "fuchsia",
    "gainsboro",
    "ghostwhite",
    "gold",
    "goldenrod",
    "gray",
    "green",
    "greenyellow",
    "grey",
    "honeydew",
    "hotpink",
    "indianred",
    "indigo",
    "ivory",
    "khaki",
    "lavender",
    "lavenderblush",
    "lawngreen",
    "lemonchiffon",
    "lightblue",
    "lightcoral",
    "lightcyan",
    "lightgoldenrodyellow",
    "lightgray",
    "lightgreen",
    "lightgrey",
    "lightpink",
    "lightsalmon",
    "lightseagreen",
    "lightskyblue",
    "lightslategray",
    "lightslategrey",
    "lightsteelblue",
    "lightyellow",
    "lime",
    "limegreen",
    "linen",
    "magenta",
    "maroon",
    "mediumaquamarine",
    "mediumblue",
    "mediumorchid",
    "mediumpurple",
    "mediumseagreen",
    "mediumslateblue",
    "mediumspringgreen",
    "mediumturquoise",
    "mediumvioletred",
    "midnightblue",
    "mintcream",
    "mistyrose",
    "moccasin",
    "navajowhite",
    "navy",
    "oldlace",
    "olive",
    "olivedrab",
    "orange",
    "orangered",
    "orchid",
    "palegoldenrod",
    "palegreen",
    "paleturquoise",
    "palevioletred",
    "papayawhip",
    "peachpuff",
    "peru",
    "pink",
    "plum",
    "powderblue",
    "purple",
    "rebeccapurple",
    "red",
    "rosybrown",
    "royalblue",
    "saddlebrown",
    "salmon",
    "sandybrown",
    "seagreen",
    "seashell",
    "sienna",
    "silver",
    "skyblue",
    "slateblue",
    "slategray",
    "slategrey",
    "snow",
    "springgreen",
    "steelblue",
    "tan",
    "teal",
    "thistle",
    "tomato",
    "turquoise",
    "violet",
    "wheat",
    "white",
    "whitesmoke",
    "yellow",
    "yellowgreen",
];
