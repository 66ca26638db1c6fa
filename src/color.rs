// CSS-style color strings -> packed 0x00RRGGBB pixels.
// The brush keeps its color as text (what the user picked); we only turn it
// into a pixel value at the moment a stroke is rasterized.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Color used when a brush string can't be understood.
pub const FALLBACK: u32 = 0x00_00_00_00;

/// Pack three channels as 0x00RRGGBB.
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Split a packed pixel back into (r, g, b).
#[inline]
pub fn unpack_rgb(px: u32) -> (u8, u8, u8) {
    (((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
}

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a handful of names.
pub fn parse_css_color(text: &str) -> Option<u32> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = text.to_ascii_lowercase();
    if let Some(args) = lower.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        return parse_rgb_args(args);
    }
    named(&lower)
}

/// Like [`parse_css_color`] but never fails: unknown strings draw in black.
pub fn resolve(text: &str) -> u32 {
    parse_css_color(text).unwrap_or(FALLBACK)
}

fn parse_hex(hex: &str) -> Option<u32> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            // "#f80" means "#ff8800": every digit doubles.
            let mut channels = [0u8; 3];
            for (i, ch) in hex.chars().enumerate() {
                let d = ch.to_digit(16)? as u8;
                channels[i] = d * 17;
            }
            Some(pack_rgb(channels[0], channels[1], channels[2]))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(pack_rgb(r, g, b))
        }
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<u32> {
    let mut parts = args.split(',').map(|p| p.trim().parse::<f64>());
    let mut next = || -> Option<u8> {
        let v = parts.next()?.ok()?;
        Some(v.round().clamp(0.0, 255.0) as u8)
    };
    let (r, g, b) = (next()?, next()?, next()?);
    if parts.next().is_some() {
        return None;
    }
    Some(pack_rgb(r, g, b))
}

fn named(name: &str) -> Option<u32> {
    let px = match name {
        "black" => 0x00_00_00_00,
        "white" => 0x00_FF_FF_FF,
        "red" => 0x00_FF_00_00,
        "green" => 0x00_00_80_00,
        "blue" => 0x00_00_00_FF,
        "yellow" => 0x00_FF_FF_00,
        "orange" => 0x00_FF_A5_00,
        "purple" => 0x00_80_00_80,
        "gray" | "grey" => 0x00_80_80_80,
        _ => return None,
    };
    Some(px)
}
