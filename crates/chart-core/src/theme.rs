// File: crates/chart-core/src/theme.rs
// Summary: Backend-neutral colours and the dashboard's theme presets.

/// 8-bit RGBA colour; backends convert to their own colour type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let h = hex.trim().trim_start_matches('#');
        if !h.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(h.get(i..i + 2)?, 16).ok();
        match h.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: byte(6)? }),
            _ => None,
        }
    }

    /// CSS/SVG colour literal.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f64 / 255.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub line_stroke: Color,
    pub marker_fill: Color,
    pub ratio_given: Color,
    pub ratio_received: Color,
    pub ratio_label: Color,
    pub bar_fill: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 235, 235, 245),
            tick: Color::from_argb(255, 255, 255, 255),
            line_stroke: Color::from_argb(255, 64, 160, 255),
            marker_fill: Color::from_argb(255, 255, 0, 0),
            ratio_given: Color::from_argb(255, 0x00, 0x80, 0x00),
            ratio_received: Color::from_argb(255, 0xff, 0x00, 0x00),
            ratio_label: Color::from_argb(255, 255, 255, 255),
            bar_fill: Color::from_argb(255, 96, 156, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            grid: Color::from_argb(255, 230, 230, 235),
            axis_line: Color::from_argb(255, 0, 0, 0),
            axis_label: Color::from_argb(255, 20, 20, 30),
            tick: Color::from_argb(255, 60, 60, 70),
            line_stroke: Color::from_argb(255, 0, 0, 255),
            marker_fill: Color::from_argb(255, 200, 30, 30),
            ratio_given: Color::from_argb(255, 0x00, 0x80, 0x00),
            ratio_received: Color::from_argb(255, 0xff, 0x00, 0x00),
            ratio_label: Color::from_argb(255, 255, 255, 255),
            bar_fill: Color::from_argb(255, 40, 120, 200),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            line_stroke: Color::from_argb(255, 0x00, 0xff, 0xff),
            marker_fill: Color::from_argb(255, 0xff, 0xff, 0x00),
            ratio_given: Color::from_argb(255, 0x00, 0xff, 0x00),
            ratio_received: Color::from_argb(255, 0xff, 0x00, 0x00),
            ratio_label: Color::from_argb(255, 0xff, 0xff, 0xff),
            bar_fill: Color::from_argb(255, 0x00, 0xaa, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
