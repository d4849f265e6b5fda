//! Deterministic color gradients for ranking isochrone groups.
//!
//! A `ColorScale` is a fixed path through a few color stops (low → mid → high).
//! `colors(n)` samples it at `n` evenly spaced positions. Interpolation runs in
//! Oklab by default so adjacent steps stay distinguishable for large `n`; the
//! HSL mode reproduces the older hue-based look.
//!
//! Sampling rules
//! - `n = 0` → empty, `n = 1` → the low stop, `n ≥ 2` → `t_i = i / (n - 1)`,
//!   so the first and last colors are exactly the end stops.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB color, serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    /// Low stop of the reachability scale ("near").
    pub const RED: Color = Color::rgb(0xf4, 0x42, 0x42);
    /// Middle stop.
    pub const AMBER: Color = Color::rgb(0xf4, 0xbe, 0x41);
    /// High stop ("far").
    pub const GREEN: Color = Color::rgb(0x41, 0xf4, 0x97);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` / `rrggbb` (also the `#rgb` shorthand).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        // from_str_radix alone would accept a leading sign
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            3 => {
                let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            _ => None,
        }
    }

    fn to_unit(self) -> Vector3<f64> {
        Vector3::new(self.r as f64, self.g as f64, self.b as f64) / 255.0
    }

    fn from_unit(v: Vector3<f64>) -> Self {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(q(v.x), q(v.y), q(v.z))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s).ok_or_else(|| format!("invalid hex color {s:?}"))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// Color space the scale interpolates in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    #[default]
    Oklab,
    Hsl,
}

impl FromStr for Interpolation {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "oklab" => Ok(Interpolation::Oklab),
            "hsl" => Ok(Interpolation::Hsl),
            other => Err(format!("unknown interpolation {other:?} (expected oklab|hsl)")),
        }
    }
}

/// Multi-stop color path. Invariant: at least one stop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScaleRepr")]
pub struct ColorScale {
    stops: Vec<Color>,
    mode: Interpolation,
}

#[derive(Deserialize)]
struct ScaleRepr {
    stops: Vec<Color>,
    #[serde(default)]
    mode: Interpolation,
}

impl TryFrom<ScaleRepr> for ColorScale {
    type Error = String;
    fn try_from(r: ScaleRepr) -> Result<Self, Self::Error> {
        ColorScale::new(r.stops, r.mode).ok_or_else(|| "color scale needs at least one stop".into())
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            stops: vec![Color::RED, Color::AMBER, Color::GREEN],
            mode: Interpolation::Oklab,
        }
    }
}

impl ColorScale {
    /// `None` if `stops` is empty.
    pub fn new(stops: Vec<Color>, mode: Interpolation) -> Option<Self> {
        if stops.is_empty() {
            return None;
        }
        Some(Self { stops, mode })
    }

    pub fn with_mode(mut self, mode: Interpolation) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> Interpolation {
        self.mode
    }

    /// Exactly `n` colors along the path.
    pub fn colors(&self, n: usize) -> Vec<Color> {
        match n {
            0 => Vec::new(),
            1 => vec![self.stops[0]],
            _ => (0..n)
                .map(|i| self.sample(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }

    /// Color at position `t ∈ [0,1]` (clamped).
    pub fn sample(&self, t: f64) -> Color {
        let k = self.stops.len();
        if k == 1 {
            return self.stops[0];
        }
        let pos = t.clamp(0.0, 1.0) * (k - 1) as f64;
        let idx = (pos.floor() as usize).min(k - 2);
        let local = pos - idx as f64;
        let (a, b) = (self.stops[idx], self.stops[idx + 1]);
        match self.mode {
            Interpolation::Oklab => mix_oklab(a, b, local),
            Interpolation::Hsl => mix_hsl(a, b, local),
        }
    }
}

/// `n` colors of the default reachability scale.
pub fn gradient(n: usize) -> Vec<Color> {
    ColorScale::default().colors(n)
}

// --- Oklab -------------------------------------------------------------------

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[rustfmt::skip]
fn lin_to_lms() -> Matrix3<f64> {
    Matrix3::new(
        0.412_221_470_8, 0.536_332_536_3, 0.051_445_992_9,
        0.211_903_498_2, 0.680_699_545_1, 0.107_396_956_6,
        0.088_302_461_9, 0.281_718_837_6, 0.629_978_700_5,
    )
}

#[rustfmt::skip]
fn lms_to_lab() -> Matrix3<f64> {
    Matrix3::new(
        0.210_454_255_3, 0.793_617_785_0, -0.004_072_046_8,
        1.977_998_495_1, -2.428_592_205_0, 0.450_593_709_9,
        0.025_904_037_1, 0.782_771_766_2, -0.808_675_766_0,
    )
}

#[rustfmt::skip]
fn lab_to_lms() -> Matrix3<f64> {
    Matrix3::new(
        1.0, 0.396_337_777_4, 0.215_803_757_3,
        1.0, -0.105_561_345_8, -0.063_854_172_8,
        1.0, -0.089_484_177_5, -1.291_485_548_0,
    )
}

#[rustfmt::skip]
fn lms_to_lin() -> Matrix3<f64> {
    Matrix3::new(
        4.076_741_662_1, -3.307_711_591_3, 0.230_969_929_2,
        -1.268_438_004_6, 2.609_757_401_1, -0.341_319_396_5,
        -0.004_196_086_3, -0.703_418_614_7, 1.707_614_701_0,
    )
}

fn to_oklab(c: Color) -> Vector3<f64> {
    let lin = c.to_unit().map(srgb_to_linear);
    let lms = (lin_to_lms() * lin).map(f64::cbrt);
    lms_to_lab() * lms
}

fn from_oklab(lab: Vector3<f64>) -> Color {
    let lms = (lab_to_lms() * lab).map(|v| v * v * v);
    Color::from_unit((lms_to_lin() * lms).map(linear_to_srgb))
}

fn mix_oklab(a: Color, b: Color, t: f64) -> Color {
    let (la, lb) = (to_oklab(a), to_oklab(b));
    from_oklab(la + (lb - la) * t)
}

// --- HSL ---------------------------------------------------------------------

/// (hue degrees or NaN for greys, saturation, lightness)
fn to_hsl(c: Color) -> Vector3<f64> {
    let v = c.to_unit();
    let max = v.max();
    let min = v.min();
    let l = (max + min) / 2.0;
    let d = max - min;
    if d == 0.0 {
        return Vector3::new(f64::NAN, 0.0, l);
    }
    let s = if l < 0.5 { d / (max + min) } else { d / (2.0 - max - min) };
    let h = if max == v.x {
        (v.y - v.z) / d + if v.y < v.z { 6.0 } else { 0.0 }
    } else if max == v.y {
        (v.z - v.x) / d + 2.0
    } else {
        (v.x - v.y) / d + 4.0
    };
    Vector3::new(h * 60.0, s, l)
}

fn from_hsl(hsl: Vector3<f64>) -> Color {
    let (h, s, l) = (hsl.x, hsl.y, hsl.z);
    if s == 0.0 || h.is_nan() {
        return Color::from_unit(Vector3::new(l, l, l));
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hk = h.rem_euclid(360.0) / 360.0;
    let channel = |mut t: f64| {
        t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };
    Color::from_unit(Vector3::new(
        channel(hk + 1.0 / 3.0),
        channel(hk),
        channel(hk - 1.0 / 3.0),
    ))
}

fn mix_hsl(a: Color, b: Color, t: f64) -> Color {
    let (ha, hb) = (to_hsl(a), to_hsl(b));
    // Greys have no hue: borrow the other end's.
    let (h0, h1) = match (ha.x.is_nan(), hb.x.is_nan()) {
        (true, true) => (0.0, 0.0),
        (true, false) => (hb.x, hb.x),
        (false, true) => (ha.x, ha.x),
        (false, false) => (ha.x, hb.x),
    };
    // shortest arc
    let mut dh = h1 - h0;
    if dh > 180.0 {
        dh -= 360.0;
    } else if dh < -180.0 {
        dh += 360.0;
    }
    from_hsl(Vector3::new(
        h0 + dh * t,
        ha.y + (hb.y - ha.y) * t,
        ha.z + (hb.z - ha.z) * t,
    ))
}
