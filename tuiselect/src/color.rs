use palette::{IntoColor, Oklch, Srgb};

/// Colors are specified in oklch or srgb; lightness adjustments happen in
/// oklch space regardless of how the color was constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn lighten(self, amount: f32) -> Self {
        let oklch = self.to_oklch();
        Self::Oklch {
            l: (oklch.l + amount).clamp(0.0, 1.0),
            c: oklch.chroma,
            h: oklch.hue.into_positive_degrees(),
        }
    }

    pub fn darken(self, amount: f32) -> Self {
        self.lighten(-amount)
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => {
                let srgb: Srgb = Oklch::new(*l, *c, *h).into_color();
                let (r, g, b) = srgb.into_format::<u8>().into_components();
                Rgb::new(r, g, b)
            }
        }
    }

    fn to_oklch(&self) -> Oklch {
        match self {
            Self::Oklch { l, c, h } => Oklch::new(*l, *c, *h),
            Self::Rgb { r, g, b } => {
                let srgb = Srgb::new(*r, *g, *b).into_format::<f32>();
                srgb.into_color()
            }
        }
    }
}
