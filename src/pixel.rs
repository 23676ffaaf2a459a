/// A colormap entry or 24-bit pixel as stored on disk (blue first).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bgr {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

/// A 32-bit pixel as stored on disk (blue first, alpha last).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bgra {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub alpha: u8,
}

/// Output pixel of the `rgb24` buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Output pixel of the `argb32` buffer (alpha first).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Argb {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Bgr {
    pub const fn from_bytes(b: [u8; 3]) -> Self {
        Self {
            blue: b[0],
            green: b[1],
            red: b[2],
        }
    }

    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            red: self.red,
            green: self.green,
            blue: self.blue,
        }
    }

    /// Sources without alpha are fully opaque.
    pub const fn to_argb(self) -> Argb {
        Argb {
            alpha: 255,
            red: self.red,
            green: self.green,
            blue: self.blue,
        }
    }
}

impl Bgra {
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self {
            blue: b[0],
            green: b[1],
            red: b[2],
            alpha: b[3],
        }
    }

    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            red: self.red,
            green: self.green,
            blue: self.blue,
        }
    }

    pub const fn to_argb(self) -> Argb {
        Argb {
            alpha: self.alpha,
            red: self.red,
            green: self.green,
            blue: self.blue,
        }
    }
}

impl Rgb {
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Argb {
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.alpha, self.red, self.green, self.blue]
    }
}
