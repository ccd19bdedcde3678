/// The ink colour of a laid-out span. Listing exports are overwhelmingly
/// monochrome, so only the RGB and grey device spaces are modelled.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, and b range from 0.0 to 1.0
    Rgb { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; level ranges from 0.0 (black) to 1.0 (white)
    Grey { level: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::Rgb { r, g, b }
    }

    /// Create a new greyscale colour; level ranges from 0.0 to 1.0
    pub fn new_grey(level: f32) -> Colour {
        Colour::Grey { level }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { level: 0.0 };
    pub const WHITE: Colour = Colour::Grey { level: 1.0 };
    pub const DARK_GREY: Colour = Colour::Grey { level: 0.25 };
    pub const GREY: Colour = Colour::Grey { level: 0.5 };
}
