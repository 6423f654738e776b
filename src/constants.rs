/// Application-wide constants for icon geometry and the color palette

pub mod icon {
    /// Icon sizes emitted by the generator, in pixels (browser extension set)
    pub const SIZES: [usize; 3] = [16, 48, 128];

    /// Side length of the reference grid the logo geometry is drawn on.
    /// Shape coordinates are expressed in these units and scaled to the
    /// target size at raster time.
    pub const DESIGN_GRID: f64 = 32.0;
}

pub mod palette {
    use crate::raster::Rgb;

    /// Dark page background behind the disc
    pub const BACKDROP: Rgb = (15, 17, 23);

    /// Backdrop disc gradient, top-left endpoint (#4f8ef7)
    pub const DISC_START: Rgb = (0x4f, 0x8e, 0xf7);

    /// Backdrop disc gradient, bottom-right endpoint (#2d5fcf)
    pub const DISC_END: Rgb = (0x2d, 0x5f, 0xcf);

    /// Text strokes on the book page
    pub const PAGE_TEXT: Rgb = (255, 255, 255);

    /// Outer glow of the lightbulb
    pub const BULB_GLOW: Rgb = (255, 220, 100);

    /// Bulb core and ray color
    pub const BULB_CORE: Rgb = (255, 200, 80);
}
