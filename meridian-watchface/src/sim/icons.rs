//! Placeholder weather icon images
//!
//! The simulator has no image resources; every handle resolves to the same
//! 25x25 disc.

use embedded_graphics::prelude::Size;
use meridian_display::{Bitmap, BitmapHandle, BitmapSource};

const ICON_SIZE: u32 = 25;
const STRIDE: usize = (ICON_SIZE as usize).div_ceil(8);

const fn disc() -> [u8; STRIDE * ICON_SIZE as usize] {
    let mut data = [0u8; STRIDE * ICON_SIZE as usize];
    let center = (ICON_SIZE / 2) as i32;
    let radius_sq = center * center;
    let mut y = 0;
    while y < ICON_SIZE as i32 {
        let mut x = 0;
        while x < ICON_SIZE as i32 {
            let (dx, dy) = (x - center, y - center);
            if dx * dx + dy * dy <= radius_sq {
                data[y as usize * STRIDE + x as usize / 8] |= 0x80 >> (x % 8);
            }
            x += 1;
        }
        y += 1;
    }
    data
}

static DISC: [u8; STRIDE * ICON_SIZE as usize] = disc();

/// Bitmap source answering every handle with a disc
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscIcons;

impl BitmapSource for DiscIcons {
    fn bitmap(&self, _handle: BitmapHandle) -> Option<Bitmap<'_>> {
        Some(Bitmap::new(Size::new(ICON_SIZE, ICON_SIZE), &DISC))
    }
}
