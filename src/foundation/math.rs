use crate::foundation::core::Point;

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Inverse of premultiplication for one channel. `a` must be non-zero.
pub(crate) fn unpremul_u8(c: u8, a: u8) -> u8 {
    let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
    v.min(255) as u8
}

/// Point at `radius` from `center` along `angle_rad`, measured clockwise from 12 o'clock.
pub(crate) fn polar(center: Point, angle_rad: f64, radius: f64) -> Point {
    Point::new(
        center.x + angle_rad.sin() * radius,
        center.y - angle_rad.cos() * radius,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
