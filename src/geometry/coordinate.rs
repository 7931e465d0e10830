/// Integer pixel position in screen-space.
///
/// Rows grow downwards. Coordinates of projected vertices may lie outside the viewport,
/// so both components are signed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }
}
