/// Drawing surface and input source driven by the render loop
use crate::config::Color;
use crate::interaction::{PointerButtons, PointerPosition};
use crate::projection::ScreenPoint;

/// Input events a frontend reports once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    PointerMove {
        position: PointerPosition,
        buttons: PointerButtons,
    },
}

/// A fixed-size square window the viewer draws into.
///
/// Coordinates are window pixels; frontends map them onto whatever they
/// actually draw on.
pub trait Canvas {
    type Error;

    fn clear(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Filled disc centred on `center`
    fn draw_point(
        &mut self,
        center: ScreenPoint,
        color: Color,
        radius: f64,
    ) -> Result<(), Self::Error>;

    fn draw_line(
        &mut self,
        from: ScreenPoint,
        to: ScreenPoint,
        color: Color,
        width: f64,
    ) -> Result<(), Self::Error>;

    /// Drain pending events without blocking
    fn poll_events(&mut self) -> Result<Vec<InputEvent>, Self::Error>;

    fn present(&mut self) -> Result<(), Self::Error>;
}
