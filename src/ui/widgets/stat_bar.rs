// SPDX-License-Identifier: MPL-2.0
//! Stat bar widget using Canvas for the animated fill.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Height of the drawn track.
const TRACK_HEIGHT: f32 = 10.0;

/// Horizontal bar with a partial fill.
pub struct StatBar {
    cache: Cache,
    fraction: f32, // Current fill, 0-1
    track: Color,
    fill: Color,
}

impl StatBar {
    /// Creates a bar filled to `fraction` of its width.
    #[must_use]
    pub fn new(fraction: f32, track: Color, fill: Color) -> Self {
        Self {
            cache: Cache::default(),
            fraction: fraction.clamp(0.0, 1.0),
            track,
            fill,
        }
    }

    /// Creates a Canvas widget from this bar.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(TRACK_HEIGHT * 2.0))
            .into()
    }
}

impl<Message> canvas::Program<Message> for StatBar {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let width = frame.width();
                let y = (frame.height() - TRACK_HEIGHT) / 2.0;

                let track = Path::rectangle(Point::new(0.0, y), Size::new(width, TRACK_HEIGHT));
                frame.fill(&track, self.track);

                let fill_width = width * self.fraction;
                if fill_width > 0.0 {
                    let fill =
                        Path::rectangle(Point::new(0.0, y), Size::new(fill_width, TRACK_HEIGHT));
                    frame.fill(&fill, self.fill);
                }
            });

        vec![geometry]
    }
}
