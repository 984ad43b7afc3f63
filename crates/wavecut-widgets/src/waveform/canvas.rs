//! Canvas Program for the waveform selector
//!
//! Translates iced mouse and touch events into [`CanvasInput`] messages and
//! paints the [`WaveformCanvas`] model. The model itself is owned by the
//! application and updated from those messages, following the iced 0.14
//! pattern of callback closures producing messages.

use iced::widget::canvas::{self, Event, Frame, Geometry, Program};
use iced::{mouse, touch, Point, Rectangle, Theme};

use super::input::CanvasInput;
use super::state::WaveformCanvas;
use crate::theme::WaveformPalette;

/// Which device owns the current gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Finger(touch::Finger),
}

/// Widget-local interaction state
///
/// Only tracks the pointer that started a gesture so a second finger (or
/// the mouse during a touch drag) cannot interfere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectionInteraction {
    pub pointer: Option<PointerSource>,
}

/// Canvas program for the selectable waveform
///
/// `on_input` wraps each translated event into the application's message.
pub struct SelectionCanvas<'a, Message, F>
where
    F: Fn(CanvasInput) -> Message,
{
    pub canvas: &'a WaveformCanvas,
    pub palette: WaveformPalette,
    pub on_input: F,
}

impl<'a, Message, F> Program<Message> for SelectionCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(CanvasInput) -> Message,
{
    type State = SelectionInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if let Some(input) = translate_event(interaction, event, bounds, cursor) {
            return Some(canvas::Action::publish((self.on_input)(input)).and_capture());
        }

        // The model learns its size from here; pointer inputs carry it too
        if bounds.size() != self.canvas.layout().size {
            return Some(canvas::Action::publish((self.on_input)(
                CanvasInput::Resized(bounds.size()),
            )));
        }
        None
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.pointer.is_some() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(position) if self.canvas.handle_at(position).is_some() => {
                mouse::Interaction::ResizingHorizontally
            }
            _ => mouse::Interaction::default(),
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.palette.background);
        self.canvas.render(&mut frame, &self.palette);

        vec![frame.into_geometry()]
    }
}

/// Map a raw iced event to canvas input
///
/// Only the pointer that started a gesture may move or end it. Positions are
/// converted to widget-local coordinates.
fn translate_event(
    interaction: &mut SelectionInteraction,
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
) -> Option<CanvasInput> {
    let size = bounds.size();
    let local = |position: Point| Point::new(position.x - bounds.x, position.y - bounds.y);

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            if interaction.pointer.is_some() {
                return None;
            }
            let position = cursor.position_in(bounds)?;
            interaction.pointer = Some(PointerSource::Mouse);
            Some(CanvasInput::PointerDown(position, size))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            (interaction.pointer == Some(PointerSource::Mouse))
                .then(|| CanvasInput::PointerMove(local(*position), size))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            end_gesture(interaction, PointerSource::Mouse, CanvasInput::PointerUp)
        }
        Event::Mouse(mouse::Event::CursorLeft) => {
            // Released outside the window: we will never see the button-up
            end_gesture(interaction, PointerSource::Mouse, CanvasInput::PointerCancel)
        }
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            if interaction.pointer.is_some() || !bounds.contains(*position) {
                return None;
            }
            interaction.pointer = Some(PointerSource::Finger(*id));
            Some(CanvasInput::PointerDown(local(*position), size))
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => {
            (interaction.pointer == Some(PointerSource::Finger(*id)))
                .then(|| CanvasInput::PointerMove(local(*position), size))
        }
        Event::Touch(touch::Event::FingerLifted { id, .. }) => {
            end_gesture(interaction, PointerSource::Finger(*id), CanvasInput::PointerUp)
        }
        Event::Touch(touch::Event::FingerLost { id, .. }) => {
            end_gesture(interaction, PointerSource::Finger(*id), CanvasInput::PointerCancel)
        }
        _ => None,
    }
}

fn end_gesture(
    interaction: &mut SelectionInteraction,
    source: PointerSource,
    input: CanvasInput,
) -> Option<CanvasInput> {
    if interaction.pointer != Some(source) {
        return None;
    }
    interaction.pointer = None;
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(20.0, 10.0), Size::new(100.0, 50.0))
    }

    fn mouse(event: mouse::Event) -> Event {
        Event::Mouse(event)
    }

    fn finger(event: touch::Event) -> Event {
        Event::Touch(event)
    }

    #[test]
    fn test_mouse_gesture_in_local_coordinates() {
        let mut interaction = SelectionInteraction::default();
        let cursor = mouse::Cursor::Available(Point::new(30.0, 20.0));
        let size = bounds().size();

        let down = translate_event(
            &mut interaction,
            &mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            bounds(),
            cursor,
        );
        assert_eq!(down, Some(CanvasInput::PointerDown(Point::new(10.0, 10.0), size)));
        assert_eq!(interaction.pointer, Some(PointerSource::Mouse));

        let moved = translate_event(
            &mut interaction,
            &mouse(mouse::Event::CursorMoved {
                position: Point::new(70.0, 20.0),
            }),
            bounds(),
            cursor,
        );
        assert_eq!(moved, Some(CanvasInput::PointerMove(Point::new(50.0, 10.0), size)));

        let up = translate_event(
            &mut interaction,
            &mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            bounds(),
            cursor,
        );
        assert_eq!(up, Some(CanvasInput::PointerUp));
        assert_eq!(interaction.pointer, None);
    }

    #[test]
    fn test_press_outside_bounds_is_ignored() {
        let mut interaction = SelectionInteraction::default();
        let input = translate_event(
            &mut interaction,
            &mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            bounds(),
            mouse::Cursor::Available(Point::new(500.0, 500.0)),
        );
        assert_eq!(input, None);
        assert_eq!(interaction.pointer, None);
    }

    #[test]
    fn test_moves_without_gesture_are_ignored() {
        let mut interaction = SelectionInteraction::default();
        let input = translate_event(
            &mut interaction,
            &mouse(mouse::Event::CursorMoved {
                position: Point::new(50.0, 20.0),
            }),
            bounds(),
            mouse::Cursor::Unavailable,
        );
        assert_eq!(input, None);
    }

    #[test]
    fn test_cursor_left_cancels_mouse_drag() {
        let mut interaction = SelectionInteraction {
            pointer: Some(PointerSource::Mouse),
        };
        let input = translate_event(
            &mut interaction,
            &mouse(mouse::Event::CursorLeft),
            bounds(),
            mouse::Cursor::Unavailable,
        );
        assert_eq!(input, Some(CanvasInput::PointerCancel));
        assert_eq!(interaction.pointer, None);
    }

    #[test]
    fn test_only_owning_finger_drives_gesture() {
        let mut interaction = SelectionInteraction::default();
        let (first, second) = (touch::Finger(1), touch::Finger(2));
        let cursor = mouse::Cursor::Unavailable;

        let down = translate_event(
            &mut interaction,
            &finger(touch::Event::FingerPressed {
                id: first,
                position: Point::new(40.0, 30.0),
            }),
            bounds(),
            cursor,
        );
        assert_eq!(
            down,
            Some(CanvasInput::PointerDown(Point::new(20.0, 20.0), bounds().size()))
        );

        // Second finger neither starts nor moves anything
        for event in [
            touch::Event::FingerPressed {
                id: second,
                position: Point::new(60.0, 30.0),
            },
            touch::Event::FingerMoved {
                id: second,
                position: Point::new(80.0, 30.0),
            },
            touch::Event::FingerLifted {
                id: second,
                position: Point::new(80.0, 30.0),
            },
        ] {
            assert_eq!(translate_event(&mut interaction, &finger(event), bounds(), cursor), None);
        }
        assert_eq!(interaction.pointer, Some(PointerSource::Finger(first)));

        // Mouse press during a touch gesture is ignored as well
        let press = translate_event(
            &mut interaction,
            &mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            bounds(),
            mouse::Cursor::Available(Point::new(50.0, 20.0)),
        );
        assert_eq!(press, None);

        let lost = translate_event(
            &mut interaction,
            &finger(touch::Event::FingerLost {
                id: first,
                position: Point::new(40.0, 30.0),
            }),
            bounds(),
            cursor,
        );
        assert_eq!(lost, Some(CanvasInput::PointerCancel));
        assert_eq!(interaction.pointer, None);
    }

    #[test]
    fn test_update_does_not_swallow_press_for_resize() {
        // Unmeasured model: every event arrives with a size mismatch
        let model = WaveformCanvas::default();
        let program = SelectionCanvas {
            canvas: &model,
            palette: WaveformPalette::default(),
            on_input: |input: CanvasInput| input,
        };
        let mut interaction = SelectionInteraction::default();
        let cursor = mouse::Cursor::Available(Point::new(30.0, 20.0));

        let press = program.update(
            &mut interaction,
            &mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            bounds(),
            cursor,
        );
        assert!(press.is_some());
        assert_eq!(interaction.pointer, Some(PointerSource::Mouse));

        let release = program.update(
            &mut interaction,
            &mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            bounds(),
            cursor,
        );
        assert!(release.is_some());
        assert_eq!(interaction.pointer, None);

        // Non-pointer events still report the new size
        let idle = program.update(
            &mut interaction,
            &mouse(mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            }),
            bounds(),
            cursor,
        );
        assert!(idle.is_some());
    }

    #[test]
    fn test_release_delivered_even_when_size_changed() {
        // Bounds differ from whatever the model last saw; the release must
        // still come through so the gesture ends
        let mut interaction = SelectionInteraction {
            pointer: Some(PointerSource::Mouse),
        };
        let wider = Rectangle::new(Point::ORIGIN, Size::new(300.0, 50.0));
        let up = translate_event(
            &mut interaction,
            &mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            wider,
            mouse::Cursor::Available(Point::new(10.0, 10.0)),
        );
        assert_eq!(up, Some(CanvasInput::PointerUp));
        assert_eq!(interaction.pointer, None);
    }
}
