//! Mouse events to terminal click positions.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// A left-button press at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickPosition {
    pub column: u16,
    pub row: u16,
}

/// Extract the position of a left-button press. Moves, drags, releases,
/// scrolls and other buttons are not clicks.
pub fn click_position(event: MouseEvent) -> Option<ClickPosition> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(ClickPosition {
            column: event.column,
            row: event.row,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_press_is_a_click() {
        assert_eq!(
            click_position(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(ClickPosition { column: 12, row: 4 })
        );
    }

    #[test]
    fn other_events_are_not_clicks() {
        assert_eq!(click_position(mouse(MouseEventKind::Up(MouseButton::Left))), None);
        assert_eq!(click_position(mouse(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(click_position(mouse(MouseEventKind::Moved)), None);
        assert_eq!(click_position(mouse(MouseEventKind::ScrollDown)), None);
    }
}
