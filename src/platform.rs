//! Terminal input and wall-clock collaborators for the frame loop.

use crate::render::Viewport;
use chrono::{Local, NaiveDateTime};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use glam::Vec2;
use std::io;
use std::time::{Duration, Instant};

pub const FRAME_RATE: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    Key(KeyCode),
    /// Logical position of a mouse button press
    PointerPressed(Vec2),
}

pub trait InputSource {
    /// Append every pending event without blocking.
    fn drain(&mut self, events: &mut Vec<InputEvent>) -> io::Result<()>;
}

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
    /// Milliseconds since the clock was created
    fn ticks(&self) -> u64;
    /// Block until the next frame boundary.
    fn wait_frame(&mut self);
}

pub struct TermInput {
    viewport: Viewport,
}

impl TermInput {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    fn translate(&self, event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    Some(InputEvent::Quit)
                } else {
                    Some(InputEvent::Key(key.code))
                }
            }
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => Some(
                InputEvent::PointerPressed(self.viewport.cell_center(mouse.column, mouse.row)),
            ),
            _ => None,
        }
    }
}

impl InputSource for TermInput {
    fn drain(&mut self, events: &mut Vec<InputEvent>) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Some(ev) = self.translate(event::read()?) {
                events.push(ev);
            }
        }
        Ok(())
    }
}

/// Local wall clock with a fixed-rate frame limiter.
pub struct SystemClock {
    start: Instant,
    frame: Duration,
    next_frame: Instant,
}

impl SystemClock {
    pub fn new(fps: u32) -> Self {
        let start = Instant::now();
        let frame = Duration::from_secs(1) / fps.max(1);
        Self {
            start,
            frame,
            next_frame: start + frame,
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn ticks(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn wait_frame(&mut self) {
        let now = Instant::now();
        if now < self.next_frame {
            std::thread::sleep(self.next_frame - now);
            self.next_frame += self.frame;
        } else {
            // Overran: restart the schedule rather than bursting to catch up
            self.next_frame = now + self.frame;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseButton, MouseEvent};

    fn input() -> TermInput {
        TermInput::new(Viewport::from_terminal(80, 24))
    }

    #[test]
    fn test_ctrl_c_is_quit() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(input().translate(ev), Some(InputEvent::Quit));
    }

    #[test]
    fn test_plain_keys_pass_through() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(input().translate(ev), Some(InputEvent::Key(KeyCode::Esc)));
    }

    #[test]
    fn test_mouse_down_maps_to_logical_point() {
        let ev = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 79,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        match input().translate(ev) {
            Some(InputEvent::PointerPressed(p)) => {
                assert!((p.x - 79.5 * 22.5).abs() < 1e-3);
                assert!((p.y - 22.5).abs() < 1e-3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_other_events_ignored() {
        let i = input();
        assert_eq!(i.translate(Event::Resize(100, 40)), None);
        assert_eq!(i.translate(Event::FocusGained), None);
        let up = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(i.translate(up), None);
    }

    #[test]
    fn test_limiter_paces_frames() {
        let mut clock = SystemClock::new(200);
        let start = Instant::now();
        for _ in 0..4 {
            clock.wait_frame();
        }
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
