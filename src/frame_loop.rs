use crate::countdown::{Countdown, Display, MessageAnchor};
use crate::platform::{Clock, InputEvent, InputSource};
use crate::render::{Canvas, Fonts, Rect, Rgb, Viewport, WHITE};
use crate::sim::{FieldReport, FireworksField, SimConfig, Starfield};
use crossterm::event::KeyCode;
use glam::Vec2;
use std::io;

const STAR_COUNT: usize = 100;
const CLOSE_COLOR: Rgb = (200, 50, 50);
const CLOSE_SIZE: f32 = 40.0;
const TIMER_Y: f32 = 50.0;

/// One show: background, fireworks, countdown overlay and close button.
pub struct FrameLoop<D: Countdown> {
    viewport: Viewport,
    config: SimConfig,
    countdown: D,
    fonts: Fonts,
    background: Rgb,
    close_button: Rect,
    stars: Starfield,
    field: FireworksField,
}

impl<D: Countdown> FrameLoop<D> {
    pub fn new(
        viewport: Viewport,
        config: SimConfig,
        countdown: D,
        background: Rgb,
        mut rng: fastrand::Rng,
    ) -> Self {
        let stars = Starfield::new(viewport.width, viewport.height, STAR_COUNT, &mut rng);
        let field = FireworksField::new(viewport.width, viewport.height, rng.fork());

        // macOS puts window controls on the left
        let close_x = if cfg!(target_os = "macos") {
            10.0
        } else {
            viewport.width - CLOSE_SIZE - 10.0
        };

        Self {
            viewport,
            config,
            countdown,
            fonts: Fonts::for_viewport(&viewport),
            background,
            close_button: Rect::new(close_x, 10.0, CLOSE_SIZE, CLOSE_SIZE),
            stars,
            field,
        }
    }

    pub fn close_button(&self) -> Rect {
        self.close_button
    }

    pub fn field(&self) -> &FireworksField {
        &self.field
    }

    pub fn quit_requested(&self, events: &[InputEvent]) -> bool {
        events.iter().any(|ev| match ev {
            InputEvent::Quit => true,
            InputEvent::Key(code) => matches!(code, KeyCode::Esc | KeyCode::Char('q')),
            InputEvent::PointerPressed(pos) => self.close_button.contains(*pos),
        })
    }

    pub fn update(&mut self) -> FieldReport {
        self.stars.update();
        self.field.update(&self.config)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, now: chrono::NaiveDateTime, ticks: u64) {
        canvas.clear(self.background);
        self.stars.draw(canvas);
        self.field.draw(canvas, &self.config);

        let center_x = self.viewport.width / 2.0;
        match self.countdown.display(now) {
            Display::Remaining(text) => {
                canvas.draw_text(&text, self.fonts.timer, WHITE, Vec2::new(center_x, TIMER_Y));
            }
            Display::Celebrate => {
                let font = if self.countdown.pulses() {
                    self.fonts.message.scaled(pulse(ticks))
                } else {
                    self.fonts.message
                };
                let anchor = match self.countdown.message_anchor() {
                    MessageAnchor::Center => Vec2::new(center_x, self.viewport.height / 2.0),
                    MessageAnchor::TopCenter => Vec2::new(center_x, self.viewport.height * 0.15),
                };
                canvas.draw_text(self.countdown.message(), font, WHITE, anchor);
            }
        }

        canvas.fill_rect(self.close_button, CLOSE_COLOR, 255);
        canvas.draw_text("X", self.fonts.close, WHITE, self.close_button.center());
    }

    /// Run until quit. Returns the number of frames presented.
    pub fn run<C, I, K>(&mut self, canvas: &mut C, input: &mut I, clock: &mut K) -> io::Result<u64>
    where
        C: Canvas,
        I: InputSource,
        K: Clock,
    {
        let mut events = Vec::new();
        let mut frames = 0u64;
        log::info!(
            "show started: {}x{} cells, {:.1} units per pixel",
            self.viewport.cols,
            self.viewport.rows,
            self.viewport.scale
        );

        loop {
            events.clear();
            input.drain(&mut events)?;
            if self.quit_requested(&events) {
                break;
            }

            let report = self.update();
            if report.launched || report.exploded > 0 || report.removed > 0 {
                log::debug!(
                    "frame {}: {:?}, {} rockets, {} particles",
                    frames,
                    report,
                    self.field.rockets().len(),
                    self.field.particle_count()
                );
            }

            self.draw(canvas, clock.now(), clock.ticks());
            canvas.present()?;
            frames += 1;

            clock.wait_frame();
        }

        log::info!("show stopped after {} frames", frames);
        Ok(frames)
    }
}

/// Scale factor for the pulsing celebration message.
pub fn pulse(ticks: u64) -> f32 {
    1.0 + 0.1 * (ticks as f32 / 200.0).sin()
}
