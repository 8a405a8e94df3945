use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::generators::{Generator, StepResult};
use crate::renderer;

pub const DEFAULT_FPS: u32 = 60;

// clear screen, cursor home
const CLEAR: &str = "\x1B[2J\x1B[H";

/// Caps the loop at a fixed frame rate by sleeping off whatever is left of
/// the frame. An fps of zero never sleeps.
pub struct FrameClock {
    frame: Option<Duration>,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let frame = if fps == 0 {
            None
        } else {
            Some(Duration::from_secs(1) / fps)
        };
        Self {
            frame,
            last_frame: Instant::now(),
        }
    }

    /// Waits for the end of the current frame and returns how long the frame
    /// actually took.
    pub fn tick(&mut self) -> Duration {
        if let Some(frame) = self.frame {
            let elapsed = self.last_frame.elapsed();
            if elapsed < frame {
                thread::sleep(frame - elapsed);
            }
        }
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        delta
    }
}

/// Drives a generator one step per frame and redraws the maze after each
/// step.
pub struct Presenter<W> {
    out: W,
    clock: FrameClock,
    animate: bool,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, fps: u32, animate: bool) -> Self {
        Self {
            out,
            clock: FrameClock::new(fps),
            animate,
        }
    }

    /// Runs the generator to completion and returns the number of steps it
    /// took.
    pub fn run(&mut self, generator: &mut dyn Generator) -> io::Result<usize> {
        if !self.animate {
            generator.generate_maze();
            self.draw(generator, false)?;
            return Ok(generator.steps());
        }

        loop {
            self.draw(generator, true)?;
            let result = generator.step_generation();
            let delta = self.clock.tick();
            if let StepResult::Carved { to, .. } = result {
                debug!("frame {:?}, head at {:?}", delta, to);
            }
            if result == StepResult::Done {
                break;
            }
        }

        self.draw(generator, true)?;
        Ok(generator.steps())
    }

    fn draw(&mut self, generator: &dyn Generator, clear: bool) -> io::Result<()> {
        if clear {
            self.out.write_all(CLEAR.as_bytes())?;
        }
        let frame = renderer::render(generator.grid(), generator.current());
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
