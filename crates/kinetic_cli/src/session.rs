//! Scripted headless sessions
//!
//! A session visits a list of routes in order, letting the animation clock
//! run for a fixed number of frames after each step. The step `back` pops
//! the navigation stack instead of pushing.

use anyhow::{Context, Result};
use kinetic_app::{App, Route};
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Visit(Route),
    Back,
}

impl Step {
    pub fn parse(input: &str) -> Result<Self> {
        if input.eq_ignore_ascii_case("back") {
            return Ok(Step::Back);
        }
        let route = input
            .parse::<Route>()
            .with_context(|| format!("invalid session step '{input}'"))?;
        Ok(Step::Visit(route))
    }
}

pub fn parse_steps(inputs: &[String]) -> Result<Vec<Step>> {
    inputs.iter().map(|s| Step::parse(s)).collect()
}

/// Apply every step, then run `frames` frames after each one
pub fn run(app: &mut App, steps: &[Step], frames: u32) {
    settle(app, frames);
    for step in steps {
        match step {
            Step::Visit(route) => app.push(*route),
            Step::Back => {
                if !app.back() {
                    info!("already at the root; back ignored");
                }
            }
        }
        settle(app, frames);
    }
}

fn settle(app: &mut App, frames: u32) {
    let animating = app.advance_frames(frames);
    debug!(
        route = %app.current_route(),
        clock_ms = app.scheduler().now_ms(),
        animating,
        "frames advanced"
    );
}
