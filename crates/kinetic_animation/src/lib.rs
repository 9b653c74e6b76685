//! Kinetic Animation System
//!
//! Spring physics, timed transitions and the interaction animators shared by
//! every Kinetic component.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs that settle exactly on target
//! - **Timing Curves**: fixed-duration transitions with easing
//! - **Scheduler**: virtual-clock frame scheduler with cancellable deferred starts
//! - **Entrance**: delayed, single-shot enter animations (scale, slide, fade)
//! - **Press Feedback**: shrink/dim on pointer-down, spring back on release
//! - **Stagger**: position-based delays for cascading list entrances

pub mod easing;
pub mod entrance;
pub mod item;
pub mod motion;
pub mod press;
pub mod scheduler;
pub mod spring;
pub mod stagger;
pub mod timing;
pub mod value;

pub use easing::Easing;
pub use entrance::{EntranceAnimator, EntranceConfig, EntranceMotion, EntrancePhase};
pub use item::ItemMotion;
pub use motion::MotionFrame;
pub use press::{PressConfig, PressFeedback};
pub use scheduler::{
    AnimationScheduler, SchedulerHandle, StartBatch, TimerId, Transition, ValueId,
    DEFAULT_MAX_STEP_MS,
};
pub use spring::{Spring, SpringConfig};
pub use stagger::{Stagger, Staggered};
pub use timing::{Timing, TimingConfig};
pub use value::AnimatedValue;
