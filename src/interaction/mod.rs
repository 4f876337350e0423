//! Browser-independent state machines behind the page's interactive widgets.
//! The Leptos components in `app` only translate DOM events and timers into
//! calls on these types.

pub mod carousel;
pub mod reveal;
pub mod scroll;
pub mod tilt;
pub mod typewriter;

pub use carousel::{CarouselController, CarouselError, Navigation};
pub use reveal::{Observation, RevealTracker, REVEAL_THRESHOLD};
pub use scroll::ScrollPosition;
pub use typewriter::Typewriter;
