use serde::{Serialize, Deserialize};

mod carousel;
mod cycler;
mod gesture;
mod subscriber;

pub use carousel::Carousel;
pub use cycler::IndexCycler;
pub use gesture::{SwipeGestureInterpreter, SwipeDecision, GestureState, DEFAULT_SWIPE_THRESHOLD};
pub use subscriber::SelectionSubscriber;

/// Navigable UI regions. Each owns an independent cycler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    /// Projects solar system carousel
    Projects,
    /// Desktop experience timeline
    Timeline,
    /// Mobile swipeable journey cards
    JourneyCards,
    /// Rotating hero subtitles
    Subtitles,
}

impl Surface {
    pub fn label(&self) -> &'static str {
        match self {
            Surface::Projects => "projects",
            Surface::Timeline => "timeline",
            Surface::JourneyCards => "journey_cards",
            Surface::Subtitles => "subtitles",
        }
    }
}

/// Discrete navigation requests coming from the input boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationCommand {
    /// Arrow / "next" control
    Next,
    /// Arrow / "prev" control
    Previous,
    /// Dot, node or planet click
    JumpTo(usize),
    /// Random pick, repeats allowed
    Random,
}

impl SwipeDecision {
    /// Command a caller should dispatch for this decision, if any
    pub fn command(self) -> Option<NavigationCommand> {
        match self {
            SwipeDecision::Next => Some(NavigationCommand::Next),
            SwipeDecision::Previous => Some(NavigationCommand::Previous),
            SwipeDecision::None => None,
        }
    }
}

/// Context passed to subscribers after a selection change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionContext {
    pub surface: Surface,
    pub index: usize,
    pub previous_index: usize,
    pub len: usize,
}
