//! Carousel: one cycler bound to one surface, with change notification

use std::rc::{Rc, Weak};
use tracing::{debug, warn};

use super::{IndexCycler, NavigationCommand, SelectionContext, SelectionSubscriber, Surface, SwipeDecision};
use crate::error::NavigationError;

/// Navigation state for a single surface
pub struct Carousel {
    surface: Surface,
    cycler: IndexCycler,
    subscribers: Vec<Weak<dyn SelectionSubscriber>>,
}

impl Carousel {
    /// Create a carousel over `len` items
    pub fn new(surface: Surface, len: usize) -> Result<Self, NavigationError> {
        Ok(Self {
            surface,
            cycler: IndexCycler::new(len)?,
            subscribers: Vec::new(),
        })
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn current(&self) -> usize {
        self.cycler.current()
    }

    pub fn len(&self) -> usize {
        self.cycler.len()
    }

    /// Whether `index` is the active item
    pub fn is_selected(&self, index: usize) -> bool {
        self.cycler.current() == index
    }

    /// Apply a navigation command and notify subscribers.
    ///
    /// Out-of-range jumps are returned to the caller untouched.
    pub fn dispatch(&mut self, command: NavigationCommand) -> Result<usize, NavigationError> {
        let previous_index = self.cycler.current();

        let index = match command {
            NavigationCommand::Next => self.cycler.next(),
            NavigationCommand::Previous => self.cycler.previous(),
            NavigationCommand::JumpTo(target) => match self.cycler.jump_to(target) {
                Ok(index) => index,
                Err(e) => {
                    warn!(surface = self.surface.label(), "rejected jump: {}", e);
                    return Err(e);
                }
            },
            NavigationCommand::Random => self.cycler.random_jump(),
        };

        debug!(
            surface = self.surface.label(),
            ?command,
            from = previous_index,
            to = index,
            "selection changed"
        );

        self.notify_subscribers(previous_index);
        Ok(index)
    }

    /// Map a finished swipe onto the cycler. Returns the new index, if any.
    pub fn apply_swipe(&mut self, decision: SwipeDecision) -> Option<usize> {
        let command = decision.command()?;
        // Next/Previous cannot fail
        self.dispatch(command).ok()
    }

    /// Add a subscriber. Only a weak reference is kept.
    pub fn add_subscriber(&mut self, subscriber: &Rc<dyn SelectionSubscriber>) {
        self.subscribers.push(Rc::downgrade(subscriber));
    }

    fn notify_subscribers(&mut self, previous_index: usize) {
        let context = SelectionContext {
            surface: self.surface,
            index: self.cycler.current(),
            previous_index,
            len: self.cycler.len(),
        };

        // Remove any dead weak references
        self.subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in self.subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_selection_change(&context);
            }
        }
    }
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("surface", &self.surface)
            .field("cycler", &self.cycler)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<SelectionContext>>,
    }

    impl SelectionSubscriber for Recorder {
        fn on_selection_change(&self, context: &SelectionContext) {
            self.seen.borrow_mut().push(context.clone());
        }
    }

    #[test]
    fn test_dispatch_commands() {
        let mut carousel = Carousel::new(Surface::Projects, 10).unwrap();
        assert_eq!(carousel.dispatch(NavigationCommand::Previous), Ok(9));
        assert_eq!(carousel.dispatch(NavigationCommand::Next), Ok(0));
        assert_eq!(carousel.dispatch(NavigationCommand::JumpTo(4)), Ok(4));
        assert!(carousel.is_selected(4));

        let random = carousel.dispatch(NavigationCommand::Random).unwrap();
        assert!(random < 10);
    }

    #[test]
    fn test_rejected_jump_keeps_index() {
        let mut carousel = Carousel::new(Surface::Timeline, 3).unwrap();
        carousel.dispatch(NavigationCommand::JumpTo(1)).unwrap();

        let err = carousel.dispatch(NavigationCommand::JumpTo(3)).unwrap_err();
        assert_eq!(err, NavigationError::OutOfRange { index: 3, len: 3 });
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_empty_carousel_rejected() {
        assert!(Carousel::new(Surface::JourneyCards, 0).is_err());
    }

    #[test]
    fn test_swipe_maps_to_wrapping_navigation() {
        let mut carousel = Carousel::new(Surface::JourneyCards, 3).unwrap();
        assert_eq!(carousel.apply_swipe(SwipeDecision::Previous), Some(2));
        assert_eq!(carousel.apply_swipe(SwipeDecision::Next), Some(0));
        assert_eq!(carousel.apply_swipe(SwipeDecision::None), None);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_subscribers_notified() {
        let recorder = Rc::new(Recorder::default());
        let subscriber: Rc<dyn SelectionSubscriber> = recorder.clone();

        let mut carousel = Carousel::new(Surface::Projects, 5).unwrap();
        carousel.add_subscriber(&subscriber);

        carousel.dispatch(NavigationCommand::Next).unwrap();
        carousel.dispatch(NavigationCommand::JumpTo(3)).unwrap();
        let _ = carousel.dispatch(NavigationCommand::JumpTo(9));

        let seen = recorder.seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].index, 1);
        assert_eq!(seen[0].previous_index, 0);
        assert_eq!(seen[1].index, 3);
        assert_eq!(seen[1].surface, Surface::Projects);
        assert_eq!(seen[1].len, 5);
    }

    #[test]
    fn test_dead_subscribers_pruned() {
        let mut carousel = Carousel::new(Surface::Projects, 2).unwrap();
        {
            let subscriber: Rc<dyn SelectionSubscriber> = Rc::new(Recorder::default());
            carousel.add_subscriber(&subscriber);
        }

        carousel.dispatch(NavigationCommand::Next).unwrap();
        assert_eq!(carousel.subscribers.len(), 0);
    }
}
