//! Site-wide event bus
//!
//! Components publish typed events; handlers registered for that event type
//! receive them synchronously on the publishing thread.

use std::any::{Any, TypeId};
use std::sync::Arc;
use parking_lot::Mutex;
use ahash::AHashMap;

use crate::navigation::{SelectionContext, SelectionSubscriber};

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// Events emitted by the portfolio
pub mod events {
    use super::Event;
    use crate::navigation::Surface;

    /// A surface changed its active item
    #[derive(Debug, Clone, PartialEq)]
    pub struct SelectionChanged {
        pub surface: Surface,
        pub index: usize,
    }

    /// The window crossed the mobile breakpoint
    #[derive(Debug, Clone, PartialEq)]
    pub struct DeviceClassChanged {
        pub mobile: bool,
        pub width: f32,
    }

    /// Contact message handed to the e-mail service
    #[derive(Debug, Clone, PartialEq)]
    pub struct ContactSent {
        pub from_email: String,
    }

    /// Contact message could not be delivered
    #[derive(Debug, Clone, PartialEq)]
    pub struct ContactFailed {
        pub reason: String,
    }

    macro_rules! impl_event {
        ($($t:ty),*) => {
            $(
                impl Event for $t {
                    fn as_any(&self) -> &dyn std::any::Any {
                        self
                    }
                }
            )*
        }
    }

    impl_event!(
        SelectionChanged,
        DeviceClassChanged,
        ContactSent,
        ContactFailed
    );
}

/// System-wide event bus
#[derive(Clone)]
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<TypeId, Vec<Box<dyn EventHandler>>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        let mut handlers = self.handlers.lock();
        handlers.entry(TypeId::of::<E>()).or_default().push(handler);
    }

    /// Subscribe a closure that receives the concrete event
    pub fn on<E, F>(&self, mut f: F)
    where
        E: Event,
        F: FnMut(&E) + Send + Sync + 'static,
    {
        self.subscribe::<E>(handler_from_fn(move |event| {
            if let Some(event) = event.as_any().downcast_ref::<E>() {
                f(event);
            }
        }));
    }

    /// Publish an event to every handler registered for its type.
    ///
    /// Handlers run outside the lock, so they may publish or subscribe on
    /// this bus. An event of the type being delivered that is published from
    /// inside one of its own handlers skips the handlers currently running.
    pub fn publish<E: Event>(&self, event: E) {
        let type_id = TypeId::of::<E>();
        let mut running = match self.handlers.lock().get_mut(&type_id) {
            Some(list) => std::mem::take(list),
            None => return,
        };

        for handler in running.iter_mut() {
            handler.handle(&event);
        }

        let mut handlers = self.handlers.lock();
        let slot = handlers.entry(type_id).or_default();
        // Handlers added during delivery keep their place after the old ones
        running.append(slot);
        *slot = running;
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Republishes carousel selection changes as [`events::SelectionChanged`]
pub struct SelectionForwarder {
    bus: EventBus,
}

impl SelectionForwarder {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl SelectionSubscriber for SelectionForwarder {
    fn on_selection_change(&self, context: &SelectionContext) {
        self.bus.publish(events::SelectionChanged {
            surface: context.surface,
            index: context.index,
        });
    }
}

/// Helper struct for creating event handlers from closures
pub struct ClosureEventHandler<F> {
    handler: F,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(ClosureEventHandler { handler: f })
}

#[cfg(test)]
mod tests {
    use super::events::*;
    use super::*;
    use crate::navigation::Surface;

    #[test]
    fn test_publish_reaches_typed_handler() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        bus.on::<SelectionChanged, _>(move |event| sink.lock().push(event.index));

        bus.publish(SelectionChanged { surface: Surface::Projects, index: 3 });
        bus.publish(SelectionChanged { surface: Surface::Timeline, index: 1 });

        assert_eq!(*seen.lock(), vec![3, 1]);
    }

    #[test]
    fn test_other_event_types_ignored() {
        let bus = EventBus::new();
        let count = Arc::new(Mutex::new(0));

        let sink = count.clone();
        bus.on::<ContactSent, _>(move |_| *sink.lock() += 1);

        bus.publish(ContactFailed { reason: "offline".to_string() });
        assert_eq!(*count.lock(), 0);

        bus.publish(ContactSent { from_email: "a@b.c".to_string() });
        assert_eq!(*count.lock(), 1);
    }

    #[test]
    fn test_forwarder_publishes_carousel_changes() {
        use crate::navigation::{Carousel, NavigationCommand};
        use std::rc::Rc;

        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        bus.on::<SelectionChanged, _>(move |event| sink.lock().push((event.surface, event.index)));

        let forwarder: Rc<dyn SelectionSubscriber> = Rc::new(SelectionForwarder::new(bus.clone()));
        let mut carousel = Carousel::new(Surface::Timeline, 3).unwrap();
        carousel.add_subscriber(&forwarder);

        carousel.dispatch(NavigationCommand::Previous).unwrap();
        carousel.dispatch(NavigationCommand::JumpTo(1)).unwrap();

        assert_eq!(*seen.lock(), vec![(Surface::Timeline, 2), (Surface::Timeline, 1)]);
    }

    #[test]
    fn test_handlers_may_reenter_the_bus() {
        let bus = EventBus::new();
        let failures = Arc::new(Mutex::new(Vec::new()));
        let sent = Arc::new(Mutex::new(0));

        let inner = bus.clone();
        let sink = failures.clone();
        bus.on::<ContactSent, _>(move |event| {
            inner.publish(ContactFailed { reason: format!("echo {}", event.from_email) });
            let sink = sink.clone();
            inner.on::<ContactFailed, _>(move |failed| sink.lock().push(failed.reason.clone()));
        });
        let counter = sent.clone();
        bus.on::<ContactSent, _>(move |_| *counter.lock() += 1);

        bus.publish(ContactSent { from_email: "a@b.c".to_string() });
        assert_eq!(*sent.lock(), 1);
        // The echo went out before any failure handler existed
        assert!(failures.lock().is_empty());

        bus.publish(ContactFailed { reason: "offline".to_string() });
        assert_eq!(*failures.lock(), vec!["offline".to_string()]);

        // Both original handlers survive delivery
        bus.publish(ContactSent { from_email: "x@y.z".to_string() });
        assert_eq!(*sent.lock(), 2);
        assert_eq!(failures.lock().last().map(String::as_str), Some("echo x@y.z"));
    }
}
