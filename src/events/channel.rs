use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use log::trace;

pub type Callback<T> = Rc<dyn Fn(&T)>;
pub type SubscriptionId = u64;

struct Listeners<T> {
    callbacks: BTreeMap<SubscriptionId, Callback<T>>,
    next_id: SubscriptionId,
}

/// Shared listener registry behind an emitter/observer pair. Listeners run
/// in subscription order.
pub struct Channel<T: std::fmt::Debug> {
    listeners: Rc<RefCell<Listeners<T>>>,
}

impl<T: std::fmt::Debug> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

pub struct EventEmitter<T: std::fmt::Debug> {
    channel: Channel<T>,
}

impl<T: std::fmt::Debug> Clone for EventEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
        }
    }
}

pub struct EventObserver<T: std::fmt::Debug> {
    channel: Channel<T>,
}

impl<T: std::fmt::Debug> Clone for EventObserver<T> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
        }
    }
}

/// Handle returned by `subscribe`. Dropping it keeps the subscription alive;
/// call `unsubscribe` to remove the listener.
pub struct Unsubscriber<T> {
    id: SubscriptionId,
    listeners: Weak<RefCell<Listeners<T>>>,
}

impl<T> Unsubscriber<T> {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Returns false if the listener was already gone.
    pub fn unsubscribe(self) -> bool {
        match self.listeners.upgrade() {
            Some(listeners) => listeners.borrow_mut().callbacks.remove(&self.id).is_some(),
            None => false,
        }
    }
}

impl<T: std::fmt::Debug> Channel<T> {
    pub fn new() -> (EventEmitter<T>, EventObserver<T>) {
        let channel = Channel {
            listeners: Rc::new(RefCell::new(Listeners {
                callbacks: BTreeMap::new(),
                next_id: 0,
            })),
        };
        (
            EventEmitter {
                channel: channel.clone(),
            },
            EventObserver { channel },
        )
    }

    fn subscribe<F>(&self, callback: F) -> Unsubscriber<T>
    where
        F: Fn(&T) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.callbacks.insert(id, Rc::new(callback));
        Unsubscriber {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    fn emit(&self, data: &T) {
        // Snapshot first so a listener may subscribe or emit without a
        // double borrow.
        let callbacks: Vec<Callback<T>> =
            self.listeners.borrow().callbacks.values().cloned().collect();
        trace!(target: "events", "Emitting event to {} listeners: {:?}", callbacks.len(), data);
        for callback in callbacks {
            callback(data);
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().callbacks.len()
    }
}

impl<T: std::fmt::Debug> EventEmitter<T> {
    pub fn emit(&self, data: T) {
        self.channel.emit(&data);
    }
}

impl<T: std::fmt::Debug> EventObserver<T> {
    pub fn subscribe<F>(&self, callback: F) -> Unsubscriber<T>
    where
        F: Fn(&T) + 'static,
    {
        self.channel.subscribe(callback)
    }

    pub fn listener_count(&self) -> usize {
        self.channel.listener_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, LayoutCommand};

    #[test]
    fn test_listeners_receive_commands_in_order() {
        let (emitter, observer) = Channel::<LayoutCommand>::new();
        let received = Rc::new(RefCell::new(Vec::new()));

        let first = received.clone();
        observer.subscribe(move |command: &LayoutCommand| {
            first.borrow_mut().push(format!("first {:?}", command));
        });
        let second = received.clone();
        observer.subscribe(move |command: &LayoutCommand| {
            second.borrow_mut().push(format!("second {:?}", command));
        });

        emitter.emit(LayoutCommand::ToggleTile(Cell::new(1, 2)));
        assert_eq!(
            *received.borrow(),
            vec![
                "first ToggleTile((1, 2))".to_string(),
                "second ToggleTile((1, 2))".to_string(),
            ]
        );
    }

    #[test]
    fn test_cloned_ends_share_listeners() {
        let (emitter, observer) = Channel::<LayoutCommand>::new();
        let other_emitter = emitter.clone();
        let other_observer = observer.clone();
        let count = Rc::new(RefCell::new(0));

        let counter = count.clone();
        other_observer.subscribe(move |_| *counter.borrow_mut() += 1);

        emitter.emit(LayoutCommand::Clear);
        other_emitter.emit(LayoutCommand::DragEnd);
        assert_eq!(*count.borrow(), 2);
        assert_eq!(observer.listener_count(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let (emitter, observer) = Channel::<LayoutCommand>::new();
        let count = Rc::new(RefCell::new(0));

        let counter = count.clone();
        let subscription = observer.subscribe(move |_| *counter.borrow_mut() += 1);
        emitter.emit(LayoutCommand::SetFloors(2));
        assert!(subscription.unsubscribe());

        emitter.emit(LayoutCommand::SetFloors(3));
        assert_eq!(*count.borrow(), 1);
        assert_eq!(observer.listener_count(), 0);
    }

    #[test]
    fn test_unsubscribe_after_channel_dropped() {
        let (emitter, observer) = Channel::<LayoutCommand>::new();
        let subscription = observer.subscribe(|_| {});
        drop(emitter);
        drop(observer);
        assert!(!subscription.unsubscribe());
    }
}
