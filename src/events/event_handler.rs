use super::{EventObserver, Unsubscriber};
use std::cell::RefCell;
use std::rc::Rc;

pub trait EventHandler<T> {
    fn handle_event(&mut self, event: &T);
}

/// Routes every event seen by `observer` into `handler`.
pub fn attach<T, H>(observer: &EventObserver<T>, handler: &Rc<RefCell<H>>) -> Unsubscriber<T>
where
    T: std::fmt::Debug + 'static,
    H: EventHandler<T> + 'static,
{
    let handler = Rc::clone(handler);
    observer.subscribe(move |event| handler.borrow_mut().handle_event(event))
}
