//! # Layout
//!
//! The product page switches to a horizontal gallery layout on narrow viewports. The viewport
//! itself belongs to whatever runtime hosts the page, so it is reached through the [`Viewport`]
//! trait. Listeners are acquired with [`ResizeGuard::acquire`] and released when the guard is
//! dropped, which ties the listener's lifetime to the page that registered it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type ResizeListener = Box<dyn Fn(u32)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub trait Viewport {
    fn width(&self) -> u32;
    fn add_resize_listener(&self, listener: ResizeListener) -> ListenerId;
    fn remove_resize_listener(&self, id: ListenerId);
}

/// Holds a resize listener registration and releases it on drop.
pub struct ResizeGuard {
    viewport: Rc<dyn Viewport>,
    id: ListenerId,
}

impl ResizeGuard {
    pub fn acquire(viewport: Rc<dyn Viewport>, listener: ResizeListener) -> Self {
        let id = viewport.add_resize_listener(listener);
        Self { viewport, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ResizeGuard {
    fn drop(&mut self) {
        self.viewport.remove_resize_listener(self.id);
    }
}

/// A viewport with a settable width. Used by the CLI (which has no window) and by tests.
pub struct StaticViewport {
    width: Cell<u32>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Rc<dyn Fn(u32)>)>>,
}

impl StaticViewport {
    pub fn new(width: u32) -> Self {
        Self {
            width: Cell::new(width),
            next_id: Cell::new(1),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Changes the width and notifies every registered listener.
    pub fn resize(&self, width: u32) {
        self.width.set(width);
        // Snapshot so a listener may register or release listeners while being called.
        let listeners: Vec<Rc<dyn Fn(u32)>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(width);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Viewport for StaticViewport {
    fn width(&self) -> u32 {
        self.width.get()
    }

    fn add_resize_listener(&self, listener: ResizeListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::from(listener)));
        id
    }

    fn remove_resize_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
    }
}
