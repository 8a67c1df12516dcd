//! Callbacks through which a running search reports its progress to the host.
use crate::node::Node;
use grid_util::point::Point;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Receives state transitions from a [Search](crate::Search). All callbacks run synchronously
/// on the searching thread and default to doing nothing.
pub trait Observer {
    /// `node` entered the frontier for the first time. Not emitted for start or goal.
    fn on_node_opened(&mut self, _node: &Node) {}
    /// `node` has been expanded. Not emitted for the start.
    fn on_node_closed(&mut self, _node: &Node) {}
    /// `node` lies on the final path. Not emitted for start or goal.
    fn on_path_node(&mut self, _node: &Node) {}
    /// An expansion step, or the path report, is complete.
    fn on_frame_ready(&mut self) {}
    /// Polled once before every expansion step; returning `true` ends the search with
    /// [Error::Cancelled](crate::Error::Cancelled).
    fn cancel_requested(&mut self) -> bool {
        false
    }
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_node_opened(&mut self, node: &Node) {
        (**self).on_node_opened(node)
    }
    fn on_node_closed(&mut self, node: &Node) {
        (**self).on_node_closed(node)
    }
    fn on_path_node(&mut self, node: &Node) {
        (**self).on_path_node(node)
    }
    fn on_frame_ready(&mut self) {
        (**self).on_frame_ready()
    }
    fn cancel_requested(&mut self) -> bool {
        (**self).cancel_requested()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Opened(Point),
    Closed(Point),
    PathNode(Point),
    Frame,
}

/// An [Observer] that keeps every event in order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }
    pub fn opened(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::Opened(p) => Some(*p),
            _ => None,
        })
    }
    pub fn closed(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::Closed(p) => Some(*p),
            _ => None,
        })
    }
    pub fn path_nodes(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::PathNode(p) => Some(*p),
            _ => None,
        })
    }
    pub fn frames(&self) -> usize {
        self.events.iter().filter(|e| **e == Event::Frame).count()
    }
}

impl Observer for Recorder {
    fn on_node_opened(&mut self, node: &Node) {
        self.events.push(Event::Opened(node.position()));
    }
    fn on_node_closed(&mut self, node: &Node) {
        self.events.push(Event::Closed(node.position()));
    }
    fn on_path_node(&mut self, node: &Node) {
        self.events.push(Event::PathNode(node.position()));
    }
    fn on_frame_ready(&mut self) {
        self.events.push(Event::Frame);
    }
}

/// A shareable flag the host sets to stop a running search, possibly from another thread.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Forwards every event to `inner` and requests cancellation once `token` is cancelled
/// (or `inner` asks for it).
pub struct Cancellable<O> {
    pub inner: O,
    token: CancelToken,
}

impl<O: Observer> Cancellable<O> {
    pub fn new(inner: O, token: CancelToken) -> Cancellable<O> {
        Cancellable { inner, token }
    }
}

impl<O: Observer> Observer for Cancellable<O> {
    fn on_node_opened(&mut self, node: &Node) {
        self.inner.on_node_opened(node)
    }
    fn on_node_closed(&mut self, node: &Node) {
        self.inner.on_node_closed(node)
    }
    fn on_path_node(&mut self, node: &Node) {
        self.inner.on_path_node(node)
    }
    fn on_frame_ready(&mut self) {
        self.inner.on_frame_ready()
    }
    fn cancel_requested(&mut self) -> bool {
        self.token.is_cancelled() || self.inner.cancel_requested()
    }
}
