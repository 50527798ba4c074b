use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type SubscriptionId = u64;

pub type SelectListener = Box<dyn FnMut(usize)>;

/// The narrow capability set a carousel needs from its paging primitive.
/// Panels talk to this trait only, never to a concrete widget, so any pager
/// that can report and change a selected slide can sit behind a carousel.
pub trait Pager {
    fn len(&self) -> usize;
    fn selected_index(&self) -> usize;
    fn scroll_to(&mut self, index: usize, animate: bool);
    fn scroll_next(&mut self);
    fn scroll_prev(&mut self);
    fn on_select(&mut self, listener: SelectListener) -> SubscriptionId;
    fn off_select(&mut self, id: SubscriptionId);
}

/// Single-threaded snap pager: one slide visible at a time, optional
/// wraparound at both ends, select listeners fired whenever the selected
/// slide actually changes.
pub struct SnapPager {
    len: usize,
    looped: bool,
    selected: usize,
    next_subscription: SubscriptionId,
    listeners: Vec<(SubscriptionId, SelectListener)>,
}

impl SnapPager {
    pub fn new(len: usize, looped: bool) -> Self {
        Self {
            len,
            looped,
            selected: 0,
            next_subscription: 0,
            listeners: Vec::new(),
        }
    }

    /// Resizes the slide deck when the provider set changes. A selection
    /// falling off the end snaps back to the first slide and announces it.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
            return;
        }
        if self.selected >= len {
            self.selected = 0;
            self.emit();
        }
    }

    fn emit(&mut self) {
        let index = self.selected;
        for (_, listener) in self.listeners.iter_mut() {
            listener(index);
        }
    }

    fn snap(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        let clamped = index.min(self.len - 1);
        if clamped != self.selected {
            self.selected = clamped;
            self.emit();
        }
    }
}

impl Pager for SnapPager {
    fn len(&self) -> usize {
        self.len
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn scroll_to(&mut self, index: usize, _animate: bool) {
        self.snap(index);
    }

    fn scroll_next(&mut self) {
        if self.len == 0 {
            return;
        }
        let next = if self.selected + 1 < self.len {
            self.selected + 1
        } else if self.looped {
            0
        } else {
            self.selected
        };
        self.snap(next);
    }

    fn scroll_prev(&mut self) {
        if self.len == 0 {
            return;
        }
        let prev = if self.selected > 0 {
            self.selected - 1
        } else if self.looped {
            self.len - 1
        } else {
            0
        };
        self.snap(prev);
    }

    fn on_select(&mut self, listener: SelectListener) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    fn off_select(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum BindState {
    Unbound,
    Bound,
    Disposed,
}

/// Owns a carousel's current slide index and keeps it in lockstep with a
/// pager. The pager's select events are the only user-driven path that moves
/// `current_index`; the imperative methods go the other way, through the
/// pager, so the index always reflects what is actually on screen.
///
/// Binding resets the pager to slide 0 exactly once per controller lifetime.
/// The latch means a hook re-running `bind` with the same pager (or a
/// re-bind after a pager swap) never yanks the user back to the start.
pub struct CarouselSyncController {
    state: BindState,
    pager: Option<Rc<RefCell<dyn Pager>>>,
    subscription: Option<SubscriptionId>,
    current: Rc<Cell<usize>>,
    live: Rc<Cell<bool>>,
    initialized: bool,
}

impl CarouselSyncController {
    pub fn new() -> Self {
        Self {
            state: BindState::Unbound,
            pager: None,
            subscription: None,
            current: Rc::new(Cell::new(0)),
            live: Rc::new(Cell::new(true)),
            initialized: false,
        }
    }

    /// Attaches to a pager and mirrors its select events into
    /// `current_index`, forwarding each change to `on_change`. Idempotent:
    /// binding the same pager again is a no-op.
    pub fn bind(
        &mut self,
        pager: Rc<RefCell<dyn Pager>>,
        mut on_change: impl FnMut(usize) + 'static,
    ) {
        if self.state == BindState::Disposed {
            return;
        }
        if let Some(bound) = &self.pager {
            if Rc::ptr_eq(bound, &pager) {
                return;
            }
            if let Some(id) = self.subscription.take() {
                bound.borrow_mut().off_select(id);
            }
        }

        let current = Rc::clone(&self.current);
        let live = Rc::clone(&self.live);
        let id = pager.borrow_mut().on_select(Box::new(move |index| {
            if !live.get() {
                return;
            }
            current.set(index);
            on_change(index);
        }));
        self.subscription = Some(id);

        if !self.initialized {
            pager.borrow_mut().scroll_to(0, false);
            self.current.set(0);
            self.initialized = true;
        }

        self.pager = Some(pager);
        self.state = BindState::Bound;
    }

    pub fn current_index(&self) -> usize {
        self.current.get()
    }

    /// Navigation before binding is silently dropped: there is nothing to
    /// scroll yet.
    pub fn scroll_to(&self, index: usize) {
        if self.state != BindState::Bound {
            return;
        }
        if let Some(pager) = &self.pager {
            pager.borrow_mut().scroll_to(index, true);
        }
    }

    pub fn next(&self) {
        if self.state != BindState::Bound {
            return;
        }
        if let Some(pager) = &self.pager {
            pager.borrow_mut().scroll_next();
        }
    }

    pub fn prev(&self) {
        if self.state != BindState::Bound {
            return;
        }
        if let Some(pager) = &self.pager {
            pager.borrow_mut().scroll_prev();
        }
    }

    /// Detaches from the pager. Safe to call in any state; after this the
    /// controller ignores everything, including a select callback that was
    /// already queued.
    pub fn dispose(&mut self) {
        if let (Some(pager), Some(id)) = (self.pager.as_ref(), self.subscription.take()) {
            pager.borrow_mut().off_select(id);
        }
        self.live.set(false);
        self.state = BindState::Disposed;
    }
}

impl Default for CarouselSyncController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(len: usize) -> Rc<RefCell<SnapPager>> {
        Rc::new(RefCell::new(SnapPager::new(len, true)))
    }

    fn observed() -> (Rc<RefCell<Vec<usize>>>, impl FnMut(usize)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |index| sink.borrow_mut().push(index))
    }

    #[test]
    fn test_bind_resets_to_first_slide_once() {
        let pager = pager(4);
        pager.borrow_mut().scroll_to(2, false);

        let mut controller = CarouselSyncController::new();
        controller.bind(pager.clone(), |_| {});
        assert_eq!(controller.current_index(), 0);
        assert_eq!(pager.borrow().selected_index(), 0);

        // Navigate away, then re-run the bind as a re-invoked effect would.
        controller.scroll_to(2);
        controller.bind(pager.clone(), |_| {});
        assert_eq!(controller.current_index(), 2);
        assert_eq!(pager.borrow().selected_index(), 2);
    }

    #[test]
    fn test_rebinding_does_not_stack_subscriptions() {
        let pager = pager(3);
        let (seen, on_change) = observed();

        let mut controller = CarouselSyncController::new();
        controller.bind(pager.clone(), on_change);
        controller.bind(pager.clone(), |_| panic!("second bind must be a no-op"));

        controller.next();
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_navigation_before_bind_is_a_noop() {
        let controller = CarouselSyncController::new();
        controller.scroll_to(3);
        controller.next();
        controller.prev();
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn test_scroll_to_sets_current_index() {
        let pager = pager(5);
        let mut controller = CarouselSyncController::new();
        controller.bind(pager, |_| {});

        for k in 0..5 {
            controller.scroll_to(k);
            assert_eq!(controller.current_index(), k);
        }
    }

    #[test]
    fn test_next_and_prev_wrap_at_the_boundaries() {
        let pager = pager(3);
        let mut controller = CarouselSyncController::new();
        controller.bind(pager, |_| {});

        controller.prev();
        assert_eq!(controller.current_index(), 2);

        controller.next();
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn test_user_navigation_on_the_pager_updates_current_index() {
        let pager = pager(3);
        let (seen, on_change) = observed();

        let mut controller = CarouselSyncController::new();
        controller.bind(pager.clone(), on_change);

        // A swipe lands on the pager directly, not through the controller.
        pager.borrow_mut().scroll_next();
        pager.borrow_mut().scroll_next();

        assert_eq!(controller.current_index(), 2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_disposed_controller_ignores_pager_events() {
        let pager = pager(3);
        let mut controller = CarouselSyncController::new();
        controller.bind(pager.clone(), |_| {});
        controller.scroll_to(1);
        controller.dispose();

        // The select event fires after disposal; nothing may move.
        pager.borrow_mut().scroll_next();
        assert_eq!(controller.current_index(), 1);

        controller.scroll_to(2);
        assert_eq!(controller.current_index(), 1);
    }

    #[test]
    fn test_dispose_without_bind_is_safe() {
        let mut controller = CarouselSyncController::new();
        controller.dispose();
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn test_shrinking_the_deck_snaps_selection_home() {
        let pager = pager(4);
        let mut controller = CarouselSyncController::new();
        controller.bind(pager.clone(), |_| {});
        controller.scroll_to(3);

        pager.borrow_mut().set_len(2);
        assert_eq!(controller.current_index(), 0);
        assert_eq!(pager.borrow().selected_index(), 0);
    }

    #[test]
    fn test_empty_deck_navigation_never_errors() {
        let pager = pager(0);
        let mut controller = CarouselSyncController::new();
        controller.bind(pager.clone(), |_| {});

        controller.next();
        controller.prev();
        controller.scroll_to(5);
        assert_eq!(controller.current_index(), 0);
    }
}
