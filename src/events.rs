//! Hit notifications and the stock listeners driving scoring and cleanup.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::info;

use crate::ball::Ball;
use crate::environment::SurfaceId;
use crate::surface::Block;

/// Observer of "was struck" notifications. Listeners run synchronously, in
/// registration order, after the reflection rule has decided the outgoing
/// velocity and before it returns.
pub trait HitListener {
    fn on_hit(&mut self, being_hit: &Block, hitter: &Ball);
}

/// A count shared between listeners and the driving loop. Clones observe the
/// same value; the simulation is single-threaded, so a `Cell` suffices.
#[derive(Clone, Debug, Default)]
pub struct Counter {
    value: Rc<Cell<i32>>,
}

impl Counter {
    pub fn new(start: i32) -> Self {
        Self {
            value: Rc::new(Cell::new(start)),
        }
    }

    pub fn increase(&self, amount: i32) {
        self.value.set(self.value.get() + amount);
    }

    pub fn decrease(&self, amount: i32) {
        self.value.set(self.value.get() - amount);
    }

    pub fn value(&self) -> i32 {
        self.value.get()
    }
}

/// Surfaces queued for removal between ticks. Reflection rules must not
/// mutate the registry mid-tick, so listeners park handles here and the
/// driving loop drains them once the tick is over.
#[derive(Clone, Default)]
pub struct RemovalQueue {
    ids: Rc<RefCell<Vec<SurfaceId>>>,
}

impl RemovalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a handle once; repeats are ignored so two strikes in one tick
    /// cannot remove a surface twice. Returns whether the handle was new.
    pub fn push(&self, id: SurfaceId) -> bool {
        let mut ids = self.ids.borrow_mut();
        if ids.contains(&id) {
            return false;
        }
        ids.push(id);
        true
    }

    pub fn drain(&self) -> Vec<SurfaceId> {
        std::mem::take(&mut *self.ids.borrow_mut())
    }
}

/// Awards a fixed score per strike.
pub struct ScoreTracker {
    score: Counter,
}

const HIT_SCORE: i32 = 5;

impl ScoreTracker {
    pub fn new(score: Counter) -> Self {
        Self { score }
    }
}

impl HitListener for ScoreTracker {
    fn on_hit(&mut self, _being_hit: &Block, _hitter: &Ball) {
        self.score.increase(HIT_SCORE);
    }
}

/// Queues the struck block for removal and keeps the remaining-blocks count
/// in step. Decrements exactly once per block, however often it is struck.
pub struct BlockRemover {
    queue: RemovalQueue,
    remaining: Counter,
}

impl BlockRemover {
    pub fn new(queue: RemovalQueue, remaining: Counter) -> Self {
        Self { queue, remaining }
    }
}

impl HitListener for BlockRemover {
    fn on_hit(&mut self, being_hit: &Block, _hitter: &Ball) {
        let Some(id) = being_hit.id() else {
            // A block outside any environment has nothing to remove.
            return;
        };
        if self.queue.push(id) {
            self.remaining.decrease(1);
        }
    }
}

/// Logs every strike.
#[derive(Default)]
pub struct HitLogger;

impl HitListener for HitLogger {
    fn on_hit(&mut self, being_hit: &Block, hitter: &Ball) {
        info!(
            "block {:?} was hit by the ball at {:?}",
            being_hit.id(),
            hitter.center()
        );
    }
}
