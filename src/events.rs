//! Typed messages passed between components.
//!
//! Systems emit messages instead of reaching into other entities; the
//! session drains the queue synchronously at the end of each tick, and a
//! handler may enqueue follow-up messages that are processed in the same
//! drain.

use hecs::Entity;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// An entity committed a move into a new discrete cell.
    LocationChanged {
        entity: Entity,
        from: (i32, i32),
        to: (i32, i32),
    },
    /// `by` picked up whatever `target` represents.
    Collect { target: Entity, by: Entity },
    /// `target` took a hit.
    Damage { target: Entity, amount: f32 },
}

/// FIFO message queue drained once per tick.
#[derive(Default)]
pub struct MessageQueue {
    queue: VecDeque<Message>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn push(&mut self, message: Message) {
        self.queue.push_back(message);
    }

    pub fn pop(&mut self) -> Option<Message> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
