//! One-shot tasks deferred to the next event-loop iteration
//!
//! Post-layout fixups are queued here instead of running inline. A task only
//! carries handles; whoever drains the queue re-validates them and skips
//! tasks whose button has gone away in the meantime.

use std::collections::VecDeque;

use crate::edge::Edge;
use crate::geometry::Point;
use crate::model::ButtonId;

#[derive(Debug, Clone, PartialEq)]
pub enum DeferredTask {
    /// Grow/shrink an edge's panel back to the extent a widget had when it
    /// was last pinned
    RestoreEdgeExtent {
        button: ButtonId,
        edge: Edge,
        extent: f32,
    },
    /// Re-run layout for a container that was dormant while detached
    RefreshContainer { button: ButtonId },
    /// Float a widget dropped outside every side bar at the pointer position
    FloatAt { button: ButtonId, pos: Point },
    /// Drop the drag preview once its own event handling has finished
    DisposePreview,
}

impl DeferredTask {
    /// Button whose existence the task depends on
    pub fn button(&self) -> Option<ButtonId> {
        match self {
            DeferredTask::RestoreEdgeExtent { button, .. }
            | DeferredTask::RefreshContainer { button }
            | DeferredTask::FloatAt { button, .. } => Some(*button),
            DeferredTask::DisposePreview => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct DeferredQueue {
    tasks: VecDeque<DeferredTask>,
}

impl DeferredQueue {
    pub fn push(&mut self, task: DeferredTask) {
        tracing::trace!(?task, "deferred task queued");
        self.tasks.push_back(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Take every task queued so far; tasks pushed while the batch runs wait
    /// for the next drain
    pub fn take_batch(&mut self) -> Vec<DeferredTask> {
        self.tasks.drain(..).collect()
    }

    /// Drop queued tasks that no longer apply, keeping the rest in order
    pub fn retain(&mut self, keep: impl FnMut(&DeferredTask) -> bool) {
        self.tasks.retain(keep);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeferredTask> {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_batch_empties_queue() {
        let mut queue = DeferredQueue::default();
        queue.push(DeferredTask::DisposePreview);
        queue.push(DeferredTask::RefreshContainer {
            button: ButtonId(1),
        });

        let batch = queue.take_batch();
        assert_eq!(batch.len(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_retain_keeps_order() {
        let mut queue = DeferredQueue::default();
        queue.push(DeferredTask::RefreshContainer {
            button: ButtonId(1),
        });
        queue.push(DeferredTask::DisposePreview);
        queue.push(DeferredTask::RefreshContainer {
            button: ButtonId(2),
        });

        queue.retain(|t| t.button() != Some(ButtonId(1)));
        let rest: Vec<_> = queue.iter().cloned().collect();
        assert_eq!(
            rest,
            vec![
                DeferredTask::DisposePreview,
                DeferredTask::RefreshContainer {
                    button: ButtonId(2)
                },
            ]
        );
    }
}
