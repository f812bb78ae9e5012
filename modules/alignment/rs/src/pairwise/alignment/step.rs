use std::borrow::Borrow;

use derive_getters::{Dissolve, Getters};

use super::op::Op;

/// A run of identical alignment operations.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step {
    /// Number of consecutive operations, always greater than zero.
    len: usize,
    op: Op,
}

impl Step {
    pub(crate) fn single(op: Op) -> Self {
        Self { len: 1, op }
    }

    /// Merges adjacent steps with the same operation in place.
    pub fn collapse(steps: &mut Vec<Step>) {
        steps.dedup_by(|next, prev| {
            if prev.op == next.op {
                prev.len += next.len;
                true
            } else {
                false
            }
        });
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step>>) -> String {
        let mut result = String::new();
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len.to_string());
            result.push(step.op.symbol());
        }
        result
    }
}
