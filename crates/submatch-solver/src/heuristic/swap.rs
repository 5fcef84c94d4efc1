//! The swap move: the primary state transition of the search.

use submatch_core::{GroupId, Result};

use crate::assignment::Assignment;

/// Swaps the confirmed flags of two match groups that share a subscription
/// and currently differ in confirmed state.
///
/// Whichever of the two groups transitions to confirmed may now violate the
/// hard conflict invariant, so every other currently-confirmed group sharing
/// a conflict set with it is forced to unconfirmed as part of the same
/// atomic move. The cascade applies symmetrically to both sides: by the time
/// a move is drawn the pairing's original confirmed/unconfirmed orientation
/// may have drifted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapMove {
    /// The group that was confirmed when the pairing was built.
    pub left: GroupId,
    /// The group that was unconfirmed when the pairing was built.
    pub right: GroupId,
}

impl SwapMove {
    /// Creates a swap move between two groups.
    pub fn new(left: GroupId, right: GroupId) -> Self {
        SwapMove { left, right }
    }

    /// True if the move would change anything: the two groups must differ
    /// in confirmed state right now.
    pub fn is_doable(&self, assignment: &Assignment) -> bool {
        self.left != self.right
            && assignment.is_confirmed(self.left) != assignment.is_confirmed(self.right)
    }

    /// Applies the move and returns the undo record restoring every touched
    /// group.
    pub fn apply(&self, assignment: &mut Assignment) -> Result<UndoMove> {
        let left_was = assignment.is_confirmed(self.left);
        let right_was = assignment.is_confirmed(self.right);

        let mut undo = UndoMove::default();
        undo.record(self.left, left_was);
        assignment.set_confirmed(self.left, right_was)?;
        undo.record(self.right, right_was);
        assignment.set_confirmed(self.right, left_was)?;

        // cascade around whichever side newly became confirmed
        if right_was && !left_was {
            self.cascade(assignment, self.left, self.right, &mut undo)?;
        }
        if left_was && !right_was {
            self.cascade(assignment, self.right, self.left, &mut undo)?;
        }

        Ok(undo)
    }

    /// Forces every confirmed group conflicting with `confirmed_side` to
    /// unconfirmed, sparing the swap partner.
    fn cascade(
        &self,
        assignment: &mut Assignment,
        confirmed_side: GroupId,
        partner: GroupId,
        undo: &mut UndoMove,
    ) -> Result<()> {
        for conflicting in assignment.conflicts().conflicting_ids(confirmed_side) {
            if conflicting != partner && assignment.is_confirmed(conflicting) {
                undo.record(conflicting, true);
                assignment.set_confirmed(conflicting, false)?;
            }
        }
        Ok(())
    }
}

/// Undo record of one applied move: the prior flag of every touched group.
#[derive(Clone, Debug, Default)]
pub struct UndoMove {
    prior: Vec<(GroupId, bool)>,
}

impl UndoMove {
    fn record(&mut self, group_id: GroupId, was_confirmed: bool) {
        self.prior.push((group_id, was_confirmed));
    }

    /// Restores every touched group to its pre-move state.
    pub fn undo(self, assignment: &mut Assignment) -> Result<()> {
        // reverse order, in case a group was touched twice
        for (group_id, was_confirmed) in self.prior.into_iter().rev() {
            assignment.set_confirmed(group_id, was_confirmed)?;
        }
        Ok(())
    }
}
