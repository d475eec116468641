use crate::error::WireError;

/// One open declared-size region.
///
/// `remaining` starts at the region's declared size and is decremented
/// by every read made while the region is open. The invariant
/// `remaining >= 0` holds at all times because [`ScopeStack::consume`]
/// refuses any read that would break it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Scope {
    remaining: usize,
}

/// Stack of open declared-size regions.
///
/// The input format nests variable-length regions: a per-leg conditional
/// block declared by a 2-digit hex size, which itself contains sub-blocks
/// declared by their own hex sizes. A read anywhere inside that nesting
/// consumes budget from *every* enclosing region at once, so the stack
/// decrements all open scopes together and a region may only be closed
/// when its budget is exactly spent.
///
/// ```text
///   open(74)            ── per-leg conditional block
///   │  open(24)         ── nested sub-block
///   │  │  consume(4)    ── decrements both: 74→70 and 24→20
///   │  │  ...
///   │  close()          ── only legal once the inner 24 hits 0
///   │  ...
///   close()             ── only legal once the outer 74 hits 0
/// ```
///
/// The reference design this replaces tracked the same bookkeeping with
/// two mutable counters reused across call sites, hard-coding the nesting
/// depth to two. The stack makes every open/close locally verifiable and
/// leaves the depth unbounded.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    /// Create an empty stack with no open region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new region with `size` characters of budget.
    pub fn open(&mut self, size: usize) {
        self.scopes.push(Scope { remaining: size });
    }

    /// Account for a read of `n` characters at `offset`.
    ///
    /// Checks every open region *before* mutating any of them, so a
    /// rejected read is all-or-nothing: no partial consumption, cursor
    /// and counters stay aligned. With no region open this is a no-op —
    /// the mandatory header fields sit outside any declared size.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::ScopeOverrun`] carrying the tightest
    /// violated budget if any open region has fewer than `n` left.
    pub fn consume(&mut self, n: usize, offset: usize) -> Result<(), WireError> {
        if let Some(scope) = self.scopes.iter().find(|s| s.remaining < n) {
            return Err(WireError::ScopeOverrun {
                offset,
                requested: n,
                remaining: scope.remaining,
            });
        }
        for scope in &mut self.scopes {
            scope.remaining -= n;
        }
        Ok(())
    }

    /// Close the innermost region.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::ScopeNotExhausted`] if the region still has
    /// budget left — the one signal that two declared sizes disagree —
    /// and [`WireError::NoOpenScope`] if nothing is open.
    pub fn close(&mut self) -> Result<(), WireError> {
        match self.scopes.pop() {
            Some(Scope { remaining: 0 }) => Ok(()),
            Some(Scope { remaining }) => Err(WireError::ScopeNotExhausted { remaining }),
            None => Err(WireError::NoOpenScope),
        }
    }

    /// Budget left in the innermost open region, if any is open.
    #[must_use]
    pub fn innermost_remaining(&self) -> Option<usize> {
        self.scopes.last().map(|s| s.remaining)
    }

    /// Number of currently open regions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_outside_any_scope_is_free() {
        let mut stack = ScopeStack::new();
        stack.consume(60, 0).unwrap();
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn open_consume_close() {
        let mut stack = ScopeStack::new();
        stack.open(5);
        stack.consume(3, 10).unwrap();
        stack.consume(2, 13).unwrap();
        stack.close().unwrap();
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn nested_scopes_shrink_together() {
        let mut stack = ScopeStack::new();
        stack.open(10);
        stack.open(4);
        stack.consume(4, 0).unwrap();
        assert_eq!(stack.innermost_remaining(), Some(0));
        stack.close().unwrap();
        assert_eq!(stack.innermost_remaining(), Some(6));
        stack.consume(6, 4).unwrap();
        stack.close().unwrap();
    }

    #[test]
    fn overrun_checks_every_open_scope() {
        let mut stack = ScopeStack::new();
        stack.open(10);
        stack.open(20); // inner declares more than the outer has
        let err = stack.consume(15, 7).unwrap_err();
        assert!(matches!(
            err,
            WireError::ScopeOverrun {
                offset: 7,
                requested: 15,
                remaining: 10,
            }
        ));
    }

    #[test]
    fn overrun_is_all_or_nothing() {
        let mut stack = ScopeStack::new();
        stack.open(10);
        stack.open(2);
        assert!(stack.consume(5, 0).is_err());
        // The rejected read must not have touched either counter.
        assert_eq!(stack.innermost_remaining(), Some(2));
        stack.consume(2, 0).unwrap();
        stack.close().unwrap();
        assert_eq!(stack.innermost_remaining(), Some(8));
    }

    #[test]
    fn close_with_leftover_fails() {
        let mut stack = ScopeStack::new();
        stack.open(5);
        stack.consume(3, 0).unwrap();
        assert!(matches!(
            stack.close(),
            Err(WireError::ScopeNotExhausted { remaining: 2 })
        ));
    }

    #[test]
    fn close_without_open_fails() {
        let mut stack = ScopeStack::new();
        assert!(matches!(stack.close(), Err(WireError::NoOpenScope)));
    }

    #[test]
    fn zero_size_scope_closes_immediately() {
        let mut stack = ScopeStack::new();
        stack.open(0);
        stack.close().unwrap();
    }
}
