use itertools::iproduct;
use std::fmt;

/// One of the two header protocols a tunnelled packet may carry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Protocol {
    P4,
    P6,
}

impl Protocol {
    pub const ALL: [Protocol; 2] = [Protocol::P4, Protocol::P6];
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::P4 => write!(f, "P4"),
            Protocol::P6 => write!(f, "P6"),
        }
    }
}

/// The ten stack actions a node may be equipped to perform.
///
/// Kept as a data-driven closed set (see [`Action::all`]) rather than
/// hand-unrolled in every builder, so that φ₃/φ₅/φ₆ stay uniform across
/// the action kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Action {
    /// Forward without touching the stack.
    Transmit(Protocol),
    /// Precondition: top is `.0`. Effect: push `.1` above it.
    Push(Protocol, Protocol),
    /// Precondition: top is `.1` sitting on `.0`. Effect: pop `.1`.
    Pop(Protocol, Protocol),
}

impl Action {
    /// All ten action tags, in a stable but otherwise unspecified order.
    pub fn all() -> [Action; 10] {
        let mut actions = [Action::Transmit(Protocol::P4); 10];
        let mut i = 0;
        for p in Protocol::ALL {
            actions[i] = Action::Transmit(p);
            i += 1;
        }
        for (a, b) in iproduct!(Protocol::ALL, Protocol::ALL) {
            actions[i] = Action::Push(a, b);
            i += 1;
        }
        for (a, b) in iproduct!(Protocol::ALL, Protocol::ALL) {
            actions[i] = Action::Pop(a, b);
            i += 1;
        }
        actions
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Transmit(p) => write!(f, "transmit_{p}"),
            Action::Push(a, b) => write!(f, "push_{a}_{b}"),
            Action::Pop(a, b) => write!(f, "pop_{a}_{b}"),
        }
    }
}
