//! Window-frame metadata attached to window expressions.

use std::fmt;

/// How frame bounds are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowFrameUnits {
    Rows,
    Range,
    Groups,
}

impl fmt::Display for WindowFrameUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rows => "ROWS",
            Self::Range => "RANGE",
            Self::Groups => "GROUPS",
        })
    }
}

/// One edge of a window frame.
///
/// `Preceding`/`Following` always carry their offset; a current-row bound
/// never does. The wire codec rejects the other combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowFrameBound {
    CurrentRow,
    Preceding(u64),
    Following(u64),
}

impl fmt::Display for WindowFrameBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentRow => f.write_str("CURRENT ROW"),
            Self::Preceding(n) => write!(f, "{n} PRECEDING"),
            Self::Following(n) => write!(f, "{n} FOLLOWING"),
        }
    }
}

/// A window frame: units, a mandatory start bound, and an optional end
/// bound. An absent end bound is distinct from any present bound value.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrame {
    pub units: WindowFrameUnits,
    pub start_bound: WindowFrameBound,
    pub end_bound: Option<WindowFrameBound>,
}

impl WindowFrame {
    pub fn new(
        units: WindowFrameUnits,
        start_bound: WindowFrameBound,
        end_bound: Option<WindowFrameBound>,
    ) -> Self {
        Self {
            units,
            start_bound,
            end_bound,
        }
    }
}

impl fmt::Display for WindowFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.end_bound {
            Some(end) => write!(
                f,
                "{} BETWEEN {} AND {end}",
                self.units, self.start_bound
            ),
            None => write!(f, "{} {}", self.units, self.start_bound),
        }
    }
}
