//! Arcs and the time-ordered arc sequence.
//!
//! An arc is one row of the chart: a message between two entities, a box or
//! note spanning entities, or a timeline annotation such as a divider. The
//! order of arcs in an [`ArcSequence`] is the time order of the chart.
//! A [`ArcKind::Parallel`] marker makes the arc after it share the time slot
//! of the arc before it; see [`ArcSequence::time_slots`].

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeSet, Attributed};

/// The closed set of arc kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcKind {
    /// `=>` method call
    Method,
    /// `>>` return value
    RetVal,
    /// `->` signal
    Signal,
    /// `=>>` callback
    Callback,
    /// `:>` double line
    Double,
    /// `...` discontinuity in the time line
    Disco,
    /// `---` divider
    Divider,
    /// `|||` extra space
    Space,
    /// `,` between two arcs
    Parallel,
    Box,
    ABox,
    RBox,
    Note,
    /// `-x` lost message
    Loss,
    Activation,
    Deactivation,
    Destructor,
}

impl ArcKind {
    /// Every arc kind, in declaration order.
    pub const ALL: [ArcKind; 17] = [
        ArcKind::Method,
        ArcKind::RetVal,
        ArcKind::Signal,
        ArcKind::Callback,
        ArcKind::Double,
        ArcKind::Disco,
        ArcKind::Divider,
        ArcKind::Space,
        ArcKind::Parallel,
        ArcKind::Box,
        ArcKind::ABox,
        ArcKind::RBox,
        ArcKind::Note,
        ArcKind::Loss,
        ArcKind::Activation,
        ArcKind::Deactivation,
        ArcKind::Destructor,
    ];

    pub fn is_parallel(&self) -> bool {
        matches!(self, ArcKind::Parallel)
    }

    /// Returns `true` for box-like containers, notes included.
    pub fn is_box(&self) -> bool {
        matches!(
            self,
            ArcKind::Box | ArcKind::ABox | ArcKind::RBox | ArcKind::Note
        )
    }

    /// Returns `true` for kinds drawn as a line between two entities.
    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            ArcKind::Method
                | ArcKind::RetVal
                | ArcKind::Signal
                | ArcKind::Callback
                | ArcKind::Double
                | ArcKind::Loss
        )
    }

    /// The chart-language token for kinds written as a symbol.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            ArcKind::Method => Some("=>"),
            ArcKind::RetVal => Some(">>"),
            ArcKind::Signal => Some("->"),
            ArcKind::Callback => Some("=>>"),
            ArcKind::Double => Some(":>"),
            ArcKind::Disco => Some("..."),
            ArcKind::Divider => Some("---"),
            ArcKind::Space => Some("|||"),
            ArcKind::Parallel => Some(","),
            ArcKind::Loss => Some("-x"),
            _ => None,
        }
    }
}

impl FromStr for ArcKind {
    type Err = &'static str;

    /// Parses either the symbol of an arc (`=>`, `---`, ...) or its kind name.
    ///
    /// Kind names are matched ASCII case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = Self::ALL.into_iter().find(|kind| kind.symbol() == Some(s)) {
            return Ok(kind);
        }
        match s.to_ascii_lowercase().as_str() {
            "method" => Ok(Self::Method),
            "retval" => Ok(Self::RetVal),
            "signal" => Ok(Self::Signal),
            "callback" => Ok(Self::Callback),
            "double" => Ok(Self::Double),
            "disco" => Ok(Self::Disco),
            "divider" => Ok(Self::Divider),
            "space" => Ok(Self::Space),
            "parallel" => Ok(Self::Parallel),
            "box" => Ok(Self::Box),
            "abox" => Ok(Self::ABox),
            "rbox" => Ok(Self::RBox),
            "note" => Ok(Self::Note),
            "loss" => Ok(Self::Loss),
            "activation" => Ok(Self::Activation),
            "deactivation" => Ok(Self::Deactivation),
            "destructor" => Ok(Self::Destructor),
            _ => Err("Unknown arc kind"),
        }
    }
}

impl From<ArcKind> for &'static str {
    fn from(val: ArcKind) -> Self {
        match val {
            ArcKind::Method => "method",
            ArcKind::RetVal => "retval",
            ArcKind::Signal => "signal",
            ArcKind::Callback => "callback",
            ArcKind::Double => "double",
            ArcKind::Disco => "disco",
            ArcKind::Divider => "divider",
            ArcKind::Space => "space",
            ArcKind::Parallel => "parallel",
            ArcKind::Box => "box",
            ArcKind::ABox => "abox",
            ArcKind::RBox => "rbox",
            ArcKind::Note => "note",
            ArcKind::Loss => "loss",
            ArcKind::Activation => "activation",
            ArcKind::Deactivation => "deactivation",
            ArcKind::Destructor => "destructor",
        }
    }
}

impl Display for ArcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A single arc between two entities, referenced by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc {
    source: String,
    dest: String,
    kind: ArcKind,
    input_line: u32,
    attributes: AttributeSet,
}

impl Arc {
    /// Label of the entity the arc starts from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Label of the entity the arc ends at.
    pub fn dest(&self) -> &str {
        &self.dest
    }

    pub fn kind(&self) -> ArcKind {
        self.kind
    }

    /// Line of the chart source where the arc was written.
    pub fn input_line(&self) -> u32 {
        self.input_line
    }
}

impl Attributed for Arc {
    fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeSet {
        &mut self.attributes
    }
}

impl Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token: &'static str = self.kind.symbol().unwrap_or(self.kind.into());
        write!(
            f,
            "{} {} {} ({}) @{}",
            self.source, token, self.dest, self.kind, self.input_line
        )
    }
}

/// Arcs in declaration (time) order.
///
/// # Examples
///
/// ```
/// use msc_core::arc::{ArcKind, ArcSequence};
///
/// let mut arcs = ArcSequence::new();
/// arcs.append("a", "b", ArcKind::Method, 3);
/// arcs.append("", "", ArcKind::Parallel, 3);
/// arcs.append("b", "c", ArcKind::Signal, 3);
///
/// assert_eq!(arcs.len(), 3);
/// assert_eq!(arcs.count_of_kind(ArcKind::Parallel), 1);
///
/// let slots: Vec<usize> = arcs.time_slots().map(|(slot, _)| slot).collect();
/// assert_eq!(slots, vec![0, 0, 0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArcSequence {
    arcs: Vec<Arc>,
}

impl ArcSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new arc and return it for attribute attachment.
    ///
    /// Endpoint labels are stored as given; they are not checked against any
    /// entity table.
    pub fn append(
        &mut self,
        source: impl Into<String>,
        dest: impl Into<String>,
        kind: ArcKind,
        input_line: u32,
    ) -> &mut Arc {
        let index = self.arcs.len();
        self.arcs.push(Arc {
            source: source.into(),
            dest: dest.into(),
            kind,
            input_line,
            attributes: AttributeSet::new(),
        });
        &mut self.arcs[index]
    }

    pub fn get(&self, index: usize) -> Option<&Arc> {
        self.arcs.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Arc> {
        self.arcs.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Number of arcs of the given kind.
    pub fn count_of_kind(&self, kind: ArcKind) -> usize {
        self.arcs.iter().filter(|arc| arc.kind == kind).count()
    }

    /// Iterate over arcs in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc> {
        self.arcs.iter()
    }

    /// Iterate over arcs paired with the time slot each one occupies.
    pub fn time_slots(&self) -> TimeSlots<'_> {
        TimeSlots {
            arcs: self.arcs.iter(),
            next_slot: 0,
            current: None,
            joined: false,
        }
    }

    pub(crate) fn as_slice(&self) -> &[Arc] {
        &self.arcs
    }
}

impl<'a> IntoIterator for &'a ArcSequence {
    type Item = &'a Arc;
    type IntoIter = std::slice::Iter<'a, Arc>;

    fn into_iter(self) -> Self::IntoIter {
        self.arcs.iter()
    }
}

/// Iterator returned by [`ArcSequence::time_slots`].
///
/// Every non-marker arc opens a new slot unless a parallel marker precedes
/// it, in which case it joins the slot of the arc before the marker. The
/// marker itself reports the slot it joins. Slots are numbered from zero
/// without gaps.
#[derive(Debug, Clone)]
pub struct TimeSlots<'a> {
    arcs: std::slice::Iter<'a, Arc>,
    next_slot: usize,
    current: Option<usize>,
    joined: bool,
}

impl<'a> Iterator for TimeSlots<'a> {
    type Item = (usize, &'a Arc);

    fn next(&mut self) -> Option<Self::Item> {
        let arc = self.arcs.next()?;

        let slot = if arc.kind.is_parallel() {
            self.joined = true;
            self.current.unwrap_or(self.next_slot)
        } else {
            match self.current {
                Some(current) if self.joined => {
                    self.joined = false;
                    current
                }
                _ => {
                    self.joined = false;
                    let slot = self.next_slot;
                    self.next_slot += 1;
                    self.current = Some(slot);
                    slot
                }
            }
        };

        Some((slot, arc))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.arcs.size_hint()
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn kind_strategy() -> impl Strategy<Value = ArcKind> {
        prop::sample::select(ArcKind::ALL.to_vec())
    }

    fn kinds_strategy() -> impl Strategy<Value = Vec<ArcKind>> {
        prop::collection::vec(kind_strategy(), 0..64)
    }

    fn build(kinds: &[ArcKind]) -> ArcSequence {
        let mut arcs = ArcSequence::new();
        for (i, kind) in kinds.iter().enumerate() {
            arcs.append(format!("s{i}"), format!("d{i}"), *kind, i as u32);
        }
        arcs
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Iteration yields exactly the appended arcs, in order.
    fn check_iteration_matches_appends(kinds: Vec<ArcKind>) -> Result<(), TestCaseError> {
        let arcs = build(&kinds);

        prop_assert_eq!(arcs.len(), kinds.len());
        for (i, (arc, kind)) in arcs.iter().zip(&kinds).enumerate() {
            prop_assert_eq!(arc.kind(), *kind);
            prop_assert_eq!(arc.source(), format!("s{i}"));
            prop_assert_eq!(arc.dest(), format!("d{i}"));
            prop_assert_eq!(arc.input_line(), i as u32);
        }
        Ok(())
    }

    /// The parallel count equals the number of parallel markers appended.
    fn check_parallel_count(kinds: Vec<ArcKind>) -> Result<(), TestCaseError> {
        let arcs = build(&kinds);
        let expected = kinds.iter().filter(|k| k.is_parallel()).count();

        prop_assert_eq!(arcs.count_of_kind(ArcKind::Parallel), expected);
        Ok(())
    }

    /// Time slots never decrease and never skip a number.
    fn check_time_slots_are_dense(kinds: Vec<ArcKind>) -> Result<(), TestCaseError> {
        let arcs = build(&kinds);
        let slots: Vec<usize> = arcs.time_slots().map(|(slot, _)| slot).collect();

        prop_assert_eq!(slots.len(), kinds.len());
        if let Some(first) = slots.first() {
            prop_assert_eq!(*first, 0);
        }
        for pair in slots.windows(2) {
            prop_assert!(pair[1] == pair[0] || pair[1] == pair[0] + 1);
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn iteration_matches_appends(kinds in kinds_strategy()) {
            check_iteration_matches_appends(kinds)?;
        }

        #[test]
        fn parallel_count(kinds in kinds_strategy()) {
            check_parallel_count(kinds)?;
        }

        #[test]
        fn time_slots_are_dense(kinds in kinds_strategy()) {
            check_time_slots_are_dense(kinds)?;
        }
    }
}
