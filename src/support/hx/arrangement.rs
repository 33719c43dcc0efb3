/// Relative direction of the two streams.
///
/// The tube side always enters at face 0 and leaves at face `n`.
/// The arrangement decides where the shell side enters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlowArrangement {
    /// Shell side enters at face `n` and flows toward face 0.
    #[default]
    CounterFlow,
    /// Shell side enters at face 0 alongside the tube side.
    ParallelFlow,
}

impl FlowArrangement {
    /// Selects between values depending on the arrangement.
    #[must_use]
    pub fn select<T>(self, counter: T, parallel: T) -> T {
        match self {
            Self::CounterFlow => counter,
            Self::ParallelFlow => parallel,
        }
    }

    /// Face index where the shell side enters an exchanger of `segments` segments.
    #[must_use]
    pub fn shell_inlet_face(self, segments: usize) -> usize {
        self.select(segments, 0)
    }

    /// Face index where the shell side leaves an exchanger of `segments` segments.
    #[must_use]
    pub fn shell_outlet_face(self, segments: usize) -> usize {
        self.select(0, segments)
    }

    /// Upstream and downstream shell-side face indices of `segment`.
    #[must_use]
    pub fn shell_faces(self, segment: usize) -> (usize, usize) {
        self.select((segment + 1, segment), (segment, segment + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_boundary_placement() {
        assert_eq!(FlowArrangement::CounterFlow.shell_inlet_face(10), 10);
        assert_eq!(FlowArrangement::CounterFlow.shell_outlet_face(10), 0);
        assert_eq!(FlowArrangement::ParallelFlow.shell_inlet_face(10), 0);
        assert_eq!(FlowArrangement::ParallelFlow.shell_outlet_face(10), 10);
    }

    #[test]
    fn shell_faces_follow_flow() {
        assert_eq!(FlowArrangement::CounterFlow.shell_faces(3), (4, 3));
        assert_eq!(FlowArrangement::ParallelFlow.shell_faces(3), (3, 4));
    }
}
