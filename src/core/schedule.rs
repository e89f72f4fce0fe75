/// State of a self-rescheduling `requestAnimationFrame` loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameSchedule {
    /// No frame is pending; either never started or the last request failed.
    #[default]
    Idle,
    Pending(i32),
    Stopped,
}

impl FrameSchedule {
    /// Records the outcome of a frame request. A stopped loop stays stopped.
    pub fn requested(&mut self, handle: Option<i32>) {
        if *self != FrameSchedule::Stopped {
            *self = handle.map_or(FrameSchedule::Idle, FrameSchedule::Pending);
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, FrameSchedule::Pending(_))
    }

    /// Marks the loop stopped and hands back the request to cancel, if any.
    pub fn stop(&mut self) -> Option<i32> {
        match std::mem::replace(self, FrameSchedule::Stopped) {
            FrameSchedule::Pending(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_request_is_not_running() {
        let mut s = FrameSchedule::default();
        s.requested(None);
        assert_eq!(s, FrameSchedule::Idle);
        assert!(!s.is_running());
    }

    #[test]
    fn pending_request_runs_until_stopped() {
        let mut s = FrameSchedule::default();
        s.requested(Some(7));
        assert!(s.is_running());
        s.requested(Some(8));
        assert_eq!(s, FrameSchedule::Pending(8));

        assert_eq!(s.stop(), Some(8));
        assert!(!s.is_running());
        assert_eq!(s.stop(), None);
    }

    #[test]
    fn requests_after_stop_are_ignored() {
        let mut s = FrameSchedule::default();
        s.requested(Some(1));
        s.stop();
        s.requested(Some(2));
        assert_eq!(s, FrameSchedule::Stopped);
    }

    #[test]
    fn a_later_failure_stops_reporting_running() {
        let mut s = FrameSchedule::default();
        s.requested(Some(3));
        s.requested(None);
        assert!(!s.is_running());
    }
}
