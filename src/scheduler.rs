use std::collections::BTreeMap;
use std::time::Duration;

/// Work the session asks to run later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduledTask {
    MatrixOff,
    AutoSubmit(String),
    Exit,
}

/// Cancellation token returned by [`Scheduler::schedule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// One-shot tasks on a virtual clock.
///
/// Nothing here reads the wall clock: callers move time forward with
/// [`Scheduler::advance`], so tests can drive it deterministically and the
/// UI can drive it from real timers.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_seq: u64,
    pending: BTreeMap<(Duration, u64), ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: Duration, task: ScheduledTask) -> TaskHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert((self.now + delay, seq), task);
        TaskHandle(seq)
    }

    /// Returns false if the task already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let key = self
            .pending
            .keys()
            .find(|(_, seq)| *seq == handle.0)
            .copied();
        match key {
            Some(key) => self.pending.remove(&key).is_some(),
            None => false,
        }
    }

    /// Time left until the earliest pending task, if any.
    pub fn until_next(&self) -> Option<Duration> {
        self.pending
            .keys()
            .next()
            .map(|(deadline, _)| deadline.saturating_sub(self.now))
    }

    /// Moves the clock forward and drains every task that came due, earliest
    /// first. Tasks sharing a deadline come out in scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledTask> {
        self.now += elapsed;
        let later = self.pending.split_off(&(self.now, u64::MAX));
        let due = std::mem::replace(&mut self.pending, later);
        due.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(300), ScheduledTask::Exit);
        scheduler.schedule(ms(100), ScheduledTask::MatrixOff);
        scheduler.schedule(ms(100), ScheduledTask::AutoSubmit("help".into()));

        assert!(scheduler.advance(ms(99)).is_empty());
        assert_eq!(
            scheduler.advance(ms(1)),
            vec![
                ScheduledTask::MatrixOff,
                ScheduledTask::AutoSubmit("help".into())
            ]
        );
        assert_eq!(scheduler.until_next(), Some(ms(200)));
        assert_eq!(scheduler.advance(ms(500)), vec![ScheduledTask::Exit]);
        assert_eq!(scheduler.until_next(), None);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(ms(50), ScheduledTask::MatrixOff);
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(scheduler.advance(ms(1000)).is_empty());
    }

    #[test]
    fn delays_are_relative_to_current_time() {
        let mut scheduler = Scheduler::new();
        scheduler.advance(ms(1000));
        scheduler.schedule(ms(10), ScheduledTask::Exit);
        assert_eq!(scheduler.until_next(), Some(ms(10)));
        assert_eq!(scheduler.advance(ms(10)), vec![ScheduledTask::Exit]);
        assert_eq!(scheduler.until_next(), None);
    }
}
