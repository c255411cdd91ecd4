//! The `Sim` struct and its event loop.

use lift_building::{ArrivalGenerator, ShadowElevator, WaitingList};
use lift_core::{PersonId, SimClock, SimConfig, SimTime, TICK_SECS};
use lift_strategy::Strategy;
use tracing::{debug, info, trace};

use crate::transition::{transition, TransitionContext};
use crate::{Event, EventQueue, LoadingArbiter, SimError, SimObserver, SimReport, SimResult, SimStats};

/// The main simulation runner.
///
/// `Sim<S, A>` holds all simulation state.  Each tick:
///
/// 1. **Cutoff**: the first tick at or after `arrivals_end` tells every car
///    and strategy that nobody else will arrive.
/// 2. **Events**: drain the events due now and run each through the
///    elevator state machine, in queue order.  Loading attempts are set
///    aside.
/// 3. **Arbitration**: resolve this tick's loading attempts together.
/// 4. **Schedule**: queue every produced event at `now + duration`, never
///    earlier than the next tick.
/// 5. **Arrivals**: while arrivals are allowed, ask the generator for at
///    most one new person.  This is one draw per tick however many events
///    fired: two busy cars still get a single draw, not one each.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: Strategy, A: ArrivalGenerator> {
    /// Building, fleet and timetable.
    pub config: SimConfig,

    /// Simulation clock, one tick per step.
    pub clock: SimClock,

    /// Per-elevator state, indexed by `ElevatorId`.
    pub shadows: Vec<ShadowElevator>,

    /// Per-elevator dispatch strategies, indexed by `ElevatorId`.
    pub strategies: Vec<S>,

    /// Persons waiting on each floor.
    pub waiting: WaitingList,

    /// Pending elevator events by due time.
    pub queue: EventQueue,

    /// Resolves loading attempts; owns the tie-break RNG stream.
    pub arbiter: LoadingArbiter,

    /// Source of new callers.
    pub arrivals: A,

    /// Running counters.
    pub stats: SimStats,

    pub(crate) next_person: PersonId,
    pub(crate) cutoff_signaled: bool,
}

impl<S: Strategy, A: ArrivalGenerator> Sim<S, A> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every elevator has stopped or the day ends.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        info!(
            start = %self.clock.now,
            elevators = self.shadows.len(),
            waiting = self.waiting.count_people(),
            "simulation start"
        );
        while !self.is_finished() {
            self.step(observer)?;
        }
        let report = self.report();
        info!(
            end = %self.clock.now,
            generated = report.generated,
            transported = report.transported,
            left_waiting = report.left_waiting,
            left_onboard = report.left_onboard(),
            "simulation end"
        );
        observer.on_sim_end(self.clock.now, &report);
        Ok(report)
    }

    /// Run exactly `n` ticks from the current position, ignoring the end
    /// conditions.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u32, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Process the current tick and advance the clock.
    ///
    /// Returns the number of events that fired.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let now = self.clock.now;
        observer.on_tick_start(now);
        let processed = self.process_tick(now, observer)?;
        observer.on_tick_end(now, processed);
        self.clock.advance();
        Ok(processed)
    }

    /// `true` once every car has stopped or the end of day is reached.
    pub fn is_finished(&self) -> bool {
        self.clock.now >= self.config.end_of_day || self.shadows.iter().all(ShadowElevator::is_stopped)
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now
    }

    /// Persons currently waiting on a floor or riding a car.
    pub fn people_in_system(&self) -> usize {
        self.waiting.count_people() + self.shadows.iter().map(ShadowElevator::onboard_count).sum::<usize>()
    }

    /// Snapshot of the run so far.
    pub fn report(&self) -> SimReport {
        SimReport::new(self.clock.now, &self.stats, &self.shadows, &self.waiting)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: SimTime, observer: &mut O) -> SimResult<usize> {
        for strategy in &mut self.strategies {
            strategy.on_tick(now);
        }

        if now >= self.config.arrivals_end && !self.cutoff_signaled {
            self.signal_cutoff(now);
        }

        let processed = match self.queue.drain_due(now) {
            None => 0,
            Some(events) => self.process_events(now, events, observer)?,
        };

        if now < self.config.arrivals_end {
            self.inject_arrival(now, observer)?;
        }
        Ok(processed)
    }

    fn process_events<O: SimObserver>(
        &mut self,
        now:      SimTime,
        events:   Vec<Event>,
        observer: &mut O,
    ) -> SimResult<usize> {
        let count = events.len();
        let mut attempts = Vec::new();

        for event in events {
            observer.on_event(now, &event);
            debug!(%now, %event, "fire");

            let idx = event.elevator.index();
            let (Some(shadow), Some(strategy)) = (self.shadows.get_mut(idx), self.strategies.get_mut(idx)) else {
                return Err(SimError::UnknownElevator(event.elevator));
            };
            let mut ctx = TransitionContext {
                now,
                config: &self.config,
                shadow,
                waiting: &mut self.waiting,
                strategy,
                stats: &mut self.stats,
            };
            match transition(&mut ctx, event)? {
                None => {}
                Some(next) if next.is_attempt() => attempts.push(next),
                Some(next) => self.schedule(now, next),
            }
        }

        if !attempts.is_empty() {
            let resolved = self.arbiter.resolve(now, attempts, &mut self.shadows, &mut self.waiting)?;
            for next in resolved {
                self.schedule(now, next);
            }
        }

        self.stats.events_processed += count as u64;
        self.stats.last_event_time = Some(now);
        Ok(count)
    }

    /// Queue `event` after its duration; a zero duration lands on the next
    /// tick so the loop always makes progress.
    fn schedule(&mut self, now: SimTime, event: Event) {
        let at = now + event.duration().max(TICK_SECS);
        trace!(%now, %at, %event, "schedule");
        self.queue.push(at, event);
    }

    fn signal_cutoff(&mut self, now: SimTime) {
        info!(%now, "arrivals closed");
        for shadow in &mut self.shadows {
            shadow.last_person_arrived();
        }
        for strategy in &mut self.strategies {
            strategy.on_last_person_arrived(now);
        }
        self.cutoff_signaled = true;
    }

    fn inject_arrival<O: SimObserver>(&mut self, now: SimTime, observer: &mut O) -> SimResult<()> {
        let id = self.next_person;
        let Some(arrival) = self.arrivals.next_arrival(now, id) else {
            return Ok(());
        };
        if arrival.person.id() != id {
            return Err(SimError::Invariant(format!(
                "arrival generator returned {} instead of {id}",
                arrival.person.id()
            )));
        }
        let floor = arrival.floor;
        self.waiting.add(floor, arrival.person)?;
        self.next_person = id.next();
        self.stats.generated += 1;

        if let Some(person) = self.waiting.list_for(floor).last() {
            debug!(%now, floor, person = %id, destination = person.destination(), "arrival");
            observer.on_arrival(now, floor, person);
            for strategy in &mut self.strategies {
                strategy.on_new_person(now, floor, person);
            }
        }
        Ok(())
    }
}
