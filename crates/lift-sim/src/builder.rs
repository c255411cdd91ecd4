//! Fluent builder for constructing a [`Sim`].

use lift_building::{ArrivalGenerator, ShadowElevator, WaitingList};
use lift_core::{ElevatorId, PersonId, SimConfig, SimRng};
use lift_strategy::Strategy;

use crate::{Event, EventKind, EventQueue, LoadingArbiter, Sim, SimError, SimResult, SimStats};

/// Child-stream offset of the loading arbiter's RNG.
pub const ARBITER_STREAM: u64 = 1;
/// Child-stream offset of the arrival generator's RNG.
pub const ARRIVALS_STREAM: u64 = 2;

/// The RNG an arrival generator should use for a run with `config`.
///
/// Derived from `config.seed` independently of the arbiter's stream, so the
/// same seed always replays the same callers.
pub fn arrivals_rng(config: &SimConfig) -> SimRng {
    SimRng::new(config.seed).child(ARRIVALS_STREAM)
}

/// Fluent builder for [`Sim<S, A>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: building, fleet, timetable and seed
/// - one `S: Strategy` per elevator, in `ElevatorId` order
/// - `A: ArrivalGenerator`: use [`lift_building::NoArrivals`] for a closed
///   scenario
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                       |
/// |---------------------|-------------------------------|
/// | `.waiting_list(wl)` | Empty queues on every floor   |
///
/// # Example
///
/// ```rust,ignore
/// let strategies = vec![SweepStrategy::new(), SweepStrategy::new()];
/// let mut sim = SimBuilder::new(config, strategies, NoArrivals)
///     .waiting_list(initial)
///     .build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: Strategy, A: ArrivalGenerator> {
    config:     SimConfig,
    strategies: Vec<S>,
    arrivals:   A,
    waiting:    Option<WaitingList>,
}

impl<S: Strategy, A: ArrivalGenerator> SimBuilder<S, A> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, strategies: Vec<S>, arrivals: A) -> Self {
        Self { config, strategies, arrivals, waiting: None }
    }

    /// Persons already waiting when the day starts.
    ///
    /// Its floor count must match `config.max_floor`.
    pub fn waiting_list(mut self, waiting: WaitingList) -> Self {
        self.waiting = Some(waiting);
        self
    }

    /// Validate inputs, seed the event queue and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<S, A>> {
        self.config.validate()?;
        let elevator_count = self.config.elevator_count();

        if self.strategies.len() != elevator_count {
            return Err(SimError::ElevatorCountMismatch {
                expected: elevator_count,
                got:      self.strategies.len(),
                what:     "strategies",
            });
        }

        let waiting = match self.waiting {
            Some(wl) => {
                if wl.max_floor() != self.config.max_floor {
                    return Err(SimError::Config(format!(
                        "waiting list has {} floors, building has {}",
                        wl.max_floor(),
                        self.config.max_floor
                    )));
                }
                wl
            }
            None => WaitingList::new(self.config.max_floor),
        };

        // ── Cars and their first events ───────────────────────────────────
        let mut shadows = Vec::with_capacity(elevator_count);
        let mut queue = EventQueue::new();
        for (i, &floor) in self.config.starting_floors.iter().enumerate() {
            let id = ElevatorId::try_from(i)
                .map_err(|_| SimError::Config(format!("too many elevators: {elevator_count}")))?;
            shadows.push(ShadowElevator::new(
                id,
                self.config.elevator_capacity,
                self.config.loading_capacity,
                floor,
            ));
            queue.push(self.config.start_time, Event::new(id, EventKind::ElevatorStarts { floor }));
        }

        let stats = SimStats {
            generated: waiting.count_people() as u64,
            ..SimStats::default()
        };
        let next_person = waiting.max_person_id().map_or(PersonId(0), PersonId::next);
        let arbiter = LoadingArbiter::new(SimRng::new(self.config.seed).child(ARBITER_STREAM));

        Ok(Sim {
            clock:           self.config.make_clock(),
            config:          self.config,
            shadows,
            strategies:      self.strategies,
            waiting,
            queue,
            arbiter,
            arrivals:        self.arrivals,
            stats,
            next_person,
            cutoff_signaled: false,
        })
    }
}
