//! Unit and scenario tests for lift-sim.

use lift_building::{ScheduledCall, ShadowElevator, WaitingList};
use lift_core::{ElevatorId, Floor, Person, PersonId, SimConfig, SimTime};

use crate::{Event, EventKind, SimObserver, SimReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

const T0: SimTime = SimTime::from_hms(6, 0, 0);

/// One car at floor 1, arrivals closed from the first tick.
fn one_car(capacity: usize) -> SimConfig {
    SimConfig {
        starting_floors:   vec![1],
        elevator_capacity: capacity,
        arrivals_end:      T0,
        ..SimConfig::default()
    }
}

fn call(floor: Floor, destination: Floor) -> ScheduledCall {
    ScheduledCall { time: T0, floor, name: format!("from-{floor}"), destination }
}

fn waiting(calls: &[(Floor, Floor)]) -> WaitingList {
    WaitingList::with_calls(10, calls.iter().map(|&(f, d)| call(f, d)).collect()).unwrap()
}

/// Records what the loop reports.
#[derive(Default)]
struct Recorder {
    events:   Vec<(SimTime, ElevatorId, &'static str)>,
    arrivals: Vec<(SimTime, Floor, PersonId)>,
    ticks:    usize,
    ended:    Option<SimTime>,
}

impl SimObserver for Recorder {
    fn on_event(&mut self, time: SimTime, event: &Event) {
        self.events.push((time, event.elevator, event.name()));
    }

    fn on_arrival(&mut self, time: SimTime, floor: Floor, person: &Person) {
        self.arrivals.push((time, floor, person.id()));
    }

    fn on_tick_end(&mut self, _time: SimTime, _processed: usize) {
        self.ticks += 1;
    }

    fn on_sim_end(&mut self, time: SimTime, _report: &SimReport) {
        self.ended = Some(time);
    }
}

// ── Durations ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod durations {
    use super::*;
    use crate::compute_duration;

    #[test]
    fn travel_bands() {
        assert_eq!(compute_duration(4, 4), 0);
        assert_eq!(compute_duration(1, 2), 18);
        assert_eq!(compute_duration(1, 3), 24);
        assert_eq!(compute_duration(1, 4), 30);
        assert_eq!(compute_duration(1, 5), 39);
        assert_eq!(compute_duration(1, 7), 45);
    }

    #[test]
    fn travel_is_symmetric_and_tick_aligned() {
        for a in 1..=12 {
            for b in 1..=12 {
                assert_eq!(compute_duration(a, b), compute_duration(b, a));
                assert_eq!(compute_duration(a, b) % lift_core::TICK_SECS, 0);
            }
        }
    }

    #[test]
    fn fixed_durations() {
        let e = |kind| Event::new(ElevatorId(0), kind);
        assert_eq!(e(EventKind::ElevatorStarts { floor: 1 }).duration(), 0);
        assert_eq!(e(EventKind::DoorOpening { floor: 1 }).duration(), 3);
        assert_eq!(e(EventKind::DoorClosing { floor: 1, next: 2 }).duration(), 3);
        assert_eq!(e(EventKind::LoadingFirst { floor: 1, people: vec![] }).duration(), 9);
        assert_eq!(e(EventKind::LoadingNext { floor: 1, people: vec![] }).duration(), 6);
        assert_eq!(e(EventKind::UnloadingFirst { floor: 1, people: vec![] }).duration(), 9);
        assert_eq!(e(EventKind::UnloadingNext { floor: 1, people: vec![] }).duration(), 6);
        assert_eq!(e(EventKind::StandByAtFloor { floor: 1 }).duration(), 3);
        assert_eq!(e(EventKind::StoppingAtFloor { floor: 1 }).duration(), 3);
        assert_eq!(e(EventKind::ArrivesAtFloor { from: 2, to: 5 }).duration(), 30);
    }

    #[test]
    fn event_accessors() {
        let arrive = Event::new(ElevatorId(1), EventKind::ArrivesAtFloor { from: 2, to: 5 });
        assert_eq!(arrive.floor(), 5);
        assert_eq!(arrive.name(), "ArrivesAtFloor");
        assert!(arrive.people().is_empty());
        assert_eq!(arrive.to_string(), "ElevatorId(1) ArrivesAtFloor 2 -> 5");

        let load = Event::new(ElevatorId(0), EventKind::LoadingFirst { floor: 3, people: vec![PersonId(7)] });
        assert_eq!(load.people(), &[PersonId(7)]);
        assert!(!load.is_attempt());
        assert!(Event::new(ElevatorId(0), EventKind::AttemptToLoadNext { floor: 3, planned: vec![4] }).is_attempt());
    }
}

// ── EventQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;
    use crate::EventQueue;

    fn stand_by(id: u16) -> Event {
        Event::new(ElevatorId(id), EventKind::StandByAtFloor { floor: 1 })
    }

    #[test]
    fn drains_due_events_in_order() {
        let mut q = EventQueue::new();
        q.push(T0 + 6, stand_by(2));
        q.push(T0 + 3, stand_by(0));
        q.push(T0 + 3, stand_by(1));
        assert_eq!(q.len(), 3);
        assert_eq!(q.next_time(), Some(T0 + 3));

        assert!(q.drain_due(T0).is_none());
        let due = q.drain_due(T0 + 3).unwrap();
        assert_eq!(due.iter().map(|e| e.elevator).collect::<Vec<_>>(), vec![ElevatorId(0), ElevatorId(1)]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.pending_for(ElevatorId(2)), 1);
        assert_eq!(q.pending_for(ElevatorId(0)), 0);
    }

    #[test]
    fn overdue_events_are_drained_too() {
        let mut q = EventQueue::new();
        q.push(T0, stand_by(0));
        q.push(T0 + 3, stand_by(1));
        let due = q.drain_due(T0 + 9).unwrap();
        assert_eq!(due.len(), 2);
        assert!(q.is_empty());
        assert_eq!(q.next_time(), None);
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod transition {
    use lift_strategy::{IdleStrategy, NearestCallStrategy, Strategy};

    use super::*;
    use crate::{transition, SimError, SimStats, TransitionContext};

    fn fire<S: Strategy>(
        strategy: &mut S,
        shadow:   &mut ShadowElevator,
        wl:       &mut WaitingList,
        kind:     EventKind,
    ) -> Result<Option<Event>, SimError> {
        let config = SimConfig::default();
        let mut stats = SimStats::default();
        let mut ctx = TransitionContext {
            now:      T0,
            config:   &config,
            shadow,
            waiting:  wl,
            strategy,
            stats:    &mut stats,
        };
        transition(&mut ctx, Event::new(ElevatorId(0), kind))
    }

    fn car(floor: Floor) -> ShadowElevator {
        ShadowElevator::new(ElevatorId(0), 15, 3, floor)
    }

    #[test]
    fn stand_by_loads_people_here() {
        let mut shadow = car(3);
        let mut wl = waiting(&[(3, 7)]);
        let next = fire(&mut NearestCallStrategy, &mut shadow, &mut wl, EventKind::StandByAtFloor { floor: 3 })
            .unwrap()
            .unwrap();
        assert_eq!(
            next.kind,
            EventKind::AttemptToLoadFirst { floor: 3, planned: vec![7], doors_open: true }
        );
        assert_eq!(shadow.planned_floors(), &[7]);
    }

    #[test]
    fn stand_by_leaves_for_a_call() {
        let mut shadow = car(3);
        let mut wl = waiting(&[(6, 1)]);
        let next = fire(&mut NearestCallStrategy, &mut shadow, &mut wl, EventKind::StandByAtFloor { floor: 3 })
            .unwrap()
            .unwrap();
        assert_eq!(next.kind, EventKind::DoorClosing { floor: 3, next: 6 });
    }

    #[test]
    fn idle_car_stands_by_until_cutoff() {
        let mut shadow = car(1);
        let mut wl = waiting(&[]);
        let next = fire(&mut IdleStrategy, &mut shadow, &mut wl, EventKind::StandByAtFloor { floor: 1 })
            .unwrap()
            .unwrap();
        assert_eq!(next.kind, EventKind::StandByAtFloor { floor: 1 });

        shadow.last_person_arrived();
        let next = fire(&mut IdleStrategy, &mut shadow, &mut wl, EventKind::StandByAtFloor { floor: 1 })
            .unwrap()
            .unwrap();
        assert_eq!(next.kind, EventKind::StoppingAtFloor { floor: 1 });

        let last = fire(&mut IdleStrategy, &mut shadow, &mut wl, EventKind::StoppingAtFloor { floor: 1 }).unwrap();
        assert!(last.is_none());
        assert!(shadow.is_stopped());
    }

    #[test]
    fn arrival_pops_plan_and_opens_doors() {
        let mut shadow = car(2);
        shadow.set_planned_floors(vec![5, 7]);
        let mut wl = waiting(&[]);
        let next = fire(&mut IdleStrategy, &mut shadow, &mut wl, EventKind::ArrivesAtFloor { from: 2, to: 5 })
            .unwrap()
            .unwrap();
        assert_eq!(next.kind, EventKind::DoorOpening { floor: 5 });
        assert_eq!(shadow.current_floor(), 5);
        assert_eq!(shadow.planned_floors(), &[7]);
    }

    #[test]
    fn unloading_comes_in_batches() {
        let mut shadow = car(4);
        shadow.board((0..5).map(|i| Person::new(PersonId(i), T0, "x", 4)).collect());
        let mut wl = waiting(&[]);
        let next = fire(&mut IdleStrategy, &mut shadow, &mut wl, EventKind::DoorOpening { floor: 4 })
            .unwrap()
            .unwrap();
        let people = match next.kind {
            EventKind::UnloadingFirst { people, .. } => people,
            other => panic!("expected UnloadingFirst, got {other:?}"),
        };
        assert_eq!(people.len(), 3);

        let next = fire(&mut IdleStrategy, &mut shadow, &mut wl, EventKind::UnloadingFirst { floor: 4, people })
            .unwrap()
            .unwrap();
        assert!(matches!(next.kind, EventKind::UnloadingNext { ref people, .. } if people.len() == 2));
        assert_eq!(shadow.onboard_count(), 2);
    }

    #[test]
    fn loading_continues_while_people_remain() {
        let mut shadow = car(2);
        shadow.set_planned_floors(vec![3]);
        let mut wl = waiting(&[(2, 3), (2, 3), (2, 3), (2, 3), (2, 3)]);
        let batch = shadow.next_people_to_load(&mut wl);
        let ids: Vec<PersonId> = batch.iter().map(Person::id).collect();
        assert_eq!(ids.len(), 3);
        shadow.board(batch);

        let next = fire(&mut IdleStrategy, &mut shadow, &mut wl, EventKind::LoadingFirst { floor: 2, people: ids })
            .unwrap()
            .unwrap();
        assert_eq!(next.kind, EventKind::AttemptToLoadNext { floor: 2, planned: vec![3] });

        let rest = shadow.next_people_to_load(&mut wl);
        let ids: Vec<PersonId> = rest.iter().map(Person::id).collect();
        assert_eq!(ids.len(), 2);
        shadow.board(rest);

        let next = fire(&mut IdleStrategy, &mut shadow, &mut wl, EventKind::LoadingNext { floor: 2, people: ids })
            .unwrap()
            .unwrap();
        assert_eq!(next.kind, EventKind::DoorClosing { floor: 2, next: 3 });
        assert_eq!(shadow.onboard_count(), 5);
    }

    #[test]
    fn door_closing_without_plan_is_an_error() {
        let mut shadow = car(2);
        let mut wl = waiting(&[]);
        let err = fire(&mut IdleStrategy, &mut shadow, &mut wl, EventKind::DoorClosing { floor: 2, next: 3 })
            .unwrap_err();
        assert!(matches!(err, SimError::NoPlannedFloor(ElevatorId(0))));
    }

    #[test]
    fn attempts_are_rejected() {
        let mut shadow = car(2);
        let mut wl = waiting(&[]);
        let err = fire(
            &mut IdleStrategy,
            &mut shadow,
            &mut wl,
            EventKind::AttemptToLoadNext { floor: 2, planned: vec![3] },
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Invariant(_)));
    }
}

// ── LoadingArbiter ────────────────────────────────────────────────────────────

#[cfg(test)]
mod arbitration {
    use lift_core::SimRng;

    use super::*;
    use crate::LoadingArbiter;

    /// A car at `floor` with `onboard` persons (destination 5) and `planned`.
    fn car(id: u16, capacity: usize, floor: Floor, onboard: u32, planned: &[Floor]) -> ShadowElevator {
        let mut c = ShadowElevator::new(ElevatorId(id), capacity, 3, floor);
        c.board((0..onboard).map(|i| Person::new(PersonId(900 + i), T0, "rider", 5)).collect());
        c.set_planned_floors(planned.to_vec());
        c
    }

    fn attempt(id: u16, floor: Floor, planned: &[Floor]) -> Event {
        Event::new(
            ElevatorId(id),
            EventKind::AttemptToLoadFirst { floor, planned: planned.to_vec(), doors_open: true },
        )
    }

    fn resolve(seed: u64, shadows: &mut [ShadowElevator], wl: &mut WaitingList, attempts: Vec<Event>) -> Vec<Event> {
        LoadingArbiter::new(SimRng::new(seed)).resolve(T0, attempts, shadows, wl).unwrap()
    }

    #[test]
    fn single_car_takes_matching_people() {
        let mut shadows = vec![car(0, 15, 3, 0, &[5])];
        let mut wl = waiting(&[(3, 5), (3, 1), (3, 5)]);
        let out = resolve(1, &mut shadows, &mut wl, vec![attempt(0, 3, &[5])]);
        assert_eq!(
            out,
            vec![Event::new(ElevatorId(0), EventKind::LoadingFirst { floor: 3, people: vec![PersonId(0), PersonId(2)] })]
        );
        assert_eq!(wl.list_for(3).len(), 1);
        assert_eq!(shadows[0].onboard_count(), 2);
    }

    #[test]
    fn next_attempt_loads_next_batch() {
        let mut shadows = vec![car(0, 15, 3, 3, &[5])];
        let mut wl = waiting(&[(3, 5), (3, 5)]);
        let again = Event::new(ElevatorId(0), EventKind::AttemptToLoadNext { floor: 3, planned: vec![5] });
        let out = resolve(1, &mut shadows, &mut wl, vec![again]);
        assert_eq!(
            out,
            vec![Event::new(ElevatorId(0), EventKind::LoadingNext { floor: 3, people: vec![PersonId(0), PersonId(1)] })]
        );
        assert_eq!(shadows[0].onboard_count(), 5);
        assert!(wl.list_for(3).is_empty());
    }

    #[test]
    fn empty_attempt_departs() {
        let mut shadows = vec![car(0, 15, 3, 0, &[6])];
        let mut wl = waiting(&[(3, 1)]);
        let first_leg = Event::new(
            ElevatorId(0),
            EventKind::AttemptToLoadFirst { floor: 3, planned: vec![6], doors_open: false },
        );
        let out = resolve(1, &mut shadows, &mut wl, vec![first_leg]);
        assert_eq!(out[0].kind, EventKind::ArrivesAtFloor { from: 3, to: 6 });

        let out = resolve(1, &mut shadows, &mut wl, vec![attempt(0, 3, &[6])]);
        assert_eq!(out[0].kind, EventKind::DoorClosing { floor: 3, next: 6 });
        assert_eq!(wl.list_for(3).len(), 1);
    }

    #[test]
    fn earliest_stop_wins() {
        let mut shadows = vec![car(0, 15, 3, 0, &[4, 5]), car(1, 15, 3, 0, &[5])];
        let mut wl = waiting(&[(3, 5)]);
        let out = resolve(1, &mut shadows, &mut wl, vec![attempt(1, 3, &[5]), attempt(0, 3, &[4, 5])]);
        assert_eq!(out[0].kind, EventKind::DoorClosing { floor: 3, next: 4 });
        assert_eq!(out[1].kind, EventKind::LoadingFirst { floor: 3, people: vec![PersonId(0)] });
    }

    #[test]
    fn least_loaded_wins() {
        let mut shadows = vec![car(0, 15, 3, 2, &[5]), car(1, 15, 3, 0, &[5])];
        let mut wl = waiting(&[(3, 5)]);
        let out = resolve(1, &mut shadows, &mut wl, vec![attempt(0, 3, &[5]), attempt(1, 3, &[5])]);
        assert_eq!(out[0].elevator, ElevatorId(0));
        assert!(out[0].people().is_empty());
        assert_eq!(out[1].people(), &[PersonId(0)]);
    }

    #[test]
    fn full_car_is_skipped() {
        let mut shadows = vec![car(0, 2, 3, 1, &[5]), car(1, 2, 3, 2, &[5])];
        let mut wl = waiting(&[(3, 5), (3, 5)]);
        let out = resolve(1, &mut shadows, &mut wl, vec![attempt(0, 3, &[5]), attempt(1, 3, &[5])]);
        assert_eq!(out[0].people(), &[PersonId(0)]);
        assert!(out[1].people().is_empty());
        // Car 0 filled up on the first person; the second one stays.
        assert_eq!(wl.list_for(3).len(), 1);
        assert_eq!(shadows[0].onboard_count(), 2);
    }

    #[test]
    fn nobody_boards_two_cars() {
        let calls: Vec<(Floor, Floor)> = (0..7).map(|_| (3, 5)).collect();
        let mut shadows = vec![car(0, 15, 3, 0, &[5]), car(1, 15, 3, 0, &[5])];
        let mut wl = waiting(&calls);
        let out = resolve(9, &mut shadows, &mut wl, vec![attempt(0, 3, &[5]), attempt(1, 3, &[5])]);

        let a = out[0].people();
        let b = out[1].people();
        assert!(a.len() <= 3 && b.len() <= 3);
        assert_eq!(a.len() + b.len(), 6);
        assert!(a.iter().all(|id| !b.contains(id)));
        assert_eq!(wl.list_for(3).len(), 1);
        assert_eq!(shadows[0].onboard_count() + shadows[1].onboard_count(), 6);
    }

    #[test]
    fn random_tie_break_is_seeded() {
        let pick = |seed| {
            let mut shadows = vec![car(0, 15, 3, 0, &[5]), car(1, 15, 3, 0, &[5])];
            let mut wl = waiting(&[(3, 5)]);
            let out = resolve(seed, &mut shadows, &mut wl, vec![attempt(0, 3, &[5]), attempt(1, 3, &[5])]);
            out.iter().position(|e| !e.people().is_empty()).unwrap()
        };
        let picks: Vec<usize> = (0..32).map(pick).collect();
        assert_eq!(picks, (0..32).map(pick).collect::<Vec<_>>());
        assert!(picks.contains(&0) && picks.contains(&1));
    }

    #[test]
    fn floors_resolve_independently() {
        let mut shadows = vec![car(0, 15, 2, 0, &[5]), car(1, 15, 3, 0, &[5])];
        let mut wl = waiting(&[(2, 5), (3, 5)]);
        let out = resolve(1, &mut shadows, &mut wl, vec![attempt(1, 3, &[5]), attempt(0, 2, &[5])]);
        assert_eq!(out[0].kind, EventKind::LoadingFirst { floor: 2, people: vec![PersonId(0)] });
        assert_eq!(out[1].kind, EventKind::LoadingFirst { floor: 3, people: vec![PersonId(1)] });
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use lift_building::NoArrivals;
    use lift_strategy::IdleStrategy;

    use super::*;
    use crate::{SimBuilder, SimError};

    #[test]
    fn builds_one_start_event_per_car() {
        let config = SimConfig { starting_floors: vec![1, 4, 9], ..SimConfig::default() };
        let sim = SimBuilder::new(config, vec![IdleStrategy; 3], NoArrivals).build().unwrap();
        assert_eq!(sim.shadows.len(), 3);
        assert_eq!(sim.queue.len(), 3);
        assert_eq!(sim.queue.next_time(), Some(T0));
        let starts: Vec<Floor> = sim.queue.iter().map(|(_, e)| e.floor()).collect();
        assert_eq!(starts, vec![1, 4, 9]);
        assert_eq!(sim.now(), T0);
    }

    #[test]
    fn strategy_count_mismatch_errors() {
        let config = SimConfig::default();
        let err = SimBuilder::new(config, vec![IdleStrategy], NoArrivals).build().err().unwrap();
        assert!(matches!(
            err,
            SimError::ElevatorCountMismatch { expected: 2, got: 1, what: "strategies" }
        ));
    }

    #[test]
    fn invalid_config_errors() {
        let config = SimConfig { elevator_capacity: 0, ..one_car(5) };
        let err = SimBuilder::new(config, vec![IdleStrategy], NoArrivals).build().err().unwrap();
        assert!(matches!(err, SimError::Core(_)));
    }

    #[test]
    fn waiting_list_size_must_match() {
        let err = SimBuilder::new(one_car(5), vec![IdleStrategy], NoArrivals)
            .waiting_list(WaitingList::new(4))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn initial_people_are_counted() {
        let sim = SimBuilder::new(one_car(5), vec![IdleStrategy], NoArrivals)
            .waiting_list(waiting(&[(2, 4), (3, 1)]))
            .build()
            .unwrap();
        assert_eq!(sim.stats.generated, 2);
        assert_eq!(sim.next_person, PersonId(2));
        assert_eq!(sim.people_in_system(), 2);
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario {
    use std::collections::VecDeque;

    use lift_building::{NoArrivals, ScheduledArrivals};
    use lift_strategy::{IdleStrategy, NearestCallStrategy, Strategy, StrategyError, StrategyView};

    use super::*;
    use crate::{NoopObserver, SimBuilder, SimError};

    /// Returns canned plans in order, then stays put.
    struct Scripted(VecDeque<Vec<Floor>>);

    impl Strategy for Scripted {
        fn choose_next_floors(&mut self, view: &StrategyView<'_>) -> Vec<Floor> {
            self.0.pop_front().unwrap_or_else(|| vec![view.current_floor])
        }
    }

    fn expected_trip() -> Vec<(SimTime, ElevatorId, &'static str)> {
        let e = ElevatorId(0);
        vec![
            (T0,      e, "ElevatorStarts"),
            (T0 + 18, e, "ArrivesAtFloor"),
            (T0 + 21, e, "DoorOpening"),
            (T0 + 30, e, "LoadingFirst"),
            (T0 + 33, e, "DoorClosing"),
            (T0 + 57, e, "ArrivesAtFloor"),
            (T0 + 60, e, "DoorOpening"),
            (T0 + 69, e, "UnloadingFirst"),
            (T0 + 72, e, "StoppingAtFloor"),
        ]
    }

    #[test]
    fn single_trip_timeline() {
        let mut sim = SimBuilder::new(one_car(5), vec![NearestCallStrategy], NoArrivals)
            .waiting_list(waiting(&[(2, 4)]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let report = sim.run(&mut rec).unwrap();

        assert_eq!(rec.events, expected_trip());
        assert_eq!(report.transported, 1);
        assert_eq!(report.max_wait_secs(), Some(69));
        assert_eq!(report.last_event_time, Some(T0 + 72));
        assert_eq!(report.elevators[0].final_floor, 4);
        assert!(report.all_stopped());
        assert_eq!(rec.ended, Some(report.end_time));
        assert_eq!(rec.ticks, 25);
    }

    #[test]
    fn scripted_strategy_follows_its_plan() {
        let script = Scripted(VecDeque::from([vec![2, 4], vec![4]]));
        let mut sim = SimBuilder::new(one_car(5), vec![script], NoArrivals)
            .waiting_list(waiting(&[(2, 4)]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let report = sim.run(&mut rec).unwrap();
        assert_eq!(rec.events, expected_trip());
        assert_eq!(report.transported, 1);
    }

    #[test]
    fn invalid_plan_is_fatal() {
        let script = Scripted(VecDeque::from([vec![0]]));
        let mut sim = SimBuilder::new(one_car(5), vec![script], NoArrivals).build().unwrap();
        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            SimError::Strategy(StrategyError::FloorOutOfRange { floor: 0, .. })
        ));

        let script = Scripted(VecDeque::from([vec![]]));
        let mut sim = SimBuilder::new(one_car(5), vec![script], NoArrivals).build().unwrap();
        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Strategy(StrategyError::Empty { .. })));
    }

    #[test]
    fn two_cars_one_person() {
        let config = SimConfig { starting_floors: vec![1, 1], ..one_car(15) };
        let mut sim = SimBuilder::new(config, vec![NearestCallStrategy, NearestCallStrategy], NoArrivals)
            .waiting_list(waiting(&[(1, 5)]))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.transported, 1);
        assert_eq!(report.elevators.iter().map(|e| e.loaded).sum::<u64>(), 1);
        assert!(report.all_stopped());
        assert_eq!(report.left_waiting + report.left_onboard(), 0);
    }

    #[test]
    fn scheduled_arrival_is_served() {
        let config = SimConfig { arrivals_end: T0 + 60, ..one_car(15) };
        let calls = vec![ScheduledCall { time: T0 + 9, floor: 3, name: "late".into(), destination: 1 }];
        let mut sim = SimBuilder::new(config, vec![NearestCallStrategy], ScheduledArrivals::new(calls))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let report = sim.run(&mut rec).unwrap();

        assert_eq!(rec.arrivals, vec![(T0 + 9, 3, PersonId(0))]);
        assert_eq!(report.generated, 1);
        assert_eq!(report.transported, 1);
        assert!(report.all_stopped());
    }

    #[test]
    fn capacity_limits_a_trip() {
        let calls: Vec<(Floor, Floor)> = (0..4).map(|_| (1, 3)).collect();
        let mut sim = SimBuilder::new(one_car(2), vec![NearestCallStrategy], NoArrivals)
            .waiting_list(waiting(&calls))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.transported, 4);
        assert_eq!(report.elevators[0].max_load, 2);
    }

    #[test]
    fn boarding_and_alighting_in_batches() {
        let calls: Vec<(Floor, Floor)> = (0..5).map(|_| (2, 3)).collect();
        let mut sim = SimBuilder::new(one_car(15), vec![NearestCallStrategy], NoArrivals)
            .waiting_list(waiting(&calls))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let report = sim.run(&mut rec).unwrap();

        let e = ElevatorId(0);
        assert_eq!(
            rec.events,
            vec![
                (T0,      e, "ElevatorStarts"),
                (T0 + 18, e, "ArrivesAtFloor"),
                (T0 + 21, e, "DoorOpening"),
                (T0 + 30, e, "LoadingFirst"),
                (T0 + 36, e, "LoadingNext"),
                (T0 + 39, e, "DoorClosing"),
                (T0 + 57, e, "ArrivesAtFloor"),
                (T0 + 60, e, "DoorOpening"),
                (T0 + 69, e, "UnloadingFirst"),
                (T0 + 75, e, "UnloadingNext"),
                (T0 + 78, e, "StoppingAtFloor"),
            ]
        );
        assert_eq!(report.transported, 5);
        assert_eq!(report.elevators[0].max_load, 5);
        assert_eq!(report.max_wait_secs(), Some(75));
    }

    #[test]
    fn end_of_day_stops_a_running_car() {
        let config = SimConfig {
            arrivals_end: T0 + 300,
            end_of_day:   T0 + 30,
            ..one_car(15)
        };
        let mut sim = SimBuilder::new(config, vec![IdleStrategy], NoArrivals).build().unwrap();
        let mut rec = Recorder::default();
        let report = sim.run(&mut rec).unwrap();

        assert_eq!(report.end_time, T0 + 30);
        assert_eq!(rec.ended, Some(T0 + 30));
        assert_eq!(rec.ticks, 10);
        assert!(!report.all_stopped());
        assert!(!report.elevators[0].stopped);
        assert!(report.to_string().contains("(still running)"));
    }

    #[test]
    fn run_ticks_ignores_end_conditions() {
        let mut sim = SimBuilder::new(one_car(5), vec![NearestCallStrategy], NoArrivals).build().unwrap();
        sim.run_ticks(10, &mut NoopObserver).unwrap();
        assert_eq!(sim.now(), T0 + 30);
        assert!(sim.is_finished());
    }
}

// ── Whole-day invariants ──────────────────────────────────────────────────────

#[cfg(test)]
mod day {
    use lift_building::{AffluenceArrivals, AffluenceTable};
    use lift_strategy::{NearestCallStrategy, Strategy, SweepStrategy};

    use super::*;
    use crate::{arrivals_rng, NoopObserver, Sim, SimBuilder};

    fn names() -> Vec<String> {
        vec!["Ada".into(), "Grace".into(), "Linus".into()]
    }

    fn day<S: Strategy>(seed: u64, strategies: Vec<S>) -> Sim<S, AffluenceArrivals> {
        let config = SimConfig { seed, ..SimConfig::default() };
        let arrivals = AffluenceArrivals::new(
            AffluenceTable::working_day(),
            names(),
            config.max_floor,
            arrivals_rng(&config),
        )
        .unwrap();
        SimBuilder::new(config, strategies, arrivals).build().unwrap()
    }

    #[test]
    fn conservation_capacity_and_one_pending_event() {
        let mut sim = day(10, vec![SweepStrategy::new(), SweepStrategy::new()]);
        while !sim.is_finished() {
            sim.step(&mut NoopObserver).unwrap();
            assert_eq!(
                sim.stats.generated,
                sim.people_in_system() as u64 + sim.stats.transported,
                "at {}",
                sim.now()
            );
            for shadow in &sim.shadows {
                assert!(shadow.onboard_count() <= shadow.capacity());
                assert_eq!(sim.queue.pending_for(shadow.id()), usize::from(shadow.is_running()));
            }
        }
        let report = sim.report();
        assert!(report.generated > 0);
        assert!(report.all_stopped());
        assert_eq!(report.transported, report.generated);
        assert_eq!(report.waits.total(), report.transported);
        assert!(report.end_time <= SimConfig::default().end_of_day);
    }

    #[test]
    fn same_seed_same_day() {
        let a = day(7, vec![SweepStrategy::new(), SweepStrategy::new()]).run(&mut NoopObserver).unwrap();
        let b = day(7, vec![SweepStrategy::new(), SweepStrategy::new()]).run(&mut NoopObserver).unwrap();
        assert_eq!(a, b);

        let c = day(8, vec![SweepStrategy::new(), SweepStrategy::new()]).run(&mut NoopObserver).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn nearest_call_serves_everyone() {
        let report = day(3, vec![NearestCallStrategy, NearestCallStrategy]).run(&mut NoopObserver).unwrap();
        assert!(report.all_stopped());
        assert_eq!(report.transported, report.generated);
        assert_eq!(report.left_waiting, 0);
        assert_eq!(report.left_onboard(), 0);
    }
}
