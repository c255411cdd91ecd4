//! The per-elevator state machine.
//!
//! [`transition`] consumes the event that just fired for one elevator,
//! applies its effects to that elevator's shadow and the floor queues, calls
//! the elevator's strategy hooks, and returns the elevator's next event.
//!
//! ```text
//! ElevatorStarts ─► plan ─┬─► AttemptToLoadFirst (doors closed)
//!                         └─► StandByAtFloor | StoppingAtFloor
//! ArrivesAtFloor ─► DoorOpening
//! DoorOpening    ─┬─► UnloadingFirst
//!                 └─► plan (doors open)
//! Unloading*     ─┬─► UnloadingNext
//!                 └─► plan (doors open)
//! Loading*       ─┬─► AttemptToLoadNext
//!                 └─► DoorClosing
//! DoorClosing    ─► ArrivesAtFloor
//! StandByAtFloor ─┬─► AttemptToLoadFirst (doors open)
//!                 ├─► DoorClosing
//!                 └─► StandByAtFloor | StoppingAtFloor
//! StoppingAtFloor ─► (none)
//! ```
//!
//! Loading attempts are never passed here; the
//! [`LoadingArbiter`][crate::LoadingArbiter] turns them into loading or
//! departure events.

use lift_building::{ShadowElevator, WaitingList};
use lift_core::{ElevatorId, Floor, SimConfig, SimTime};
use lift_strategy::{validate_floors, Direction, Strategy, StrategyView};
use tracing::debug;

use crate::{Event, EventKind, SimError, SimResult, SimStats};

/// Everything one transition may read or change.
///
/// Borrows the fired elevator's shadow and strategy, and the shared floor
/// queues and statistics.
pub struct TransitionContext<'a, S: Strategy> {
    pub now:      SimTime,
    pub config:   &'a SimConfig,
    pub shadow:   &'a mut ShadowElevator,
    pub waiting:  &'a mut WaitingList,
    pub strategy: &'a mut S,
    pub stats:    &'a mut SimStats,
}

/// Apply `event` and return the elevator's next event.
///
/// Returns `Ok(None)` once the elevator has stopped for the day.
pub fn transition<S: Strategy>(ctx: &mut TransitionContext<'_, S>, event: Event) -> SimResult<Option<Event>> {
    let id = event.elevator;
    let next = match event.kind {
        EventKind::ElevatorStarts { floor } => {
            ctx.shadow.starts_at_floor(floor);
            ctx.strategy.on_start(&view(ctx.now, ctx.shadow, ctx.waiting, ctx.config));
            plan_next_leg(ctx, id, false)?
        }

        EventKind::ArrivesAtFloor { to, .. } => {
            ctx.shadow.move_to(to);
            ctx.strategy.on_arrive(&view(ctx.now, ctx.shadow, ctx.waiting, ctx.config));
            EventKind::DoorOpening { floor: to }
        }

        EventKind::DoorOpening { floor } => {
            let batch = ctx.shadow.next_people_to_unload();
            if batch.is_empty() {
                plan_next_leg(ctx, id, true)?
            } else {
                EventKind::UnloadingFirst { floor, people: batch }
            }
        }

        EventKind::UnloadingFirst { floor, people } | EventKind::UnloadingNext { floor, people } => {
            let out = ctx.shadow.unload(&people);
            if out.len() != people.len() {
                return Err(SimError::Invariant(format!(
                    "{id}: unloading {} persons but only {} were onboard",
                    people.len(),
                    out.len()
                )));
            }
            for person in &out {
                ctx.stats.record_trip(ctx.now, person);
                debug!(
                    now = %ctx.now,
                    elevator = %id,
                    person = %person.id(),
                    wait = person.waited_secs(ctx.now),
                    "delivered"
                );
            }
            ctx.strategy.on_unload(&view(ctx.now, ctx.shadow, ctx.waiting, ctx.config), &out);

            let batch = ctx.shadow.next_people_to_unload();
            if batch.is_empty() {
                plan_next_leg(ctx, id, true)?
            } else {
                EventKind::UnloadingNext { floor, people: batch }
            }
        }

        EventKind::LoadingFirst { floor, people } | EventKind::LoadingNext { floor, people } => {
            ctx.strategy.on_load(&view(ctx.now, ctx.shadow, ctx.waiting, ctx.config), &people);
            if ctx.shadow.has_next_people_to_load(ctx.waiting) {
                EventKind::AttemptToLoadNext {
                    floor,
                    planned: ctx.shadow.planned_floors().to_vec(),
                }
            } else {
                EventKind::DoorClosing { floor, next: next_floor(ctx.shadow)? }
            }
        }

        EventKind::DoorClosing { .. } => EventKind::ArrivesAtFloor {
            from: ctx.shadow.current_floor(),
            to:   next_floor(ctx.shadow)?,
        },

        EventKind::StandByAtFloor { floor } => {
            ctx.strategy.on_stand_by(&view(ctx.now, ctx.shadow, ctx.waiting, ctx.config));
            let planned = ask_strategy(ctx, id)?;
            if ctx.shadow.has_next_people_to_load(ctx.waiting) {
                EventKind::AttemptToLoadFirst { floor, planned, doors_open: true }
            } else if !Direction::between(floor, &planned).is_stop() {
                EventKind::DoorClosing { floor, next: next_floor(ctx.shadow)? }
            } else {
                idle(ctx.shadow)
            }
        }

        EventKind::StoppingAtFloor { floor } => {
            ctx.shadow.stopping();
            debug!(now = %ctx.now, elevator = %id, floor, "stopped");
            return Ok(None);
        }

        EventKind::AttemptToLoadFirst { .. } | EventKind::AttemptToLoadNext { .. } => {
            return Err(SimError::Invariant(format!(
                "{id}: loading attempt reached the state machine"
            )));
        }
    };
    Ok(Some(Event::new(id, next)))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn view<'a>(
    now:     SimTime,
    shadow:  &'a ShadowElevator,
    waiting: &'a WaitingList,
    config:  &SimConfig,
) -> StrategyView<'a> {
    StrategyView::new(now, shadow, waiting, config)
}

/// Ask the strategy for a new plan, validate it and store it on the shadow.
fn ask_strategy<S: Strategy>(ctx: &mut TransitionContext<'_, S>, id: ElevatorId) -> SimResult<Vec<Floor>> {
    let floors = ctx
        .strategy
        .choose_next_floors(&view(ctx.now, ctx.shadow, ctx.waiting, ctx.config));
    validate_floors(id, &floors, ctx.config.max_floor, ctx.config.max_planned_floors)?;
    debug!(
        now = %ctx.now,
        elevator = %id,
        floor = ctx.shadow.current_floor(),
        planned = ?floors,
        "plan"
    );
    ctx.shadow.set_planned_floors(floors.clone());
    Ok(floors)
}

/// Decide what to do once the car is free to leave its floor.
fn plan_next_leg<S: Strategy>(
    ctx:        &mut TransitionContext<'_, S>,
    id:         ElevatorId,
    doors_open: bool,
) -> SimResult<EventKind> {
    let planned = ask_strategy(ctx, id)?;
    let floor = ctx.shadow.current_floor();
    if Direction::between(floor, &planned).is_stop() {
        Ok(idle(ctx.shadow))
    } else {
        Ok(EventKind::AttemptToLoadFirst { floor, planned, doors_open })
    }
}

/// Stand by while arrivals are still possible, stop otherwise.
fn idle(shadow: &ShadowElevator) -> EventKind {
    let floor = shadow.current_floor();
    if shadow.has_last_person_arrived() {
        EventKind::StoppingAtFloor { floor }
    } else {
        EventKind::StandByAtFloor { floor }
    }
}

fn next_floor(shadow: &ShadowElevator) -> SimResult<Floor> {
    shadow.next_floor().ok_or(SimError::NoPlannedFloor(shadow.id()))
}
