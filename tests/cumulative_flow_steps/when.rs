//! When steps for cumulative flow BDD scenarios.

use super::world::{FlowWorld, day};
use rstest_bdd_macros::when;
use taskflow::task::domain::compute_flow;

#[when("the cumulative flow is computed as of day {as_of:u32}")]
fn compute_as_of(world: &mut FlowWorld, as_of: u32) -> Result<(), eyre::Report> {
    world.last_result = Some(compute_flow(&world.tasks, None, day(as_of)?));
    Ok(())
}

#[when("the cumulative flow since day {since:u32} is computed as of day {as_of:u32}")]
fn compute_since(world: &mut FlowWorld, since: u32, as_of: u32) -> Result<(), eyre::Report> {
    world.last_result = Some(compute_flow(&world.tasks, Some(day(since)?), day(as_of)?));
    Ok(())
}
