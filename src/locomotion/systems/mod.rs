//! Locomotion domain: system modules for the traversal state machine.

pub(crate) mod contacts;
pub(crate) mod input;
pub(crate) mod jumps;
pub(crate) mod velocity;

pub(crate) use contacts::{
    detect_ground, probe_surface_contacts, ride_support_surfaces, translate_trigger_events,
};
pub(crate) use input::read_input;
pub(crate) use jumps::{
    consume_deferred_actions, handle_jump_pressed, handle_jump_released, handle_surface_contacts,
    handle_use_pressed,
};
pub(crate) use velocity::integrate_velocity;
