//! Domain entities for monmark.
//!
//! Pure business logic with no infrastructure dependencies: no OS calls, no
//! process spawning, no rendering.  Everything here can be compiled and unit
//! tested on any platform.
//!
//! The modules mirror the data flow: a placement snapshot produces a
//! [`virtual_space::VirtualSpace`], which together with the current canvas
//! size produces a [`mapper::RatioMapper`], which [`layout::LayoutModel`]
//! uses to answer geometry and hit-test queries, which
//! [`controller::InteractionController`] drives from input events.

pub mod controller;
pub mod layout;
pub mod mapper;
pub mod virtual_space;
