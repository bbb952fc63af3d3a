//! Value objects - Immutable objects defined by their attributes

mod pagination;
mod reservation;

pub use pagination::{Page, PageRequest};
pub use reservation::ReservationLine;
