pub mod forces;
pub mod spawn;
pub mod step;

pub use step::advance;
