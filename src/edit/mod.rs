mod buffer;
mod selection;
mod state;

pub use buffer::*;
pub use selection::*;
pub use state::*;
