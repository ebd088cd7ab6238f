pub mod clock;
pub mod handle;
pub mod render_loop;
pub mod sink;
