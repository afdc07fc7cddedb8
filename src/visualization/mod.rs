pub mod scene;
pub mod render_loop;
pub mod beam_vis2d;
