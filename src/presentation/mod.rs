pub mod html;

pub use html::{render_filter_options, render_writer_cards, render_writers, PageView};
