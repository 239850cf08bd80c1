//! yaldacore — shared library for the yaldaEdit application

pub mod audio;
pub mod confetti;
pub mod encourage;
pub mod repaint;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use repaint::RepaintController;
pub use theme::YaldaTheme;
