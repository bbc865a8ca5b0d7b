/// State management module
/// 
/// This module handles all gallery state, including:
/// - The fixed photo list (data.rs)
/// - The gallery widget: reveal latch, tile animations, hover (gallery.rs)
/// - The lightbox overlay state machine (lightbox.rs)
/// - The page scroll lock (scroll.rs)

pub mod data;
pub mod gallery;
pub mod lightbox;
pub mod scroll;
