/// The building-entry scene preset.
pub mod building;
/// Clickable scene controls.
pub mod hotspot;
