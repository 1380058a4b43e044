use crate::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use tauri::State;

/// Session-scoped dark mode flag. The app starts dark and nothing persists
/// across launches.
pub struct ThemeState {
    dark: AtomicBool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            dark: AtomicBool::new(true),
        }
    }
}

#[tauri::command]
pub fn get_theme(theme: State<'_, ThemeState>) -> Result<bool, AppError> {
    Ok(theme.dark.load(Ordering::Relaxed))
}

#[tauri::command]
pub fn toggle_theme(theme: State<'_, ThemeState>) -> Result<bool, AppError> {
    Ok(!theme.dark.fetch_xor(true, Ordering::Relaxed))
}
