mod commands;
pub mod error;
pub mod models;
pub mod services;

use commands::theme::ThemeState;
use services::classifier::controller::ClassificationController;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_window_state::Builder::default().build())
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .setup(|app| {
            app.manage(ClassificationController::from_env());
            app.manage(ThemeState::default());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::classifier::classify,
            commands::classifier::get_classification_status,
            commands::classifier::get_results,
            commands::theme::get_theme,
            commands::theme::toggle_theme,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
