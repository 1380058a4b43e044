use crate::error::AppError;
use crate::models::classify_types::{
    ClassifyOutcome, ClassifyStatus, FileInput, ImageFile, SubmissionInput,
};
use crate::services::classifier::controller::ClassificationController;
use base64::Engine;
use tauri::State;

#[tauri::command]
pub async fn classify(
    controller: State<'_, ClassificationController>,
    file: Option<FileInput>,
    text: Option<String>,
) -> Result<ClassifyOutcome, AppError> {
    let file = file.map(decode_file).transpose()?;
    controller.submit(SubmissionInput { file, text }).await
}

#[tauri::command]
pub async fn get_classification_status(
    controller: State<'_, ClassificationController>,
) -> Result<ClassifyStatus, AppError> {
    Ok(ClassifyStatus {
        in_flight: controller.is_in_flight(),
    })
}

#[tauri::command]
pub async fn get_results(
    controller: State<'_, ClassificationController>,
) -> Result<ClassifyOutcome, AppError> {
    Ok(controller.outcome().await)
}

fn decode_file(file: FileInput) -> Result<ImageFile, AppError> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(&file.data)?;
    Ok(ImageFile {
        name: file.name,
        size: file.size,
        media_type: file.media_type,
        bytes,
    })
}
