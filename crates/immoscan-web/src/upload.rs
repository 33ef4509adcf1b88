use axum::extract::Multipart;

use crate::error::ApiError;

/// An uploaded file with its data and declared filename.
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Pull the `file` field out of a multipart upload.
///
/// A missing or empty file is the one client error the extraction route
/// reports; everything after this point always answers 200.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<UploadedFile, ApiError> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read form field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file data: {}", e)))?
                    .to_vec();
                file = Some(UploadedFile { filename, data });
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    match file {
        Some(file) if !file.data.is_empty() => Ok(file),
        _ => Err(ApiError::BadRequest("No file provided".to_string())),
    }
}
