use actix_web::web;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use ::common::error::{AppError, Res};
use gemini::InlineImage;
use pdfium_render::prelude::*;

use crate::dtos::studio::{UploadRequest, UploadResponse};

/// Fixed rasterization scale for floor-plan PDFs; 2.0x of the page's
/// intrinsic size gives the model enough detail to read the plan.
const PDF_RENDER_SCALE: f32 = 2.0;

#[derive(Debug, PartialEq)]
pub enum UploadKind {
    Image,
    Pdf,
}

/// Decides how to normalize an upload. PDFs are recognized by mime type or
/// by the `%PDF-` magic (some clients send them as octet streams); anything
/// else must declare an image mime type.
pub fn classify_upload(mime_type: &str, bytes: &[u8]) -> Res<UploadKind> {
    if bytes.is_empty() {
        return Err(AppError::BadRequest("The uploaded file is empty.".to_string()));
    }
    if mime_type == "application/pdf" || bytes.starts_with(b"%PDF-") {
        return Ok(UploadKind::Pdf);
    }
    if mime_type.starts_with("image/") {
        return Ok(UploadKind::Image);
    }
    Err(AppError::BadRequest(format!(
        "Unsupported file type: {}. Upload an image or a PDF floor plan.",
        mime_type
    )))
}

pub fn png_filename(filename: &str) -> String {
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(filename);
    format!("{}.png", stem)
}

/// Rasterizes page 1 of a PDF to a PNG. Only the first page is ever used;
/// multi-page plans are an explicit product limitation.
pub fn rasterize_pdf_first_page(bytes: &[u8]) -> Res<Vec<u8>> {
    let pdfium = Pdfium::new(
        Pdfium::bind_to_system_library()
            .map_err(|e| AppError::Internal(format!("PDF renderer unavailable: {}", e)))?,
    );

    let document = pdfium.load_pdf_from_byte_slice(bytes, None).map_err(|e| {
        AppError::BadRequest(format!(
            "An error occurred while processing the PDF file. It may be corrupted or in an unsupported format. ({})",
            e
        ))
    })?;

    let page = document
        .pages()
        .first()
        .map_err(|_| AppError::BadRequest("The PDF document has no pages.".to_string()))?;

    let bitmap = page
        .render_with_config(&PdfRenderConfig::new().scale_page_by_factor(PDF_RENDER_SCALE))
        .map_err(|e| AppError::Internal(format!("Failed to render the PDF page: {}", e)))?;

    let width = bitmap.width() as u32;
    let height = bitmap.height() as u32;
    let rgba = bitmap.as_rgba_bytes();

    let buffer = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| AppError::Internal("Failed to convert the rendered page.".to_string()))?;

    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(buffer)
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| AppError::Internal(format!("Failed to encode the rendered page: {}", e)))?;

    Ok(png)
}

/// Normalizes an upload into the canonical image input: raster images pass
/// through unchanged, PDFs become a PNG of their first page. The preview
/// reference is derived from the same bytes.
pub async fn normalize_upload(req: UploadRequest) -> Res<UploadResponse> {
    let bytes = BASE64
        .decode(req.data.as_bytes())
        .map_err(|_| AppError::BadRequest("Failed to read the uploaded file.".to_string()))?;

    match classify_upload(&req.mime_type, &bytes)? {
        UploadKind::Image => {
            let image = InlineImage {
                mime_type: req.mime_type,
                data: req.data,
            };
            let url = image.to_data_url();
            Ok(UploadResponse {
                image: url.clone(),
                preview: url,
                filename: req.filename,
            })
        }
        UploadKind::Pdf => {
            // pdfium is synchronous; keep it off the async workers.
            let png = web::block(move || rasterize_pdf_first_page(&bytes))
                .await
                .map_err(|e| AppError::Internal(format!("PDF rasterization aborted: {}", e)))??;
            let image = InlineImage::from_bytes("image/png", &png);
            let url = image.to_data_url();
            Ok(UploadResponse {
                image: url.clone(),
                preview: url,
                filename: png_filename(&req.filename),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_recognized_by_mime_type() {
        assert_eq!(
            classify_upload("application/pdf", b"%PDF-1.7 ...").unwrap(),
            UploadKind::Pdf
        );
    }

    #[test]
    fn pdf_recognized_by_magic_bytes() {
        assert_eq!(
            classify_upload("application/octet-stream", b"%PDF-1.4 ...").unwrap(),
            UploadKind::Pdf
        );
    }

    #[test]
    fn raster_images_pass_through() {
        assert_eq!(
            classify_upload("image/png", b"\x89PNG...").unwrap(),
            UploadKind::Image
        );
        assert_eq!(
            classify_upload("image/jpeg", b"\xff\xd8\xff...").unwrap(),
            UploadKind::Image
        );
    }

    #[test]
    fn unsupported_and_empty_files_are_rejected() {
        assert!(classify_upload("text/plain", b"hello").is_err());
        assert!(classify_upload("image/png", b"").is_err());
    }

    #[test]
    fn pdf_filenames_map_to_png() {
        assert_eq!(png_filename("floor-plan.pdf"), "floor-plan.png");
        assert_eq!(png_filename("Plan.PDF"), "Plan.png");
        assert_eq!(png_filename("no-extension"), "no-extension.png");
    }

    #[tokio::test]
    async fn image_upload_passes_through_as_data_url() {
        let response = normalize_upload(UploadRequest {
            filename: "room.png".to_string(),
            mime_type: "image/png".to_string(),
            data: BASE64.encode(b"\x89PNG fake"),
        })
        .await
        .unwrap();

        assert!(response.image.starts_with("data:image/png;base64,"));
        assert_eq!(response.image, response.preview);
        assert_eq!(response.filename, "room.png");
    }

    #[test]
    fn corrupted_pdf_fails_with_a_descriptive_error() {
        // Needs the native renderer; nothing to exercise without it.
        if Pdfium::bind_to_system_library().is_err() {
            return;
        }

        let outcome = rasterize_pdf_first_page(b"%PDF-1.7 this is not a real document");

        match outcome {
            Err(AppError::BadRequest(message)) => {
                assert!(message.contains("PDF file"));
            }
            other => panic!("expected a descriptive load error, got {:?}", other.is_ok()),
        }
    }

    #[tokio::test]
    async fn unreadable_payload_fails_with_a_descriptive_error() {
        let outcome = normalize_upload(UploadRequest {
            filename: "plan.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            data: "not base64!!".to_string(),
        })
        .await;

        match outcome {
            Err(AppError::BadRequest(message)) => assert!(message.contains("read")),
            _ => panic!("expected a validation error"),
        }
    }
}
