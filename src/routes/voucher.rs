//! Voucher lookup route handlers

use std::io::Cursor;

use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use image::Luma;
use qrcode::QrCode;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::Voucher;
use crate::AppState;

/// Voucher page template
#[derive(Template)]
#[template(path = "voucher/detail.html")]
struct VoucherTemplate {
    voucher: Voucher,
    status_label: String,
    is_valid: bool,
    qr_data_uri: String,
}

/// Voucher status page, looked up by printed code.
///
/// Codes are printed uppercase; lookups tolerate whatever the guest types.
pub async fn detail(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Html<String>> {
    let code = code.trim().to_uppercase();
    let voucher = db::get_voucher(&state.db, &code).await?;

    let today = Utc::now().date_naive();
    let qr_data_uri = qr_png_data_uri(&voucher.code)?;

    let template = VoucherTemplate {
        status_label: voucher.status_label(today).to_string(),
        is_valid: voucher.effective_status(today) == "active",
        qr_data_uri,
        voucher,
    };

    Ok(Html(template.render()?))
}

/// Render a code as an inline PNG QR, for the check-in desk scanner.
fn qr_png_data_uri(text: &str) -> Result<String> {
    let qr = QrCode::new(text.as_bytes())
        .map_err(|e| AppError::Internal(format!("QR encode failed: {}", e)))?;

    let img = qr.render::<Luma<u8>>().min_dimensions(240, 240).build();

    let mut png = Vec::new();
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| AppError::Internal(format!("QR render failed: {}", e)))?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_data_uri_is_inline_png() {
        let uri = qr_png_data_uri("YS-2026-0042").unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(uri.len() > 100);
    }
}
