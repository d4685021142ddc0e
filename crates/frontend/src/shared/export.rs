/// Browser download of files returned by the API (PDF receipts, Excel exports)
use contracts::shared::api::ApiError;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// MIME type from the file extension
pub fn mime_for(file_name: &str) -> &'static str {
    if file_name.ends_with(".pdf") {
        MIME_PDF
    } else if file_name.ends_with(".xlsx") {
        MIME_XLSX
    } else {
        "application/octet-stream"
    }
}

fn browser_error(what: &str, e: impl std::fmt::Debug) -> ApiError {
    ApiError::Browser(format!("{}: {:?}", what, e))
}

/// Wrap bytes in a Blob and start the download
pub fn download_bytes(bytes: &[u8], file_name: &str) -> Result<(), ApiError> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_for(file_name));

    let blob = Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| browser_error("No se pudo crear el archivo", e))?;
    download_blob(&blob, file_name)
}

/// Download through a temporary hidden anchor
fn download_blob(blob: &Blob, file_name: &str) -> Result<(), ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Browser("No window object".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ApiError::Browser("No document object".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ApiError::Browser("No body element".into()))?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| browser_error("Failed to create object URL", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| browser_error("Failed to create anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| browser_error("Failed to cast to anchor", e))?;

    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| browser_error("Failed to set style", e))?;

    body.append_child(&anchor)
        .map_err(|e| browser_error("Failed to append anchor", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| browser_error("Failed to remove anchor", e))?;

    Url::revoke_object_url(&url).map_err(|e| browser_error("Failed to revoke URL", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for("comprobante_12.pdf"), MIME_PDF);
        assert_eq!(mime_for("predicciones_ia_2024-10-15.xlsx"), MIME_XLSX);
        assert_eq!(mime_for("datos.bin"), "application/octet-stream");
    }
}
