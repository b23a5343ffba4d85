//! Platform glue for delivering export files and mirroring the theme onto the
//! page body.

use super::view::Theme;

/// Where an export ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The browser took over (download prompt or automatic save).
    BrowserDownload,
    /// Written to disk at this path.
    Saved(String),
}

pub async fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<Delivery, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(Delivery::BrowserDownload)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        fs::write(&path, &bytes).map_err(|err| err.to_string())?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "export written");
        Ok(Delivery::Saved(path.to_string_lossy().to_string()))
    }
}

/// The user's download folder, or the app data `exports/` folder when the OS
/// does not report one.
#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    if let Some(dir) = directories::UserDirs::new().and_then(|u| u.download_dir().map(|d| d.to_path_buf())) {
        return Ok(dir);
    }
    let dirs = directories::ProjectDirs::from("com", "TextLens", "TextLens")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

/// Mirror the theme class onto `<body>` so the page background follows it.
pub fn apply_body_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            body.set_class_name(theme.css_class());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // The desktop webview renders the root container edge to edge.
        let _ = theme;
    }
}

