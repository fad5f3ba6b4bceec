//! Browser interop utilities
//!
//! Both types here tie a browser-side resource to Rust ownership: the
//! resource is acquired in the constructor and released in `Drop`. Held in
//! a component-scoped `Signal<Option<...>>`, the resource lives exactly as
//! long as the component - setting the signal to `None` (or unmounting,
//! which drops the signal) releases it.

use wasm_bindgen::prelude::*;

/// A document event listener that removes itself when dropped.
///
/// The naive way to attach a JS listener from WASM is `Closure::forget()`,
/// which leaks the closure and leaves the listener attached forever.
/// Storing the closure in a struct whose `Drop` deregisters it ties the
/// listener lifetime to Rust ownership instead.
pub struct DocumentEventListener {
    document: web_sys::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DocumentEventListener {
    /// Attach `callback` to `document` for `event_name`.
    ///
    /// The listener stays registered until the returned value is dropped.
    pub fn new(
        document: web_sys::Document,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            document,
            event_name,
            callback,
        }
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// An object URL minted from attachment bytes, revoked on drop.
///
/// Backs the `<img>` preview in the file modal. While the handle is alive
/// the browser pins the blob's memory to the URL; revoking on drop
/// releases it.
pub struct PreviewHandle {
    url: String,
}

impl PreviewHandle {
    /// Mint an object URL for `bytes` declared as `mime_type`.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, String> {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));

        let opts = web_sys::BlobPropertyBag::new();
        opts.set_type(mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|e| format!("failed to create blob: {e:?}"))?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|e| format!("failed to create object URL: {e:?}"))?;

        Ok(Self { url })
    }

    /// The `blob:` URL, valid while this handle is alive.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}
