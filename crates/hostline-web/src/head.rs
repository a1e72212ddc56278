//! Document head tags

use hostline_core::PageMeta;

/// Set the document title and meta description
pub fn apply_meta(meta: &PageMeta) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    document.set_title(&meta.document_title());

    if let Ok(Some(tag)) = document.query_selector("meta[name='description']") {
        let _ = tag.set_attribute("content", &meta.description);
    }
}

/// Meta for pages whose copy lives in the component itself
pub fn static_meta(title: &str, description: &str, path: &str) -> PageMeta {
    PageMeta {
        title: title.into(),
        description: description.into(),
        path: path.into(),
    }
}
