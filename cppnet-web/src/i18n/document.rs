use cppnet_core::i18n::Locale;

/// Mirror `locale` onto the `<html>` element's `lang` and `dir` attributes.
///
/// No-op outside the browser.
pub fn apply_document_locale(locale: Locale) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", locale.code());
            let _ = el.set_attribute("dir", locale.direction().as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::trace!("document locale {locale} ({})", locale.direction().as_str());
    }
}
