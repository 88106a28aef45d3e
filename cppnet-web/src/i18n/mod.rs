mod document;
mod format;

pub use cppnet_core::i18n::{Locale, TextDirection, t, tr};
pub use document::apply_document_locale;
pub use format::{fmt_currency, fmt_number, fmt_trend};
