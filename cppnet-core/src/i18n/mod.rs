mod dictionary;
mod locale;

pub use dictionary::{Dictionary, DictionaryError, t, tr};
pub use locale::{Locale, TextDirection};
