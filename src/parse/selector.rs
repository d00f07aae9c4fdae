use std::{ops::Deref, sync::OnceLock};

use scraper::Selector;

/// A CSS selector held as source text and compiled the first time it is
/// matched. Declared through [`static_selector!`].
#[derive(Debug)]
pub struct LazySelector {
    css: &'static str,
    compiled: OnceLock<Selector>,
}

impl LazySelector {
    pub const fn new(css: &'static str) -> Self {
        Self {
            css,
            compiled: OnceLock::new(),
        }
    }

    #[must_use]
    pub const fn css(&self) -> &'static str {
        self.css
    }

    fn compile(css: &str) -> Selector {
        Selector::parse(css).unwrap_or_else(|e| panic!("selector `{css}` does not parse: {e:?}"))
    }
}

impl Deref for LazySelector {
    type Target = Selector;

    fn deref(&self) -> &Selector {
        self.compiled.get_or_init(|| Self::compile(self.css))
    }
}

/// Declares one or more selector statics, `NAME <- "css"`, separated by `;`.
#[macro_export]
macro_rules! static_selector {
    ($($name: ident <- $css: literal);+ $(;)?) => {
        $(
            static $name: $crate::parse::selector::LazySelector =
                $crate::parse::selector::LazySelector::new($css);
        )+
    };
}
