//! String manipulation helpers.
//!
//! Every transform is a free function in one of the `stringtools-*` crates,
//! re-exported here by concern. [`StrExt`] puts the same transforms on `str`
//! with their usual defaults, and [`Toolkit`] adds configurable defaults and
//! swappable markup and URI codecs.
//!
//! ```
//! use stringtools::StrExt;
//!
//! assert_eq!("Hello World".camel_case(), "helloWorld");
//! assert_eq!("the cat in the hat".heading_case(), "The Cat in the Hat");
//! assert_eq!("Hello, World!".uri_slug(), "hello-world");
//! ```

mod ext;
mod toolkit;

pub use ext::StrExt;
pub use toolkit::Toolkit;

pub use stringtools_case as case;
pub use stringtools_codec as codec;
pub use stringtools_config as config;
pub use stringtools_error as error;
pub use stringtools_filter as filter;
pub use stringtools_logging as logging;
pub use stringtools_random as random;
pub use stringtools_whitespace as whitespace;
pub use stringtools_words as words;

pub use stringtools_case::PluralizeOptions;
pub use stringtools_codec::{HtmlEntityCodec, MarkupCodec, PercentUriCodec, UriCodec};
pub use stringtools_config::ToolkitConfig;
pub use stringtools_error::{ErrorCategory, Result, TextError};
pub use stringtools_random::RandomStringOptions;
pub use stringtools_words::{WordTransform, WordsOptions};
