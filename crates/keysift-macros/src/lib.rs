//! Proc macros for keysift.
//!
//! # Derive Macros
//!
//! - [`Record`] - Generate field access for filtering struct collections
//!
//! The generated code refers to the `keysift` crate by absolute path, so the
//! deriving crate must depend on `keysift`.

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Record` trait for filterable structs.
///
/// Only fields carrying a `#[sift(...)]` kind are exposed. Everything else
/// reads as a missing field.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `Text` | Text field (`String`, `&str`, anything that derefs to `str`) |
/// | `Number` | Numeric field of any primitive integer or float type |
/// | `Bool` | Boolean field |
/// | `Nested` | Field whose type implements `Record`; dot-paths descend into it |
/// | `opt` | With a kind: the field is an `Option<_>`, `None` reads as null |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Use a custom name in specifiers |
/// | `ty = "..."` | Kind given as a string (`"text"`, `"number"`, `"bool"`, `"nested"`) |
///
/// # Generated Code
///
/// The macro generates:
///
/// 1. Field name constants (e.g., `Post::TITLE`, `Post::COMMENTS`)
/// 2. Implementation of `Record::field()`
/// 3. Implementation of `AsValue`, so the struct can itself be nested
///
/// # Example
///
/// ```ignore
/// use keysift::{Filter, MatchMode, Record};
///
/// #[derive(Record)]
/// struct Comment {
///     #[sift(Number)]
///     id: u32,
///     #[sift(Text)]
///     text: String,
/// }
///
/// #[derive(Record)]
/// struct Post {
///     #[sift(Text)]
///     title: String,
///     #[sift(Nested)]
///     comments: Comment,
///     #[sift(Text, opt)]
///     author: Option<String>,
///     #[sift(skip)]
///     internal_id: u64,
/// }
///
/// let posts = vec![Post {
///     title: "Release".into(),
///     comments: Comment { id: 1, text: "hello world".into() },
///     author: None,
///     internal_id: 9,
/// }];
///
/// let filter = Filter::builder("hello")
///     .field("comments.text")
///     .mode(MatchMode::Contains)
///     .build()
///     .unwrap();
///
/// assert_eq!(filter.filter(&posts).len(), 1);
/// ```
#[proc_macro_derive(Record, attributes(sift))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
