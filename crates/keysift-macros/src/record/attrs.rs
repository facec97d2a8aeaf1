//! `#[sift(...)]` field attribute parsing.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Error, Ident, LitStr, Result};

/// What a field exposes to filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Bool,
    /// A field whose type implements `Record`.
    Nested,
}

impl FieldKind {
    /// Accepts the kind names used in `#[sift(Kind)]` and `ty = "kind"`.
    pub fn parse_name(name: &str, span: Span) -> Result<Self> {
        let kind = match name {
            "Text" | "text" | "String" | "string" => FieldKind::Text,
            "Number" | "number" => FieldKind::Number,
            "Bool" | "bool" | "boolean" => FieldKind::Bool,
            "Nested" | "nested" | "Record" | "record" => FieldKind::Nested,
            other => {
                return Err(Error::new(
                    span,
                    format!("unknown sift kind '{other}', expected Text, Number, Bool or Nested"),
                ))
            }
        };
        Ok(kind)
    }

    fn from_ident(ident: &Ident) -> Result<Self> {
        Self::parse_name(&ident.to_string(), ident.span())
    }
}

/// Everything `#[sift(...)]` says about one field.
#[derive(Debug, Clone)]
pub struct SiftAttr {
    pub kind: Option<FieldKind>,
    /// `Option<_>` field; `None` reads as null.
    pub optional: bool,
    pub skip: bool,
    /// Specifier name, when it differs from the field name.
    pub rename: Option<String>,
    /// Where the kind or rename was written, for diagnostics.
    pub span: Span,
}

impl Default for SiftAttr {
    fn default() -> Self {
        SiftAttr {
            kind: None,
            optional: false,
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl SiftAttr {
    fn set_kind(&mut self, kind: FieldKind, span: Span) -> Result<()> {
        if self.kind.is_some() {
            return Err(Error::new(span, "field kind given twice"));
        }
        self.kind = Some(kind);
        self.span = span;
        Ok(())
    }
}

/// Collects the `#[sift(...)]` attributes of a field.
///
/// A field without any yields the default: no kind, so not exposed.
pub fn parse_sift_attrs(attrs: &[Attribute]) -> Result<SiftAttr> {
    let mut sift = SiftAttr::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("sift")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                sift.skip = true;
                return Ok(());
            }
            if meta.path.is_ident("opt") {
                sift.optional = true;
                return Ok(());
            }
            if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                sift.rename = Some(name.value());
                sift.span = name.span();
                return Ok(());
            }
            if meta.path.is_ident("ty") {
                let name: LitStr = meta.value()?.parse()?;
                let kind = FieldKind::parse_name(&name.value(), name.span())?;
                return sift.set_kind(kind, name.span());
            }

            let ident = meta.path.get_ident().ok_or_else(|| {
                meta.error("expected Text, Number, Bool, Nested, opt, skip, rename or ty")
            })?;
            sift.set_kind(FieldKind::from_ident(ident)?, ident.span())
        })?;

        if sift.optional && sift.kind.is_none() && !sift.skip {
            return Err(Error::new(
                attr.span(),
                "`opt` needs a field kind, e.g. #[sift(Text, opt)]",
            ));
        }
    }

    Ok(sift)
}
