// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Test attribute macro for the `test_with_tracing` crate.

use quote::quote;
use syn::parse_macro_input;
use syn::spanned::Spanned;
use syn::Error;
use syn::ItemFn;

/// Marks a test that emits tracing output.
///
/// Expands to a plain `#[test]` whose body first calls
/// `test_with_tracing::init()` and then runs the original function, so the
/// return type (`()` or a `Result`) is preserved.
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let attr = proc_macro2::TokenStream::from(attr);
    let item = parse_macro_input!(item as ItemFn);
    expand(attr, item)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(attr: proc_macro2::TokenStream, item: ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    if !attr.is_empty() {
        return Err(Error::new(attr.span(), "no arguments are accepted"));
    }
    if let Some(asyncness) = &item.sig.asyncness {
        return Err(Error::new(asyncness.span(), "async tests are not supported"));
    }
    if !item.sig.inputs.is_empty() {
        return Err(Error::new(item.sig.inputs.span(), "expected 0 arguments"));
    }

    let name = &item.sig.ident;
    let output = &item.sig.output;
    let attrs = &item.attrs;

    // The inner fn keeps its own attributes off the outer test so that
    // `#[should_panic]` and friends apply to the harness entry point.
    let mut inner = item.clone();
    inner.attrs.clear();

    Ok(quote! {
        #[::core::prelude::v1::test]
        #(#attrs)*
        fn #name() #output {
            #inner
            ::test_with_tracing::init();
            #name()
        }
    })
}
