mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `calc-error` for the given struct.
///
/// The information of the error is given with the `error` attribute:
/// ```ignore
/// use calc_attrs::ErrorKind;
/// use calc_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("`{}` is not defined", self.name),
///     labels = ["this variable"],
///     help = "bind it before evaluating the expression",
/// )]
/// pub struct UndefinedVariable {
///     pub name: String,
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error. Required.                     |
/// | `labels`    | Texts of the labels pointing at each span of the error, in span order.       |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression. `message` and `help` should evaluate to something that
/// implements [`ToString`]; `labels` should evaluate to something iterable over such values. The
/// expressions are evaluated inside a method on the struct, so fields are available as
/// `self.field`.
///
/// Labels without a matching span are dropped, so errors raised without any source information
/// still produce a valid report. Such a report has no label to hang the help text on, so the help
/// is written on its own line of the message instead.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    let (impl_generics, ty_generics, where_clause) = target.generics.split_for_impl();
    quote! {
        impl #impl_generics ErrorKind for #name #ty_generics #where_clause {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
