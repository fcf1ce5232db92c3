use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Expr,
    Generics,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// The arguments that can be passed to the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Parse one `tag = expr` pair and apply it to itself.
    fn parse_arg(&mut self, input: ParseStream) -> Result<()> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        let slot = match ident.to_string().as_str() {
            "message" => &mut self.message,
            "labels" => &mut self.labels,
            "help" => &mut self.help,
            other => return Err(syn::Error::new_spanned(&ident, format!("unknown tag `{}`", other))),
        };
        if slot.is_some() {
            return Err(syn::Error::new_spanned(&ident, format!("duplicate tag `{}`", ident)));
        }
        *slot = Some(input.parse()?);

        Ok(())
    }
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        while !input.is_empty() {
            args.parse_arg(input)?;
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// The target struct to derive `ErrorKind` for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub generics: Generics,
    pub message: Expr,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        // outer attributes include the doc comments, which are skipped
        let attributes = input.call(Attribute::parse_outer)?;
        let item = input.parse::<ItemStruct>()?;

        let args = match attributes.iter().find(|attr| attr.path().is_ident("error")) {
            Some(attr) => attr.parse_args::<ErrorArgs>()?,
            None => ErrorArgs::default(),
        };
        let message = args.message.ok_or_else(|| syn::Error::new_spanned(
            &item.ident,
            "`ErrorKind` requires `#[error(message = ...)]`",
        ))?;

        Ok(ErrorKindTarget {
            name: item.ident,
            generics: item.generics,
            message,
            labels: args.labels,
            help: args.help,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let message = &self.message;
        let labels = match &self.labels {
            Some(labels) => quote! {
                builder = builder.with_labels(
                    (#labels)
                        .into_iter()
                        .zip(spans.iter())
                        .map(|(label_str, span)| {
                            let label_str = label_str.to_string();
                            let mut label = ariadne::Label::new((src_id, span.clone()))
                                .with_color(calc_error::EXPR);

                            if !label_str.is_empty() {
                                label = label.with_message(label_str);
                            }

                            label
                        })
                        .collect::<Vec<_>>()
                );
            },
            None => quote! {},
        };
        let help = match &self.help {
            Some(help) => quote! { Some((#help).to_string()) },
            None => quote! { None::<String> },
        };

        tokens.extend(quote! {
            fn message(&self) -> String {
                (#message).to_string()
            }

            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                let offset = spans.first().map_or(0, |span| span.start);
                let help: Option<String> = #help;

                // ariadne only renders help below a labelled span, so with no spans the help
                // goes on its own line of the message
                let message = match &help {
                    Some(help) if spans.is_empty() => format!("{}\nhelp: {}", self.message(), help),
                    _ => self.message(),
                };

                #[allow(unused_mut)]
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(message);

                #labels
                if let (Some(help), false) = (help, spans.is_empty()) {
                    builder.set_help(help);
                }
                builder.finish()
            }
        });
    }
}
