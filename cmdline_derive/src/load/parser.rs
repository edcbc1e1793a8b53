use crate::load::unknown_error;
use crate::model::{DeriveParameter, DeriveParser, DeriveValue, IntermediateAttributes};
use quote::quote;

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = IntermediateAttributes::load(&value.attrs)?;

        if let Some(singleton) = attributes.singletons.iter().next() {
            return Err(unknown_error(value.ident.span(), singleton));
        }

        for key in attributes.pairs.keys() {
            if key != "program" {
                return Err(unknown_error(value.ident.span(), &format!("{key} = ..")));
            }
        }

        let program = match attributes.pairs.get("program").map(Vec::as_slice) {
            Some([program]) => program.clone(),
            Some(_) => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - parser cannot have multiple `#[cmdline(program = ..)]`.",
                ))
            }
            None => DeriveValue {
                tokens: quote! { env!("CARGO_CRATE_NAME") },
            },
        };

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new(
                value.ident.span(),
                "Invalid - cannot derive `CmdLine` for a generic struct.",
            ));
        }

        match &value.data {
            syn::Data::Struct(ds) => {
                let parameters = match &ds.fields {
                    syn::Fields::Named(fields) => fields
                        .named
                        .iter()
                        .map(DeriveParameter::load)
                        .collect::<Result<Vec<_>, _>>()?
                        .into_iter()
                        .flatten()
                        .collect(),
                    syn::Fields::Unit => Vec::default(),
                    syn::Fields::Unnamed(_) => {
                        return Err(syn::Error::new(
                            value.ident.span(),
                            "Invalid - cannot derive `CmdLine` for a tuple struct.",
                        ))
                    }
                };

                Ok(DeriveParser {
                    struct_name: value.ident.clone(),
                    program_name: program,
                    parameters,
                })
            }
            _ => Err(syn::Error::new(
                value.ident.span(),
                "Invalid - `CmdLine` may only be derived for a struct.",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;
    use rstest::rstest;

    #[test]
    fn construct_derive_parser_empty() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(Default, CmdLine)]
                struct Parameters { }
            "#,
        )
        .unwrap();

        // Execute
        let derive_parser = DeriveParser::try_from(input).unwrap();

        // Verify
        assert_eq!(
            derive_parser,
            DeriveParser {
                struct_name: ident("Parameters"),
                program_name: DeriveValue {
                    tokens: quote! { env!("CARGO_CRATE_NAME") }
                },
                parameters: Vec::default(),
            }
        );
    }

    #[test]
    fn construct_derive_parser_unit() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(Default, CmdLine)]
                struct Parameters;
            "#,
        )
        .unwrap();

        // Execute
        let derive_parser = DeriveParser::try_from(input).unwrap();

        // Verify
        assert_eq!(derive_parser.parameters, Vec::default());
    }

    #[test]
    fn construct_derive_parser() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(Default, CmdLine)]
                #[cmdline(program = "abc")]
                struct Parameters {
                    #[cmdline(switch = "-a")]
                    apple: usize,
                    #[cmdline(skip)]
                    banana: Vec<String>,
                    #[cmdline(switch = "-c")]
                    carrot: bool,
                }
            "#,
        )
        .unwrap();

        // Execute
        let derive_parser = DeriveParser::try_from(input).unwrap();

        // Verify
        assert_eq!(
            derive_parser,
            DeriveParser {
                struct_name: ident("Parameters"),
                program_name: DeriveValue {
                    tokens: Literal::string("abc").into_token_stream()
                },
                parameters: vec![
                    DeriveParameter {
                        field_name: ident("apple"),
                        switches: vec![DeriveValue {
                            tokens: Literal::string("-a").into_token_stream()
                        }],
                        consumes_next: true,
                    },
                    DeriveParameter {
                        field_name: ident("carrot"),
                        switches: vec![DeriveValue {
                            tokens: Literal::string("-c").into_token_stream()
                        }],
                        consumes_next: false,
                    },
                ],
            }
        );
    }

    #[rstest]
    #[case(
        r#"#[cmdline(program = "a", program = "b")] struct Parameters { }"#,
        "Invalid - parser cannot have multiple `#[cmdline(program = ..)]`."
    )]
    #[case(
        r#"#[cmdline(about = "a")] struct Parameters { }"#,
        "Invalid - unknown attribute `#[cmdline(about = ..)]`."
    )]
    #[case(
        r#"#[cmdline(verbose)] struct Parameters { }"#,
        "Invalid - unknown attribute `#[cmdline(verbose)]`."
    )]
    #[case(
        r#"struct Parameters<T> { #[cmdline(switch = "-a")] apple: T }"#,
        "Invalid - cannot derive `CmdLine` for a generic struct."
    )]
    #[case(
        r#"struct Parameters(u32);"#,
        "Invalid - cannot derive `CmdLine` for a tuple struct."
    )]
    #[case(
        r#"enum Parameters { Apple }"#,
        "Invalid - `CmdLine` may only be derived for a struct."
    )]
    #[case(
        r#"struct Parameters { apple: u32 }"#,
        "Invalid - field 'apple' requires `#[cmdline(switch = ..)]` (or `#[cmdline(skip)]`)."
    )]
    fn construct_derive_parser_invalid(#[case] input: &str, #[case] expected: &str) {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(input).unwrap();

        // Execute
        let error = DeriveParser::try_from(input).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), expected);
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
