use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveParser;

impl From<DeriveParser> for TokenStream2 {
    fn from(value: DeriveParser) -> Self {
        let DeriveParser {
            struct_name,
            program_name,
            parameters,
        } = value;
        let program_name = program_name.tokens;

        let clp = if parameters.is_empty() {
            quote! {
                let clp = CommandLine::new(#program_name);
            }
        } else {
            let fields = parameters
                .into_iter()
                .map(|parameter| parameter.generate(&struct_name))
                .collect::<Vec<_>>();

            quote! {
                let mut clp = CommandLine::new(#program_name);
                #( #fields )*
            }
        };

        quote! {
            impl #struct_name {
                pub fn cmdline_translator() -> Translator<'static, #struct_name> {
                    #clp
                    clp.build()
                }

                pub fn cmdline_parse() -> #struct_name {
                    #struct_name::cmdline_translator().parse()
                }

                pub fn cmdline_parse_tokens(tokens: &[&str]) -> Result<#struct_name, i32> {
                    #struct_name::cmdline_translator().parse_tokens(tokens)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeriveParameter, DeriveValue};
    use proc_macro2::Literal;
    use proc_macro2::Span;
    use quote::ToTokens;

    #[test]
    fn render_derive_parser_empty() {
        // Setup
        let parser = DeriveParser {
            struct_name: ident("my_struct"),
            program_name: DeriveValue {
                tokens: quote! { env!("CARGO_CRATE_NAME") },
            },
            parameters: vec![],
        };

        // Execute
        let token_stream = TokenStream2::from(parser);

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            r#"impl my_struct {
 pub fn cmdline_translator () -> Translator < 'static , my_struct > {
 let clp = CommandLine :: new (env ! ("CARGO_CRATE_NAME")) ;
 clp . build () }
 pub fn cmdline_parse () -> my_struct {
 my_struct :: cmdline_translator () . parse () }
 pub fn cmdline_parse_tokens (tokens : & [& str]) -> Result < my_struct , i32 > {
 my_struct :: cmdline_translator () . parse_tokens (tokens) }
 }
"#,
        );
    }

    #[test]
    fn render_derive_parser() {
        // Setup
        let parser = DeriveParser {
            struct_name: ident("my_struct"),
            program_name: DeriveValue {
                tokens: Literal::string("abc").into_token_stream(),
            },
            parameters: vec![DeriveParameter {
                field_name: ident("my_field"),
                switches: vec![DeriveValue {
                    tokens: Literal::string("-m").into_token_stream(),
                }],
                consumes_next: true,
            }],
        };

        // Execute
        let token_stream = TokenStream2::from(parser);

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            r#"impl my_struct {
 pub fn cmdline_translator () -> Translator < 'static , my_struct > {
 let mut clp = CommandLine :: new ("abc") ;
 clp = clp . add (Descriptor :: new ("my_field" , "-m" , true , | record : & mut my_struct | & mut record . my_field)) ;
 clp . build () }
 pub fn cmdline_parse () -> my_struct {
 my_struct :: cmdline_translator () . parse () }
 pub fn cmdline_parse_tokens (tokens : & [& str]) -> Result < my_struct , i32 > {
 my_struct :: cmdline_translator () . parse_tokens (tokens) }
 }
"#,
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn simple_format(rust_str: String) -> String {
        rust_str
            .replace("{", "{\n")
            .replace("}", "}\n")
            .replace(";", ";\n")
    }
}
