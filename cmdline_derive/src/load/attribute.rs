use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use syn::spanned::Spanned;

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut attributes = IntermediateAttributes::default();

        for expression in expressions {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    attributes
                        .pairs
                        .entry(left.to_string())
                        .or_default()
                        .push(DeriveValue {
                            tokens: assignment.right.to_token_stream(),
                        });
                }
                syn::Expr::Path(ref path) if path.path.get_ident().is_some() => {
                    attributes
                        .singletons
                        .insert(path.to_token_stream().to_string());
                }
                _ => {
                    return Err(syn::Error::new(
                        expression.span(),
                        format!(
                            "Invalid - unparseable attribute `{}`.",
                            expression.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(attributes)
    }
}

impl IntermediateAttributes {
    /// Load and merge all the `#[cmdline(..)]` attributes, ignoring any others.
    pub(crate) fn load(attributes: &[syn::Attribute]) -> Result<Self, syn::Error> {
        let mut merged = IntermediateAttributes::default();

        for attribute in attributes {
            if attribute.path().is_ident("cmdline") {
                let IntermediateAttributes { singletons, pairs } =
                    IntermediateAttributes::try_from(attribute)?;
                merged.singletons.extend(singletons);

                for (key, values) in pairs {
                    merged.pairs.entry(key).or_default().extend(values);
                }
            }
        }

        Ok(merged)
    }
}
