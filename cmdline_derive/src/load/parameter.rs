use crate::load::{incompatible_error, unknown_error};
use crate::model::{DeriveParameter, DeriveValue, IntermediateAttributes};
use std::collections::HashSet;

const SINGLETONS: [&str; 3] = ["next", "presence", "skip"];
const PAIRS: [&str; 1] = ["switch"];

impl DeriveParameter {
    /// Load the parameter for a named field.
    /// A `#[cmdline(skip)]` field loads as `None`.
    pub(crate) fn load(value: &syn::Field) -> Result<Option<Self>, syn::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new(
                    proc_macro2::Span::call_site(),
                    "Invalid - fields must be named.",
                ))
            }
        };
        let attributes = IntermediateAttributes::load(&value.attrs)?;

        for singleton in &attributes.singletons {
            if !SINGLETONS.contains(&singleton.as_str()) {
                return Err(unknown_error(field_name.span(), singleton));
            }
        }

        for key in attributes.pairs.keys() {
            if !PAIRS.contains(&key.as_str()) {
                return Err(unknown_error(field_name.span(), &format!("{key} = ..")));
            }
        }

        let explicit_next = attributes.singletons.contains("next");
        let explicit_presence = attributes.singletons.contains("presence");
        let skip = attributes.singletons.contains("skip");
        let switches: Vec<DeriveValue> = attributes
            .pairs
            .get("switch")
            .cloned()
            .unwrap_or_default();

        if explicit_next && explicit_presence {
            return Err(incompatible_error(
                &field_name,
                "#[cmdline(next)]",
                "#[cmdline(presence)]",
            ));
        }

        if skip {
            for (condition, name) in [
                (explicit_next, "#[cmdline(next)]"),
                (explicit_presence, "#[cmdline(presence)]"),
                (!switches.is_empty(), "#[cmdline(switch = ..)]"),
            ] {
                if condition {
                    return Err(incompatible_error(&field_name, "#[cmdline(skip)]", name));
                }
            }

            return Ok(None);
        }

        if switches.is_empty() {
            return Err(syn::Error::new(
                field_name.span(),
                format!(
                    "Invalid - field '{field_name}' requires `#[cmdline(switch = ..)]` (or `#[cmdline(skip)]`)."
                ),
            ));
        }

        let mut seen = HashSet::new();

        for switch in &switches {
            let literal: syn::LitStr = syn::parse2(switch.tokens.clone()).map_err(|_| {
                syn::Error::new(
                    field_name.span(),
                    format!(
                        "Invalid - switch for field '{field_name}' must be a string literal, found `{}`.",
                        switch.tokens
                    ),
                )
            })?;
            let switch_value = literal.value();

            if switch_value.is_empty() {
                return Err(syn::Error::new(
                    literal.span(),
                    format!("Invalid - switch for field '{field_name}' cannot be empty."),
                ));
            }

            if !seen.insert(switch_value.clone()) {
                return Err(syn::Error::new(
                    literal.span(),
                    format!(
                        "Invalid - cannot duplicate the switch '{switch_value}' for field '{field_name}'."
                    ),
                ));
            }
        }

        let consumes_next = if explicit_next {
            true
        } else if explicit_presence {
            false
        } else {
            // Flags are presence-only, everything else takes the following token.
            !is_bool(&value.ty)
        };

        Ok(Some(DeriveParameter {
            field_name,
            switches,
            consumes_next,
        }))
    }
}

fn is_bool(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(path) => path.qself.is_none() && path.path.is_ident("bool"),
        _ => false,
    }
}
