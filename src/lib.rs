use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Fields, Ident};

/// `impl From<Struct> for serde_json::Map<String, Value>`, one entry per named field.
#[proc_macro_derive(IntoJsonMap)]
pub fn derive_into_json_map(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let fields = get_struct_idents(&input.data);
    let v: Vec<_> = fields
        .into_iter()
        .map(|x| {
            quote! {
                mp.insert(stringify!(#x).to_string(), serde_json::json!(x.#x));
            }
        })
        .collect();
    let expanded = quote! {
        impl std::convert::From<#struct_name> for serde_json::Map<String, serde_json::Value> {
            fn from(x: #struct_name) -> Self {
                let mut mp = serde_json::Map::new();
                #(#v)*
                mp
            }
        }
    };
    expanded.into()
}

#[proc_macro_derive(GetFieldNames)]
pub fn derive_struct_field_names(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let v = get_struct_idents(&input.data);
    let expanded = quote! {
        impl crate::model::traits::StructFieldNames for #struct_name {
            fn field_names() -> &'static [&'static str] {
                &[#(stringify!(#v),)*]
            }
        }
    };
    expanded.into()
}

/// `impl TryFrom<serde_json::Map<String, Value>>`: absent fields keep their
/// `Default` value, a present field that fails to deserialize is an error
/// naming the field.
#[proc_macro_derive(FromJsonMap)]
pub fn derive_from_json_map(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let v = get_struct_idents(&input.data);

    let expanded = quote! {
        impl std::convert::TryFrom<serde_json::Map<String, serde_json::Value>> for #struct_name {
            type Error = String;
            fn try_from(mut mp: serde_json::Map<String, serde_json::Value>) -> std::result::Result<Self, Self::Error> {
                let mut x = Self::default();
                #(
                    if let Some(val) = mp.remove(stringify!(#v)) {
                        x.#v = serde_json::from_value(val)
                            .map_err(|e| format!("{}: {}", stringify!(#v), e))?;
                    }
                )*
                Ok(x)
            }
        }
    };
    expanded.into()
}

fn get_struct_idents(data: &Data) -> Vec<&Ident> {
    match data {
        Data::Struct(DataStruct { ref fields, .. }) => match fields {
            Fields::Named(ref named_fields) => named_fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect(),
            _ => panic!("Must Named Fields"),
        },
        _ => panic!("derive is Only for struct"),
    }
}
