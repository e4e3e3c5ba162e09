mod gravity;

/// Derive macro generating an implementation of the trait `Position`.
#[proc_macro_derive(Position)]
pub fn position_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    gravity::impl_position(syn::parse(input))
        .unwrap_or_else(|e| syn::Error::to_compile_error(&e).into())
}

/// Derive macro generating an implementation of the trait `Mass`.
#[proc_macro_derive(Mass)]
pub fn mass_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    gravity::impl_mass(syn::parse(input))
        .unwrap_or_else(|e| syn::Error::to_compile_error(&e).into())
}

/// Derive macro generating an implementation of the trait `Radius`.
#[proc_macro_derive(Radius)]
pub fn radius_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    gravity::impl_radius(syn::parse(input))
        .unwrap_or_else(|e| syn::Error::to_compile_error(&e).into())
}

fn get_field<'a>(name: &str, data_struct: &'a syn::DataStruct) -> Option<&'a syn::Field> {
    data_struct
        .fields
        .iter()
        .find(|field| field.ident.as_ref().is_some_and(|ident| ident == name))
}
